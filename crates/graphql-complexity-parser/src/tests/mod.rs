mod block_string_tests;
mod graphql_parser_selection_tests;
mod graphql_parser_value_tests;
mod utils;
