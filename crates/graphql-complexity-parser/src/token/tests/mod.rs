mod graphql_token_tests;
