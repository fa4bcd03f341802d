//! Documents shared by the scoring benchmarks.

/// One connection, one page size.
pub const SIMPLE_QUERY: &str = r#"
query {
    groups(first: 5, sort: FULL_PATH_ASC) {
        edges {
            node {
                id
            }
        }
    }
}
"#;

/// Four levels of nested connections plus fragments and a variable.
pub const NESTED_QUERY: &str = r#"
query Groups($page: Int) {
    groups(first: $page) {
        pageInfo {
            endCursor
            hasNextPage
        }
        edges {
            node {
                ...GroupFields
                decendentGroups(last: 3) {
                    edges {
                        node {
                            ...GroupFields
                            decendentGroups(first: 4) {
                                edges {
                                    node {
                                        ...GroupFields
                                        memberships(first: 10) {
                                            edges {
                                                node {
                                                    id
                                                    role
                                                    namespace {
                                                        ... on Group { fullPath }
                                                        ... on Workspace { fullPath }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fragment GroupFields on Group {
    id
    name
    fullPath
    parent {
        id
        name
    }
}
"#;

/// A mutation whose payload selects a connection.
pub const MUTATION: &str = r#"
mutation {
    createGroup(input: {name: "bench", description: "benchmark group", parentId: "0d253183-aa18-419b-8bc5-d0535f52d8c9"}) {
        group {
            id
            name
            decendentGroups(first: 1) {
                edges {
                    node {
                        id
                        parent {
                            id
                        }
                    }
                }
            }
        }
        problems {
            message
        }
    }
}
"#;

/// `operations` anonymous queries, each selecting `fields` object fields.
pub fn wide_document(operations: usize, fields: usize) -> String {
    let mut document = String::new();
    for op in 0..operations {
        document.push_str(&format!("query Q{op} {{\n"));
        for field in 0..fields {
            document.push_str(&format!(
                "  f{field}(first: {field}) {{ edges {{ node {{ id name owner {{ id }} }} }} }}\n",
            ));
        }
        document.push_str("}\n");
    }
    document
}
