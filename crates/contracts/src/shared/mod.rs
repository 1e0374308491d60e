pub mod graphql;
pub mod metadata;
