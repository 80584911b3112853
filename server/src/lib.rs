//! GraphQL gateway over the Front-Office and Back-Office REST backends.

pub mod config;
pub mod graphql;
pub mod http;
