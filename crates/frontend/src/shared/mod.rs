pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod graphql;
pub mod icons;
pub mod image;
pub mod notify;
