pub mod details;
pub mod host;
pub mod list;
