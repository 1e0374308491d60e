//! Wire contracts shared between the browser UI and the GraphQL backend.
//!
//! Nothing in this crate touches the browser, so every rule that can be
//! checked without a DOM lives here and is tested natively.

pub mod domain;
pub mod shared;
pub mod system;
