//! Host Listing UI Module
//!
//! MVVM split:
//! - model.rs: GraphQL document and upload endpoint call
//! - state.rs: form fields, validation, upload state machine, view selection
//! - view_model.rs: signals and commands
//! - view.rs: Leptos components (pure UI)

mod model;
pub mod state;
mod view;
mod view_model;

pub use view::HostListing;
pub use view_model::HostListingVm;
