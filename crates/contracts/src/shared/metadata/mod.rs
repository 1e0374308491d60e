//! Declarative field rules for forms.
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::metadata::ValidationRules;
//!
//! const TITLE: ValidationRules =
//!     ValidationRules::required("Please enter a title for your listing!").with_max_length(45);
//!
//! assert!(TITLE.validate_string("Cozy loft").is_ok());
//! assert!(TITLE.validate_string("   ").is_err());
//! ```

mod validation;

pub use validation::ValidationRules;
