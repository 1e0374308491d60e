use thiserror::Error;

/// Everything the UI reports to the user.
///
/// `Display` is the exact one-line text shown in the notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("Please enter a valid search input")]
    EmptySearch,

    #[error("You're only able to upload valid JPG or PNG files!")]
    InvalidImageType,

    #[error("You're only able to upload valid image files of under 1MB in size!")]
    InvalidImageSize,

    #[error("Please complete all required form fields.")]
    IncompleteForm,

    #[error("Sorry! We weren't able to create your listing. Please try again later.")]
    MutationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Failed to read file: {0}")]
    FileRead(String),
}
