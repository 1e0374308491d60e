pub mod aggregate;

pub use aggregate::{
    HostListingData, HostListingInput, HostListingResult, ListingType, DESCRIPTION_MAX_CHARS,
    TITLE_MAX_CHARS,
};
