use serde::{Deserialize, Serialize};

/// Longest listing title the backend accepts
pub const TITLE_MAX_CHARS: usize = 45;
/// Longest listing description the backend accepts
pub const DESCRIPTION_MAX_CHARS: usize = 400;

// ============================================================================
// Listing type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingType {
    Apartment,
    House,
}

impl ListingType {
    pub const ALL: [ListingType; 2] = [ListingType::Apartment, ListingType::House];

    /// GraphQL enum value
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Apartment => "APARTMENT",
            ListingType::House => "HOUSE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingType::Apartment => "Apartment",
            ListingType::House => "House",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

// ============================================================================
// hostListing mutation
// ============================================================================

/// Input of the `hostListing` mutation.
///
/// `address` is the single comma-joined line built from the street, city,
/// state and postal code inputs; `price` is in cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostListingInput {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub address: String,
    /// Cents per night, a GraphQL `Int`
    pub price: i32,
    pub num_of_guests: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostListingResult {
    pub id: String,
}

/// `data` member of the `hostListing` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostListingData {
    pub host_listing: HostListingResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_listing_type_wire_values() {
        assert_eq!(
            serde_json::to_value(ListingType::Apartment).unwrap(),
            json!("APARTMENT")
        );
        assert_eq!(ListingType::parse("HOUSE"), Some(ListingType::House));
        assert_eq!(ListingType::parse("house"), None);
        assert_eq!(ListingType::parse(""), None);
    }

    #[test]
    fn test_input_field_names() {
        let input = HostListingInput {
            title: "Loft".into(),
            description: "Bright".into(),
            image: "data:image/png;base64,AA==".into(),
            listing_type: ListingType::House,
            address: "1 Main St, Toronto, ON, M5V".into(),
            price: 12000,
            num_of_guests: 2,
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["type"], "HOUSE");
        assert_eq!(value["numOfGuests"], 2);
        assert_eq!(value["price"], 12000);
        assert!(value.get("city").is_none());
        assert!(value.get("listingType").is_none());
    }

    #[test]
    fn test_data_decodes() {
        let data: HostListingData =
            serde_json::from_value(json!({ "hostListing": { "id": "5d" } })).unwrap();
        assert_eq!(data.host_listing.id, "5d");
    }
}
