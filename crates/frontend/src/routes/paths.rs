//! Path builders for every navigable page.

pub const HOME: &str = "/";
pub const HOST: &str = "/host";
pub const LOGIN: &str = "/login";

/// Collection route for a search term
pub fn listings_path(term: &str) -> String {
    format!("/listings/{}", urlencoding::encode(term))
}

/// Detail route for one listing
pub fn listing_path(id: &str) -> String {
    format!("/listing/{}", urlencoding::encode(id))
}

pub fn user_path(id: &str) -> String {
    format!("/user/{}", urlencoding::encode(id))
}

/// Whether `path` shows a listing collection
pub fn is_listings_path(path: &str) -> bool {
    path.contains("/listings")
}

/// Undo `listings_path` encoding on a route param
pub fn decode_segment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listings_path_encodes_term() {
        assert_eq!(listings_path("toronto"), "/listings/toronto");
        assert_eq!(listings_path("San Francisco"), "/listings/San%20Francisco");
        assert_eq!(listings_path("a/b"), "/listings/a%2Fb");
    }

    #[test]
    fn test_round_trip_through_route_param() {
        let path = listings_path("Los Angeles, CA");
        let segment = path.trim_start_matches("/listings/");
        assert_eq!(decode_segment(segment), "Los Angeles, CA");
    }

    #[test]
    fn test_is_listings_path() {
        assert!(is_listings_path("/listings"));
        assert!(is_listings_path("/listings/toronto"));
        assert!(!is_listings_path("/listing/42"));
        assert!(!is_listings_path("/host"));
        assert!(!is_listings_path("/"));
    }

    #[test]
    fn test_detail_paths() {
        assert_eq!(listing_path("5f1a"), "/listing/5f1a");
        assert_eq!(user_path("u 1"), "/user/u%201");
    }
}
