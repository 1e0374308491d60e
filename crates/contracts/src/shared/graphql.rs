//! GraphQL request/response envelopes.

use serde::{Deserialize, Serialize};

/// Body of a POST to the GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// Variables wrapper for operations taking a single `$input` argument
#[derive(Debug, Clone, Serialize)]
pub struct InputVariables<I> {
    pub input: I,
}

/// A single entry of the `errors` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Any reported error wins over partial data.
    pub fn into_result(self) -> Result<T, String> {
        if !self.errors.is_empty() {
            let joined = self
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(joined);
        }
        self.data
            .ok_or_else(|| "Response contained neither data nor errors".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: String,
    }

    #[test]
    fn test_request_shape() {
        let body = GraphQlRequest {
            query: "mutation X($input: XInput!) { x(input: $input) { id } }",
            variables: InputVariables { input: json!({ "a": 1 }) },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["variables"]["input"]["a"], 1);
        assert!(value["query"].as_str().unwrap().starts_with("mutation X"));
    }

    #[test]
    fn test_data_response() {
        let resp: GraphQlResponse<Payload> =
            serde_json::from_value(json!({ "data": { "id": "42" } })).unwrap();
        assert_eq!(resp.into_result(), Ok(Payload { id: "42".into() }));
    }

    #[test]
    fn test_errors_win() {
        let resp: GraphQlResponse<Payload> = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "viewer cannot be found" }, { "message": "boom" }]
        }))
        .unwrap();
        assert_eq!(resp.into_result(), Err("viewer cannot be found; boom".into()));
    }

    #[test]
    fn test_empty_response() {
        let resp: GraphQlResponse<Payload> = serde_json::from_value(json!({})).unwrap();
        assert!(resp.into_result().is_err());
    }
}
