use serde::{Deserialize, Serialize};

/// The person using the app, as returned by `logIn` / `logOut`.
///
/// An anonymous viewer has every field empty; `did_request` tells whether
/// the session lookup has already run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewer {
    pub id: Option<String>,
    pub token: Option<String>,
    pub avatar: Option<String>,
    pub has_wallet: Option<bool>,
    #[serde(default)]
    pub did_request: bool,
}

impl Viewer {
    /// Anonymous viewer after the session lookup finished
    pub fn anonymous() -> Self {
        Self {
            did_request: true,
            ..Self::default()
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogInInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInData {
    pub log_in: Viewer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogOutData {
    pub log_out: Viewer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlData {
    pub auth_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signed_in_requires_id() {
        assert!(!Viewer::default().is_signed_in());
        assert!(!Viewer::anonymous().is_signed_in());
        let empty_id = Viewer {
            id: Some(String::new()),
            ..Viewer::default()
        };
        assert!(!empty_id.is_signed_in());
        let viewer = Viewer {
            id: Some("u1".into()),
            ..Viewer::default()
        };
        assert!(viewer.is_signed_in());
    }

    #[test]
    fn test_viewer_decodes_camel_case() {
        let data: LogInData = serde_json::from_value(json!({
            "logIn": {
                "id": "u1",
                "token": "t",
                "avatar": null,
                "hasWallet": true,
                "didRequest": true
            }
        }))
        .unwrap();
        assert_eq!(data.log_in.has_wallet, Some(true));
        assert!(data.log_in.did_request);
    }

    #[test]
    fn test_log_in_input_omits_missing_code() {
        assert_eq!(serde_json::to_value(LogInInput::default()).unwrap(), json!({}));
        let with_code = LogInInput {
            code: Some("abc".into()),
        };
        assert_eq!(serde_json::to_value(with_code).unwrap(), json!({ "code": "abc" }));
    }
}
