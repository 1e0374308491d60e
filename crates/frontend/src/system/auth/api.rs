use contracts::shared::graphql::InputVariables;
use contracts::system::auth::{AuthUrlData, LogInData, LogInInput, LogOutData, Viewer};

use crate::shared::error::UiError;
use crate::shared::graphql::execute;

const LOG_IN: &str = r#"
mutation LogIn($input: LogInInput) {
  logIn(input: $input) { id token avatar hasWallet didRequest }
}"#;

const LOG_OUT: &str = r#"
mutation LogOut {
  logOut { id token avatar hasWallet didRequest }
}"#;

const AUTH_URL: &str = r#"
query AuthUrl {
  authUrl
}"#;

/// Log in with an OAuth `code`, or resume the current session when `None`
pub async fn log_in(code: Option<String>) -> Result<Viewer, UiError> {
    let data: LogInData = execute(
        LOG_IN,
        InputVariables {
            input: LogInInput { code },
        },
    )
    .await?;
    Ok(data.log_in)
}

pub async fn log_out() -> Result<Viewer, UiError> {
    let data: LogOutData = execute(LOG_OUT, serde_json::json!({})).await?;
    Ok(data.log_out)
}

/// URL of the OAuth consent screen
pub async fn auth_url() -> Result<String, UiError> {
    let data: AuthUrlData = execute(AUTH_URL, serde_json::json!({})).await?;
    Ok(data.auth_url)
}
