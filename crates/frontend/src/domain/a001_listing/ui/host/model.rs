use gloo_net::http::Request;

use crate::shared::error::UiError;

pub const HOST_LISTING: &str = r#"
mutation HostListing($input: HostListingInput!) {
  hostListing(input: $input) { id }
}"#;

/// Hand the picked file to the third-party upload endpoint.
///
/// Only the status matters; the endpoint's storage is not used.
pub async fn post_to_upload_endpoint(url: &str, file: &web_sys::File) -> Result<(), UiError> {
    let form = web_sys::FormData::new().map_err(|e| UiError::Network(format!("{e:?}")))?;
    form.append_with_blob_and_filename("image", file, &file.name())
        .map_err(|e| UiError::Network(format!("{e:?}")))?;

    let response = Request::post(url)
        .body(form)
        .map_err(|e| UiError::Network(format!("Failed to build upload request: {}", e)))?
        .send()
        .await
        .map_err(|e| UiError::Network(format!("Failed to send upload: {}", e)))?;

    if !response.ok() {
        return Err(UiError::Network(format!("HTTP {}", response.status())));
    }
    Ok(())
}
