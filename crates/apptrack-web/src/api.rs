use apptrack_core::config::PageContext;
use apptrack_shared::{
  QuickStatusRequest,
  QuickStatusResponse
};
use gloo::net::http::Request;

/// POSTs a quick status change. The body
/// is decoded whatever the HTTP status;
/// the server reports failure in JSON.
pub async fn post_quick_status(
  ctx: &PageContext,
  application_id: u64,
  status: &str
) -> Result<QuickStatusResponse, String> {
  let url = ctx
    .config
    .quick_status_url(application_id);

  let mut builder = Request::post(&url);
  if let Some(token) = &ctx.csrf_token {
    builder = builder
      .header(&ctx.config.csrf_header, token);
  }

  let request = builder
    .json(&QuickStatusRequest {
      status: status.to_string()
    })
    .map_err(|e| {
      format!("failed to encode body: {e}")
    })?;

  let response = request
    .send()
    .await
    .map_err(|e| {
      format!("request error: {e}")
    })?;

  response
    .json::<QuickStatusResponse>()
    .await
    .map_err(|e| {
      format!(
        "decode error (http {}): {e}",
        response.status()
      )
    })
}
