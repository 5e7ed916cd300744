//! Contact form submission and the admin console link.

use reqwest::Client;
use serde_json::json;
use tracing::instrument;

use crate::error::AppError;
use crate::fetcher::models::ContactMessage;
use crate::fetcher::post_json;
use crate::fetcher::urls::{build_admin_url, build_mails_url};

/// Posts a contact message. Mutations skip the response cache and are
/// never retried, so a flaky network cannot double-send mail.
#[instrument(skip(client, message), fields(from = %message.email))]
pub async fn submit_contact(
    client: &Client,
    base_url: &str,
    message: &ContactMessage,
) -> Result<(), AppError> {
    if message.name.trim().is_empty()
        || message.email.trim().is_empty()
        || message.message.trim().is_empty()
    {
        return Err(AppError::Custom(
            "Name, email and message are all required".to_string(),
        ));
    }
    let url = build_mails_url(base_url);
    let body = json!({ "data": {
        "name": message.name,
        "email": message.email,
        "message": message.message,
    }});
    post_json(client, &url, &body).await
}

/// The content manager console URL for this deployment.
pub fn admin_console_url(base_url: &str) -> String {
    build_admin_url(base_url)
}
