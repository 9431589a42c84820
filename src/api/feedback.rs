//! Feedback Endpoint

use super::{client, send_ok, url, ApiError};
use crate::models::Feedback;

pub async fn submit_feedback(token: &str, feedback: &Feedback) -> Result<(), ApiError> {
    send_ok(
        client()
            .post(url("/feedback"))
            .bearer_auth(token)
            .json(feedback),
    )
    .await
}
