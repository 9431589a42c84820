//! Menu Endpoint
//!
//! Catalog fetch; unauthenticated.

use super::{client, send_json, url, ApiError};
use crate::models::MenuItem;

pub async fn fetch_menu() -> Result<Vec<MenuItem>, ApiError> {
    send_json(client().get(url("/menu"))).await
}
