//! Auth Endpoints
//!
//! Login, registration, and session restore.

use serde::{Deserialize, Serialize};

use super::{client, send_json, url, ApiError};
use crate::models::User;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Token + account returned by login and register
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let args = LoginArgs { email, password };
    send_json(client().post(url("/auth/login")).json(&args)).await
}

pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let args = RegisterArgs {
        name,
        email,
        password,
    };
    send_json(client().post(url("/auth/register")).json(&args)).await
}

/// Resolve a stored token back into an account on app start.
pub async fn current_user(token: &str) -> Result<User, ApiError> {
    send_json(client().get(url("/auth/me")).bearer_auth(token)).await
}
