//! Auth endpoints: signup, login, and profile.
//!
//! Token issuance lives entirely server-side; this module only carries
//! the result back.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{LoginRequest, SignUpRequest, TokenResponse, UserResponse};
use async_trait::async_trait;
use std::sync::Arc;

/// Auth operations the application core depends on.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// `POST /auth/signup`
    async fn sign_up(&self, request: &SignUpRequest) -> Result<UserResponse, ApiError>;

    /// `POST /auth/login`
    async fn log_in(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError>;

    /// `GET /me`
    async fn me(&self, token: &str) -> Result<UserResponse, ApiError>;
}

/// Wire-backed auth API.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    /// Wrap a shared client.
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for AuthApi {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<UserResponse, ApiError> {
        self.client.post_json("/auth/signup", None, request).await
    }

    async fn log_in(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.client.post_json("/auth/login", None, request).await
    }

    async fn me(&self, token: &str) -> Result<UserResponse, ApiError> {
        self.client.get_json("/me", &[], Some(token)).await
    }
}
