//! Auth Workflows
//!
//! Sign-up, login, and logout. Input is validated locally before any
//! round trip; login chains token issuance with a profile fetch so the
//! session store lands fully populated.

use crate::error::AppError;
use crate::views::{SessionStore, UserProfile};
use repick_api::types::{LoginRequest, SignUpRequest, UserResponse};
use repick_api::AuthService;
use repick_core::validation::{is_valid_email, is_valid_nickname, is_valid_password};
use std::sync::Arc;

fn profile_from_response(response: UserResponse) -> UserProfile {
    UserProfile {
        id: response.id,
        nickname: response.nickname,
        email: response.email,
        profile_image: response.profile_image_url,
    }
}

fn check_credentials(email: &str, password: &str) -> Result<(), AppError> {
    if !is_valid_email(email) {
        return Err(AppError::invalid("이메일 형식이 올바르지 않습니다."));
    }
    if !is_valid_password(password) {
        return Err(AppError::invalid("비밀번호는 8자 이상이어야 합니다."));
    }
    Ok(())
}

/// Create an account. Does not sign the user in.
pub async fn sign_up(
    service: &Arc<dyn AuthService>,
    email: &str,
    password: &str,
    nickname: &str,
) -> Result<UserProfile, AppError> {
    check_credentials(email, password)?;
    if !is_valid_nickname(nickname) {
        return Err(AppError::invalid("닉네임은 1~30자여야 합니다."));
    }

    let response = service
        .sign_up(&SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            nickname: nickname.to_string(),
        })
        .await?;
    Ok(profile_from_response(response))
}

/// Sign in and populate the session store.
pub async fn log_in(
    service: &Arc<dyn AuthService>,
    session: &SessionStore,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    check_credentials(email, password)?;

    let tokens = service
        .log_in(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;
    let profile = service.me(&tokens.access_token).await?;

    session.log_in(profile_from_response(profile), tokens.access_token);
    tracing::debug!("session established");
    Ok(())
}

/// Clear the session.
pub fn log_out(session: &SessionStore) {
    session.log_out();
}

#[cfg(test)]
mod tests {
    use super::*;
    use repick_api::types::TokenResponse;
    use repick_api::ApiError;
    use repick_core::UserId;

    struct StubAuth;

    #[async_trait::async_trait]
    impl AuthService for StubAuth {
        async fn sign_up(&self, request: &SignUpRequest) -> Result<UserResponse, ApiError> {
            Ok(UserResponse {
                id: UserId(1),
                email: request.email.clone(),
                nickname: request.nickname.clone(),
                profile_image_url: None,
            })
        }

        async fn log_in(&self, _request: &LoginRequest) -> Result<TokenResponse, ApiError> {
            Ok(TokenResponse {
                access_token: "tok".to_string(),
                refresh_token: None,
                token_type: "Bearer".to_string(),
            })
        }

        async fn me(&self, token: &str) -> Result<UserResponse, ApiError> {
            assert_eq!(token, "tok");
            Ok(UserResponse {
                id: UserId(1),
                email: "fan@example.com".to_string(),
                nickname: "체리".to_string(),
                profile_image_url: None,
            })
        }
    }

    fn service() -> Arc<dyn AuthService> {
        Arc::new(StubAuth)
    }

    #[tokio::test]
    async fn test_login_populates_session() {
        let session = SessionStore::new();
        log_in(&service(), &session, "fan@example.com", "12345678")
            .await
            .unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(session.current_user().unwrap().nickname, "체리");
    }

    #[tokio::test]
    async fn test_invalid_email_never_hits_the_wire() {
        let session = SessionStore::new();
        let error = log_in(&service(), &session, "not-an-email", "12345678")
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::Invalid { .. }));
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let error = sign_up(&service(), "fan@example.com", "short", "체리")
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::Invalid { .. }));
    }

    #[tokio::test]
    async fn test_overlong_nickname_is_rejected() {
        let nickname = "a".repeat(31);
        let error = sign_up(&service(), "fan@example.com", "12345678", &nickname)
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::Invalid { .. }));
    }

    #[test]
    fn test_logout_clears_session() {
        let session = SessionStore::new();
        session.log_in(
            UserProfile {
                id: UserId(1),
                nickname: "체리".to_string(),
                email: "fan@example.com".to_string(),
                profile_image: None,
            },
            "tok".to_string(),
        );
        log_out(&session);
        assert!(!session.is_logged_in());
    }
}
