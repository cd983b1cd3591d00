use super::*;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::env;

fn set_env_vars() {
    unsafe {
        env::set_var("JWT_SECRET", "supersecretjwtsecretforunittesting123");
        env::set_var("JWT_TTL_SECONDS", "3600");
    }
}

fn sign_token(secret: &str, sub: &str, role: &str, exp: usize) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        role: role.to_string(),
        email: "test@example.com".to_string(),
        exp,
        iat: 1,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn request_parts_with_bearer(token: &str) -> Parts {
    let request = axum::http::Request::builder()
        .uri("/api/plans")
        .header(axum::http::header::AUTHORIZATION, format!("Bearer {}", token))
        .body(())
        .unwrap();

    request.into_parts().0
}

#[test]
fn test_validate_token_success() {
    set_env_vars();
    let token = sign_token(
        "supersecretjwtsecretforunittesting123",
        "42",
        "USER",
        9999999999, // far future
    );

    let claims = validate_token(&token).expect("Valid token should pass");
    assert_eq!(claims.sub, "42");
    assert_eq!(claims.role, "USER");
    assert_eq!(claims.email, "test@example.com");
}

#[test]
fn test_validate_token_expired() {
    set_env_vars();
    let token = sign_token(
        "supersecretjwtsecretforunittesting123",
        "42",
        "USER",
        1, // past
    );

    let result = validate_token(&token);
    assert!(result.is_err());
}

#[test]
fn test_validate_token_invalid_signature() {
    set_env_vars();
    let token = sign_token("wrongsecret", "42", "USER", 9999999999);

    let result = validate_token(&token);
    assert!(result.is_err());
}

#[tokio::test]
async fn auth_user_extractor_parses_claims() {
    set_env_vars();
    let token = sign_token(
        "supersecretjwtsecretforunittesting123",
        "42",
        "USER",
        9999999999,
    );
    let mut parts = request_parts_with_bearer(&token);

    let auth_user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .expect("Valid bearer token should pass");

    assert_eq!(auth_user.user_id, 42);
    assert_eq!(auth_user.role, "USER");
    assert_eq!(auth_user.email, "test@example.com");
}

#[tokio::test]
async fn auth_user_extractor_rejects_missing_header() {
    set_env_vars();
    let request = axum::http::Request::builder()
        .uri("/api/plans")
        .body(())
        .unwrap();
    let mut parts = request.into_parts().0;

    let (status, _) = AuthUser::from_request_parts(&mut parts, &())
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn auth_user_extractor_rejects_non_numeric_subject() {
    set_env_vars();
    let token = sign_token(
        "supersecretjwtsecretforunittesting123",
        "not-a-number",
        "USER",
        9999999999,
    );
    let mut parts = request_parts_with_bearer(&token);

    let (status, _) = AuthUser::from_request_parts(&mut parts, &())
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_extractor_accepts_admin_role() {
    set_env_vars();
    let token = sign_token(
        "supersecretjwtsecretforunittesting123",
        "7",
        "ADMIN",
        9999999999,
    );
    let mut parts = request_parts_with_bearer(&token);

    let AdminUser(auth_user) = AdminUser::from_request_parts(&mut parts, &())
        .await
        .expect("Admin token should pass");

    assert_eq!(auth_user.user_id, 7);
    assert_eq!(auth_user.role, "ADMIN");
}

#[tokio::test]
async fn admin_extractor_rejects_user_role_with_forbidden() {
    set_env_vars();
    let token = sign_token(
        "supersecretjwtsecretforunittesting123",
        "42",
        "USER",
        9999999999,
    );
    let mut parts = request_parts_with_bearer(&token);

    let (status, _) = AdminUser::from_request_parts(&mut parts, &())
        .await
        .unwrap_err();

    assert_eq!(status, StatusCode::FORBIDDEN);
}
