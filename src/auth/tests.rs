use super::*;
use std::env;

fn set_env_vars() {
    unsafe {
        env::set_var("JWT_USER_SECRET", "usersecretforunittesting1234567890");
        env::set_var("JWT_USER_REFRESH_SECRET", "userrefreshsecretforunittesting12");
        env::set_var("JWT_ADMIN_SECRET", "adminsecretforunittesting123456789");
        env::set_var("JWT_ADMIN_REFRESH_SECRET", "adminrefreshsecretforunittesting1");
    }
}

#[test]
fn test_password_hash_roundtrip() {
    let hash = hash_password("hunter2hunter2").unwrap();
    assert_ne!(hash, "hunter2hunter2");
    assert!(verify_password("hunter2hunter2", &hash).unwrap());
    assert!(!verify_password("wrongpassword", &hash).unwrap());
}

#[test]
fn test_generate_and_validate_user_tokens() {
    set_env_vars();
    let user_id = Uuid::new_v4();

    let (access, refresh) = generate_tokens(user_id, UserRole::Donor).unwrap();

    let claims = validate_access_token(&access).expect("Valid access token should pass");
    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.role, "donor");

    let claims = validate_refresh_token(&refresh).expect("Valid refresh token should pass");
    assert_eq!(claims.sub, user_id.to_string());
}

#[test]
fn test_admin_tokens_use_admin_secret() {
    set_env_vars();
    let user_id = Uuid::new_v4();

    let (access, _) = generate_tokens(user_id, UserRole::Admin).unwrap();
    let claims = validate_access_token(&access).expect("Admin token should validate");
    assert_eq!(claims.role, "admin");
}

#[test]
fn test_access_token_rejected_as_refresh() {
    set_env_vars();
    let user_id = Uuid::new_v4();

    let (access, _) = generate_tokens(user_id, UserRole::Donor).unwrap();
    assert!(validate_refresh_token(&access).is_err());
}

#[test]
fn test_expired_token_rejected() {
    set_env_vars();
    let secret = "usersecretforunittesting1234567890";
    let my_claims = Claims {
        sub: Uuid::new_v4().to_string(),
        role: "donor".to_string(),
        exp: 1, // past
    };

    let token = encode(
        &Header::default(),
        &my_claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap();

    assert!(validate_access_token(&token).is_err());
}

#[test]
fn test_invalid_signature_rejected() {
    set_env_vars();
    let my_claims = Claims {
        sub: Uuid::new_v4().to_string(),
        role: "donor".to_string(),
        exp: 9999999999,
    };

    let token = encode(
        &Header::default(),
        &my_claims,
        &EncodingKey::from_secret(b"wrongsecret"),
    )
    .unwrap();

    assert!(validate_access_token(&token).is_err());
}

#[test]
fn test_require_admin() {
    let donor = AuthUser {
        user_id: Uuid::new_v4(),
        role: UserRole::Donor,
    };
    assert!(require_admin(&donor).is_err());

    let admin = AuthUser {
        user_id: Uuid::new_v4(),
        role: UserRole::Admin,
    };
    assert!(require_admin(&admin).is_ok());
}
