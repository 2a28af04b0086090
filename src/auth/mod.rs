use anyhow::{Result, anyhow};
use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString,
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::config_loader;
use crate::domain::errors::CoreError;
use crate::domain::value_objects::enums::user_roles::UserRole;

const ACCESS_TOKEN_TTL_SECS: i64 = 60 * 60;
const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(password_hash)
        .map_err(|e| anyhow!("Stored password hash is invalid: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

fn secrets_for_role(role: UserRole) -> Result<(String, String)> {
    match role {
        UserRole::Admin => {
            let admin_secret = config_loader::get_admin_secret()?;
            Ok((admin_secret.secret, admin_secret.refresh_secret))
        }
        _ => {
            let user_secret = config_loader::get_user_secret()?;
            Ok((user_secret.secret, user_secret.refresh_secret))
        }
    }
}

/// Issues (access, refresh) tokens. Admin tokens are signed with the admin
/// secret pair, everyone else with the user pair.
pub fn generate_tokens(user_id: Uuid, role: UserRole) -> Result<(String, String)> {
    let (secret, refresh_secret) = secrets_for_role(role)?;
    let now = chrono::Utc::now().timestamp();

    let access_claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: (now + ACCESS_TOKEN_TTL_SECS) as usize,
    };
    let refresh_claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: (now + REFRESH_TOKEN_TTL_SECS) as usize,
    };

    let access_token = encode(
        &Header::default(),
        &access_claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| anyhow!("Failed to sign access token: {}", e))?;
    let refresh_token = encode(
        &Header::default(),
        &refresh_claims,
        &EncodingKey::from_secret(refresh_secret.as_bytes()),
    )
    .map_err(|e| anyhow!("Failed to sign refresh token: {}", e))?;

    Ok((access_token, refresh_token))
}

fn decode_with(token: &str, secret: &str) -> Result<Claims> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow!("JWT validation failed: {}", e))?;
    Ok(token_data.claims)
}

/// Access tokens are signed under either the user or the admin secret; try
/// the user secret first since that is the common case.
pub fn validate_access_token(token: &str) -> Result<Claims> {
    let user_secret = config_loader::get_user_secret()?;
    if let Ok(claims) = decode_with(token, &user_secret.secret) {
        return Ok(claims);
    }
    let admin_secret = config_loader::get_admin_secret()?;
    decode_with(token, &admin_secret.secret)
}

pub fn validate_refresh_token(token: &str) -> Result<Claims> {
    let user_secret = config_loader::get_user_secret()?;
    if let Ok(claims) = decode_with(token, &user_secret.refresh_secret) {
        return Ok(claims);
    }
    let admin_secret = config_loader::get_admin_secret()?;
    decode_with(token, &admin_secret.refresh_secret)
}

pub fn require_admin(auth_user: &AuthUser) -> Result<(), CoreError> {
    if auth_user.role != UserRole::Admin {
        return Err(CoreError::Forbidden(
            "admin privileges required".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing Authorization header".to_string(),
            ))?;

        let auth_str = auth_header.to_str().map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header".to_string(),
            )
        })?;

        if !auth_str.starts_with("Bearer ") {
            return Err((
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header format".to_string(),
            ));
        }

        let token = &auth_str[7..];

        let claims = validate_access_token(token)
            .map_err(|e| (StatusCode::UNAUTHORIZED, format!("Unauthorized: {}", e)))?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid user ID in token".to_string(),
            )
        })?;

        let role = claims.role.parse::<UserRole>().map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid role in token".to_string(),
            )
        })?;

        Ok(AuthUser { user_id, role })
    }
}

#[cfg(test)]
mod tests;
