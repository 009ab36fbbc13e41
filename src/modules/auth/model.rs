use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

// Refresh request carrying the long-lived token
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "refreshToken must not be empty"))]
    pub refresh_token: String,
}

/// Token pair returned by register and login.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokensResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Single fresh access token returned by refresh. The presented refresh
/// token is not rotated and stays valid until its own expiry.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_camel_case() {
        let json = r#"{"firstName":"Alice","lastName":"Smith","email":"alice@x.com","password":"password123"}"#;
        let dto: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(dto.first_name, "Alice");
        assert_eq!(dto.last_name, "Smith");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_register_request_short_password_rejected() {
        let json = r#"{"firstName":"Alice","lastName":"Smith","email":"alice@x.com","password":"short"}"#;
        let dto: RegisterRequest = serde_json::from_str(json).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_request_invalid_email_rejected() {
        let dto = LoginRequest {
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_tokens_response_camel_case() {
        let response = AuthTokensResponse {
            access_token: "aaa".to_string(),
            refresh_token: "rrr".to_string(),
        };
        let serialized = serde_json::to_string(&response).unwrap();
        assert!(serialized.contains(r#""accessToken":"aaa""#));
        assert!(serialized.contains(r#""refreshToken":"rrr""#));
    }
}
