/*
 * Responsibility
 * - Signup / login request and response DTOs
 * - validate() does format checks only; policy lives elsewhere
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::auth::token::Role;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let first = self.first_name.trim();
        if first.len() < 2 || first.len() > 100 {
            return Err("first_name must be 2..=100 chars");
        }
        let last = self.last_name.trim();
        if last.len() < 2 || last.len() > 100 {
            return Err("last_name must be 2..=100 chars");
        }
        if self.password.len() < 6 {
            return Err("password must be at least 6 chars");
        }
        if self.phone.len() != 10 || !self.phone.chars().all(|c| c.is_ascii_digit()) {
            return Err("phone must be exactly 10 digits");
        }
        // Cheap shape check; the unique index is the real gatekeeper.
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') || email.contains(char::is_whitespace) {
            return Err("email is not valid");
        }
        if Role::parse(&self.role).is_none() {
            return Err("role must be ADMIN or USER");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: super::users::UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req() -> SignupRequest {
        SignupRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "0123456789".to_string(),
            password: "secret1".to_string(),
            role: "USER".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_signup() {
        assert!(req().validate().is_ok());
    }

    #[test]
    fn rejects_boundary_violations() {
        let mut r = req();
        r.first_name = "A".to_string();
        assert!(r.validate().is_err());

        let mut r = req();
        r.password = "short".to_string();
        assert!(r.validate().is_err());

        let mut r = req();
        r.phone = "123".to_string();
        assert!(r.validate().is_err());

        let mut r = req();
        r.phone = "12345678ab".to_string();
        assert!(r.validate().is_err());

        let mut r = req();
        r.email = "not-an-email".to_string();
        assert!(r.validate().is_err());
    }

    #[test]
    fn rejects_unknown_or_miscased_roles() {
        let mut r = req();
        r.role = "ROOT".to_string();
        assert!(r.validate().is_err());

        let mut r = req();
        r.role = "user".to_string();
        assert!(r.validate().is_err());
    }
}
