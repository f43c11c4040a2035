/*
 * Responsibility
 * - Claim set types (access + refresh) and the closed Role enum
 * - TokenService: sign an access/refresh pair, verify incoming tokens
 * - Shared-secret HS256; keys are built once and reused for every request
 */
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

/// Coarse-grained permission category attached to a principal.
///
/// Closed set: a token carrying any other value fails deserialization and is
/// rejected at validation time, never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Exact-match parse ("ADMIN" / "USER"), as stored in the users table.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Role::Admin),
            "USER" => Some(Role::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access-token claim set.
///
/// `email` / `first_name` / `last_name` are informational only; authorization
/// decisions use `sub` and `role` exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    /// Expiry as unix seconds.
    pub exp: i64,
}

/// Refresh-token claim set: subject + expiry, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: Uuid,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token is expired")]
    Expired,
    #[error("token signing failed")]
    Signing,
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;
    match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        // Structural/claim decode failures (bad segments, bad base64, bad
        // JSON, unknown role value, missing exp, ...)
        _ => TokenError::Malformed,
    }
}

/// Issues and verifies the signed token pair.
///
/// Stateless: every call depends only on its inputs and the key material
/// loaded once at startup, so it is freely shareable across request tasks.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenService")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: &str, access_ttl_hours: i64, refresh_ttl_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Exact expiry comparison. Callers that need clock-skew tolerance
        // must add it explicitly; none do today.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            access_ttl: Duration::hours(access_ttl_hours),
            refresh_ttl: Duration::hours(refresh_ttl_hours),
        }
    }

    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    /// Sign an access + refresh pair for an authenticated principal.
    ///
    /// A signing fault is not recoverable at this layer; callers surface it
    /// as an internal error.
    pub fn issue_pair(
        &self,
        sub: Uuid,
        email: &str,
        first_name: &str,
        last_name: &str,
        role: Role,
    ) -> Result<TokenPair, TokenError> {
        let now = Utc::now();

        let claims = Claims {
            sub,
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role,
            exp: (now + self.access_ttl).timestamp(),
        };

        let refresh_claims = RefreshClaims {
            sub,
            exp: (now + self.refresh_ttl).timestamp(),
        };

        let header = Header::new(Algorithm::HS256);

        let access_token = encode(&header, &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign access token");
            TokenError::Signing
        })?;
        let refresh_token = encode(&header, &refresh_claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign refresh token");
            TokenError::Signing
        })?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Verify signature + expiry and reconstruct the claim set.
    ///
    /// A failed validation never yields claims, even if parts of the payload
    /// decoded successfully.
    ///
    /// The expiry boundary is exclusive: a token whose `exp` equals the
    /// current second is still accepted and expires on the next one.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }

    /// Same checks as `validate`, for the refresh-token claim shape.
    ///
    /// Consumption half of the refresh pair. No refresh endpoint is wired
    /// up yet, so outside of tests nothing calls this today.
    #[allow(dead_code)]
    pub fn validate_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        decode::<RefreshClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(map_decode_error)
    }
}
