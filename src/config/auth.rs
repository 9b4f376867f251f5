//! Authentication configuration (GoTrue-style identity service)

use secrecy::Secret;
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Identity provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the identity service (e.g. "https://auth.example.com")
    pub provider_url: String,

    /// Shared secret used to verify session JWTs (HS256)
    pub jwt_secret: Secret<String>,

    /// Public API key sent with account operations
    pub api_key: Secret<String>,

    /// Expected audience claim in session tokens
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production, requires HTTPS for the provider URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.provider_url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_PROVIDER_URL"));
        }
        if *environment == Environment::Production && !self.provider_url.starts_with("https://") {
            return Err(ValidationError::ProviderMustBeHttps);
        }
        Ok(())
    }
}

fn default_audience() -> String {
    "authenticated".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> AuthConfig {
        AuthConfig {
            provider_url: url.to_string(),
            jwt_secret: Secret::new("test-secret".to_string()),
            api_key: Secret::new("test-key".to_string()),
            audience: default_audience(),
        }
    }

    #[test]
    fn empty_provider_url_fails_validation() {
        assert!(config("").validate(&Environment::Development).is_err());
    }

    #[test]
    fn http_provider_allowed_in_development_only() {
        let cfg = config("http://localhost:9999");
        assert!(cfg.validate(&Environment::Development).is_ok());
        assert!(cfg.validate(&Environment::Production).is_err());
    }

    #[test]
    fn https_provider_passes_in_production() {
        let cfg = config("https://auth.example.com");
        assert!(cfg.validate(&Environment::Production).is_ok());
    }
}
