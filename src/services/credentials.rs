use base64::{engine::general_purpose::STANDARD, Engine as _};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Errors raised while assembling ShipStation credentials
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("ShipStation API credentials are missing: {0} is not set")]
    Missing(&'static str),
}

/// ShipStation API key/secret pair.
///
/// Both halves are held as [`SecretString`] so they stay out of `Debug`
/// output. Built once at startup and handed to the upstream client.
#[derive(Debug)]
pub struct Credentials {
    api_key: SecretString,
    api_secret: SecretString,
}

impl Credentials {
    /// Create credentials, rejecting empty values
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(CredentialsError::Missing("SHIPSTATION_API_KEY"));
        }
        if api_secret.is_empty() {
            return Err(CredentialsError::Missing("SHIPSTATION_API_SECRET"));
        }

        Ok(Self {
            api_key: SecretString::from(api_key),
            api_secret: SecretString::from(api_secret),
        })
    }

    /// `Basic <base64(key:secret)>`, ready for the `Authorization` header
    pub fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!(
            "{}:{}",
            self.api_key.expose_secret(),
            self.api_secret.expose_secret()
        ));
        format!("Basic {}", token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let credentials = Credentials::new("key", "secret").unwrap();
        // base64("key:secret")
        assert_eq!(credentials.basic_auth_header(), "Basic a2V5OnNlY3JldA==");
    }

    #[test]
    fn test_empty_values_rejected() {
        assert_eq!(
            Credentials::new("", "secret").unwrap_err(),
            CredentialsError::Missing("SHIPSTATION_API_KEY")
        );
        assert_eq!(
            Credentials::new("key", "").unwrap_err(),
            CredentialsError::Missing("SHIPSTATION_API_SECRET")
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("visible-key", "visible-secret").unwrap();
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("visible-key"));
        assert!(!debug.contains("visible-secret"));
    }
}
