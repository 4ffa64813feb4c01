use crate::{env_required, ConfigError, FromEnv};

/// Cross-origin policy for browser clients.
///
/// Exactly one origin is allowed. It is read from `FRONTEND_URL`, the URL the
/// storefront is served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into(),
        }
    }

    /// Whether `origin` matches the configured origin.
    ///
    /// A trailing slash on either side is ignored, browsers never send one.
    pub fn allows(&self, origin: &str) -> bool {
        self.allowed_origin.trim_end_matches('/') == origin.trim_end_matches('/')
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let origin = env_required("FRONTEND_URL")?;
        let origin = origin.trim();

        if origin.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "FRONTEND_URL".to_string(),
                details: "origin cannot be empty".to_string(),
            });
        }

        Ok(Self::new(origin.trim_end_matches('/')))
    }
}
