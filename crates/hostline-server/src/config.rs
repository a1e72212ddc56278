//! Server Configuration

use hostline_core::{BusinessProfile, LoaderConfig};

/// Server settings, read once at startup
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the built frontend and content bundles
    pub static_dir: String,

    /// Retry policy for outbound calls (auth provider)
    pub loader: LoaderConfig,

    /// Business the chat demo answers for
    pub business: BusinessProfile,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: "static".into(),
            loader: LoaderConfig::default(),
            business: BusinessProfile::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: std::env::var("STATIC_DIR").unwrap_or(defaults.static_dir),
            loader: LoaderConfig::from_env(),
            business: BusinessProfile::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.loader.retries, 3);
    }
}
