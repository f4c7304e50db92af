//! Configuration management
//!
//! The hotel API base URL is fixed at compile time (`HOTEL_API_URL`) because
//! the browser bundle has no environment. The server process reads its bind
//! address and log filter through the `config` crate.

use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Raw API base URL baked into this build
pub fn api_base_url() -> &'static str {
    option_env!("HOTEL_API_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

/// Parse an API base URL, ensuring it ends in `/` so endpoints join beneath it
pub fn parse_api_base(raw: &str) -> Result<Url, url::ParseError> {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        Url::parse(trimmed)
    } else {
        Url::parse(&format!("{trimmed}/"))
    }
}

/// Parsed API base, falling back to the default if the baked-in value is malformed
pub fn api_base() -> Url {
    match parse_api_base(api_base_url()) {
        Ok(url) => url,
        Err(e) => {
            tracing::error!(
                "Invalid HOTEL_API_URL '{}': {}; using {}",
                api_base_url(),
                e,
                DEFAULT_API_BASE_URL
            );
            Url::parse(DEFAULT_API_BASE_URL).expect("default API base URL is valid")
        }
    }
}

#[cfg(feature = "server")]
pub use server::*;

#[cfg(feature = "server")]
mod server {
    use anyhow::Result;
    use serde::Deserialize;
    use std::path::PathBuf;

    #[derive(Debug, Deserialize)]
    pub struct Config {
        #[serde(default = "default_ip")]
        pub ip: String,

        #[serde(default = "default_port")]
        pub port: u16,

        /// tracing-subscriber filter, overridden by RUST_LOG
        #[serde(default = "default_log_filter")]
        pub log_filter: String,
    }

    fn default_ip() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        8081
    }

    fn default_log_filter() -> String {
        "hotel_admin=debug,dioxus=info".to_string()
    }

    /// Get config directory (HOTEL_ADMIN_CONFIG_DIR or the working directory)
    pub fn get_config_dir() -> PathBuf {
        std::env::var("HOTEL_ADMIN_CONFIG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    }

    pub fn load_config() -> Result<Config> {
        let config_dir = get_config_dir();

        let mut builder = ::config::Config::builder()
            .set_default("ip", default_ip())?
            .set_default("port", default_port() as i64)?
            .set_default("log_filter", default_log_filter())?
            // Load from config file if it exists
            .add_source(
                ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                    .required(false),
            )
            // Override with environment variables (HOTEL_ADMIN_PORT, HOTEL_ADMIN_LOG_FILTER, ...)
            .add_source(
                ::config::Environment::with_prefix("HOTEL_ADMIN")
                    .try_parsing(true),
            );

        // Precedence: HOTEL_ADMIN_PORT > PORT > config > default
        if std::env::var("HOTEL_ADMIN_PORT").is_err() {
            if let Ok(port) = std::env::var("PORT") {
                if let Ok(port_num) = port.parse::<u16>() {
                    builder = builder.set_override("port", port_num as i64)?;
                }
            }
        }

        let config = builder.build()?;

        Ok(config.try_deserialize()?)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serial_test::serial;
        use std::env;

        fn clear_env() {
            for key in [
                "HOTEL_ADMIN_PORT",
                "HOTEL_ADMIN_IP",
                "HOTEL_ADMIN_LOG_FILTER",
                "PORT",
            ] {
                env::remove_var(key);
            }
        }

        #[test]
        #[serial]
        fn defaults_without_file_or_env() {
            clear_env();
            env::set_var("HOTEL_ADMIN_CONFIG_DIR", "/tmp/hotel-admin-test-nonexistent");

            let config = load_config().expect("config should load");
            env::remove_var("HOTEL_ADMIN_CONFIG_DIR");

            assert_eq!(config.ip, "127.0.0.1");
            assert_eq!(config.port, 8081);
            assert_eq!(config.log_filter, "hotel_admin=debug,dioxus=info");
        }

        #[test]
        #[serial]
        fn file_then_env_precedence() {
            clear_env();
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(
                dir.path().join("config.toml"),
                "port = 9100\nip = \"0.0.0.0\"\n",
            )
            .unwrap();
            env::set_var("HOTEL_ADMIN_CONFIG_DIR", dir.path());

            let from_file = load_config().expect("config should load");
            assert_eq!(from_file.port, 9100);
            assert_eq!(from_file.ip, "0.0.0.0");

            env::set_var("PORT", "9200");
            let legacy = load_config().expect("config should load");
            assert_eq!(legacy.port, 9200);

            env::set_var("HOTEL_ADMIN_PORT", "9300");
            let explicit = load_config().expect("config should load");
            assert_eq!(explicit.port, 9300);

            clear_env();
            env::remove_var("HOTEL_ADMIN_CONFIG_DIR");
        }
    }
}
