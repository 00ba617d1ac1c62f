//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Required values are checked once, at startup.

use std::time::Duration;

/// Sender address used when `WELCOME_EMAIL_FROM` is not set
pub const DEFAULT_SENDER: &str = "noreply@yourapp.com";

/// SendGrid v3 mail-send endpoint
pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Hosted table leads are written to
pub const DEFAULT_LEADS_TABLE: &str = "whitelist";

/// Timeout for every outbound call, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// SendGrid API key
    pub sendgrid_api_key: String,

    /// SendGrid mail-send URL
    /// Example: https://api.sendgrid.com/v3/mail/send
    pub sendgrid_api_url: String,

    /// Sender address of the welcome email
    pub email_from: String,

    /// Base URL of the hosted database
    /// Example: https://abcd1234.supabase.co
    pub supabase_url: String,

    /// Service key for the hosted database
    pub supabase_key: String,

    /// Table leads are inserted into
    pub leads_table: String,

    /// Timeout applied to store and email requests
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let optional = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(ConfigError::Invalid {
                        name: "REQUEST_TIMEOUT_SECS",
                        value: raw.clone(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            sendgrid_api_key: required("SENDGRID_API_KEY")?,
            sendgrid_api_url: optional("SENDGRID_API_URL", DEFAULT_SENDGRID_API_URL),
            email_from: optional("WELCOME_EMAIL_FROM", DEFAULT_SENDER),
            supabase_url: required("SUPABASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            supabase_key: required("SUPABASE_KEY")?,
            leads_table: optional("LEADS_TABLE", DEFAULT_LEADS_TABLE),
            request_timeout,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("sendgrid_api_key", &"<redacted>")
            .field("sendgrid_api_url", &self.sendgrid_api_url)
            .field("email_from", &self.email_from)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &"<redacted>")
            .field("leads_table", &self.leads_table)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn required_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("SENDGRID_API_KEY", "SG.test-key"),
            ("SUPABASE_URL", "https://abcd1234.supabase.co/"),
            ("SUPABASE_KEY", "service-role-key"),
        ]
    }

    #[test]
    fn test_config_with_required_fields_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&required_vars())).unwrap();

        assert_eq!(config.sendgrid_api_key, "SG.test-key");
        assert_eq!(config.sendgrid_api_url, DEFAULT_SENDGRID_API_URL);
        assert_eq!(config.email_from, "noreply@yourapp.com");
        assert_eq!(config.supabase_url, "https://abcd1234.supabase.co");
        assert_eq!(config.leads_table, "whitelist");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_with_all_fields() {
        let mut vars = required_vars();
        vars.extend([
            ("SENDGRID_API_URL", "http://127.0.0.1:9000/send"),
            ("WELCOME_EMAIL_FROM", "hello@chatflow.ph"),
            ("LEADS_TABLE", "beta_leads"),
            ("REQUEST_TIMEOUT_SECS", "3"),
        ]);

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.sendgrid_api_url, "http://127.0.0.1:9000/send");
        assert_eq!(config.email_from, "hello@chatflow.ph");
        assert_eq!(config.leads_table, "beta_leads");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_missing_email_key_fails() {
        let vars: Vec<_> = required_vars()
            .into_iter()
            .filter(|(k, _)| *k != "SENDGRID_API_KEY")
            .collect();

        let result = Config::from_lookup(lookup_from(&vars));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("SENDGRID_API_KEY"));
    }

    #[test]
    fn test_missing_store_settings_fail() {
        let result = Config::from_lookup(lookup_from(&[("SENDGRID_API_KEY", "SG.key")]));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("SUPABASE_URL"));
    }

    #[test]
    fn test_blank_required_value_counts_as_missing() {
        let mut vars = required_vars();
        vars.retain(|(k, _)| *k != "SUPABASE_KEY");
        vars.push(("SUPABASE_KEY", "   "));

        let result = Config::from_lookup(lookup_from(&vars));

        assert_eq!(result.unwrap_err(), ConfigError::Missing("SUPABASE_KEY"));
    }

    #[test]
    fn test_invalid_timeout_fails() {
        for raw in ["zero", "0", "-5"] {
            let mut vars = required_vars();
            vars.push(("REQUEST_TIMEOUT_SECS", raw));

            let result = Config::from_lookup(lookup_from(&vars));

            assert_eq!(
                result.unwrap_err(),
                ConfigError::Invalid {
                    name: "REQUEST_TIMEOUT_SECS",
                    value: raw.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::Missing("SENDGRID_API_KEY").to_string(),
            "SENDGRID_API_KEY environment variable is not set"
        );
    }

    #[test]
    fn test_config_debug_redacts_secrets() {
        let config = Config::from_lookup(lookup_from(&required_vars())).unwrap();

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("https://abcd1234.supabase.co"));
        assert!(!debug_str.contains("SG.test-key"));
        assert!(!debug_str.contains("service-role-key"));
    }
}
