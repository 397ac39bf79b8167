//! Host configuration parsed from environment variables.

use client::net::types::PublicConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub geocoder_url: String,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GEOCODER_URL`: default public Nominatim
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let supabase_url = required_url(&lookup, "SUPABASE_URL")?;
        let supabase_anon_key = required(&lookup, "SUPABASE_ANON_KEY")?;
        let geocoder_url = match non_blank(&lookup, "GEOCODER_URL") {
            Some(raw) => parse_url("GEOCODER_URL", &raw)?,
            None => DEFAULT_GEOCODER_URL.to_owned(),
        };
        let port = match non_blank(&lookup, "PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { port, supabase_url, supabase_anon_key, geocoder_url })
    }

    /// The browser-visible part served by `/api/config`.
    #[must_use]
    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            geocoder_url: self.geocoder_url.clone(),
        }
    }
}

fn non_blank(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<String, ConfigError> {
    non_blank(lookup, key).ok_or(ConfigError::Missing(key))
}

fn required_url(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<String, ConfigError> {
    let raw = required(lookup, key)?;
    parse_url(key, &raw)
}

fn parse_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("https://") || raw.starts_with("http://")) {
        return Err(ConfigError::Invalid { var, value: raw.to_owned() });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
