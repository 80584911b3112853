use anyhow::{Context, Result};
use platform_upstream::UpstreamConfig;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub upstream: UpstreamConfig,
    pub cors_allowed_origins: Vec<String>,
    pub secure_cookies: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("BASE_URL").context("BASE_URL missing")?;
        let mut upstream = UpstreamConfig::new(base_url.trim()).context("invalid BASE_URL")?;
        if let Some(host) = lookup("UPSTREAM_HOST")
            .or_else(|| lookup("HOST"))
            .filter(|host| !host.trim().is_empty())
        {
            upstream = upstream
                .with_host(host.trim())
                .context("invalid UPSTREAM_HOST")?;
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.into())
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>();

        let secure_cookies = lookup("COOKIE_SECURE")
            .map(|val| matches!(val.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            upstream,
            cors_allowed_origins,
            secure_cookies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn base_url_is_required() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("BASE_URL"));
    }

    #[test]
    fn defaults_apply() {
        let config = load(&[("BASE_URL", "http://backend:8080/api")]).unwrap();
        assert_eq!(config.upstream.base_url().as_str(), "http://backend:8080/api");
        assert_eq!(config.cors_allowed_origins, vec![DEFAULT_CORS_ORIGIN.to_string()]);
        assert!(!config.secure_cookies);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("BASE_URL", "https://backend.example.com"),
            ("HOST", "backend.internal"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example.com, ,https://b.example.com"),
            ("COOKIE_SECURE", "TRUE"),
        ])
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example.com", "https://b.example.com"]
        );
        assert!(config.secure_cookies);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(load(&[("BASE_URL", "backend:8080")]).is_err());
    }
}
