//! Runtime settings read from environment variables
//!
//! Variables:
//!   SITE_NAME, CONTACT_EMAIL, SOCIAL_LINKS (comma-separated), RESULT_DELAY_MS
//!
//! Unset or unparseable values fall back to the defaults below.

use std::env;
use std::time::Duration;

use serde::Serialize;

pub const DEFAULT_SITE_NAME: &str = "IPO Insights";
pub const DEFAULT_CONTACT_EMAIL: &str = "contact@example.com";
pub const DEFAULT_RESULT_DELAY_MS: u64 = 800;

/// Site metadata shown around calculator output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    pub name: String,
    pub contact_email: String,
    pub social_links: Vec<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            social_links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub site: SiteInfo,
    /// How long a form shows its loading state before revealing a result
    pub result_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            result_delay_ms: DEFAULT_RESULT_DELAY_MS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup (environment, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let name = lookup("SITE_NAME")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.site.name);

        let contact_email = lookup("CONTACT_EMAIL")
            .filter(|s| s.contains('@'))
            .unwrap_or(defaults.site.contact_email);

        let social_links = lookup("SOCIAL_LINKS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|link| !link.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let result_delay_ms = lookup("RESULT_DELAY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.result_delay_ms);

        Self {
            site: SiteInfo {
                name,
                contact_email,
                social_links,
            },
            result_delay_ms,
        }
    }

    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(settings(&[]), Settings::default());
        assert_eq!(Settings::default().result_delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_overrides() {
        let s = settings(&[
            ("SITE_NAME", "Market Desk"),
            ("CONTACT_EMAIL", "hello@marketdesk.in"),
            ("SOCIAL_LINKS", "https://x.com/md, ,https://youtube.com/@md"),
            ("RESULT_DELAY_MS", "250"),
        ]);
        assert_eq!(s.site.name, "Market Desk");
        assert_eq!(s.site.contact_email, "hello@marketdesk.in");
        assert_eq!(
            s.site.social_links,
            vec!["https://x.com/md", "https://youtube.com/@md"]
        );
        assert_eq!(s.result_delay_ms, 250);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let s = settings(&[
            ("SITE_NAME", "  "),
            ("CONTACT_EMAIL", "not-an-email"),
            ("RESULT_DELAY_MS", "soon"),
        ]);
        assert_eq!(s.site.name, DEFAULT_SITE_NAME);
        assert_eq!(s.site.contact_email, DEFAULT_CONTACT_EMAIL);
        assert_eq!(s.result_delay_ms, DEFAULT_RESULT_DELAY_MS);
    }
}
