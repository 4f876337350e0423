use std::time::Duration;

/// Server-side settings that don't belong in the Leptos configuration.
/// Provided to server functions through context.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Form-relay endpoint that receives contact submissions (e.g. a Formspree form).
    pub contact_relay_url: Option<String>,
    pub contact_relay_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_relay_url: None,
            contact_relay_timeout: Duration::from_secs(10),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("CONTACT_RELAY_URL") {
            let v = v.trim();
            if !v.is_empty() {
                config.contact_relay_url = Some(v.to_string());
            }
        }
        if let Ok(v) = std::env::var("CONTACT_RELAY_TIMEOUT_SECS") {
            match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.contact_relay_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %v, "ignoring invalid CONTACT_RELAY_TIMEOUT_SECS"),
            }
        }

        if config.contact_relay_url.is_none() {
            tracing::warn!("CONTACT_RELAY_URL is not set; contact form submissions will fail");
        }
        config
    }
}
