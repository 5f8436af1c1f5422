// src/config.rs
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.tallentgallery.online:446/deploy";
pub const COPIED_ACK_DELAY: Duration = Duration::from_secs(3);

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid GitHub URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Form, error line and a plain "Copy URL" button.
    Classic,
    /// Adds the essential-points checklist, a copy icon and a timed "Copied" note.
    Guided,
}

impl Variant {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "guided" => Some(Self::Guided),
            _ => None,
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Classic => "Heavy traffic now, please try later",
            Self::Guided => "Deployment failed check the essential points",
        }
    }

    pub fn copied_ack_delay(self) -> Option<Duration> {
        match self {
            Self::Classic => None,
            Self::Guided => Some(COPIED_ACK_DELAY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub variant: Variant,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            variant: Variant::Guided,
        }
    }
}

impl Config {
    /// Defaults, overridden by `DEPLOY_ENDPOINT` / `DEPLOY_VARIANT` at build time.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("DEPLOY_ENDPOINT"), option_env!("DEPLOY_VARIANT"))
    }

    fn from_overrides(endpoint: Option<&str>, variant: Option<&str>) -> Self {
        let mut cfg = Self::default();
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            cfg.endpoint = endpoint.to_string();
        }
        if let Some(raw) = variant {
            match Variant::parse(raw) {
                Some(v) => cfg.variant = v,
                None => log::warn!("ignoring unknown DEPLOY_VARIANT {raw:?}"),
            }
        }
        cfg
    }
}
