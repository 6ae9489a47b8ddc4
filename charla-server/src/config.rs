use charla_core::IceServerConfig;
use std::env;

pub const DEFAULT_PORT: u16 = 3000;

/// The translation collaborator runs as its own process on a fixed port.
pub const TRANSLATE_PORT: u16 = 5000;

/// Hub port from the `PORT` environment variable, falling back to the
/// default when unset or unparsable.
pub fn hub_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Public STUN plus the open relay TURN fallback for clients behind
/// restrictive NATs.
pub fn default_ice_servers() -> Vec<IceServerConfig> {
    vec![
        IceServerConfig {
            urls: vec!["stun:stun.l.google.com:19302".to_string()],
            username: None,
            credential: None,
        },
        IceServerConfig {
            urls: vec!["turn:openrelay.metered.ca:80".to_string()],
            username: Some("openrelayproject".to_string()),
            credential: Some("openrelayproject".to_string()),
        },
    ]
}
