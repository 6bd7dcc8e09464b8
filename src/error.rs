use thiserror::Error;

/// Setup-time integration errors. These surface immediately to the
/// integrator; per-frame capability gaps (no memory probe, no collision
/// layer, no spatial root) degrade silently instead and never appear here.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("unknown debug flag: {0}")]
    UnknownFlag(String),

    #[error("hook already installed for {target}::{method}")]
    HookInstalled { target: String, method: String },
}
