use thiserror::Error;

/// Failures while loading the sprite sets. All of them are fatal at startup:
/// painting with a partial set would break the connector contract.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to load sprite {path}: {reason}")]
    Load { path: String, reason: String },
    #[error("sprite set {prefix} has {found} sprites, expected {expected}")]
    Incomplete {
        prefix: char,
        found: usize,
        expected: usize,
    },
}
