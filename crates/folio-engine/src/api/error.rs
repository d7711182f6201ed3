use thiserror::Error;

/// Construction-time configuration faults.
/// Every variant is a startup defect: the app refuses to build rather than
/// carrying a half-wired component into the frame loop.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("typing phrase list is empty")]
    NoPhrases,
    #[error("typing phrase {0} is blank")]
    BlankPhrase(usize),
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("max_particles must be at least 1")]
    ZeroParticleCap,
    #[error("cursor smoothing factor {0} must be in (0, 1]")]
    BadSmoothing(f32),
}
