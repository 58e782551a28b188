//! Errors raised while building a simulation from its startup parameters.
//!
//! Nothing in the per-frame update can fail; every variant here is caught
//! before the first step runs.

/// Invalid startup configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("world size must be positive and finite, got {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },

    #[error("max speed must be positive, got {0}")]
    InvalidMaxSpeed(f32),

    #[error("probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("{name} must not be negative, got {value}")]
    NegativeDistance { name: &'static str, value: f32 },

    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f32),

    #[error("obstacle radius must not be negative, got {0}")]
    NegativeRadius(f32),

    #[error("step rate must be at least one step per second, got {0}")]
    InvalidStepRate(f32),
}
