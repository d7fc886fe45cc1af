//! Crate-wide error type
//!
//! All three kinds abort a run immediately and carry the offending step
//! and body indices where they apply. Runs are deterministic, so nothing
//! is ever retried: a run either completes every step with a valid
//! trajectory or fails here.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("bodies {i} and {j} within minimum separation at step {step} (d = {dist:.3e} m)")]
    Singularity {
        step: usize,
        i: usize,
        j: usize,
        dist: f64,
    },

    #[error("non-finite {quantity} for body {body} at step {step}")]
    NumericDivergence {
        step: usize,
        body: usize,
        quantity: &'static str,
    },
}
