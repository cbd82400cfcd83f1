//! Simulator error type.
//!
//! Malformed-but-parseable input (unknown shipment endpoints, unroutable
//! pairs) is skipped with a diagnostic and never surfaces here; only truly
//! invalid calls produce an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot simulate over an empty network")]
    EmptyNetwork,

    #[error("main route share {0} is outside [0, 1]")]
    InvalidShare(f64),
}

pub type SimResult<T> = Result<T, SimError>;
