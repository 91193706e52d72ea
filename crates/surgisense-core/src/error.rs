use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid date: {0}")]
    InvalidDate(#[from] jiff::Error),

    #[error("invalid recovery period: {0} days")]
    InvalidRecoveryPeriod(u32),
}
