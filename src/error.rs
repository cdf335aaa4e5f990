use strum_macros::Display;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum ErrorKind {
    Load,
    Bind,
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct VulnDashError {
    pub kind: ErrorKind,
    pub message: String,
    pub sentry: bool,
}
