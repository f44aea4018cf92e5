#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Could not navigate to {target}: {reason}")]
    Navigation { target: String, reason: String },
}
