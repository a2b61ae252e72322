use crate::match_action::MatchActionValidationError;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CreateScannerError {
    /// Invalid configuration of a match action
    #[error("Invalid match action for rule {rule_index}: {source}")]
    InvalidMatchAction {
        rule_index: usize,
        source: MatchActionValidationError,
    },
}

impl From<CreateScannerError> for i64 {
    fn from(value: CreateScannerError) -> i64 {
        match value {
            CreateScannerError::InvalidMatchAction { .. } => -4,
        }
    }
}
