use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rule_match::ReplacementType;
use crate::secondary_validation::singapore_nric_checksum::NRIC_LENGTH;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(tag = "type")]
pub enum MatchAction {
    /// Do not modify the input.
    #[default]
    None,
    /// Replace matches with a new string.
    Redact { replacement: String },
    /// Replace matches with a fingerprint of the number. Case variants of the same
    /// number produce the same hash.
    Hash,
    /// Replace the first or last n characters with asterisks.
    PartialRedact {
        direction: PartialRedactDirection,
        character_count: usize,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum PartialRedactDirection {
    FirstCharacters,
    LastCharacters,
}

const PARTIAL_REDACT_CHARACTER: char = '*';

#[derive(Debug, PartialEq, Eq, Error)]
pub enum MatchActionValidationError {
    #[error("Partial redaction chars must be non-zero")]
    PartialRedactionNumCharsZero,
    #[error("Partial redaction can't hide more than the 9 characters of a match, got {0}")]
    PartialRedactionNumCharsTooLarge(usize),
}

impl MatchAction {
    pub fn validate(&self) -> Result<(), MatchActionValidationError> {
        match self {
            MatchAction::PartialRedact {
                direction: _,
                character_count,
            } => {
                if *character_count == 0 {
                    Err(MatchActionValidationError::PartialRedactionNumCharsZero)
                } else if *character_count > NRIC_LENGTH {
                    Err(MatchActionValidationError::PartialRedactionNumCharsTooLarge(
                        *character_count,
                    ))
                } else {
                    Ok(())
                }
            }
            MatchAction::None | MatchAction::Redact { replacement: _ } | MatchAction::Hash => {
                Ok(())
            }
        }
    }

    /// If the match action will modify the content
    pub fn is_mutating(&self) -> bool {
        match self {
            MatchAction::None => false,
            MatchAction::Redact { .. } => true,
            MatchAction::Hash => true,
            MatchAction::PartialRedact { .. } => true,
        }
    }

    pub fn replacement_type(&self) -> ReplacementType {
        match self {
            MatchAction::None => ReplacementType::None,
            MatchAction::Redact { .. } => ReplacementType::Placeholder,
            MatchAction::Hash => ReplacementType::Hash,
            MatchAction::PartialRedact { direction, .. } => match direction {
                PartialRedactDirection::FirstCharacters => ReplacementType::PartialStart,
                PartialRedactDirection::LastCharacters => ReplacementType::PartialEnd,
            },
        }
    }

    /// Matched content is always a 9 character ASCII identity number, so byte and
    /// character offsets are the same.
    pub fn get_replacement(&self, matched_content: &str) -> Option<Replacement> {
        match self {
            MatchAction::None => None,
            MatchAction::Redact { replacement } => Some(Replacement {
                start: 0,
                end: matched_content.len(),
                replacement: Cow::Borrowed(replacement),
            }),
            MatchAction::Hash => Some(Replacement {
                start: 0,
                end: matched_content.len(),
                replacement: Cow::Owned(Self::hash(matched_content)),
            }),
            MatchAction::PartialRedact {
                direction,
                character_count,
            } => {
                let count = (*character_count).min(matched_content.len());
                let (start, end) = match direction {
                    PartialRedactDirection::FirstCharacters => (0, count),
                    PartialRedactDirection::LastCharacters => {
                        (matched_content.len() - count, matched_content.len())
                    }
                };
                Some(Replacement {
                    start,
                    end,
                    replacement: String::from(PARTIAL_REDACT_CHARACTER)
                        .repeat(count)
                        .into(),
                })
            }
        }
    }

    fn hash(match_result: &str) -> String {
        let hash = farmhash::fingerprint64(match_result.to_ascii_uppercase().as_bytes());
        format!("{hash:x}")
    }
}

#[derive(PartialEq, Debug)]
pub struct Replacement<'a> {
    pub start: usize,
    pub end: usize,
    pub replacement: Cow<'a, str>,
}
