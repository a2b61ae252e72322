use crate::secondary_validation::singapore_nric_checksum::{
    expected_check_letter, is_forbidden_suffix, DIGIT_COUNT, NRIC_LENGTH,
};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumIter};
use thiserror::Error;

const UIN_CHECK_LETTERS: [char; 11] = ['J', 'Z', 'I', 'H', 'G', 'F', 'E', 'D', 'C', 'B', 'A'];
const FIN_CHECK_LETTERS: [char; 11] = ['X', 'W', 'U', 'T', 'R', 'Q', 'P', 'N', 'M', 'L', 'K'];

/// The two families of identity numbers. Each one encodes its checksum with its own alphabet.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Citizens and permanent residents (`S` and `T` prefixes)
    Uin,
    /// Foreigners (`F` and `G` prefixes)
    Fin,
}

impl Category {
    /// The alphabet a `S mod 11` index is looked up in.
    pub fn check_letters(&self) -> &'static [char; 11] {
        match self {
            Category::Uin => &UIN_CHECK_LETTERS,
            Category::Fin => &FIN_CHECK_LETTERS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum Prefix {
    S,
    T,
    F,
    G,
}

impl Prefix {
    /// Case-insensitive. Returns `None` for anything outside `{S, T, F, G}`.
    pub fn from_char(c: char) -> Option<Prefix> {
        match c.to_ascii_uppercase() {
            'S' => Some(Prefix::S),
            'T' => Some(Prefix::T),
            'F' => Some(Prefix::F),
            'G' => Some(Prefix::G),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Prefix::S => 'S',
            Prefix::T => 'T',
            Prefix::F => 'F',
            Prefix::G => 'G',
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Prefix::S | Prefix::T => Category::Uin,
            Prefix::F | Prefix::G => Category::Fin,
        }
    }

    /// `T` and `G` numbers belong to the series issued from 2000 onwards, which shifts
    /// the weighted sum so they don't collide with the older `S` and `F` ranges.
    pub fn is_reissued_series(&self) -> bool {
        matches!(self, Prefix::T | Prefix::G)
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseIdentityNumberError {
    #[error("An identity number has 9 characters, got {0}")]
    InvalidLength(usize),

    #[error("Invalid prefix '{0}', expected one of S, T, F or G")]
    InvalidPrefix(char),

    #[error("Expected a digit at position {position}, got '{found}'")]
    InvalidDigit { position: usize, found: char },

    #[error("Invalid suffix '{0}', expected a letter")]
    InvalidSuffix(char),

    #[error("Suffix '{0}' is never used as a check letter")]
    ForbiddenSuffix(char),

    #[error("Check letter mismatch: expected '{expected}', got '{found}'")]
    ChecksumMismatch { expected: char, found: char },
}

/// A Singapore NRIC/FIN whose format and check letter have been verified.
///
/// Parsing is case-insensitive, the [Display] form is always upper case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct IdentityNumber {
    prefix: Prefix,
    digits: [u8; DIGIT_COUNT],
    check_letter: char,
}

impl IdentityNumber {
    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn category(&self) -> Category {
        self.prefix.category()
    }

    pub fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.digits
    }

    pub fn check_letter(&self) -> char {
        self.check_letter
    }
}

impl FromStr for IdentityNumber {
    type Err = ParseIdentityNumberError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != NRIC_LENGTH {
            return Err(ParseIdentityNumberError::InvalidLength(chars.len()));
        }

        let prefix =
            Prefix::from_char(chars[0]).ok_or(ParseIdentityNumberError::InvalidPrefix(chars[0]))?;

        let mut digits = [0u8; DIGIT_COUNT];
        for (i, c) in chars[1..=DIGIT_COUNT].iter().enumerate() {
            // `char::to_digit` accepts ASCII digits only, so fullwidth digits are rejected here
            digits[i] = c
                .to_digit(10)
                .ok_or(ParseIdentityNumberError::InvalidDigit {
                    position: i + 1,
                    found: *c,
                })? as u8;
        }

        let suffix = chars[NRIC_LENGTH - 1];
        if !suffix.is_ascii_alphabetic() {
            return Err(ParseIdentityNumberError::InvalidSuffix(suffix));
        }
        let suffix = suffix.to_ascii_uppercase();
        if is_forbidden_suffix(suffix) {
            return Err(ParseIdentityNumberError::ForbiddenSuffix(suffix));
        }

        let expected = expected_check_letter(prefix, &digits);
        if expected != suffix {
            return Err(ParseIdentityNumberError::ChecksumMismatch {
                expected,
                found: suffix,
            });
        }

        Ok(IdentityNumber {
            prefix,
            digits,
            check_letter: suffix,
        })
    }
}

impl Display for IdentityNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix)?;
        for digit in self.digits {
            write!(f, "{digit}")?;
        }
        write!(f, "{}", self.check_letter)
    }
}
