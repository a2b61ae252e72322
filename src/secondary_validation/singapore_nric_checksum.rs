use crate::identity_number::{Category, Prefix};
use crate::secondary_validation::Validator;

pub struct SingaporeNricChecksum;

/// Only accepts `S` and `T` numbers
pub struct SingaporeUinChecksum;

/// Only accepts `F` and `G` numbers
pub struct SingaporeFinChecksum;

pub(crate) const NRIC_LENGTH: usize = 9;
pub(crate) const DIGIT_COUNT: usize = 7;

const WEIGHTS: [u32; DIGIT_COUNT] = [2, 7, 6, 5, 4, 3, 2];
const REISSUED_SERIES_OFFSET: u32 = 4;
const FORBIDDEN_SUFFIXES: [char; 5] = ['O', 'S', 'V', 'Y', 'Z'];

impl Validator for SingaporeNricChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        is_valid_format(regex_match) && has_valid_checksum(regex_match)
    }
}

impl Validator for SingaporeUinChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        has_category(regex_match, Category::Uin)
            && SingaporeNricChecksum.is_valid_match(regex_match)
    }
}

impl Validator for SingaporeFinChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        has_category(regex_match, Category::Fin)
            && SingaporeNricChecksum.is_valid_match(regex_match)
    }
}

/// Checks the shape of an identity number: a `S`, `T`, `F` or `G` prefix, 7 digits and a
/// letter that isn't one of `O`, `S`, `V`, `Y`, `Z`. Case-insensitive, the checksum isn't verified.
pub fn is_valid_format(input: &str) -> bool {
    let bytes = input.as_bytes();
    // multi-byte characters can't be part of a valid number, so byte length is enough
    if bytes.len() != NRIC_LENGTH {
        return false;
    }

    Prefix::from_char(bytes[0] as char).is_some()
        && bytes[1..=DIGIT_COUNT].iter().all(u8::is_ascii_digit)
        && bytes[NRIC_LENGTH - 1].is_ascii_alphabetic()
        && !is_forbidden_suffix(bytes[NRIC_LENGTH - 1].to_ascii_uppercase() as char)
}

/// Expects an input accepted by [is_valid_format]. Anything else is reported as invalid.
pub(crate) fn has_valid_checksum(input: &str) -> bool {
    let mut chars = input.chars();
    let Some(prefix) = chars.next().and_then(Prefix::from_char) else {
        return false;
    };
    let Some(check_letter) = chars.next_back() else {
        return false;
    };

    let mut digits = [0u8; DIGIT_COUNT];
    let mut digit_count = 0;
    for (slot, c) in digits.iter_mut().zip(chars.by_ref()) {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        *slot = digit as u8;
        digit_count += 1;
    }
    if digit_count != DIGIT_COUNT || chars.next().is_some() {
        return false;
    }

    expected_check_letter(prefix, &digits).eq_ignore_ascii_case(&check_letter)
}

pub(crate) fn expected_check_letter(prefix: Prefix, digits: &[u8; DIGIT_COUNT]) -> char {
    let mut sum: u32 = digits
        .iter()
        .zip(WEIGHTS)
        .map(|(digit, weight)| *digit as u32 * weight)
        .sum();

    if prefix.is_reissued_series() {
        sum += REISSUED_SERIES_OFFSET;
    }

    prefix.category().check_letters()[(sum % 11) as usize]
}

pub(crate) fn is_forbidden_suffix(c: char) -> bool {
    FORBIDDEN_SUFFIXES.contains(&c)
}

fn has_category(input: &str, category: Category) -> bool {
    input
        .chars()
        .next()
        .and_then(Prefix::from_char)
        .is_some_and(|prefix| prefix.category() == category)
}
