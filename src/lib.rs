// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod identity_number;
mod match_action;
mod observability;
mod rule_match;
mod scanner;
mod secondary_validation;

// This is the public API of the library
pub use identity_number::{Category, IdentityNumber, ParseIdentityNumberError, Prefix};
pub use match_action::{MatchAction, MatchActionValidationError, PartialRedactDirection};
pub use observability::labels::Labels;
pub use rule_match::{ReplacementType, RuleMatch};
pub use scanner::{config::RuleConfig, error::CreateScannerError, Scanner, ScannerBuilder};
pub use secondary_validation::{
    is_valid_format, SecondaryValidator, SingaporeFinChecksum, SingaporeNricChecksum,
    SingaporeUinChecksum, Validator,
};

/// Returns true if `input` is a well-formed Singapore NRIC/FIN whose check letter
/// matches its digits.
///
/// Every input maps to a boolean: malformed strings (empty, wrong length, unknown
/// prefix, non-digit body, forbidden suffix) are simply invalid.
///
/// ```
/// assert!(sg_nric::validate("S9912345A"));
/// assert!(sg_nric::validate("t0144028j"));
/// assert!(!sg_nric::validate("S1234567Z"));
/// ```
pub fn validate(input: &str) -> bool {
    SingaporeNricChecksum.is_valid_match(input)
}
