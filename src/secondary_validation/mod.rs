pub(crate) mod singapore_nric_checksum;

use crate::identity_number::Category;
pub use crate::scanner::config::SecondaryValidator;
pub use crate::secondary_validation::singapore_nric_checksum::{
    is_valid_format, SingaporeFinChecksum, SingaporeNricChecksum, SingaporeUinChecksum,
};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        match self {
            SecondaryValidator::SingaporeNricChecksum => {
                SingaporeNricChecksum.is_valid_match(regex_match)
            }
            SecondaryValidator::SingaporeUinChecksum => {
                SingaporeUinChecksum.is_valid_match(regex_match)
            }
            SecondaryValidator::SingaporeFinChecksum => {
                SingaporeFinChecksum.is_valid_match(regex_match)
            }
        }
    }
}

impl SecondaryValidator {
    /// The categories a candidate has to belong to for this validator to accept it
    pub fn categories(&self) -> &'static [Category] {
        match self {
            SecondaryValidator::SingaporeNricChecksum => &[Category::Uin, Category::Fin],
            SecondaryValidator::SingaporeUinChecksum => &[Category::Uin],
            SecondaryValidator::SingaporeFinChecksum => &[Category::Fin],
        }
    }
}
