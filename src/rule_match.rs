use crate::identity_number::Category;
use std::fmt::{Display, Formatter};

/// Metadata about a rule match.
#[derive(Debug, PartialEq, Eq)]
pub struct RuleMatch {
    /// The index of the rule that matched. This preserves the order
    /// of rules that were passed into the scanner.
    pub rule_index: usize,

    /// Whether the matched number is a UIN or a FIN
    pub category: Category,

    /// The type of replacement that happened
    pub replacement_type: ReplacementType,

    /// The start of the match (UTF8 byte index). This points to the replaced text, and not the original text.
    pub start_index: usize,

    /// The end, exclusive of the match. This points to the replaced text, and not
    /// the original text.
    pub end_index_exclusive: usize,

    ///  the difference between the end (UTF8 byte index) of the match data in the
    ///  **INPUT** string and the end (UTF8 byte index) of the match data applied to the new **OUTPUT** string after match actions
    ///  performed.
    pub shift_offset: isize,

    // matched string copied from content. If scanner has the return_matches set to true
    pub match_value: Option<String>,
}

/// A match found in the content, before match actions are applied
pub(crate) struct InternalRuleMatch {
    pub rule_index: usize,
    pub category: Category,

    /// The index of the start of the match from the **INPUT** string (byte index of a UTF8 string)
    pub utf8_start: usize,

    /// The index of the end of a match from the **INPUT** string, exclusive (byte index of a UTF8 string)
    pub utf8_end: usize,
}

impl InternalRuleMatch {
    pub fn len(&self) -> usize {
        self.utf8_end - self.utf8_start
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReplacementType {
    None,
    Placeholder,
    Hash,
    PartialStart,
    PartialEnd,
}

impl Display for ReplacementType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplacementType::None => write!(f, "none"),
            ReplacementType::Placeholder => write!(f, "placeholder"),
            ReplacementType::Hash => write!(f, "hash"),
            ReplacementType::PartialStart => write!(f, "partial_beginning"),
            ReplacementType::PartialEnd => write!(f, "partial_end"),
        }
    }
}
