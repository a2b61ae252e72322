use crate::scanner::config::{RuleConfig, SecondaryValidator};
use crate::{
    Category, CreateScannerError, MatchAction, MatchActionValidationError,
    PartialRedactDirection, ReplacementType, RuleMatch, ScannerBuilder,
};


fn redact(replacement: &str) -> MatchAction {
    MatchAction::Redact {
        replacement: replacement.to_string(),
    }
}

#[test]
fn simple_redaction() {
    let rule = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum)
        .match_action(redact("[NRIC]"));

    let scanner = ScannerBuilder::new(&[rule]).build().unwrap();

    let mut content = "id: S9912345A, other: T0144028J.".to_string();
    let matches = scanner.scan(&mut content);

    assert_eq!(matches.len(), 2);
    assert_eq!(content, "id: [NRIC], other: [NRIC].");
    assert_eq!(
        matches[0],
        RuleMatch {
            rule_index: 0,
            category: Category::Uin,
            replacement_type: ReplacementType::Placeholder,
            start_index: 4,
            end_index_exclusive: 10,
            shift_offset: -3,
            match_value: None,
        }
    );
    assert_eq!(
        matches[1],
        RuleMatch {
            rule_index: 0,
            category: Category::Uin,
            replacement_type: ReplacementType::Placeholder,
            start_index: 19,
            end_index_exclusive: 25,
            shift_offset: -6,
            match_value: None,
        }
    );
}

#[test]
fn checksum_filters_candidates() {
    let rule = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum)
        .match_action(redact("[NRIC]"));
    let scanner = ScannerBuilder::new(&[rule]).build().unwrap();

    // wrong check letter, forbidden suffix, unknown prefix, glued to other characters
    let mut content = "S9912345B S1234567Z X1234567A AS9912345A S9912345A1 F1234567N".to_string();
    let matches = scanner.scan(&mut content);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].category, Category::Fin);
    assert_eq!(
        content,
        "S9912345B S1234567Z X1234567A AS9912345A S9912345A1 [NRIC]"
    );
}

#[test]
fn case_insensitive_matches() {
    let rule = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum)
        .match_action(redact("[NRIC]"));
    let scanner = ScannerBuilder::new(&[rule]).build().unwrap();

    let mut content = "s9912345a g1234567x".to_string();
    let matches = scanner.scan(&mut content);

    assert_eq!(matches.len(), 2);
    assert_eq!(content, "[NRIC] [NRIC]");
}

#[test]
fn category_restricted_rules() {
    let uin = RuleConfig::new(SecondaryValidator::SingaporeUinChecksum)
        .match_action(redact("[UIN]"));
    let fin = RuleConfig::new(SecondaryValidator::SingaporeFinChecksum)
        .match_action(redact("[FIN]"));
    let scanner = ScannerBuilder::new(&[uin, fin]).build().unwrap();

    let mut content = "F1234567N S9912345A G1234567X T0144028J".to_string();
    let matches = scanner.scan(&mut content);

    assert_eq!(content, "[FIN] [UIN] [FIN] [UIN]");
    let rule_indices: Vec<_> = matches.iter().map(|m| m.rule_index).collect();
    assert_eq!(rule_indices, vec![1, 0, 1, 0]);
}

#[test]
fn overlapping_rules_keep_the_mutating_one() {
    let report_only = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum);
    let redacting = RuleConfig::new(SecondaryValidator::SingaporeUinChecksum)
        .match_action(redact("[UIN]"));
    let scanner = ScannerBuilder::new(&[report_only, redacting]).build().unwrap();

    let mut content = "S9912345A F1234567N".to_string();
    let matches = scanner.scan(&mut content);

    assert_eq!(content, "[UIN] F1234567N");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].rule_index, 1);
    assert_eq!(matches[0].replacement_type, ReplacementType::Placeholder);
    assert_eq!(matches[1].rule_index, 0);
    assert_eq!(matches[1].replacement_type, ReplacementType::None);
    assert_eq!(matches[1].start_index, 6);
    assert_eq!(matches[1].end_index_exclusive, 15);
}

#[test]
fn overlapping_rules_keep_the_earlier_rule() {
    let first = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum)
        .match_action(redact("[FIRST]"));
    let second = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum)
        .match_action(redact("[SECOND]"));
    let scanner = ScannerBuilder::new(&[first, second]).build().unwrap();

    let mut content = "T0144028J".to_string();
    let matches = scanner.scan(&mut content);

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].rule_index, 0);
    assert_eq!(content, "[FIRST]");
}

#[test]
fn partial_redaction() {
    let rule = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum).match_action(
        MatchAction::PartialRedact {
            direction: PartialRedactDirection::FirstCharacters,
            character_count: 5,
        },
    );
    let scanner = ScannerBuilder::new(&[rule]).build().unwrap();

    let mut content = "NRIC S9912345A".to_string();
    let matches = scanner.scan(&mut content);

    assert_eq!(content, "NRIC *****345A");
    assert_eq!(matches[0].replacement_type, ReplacementType::PartialStart);
    assert_eq!(matches[0].start_index, 5);
    assert_eq!(matches[0].end_index_exclusive, 14);
    assert_eq!(matches[0].shift_offset, 0);
}

#[test]
fn hash_is_identical_for_case_variants() {
    let rule = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum)
        .match_action(MatchAction::Hash);
    let scanner = ScannerBuilder::new(&[rule]).build().unwrap();

    let mut content = "S9912345A s9912345a".to_string();
    let matches = scanner.scan(&mut content);

    assert_eq!(matches.len(), 2);
    let (first, second) = content.split_once(' ').unwrap();
    assert_eq!(first, second);
    assert_ne!(first, "S9912345A");
    assert_eq!(matches[1].replacement_type, ReplacementType::Hash);
}

#[test]
fn return_matches() {
    let rule = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum)
        .match_action(redact("[NRIC]"));
    let scanner = ScannerBuilder::new(&[rule])
        .with_return_matches(true)
        .build()
        .unwrap();

    let mut content = "é S9912345A".to_string();
    let matches = scanner.scan(&mut content);

    assert_eq!(content, "é [NRIC]");
    assert_eq!(matches[0].match_value, Some("S9912345A".to_string()));
    assert_eq!(matches[0].start_index, 3);
    assert_eq!(matches[0].end_index_exclusive, 9);
}

#[test]
fn no_match_leaves_content_untouched() {
    let rule = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum)
        .match_action(redact("[NRIC]"));
    let scanner = ScannerBuilder::new(&[rule]).build().unwrap();

    for original in ["", "nothing to see", "S123", "S99123456A"] {
        let mut content = original.to_string();
        assert!(scanner.scan(&mut content).is_empty());
        assert_eq!(content, original);
    }
}

#[test]
fn invalid_match_action_is_rejected() {
    let valid = RuleConfig::new(SecondaryValidator::SingaporeNricChecksum);
    let invalid = valid.match_action(MatchAction::PartialRedact {
        direction: PartialRedactDirection::LastCharacters,
        character_count: 0,
    });

    let result = ScannerBuilder::new(&[valid, invalid]).build();
    let error = result.err().unwrap();
    assert_eq!(
        error,
        CreateScannerError::InvalidMatchAction {
            rule_index: 1,
            source: MatchActionValidationError::PartialRedactionNumCharsZero,
        }
    );
    assert_eq!(i64::from(error), -4);
}
