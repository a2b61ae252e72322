use self::metrics::{RuleMetrics, ScannerMetrics};
use crate::identity_number::Prefix;
use crate::rule_match::{InternalRuleMatch, RuleMatch};
use crate::scanner::config::{RuleConfig, SecondaryValidator};
use crate::scanner::error::CreateScannerError;
pub use crate::secondary_validation::Validator;
use crate::{Labels, MatchAction};
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Instant;

pub mod config;
pub mod error;
pub mod metrics;

#[cfg(test)]
mod test;

lazy_static! {
    // Anything shaped like an identity number. Validators decide which candidates are real matches.
    static ref CANDIDATE_PATTERN: Regex = Regex::new(r"(?i)\b[STFG][0-9]{7}[A-Z]\b").unwrap();
}

/// This is the internal representation of a rule after it has been validated / compiled.
struct CompiledRule {
    validator: SecondaryValidator,
    match_action: MatchAction,
    metrics: RuleMetrics,
}

pub struct Scanner {
    rules: Vec<CompiledRule>,
    metrics: ScannerMetrics,
    return_matches: bool,
}

impl Scanner {
    pub fn builder(rules: &[RuleConfig]) -> ScannerBuilder<'_> {
        ScannerBuilder::new(rules)
    }

    // This function scans the given content with the rules configured in the scanner.
    // Match actions are applied to the content in place.
    // The return value is a list of RuleMatch objects, sorted by start index, with indices
    // pointing into the mutated content.
    pub fn scan(&self, content: &mut String) -> Vec<RuleMatch> {
        let start = Instant::now();

        let mut rule_matches = self.find_rule_matches(content);
        self.sort_and_remove_overlapping_rules(&mut rule_matches);

        let mut output_rule_matches = Vec::with_capacity(rule_matches.len());
        self.apply_match_actions(content, &rule_matches, &mut output_rule_matches);

        self.record_metrics(&output_rule_matches, start);
        output_rule_matches
    }

    fn find_rule_matches(&self, content: &str) -> Vec<InternalRuleMatch> {
        let mut rule_matches = vec![];

        for candidate in CANDIDATE_PATTERN.find_iter(content) {
            let Some(category) = candidate
                .as_str()
                .chars()
                .next()
                .and_then(Prefix::from_char)
                .map(|prefix| prefix.category())
            else {
                continue;
            };

            for (rule_index, rule) in self.rules.iter().enumerate() {
                if !rule.validator.categories().contains(&category) {
                    continue;
                }
                if rule.validator.is_valid_match(candidate.as_str()) {
                    rule_matches.push(InternalRuleMatch {
                        rule_index,
                        category,
                        utf8_start: candidate.start(),
                        utf8_end: candidate.end(),
                    });
                } else {
                    rule.metrics.false_positive_checksum.increment(1);
                }
            }
        }
        rule_matches
    }

    fn record_metrics(&self, output_rule_matches: &[RuleMatch], start: Instant) {
        // Record detection time
        self.metrics
            .duration_ns
            .increment(start.elapsed().as_nanos() as u64);
        // Add number of scanned events
        self.metrics.num_scanned_events.increment(1);
        // Add number of matches
        self.metrics
            .match_count
            .increment(output_rule_matches.len() as u64);
    }

    /// Apply mutations from actions, and shift indices to match the mutated values.
    /// This assumes the matches are all from the content given, and are sorted by start index.
    fn apply_match_actions(
        &self,
        content: &mut String,
        rule_matches: &[InternalRuleMatch],
        output_rule_matches: &mut Vec<RuleMatch>,
    ) {
        // The current difference in length between the original and mutated string
        let mut utf8_byte_delta: isize = 0;

        for rule_match in rule_matches {
            output_rule_matches.push(self.apply_match_actions_for_string(
                content,
                rule_match,
                &mut utf8_byte_delta,
            ));
        }
    }

    /// This will be called once for each match. The rules must be passed in in order of the start index. Mutating rules must not overlap.
    fn apply_match_actions_for_string(
        &self,
        content: &mut String,
        rule_match: &InternalRuleMatch,
        utf8_byte_delta: &mut isize,
    ) -> RuleMatch {
        let rule = &self.rules[rule_match.rule_index];

        let mutated_utf8_match_start = (rule_match.utf8_start as isize + *utf8_byte_delta) as usize;
        let mutated_utf8_match_end = (rule_match.utf8_end as isize + *utf8_byte_delta) as usize;

        // Matches must have valid indices
        debug_assert!(content.is_char_boundary(mutated_utf8_match_start));
        debug_assert!(content.is_char_boundary(mutated_utf8_match_end));

        let matched_content = &content[mutated_utf8_match_start..mutated_utf8_match_end];
        let matched_content_copy = self.return_matches.then(|| matched_content.to_string());

        if let Some(replacement) = rule.match_action.get_replacement(matched_content) {
            let before_replacement_len = replacement.end - replacement.start;
            let replacement_start = mutated_utf8_match_start + replacement.start;
            let replacement_end = mutated_utf8_match_start + replacement.end;

            // update indices to match the new mutated content
            *utf8_byte_delta +=
                replacement.replacement.len() as isize - before_replacement_len as isize;

            content.replace_range(replacement_start..replacement_end, &replacement.replacement);
        }

        let shift_offset = *utf8_byte_delta;

        RuleMatch {
            rule_index: rule_match.rule_index,
            category: rule_match.category,
            replacement_type: rule.match_action.replacement_type(),
            start_index: mutated_utf8_match_start,
            end_index_exclusive: (rule_match.utf8_end as isize + shift_offset) as usize,
            shift_offset,
            match_value: matched_content_copy,
        }
    }

    fn sort_and_remove_overlapping_rules(&self, rule_matches: &mut Vec<InternalRuleMatch>) {
        // Some of the scanner code relies on the behavior here, such as the sort order and removal of overlapping mutating rules.
        // Be very careful if this function is modified.

        rule_matches.sort_unstable_by(|a, b| {
            // Mutating rules are a higher priority (earlier in the list)
            let ord = self.rules[a.rule_index]
                .match_action
                .is_mutating()
                .cmp(&self.rules[b.rule_index].match_action.is_mutating())
                .reverse();

            // Earlier start offset
            let ord = ord.then(a.utf8_start.cmp(&b.utf8_start));

            // Longer matches
            let ord = ord.then(a.len().cmp(&b.len()).reverse());

            // Matches from earlier rules
            let ord = ord.then(a.rule_index.cmp(&b.rule_index));

            // swap the order of everything so matches can be efficiently popped off the back as they are processed
            ord.reverse()
        });

        let mut retained_rules: Vec<InternalRuleMatch> = vec![];

        'rule_matches: while let Some(rule_match) = rule_matches.pop() {
            if self.rules[rule_match.rule_index].match_action.is_mutating() {
                // Mutating rules are kept only if they don't overlap with a previous rule.
                if let Some(last) = retained_rules.last() {
                    if last.utf8_end > rule_match.utf8_start {
                        continue;
                    }
                }
            } else {
                // Only retain if it doesn't overlap with any other rule. Since mutating matches are sorted before non-mutated matches
                // this needs to check all retained matches (instead of just the last one)
                for retained_rule in &retained_rules {
                    if retained_rule.utf8_start < rule_match.utf8_end
                        && retained_rule.utf8_end > rule_match.utf8_start
                    {
                        continue 'rule_matches;
                    }
                }
            };
            retained_rules.push(rule_match);
        }

        // ensure rules are sorted by start index (other parts of the library required this to function correctly)
        retained_rules.sort_unstable_by_key(|rule_match| rule_match.utf8_start);

        *rule_matches = retained_rules;
    }
}

pub struct ScannerBuilder<'a> {
    rules: &'a [RuleConfig],
    labels: Labels,
    return_matches: bool,
}

impl ScannerBuilder<'_> {
    pub fn new(rules: &[RuleConfig]) -> ScannerBuilder<'_> {
        ScannerBuilder {
            rules,
            labels: Labels::empty(),
            return_matches: false,
        }
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_return_matches(mut self, value: bool) -> Self {
        self.return_matches = value;
        self
    }

    pub fn build(self) -> Result<Scanner, CreateScannerError> {
        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(rule_index, config)| {
                config
                    .match_action
                    .validate()
                    .map_err(|source| CreateScannerError::InvalidMatchAction {
                        rule_index,
                        source,
                    })?;
                Ok(CompiledRule {
                    validator: config.validator.clone(),
                    match_action: config.match_action.clone(),
                    metrics: RuleMetrics::new(
                        &self.labels.clone_with_labels(config.labels.clone()),
                    ),
                })
            })
            .collect::<Result<Vec<_>, CreateScannerError>>()?;

        Ok(Scanner {
            rules,
            metrics: ScannerMetrics::new(&self.labels),
            return_matches: self.return_matches,
        })
    }
}
