//! Ordered pattern cascades with first-success-wins semantics
//!
//! A cascade is a table of `(pattern, extraction fn)` rules. The table is data:
//! adding or reordering rules never touches the evaluation loop below.

use regex::{Captures, Regex};

/// Turns one regex match into a value, or declines it
pub type ExtractFn<T> = fn(&Captures<'_>) -> Option<T>;

/// A single named rule in a cascade
pub struct PatternRule<T> {
    id: &'static str,
    pattern: Regex,
    extract: ExtractFn<T>,
}

impl<T> PatternRule<T> {
    pub fn new(
        id: &'static str,
        pattern: &str,
        extract: ExtractFn<T>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            id,
            pattern: Regex::new(pattern)?,
            extract,
        })
    }

    pub fn id(&self) -> &'static str {
        self.id
    }
}

impl<T> Clone for PatternRule<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            pattern: self.pattern.clone(),
            extract: self.extract,
        }
    }
}

impl<T> std::fmt::Debug for PatternRule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("id", &self.id)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// How many matches of each rule are considered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// Only the leftmost match of a rule; if it is rejected, move to the next rule
    FirstMatch,
    /// Every match of a rule, left to right, before moving to the next rule
    AllMatches,
}

/// The value a cascade produced and the rule that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeHit<T> {
    pub rule_id: &'static str,
    pub value: T,
}

/// Ordered list of rules evaluated until one yields an accepted value
#[derive(Debug)]
pub struct PatternCascade<T> {
    rules: Vec<PatternRule<T>>,
}

impl<T> Clone for PatternCascade<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T> PatternCascade<T> {
    pub fn new(rules: Vec<PatternRule<T>>) -> Self {
        Self { rules }
    }

    /// Compile a rule table in order
    pub fn compile(table: &[(&'static str, &str, ExtractFn<T>)]) -> Result<Self, regex::Error> {
        let rules = table
            .iter()
            .map(|(id, pattern, extract)| PatternRule::new(*id, pattern, *extract))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rules))
    }

    /// A cascade holding only the named rules, in this cascade's order
    pub fn subset(&self, ids: &[&str]) -> Self {
        Self {
            rules: self
                .rules
                .iter()
                .filter(|rule| ids.contains(&rule.id))
                .cloned()
                .collect(),
        }
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id).collect()
    }

    /// Run the cascade over `text`.
    ///
    /// Rules are tried in order; the first extracted value that `accept`
    /// approves wins. Returns `None` when no rule produces one.
    pub fn resolve(
        &self,
        text: &str,
        scan: Scan,
        accept: impl Fn(&T) -> bool,
    ) -> Option<CascadeHit<T>> {
        for rule in &self.rules {
            let limit = match scan {
                Scan::FirstMatch => 1,
                Scan::AllMatches => usize::MAX,
            };

            for caps in rule.pattern.captures_iter(text).take(limit) {
                match (rule.extract)(&caps) {
                    Some(value) if accept(&value) => {
                        return Some(CascadeHit {
                            rule_id: rule.id,
                            value,
                        });
                    }
                    _ => {
                        tracing::trace!(rule = rule.id, "cascade match rejected");
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(caps: &Captures<'_>) -> Option<u32> {
        caps.get(1)?.as_str().parse().ok()
    }

    fn cascade() -> PatternCascade<u32> {
        PatternCascade::compile(&[
            ("alpha", r"alpha=(\d+)", number as ExtractFn<u32>),
            ("beta", r"beta=(\d+)", number),
        ])
        .unwrap()
    }

    #[test]
    fn test_rules_run_in_table_order() {
        let hit = cascade()
            .resolve("beta=2 alpha=1", Scan::FirstMatch, |_| true)
            .unwrap();
        assert_eq!(hit.rule_id, "alpha");
        assert_eq!(hit.value, 1);
    }

    #[test]
    fn test_first_match_moves_to_next_rule_on_rejection() {
        let hit = cascade()
            .resolve("alpha=1 alpha=50 beta=7", Scan::FirstMatch, |v| *v > 5)
            .unwrap();
        assert_eq!(hit.rule_id, "beta");
        assert_eq!(hit.value, 7);
    }

    #[test]
    fn test_all_matches_scans_within_rule() {
        let hit = cascade()
            .resolve("alpha=1 alpha=50 beta=7", Scan::AllMatches, |v| *v > 5)
            .unwrap();
        assert_eq!(hit.rule_id, "alpha");
        assert_eq!(hit.value, 50);
    }

    #[test]
    fn test_no_match_is_none() {
        assert!(cascade().resolve("gamma=3", Scan::AllMatches, |_| true).is_none());
    }

    #[test]
    fn test_subset_keeps_cascade_order() {
        let subset = cascade().subset(&["beta", "alpha"]);
        assert_eq!(subset.rule_ids(), vec!["alpha", "beta"]);
        assert_eq!(cascade().subset(&["beta"]).rule_ids(), vec!["beta"]);
    }

    #[test]
    fn test_invalid_pattern_fails_to_compile() {
        let result = PatternCascade::compile(&[("broken", r"(unclosed", number as ExtractFn<u32>)]);
        assert!(result.is_err());
    }
}
