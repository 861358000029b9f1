//! Deterministic keyword-based classification
//!
//! Used whenever the remote model is not configured or fails. The keyword
//! sets, their priority order and the module/submodule names are fixed; the
//! output must stay stable across releases.

use crate::classifier::types::{ClassificationResult, ModuleSet};
use crate::config::{ClassifierConfig, SubmodulePolicy};

/// Suffix appended to cleaned text that had to be cut
pub const TRUNCATION_MARKER: &str = "...";

/// One keyword rule mapping matching fragments to a module and submodule
#[derive(Debug)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub module: &'static str,
    pub description: &'static str,
    pub submodule: &'static str,
}

/// Rules in priority order; the first rule with a matching keyword wins
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["security", "privacy"],
        module: "Security & Privacy",
        description: "Security, privacy, and access control features.",
        submodule: "Security Settings",
    },
    Rule {
        keywords: &["account"],
        module: "Account Management",
        description: "Features related to managing user accounts and settings.",
        submodule: "Account Settings",
    },
    Rule {
        keywords: &["plugin"],
        module: "Plugins",
        description: "Extending product functionality using plugins.",
        submodule: "Plugin Usage",
    },
    Rule {
        keywords: &["install", "setup"],
        module: "Getting Started",
        description: "Guidance for installation and initial product setup.",
        submodule: "Installation & Setup",
    },
];

/// Finds the highest-priority rule matching a fragment
///
/// Matching is a case-insensitive substring test.
pub fn match_rule(fragment: &str) -> Option<&'static Rule> {
    let lowered = fragment.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
}

/// Collapses whitespace runs and truncates to `max_len` characters
///
/// # Example
///
/// ```
/// use pulse_modules::classifier::clean_text;
///
/// assert_eq!(clean_text("  Enable\n\ttwo-factor   login ", 300), "Enable two-factor login");
/// assert_eq!(clean_text("abcdef", 3), "abc...");
/// ```
pub fn clean_text(text: &str, max_len: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() > max_len {
        let mut truncated: String = collapsed.chars().take(max_len).collect();
        truncated.push_str(TRUNCATION_MARKER);
        truncated
    } else {
        collapsed
    }
}

/// Keyword-driven classifier
#[derive(Debug, Clone)]
pub struct RuleBasedClassifier {
    max_text_length: usize,
    policy: SubmodulePolicy,
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}

impl RuleBasedClassifier {
    pub fn new(max_text_length: usize, policy: SubmodulePolicy) -> Self {
        Self {
            max_text_length,
            policy,
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.max_text_length, config.submodule_policy)
    }

    /// Groups fragments into modules
    ///
    /// Fragments are processed in the given order. Each is assigned to the
    /// first matching rule or dropped if none matches. Modules appear in the
    /// order they were first matched.
    ///
    /// Each rule has a single submodule, so several fragments for the same
    /// module compete for one slot. Under [`SubmodulePolicy::Overwrite`] the
    /// last fragment processed wins; under [`SubmodulePolicy::Accumulate`]
    /// every cleaned fragment is kept, newline-separated.
    pub fn classify(&self, fragments: &[String]) -> ClassificationResult {
        let mut modules = ModuleSet::default();

        for fragment in fragments {
            let Some(rule) = match_rule(fragment) else {
                continue;
            };

            let cleaned = clean_text(fragment, self.max_text_length);
            let module = modules.get_or_insert(rule.module, rule.description);

            match self.policy {
                SubmodulePolicy::Overwrite => {
                    module
                        .submodules
                        .insert(rule.submodule.to_string(), cleaned);
                }
                SubmodulePolicy::Accumulate => {
                    module
                        .submodules
                        .entry(rule.submodule.to_string())
                        .and_modify(|existing| {
                            existing.push('\n');
                            existing.push_str(&cleaned);
                        })
                        .or_insert(cleaned);
                }
            }
        }

        modules.into_result()
    }
}
