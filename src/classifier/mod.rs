//! Classification of documentation fragments into a module taxonomy
//!
//! Two strategies are available:
//! - `RemoteClassifier`: asks a remote model for the taxonomy (only built
//!   with the `remote-classifier` feature)
//! - [`RuleBasedClassifier`]: deterministic keyword rules
//!
//! [`Classifier`] picks between them. The decision is made once per call:
//!
//! ```text
//! AttemptRemote --ok--> Success
//!       |
//!       +--any error--> Fallback --> RuleBasedResult
//! ```
//!
//! The remote path is only attempted when the [`RemoteCapability`] resolved at
//! startup is available; otherwise classification starts in `Fallback`.
//! Errors from the remote path are logged and never returned.

#[cfg(feature = "remote-classifier")]
mod remote;
mod rules;
mod types;

#[cfg(feature = "remote-classifier")]
pub use remote::{build_prompt, parse_response, RemoteClassifier, RemoteUnavailable};
pub use rules::{clean_text, match_rule, Rule, RuleBasedClassifier, RULES, TRUNCATION_MARKER};
pub use types::{ClassificationResult, Module};

use crate::config::ClassifierConfig;
use std::fmt;

/// Whether the remote classification path may be used
///
/// Resolved once at startup and handed to [`Classifier::new`], so the fallback
/// decision depends only on values passed in.
#[derive(Clone, PartialEq, Eq)]
pub enum RemoteCapability {
    /// A credential is present and the remote client is compiled in
    Available { api_key: String },

    /// No credential (or an empty one) was found
    MissingCredential,

    /// The crate was built without the `remote-classifier` feature
    NotCompiled,
}

impl RemoteCapability {
    /// Reads the credential from the environment variable named in the config
    pub fn resolve(config: &ClassifierConfig) -> Self {
        Self::from_credential(std::env::var(&config.api_key_env).ok())
    }

    /// Builds the capability from an optional credential
    pub fn from_credential(credential: Option<String>) -> Self {
        if !cfg!(feature = "remote-classifier") {
            return Self::NotCompiled;
        }

        match credential {
            Some(api_key) if !api_key.trim().is_empty() => Self::Available { api_key },
            _ => Self::MissingCredential,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

// Keep the credential out of logs
impl fmt::Debug for RemoteCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available { .. } => f.write_str("Available { api_key: \"<redacted>\" }"),
            Self::MissingCredential => f.write_str("MissingCredential"),
            Self::NotCompiled => f.write_str("NotCompiled"),
        }
    }
}

/// Which strategy produced a classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Remote,
    RuleBased,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("remote model"),
            Self::RuleBased => f.write_str("rule-based"),
        }
    }
}

/// Classifier applying the remote-then-rules fallback policy
pub struct Classifier {
    rules: RuleBasedClassifier,
    #[cfg(feature = "remote-classifier")]
    remote: Option<RemoteClassifier>,
}

impl Classifier {
    /// Creates a classifier for the given capability
    ///
    /// If the remote client cannot be constructed the classifier silently
    /// degrades to rule-based only.
    pub fn new(config: &ClassifierConfig, capability: RemoteCapability) -> Self {
        #[cfg(feature = "remote-classifier")]
        let remote = match capability {
            RemoteCapability::Available { api_key } => {
                match RemoteClassifier::new(config, api_key) {
                    Ok(remote) => Some(remote),
                    Err(e) => {
                        tracing::warn!("Remote classifier disabled: {}", e);
                        None
                    }
                }
            }
            RemoteCapability::MissingCredential => {
                tracing::info!(
                    "{} is not set, using rule-based classification",
                    config.api_key_env
                );
                None
            }
            RemoteCapability::NotCompiled => {
                tracing::debug!("Remote classifier not compiled in");
                None
            }
        };

        #[cfg(not(feature = "remote-classifier"))]
        match capability {
            RemoteCapability::MissingCredential => tracing::info!(
                "{} is not set, using rule-based classification",
                config.api_key_env
            ),
            _ => tracing::debug!("Remote classifier not compiled in"),
        }

        Self {
            rules: RuleBasedClassifier::from_config(config),
            #[cfg(feature = "remote-classifier")]
            remote,
        }
    }

    /// Returns true if classification will try the remote model first
    #[cfg(feature = "remote-classifier")]
    pub fn uses_remote(&self) -> bool {
        self.remote.is_some()
    }

    #[cfg(not(feature = "remote-classifier"))]
    pub fn uses_remote(&self) -> bool {
        false
    }

    /// Classifies fragments, always producing a result
    pub async fn classify(&self, fragments: &[String]) -> ClassificationResult {
        self.classify_with_strategy(fragments).await.0
    }

    /// Classifies fragments and reports which strategy produced the result
    ///
    /// Empty input yields an empty result without contacting the remote model.
    pub async fn classify_with_strategy(
        &self,
        fragments: &[String],
    ) -> (ClassificationResult, Strategy) {
        if fragments.is_empty() {
            return (ClassificationResult::empty(), Strategy::RuleBased);
        }

        #[cfg(feature = "remote-classifier")]
        if let Some(remote) = &self.remote {
            match remote.classify(fragments).await {
                Ok(result) => {
                    tracing::info!("Remote model returned {} modules", result.len());
                    return (result, Strategy::Remote);
                }
                Err(e) => {
                    tracing::warn!(
                        "Remote model unavailable, switching to rule-based classification: {}",
                        e
                    );
                }
            }
        }

        (self.rules.classify(fragments), Strategy::RuleBased)
    }
}
