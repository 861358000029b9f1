use serde::Deserialize;

/// Keywords a discovered link must contain to be considered documentation
pub const DEFAULT_TOPIC_KEYWORDS: &[&str] = &["help", "docs", "support"];

/// Main configuration structure for Pulse Modules
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub user_agent: UserAgentConfig,
    pub extractor: ExtractorConfig,
    pub classifier: ClassifierConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Maximum number of pages visited per seed URL
    pub max_pages: usize,

    /// Timeout for a single page fetch (seconds)
    pub request_timeout_secs: u64,

    /// A link is only followed if its URL contains one of these (case-insensitive)
    pub topic_keywords: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: 30,
            request_timeout_secs: 10,
            topic_keywords: DEFAULT_TOPIC_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserAgentConfig {
    /// Name of the crawler
    pub crawler_name: String,

    /// Version of the crawler
    pub crawler_version: String,

    /// URL with information about the crawler
    pub contact_url: Option<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "PulseModules".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: None,
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value
    ///
    /// Format: `CrawlerName/Version` or `CrawlerName/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

/// Content extraction configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ExtractorConfig {
    /// Text blocks must be strictly longer than this many characters
    pub min_fragment_length: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_fragment_length: 30,
        }
    }
}

/// How the rule-based classifier stores several fragments that land in the
/// same submodule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmodulePolicy {
    /// Last processed fragment replaces earlier ones
    #[default]
    Overwrite,

    /// All fragments are kept, one per line, in processing order
    Accumulate,
}

/// Classifier configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ClassifierConfig {
    /// Environment variable holding the remote model credential
    pub api_key_env: String,

    /// Base URL of the OpenAI-compatible API
    pub api_base_url: String,

    /// Model name sent with each request
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Timeout for the remote classification call (seconds)
    pub request_timeout_secs: u64,

    /// Maximum number of fragments submitted to the remote model
    pub max_fragments: usize,

    /// Maximum length of a cleaned submodule text before truncation
    pub max_text_length: usize,

    /// Merge behavior for repeated submodules in the rule-based strategy
    pub submodule_policy: SubmodulePolicy,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            request_timeout_secs: 60,
            max_fragments: 300,
            max_text_length: 300,
            submodule_policy: SubmodulePolicy::Overwrite,
        }
    }
}
