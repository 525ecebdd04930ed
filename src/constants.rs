/// Constants module to avoid magic numbers in the codebase

// Storage keys (file stems inside the data directory). These names are
// load-bearing: existing saved data is found under them.
pub const WORKSPACE_KEY: &str = "essayAI_data";
pub const SETTINGS_KEY: &str = "essayAI_settings";

// Simulated backend latencies, per tool
pub const DRAFT_LATENCY_MS: u64 = 2000;
pub const REVISION_LATENCY_MS: u64 = 1500;
pub const CITATION_LATENCY_MS: u64 = 1000;
pub const CHECK_LATENCY_MS: u64 = 1500;

// UI Configuration
pub const UI_REFRESH_INTERVAL_MS: u64 = 50;
pub const TOAST_LIFETIME_MS: u64 = 3000;
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 3000;

// Drafting
pub const WORDS_PER_PARAGRAPH: usize = 200;

// Default runtime settings
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const MODEL_CHOICES: &[&str] = &["gpt-4", "gpt-3.5-turbo", "claude-3-sonnet"];

// Marker distinguishing an empty display region from generated content.
// Saved regions containing it are skipped on load.
pub const PLACEHOLDER_MARKER: &str = "placeholder";
