mod loader;

pub use loader::{Config, ConfigError, LimitsConfig, ReportConfig, RuleToggle, RulesConfig};
