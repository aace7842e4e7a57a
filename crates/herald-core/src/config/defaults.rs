//! Default configuration values

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "herald.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "herald.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".herald.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".herald.toml",
    ]
}

/// Generate default configuration YAML
pub fn default_config_yaml() -> String {
    let config = Config::default();
    serde_yaml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Herald Configuration
# See https://github.com/example/herald for documentation

enhancement:
  strategy: deterministic
  model: gpt-4o-mini
  endpoint: https://api.openai.com/v1/chat/completions
  timeout_secs: 20
  # api_key is read from OPENAI_API_KEY when unset

catalog:
  # file: partners.json

output:
  audiences:
    - cs
    - support
    - customer
  tone: neutral
"#;
