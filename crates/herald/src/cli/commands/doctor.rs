//! Doctor command - check configuration, catalog, and enhancement setup

use std::path::Path;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::info;

use herald_core::config::{find_config, load_config, Config, EnhancementConfig};
use herald_enhance::strategy_from_config;
use herald_partners::PartnerCatalog;

use crate::cli::{Cli, OutputFormat};

/// Check configuration, catalog, and enhancement setup
#[derive(Debug, Args)]
pub struct DoctorCommand {
    /// Show suggestions for fixing issues
    #[arg(long)]
    pub fix: bool,
}

/// Result of a single check
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: Option<String>,
    pub fix_suggestion: Option<String>,
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Warn,
    Fail,
    Skip,
}

/// Summary of all checks
#[derive(Debug, Serialize)]
pub struct DoctorSummary {
    pub checks: Vec<CheckResult>,
    pub ok_count: usize,
    pub warn_count: usize,
    pub fail_count: usize,
    pub skip_count: usize,
}

impl DoctorCommand {
    /// Execute the doctor command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(fix = self.fix, "executing doctor command");
        let cwd = std::env::current_dir()?;

        if !cli.quiet && cli.format == OutputFormat::Text {
            println!("{}", style("Checking Herald setup...").bold());
            println!();
        }

        let (config_check, config) = self.check_config(&cwd);
        let checks = vec![
            config_check,
            self.check_catalog(&config),
            self.check_strategy(&config),
            self.check_credentials(&config),
            self.check_log_directory(),
        ];

        // Calculate summary
        let ok_count = checks
            .iter()
            .filter(|c| c.status == CheckStatus::Ok)
            .count();
        let warn_count = checks
            .iter()
            .filter(|c| c.status == CheckStatus::Warn)
            .count();
        let fail_count = checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
            .count();
        let skip_count = checks
            .iter()
            .filter(|c| c.status == CheckStatus::Skip)
            .count();

        let summary = DoctorSummary {
            checks: checks.clone(),
            ok_count,
            warn_count,
            fail_count,
            skip_count,
        };

        // Output results
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => {
                self.print_results(&checks, cli);
                self.print_summary(&summary);

                if self.fix && (fail_count > 0 || warn_count > 0) {
                    println!();
                    println!("{}", style("Suggested fixes:").bold());
                    for check in &checks {
                        if check.status == CheckStatus::Fail || check.status == CheckStatus::Warn {
                            if let Some(ref fix) = check.fix_suggestion {
                                println!(
                                    "  {} {}: {}",
                                    status_icon(check.status),
                                    style(&check.name).bold(),
                                    fix
                                );
                            }
                        }
                    }
                }
            }
        }

        // Return error if there are failures
        if fail_count > 0 {
            anyhow::bail!("{} check(s) failed", fail_count);
        }

        Ok(())
    }

    /// Config discovery and parse. Falls back to defaults so the
    /// remaining checks can still run against something.
    fn check_config(&self, cwd: &Path) -> (CheckResult, Config) {
        match find_config(cwd) {
            Some(path) => match load_config(&path) {
                Ok(config) => (
                    CheckResult {
                        name: "Configuration".to_string(),
                        status: CheckStatus::Ok,
                        message: Some(path.display().to_string()),
                        fix_suggestion: None,
                    },
                    config,
                ),
                Err(e) => (
                    CheckResult {
                        name: "Configuration".to_string(),
                        status: CheckStatus::Fail,
                        message: Some(e.to_string()),
                        fix_suggestion: Some(format!(
                            "Fix {} or delete it to use defaults",
                            path.display()
                        )),
                    },
                    Config::default(),
                ),
            },
            None => (
                CheckResult {
                    name: "Configuration".to_string(),
                    status: CheckStatus::Skip,
                    message: Some("No config file found (using defaults)".to_string()),
                    fix_suggestion: Some("Run 'herald init' to create one".to_string()),
                },
                Config::default(),
            ),
        }
    }

    fn check_catalog(&self, config: &Config) -> CheckResult {
        match config.catalog.file {
            Some(ref path) => match PartnerCatalog::from_file(path) {
                Ok(catalog) if catalog.is_empty() => CheckResult {
                    name: "Partner catalog".to_string(),
                    status: CheckStatus::Warn,
                    message: Some(format!("{} holds no partners", path.display())),
                    fix_suggestion: Some("Add partner records to the catalog file".to_string()),
                },
                Ok(catalog) => CheckResult {
                    name: "Partner catalog".to_string(),
                    status: CheckStatus::Ok,
                    message: Some(format!("{} partners from {}", catalog.len(), path.display())),
                    fix_suggestion: None,
                },
                Err(e) => CheckResult {
                    name: "Partner catalog".to_string(),
                    status: CheckStatus::Fail,
                    message: Some(e.to_string()),
                    fix_suggestion: Some(
                        "Check catalog.file in your configuration".to_string(),
                    ),
                },
            },
            None => {
                let catalog = PartnerCatalog::bundled();
                CheckResult {
                    name: "Partner catalog".to_string(),
                    status: CheckStatus::Ok,
                    message: Some(format!("{} partners (bundled)", catalog.len())),
                    fix_suggestion: None,
                }
            }
        }
    }

    fn check_strategy(&self, config: &Config) -> CheckResult {
        match strategy_from_config(&config.enhancement, PartnerCatalog::bundled()) {
            Ok(strategy) => CheckResult {
                name: "Enhancement strategy".to_string(),
                status: CheckStatus::Ok,
                message: Some(strategy.name().to_string()),
                fix_suggestion: None,
            },
            Err(e) => CheckResult {
                name: "Enhancement strategy".to_string(),
                status: CheckStatus::Fail,
                message: Some(e.to_string()),
                fix_suggestion: Some(
                    "Set enhancement.strategy to 'deterministic' or 'remote'".to_string(),
                ),
            },
        }
    }

    fn check_credentials(&self, config: &Config) -> CheckResult {
        if config.enhancement.strategy != "remote" {
            return CheckResult {
                name: "Remote credentials".to_string(),
                status: CheckStatus::Skip,
                message: Some("Not needed for the deterministic strategy".to_string()),
                fix_suggestion: None,
            };
        }

        match config.enhancement.resolve_api_key() {
            Some(_) => CheckResult {
                name: "Remote credentials".to_string(),
                status: CheckStatus::Ok,
                message: Some("API key configured".to_string()),
                fix_suggestion: None,
            },
            None => CheckResult {
                name: "Remote credentials".to_string(),
                status: CheckStatus::Fail,
                message: Some("API key not set".to_string()),
                fix_suggestion: Some(format!(
                    "Set enhancement.api_key or the {} environment variable",
                    EnhancementConfig::API_KEY_ENV
                )),
            },
        }
    }

    fn check_log_directory(&self) -> CheckResult {
        match dirs::home_dir() {
            Some(home) => {
                let log_dir = home.join(".herald").join("logs");
                match std::fs::create_dir_all(&log_dir) {
                    Ok(()) => CheckResult {
                        name: "Log directory".to_string(),
                        status: CheckStatus::Ok,
                        message: Some(log_dir.display().to_string()),
                        fix_suggestion: None,
                    },
                    Err(e) => CheckResult {
                        name: "Log directory".to_string(),
                        status: CheckStatus::Warn,
                        message: Some(e.to_string()),
                        fix_suggestion: Some(
                            "File logging stays disabled until the directory is writable"
                                .to_string(),
                        ),
                    },
                }
            }
            None => CheckResult {
                name: "Log directory".to_string(),
                status: CheckStatus::Warn,
                message: Some("Home directory not found".to_string()),
                fix_suggestion: Some("Set HOME to enable file logging".to_string()),
            },
        }
    }

    fn print_results(&self, checks: &[CheckResult], cli: &Cli) {
        if cli.quiet {
            return;
        }

        for check in checks {
            let icon = status_icon(check.status);
            let name = &check.name;
            let msg = check.message.as_deref().unwrap_or("");

            match check.status {
                CheckStatus::Ok => {
                    println!("  {} {} {}", icon, style(name).green(), style(msg).dim());
                }
                CheckStatus::Warn => {
                    println!("  {} {} {}", icon, style(name).yellow(), style(msg).dim());
                }
                CheckStatus::Fail => {
                    println!("  {} {} {}", icon, style(name).red(), style(msg).dim());
                }
                CheckStatus::Skip => {
                    println!("  {} {} {}", icon, style(name).dim(), style(msg).dim());
                }
            }
        }
    }

    fn print_summary(&self, summary: &DoctorSummary) {
        println!();
        let total = summary.ok_count + summary.warn_count + summary.fail_count + summary.skip_count;

        if summary.fail_count == 0 && summary.warn_count == 0 {
            println!(
                "{} All {} checks passed!",
                style("✓").green().bold(),
                summary.ok_count
            );
        } else {
            println!(
                "Summary: {} ok, {} warnings, {} failed, {} skipped (out of {})",
                style(summary.ok_count).green(),
                style(summary.warn_count).yellow(),
                style(summary.fail_count).red(),
                style(summary.skip_count).dim(),
                total
            );

            if summary.fail_count > 0 {
                println!();
                println!(
                    "{} {} issue(s) found. Run '{}' for suggestions.",
                    style("!").red().bold(),
                    summary.fail_count + summary.warn_count,
                    style("herald doctor --fix").cyan()
                );
            }
        }
    }
}

/// Get status icon for a check
fn status_icon(status: CheckStatus) -> console::StyledObject<&'static str> {
    match status {
        CheckStatus::Ok => style("[OK]").green(),
        CheckStatus::Warn => style("[WARN]").yellow(),
        CheckStatus::Fail => style("[FAIL]").red(),
        CheckStatus::Skip => style("[SKIP]").dim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_icon() {
        // Just verify it doesn't panic
        let _ = status_icon(CheckStatus::Ok);
        let _ = status_icon(CheckStatus::Warn);
        let _ = status_icon(CheckStatus::Fail);
        let _ = status_icon(CheckStatus::Skip);
    }

    #[test]
    fn test_default_config_checks() {
        let cmd = DoctorCommand { fix: false };
        let config = Config::default();

        let catalog = cmd.check_catalog(&config);
        assert_eq!(catalog.status, CheckStatus::Ok);

        let strategy = cmd.check_strategy(&config);
        assert_eq!(strategy.status, CheckStatus::Ok);
        assert_eq!(strategy.message.as_deref(), Some("deterministic"));

        let credentials = cmd.check_credentials(&config);
        assert_eq!(credentials.status, CheckStatus::Skip);
    }

    #[test]
    fn test_unknown_strategy_fails_check() {
        let cmd = DoctorCommand { fix: false };
        let config = Config {
            enhancement: EnhancementConfig {
                strategy: "oracle".to_string(),
                ..EnhancementConfig::default()
            },
            ..Config::default()
        };

        let strategy = cmd.check_strategy(&config);
        assert_eq!(strategy.status, CheckStatus::Fail);
    }

    #[test]
    fn test_missing_catalog_file_fails_check() {
        let cmd = DoctorCommand { fix: false };
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            catalog: herald_core::config::CatalogConfig {
                file: Some(dir.path().join("absent.json")),
            },
            ..Config::default()
        };

        let catalog = cmd.check_catalog(&config);
        assert_eq!(catalog.status, CheckStatus::Fail);
    }
}
