//! Partners command

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;
use tracing::info;

use herald_core::config::{load_config_or_default, Config};
use herald_partners::{extract_scopes, PartnerCatalog};

use crate::cli::{output, Cli, OutputFormat};

/// Inspect the partner catalog and resolve impacted partners
#[derive(Debug, Args)]
pub struct PartnersCommand {
    #[command(subcommand)]
    pub subcommand: PartnersSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum PartnersSubcommand {
    /// List partners in the catalog with their registered scopes
    List,
    /// Resolve which partners are impacted by scopes or changelog text
    Resolve {
        /// Integration scopes to resolve (e.g. auth:oauth,billing:invoices)
        #[arg(short, long = "scope", value_delimiter = ',')]
        scopes: Vec<String>,

        /// Changelog text to extract scopes from (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read changelog text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
}

/// JSON payload for `partners resolve`
#[derive(Debug, Serialize)]
struct ResolveReport {
    scopes: Vec<String>,
    partners: Vec<String>,
}

impl PartnersCommand {
    /// Execute the partners command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);
        let catalog = load_catalog(&config)?;

        match &self.subcommand {
            PartnersSubcommand::List => self.list(&catalog, cli),
            PartnersSubcommand::Resolve { scopes, text, file } => {
                self.resolve(&catalog, scopes, text.as_deref(), file.as_deref(), cli)
            }
        }
    }

    fn list(&self, catalog: &PartnerCatalog, cli: &Cli) -> anyhow::Result<()> {
        info!(partners = catalog.len(), "listing partner catalog");

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(catalog.partners())?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }
                println!(
                    "{} ({} partners)",
                    output::header("Partner catalog"),
                    catalog.len()
                );
                for partner in catalog.partners() {
                    println!(
                        "  {} {}",
                        output::partner_style().apply_to(&partner.name),
                        style(partner.scopes.join(", ")).dim()
                    );
                }
            }
        }

        Ok(())
    }

    fn resolve(
        &self,
        catalog: &PartnerCatalog,
        scopes: &[String],
        text: Option<&str>,
        file: Option<&std::path::Path>,
        cli: &Cli,
    ) -> anyhow::Result<()> {
        let scopes = if scopes.is_empty() {
            let raw_text = match (text, file) {
                (Some(text), _) => text.to_string(),
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            extract_scopes(&raw_text)
        } else {
            scopes.to_vec()
        };

        info!(scopes = scopes.len(), "resolving impacted partners");
        let partners = catalog.impacted_partners_for_scopes(&scopes);

        match cli.format {
            OutputFormat::Json => {
                let report = ResolveReport { scopes, partners };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }
                if scopes.is_empty() {
                    println!("{}", style("No integration scopes found.").yellow());
                    return Ok(());
                }
                println!(
                    "{} {}",
                    output::header("Scopes:"),
                    output::scope_style().apply_to(scopes.join(", "))
                );
                if partners.is_empty() {
                    println!("{}", style("No partners impacted.").yellow());
                } else {
                    println!("{}", output::header("Impacted partners:"));
                    for partner in &partners {
                        println!("  - {}", output::partner_style().apply_to(partner));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Load the configured catalog file, or the bundled catalog when none is set.
fn load_catalog(config: &Config) -> anyhow::Result<Arc<PartnerCatalog>> {
    match config.catalog.file {
        Some(ref path) => Ok(Arc::new(PartnerCatalog::from_file(path)?)),
        None => Ok(PartnerCatalog::bundled()),
    }
}
