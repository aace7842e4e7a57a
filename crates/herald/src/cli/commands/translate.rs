//! Translate command

use std::io::Read;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use console::style;
use tracing::{info, warn};

use herald_core::config::{load_config_or_default, Config};
use herald_core::{Audience, ImpactLevel, Mode, Persona, Tone, TranslateRequest, TranslateResponse};
use herald_enhance::{strategy_from_config, DeterministicStrategy, EnhancementStrategy};
use herald_partners::PartnerCatalog;
use herald_translate::Translator;

use crate::cli::{output, Cli, OutputFormat};

/// Translate a raw changelog into audience summaries
#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Raw changelog text (reads stdin when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the changelog from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<std::path::PathBuf>,

    /// Audiences to build summaries for (defaults to configured audiences)
    #[arg(short, long = "audience", value_delimiter = ',')]
    pub audiences: Vec<AudienceArg>,

    /// Tone for generated summaries (defaults to configured tone)
    #[arg(long, value_enum)]
    pub tone: Option<ToneArg>,

    /// Product area that overrides per-change area classification
    #[arg(long, value_name = "AREA")]
    pub product_area: Option<String>,

    /// Free-form constraints forwarded to the enhancement layer
    #[arg(long)]
    pub constraints: Option<String>,

    /// Persona hint forwarded to the enhancement layer
    #[arg(long, value_enum)]
    pub persona: Option<PersonaArg>,

    /// Translation mode
    #[arg(long, value_enum, default_value = "basic")]
    pub mode: ModeArg,

    /// Fail when enhancement fails instead of falling back to deterministic output
    #[arg(long)]
    pub no_fallback: bool,
}

/// Audience selector for the --audience flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AudienceArg {
    /// Customer-success and account teams
    Cs,
    /// Support teams preparing for inbound tickets
    Support,
    /// End customers
    Customer,
}

impl From<AudienceArg> for Audience {
    fn from(arg: AudienceArg) -> Self {
        match arg {
            AudienceArg::Cs => Audience::Cs,
            AudienceArg::Support => Audience::Support,
            AudienceArg::Customer => Audience::Customer,
        }
    }
}

/// Tone selector for the --tone flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToneArg {
    Neutral,
    Friendly,
    Direct,
}

impl From<ToneArg> for Tone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::Neutral => Tone::Neutral,
            ToneArg::Friendly => Tone::Friendly,
            ToneArg::Direct => Tone::Direct,
        }
    }
}

/// Persona selector for the --persona flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PersonaArg {
    Cs,
    Support,
    Customer,
    Tam,
    Pm,
    Marketing,
    Legal,
}

impl From<PersonaArg> for Persona {
    fn from(arg: PersonaArg) -> Self {
        match arg {
            PersonaArg::Cs => Persona::Cs,
            PersonaArg::Support => Persona::Support,
            PersonaArg::Customer => Persona::Customer,
            PersonaArg::Tam => Persona::Tam,
            PersonaArg::Pm => Persona::Pm,
            PersonaArg::Marketing => Persona::Marketing,
            PersonaArg::Legal => Persona::Legal,
        }
    }
}

/// Mode selector for the --mode flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Deterministic pipeline only
    Basic,
    /// Deterministic pipeline plus an enhancement strategy
    Ai,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Basic => Mode::Basic,
            ModeArg::Ai => Mode::Ai,
        }
    }
}

impl TranslateCommand {
    /// Execute the translate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(mode = ?self.mode, "executing translate command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let raw_text = self.read_input()?;

        let audiences: Vec<Audience> = if self.audiences.is_empty() {
            config.output.audiences.clone()
        } else {
            self.audiences.iter().copied().map(Audience::from).collect()
        };
        let tone = self.tone.map(Tone::from).unwrap_or(config.output.tone);

        let mut request = TranslateRequest::new(raw_text, audiences)
            .with_tone(tone)
            .with_mode(self.mode.into());
        if let Some(ref area) = self.product_area {
            request = request.with_product_area(area.clone());
        }
        if let Some(ref constraints) = self.constraints {
            request = request.with_constraints(constraints.clone());
        }
        if let Some(persona) = self.persona {
            request = request.with_persona(persona.into());
        }
        request.validate()?;

        let translator = Translator::new();
        let mut response = translator.translate(&request);

        if request.mode == Mode::Ai {
            self.enhance(&config, &request, &mut response, cli)?;
        }

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            OutputFormat::Text => {
                self.print_text(&response, cli);
            }
        }

        Ok(())
    }

    fn read_input(&self) -> anyhow::Result<String> {
        if let Some(ref text) = self.text {
            return Ok(text.clone());
        }
        if let Some(ref path) = self.file {
            return Ok(std::fs::read_to_string(path)?);
        }
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }

    /// Run the configured enhancement strategy and attach its payload.
    ///
    /// Strategy failures fall back to the deterministic strategy unless
    /// --no-fallback was given, in which case the error surfaces.
    fn enhance(
        &self,
        config: &Config,
        request: &TranslateRequest,
        response: &mut TranslateResponse,
        cli: &Cli,
    ) -> anyhow::Result<()> {
        let catalog = match config.catalog.file {
            Some(ref path) => Arc::new(PartnerCatalog::from_file(path)?),
            None => PartnerCatalog::bundled(),
        };

        let strategy = strategy_from_config(&config.enhancement, Arc::clone(&catalog))?;
        let runtime = tokio::runtime::Runtime::new()?;

        match runtime.block_on(strategy.enhance(request, response)) {
            Ok(enhancement) => {
                response.ai_provider = Some(strategy.name().to_string());
                response.ai_enhancement = Some(enhancement);
                response.ai_fallback_used = false;
            }
            Err(err) if !self.no_fallback => {
                warn!(error = %err, strategy = strategy.name(), "enhancement failed, falling back");
                if !cli.quiet && cli.format == OutputFormat::Text {
                    output::warning(&format!(
                        "Enhancement via '{}' failed ({}), using deterministic output",
                        strategy.name(),
                        err
                    ));
                }
                let fallback = DeterministicStrategy::new(catalog);
                let enhancement = runtime.block_on(fallback.enhance(request, response))?;
                response.ai_provider = Some(fallback.name().to_string());
                response.ai_enhancement = Some(enhancement);
                response.ai_fallback_used = true;
            }
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }

    fn print_text(&self, response: &TranslateResponse, cli: &Cli) {
        if cli.quiet {
            return;
        }

        println!("{} {}", style("Impact:").bold(), impact_badge(response.impact_level));

        print_section("CS Summary", &response.cs_summary);
        print_section("Support Notes", &response.support_notes);
        print_section("Customer Summary", &response.customer_summary);
        print_section("Risk Flags", &response.risk_flags);
        print_section("Follow-up Questions", &response.follow_up_questions);

        if let Some(ref enhancement) = response.ai_enhancement {
            let provider = response.ai_provider.as_deref().unwrap_or("unknown");
            let badge = if response.ai_fallback_used {
                format!("({provider}, fallback)")
            } else {
                format!("({provider})")
            };

            println!();
            println!("{} {}", output::header("Enhancement"), style(badge).dim());
            println!("  {}", enhancement.executive_summary);

            print_section("Customer Follow-ups", &enhancement.customer_followups);
            print_section("Adoption Risks", &enhancement.adoption_risks);

            if !enhancement.impacted_scopes.is_empty() {
                println!();
                println!("{}", output::header("Impacted Scopes"));
                println!("  {}", enhancement.impacted_scopes.join(", "));
            }
            if !enhancement.impacted_partners.is_empty() {
                println!();
                println!("{}", output::header("Impacted Partners"));
                println!("  {}", enhancement.impacted_partners.join(", "));
            }

            println!();
            println!("{}", output::header("Partner Email Draft"));
            for line in enhancement.partner_email_draft.lines() {
                println!("  {}", line);
            }
        }
    }
}

fn print_section(title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!();
    println!("{}", output::header(title));
    for line in lines {
        println!("  - {}", line);
    }
}

fn impact_badge(level: ImpactLevel) -> console::StyledObject<&'static str> {
    match level {
        ImpactLevel::Low => style("low").green(),
        ImpactLevel::Medium => style("medium").yellow(),
        ImpactLevel::High => style("high").red().bold(),
    }
}
