//! Command handlers and CLI argument wrappers.
//!
//! Arg structs carry the clap derives and convert into core parameter
//! types via `From`, keeping the core free of CLI framework concerns.
//! The [`Cli`] struct owns the coordinator and renderer and implements
//! one handler per subcommand.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use log::warn;
use rally_core::{
    generator::{self, SuggestionGenerator, SuggestionRequest},
    params::{self, SubmitParticipant},
    Coordinator, Responses, Tally, Window,
};
use tokio::task;

use crate::document;
use crate::openai::OpenAiGenerator;
use crate::renderer::TerminalRenderer;

/// Record one participant's trip response
#[derive(Args)]
pub struct JoinArgs {
    /// Participant's name
    pub name: String,
    /// Availability dates, e.g. "Dec 20-22" or "Dec 20, Dec 21"
    #[arg(short, long)]
    pub available: String,
    /// Dates that do not work; "none" if none
    #[arg(short, long, default_value = "none")]
    pub unavailable: String,
    /// How many days you can travel
    #[arg(short, long)]
    pub days: u32,
    /// How many people from your side
    #[arg(short, long)]
    pub people: u32,
    /// Budget per person, e.g. 15000 or 15k
    #[arg(short, long)]
    pub budget: String,
    /// Preferred region
    #[arg(long)]
    pub region: Option<String>,
    /// Require the trip to be kid-friendly
    #[arg(long)]
    pub kid_friendly: bool,
    /// Trip-type preference (Hills, Beach, ...)
    #[arg(long)]
    pub kind: Option<String>,
    /// Destination picks: names and/or suggestion numbers, comma separated
    #[arg(long, default_value = "")]
    pub destinations: String,
    /// Suggestion list to resolve numbered picks against
    #[arg(long)]
    pub suggestions_file: Option<PathBuf>,
}

impl JoinArgs {
    /// Convert CLI arguments to core submission parameters.
    ///
    /// Budget shorthand is expanded and numbered destination picks are
    /// resolved against the suggestion file when one is given.
    pub fn into_params(self) -> Result<SubmitParticipant> {
        let budget = params::parse_budget(&self.budget)
            .ok_or_else(|| anyhow!("invalid budget '{}' (e.g. 15000 or 15k)", self.budget))?;

        let destinations = match &self.suggestions_file {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                generator::resolve_picks(&self.destinations, &generator::suggestion_names(&text))
            }
            None => params::split_destinations(&self.destinations),
        };

        Ok(SubmitParticipant {
            name: self.name,
            available: self.available,
            unavailable: self.unavailable,
            trip_days: self.days,
            people: self.people,
            budget_per_person: budget,
            region: self.region,
            kid_friendly: self.kid_friendly,
            trip_kind: self.kind,
            destinations,
        })
    }
}

/// Generate destination suggestions for one participant
#[derive(Args)]
pub struct SuggestArgs {
    /// How many days you can travel
    #[arg(short, long)]
    pub days: u32,
    /// How many people from your side
    #[arg(short, long)]
    pub people: u32,
    /// Budget per person, e.g. 15000 or 15k
    #[arg(short, long)]
    pub budget: String,
    /// Availability dates
    #[arg(short, long)]
    pub available: String,
    /// Preferred region
    #[arg(long)]
    pub region: Option<String>,
    /// Require the trip to be kid-friendly
    #[arg(long)]
    pub kid_friendly: bool,
    /// Trip-type preference (Hills, Beach, ...)
    #[arg(long)]
    pub kind: Option<String>,
    /// Also save the suggestion list here for later numbered picks
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SuggestArgs {
    fn request(&self) -> Result<SuggestionRequest> {
        let budget = params::parse_budget(&self.budget)
            .ok_or_else(|| anyhow!("invalid budget '{}' (e.g. 15000 or 15k)", self.budget))?;
        Ok(SuggestionRequest {
            trip_days: self.days,
            people: self.people,
            budget_per_person: budget,
            available: self.available.clone(),
            region: self.region.clone(),
            kid_friendly: self.kid_friendly,
            trip_kind: self.kind.clone(),
        })
    }
}

/// Compute the group plan and write the shareable itinerary
#[derive(Args)]
pub struct FinalizeArgs {
    /// Where to write the shareable itinerary document
    #[arg(short, long, default_value = "final_itinerary.md")]
    pub output: PathBuf,
    /// Skip the narrative generator and emit the plan alone
    #[arg(long)]
    pub offline: bool,
}

/// CLI command dispatcher owning the coordinator and renderer.
pub struct Cli {
    coordinator: Coordinator,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(coordinator: Coordinator, renderer: TerminalRenderer) -> Self {
        Self { coordinator, renderer }
    }

    /// Handle the `join` command.
    pub async fn join(&self, args: JoinArgs) -> Result<()> {
        let params = args.into_params()?;
        let participant = self
            .coordinator
            .submit(&params)
            .await
            .context("Failed to record response")?;

        self.renderer.render(&format!(
            "Recorded response from **{}**.\n\n{participant}",
            participant.name
        ))
    }

    /// Handle the `list` command.
    pub async fn list(&self) -> Result<()> {
        let records = self
            .coordinator
            .participants()
            .await
            .context("Failed to read responses")?;
        self.renderer.render(&Responses(records).to_string())
    }

    /// Handle the `window` command.
    pub async fn window(&self) -> Result<()> {
        let window = self
            .coordinator
            .common_window()
            .await
            .context("Failed to compute common window")?;
        self.renderer.render(&Window(window).to_string())
    }

    /// Handle the `tally` command.
    pub async fn tally(&self) -> Result<()> {
        let tally = self
            .coordinator
            .destination_tally()
            .await
            .context("Failed to compute destination tally")?;
        self.renderer.render(&Tally(tally).to_string())
    }

    /// Handle the `suggest` command.
    pub async fn suggest(&self, args: SuggestArgs) -> Result<()> {
        let Some(generator) = OpenAiGenerator::from_env() else {
            bail!("OPENAI_API_KEY is not set; suggestions need the generator");
        };

        let prompt = args.request()?.prompt();
        let suggestions = complete_blocking(Arc::new(generator), prompt).await?;

        if let Some(path) = &args.output {
            std::fs::write(path, &suggestions)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        self.renderer.render(&format!(
            "# Suggestions\n\n{suggestions}\n\nReply with `rally join ... --destinations \"1,3\"` \
             plus `--suggestions-file` to pick by number."
        ))
    }

    /// Handle the `finalize` command.
    pub async fn finalize(&self, args: FinalizeArgs) -> Result<()> {
        let plan = self
            .coordinator
            .finalize()
            .await
            .context("Failed to finalize the trip")?;

        let narrative = if args.offline {
            None
        } else {
            match OpenAiGenerator::from_env() {
                Some(generator) => {
                    let prompt = generator::itinerary_prompt(&plan);
                    match complete_blocking(Arc::new(generator), prompt).await {
                        Ok(text) => Some(text),
                        Err(e) => {
                            warn!("narrative generation failed, emitting plan alone: {e}");
                            None
                        }
                    }
                }
                None => {
                    warn!("OPENAI_API_KEY is not set; emitting plan without narrative");
                    None
                }
            }
        };

        let markdown = document::compose(&plan, narrative.as_deref());
        document::write(&args.output, &markdown)?;

        self.renderer.render(&format!(
            "{markdown}\nWrote shareable itinerary to {}.\n",
            args.output.display()
        ))
    }
}

/// Runs the blocking HTTP generator off the async runtime.
async fn complete_blocking(
    generator: Arc<dyn SuggestionGenerator>,
    prompt: String,
) -> Result<String> {
    task::spawn_blocking(move || generator.complete(&prompt))
        .await
        .context("Generator task join error")?
        .context("Suggestion generator failed")
}
