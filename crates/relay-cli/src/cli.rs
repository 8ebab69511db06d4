//! Command handlers bridging parsed arguments to the engine.
//!
//! Each handler converts its argument structure into core parameters,
//! calls the engine, and renders the result as markdown through the
//! terminal renderer. Decision commands re-fetch the document afterwards
//! so the caller sees the state their action produced.

use anyhow::{Context, Result};
use relay_core::{
    Engine, Id, LogNotifier, SqliteStore, StaticDirectory,
    display::{DecisionResult, SubmitResult},
};

use crate::{
    args::{Commands, DecisionArgs, DraftsArgs, InboxArgs, ShowArgs, SubmitArgs},
    renderer::TerminalRenderer,
};

type CliEngine = Engine<SqliteStore, StaticDirectory, LogNotifier>;

/// CLI command dispatcher holding the engine and renderer.
pub struct Cli {
    engine: CliEngine,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(engine: CliEngine, renderer: TerminalRenderer) -> Self {
        Self { engine, renderer }
    }

    /// Dispatch one parsed command.
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Submit(args) => self.submit(args).await,
            Commands::Approve(args) => self.approve(args).await,
            Commands::Reject(args) => self.reject(args).await,
            Commands::Show(args) => self.show(args).await,
            Commands::Inbox(args) => self.inbox(args).await,
            Commands::Drafts(args) => self.drafts(args).await,
        }
    }

    async fn submit(&self, args: SubmitArgs) -> Result<()> {
        let params = args.into_params()?;
        let id = self
            .engine
            .submit(&params)
            .await
            .context("Failed to submit document")?;

        let document = self
            .engine
            .detail(&Id { id })
            .await
            .context("Failed to load submitted document")?;
        self.renderer
            .render(&format!("{}", SubmitResult::new(document)))
    }

    async fn approve(&self, args: DecisionArgs) -> Result<()> {
        let params = args.into();
        self.engine
            .approve(&params)
            .await
            .context("Failed to approve document")?;

        let document = self
            .engine
            .detail(&Id {
                id: params.document_id,
            })
            .await
            .context("Failed to load document")?;
        self.renderer
            .render(&format!("{}", DecisionResult::approved(document)))
    }

    async fn reject(&self, args: DecisionArgs) -> Result<()> {
        let params = args.into();
        self.engine
            .reject(&params)
            .await
            .context("Failed to reject document")?;

        let document = self
            .engine
            .detail(&Id {
                id: params.document_id,
            })
            .await
            .context("Failed to load document")?;
        self.renderer
            .render(&format!("{}", DecisionResult::rejected(document)))
    }

    async fn show(&self, args: ShowArgs) -> Result<()> {
        let document = self
            .engine
            .detail(&args.into())
            .await
            .context("Failed to load document")?;
        self.renderer.render(&format!("{document}"))
    }

    async fn inbox(&self, args: InboxArgs) -> Result<()> {
        let approver = args.approver.clone();
        let summaries = self
            .engine
            .inbox_summary(&args.into())
            .await
            .context("Failed to load inbox")?;
        self.renderer
            .render(&format!("# Inbox for {approver}\n\n{summaries}"))
    }

    async fn drafts(&self, args: DraftsArgs) -> Result<()> {
        let writer = args.writer.clone();
        let summaries = self
            .engine
            .drafts_summary(&args.into())
            .await
            .context("Failed to load documents")?;
        self.renderer
            .render(&format!("# Documents by {writer}\n\n{summaries}"))
    }
}
