//! Command-line argument definitions using clap
//!
//! This module defines the CLI structure with clap's derive API, using the
//! parameter wrapper pattern: each subcommand has an argument structure
//! that converts into the matching core parameter type. CLI concerns (help
//! text, flags, delimiters) stay here while the core types remain free of
//! clap derives.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use relay_core::params::{Decision, Drafts, Id, Inbox, SubmitDocument, TestResultPayload};

/// Main command-line interface for the Relay approval workflow tool
///
/// Relay routes documents through ordered approval chains. Writers submit a
/// document with a fixed list of approvers; each approver acts strictly in
/// turn, and the document ends up approved or rejected.
#[derive(Parser)]
#[command(version, about, name = "relay")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/relay/relay.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Relay CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a document into an approval chain
    Submit(SubmitArgs),
    /// Approve your step on a pending document
    Approve(DecisionArgs),
    /// Reject a pending document at your step
    Reject(DecisionArgs),
    /// Show the full detail of one document
    Show(ShowArgs),
    /// List the documents waiting on an approver
    Inbox(InboxArgs),
    /// List the documents a writer has submitted
    Drafts(DraftsArgs),
}

/// Submit a document into an approval chain
///
/// The approver list fixes the chain order. Test results can be attached
/// from a JSON file containing an array of result records.
#[derive(clap::Args)]
pub struct SubmitArgs {
    /// Title of the document
    pub title: String,
    /// Account of the submitting writer
    #[arg(short, long)]
    pub writer: String,
    /// Display name of the writer; defaults to the account
    #[arg(long)]
    pub writer_name: Option<String>,
    /// Ordered approver accounts, comma separated (first acts first)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub approvers: Vec<String>,
    /// Path to a JSON file with test results to attach
    #[arg(long)]
    pub results: Option<PathBuf>,
}

impl SubmitArgs {
    /// Convert CLI arguments to core submission parameters, reading the
    /// attached results file if one was given.
    pub fn into_params(self) -> anyhow::Result<SubmitDocument> {
        let test_results: Vec<TestResultPayload> = match &self.results {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read results file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse results file {}", path.display()))?
            }
            None => Vec::new(),
        };

        let writer_name = self.writer_name.unwrap_or_else(|| self.writer.clone());

        Ok(SubmitDocument {
            title: self.title,
            writer_id: self.writer,
            writer_name,
            approvers: self.approvers,
            test_results,
        })
    }
}

/// Approve or reject a document at your step
#[derive(clap::Args)]
pub struct DecisionArgs {
    /// ID of the document to act on
    pub id: u64,
    /// Account of the acting approver
    #[arg(short, long)]
    pub approver: String,
    /// Free-text comment recorded on the step
    #[arg(short, long)]
    pub comment: Option<String>,
}

impl From<DecisionArgs> for Decision {
    fn from(val: DecisionArgs) -> Self {
        Decision {
            document_id: val.id,
            approver_id: val.approver,
            comment: val.comment,
        }
    }
}

/// Show details of a specific document
#[derive(clap::Args)]
pub struct ShowArgs {
    /// ID of the document to display
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// List the pending documents waiting on one approver
#[derive(clap::Args)]
pub struct InboxArgs {
    /// Account whose queue to list
    pub approver: String,
}

impl From<InboxArgs> for Inbox {
    fn from(val: InboxArgs) -> Self {
        Inbox {
            approver_id: val.approver,
        }
    }
}

/// List every document one writer has submitted
#[derive(clap::Args)]
pub struct DraftsArgs {
    /// Account whose documents to list
    pub writer: String,
}

impl From<DraftsArgs> for Drafts {
    fn from(val: DraftsArgs) -> Self {
        Drafts {
            writer_id: val.writer,
        }
    }
}
