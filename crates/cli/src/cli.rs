use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "certify", about = "Certificate template preview and export", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a template to stdout
    Preview {
        /// Template markup file
        template: PathBuf,

        /// JSON variable context (sample data when omitted)
        #[arg(long)]
        context: Option<PathBuf>,

        /// Date for the `date` namespace (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List the tokens used by a template
    Tokens {
        /// Template markup file
        template: PathBuf,
    },

    /// Render one certificate file per participant
    Issue {
        /// Template markup file
        template: PathBuf,

        /// JSON batch with `event`, `organization` and `participants`
        #[arg(long)]
        data: PathBuf,

        /// Output directory (default: CERTIFY_OUTPUT_DIR)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Issue date (default: today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}
