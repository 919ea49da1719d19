//! `certify` -- certificate template preview and export.
//!
//! # Environment variables
//!
//! | Variable                 | Default        | Description                       |
//! |--------------------------|----------------|-----------------------------------|
//! | `CERTIFY_OUTPUT_DIR`     | `certificates` | Where `issue` writes certificates |
//! | `CERTIFY_FILE_EXTENSION` | `html`         | Extension of issued files         |
//! | `RUST_LOG`               | `certify=info,certify_cli=info,certify_core=info` | Log filter |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use certify_cli::cli::{Cli, Command};
use certify_cli::commands;
use certify_cli::config::CliConfig;

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "certify=info,certify_cli=info,certify_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    let mut stdout = std::io::stdout().lock();

    let result = match &cli.command {
        Command::Preview {
            template,
            context,
            date,
        } => commands::preview::run(template, context.as_deref(), *date, &mut stdout),
        Command::Tokens { template } => commands::tokens::run(template, &mut stdout),
        Command::Issue {
            template,
            data,
            out_dir,
            date,
        } => {
            let out_dir = out_dir.as_deref().unwrap_or(config.output_dir.as_path());
            let issued_on = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
            commands::issue::run(
                template,
                data,
                out_dir,
                &config.file_extension,
                issued_on,
                &mut stdout,
            )
            .map(|_| ())
        }
    };

    if let Err(e) = result {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}
