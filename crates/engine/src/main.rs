//! Sorzi - Main entry point.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sorzi_domain::Lottery;
use sorzi_engine::api::{output, Cli, Commands};
use sorzi_engine::infrastructure::settings::{OutputFormat, Settings};
use sorzi_engine::App;

/// Used when `RUST_LOG` is unset: the per-batch info event and above.
const DEFAULT_LOG_FILTER: &str = "sorzi_engine=info";

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs go to stderr so generated games can be piped cleanly
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.into_command() {
        Commands::List => print!("{}", output::render_catalog(&Lottery::catalog())),
        Commands::Generate(flags) => {
            let settings = Settings::from_env().context("loading settings from environment")?;
            tracing::debug!(?settings, "Loaded settings");
            let (request, format) = flags.resolve(&settings);

            let app = App::with_os_entropy();
            let outcome = app
                .use_cases
                .generate
                .execute(&request)
                .with_context(|| format!("generating games for {}", request.lottery))?;

            match format {
                OutputFormat::Text => print!("{}", output::render_text(&outcome)),
                OutputFormat::Json => println!(
                    "{}",
                    output::render_json(&outcome).context("serializing games")?
                ),
            }
        }
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    // Then the working directory.
    let _ = dotenvy::dotenv();
}
