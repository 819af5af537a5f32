use anyhow::Result;
use clap::Parser;

mod app;

#[derive(Parser)]
#[command(name = "counsel")]
#[command(about = "Counsel - AI legal consultation assistant")]
#[command(version)]
struct Cli {
    /// Run a single prompt and exit
    #[arg(short, long)]
    prompt: Option<String>,

    /// Gemini model to use
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut settings = counsel_core::Settings::load();
    if let Some(ref model) = cli.model {
        settings.llm.model = model.clone();
    }
    tracing::debug!("Using model {}", settings.llm.model);

    if let Some(prompt) = cli.prompt {
        app::run_single_prompt(&settings, &prompt).await?;
    } else {
        app::run_chat(&settings).await?;
    }

    Ok(())
}
