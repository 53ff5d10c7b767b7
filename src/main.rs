use anyhow::Result;
use clap::Parser;
use prompt_funnel::app::App;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "prompt-funnel")]
#[command(about = "Guide an image idea through a three-phase prompt funnel")]
struct CliArgs {
    /// The raw image idea to feed into phase 1.
    #[arg(value_name = "IDEA")]
    idea: String,

    /// Archetype letter selection for phase 2 (e.g. A, B, C, D).
    #[arg(long, value_name = "LETTER")]
    archetype: String,

    /// Recipe number selection for phase 3 (e.g. 1, 2, 3).
    #[arg(long, value_name = "NUMBER")]
    recipe: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_funnel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting prompt-funnel");

    let args = CliArgs::parse();

    match App::new() {
        Ok(app) => match app.run(&args.idea, &args.archetype, &args.recipe).await {
            Ok(_) => {
                info!("Funnel completed successfully");
                Ok(())
            }
            Err(e) => {
                error!("Funnel failed: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    }
}
