mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skiff", about = "Build and stage Google Cloud Functions for the Node runtime")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle function entry points
    Bundle {
        /// Function name, or `all` for every discovered function
        #[arg(default_value = "all")]
        target: String,
    },
    /// Materialize deployment files into the function's output directory
    Stage {
        /// Function name
        function: String,
    },
    /// Emit type declarations through a temporary checker configuration
    Declarations {
        /// Function name
        function: String,
    },
    /// Bundle, stage, and emit declarations for one function
    Package {
        /// Function name
        function: String,
    },
    /// Scaffold a new function from the HTTP handler template
    New {
        /// Function name
        function: String,
    },
    /// Check the Node toolchain and project setup
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bundle { target } => commands::bundle(&target).await?,
        Commands::Stage { function } => commands::stage(&function).await?,
        Commands::Declarations { function } => commands::declarations(&function).await?,
        Commands::Package { function } => commands::package(&function).await?,
        Commands::New { function } => commands::new_function(&function).await?,
        Commands::Doctor => commands::doctor().await?,
    }

    Ok(())
}
