//! ragcompare — plain vs retrieval-grounded completions, side by side.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--check" | "check" => {
                let missing =
                    ragcompare_core::config::missing_vars(|name| std::env::var(name).ok());
                if missing.is_empty() {
                    println!("Configuration OK");
                    return Ok(());
                }
                for name in &missing {
                    eprintln!("Missing environment variable: {}", name);
                }
                std::process::exit(1);
            }
            "--help" | "-h" | "help" => {
                println!("ragcompare — plain vs retrieval-grounded completions, side by side");
                println!();
                println!("Usage: ragcompare [command]");
                println!();
                println!("Commands:");
                println!("  (none)      Start the server");
                println!("  check       Validate environment configuration");
                println!("  help        Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!(
                    "Unknown command: {}. Use 'ragcompare help' for usage.",
                    args[1]
                );
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let config = ragcompare_core::Config::from_env()?;
    let port = config.port;

    info!(
        "Using deployment {} (api-version {}), index {}",
        config.openai.deployment, config.openai.api_version, config.search.index_name
    );

    let state = Arc::new(AppState::new(config));

    // Build router
    let app = routes::build_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("ragcompare listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
