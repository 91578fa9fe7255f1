//! Ask the strategist for a roadmap from the command line.
//!
//! ```sh
//! GEMINI_API_KEY=... cargo run --example brainstorm -- "a real-time fraud detector"
//! ```

use portfolio_brainstorm::{Brainstorm, Error, GeminiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let idea = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let brainstorm = Brainstorm::new(GeminiClient::from_env()?);
    match brainstorm.submit(&idea).await {
        Some(result) => {
            let text = String::from(result);
            println!("{text}");
        }
        None => eprintln!("Describe a project idea to brainstorm."),
    }

    Ok(())
}
