use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quiz_tui::{FileProvider, FixtureProvider};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz from (defaults to the built-in quiz)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Simulated fetch latency of the built-in quiz, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let result = match args.questions {
        Some(path) => quiz_tui::run(FileProvider::new(path)).await,
        None => {
            let provider = FixtureProvider::with_delay(Duration::from_millis(args.delay_ms));
            quiz_tui::run(provider).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
