//! Motivational quote commands for CLI.

use clap::Subcommand;
use dinonest_core::quotes::{self, QuoteContext};

#[derive(Subcommand)]
pub enum QuoteAction {
    /// Print a random motivational quote
    Random {
        /// Context: starting, saving, habit, streak, goal_completed, daily.
        /// Unknown contexts fall back to the full table.
        #[arg(long)]
        context: Option<String>,
    },
}

pub fn run(action: QuoteAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuoteAction::Random { context } => {
            let context = context.as_deref().and_then(QuoteContext::parse);
            let quote = quotes::random_quote(context);
            println!("\"{}\" -- {}", quote.text, quote.author);
        }
    }
    Ok(())
}
