//! Streak tracking commands for CLI.

use clap::Subcommand;
use dinonest_core::quotes;
use dinonest_core::GoalStore;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Record a check-in
    Checkin,
    /// Reset the current streak to zero
    Reset,
    /// Show streak counters and the milestone message
    Status,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = GoalStore::open()?;

    match action {
        StreakAction::Checkin => {
            let streak = store.check_in()?;
            println!("{}", quotes::streak_message(streak.current_streak));
            println!("{}", serde_json::to_string_pretty(streak)?);
        }
        StreakAction::Reset => {
            store.reset_streak()?;
            println!("Streak reset");
        }
        StreakAction::Status => {
            let streak = store.streak();
            println!("{}", quotes::streak_message(streak.current_streak));
            println!("{}", serde_json::to_string_pretty(streak)?);
        }
    }
    Ok(())
}
