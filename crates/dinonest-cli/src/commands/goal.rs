//! Goal management commands for CLI.

use clap::Subcommand;
use dinonest_core::goals::GoalDuration;
use dinonest_core::quotes::{self, QuoteContext};
use dinonest_core::{Config, GoalStore};

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a new savings goal
    Create {
        /// Goal title
        title: String,
        /// Target amount to save
        #[arg(long)]
        amount: f64,
        /// Goal duration: weekly, monthly or yearly (default: monthly)
        #[arg(long, default_value = "monthly")]
        duration: String,
    },
    /// List all goals
    List,
    /// Show goal details
    Get {
        /// Goal ID
        id: String,
    },
    /// Log a deposit toward a goal
    Deposit {
        /// Goal ID
        id: String,
        /// Deposit amount
        amount: f64,
    },
    /// Force-mark a goal as completed
    Complete {
        /// Goal ID
        id: String,
    },
    /// Delete a goal
    Delete {
        /// Goal ID
        id: String,
    },
    /// Show the goal currently receiving deposits
    Current,
    /// Make another goal the current one
    Switch {
        /// Goal ID
        id: String,
    },
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = GoalStore::open()?;

    match action {
        GoalAction::Create {
            title,
            amount,
            duration,
        } => {
            let duration = parse_duration(&duration)?;
            match store.create_goal(&title, amount, duration)? {
                Some(goal) => {
                    println!("Goal created: {}", goal.id);
                    println!("{}", serde_json::to_string_pretty(goal)?);
                }
                None => {
                    println!("Goal not created: title must be non-empty and amount positive");
                }
            }
        }
        GoalAction::List => {
            println!("{}", serde_json::to_string_pretty(store.goals())?);
        }
        GoalAction::Get { id } => match store.find_goal(&id) {
            Some(goal) => println!("{}", serde_json::to_string_pretty(goal)?),
            None => println!("Goal not found: {id}"),
        },
        GoalAction::Deposit { id, amount } => {
            if !amount.is_finite() || amount <= 0.0 {
                println!("Deposit not recorded: amount must be positive");
                return Ok(());
            }
            store.update_goal_progress(&id, amount)?;
            match store.find_goal(&id) {
                Some(goal) => {
                    println!("{}", serde_json::to_string_pretty(goal)?);
                    if Config::load_or_default().quotes_enabled {
                        let context = if goal.completed {
                            QuoteContext::GoalCompleted
                        } else {
                            QuoteContext::Saving
                        };
                        let quote = quotes::random_quote(Some(context));
                        println!();
                        println!("\"{}\" -- {}", quote.text, quote.author);
                    }
                }
                None => println!("Goal not found: {id}"),
            }
        }
        GoalAction::Complete { id } => {
            store.complete_goal(&id)?;
            match store.find_goal(&id) {
                Some(goal) => println!("{}", serde_json::to_string_pretty(goal)?),
                None => println!("Goal not found: {id}"),
            }
        }
        GoalAction::Delete { id } => {
            store.delete_goal(&id)?;
            println!("Goal deleted: {id}");
        }
        GoalAction::Current => match store.current_goal() {
            Some(goal) => println!("{}", serde_json::to_string_pretty(goal)?),
            None => println!("No current goal"),
        },
        GoalAction::Switch { id } => {
            store.set_current_goal(&id)?;
            match store.current_goal() {
                Some(goal) if goal.id == id => println!("Current goal: {}", goal.title),
                _ => println!("Goal not found: {id}"),
            }
        }
    }
    Ok(())
}

fn parse_duration(s: &str) -> Result<GoalDuration, Box<dyn std::error::Error>> {
    match s {
        "weekly" => Ok(GoalDuration::Weekly),
        "monthly" => Ok(GoalDuration::Monthly),
        "yearly" => Ok(GoalDuration::Yearly),
        _ => Err(format!("unknown duration '{s}' (expected weekly, monthly or yearly)").into()),
    }
}
