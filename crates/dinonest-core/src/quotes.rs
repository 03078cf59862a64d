//! Motivational quotes and streak milestone messages.
//!
//! A static table of quotes tagged by context, with uniform random
//! selection. Selection is generic over `rand::Rng` so tests can pass a
//! seeded generator.

use rand::Rng;
use serde::Serialize;

/// Context tag for quote selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteContext {
    Starting,
    Saving,
    Habit,
    Streak,
    GoalCompleted,
    Daily,
}

impl QuoteContext {
    /// Parse a context tag; unknown tags yield `None` (callers fall back
    /// to the full table).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "starting" => Some(QuoteContext::Starting),
            "saving" => Some(QuoteContext::Saving),
            "habit" => Some(QuoteContext::Habit),
            "streak" => Some(QuoteContext::Streak),
            "goal_completed" => Some(QuoteContext::GoalCompleted),
            "daily" => Some(QuoteContext::Daily),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteContext::Starting => "starting",
            QuoteContext::Saving => "saving",
            QuoteContext::Habit => "habit",
            QuoteContext::Streak => "streak",
            QuoteContext::GoalCompleted => "goal_completed",
            QuoteContext::Daily => "daily",
        }
    }
}

/// A motivational quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    pub context: QuoteContext,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "A journey of a thousand miles begins with a single step.",
        author: "Lao Tzu",
        context: QuoteContext::Starting,
    },
    Quote {
        text: "Do not save what is left after spending, but spend what is left after saving.",
        author: "Warren Buffett",
        context: QuoteContext::Saving,
    },
    Quote {
        text: "The habit of saving is itself an education; it fosters every virtue, teaches self-denial, cultivates the sense of order, trains to forethought.",
        author: "T.T. Munger",
        context: QuoteContext::Habit,
    },
    Quote {
        text: "Small disciplines repeated with consistency every day lead to great achievements.",
        author: "John C. Maxwell",
        context: QuoteContext::Streak,
    },
    Quote {
        text: "Success is the sum of small efforts repeated day in and day out.",
        author: "Robert Collier",
        context: QuoteContext::Streak,
    },
    Quote {
        text: "You are never too old to set another goal or to dream a new dream.",
        author: "C.S. Lewis",
        context: QuoteContext::GoalCompleted,
    },
    Quote {
        text: "The secret of getting ahead is getting started.",
        author: "Mark Twain",
        context: QuoteContext::Starting,
    },
    Quote {
        text: "Financial peace isn't the acquisition of stuff. It's learning to live on less than you make.",
        author: "Dave Ramsey",
        context: QuoteContext::Saving,
    },
    Quote {
        text: "Every accomplishment starts with the decision to try.",
        author: "Unknown",
        context: QuoteContext::GoalCompleted,
    },
    Quote {
        text: "Your future self will thank you for the small steps you take today.",
        author: "Unknown",
        context: QuoteContext::Daily,
    },
];

/// Streak milestones, highest first.
const MILESTONES: &[(u32, &str)] = &[
    (100, "\u{1F451} 100 days! You're a legend!"),
    (50, "\u{1F3AF} 50 days! Unstoppable!"),
    (30, "\u{1F3C6} 30 days! You're a savings champion!"),
    (14, "\u{1F4AA} Two weeks! You're crushing it!"),
    (7, "\u{2B50} One week strong! Keep it up!"),
    (3, "\u{1F525} 3 days! You're building momentum!"),
    (1, "\u{1F331} Great start! You've begun your journey!"),
];

/// Pick a quote uniformly at random using the thread-local RNG.
pub fn random_quote(context: Option<QuoteContext>) -> &'static Quote {
    random_quote_with(&mut rand::thread_rng(), context)
}

/// Pick a quote uniformly at random with a caller-supplied RNG.
///
/// With a context, the pool is the entries tagged with it; an empty pool
/// (or no context) falls back to the whole table.
pub fn random_quote_with<R: Rng + ?Sized>(
    rng: &mut R,
    context: Option<QuoteContext>,
) -> &'static Quote {
    let pool: Vec<&'static Quote> = match context {
        Some(ctx) => QUOTES.iter().filter(|q| q.context == ctx).collect(),
        None => QUOTES.iter().collect(),
    };
    let pool = if pool.is_empty() {
        QUOTES.iter().collect()
    } else {
        pool
    };
    pool[rng.gen_range(0..pool.len())]
}

/// Message for the highest milestone at or below `streak`.
///
/// Below every milestone the fallback embeds the count, singular "day"
/// at exactly 1 and "days" otherwise.
pub fn streak_message(streak: u32) -> String {
    for &(milestone, message) in MILESTONES {
        if streak >= milestone {
            return message.to_string();
        }
    }
    let unit = if streak == 1 { "day" } else { "days" };
    format!("\u{1F525} {streak} {unit} streak!")
}
