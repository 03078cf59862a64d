//! Process-wide goal and streak state with file-backed persistence.
//!
//! The store owns the ordered list of goals, the id of the goal currently
//! receiving deposits, and the shared streak record. Every mutation
//! rewrites the persisted JSON blob; startup reloads it, falling back to
//! the empty default when the file is missing or unreadable.
//!
//! The current goal is stored as an id and resolved against the list on
//! read, so the "current" view and the list entry can never diverge.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time::{end_date, is_streak_active};
use super::{Goal, GoalDuration, Streak};
use crate::error::{Result, StorageError};
use crate::storage::data_dir;

/// Store file name inside the data directory.
const STORE_FILE: &str = "dinonest-goal-storage.json";

/// Persisted blob format version.
const STORE_VERSION: u32 = 1;

/// Persisted snapshot of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreState {
    #[serde(default = "default_version")]
    version: u32,
    #[serde(default)]
    goals: Vec<Goal>,
    #[serde(default)]
    current_goal: Option<String>,
    #[serde(default)]
    streak: Streak,
}

fn default_version() -> u32 {
    STORE_VERSION
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            goals: Vec::new(),
            current_goal: None,
            streak: Streak::default(),
        }
    }
}

/// Goal and streak state container.
///
/// All operations are synchronous and atomic with respect to in-process
/// state; there is exactly one logical writer. Invalid creation input and
/// unknown-id lookups are silent no-ops -- the only errors surfaced are
/// persistence failures.
#[derive(Debug)]
pub struct GoalStore {
    path: PathBuf,
    goals: Vec<Goal>,
    current_goal: Option<String>,
    streak: Streak,
}

impl GoalStore {
    /// Open the store at the default location inside the data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::open_at(data_dir()?.join(STORE_FILE)))
    }

    /// Open the store backed by an explicit file path.
    ///
    /// A missing or corrupt file yields the empty default state.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = std::fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<StoreState>(&content).ok())
            .unwrap_or_default();
        Self {
            path,
            goals: state.goals,
            current_goal: state.current_goal,
            streak: state.streak,
        }
    }

    fn save(&self) -> Result<()> {
        let state = StoreState {
            version: STORE_VERSION,
            goals: self.goals.clone(),
            current_goal: self.current_goal.clone(),
            streak: self.streak.clone(),
        };
        let content = serde_json::to_string_pretty(&state).map_err(StorageError::Serialize)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    /// All goals, in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// The shared streak record.
    pub fn streak(&self) -> &Streak {
        &self.streak
    }

    /// Id of the goal currently receiving deposits, if any.
    pub fn current_goal_id(&self) -> Option<&str> {
        self.current_goal.as_deref()
    }

    /// The goal currently receiving deposits, resolved by id.
    pub fn current_goal(&self) -> Option<&Goal> {
        let id = self.current_goal.as_deref()?;
        self.find_goal(id)
    }

    /// Look up a goal by id.
    pub fn find_goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == goal_id)
    }

    /// Create a new goal and append it to the list.
    ///
    /// The first goal created becomes the current goal; later ones do not
    /// auto-switch. Empty (after trimming) titles and non-positive target
    /// amounts are silently ignored and `None` is returned -- the store
    /// layer owns this validation.
    pub fn create_goal(
        &mut self,
        title: &str,
        target_amount: f64,
        duration: GoalDuration,
    ) -> Result<Option<&Goal>> {
        self.create_goal_at(title, target_amount, duration, Utc::now())
    }

    /// Clock-injected variant of [`create_goal`](Self::create_goal).
    pub fn create_goal_at(
        &mut self,
        title: &str,
        target_amount: f64,
        duration: GoalDuration,
        now: DateTime<Utc>,
    ) -> Result<Option<&Goal>> {
        let title = title.trim();
        if title.is_empty() || target_amount <= 0.0 {
            return Ok(None);
        }

        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            target_amount,
            current_amount: 0.0,
            duration,
            start_date: now,
            end_date: end_date(now, duration),
            completed: false,
            completed_at: None,
        };

        if self.current_goal.is_none() {
            self.current_goal = Some(goal.id.clone());
        }
        self.goals.push(goal);
        self.save()?;
        Ok(self.goals.last())
    }

    /// Add `amount` to the matching goal's progress.
    ///
    /// Marks the goal completed (and stamps `completed_at`) the instant
    /// the new amount first reaches the target; the completed flag never
    /// reverts. Unknown ids leave the store untouched.
    pub fn update_goal_progress(&mut self, goal_id: &str, amount: f64) -> Result<()> {
        self.update_goal_progress_at(goal_id, amount, Utc::now())
    }

    /// Clock-injected variant of [`update_goal_progress`](Self::update_goal_progress).
    pub fn update_goal_progress_at(
        &mut self,
        goal_id: &str,
        amount: f64,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == goal_id) else {
            return Ok(());
        };
        goal.current_amount += amount;
        if !goal.completed && goal.current_amount >= goal.target_amount {
            goal.completed = true;
            goal.completed_at = Some(now);
        }
        self.save()
    }

    /// Force-mark a goal completed, independent of its amount.
    pub fn complete_goal(&mut self, goal_id: &str) -> Result<()> {
        self.complete_goal_at(goal_id, Utc::now())
    }

    /// Clock-injected variant of [`complete_goal`](Self::complete_goal).
    pub fn complete_goal_at(&mut self, goal_id: &str, now: DateTime<Utc>) -> Result<()> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == goal_id) else {
            return Ok(());
        };
        goal.completed = true;
        goal.completed_at = Some(now);
        self.save()
    }

    /// Remove a goal; clears the current-goal id if it pointed at it.
    pub fn delete_goal(&mut self, goal_id: &str) -> Result<()> {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != goal_id);
        if self.goals.len() == before {
            return Ok(());
        }
        if self.current_goal.as_deref() == Some(goal_id) {
            self.current_goal = None;
        }
        self.save()
    }

    /// Make a goal the current one if it exists; otherwise leave the
    /// current goal unchanged.
    pub fn set_current_goal(&mut self, goal_id: &str) -> Result<()> {
        if self.goals.iter().any(|g| g.id == goal_id) {
            self.current_goal = Some(goal_id.to_string());
            self.save()?;
        }
        Ok(())
    }

    /// Record a check-in.
    ///
    /// The grace-period test runs against the previous check-in before the
    /// timestamp is replaced: an active streak increments, a lapsed one
    /// resets to 1. `total_check_ins` increases unconditionally.
    pub fn check_in(&mut self) -> Result<&Streak> {
        self.check_in_at(Utc::now())
    }

    /// Clock-injected variant of [`check_in`](Self::check_in).
    pub fn check_in_at(&mut self, now: DateTime<Utc>) -> Result<&Streak> {
        let active = is_streak_active(self.streak.last_check_in, now);
        self.streak.current_streak = if active {
            self.streak.current_streak + 1
        } else {
            1
        };
        self.streak.longest_streak = self.streak.longest_streak.max(self.streak.current_streak);
        self.streak.last_check_in = Some(now);
        self.streak.total_check_ins += 1;
        self.save()?;
        Ok(&self.streak)
    }

    /// Reset the current streak to zero. Longest streak, last check-in,
    /// and the lifetime counter are untouched.
    pub fn reset_streak(&mut self) -> Result<()> {
        self.streak.current_streak = 0;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> GoalStore {
        GoalStore::open_at(dir.path().join("store.json"))
    }

    fn ts(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() + Duration::hours(h as i64)
    }

    #[test]
    fn create_goal_defaults() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let goal = store
            .create_goal_at("Trip", 300.0, GoalDuration::Weekly, ts(0))
            .unwrap()
            .unwrap();
        assert_eq!(goal.title, "Trip");
        assert_eq!(goal.current_amount, 0.0);
        assert!(!goal.completed);
        assert!(goal.completed_at.is_none());
        assert_eq!(goal.end_date, goal.start_date + Duration::days(7));
    }

    #[test]
    fn first_goal_becomes_current_later_ones_do_not() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.create_goal("First", 100.0, GoalDuration::Weekly).unwrap();
        let first_id = store.goals()[0].id.clone();
        store.create_goal("Second", 200.0, GoalDuration::Monthly).unwrap();

        assert_eq!(store.current_goal_id(), Some(first_id.as_str()));
        assert_eq!(store.current_goal().unwrap().title, "First");
    }

    #[test]
    fn invalid_creation_input_is_ignored() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        assert!(store.create_goal("", 100.0, GoalDuration::Weekly).unwrap().is_none());
        assert!(store.create_goal("   ", 100.0, GoalDuration::Weekly).unwrap().is_none());
        assert!(store.create_goal("Bike", 0.0, GoalDuration::Weekly).unwrap().is_none());
        assert!(store.create_goal("Bike", -5.0, GoalDuration::Weekly).unwrap().is_none());
        assert!(store.goals().is_empty());
        assert!(store.current_goal_id().is_none());
    }

    #[test]
    fn deposits_accumulate_and_complete_on_crossing() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.create_goal("Trip", 300.0, GoalDuration::Monthly).unwrap();
        let id = store.goals()[0].id.clone();

        store.update_goal_progress(&id, 100.0).unwrap();
        let goal = store.find_goal(&id).unwrap();
        assert_eq!(goal.current_amount, 100.0);
        assert!(!goal.completed);

        store.update_goal_progress(&id, 250.0).unwrap();
        let goal = store.find_goal(&id).unwrap();
        assert_eq!(goal.current_amount, 350.0);
        assert!(goal.completed);
        assert!(goal.completed_at.is_some());
    }

    #[test]
    fn completion_timestamp_is_stamped_once() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.create_goal("Trip", 100.0, GoalDuration::Weekly).unwrap();
        let id = store.goals()[0].id.clone();

        store.update_goal_progress_at(&id, 100.0, ts(1)).unwrap();
        let stamped = store.find_goal(&id).unwrap().completed_at;
        assert_eq!(stamped, Some(ts(1)));

        store.update_goal_progress_at(&id, 50.0, ts(2)).unwrap();
        assert_eq!(store.find_goal(&id).unwrap().completed_at, stamped);
    }

    #[test]
    fn current_goal_view_reflects_progress() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.create_goal("Trip", 300.0, GoalDuration::Monthly).unwrap();
        let id = store.goals()[0].id.clone();
        store.update_goal_progress(&id, 120.0).unwrap();

        let current = store.current_goal().unwrap();
        assert_eq!(current.current_amount, 120.0);
        assert_eq!(current.current_amount, store.goals()[0].current_amount);
    }

    #[test]
    fn unknown_goal_id_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.create_goal("Trip", 300.0, GoalDuration::Monthly).unwrap();
        store.update_goal_progress("no-such-id", 100.0).unwrap();
        store.complete_goal("no-such-id").unwrap();
        store.delete_goal("no-such-id").unwrap();

        assert_eq!(store.goals().len(), 1);
        assert_eq!(store.goals()[0].current_amount, 0.0);
        assert!(!store.goals()[0].completed);
    }

    #[test]
    fn complete_goal_forces_completion() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.create_goal("Trip", 300.0, GoalDuration::Monthly).unwrap();
        let id = store.goals()[0].id.clone();
        store.complete_goal(&id).unwrap();

        let goal = store.find_goal(&id).unwrap();
        assert!(goal.completed);
        assert!(goal.completed_at.is_some());
        assert_eq!(goal.current_amount, 0.0);
    }

    #[test]
    fn delete_goal_clears_current() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.create_goal("First", 100.0, GoalDuration::Weekly).unwrap();
        store.create_goal("Second", 200.0, GoalDuration::Weekly).unwrap();
        let first_id = store.goals()[0].id.clone();

        store.delete_goal(&first_id).unwrap();
        assert_eq!(store.goals().len(), 1);
        assert!(store.current_goal_id().is_none());
    }

    #[test]
    fn delete_non_current_goal_keeps_current() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.create_goal("First", 100.0, GoalDuration::Weekly).unwrap();
        store.create_goal("Second", 200.0, GoalDuration::Weekly).unwrap();
        let first_id = store.goals()[0].id.clone();
        let second_id = store.goals()[1].id.clone();

        store.delete_goal(&second_id).unwrap();
        assert_eq!(store.current_goal_id(), Some(first_id.as_str()));
    }

    #[test]
    fn set_current_goal_switches_and_ignores_unknown() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.create_goal("First", 100.0, GoalDuration::Weekly).unwrap();
        store.create_goal("Second", 200.0, GoalDuration::Weekly).unwrap();
        let second_id = store.goals()[1].id.clone();

        store.set_current_goal(&second_id).unwrap();
        assert_eq!(store.current_goal_id(), Some(second_id.as_str()));

        store.set_current_goal("no-such-id").unwrap();
        assert_eq!(store.current_goal_id(), Some(second_id.as_str()));
    }

    #[test]
    fn first_check_in() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.check_in_at(ts(0)).unwrap();
        assert_eq!(store.streak().current_streak, 1);
        assert_eq!(store.streak().longest_streak, 1);
        assert_eq!(store.streak().total_check_ins, 1);
        assert_eq!(store.streak().last_check_in, Some(ts(0)));
    }

    #[test]
    fn check_in_within_grace_period_increments() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.check_in_at(ts(0)).unwrap();
        store.check_in_at(ts(24)).unwrap();
        store.check_in_at(ts(47)).unwrap();
        assert_eq!(store.streak().current_streak, 3);
        assert_eq!(store.streak().longest_streak, 3);
        assert_eq!(store.streak().total_check_ins, 3);
    }

    #[test]
    fn check_in_after_gap_resets_to_one() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.check_in_at(ts(0)).unwrap();
        store.check_in_at(ts(24)).unwrap();
        // 49 hours after the last check-in
        store.check_in_at(ts(73)).unwrap();
        assert_eq!(store.streak().current_streak, 1);
        assert_eq!(store.streak().longest_streak, 2);
        assert_eq!(store.streak().total_check_ins, 3);
    }

    #[test]
    fn reset_streak_keeps_other_counters() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        store.check_in_at(ts(0)).unwrap();
        store.check_in_at(ts(10)).unwrap();
        store.reset_streak().unwrap();

        assert_eq!(store.streak().current_streak, 0);
        assert_eq!(store.streak().longest_streak, 2);
        assert_eq!(store.streak().last_check_in, Some(ts(10)));
        assert_eq!(store.streak().total_check_ins, 2);
    }

    #[test]
    fn reload_preserves_state() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut store = GoalStore::open_at(&path);
        store.create_goal("Trip", 300.0, GoalDuration::Monthly).unwrap();
        let id = store.goals()[0].id.clone();
        store.update_goal_progress(&id, 100.0).unwrap();
        store.check_in().unwrap();

        let reloaded = GoalStore::open_at(&path);
        assert_eq!(reloaded.goals(), store.goals());
        assert_eq!(reloaded.streak(), store.streak());
        assert_eq!(reloaded.current_goal_id(), store.current_goal_id());
    }

    #[test]
    fn corrupt_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = GoalStore::open_at(&path);
        assert!(store.goals().is_empty());
        assert!(store.current_goal_id().is_none());
        assert_eq!(store.streak(), &Streak::default());
    }
}
