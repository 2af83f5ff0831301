use crate::errors::StorageError;
use crate::models::{HabitRecord, HabitStore};
use crate::storage;
use crate::streak;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Prompt modes. Prompts are mutually exclusive: each is reachable only
/// from `Idle` and returns to `Idle` on confirm or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    PromptingDate,
    PromptingCurrentStreak,
    PromptingLongestStreak,
}

/// In-memory tracker state: the fixed habit catalog, cursor, per-session
/// selection flags, the owned store, and the one-shot streak override.
/// Every operation that touches the store rewrites the whole file before
/// returning.
pub struct Tracker {
    catalog: Vec<String>,
    cursor: usize,
    selected: Vec<bool>,
    store: HabitStore,
    data_path: PathBuf,
    override_streak: bool,
    mode: Mode,
    input: String,
    status: Option<String>,
}

impl Tracker {
    pub fn new(catalog: Vec<String>, store: HabitStore, data_path: PathBuf) -> Self {
        let mut tracker = Self {
            selected: vec![false; catalog.len()],
            catalog,
            cursor: 0,
            store,
            data_path,
            override_streak: false,
            mode: Mode::Idle,
            input: String::new(),
            status: None,
        };
        tracker.refresh_selection();
        tracker
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    pub fn record(&self, name: &str) -> Option<&HabitRecord> {
        self.store.get(name)
    }

    pub fn store(&self) -> &HabitStore {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.catalog.len() {
            self.cursor += 1;
        }
    }

    /// Re-derives every selection flag from today's membership. Called on
    /// each loop tick so marks drop off when the session crosses midnight.
    pub fn refresh_selection(&mut self) {
        let today = streak::today_key();
        for (index, name) in self.catalog.iter().enumerate() {
            self.selected[index] = self
                .store
                .get(name)
                .is_some_and(|record| record.dates.contains(&today));
        }
    }

    /// Marks or unmarks today for the habit under the cursor. Unmarking
    /// re-anchors the current streak at yesterday, since the chain must end
    /// at the most recent day still marked. A pending manual override is
    /// consumed here: the streak keeps its overridden value for exactly
    /// this one toggle.
    pub fn toggle_today(&mut self) -> Result<(), StorageError> {
        let today = streak::today_key();
        let keep_streak = std::mem::take(&mut self.override_streak);
        let Some(entry) = self.entry_under_cursor() else {
            return Ok(());
        };

        let marked = entry.dates.contains(&today);
        if marked {
            entry.dates.remove(&today);
            if !keep_streak {
                entry.streak = streak::streak_from(&streak::days_ago_key(1), &entry.dates);
            }
        } else {
            entry.dates.insert(today.clone());
            if !keep_streak {
                entry.streak = streak::streak_from(&today, &entry.dates);
            }
        }
        entry.longest = entry.longest.max(streak::longest_run(&entry.dates));
        self.selected[self.cursor] = !marked;
        self.save()
    }

    /// Backfills the day `days` before today for the habit under the
    /// cursor. The current streak stays anchored at today regardless of
    /// which day was logged.
    pub fn log_days_ago(&mut self, days: i64) -> Result<(), StorageError> {
        self.log_day(streak::days_ago_key(days))
    }

    /// Backfills an explicit `YYYY-MM-DD` day. Input that does not parse is
    /// a silent no-op; the prompt owns any user feedback. The stored id is
    /// the re-formatted parse result, so spelling variants collapse onto
    /// one id.
    pub fn log_specific_date(&mut self, input: &str) -> Result<(), StorageError> {
        let Ok(day) = NaiveDate::parse_from_str(input.trim(), streak::DAY_FORMAT) else {
            return Ok(());
        };
        self.log_day(streak::day_key(day))
    }

    fn log_day(&mut self, id: String) -> Result<(), StorageError> {
        let today = streak::today_key();
        let Some(entry) = self.entry_under_cursor() else {
            return Ok(());
        };

        entry.dates.insert(id);
        entry.streak = streak::streak_from(&today, &entry.dates);
        entry.longest = entry.longest.max(streak::longest_run(&entry.dates));
        let done_today = entry.dates.contains(&today);
        self.selected[self.cursor] = done_today;
        self.save()
    }

    /// Overwrites the current streak with a user-supplied value, bypassing
    /// recomputation, and arms the one-shot override so the next toggle
    /// does not recompute it either. Anything but a non-negative integer is
    /// a silent no-op.
    pub fn set_manual_current_streak(&mut self, input: &str) -> Result<(), StorageError> {
        let Ok(value) = input.trim().parse::<u32>() else {
            return Ok(());
        };
        let Some(entry) = self.entry_under_cursor() else {
            return Ok(());
        };
        entry.streak = value;
        self.override_streak = true;
        self.save()
    }

    /// Overwrites the longest streak. This is the only path that can lower
    /// it; normal operations only ever raise it.
    pub fn set_manual_longest_streak(&mut self, input: &str) -> Result<(), StorageError> {
        let Ok(value) = input.trim().parse::<u32>() else {
            return Ok(());
        };
        let Some(entry) = self.entry_under_cursor() else {
            return Ok(());
        };
        entry.longest = value;
        self.save()
    }

    pub fn open_prompt(&mut self, mode: Mode) {
        if self.mode == Mode::Idle && mode != Mode::Idle {
            self.mode = mode;
            self.input.clear();
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.mode = Mode::Idle;
        self.input.clear();
    }

    pub fn push_input(&mut self, c: char) {
        if self.mode != Mode::Idle {
            self.input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    pub fn confirm_prompt(&mut self) -> Result<(), StorageError> {
        let input = std::mem::take(&mut self.input);
        let result = match self.mode {
            Mode::Idle => Ok(()),
            Mode::PromptingDate => self.log_specific_date(&input),
            Mode::PromptingCurrentStreak => self.set_manual_current_streak(&input),
            Mode::PromptingLongestStreak => self.set_manual_longest_streak(&input),
        };
        self.mode = Mode::Idle;
        result
    }

    fn entry_under_cursor(&mut self) -> Option<&mut HabitRecord> {
        let name = self.catalog.get(self.cursor)?;
        Some(self.store.entry(name.clone()).or_default())
    }

    fn save(&self) -> Result<(), StorageError> {
        storage::save_store(&self.data_path, &self.store)
    }
}
