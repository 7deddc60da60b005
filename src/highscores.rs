//! Session statistics for the headless runner
//!
//! Watches the simulation from the outside, notices when a run ends and keeps
//! the best finished runs in memory. Nothing is written to disk.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

/// Maximum number of runs kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

/// One run, finished or in progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunEntry {
    /// 1-based run number within the session
    pub run: u32,
    pub score: u32,
    /// Frames survived
    pub frames: u32,
}

impl RunEntry {
    fn from_state(state: &GameState) -> Self {
        Self {
            run: state.runs,
            score: state.score,
            frames: state.game_start_ticks,
        }
    }
}

/// Best finished runs of this session, highest score first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunHistory {
    pub entries: Vec<RunEntry>,
    /// Runs that ended in a game over, board or not
    pub total_runs: u32,
    /// Sum of scores over all finished runs
    pub total_score: u64,
    /// Sum of frames survived over all finished runs
    pub total_frames: u64,
    #[serde(skip)]
    last_phase: GamePhase,
}

/// End-of-session report
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub high_score: u32,
    pub finished_runs: u32,
    pub mean_score: f32,
    pub board: Vec<RunEntry>,
    /// The run cut short by the frame budget, if any
    pub unfinished: Option<RunEntry>,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board position a finished score would take (0-based), or None
    pub fn slot_for(&self, score: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        // Equal scores go behind earlier runs
        let slot = self.entries.partition_point(|e| e.score >= score);
        (slot < MAX_HIGH_SCORES).then_some(slot)
    }

    /// Feed the state after every tick; returns the run that just ended
    pub fn observe(&mut self, state: &GameState) -> Option<(RunEntry, Option<usize>)> {
        let ended = state.phase == GamePhase::GameOver && self.last_phase != GamePhase::GameOver;
        self.last_phase = state.phase;
        if !ended {
            return None;
        }
        let entry = RunEntry::from_state(state);
        let rank = self.record(entry.clone());
        Some((entry, rank))
    }

    /// Count a finished run and place it on the board
    /// Returns the rank achieved (1-indexed) or None if it didn't make the board
    pub fn record(&mut self, entry: RunEntry) -> Option<usize> {
        self.total_runs += 1;
        self.total_score += u64::from(entry.score);
        self.total_frames += u64::from(entry.frames);

        let slot = self.slot_for(entry.score)?;
        self.entries.insert(slot, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    pub fn mean_score(&self) -> f32 {
        if self.total_runs == 0 {
            0.0
        } else {
            self.total_score as f32 / self.total_runs as f32
        }
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Wrap up the session; a run still going is reported but not counted
    pub fn summary(&self, state: &GameState) -> SessionSummary {
        SessionSummary {
            seed: state.seed,
            high_score: state.high_score,
            finished_runs: self.total_runs,
            mean_score: self.mean_score(),
            board: self.entries.clone(),
            unfinished: (state.phase == GamePhase::Running).then(|| RunEntry::from_state(state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(run: u32, score: u32) -> RunEntry {
        RunEntry {
            run,
            score,
            frames: score * 6 + 60,
        }
    }

    #[test]
    fn test_zero_scores_counted_but_not_ranked() {
        let mut history = RunHistory::new();
        assert_eq!(history.record(entry(1, 0)), None);
        assert!(history.entries.is_empty());
        assert_eq!(history.total_runs, 1);
        assert_eq!(history.total_frames, 60);
    }

    #[test]
    fn test_board_sorted_ties_keep_earlier_run_first() {
        let mut history = RunHistory::new();
        assert_eq!(history.record(entry(1, 10)), Some(1));
        assert_eq!(history.record(entry(2, 30)), Some(1));
        assert_eq!(history.record(entry(3, 20)), Some(2));
        assert_eq!(history.record(entry(4, 20)), Some(3));
        let runs: Vec<u32> = history.entries.iter().map(|e| e.run).collect();
        assert_eq!(runs, vec![2, 3, 4, 1]);
        assert_eq!(history.top_score(), Some(30));
        assert_eq!(history.mean_score(), 20.0);
    }

    #[test]
    fn test_board_is_capped() {
        let mut history = RunHistory::new();
        for run in 1..=15 {
            history.record(entry(run, run * 5));
        }
        assert_eq!(history.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(history.top_score(), Some(75));
        assert_eq!(history.slot_for(30), None);
        assert_eq!(history.slot_for(31), Some(9));
        assert_eq!(history.total_runs, 15);
    }

    #[test]
    fn test_observe_records_each_game_over_once() {
        let mut state = GameState::new(2);
        let mut history = RunHistory::new();
        assert!(history.observe(&state).is_none());

        state.score = 12;
        state.game_start_ticks = 150;
        state.phase = GamePhase::GameOver;
        let (ended, rank) = history.observe(&state).expect("run ended");
        assert_eq!(ended, RunEntry { run: 1, score: 12, frames: 150 });
        assert_eq!(rank, Some(1));

        // Still game over on the next frame: not a new run
        assert!(history.observe(&state).is_none());
        assert_eq!(history.total_runs, 1);

        state.restart();
        assert!(history.observe(&state).is_none());
        state.phase = GamePhase::GameOver;
        let (ended, rank) = history.observe(&state).expect("second run ended");
        assert_eq!(ended.run, 2);
        assert_eq!(rank, None);
        assert_eq!(history.total_runs, 2);
    }

    #[test]
    fn test_summary_keeps_unfinished_run_apart() {
        let mut state = GameState::new(2);
        let mut history = RunHistory::new();
        state.score = 8;
        state.high_score = 8;
        state.phase = GamePhase::GameOver;
        history.observe(&state);
        state.restart();
        state.score = 3;
        state.game_start_ticks = 90;

        let summary = history.summary(&state);
        assert_eq!(summary.finished_runs, 1);
        assert_eq!(summary.board.len(), 1);
        assert_eq!(summary.unfinished, Some(RunEntry { run: 2, score: 3, frames: 90 }));
        assert_eq!(summary.high_score, 8);
        assert_eq!(history.total_runs, 1);
    }
}
