use std::collections::VecDeque;

use crate::config::{
    DEFAULT_TICK_INTERVAL_MS, DIFFICULTY_AVERAGE_RATIO, DIFFICULTY_HISTORY_LEN,
    LEVEL_UP_SCORE_STEP, MIN_TICK_INTERVAL_MS, TICK_INTERVAL_STEP_MS,
};

/// Snapshot of player performance taken when food is eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PerformanceSample {
    pub score: u32,
    pub snake_length: usize,
    /// Logical session time in milliseconds.
    pub timestamp_ms: u64,
}

/// Result of a speed-up decision.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LevelUp {
    pub level: u32,
    pub tick_interval_ms: u64,
}

/// Rolling performance history driving tick interval and level.
#[derive(Debug, Clone)]
pub struct DifficultyAdapter {
    history: VecDeque<PerformanceSample>,
    tick_interval_ms: u64,
    level: u32,
}

impl Default for DifficultyAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DifficultyAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(DIFFICULTY_HISTORY_LEN),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            level: 1,
        }
    }

    /// Records one food-eaten sample and speeds the game up when recent
    /// play has been strong.
    ///
    /// Evaluation happens only when `sample.score` is a positive multiple of
    /// the level-up step: if the mean score over retained history exceeds
    /// 80% of the current score, the tick interval shrinks (down to the
    /// floor) and the level increments.
    pub fn record(&mut self, sample: PerformanceSample) -> Option<LevelUp> {
        self.history.push_back(sample);
        while self.history.len() > DIFFICULTY_HISTORY_LEN {
            let _ = self.history.pop_front();
        }

        let score = sample.score;
        if score == 0 || score % LEVEL_UP_SCORE_STEP != 0 {
            return None;
        }

        if self.average_score() <= f64::from(score) * DIFFICULTY_AVERAGE_RATIO {
            return None;
        }

        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(TICK_INTERVAL_STEP_MS)
            .max(MIN_TICK_INTERVAL_MS);
        self.level += 1;

        Some(LevelUp {
            level: self.level,
            tick_interval_ms: self.tick_interval_ms,
        })
    }

    /// Mean score across retained samples, 0 when empty.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }

        let total: f64 = self.history.iter().map(|sample| f64::from(sample.score)).sum();
        total / self.history.len() as f64
    }

    #[must_use]
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn history(&self) -> impl Iterator<Item = &PerformanceSample> {
        self.history.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{DIFFICULTY_HISTORY_LEN, MIN_TICK_INTERVAL_MS};

    use super::{DifficultyAdapter, LevelUp, PerformanceSample};

    fn sample(score: u32) -> PerformanceSample {
        PerformanceSample {
            score,
            snake_length: 1 + (score / 10) as usize,
            timestamp_ms: u64::from(score) * 100,
        }
    }

    #[test]
    fn history_keeps_most_recent_samples() {
        let mut adapter = DifficultyAdapter::new();

        for score in 1..=25 {
            let _ = adapter.record(sample(score));
        }

        let scores: Vec<_> = adapter.history().map(|sample| sample.score).collect();
        assert_eq!(scores.len(), DIFFICULTY_HISTORY_LEN);
        assert_eq!(scores.first(), Some(&16));
        assert_eq!(scores.last(), Some(&25));
    }

    #[test]
    fn strong_average_at_fifty_speeds_up() {
        let mut adapter = DifficultyAdapter::new();
        for _ in 0..4 {
            let _ = adapter.record(sample(45));
        }

        // Average of [45, 45, 45, 45, 50] is 46 > 40.
        let change = adapter.record(sample(50));

        assert_eq!(
            change,
            Some(LevelUp {
                level: 2,
                tick_interval_ms: 140,
            })
        );
        assert_eq!(adapter.tick_interval_ms(), 140);
        assert_eq!(adapter.level(), 2);
    }

    #[test]
    fn weak_average_at_fifty_changes_nothing() {
        let mut adapter = DifficultyAdapter::new();
        for score in [10, 20, 30, 40] {
            let _ = adapter.record(sample(score));
        }

        // Average of 10..=50 is 30, below 40.
        assert_eq!(adapter.record(sample(50)), None);
        assert_eq!(adapter.tick_interval_ms(), 150);
        assert_eq!(adapter.level(), 1);
    }

    #[test]
    fn scores_off_the_step_are_not_evaluated() {
        let mut adapter = DifficultyAdapter::new();
        for _ in 0..10 {
            let _ = adapter.record(sample(60));
        }

        assert_eq!(adapter.level(), 1);
        assert_eq!(adapter.tick_interval_ms(), 150);
    }

    #[test]
    fn zero_score_is_not_a_multiple() {
        let mut adapter = DifficultyAdapter::new();

        assert_eq!(adapter.record(sample(0)), None);
    }

    #[test]
    fn tick_interval_never_drops_below_floor() {
        let mut adapter = DifficultyAdapter::new();

        for _ in 0..50 {
            let _ = adapter.record(sample(100));
        }

        assert_eq!(adapter.tick_interval_ms(), MIN_TICK_INTERVAL_MS);
        // Level keeps counting even once the floor is reached.
        assert_eq!(adapter.level(), 51);
    }
}
