//! Scoring module - score and pacing rules
//!
//! Two policies are supported (see [`PacingPolicy`]):
//! - **Flat**: +100 per line. Each time the running line total crosses a
//!   multiple of 10 the level rises and the tick interval drops by 50ms,
//!   never below 50ms.
//! - **Weighted**: 100/300/500/800 for 1-4 lines plus a time bonus for quick
//!   placement. Every clear drops the tick interval by 10ms, never below 100ms.
//!
//! Both policies leave score and interval untouched when no line was cleared.

use crate::types::{
    PacingPolicy, FLAT_INTERVAL_STEP_MS, FLAT_POINTS_PER_LINE, LINES_PER_LEVEL,
    TIME_BONUS_FASTEST_MS, TIME_BONUS_MIN, TIME_BONUS_SCALE, WEIGHTED_INTERVAL_STEP_MS,
    WEIGHTED_LINE_SCORES,
};

/// Outcome of feeding one lock to the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points for the cleared lines alone.
    pub line_score: u32,
    /// Fast-placement bonus (weighted policy only).
    pub time_bonus: u32,
    pub total: u32,
    /// Tick interval to use from now on.
    pub interval_ms: u32,
    pub level: u32,
}

/// Line points under the flat policy
pub fn flat_line_score(lines: u32) -> u32 {
    FLAT_POINTS_PER_LINE.saturating_mul(lines)
}

/// Line points under the weighted policy
/// Clears above 4 lines score like a 4-line clear.
pub fn weighted_line_score(lines: u32) -> u32 {
    let idx = (lines as usize).min(WEIGHTED_LINE_SCORES.len() - 1);
    WEIGHTED_LINE_SCORES[idx]
}

/// Bonus for placing a piece `elapsed_ms` after it spawned
///
/// Inversely proportional to the placement time, floored at
/// [`TIME_BONUS_MIN`]. Placements faster than [`TIME_BONUS_FASTEST_MS`] earn
/// the same as one at exactly that time.
pub fn time_bonus(elapsed_ms: u32) -> u32 {
    (TIME_BONUS_SCALE / elapsed_ms.max(TIME_BONUS_FASTEST_MS)).max(TIME_BONUS_MIN)
}

/// Level management
/// Level starts at 1 and increases every 10 lines cleared
pub fn level_for_lines(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Shrink `interval_ms` by `steps * step_ms`, clamped at `floor_ms`
///
/// The result never exceeds the input, so an interval configured below the
/// floor stays where it is.
pub fn shrink_interval(interval_ms: u32, steps: u32, step_ms: u32, floor_ms: u32) -> u32 {
    if steps == 0 {
        return interval_ms;
    }
    interval_ms
        .saturating_sub(step_ms.saturating_mul(steps))
        .max(floor_ms)
        .min(interval_ms)
}

/// Session-scoped score, line and speed state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pacer {
    policy: PacingPolicy,
    score: u32,
    lines: u32,
    level: u32,
    interval_ms: u32,
}

impl Pacer {
    pub fn new(policy: PacingPolicy, initial_interval_ms: u32) -> Self {
        Self {
            policy,
            score: 0,
            lines: 0,
            level: level_for_lines(0),
            interval_ms: initial_interval_ms.max(1),
        }
    }

    pub fn policy(&self) -> PacingPolicy {
        self.policy
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Account for one lock that cleared `lines_cleared` rows
    ///
    /// `elapsed_ms` is the time between the piece spawning and locking; only
    /// the weighted policy reads it.
    pub fn apply(&mut self, lines_cleared: u32, elapsed_ms: u32) -> ScoreResult {
        if lines_cleared == 0 {
            return ScoreResult {
                interval_ms: self.interval_ms,
                level: self.level,
                ..ScoreResult::default()
            };
        }

        let before = self.lines;
        self.lines = self.lines.saturating_add(lines_cleared);
        self.level = level_for_lines(self.lines);

        let (line_score, bonus) = match self.policy {
            PacingPolicy::Flat => {
                let crossings = self.lines / LINES_PER_LEVEL - before / LINES_PER_LEVEL;
                self.interval_ms = shrink_interval(
                    self.interval_ms,
                    crossings,
                    FLAT_INTERVAL_STEP_MS,
                    self.policy.min_interval_ms(),
                );
                (flat_line_score(lines_cleared), 0)
            }
            PacingPolicy::Weighted => {
                self.interval_ms = shrink_interval(
                    self.interval_ms,
                    1,
                    WEIGHTED_INTERVAL_STEP_MS,
                    self.policy.min_interval_ms(),
                );
                (weighted_line_score(lines_cleared), time_bonus(elapsed_ms))
            }
        };

        let total = line_score.saturating_add(bonus);
        self.score = self.score.saturating_add(total);

        ScoreResult {
            line_score,
            time_bonus: bonus,
            total,
            interval_ms: self.interval_ms,
            level: self.level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_line_scores() {
        assert_eq!(flat_line_score(0), 0);
        assert_eq!(flat_line_score(1), 100);
        assert_eq!(flat_line_score(4), 400);
    }

    #[test]
    fn test_weighted_line_scores() {
        assert_eq!(weighted_line_score(0), 0);
        assert_eq!(weighted_line_score(1), 100);
        assert_eq!(weighted_line_score(2), 300);
        assert_eq!(weighted_line_score(3), 500);
        assert_eq!(weighted_line_score(4), 800);
        assert_eq!(weighted_line_score(6), 800);
    }

    #[test]
    fn test_time_bonus() {
        assert_eq!(time_bonus(1_000), 100);
        assert_eq!(time_bonus(500), 200);
        assert_eq!(time_bonus(0), 1_000);
        assert_eq!(time_bonus(50), 1_000);
        assert_eq!(time_bonus(60_000), TIME_BONUS_MIN);
        assert!(time_bonus(400) > time_bonus(800));
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
    }

    #[test]
    fn test_shrink_interval() {
        assert_eq!(shrink_interval(500, 0, 50, 50), 500);
        assert_eq!(shrink_interval(500, 1, 50, 50), 450);
        assert_eq!(shrink_interval(80, 1, 50, 50), 50);
        assert_eq!(shrink_interval(30, 1, 50, 50), 30);
    }

    #[test]
    fn test_zero_lines_changes_nothing() {
        for policy in [PacingPolicy::Flat, PacingPolicy::Weighted] {
            let mut pacer = Pacer::new(policy, 500);
            let result = pacer.apply(0, 10);
            assert_eq!(result.total, 0);
            assert_eq!(result.interval_ms, 500);
            assert_eq!(pacer.score(), 0);
            assert_eq!(pacer.lines(), 0);
            assert_eq!(pacer.level(), 1);
        }
    }

    #[test]
    fn test_flat_levels_up_every_ten_lines() {
        let mut pacer = Pacer::new(PacingPolicy::Flat, 500);
        for _ in 0..9 {
            pacer.apply(1, 0);
        }
        assert_eq!(pacer.level(), 1);
        assert_eq!(pacer.interval_ms(), 500);

        let result = pacer.apply(1, 0);
        assert_eq!(result.total, 100);
        assert_eq!(result.level, 2);
        assert_eq!(result.interval_ms, 450);
        assert_eq!(pacer.score(), 1_000);
    }

    #[test]
    fn test_flat_multi_line_clear_crossing_boundary() {
        let mut pacer = Pacer::new(PacingPolicy::Flat, 500);
        pacer.apply(4, 0);
        pacer.apply(4, 0);
        let result = pacer.apply(4, 0); // 8 -> 12 lines
        assert_eq!(result.total, 400);
        assert_eq!(result.level, 2);
        assert_eq!(result.interval_ms, 450);
    }

    #[test]
    fn test_flat_interval_floor() {
        let mut pacer = Pacer::new(PacingPolicy::Flat, 500);
        for _ in 0..200 {
            pacer.apply(1, 0);
        }
        assert_eq!(pacer.interval_ms(), 50);
        assert_eq!(pacer.level(), 21);
    }

    #[test]
    fn test_weighted_speeds_up_on_every_clear() {
        let mut pacer = Pacer::new(PacingPolicy::Weighted, 500);
        let result = pacer.apply(2, 1_000);
        assert_eq!(result.line_score, 300);
        assert_eq!(result.time_bonus, 100);
        assert_eq!(result.total, 400);
        assert_eq!(result.interval_ms, 490);
        assert_eq!(pacer.score(), 400);
    }

    #[test]
    fn test_weighted_interval_floor() {
        let mut pacer = Pacer::new(PacingPolicy::Weighted, 500);
        for _ in 0..100 {
            pacer.apply(1, 1_000);
        }
        assert_eq!(pacer.interval_ms(), 100);
    }
}
