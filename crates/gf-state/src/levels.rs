//! Linear level progression

use serde::{Deserialize, Serialize};

use gf_core::{GfError, GfResult};

/// Number of levels in the standard campaign
pub const STANDARD_LEVEL_COUNT: u32 = 5;

/// Display status of one level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    /// Already played
    Completed,
    /// Unlocked and playable
    Current,
    /// Not yet reachable
    Locked,
}

/// Progress through a linear level list
///
/// Levels are 1-based. Only the current level is playable; everything
/// before it is completed, everything after it is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    current: u32,
    total: u32,
}

impl LevelProgress {
    /// Start at level 1 of a campaign
    pub fn new(total: u32) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    /// Standard campaign (5 levels)
    pub fn standard() -> Self {
        Self::new(STANDARD_LEVEL_COUNT)
    }

    /// Current level
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Total level count
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Is a level reachable?
    pub fn is_unlocked(&self, level: u32) -> bool {
        level >= 1 && level <= self.current
    }

    /// Status of a level
    pub fn status(&self, level: u32) -> LevelStatus {
        if level < self.current {
            LevelStatus::Completed
        } else if level == self.current {
            LevelStatus::Current
        } else {
            LevelStatus::Locked
        }
    }

    /// Play a level; only the current one is playable
    ///
    /// Completing the current level unlocks the next. Returns the new
    /// current level; completing the final level leaves progress there.
    pub fn play(&mut self, level: u32) -> GfResult<u32> {
        if level != self.current {
            return Err(GfError::State(format!(
                "level {} is not playable (current is {})",
                level, self.current
            )));
        }
        self.current = (self.current + 1).min(self.total);
        Ok(self.current)
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_progress() {
        let levels = LevelProgress::standard();
        assert_eq!(levels.current(), 1);
        assert_eq!(levels.total(), 5);
        assert_eq!(levels.status(1), LevelStatus::Current);
        assert_eq!(levels.status(2), LevelStatus::Locked);
        assert!(levels.is_unlocked(1));
        assert!(!levels.is_unlocked(2));
    }

    #[test]
    fn test_play_advances_only_current() {
        let mut levels = LevelProgress::standard();
        assert!(levels.play(3).is_err());
        assert_eq!(levels.play(1).unwrap(), 2);
        assert_eq!(levels.status(1), LevelStatus::Completed);
        assert_eq!(levels.status(2), LevelStatus::Current);
        // A completed level cannot be replayed for progress.
        assert!(levels.play(1).is_err());
    }

    #[test]
    fn test_final_level_saturates() {
        let mut levels = LevelProgress::new(2);
        levels.play(1).unwrap();
        assert_eq!(levels.play(2).unwrap(), 2);
        assert_eq!(levels.current(), 2);
        assert_eq!(levels.status(2), LevelStatus::Current);
    }
}
