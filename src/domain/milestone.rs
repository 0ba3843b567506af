/// Milestone value object: a named progress checkpoint
///
/// Milestones track cumulative progress toward their own target,
/// independent of the habit's day-to-day Target. Completion follows the
/// live value: crossing the target stamps `completed_at`, regressing back
/// below it clears the stamp again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Display name (e.g., "First 100 km")
    pub name: String,
    /// Amount of cumulative progress that completes this milestone
    pub target: f64,
    /// Progress accumulated so far, never negative
    pub current: f64,
    /// Whether `current` has reached `target`
    pub is_completed: bool,
    /// When the target was first crossed; cleared if progress regresses
    pub completed_at: Option<DateTime<Utc>>,
}

impl Milestone {
    /// Create a fresh milestone with no progress
    pub fn new(name: String, target: f64) -> Self {
        Self {
            name,
            target,
            current: 0.0,
            is_completed: false,
            completed_at: None,
        }
    }

    /// Move the milestone to a new progress value
    ///
    /// The value is clamped at zero. Completion tracks the live value:
    /// the first crossing of `target` stamps `completed_at = now`, and a
    /// later regression below `target` un-completes the milestone and
    /// clears the stamp. Callers needing "permanently achieved" semantics
    /// must snapshot the completion elsewhere.
    pub fn update_progress(&mut self, new_current: f64, now: DateTime<Utc>) {
        self.current = new_current.max(0.0);

        if !self.is_completed && self.current >= self.target {
            self.is_completed = true;
            self.completed_at = Some(now);
        } else if self.is_completed && self.current < self.target {
            self.is_completed = false;
            self.completed_at = None;
        }
    }

    /// Percentage of the way to `target`, in [0, 100]
    ///
    /// A non-positive target yields 0 rather than a division error.
    pub fn progress_percentage(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.current / self.target * 100.0).min(100.0)
    }
}

/// Check that a milestone sequence has strictly ascending targets
///
/// Sequences of zero or one milestone are trivially valid. Duplicated
/// targets are rejected. Checked when a habit is configured, not
/// continuously enforced afterward.
pub(crate) fn strictly_ascending_targets(milestones: &[Milestone]) -> bool {
    if milestones.len() <= 1 {
        return true;
    }
    let mut targets: Vec<f64> = milestones.iter().map(|m| m.target).collect();
    targets.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    targets.windows(2).all(|pair| pair[1] > pair[0])
}
