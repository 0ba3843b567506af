/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents something the
/// user tracks, along with the validation rules enforced when a habit is
/// configured or updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    milestone, DomainError, Frequency, HabitId, HabitKind, HabitStatus, Milestone, Target,
};

/// A habit represents something the user wants to do regularly
///
/// The habit owns its value objects - Frequency, Target, and the milestone
/// sequence have no identity or lifecycle of their own; they are created,
/// replaced, and destroyed with the habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Binary (yes/no) or measurable (quantity against a target)
    pub kind: HabitKind,
    /// Lifecycle status; only changed through explicit updates
    pub status: HabitStatus,
    /// How often this habit should be performed
    pub frequency: Frequency,
    /// Numeric goal a day's logs are measured against (measurable habits)
    pub target: Option<Target>,
    /// Ordered progress checkpoints with strictly ascending targets
    pub milestones: Vec<Milestone>,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// When this habit was last modified
    pub updated_at: Option<DateTime<Utc>>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// This is the main constructor; it enforces every configuration-time
    /// invariant and returns an error if any of them fail.
    pub fn new(
        name: String,
        kind: HabitKind,
        frequency: Frequency,
        target: Option<Target>,
        milestones: Vec<Milestone>,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        frequency.validate()?;
        Self::validate_target(&target, kind)?;
        Self::validate_milestones(&milestones)?;

        Ok(Self {
            id: HabitId::new(),
            name,
            kind,
            status: HabitStatus::Ongoing,
            frequency,
            target,
            milestones,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Update the habit's properties with validation
    ///
    /// Fields passed as `None` are left untouched. The nested option on
    /// `target` distinguishes "leave alone" from "clear the target".
    /// A successful update stamps `updated_at`.
    pub fn update(
        &mut self,
        name: Option<String>,
        status: Option<HabitStatus>,
        frequency: Option<Frequency>,
        target: Option<Option<Target>>,
        milestones: Option<Vec<Milestone>>,
    ) -> Result<(), DomainError> {
        // Validate new values before applying any of them
        if let Some(ref new_name) = name {
            Self::validate_name(new_name)?;
        }
        if let Some(ref new_frequency) = frequency {
            new_frequency.validate()?;
        }
        if let Some(ref new_target) = target {
            Self::validate_target(new_target, self.kind)?;
        }
        if let Some(ref new_milestones) = milestones {
            Self::validate_milestones(new_milestones)?;
        }

        if let Some(new_name) = name {
            self.name = new_name;
        }
        if let Some(new_status) = status {
            self.status = new_status;
        }
        if let Some(new_frequency) = frequency {
            self.frequency = new_frequency;
        }
        if let Some(new_target) = target {
            self.target = new_target;
        }
        if let Some(new_milestones) = milestones {
            self.milestones = new_milestones;
        }

        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Switch between binary and measurable tracking
    ///
    /// The rule layer decides *whether* a change is allowed (only on habits
    /// with no logged history); this method enforces that the existing
    /// target remains admissible for the new kind.
    pub fn change_kind(&mut self, kind: HabitKind) -> Result<(), DomainError> {
        Self::validate_target(&self.target, kind)?;
        self.kind = kind;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Move a named milestone to a new cumulative progress value
    pub fn update_milestone_progress(
        &mut self,
        name: &str,
        new_current: f64,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let milestone = self
            .milestones
            .iter_mut()
            .find(|m| m.name == name)
            .ok_or_else(|| DomainError::InvalidMilestone(format!("No milestone named '{}'", name)))?;
        milestone.update_progress(new_current, now);
        self.updated_at = Some(now);
        Ok(())
    }

    /// Check if this habit has a numeric target
    pub fn has_target(&self) -> bool {
        self.target.is_some()
    }

    /// The first milestone in sequence order that is not yet completed
    pub fn next_milestone(&self) -> Option<&Milestone> {
        self.milestones.iter().find(|m| !m.is_completed)
    }

    // Validation helper methods

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let chars = name.trim().chars().count();

        if chars < 3 {
            return Err(DomainError::InvalidHabitName(
                "Habit name must be at least 3 characters".to_string(),
            ));
        }

        if chars > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate the target unit against the habit kind
    fn validate_target(target: &Option<Target>, kind: HabitKind) -> Result<(), DomainError> {
        if let Some(target) = target {
            if !target.is_valid_for(kind) {
                return Err(DomainError::InvalidTarget(format!(
                    "Unit '{}' is not allowed for {} habits",
                    target.unit,
                    kind.as_str()
                )));
            }
        }
        Ok(())
    }

    /// Validate the milestone sequence: positive targets, strictly ascending
    fn validate_milestones(milestones: &[Milestone]) -> Result<(), DomainError> {
        for m in milestones {
            if m.target <= 0.0 {
                return Err(DomainError::InvalidMilestone(format!(
                    "Milestone '{}' must have a target greater than 0",
                    m.name
                )));
            }
        }
        if !milestone::strictly_ascending_targets(milestones) {
            return Err(DomainError::InvalidMilestone(
                "Milestone targets must be strictly ascending".to_string(),
            ));
        }
        Ok(())
    }
}
