use std::fmt;

use crate::{Experience, Profile, TrainingGoal};

/// Age above which one set is taken off every exercise.
pub const OLDER_ADULT_AGE: u32 = 55;

const MIN_SETS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    pub min: u32,
    pub max: u32,
}

impl RepRange {
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl TryFrom<&str> for RepRange {
    type Error = RepRangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (min, max) = value.split_once('-').ok_or(RepRangeError::ParseError)?;
        let min = min.trim().parse::<u32>().map_err(|_| RepRangeError::ParseError)?;
        let max = max.trim().parse::<u32>().map_err(|_| RepRangeError::ParseError)?;

        if min > max {
            return Err(RepRangeError::Inverted);
        }

        Ok(Self { min, max })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepRangeError {
    #[error("Rep range must have the form \"min-max\"")]
    ParseError,
    #[error("Rep range minimum must not exceed maximum")]
    Inverted,
}

/// Sets and rep range stamped onto every exercise of a workout plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub sets: u32,
    pub reps: RepRange,
}

impl Prescription {
    #[must_use]
    pub const fn base(goal: TrainingGoal, experience: Experience) -> Self {
        let beginner = matches!(experience, Experience::Beginner);
        let (sets, reps) = match (goal, beginner) {
            (TrainingGoal::Strength, true) => (3, RepRange::new(4, 6)),
            (TrainingGoal::Strength, false) => (4, RepRange::new(3, 5)),
            (TrainingGoal::Hypertrophy, true) => (3, RepRange::new(8, 12)),
            (TrainingGoal::Hypertrophy, false) => (4, RepRange::new(8, 12)),
            (TrainingGoal::Conditioning, true) => (3, RepRange::new(10, 15)),
            (TrainingGoal::Conditioning, false) => (4, RepRange::new(12, 20)),
        };
        Self { sets, reps }
    }

    #[must_use]
    pub fn for_profile(profile: &Profile) -> Self {
        let mut prescription = Self::base(profile.training_goal, profile.experience);

        if profile.age.is_some_and(|age| *age > OLDER_ADULT_AGE) {
            prescription.sets = prescription.sets.saturating_sub(1).max(MIN_SETS);
        }

        prescription
    }
}
