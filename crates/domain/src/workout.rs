use std::collections::BTreeSet;

use log::debug;

use crate::{
    Catalog, DayCount, Equipment, MuscleGroup, Prescription, Profile, RepRange, Shuffle,
    catalog, select_exercises,
};

/// Body fat percentage above which short weeks get an extra conditioning day.
pub const CONDITIONING_BODY_FAT: f32 = 28.0;

/// Weeks with fewer training days than this can get an extra conditioning day.
const CONDITIONING_MAX_DAYS: u32 = 5;

/// Marks kept literal in demo search queries.
const QUERY_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

const FIVE_DAY_TEMPLATE: [Split; 5] = [
    Split::Push,
    Split::Pull,
    Split::Legs,
    Split::FullBody,
    Split::Conditioning,
];

pub trait WorkoutService {
    fn generate_workout_plan(&self, profile: &Profile) -> WorkoutPlan;
    fn sample_workout_plan(&self) -> WorkoutPlan;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    /// Days for which no exercise could be found.
    pub fn empty_days(&self) -> impl Iterator<Item = &WorkoutDay> {
        self.days.iter().filter(|d| d.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDay {
    pub number: u32,
    pub split: Split,
    pub exercises: Vec<PrescribedExercise>,
}

impl WorkoutDay {
    #[must_use]
    pub fn label(&self) -> String {
        format!("Day {} — {}", self.number, self.split)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrescribedExercise {
    pub name: String,
    pub group: MuscleGroup,
    pub sets: u32,
    pub reps: RepRange,
}

impl PrescribedExercise {
    #[must_use]
    pub fn new(exercise: &catalog::Exercise, prescription: Prescription) -> Self {
        Self {
            name: exercise.name.to_string(),
            group: exercise.group,
            sets: prescription.sets,
            reps: prescription.reps,
        }
    }

    /// Video search for a demonstration of the exercise.
    #[must_use]
    pub fn demo_url(&self) -> String {
        format!(
            "https://www.youtube.com/results?search_query={}",
            encode_query(&format!("{} exercise", self.name))
        )
    }
}

fn encode_query(query: &str) -> String {
    QUERY_MARKS
        .iter()
        .fold(urlencoding::encode(query).into_owned(), |encoded, (code, mark)| {
            encoded.replace(code, mark)
        })
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum::Display, strum::EnumString)]
pub enum Split {
    #[strum(serialize = "Full Body")]
    FullBody,
    Upper,
    Lower,
    Push,
    Pull,
    Legs,
    Conditioning,
}

impl Split {
    #[must_use]
    pub fn groups(self) -> &'static [MuscleGroup] {
        match self {
            Split::FullBody => &[MuscleGroup::Push, MuscleGroup::Pull, MuscleGroup::Legs],
            Split::Upper => &[MuscleGroup::Push, MuscleGroup::Pull, MuscleGroup::Core],
            Split::Lower => &[MuscleGroup::Legs, MuscleGroup::Core],
            Split::Push => &[MuscleGroup::Push],
            Split::Pull => &[MuscleGroup::Pull],
            Split::Legs => &[MuscleGroup::Legs],
            Split::Conditioning => &[MuscleGroup::Conditioning],
        }
    }

    #[must_use]
    pub fn exercise_count(self) -> usize {
        match self {
            Split::Lower | Split::Conditioning => 4,
            Split::FullBody | Split::Upper | Split::Push | Split::Pull | Split::Legs => 5,
        }
    }

    /// Day-by-day split for a week with the given number of training days.
    #[must_use]
    pub fn schedule(days: DayCount) -> Vec<Split> {
        let days = *days as usize;
        match days {
            0..=3 => vec![Split::FullBody; days],
            4 => vec![Split::Upper, Split::Lower, Split::Upper, Split::Lower],
            _ => FIVE_DAY_TEMPLATE.iter().copied().cycle().take(days).collect(),
        }
    }
}

/// Compose a workout plan for `profile` from the exercises in `catalog`.
///
/// Every exercise gets the same sets and rep range. Without any selected
/// equipment, bodyweight exercises are used. Days for which no eligible
/// exercise exists are kept with an empty roster.
pub fn generate_workout_plan(
    profile: &Profile,
    catalog: &Catalog,
    shuffle: &mut impl Shuffle,
) -> WorkoutPlan {
    let prescription = Prescription::for_profile(profile);
    let equipment = if profile.equipment.is_empty() {
        BTreeSet::from([Equipment::Bodyweight])
    } else {
        profile.equipment.clone()
    };
    let mut splits = Split::schedule(profile.days);

    if needs_extra_conditioning(profile) {
        debug!("adding conditioning day for body fat above {CONDITIONING_BODY_FAT} %");
        splits.push(Split::Conditioning);
    }

    let days = splits
        .into_iter()
        .zip(1..)
        .map(|(split, number)| WorkoutDay {
            number,
            split,
            exercises: select_exercises(
                catalog.exercises,
                split.groups(),
                &equipment,
                split.exercise_count(),
                profile,
                shuffle,
            )
            .into_iter()
            .map(|e| PrescribedExercise::new(e, prescription))
            .collect(),
        })
        .collect();

    WorkoutPlan { days }
}

fn needs_extra_conditioning(profile: &Profile) -> bool {
    *profile.days < CONDITIONING_MAX_DAYS
        && profile
            .body_fat
            .is_some_and(|bf| f32::from(bf) > CONDITIONING_BODY_FAT)
}
