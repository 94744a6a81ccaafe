use std::collections::BTreeSet;

use log::debug;

use crate::{Profile, Shuffle, catalog};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MuscleGroup {
    Push,
    Pull,
    Legs,
    Core,
    Conditioning,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    Barbell,
    Machines,
    Bands,
    Cables,
    Kettlebell,
}

/// Age from which heavy barbell lifts are left out.
pub const SENIOR_AGE: u32 = 60;

/// Name fragments of lifts excluded from plans of seniors.
pub const HIGH_LOAD_NAMES: [&str; 6] = [
    "bench press",
    "deadlift",
    "romanian deadlift",
    "back squat",
    "squat",
    "overhead press",
];

/// Name fragments of technical lifts excluded from plans of beginners.
pub const HIGH_SKILL_NAMES: [&str; 4] = ["snatch", "clean", "jerk", "pistol"];

/// Pick up to `count` distinct exercises for the given muscle groups.
///
/// An exercise is eligible if it belongs to one of `groups` and can be done
/// with at least one piece of `equipment`. The eligible pool is further
/// narrowed for seniors and beginners before it is shuffled. At least one
/// exercise is requested even if `count` is zero. An empty result is valid
/// and means nothing in the catalog fits.
pub fn select_exercises<'a>(
    exercises: &'a [catalog::Exercise],
    groups: &[MuscleGroup],
    equipment: &BTreeSet<Equipment>,
    count: usize,
    profile: &Profile,
    shuffle: &mut impl Shuffle,
) -> Vec<&'a catalog::Exercise> {
    let senior = profile.age.is_some_and(|age| *age >= SENIOR_AGE);
    let beginner = profile.experience.is_beginner();

    let mut pool = exercises
        .iter()
        .filter(|e| groups.contains(&e.group) && e.equipment.iter().any(|x| equipment.contains(x)))
        .filter(|e| !senior || suits_seniors(e))
        .filter(|e| !beginner || !requires_high_skill(e))
        .collect::<Vec<_>>();

    shuffle.shuffle(&mut pool);
    pool.truncate(count.max(1));

    if pool.is_empty() {
        debug!("no eligible exercises for {groups:?} with {equipment:?}");
    }

    pool
}

fn suits_seniors(exercise: &catalog::Exercise) -> bool {
    let name = exercise.name.to_lowercase();

    if HIGH_LOAD_NAMES.iter().any(|n| name.contains(n)) {
        return false;
    }

    !(exercise.equipment.contains(&Equipment::Barbell)
        && !exercise.equipment.contains(&Equipment::Dumbbells)
        && !exercise.equipment.contains(&Equipment::Machines))
}

fn requires_high_skill(exercise: &catalog::Exercise) -> bool {
    let name = exercise.name.to_lowercase();
    HIGH_SKILL_NAMES.iter().any(|n| name.contains(n))
}
