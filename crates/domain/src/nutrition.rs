use log::debug;

use crate::{Age, BodyFatPercentage, Height, NutritionGoal, Profile, Sex, Weight};

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Lowest calorie target a fat loss plan may prescribe.
pub const MIN_FAT_LOSS_CALORIES: u32 = 1200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionInput {
    pub weight: Weight,
    pub height: Height,
    pub age: Option<Age>,
    pub sex: Sex,
    pub body_fat: Option<BodyFatPercentage>,
    pub goal: NutritionGoal,
}

impl From<&Profile> for NutritionInput {
    fn from(profile: &Profile) -> Self {
        Self {
            weight: profile.weight,
            height: profile.height,
            age: profile.age,
            sex: profile.sex,
            body_fat: profile.body_fat,
            goal: profile.nutrition_goal,
        }
    }
}

/// Daily calorie and macronutrient goals, macros in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NutritionTargets {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NutritionError {
    #[error("Age is required when body fat is unknown")]
    MissingAge,
}

impl NutritionGoal {
    #[must_use]
    pub fn activity_factor(self) -> f64 {
        match self {
            NutritionGoal::Muscle => 1.35,
            NutritionGoal::FatLoss => 1.15,
            NutritionGoal::Maintain => 1.2,
        }
    }

    #[must_use]
    pub fn calorie_target(self, maintenance: u32) -> u32 {
        match self {
            NutritionGoal::Muscle => maintenance + 300,
            NutritionGoal::FatLoss => maintenance.saturating_sub(500).max(MIN_FAT_LOSS_CALORIES),
            NutritionGoal::Maintain => maintenance,
        }
    }

    /// Protein in grams per kilogram of body weight.
    #[must_use]
    pub fn protein_per_kg(self) -> f64 {
        match self {
            NutritionGoal::Muscle => 2.0,
            NutritionGoal::FatLoss => 2.2,
            NutritionGoal::Maintain => 1.8,
        }
    }

    /// Share of the calorie target covered by fat.
    #[must_use]
    pub fn fat_share(self) -> f64 {
        match self {
            NutritionGoal::Muscle => 0.25,
            NutritionGoal::FatLoss => 0.22,
            NutritionGoal::Maintain => 0.28,
        }
    }
}

/// Estimate the basal metabolic rate in kcal per day.
///
/// The lean mass formula is used if the body fat percentage is known,
/// otherwise the age and sex based formula, which needs the age.
pub fn basal_metabolic_rate(input: &NutritionInput) -> Result<u32, NutritionError> {
    let weight = f64::from(f32::from(input.weight));

    if let Some(body_fat) = input.body_fat {
        let lean_mass = weight * (1.0 - f64::from(f32::from(body_fat)) / 100.0);
        return Ok(round_half_up(370.0 + 21.6 * lean_mass));
    }

    let age = input.age.ok_or(NutritionError::MissingAge)?;
    let height = f64::from(f32::from(input.height));
    let sex_offset = match input.sex {
        Sex::MALE => 5.0,
        Sex::FEMALE => -161.0,
    };

    Ok(round_half_up(
        10.0 * weight + 6.25 * height - 5.0 * f64::from(*age) + sex_offset,
    ))
}

pub fn calculate_targets(input: &NutritionInput) -> Result<NutritionTargets, NutritionError> {
    let goal = input.goal;
    let bmr = basal_metabolic_rate(input)?;
    let maintenance = round_half_up(f64::from(bmr) * goal.activity_factor());
    let calories = goal.calorie_target(maintenance);

    let protein = round_half_up(goal.protein_per_kg() * f64::from(f32::from(input.weight)));
    let fat = round_half_up(f64::from(calories) * goal.fat_share() / KCAL_PER_GRAM_FAT);
    let carbs = round_half_up(
        (f64::from(calories)
            - f64::from(protein) * KCAL_PER_GRAM_PROTEIN
            - f64::from(fat) * KCAL_PER_GRAM_FAT)
            / KCAL_PER_GRAM_CARBS,
    );

    debug!("bmr {bmr} kcal, maintenance {maintenance} kcal, target {calories} kcal");

    Ok(NutritionTargets {
        calories,
        protein,
        carbs,
        fat,
    })
}

/// Round to the nearest integer with halves going up, saturating at zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn round_half_up(value: f64) -> u32 {
    (value + 0.5).floor().clamp(0.0, f64::from(u32::MAX)) as u32
}
