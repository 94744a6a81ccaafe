#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod bmi;
mod error;
mod exercise;
mod grocery;
mod meal;
mod nutrition;
mod prescription;
mod profile;
mod saved_plan;
mod service;
mod settings;
mod shuffle;
mod workout;

pub use bmi::{Bmi, BmiCategory};
pub use catalog::Catalog;
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use exercise::{
    Equipment, HIGH_LOAD_NAMES, HIGH_SKILL_NAMES, MuscleGroup, SENIOR_AGE, select_exercises,
};
pub use grocery::GroceryList;
pub use meal::{
    CalorieBalance, DayName, MIN_SLOT_CALORIES, Macros, MealDay, MealPlan, MealPlanError,
    MealPlanService, PlannedMeal, assemble_meal_plan, candidate_pool, generate_meal_plan,
    sample_meal_plan, slot_calorie_target,
};
pub use nutrition::{
    MIN_FAT_LOSS_CALORIES, NutritionError, NutritionInput, NutritionTargets,
    basal_metabolic_rate, calculate_targets,
};
pub use prescription::{OLDER_ADULT_AGE, Prescription, RepRange, RepRangeError};
pub use profile::{
    Age, AgeError, Avoid, BodyFatError, BodyFatPercentage, CountError, DayCount, Diet,
    Experience, Height, HeightError, MealsPerDay, NutritionGoal, Profile, Sex, TrainingGoal,
    Weight, WeightError,
};
pub use saved_plan::{PlanData, PlanKind, SavedPlan, SavedPlanRepository, SavedPlanService};
pub use service::Service;
pub use settings::{Settings, SettingsRepository, SettingsService, Theme};
pub use shuffle::{Random, Shuffle, Unshuffled};
pub use workout::{
    CONDITIONING_BODY_FAT, PrescribedExercise, Split, WorkoutDay, WorkoutPlan, WorkoutService,
    generate_workout_plan,
};
