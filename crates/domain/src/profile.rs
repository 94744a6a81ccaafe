use std::{collections::BTreeSet, fmt};

use derive_more::{Deref, Display, Into};

use crate::Equipment;

/// Everything the engine knows about the person a plan is generated for.
///
/// Workout and nutrition generation read different subsets of these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub training_goal: TrainingGoal,
    pub nutrition_goal: NutritionGoal,
    pub experience: Experience,
    pub age: Option<Age>,
    pub sex: Sex,
    pub weight: Weight,
    pub height: Height,
    pub body_fat: Option<BodyFatPercentage>,
    pub equipment: BTreeSet<Equipment>,
    pub diet: Diet,
    pub avoid: Avoid,
    pub days: DayCount,
    pub meals_per_day: MealsPerDay,
}

impl Profile {
    /// Profile behind the sample workout: a four day hypertrophy routine for a
    /// beginner training at home with dumbbells.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            training_goal: TrainingGoal::Hypertrophy,
            experience: Experience::Beginner,
            days: DayCount(4),
            equipment: BTreeSet::from([Equipment::Dumbbells, Equipment::Bodyweight]),
            ..Self::default()
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            training_goal: TrainingGoal::Hypertrophy,
            nutrition_goal: NutritionGoal::Maintain,
            experience: Experience::Beginner,
            age: None,
            sex: Sex::MALE,
            weight: Weight(70.0),
            height: Height(175.0),
            body_fat: None,
            equipment: BTreeSet::from([Equipment::Bodyweight]),
            diet: Diet::Omnivore,
            avoid: Avoid::default(),
            days: DayCount::default(),
            meals_per_day: MealsPerDay::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TrainingGoal {
    Strength,
    Hypertrophy,
    Conditioning,
}

impl From<&str> for TrainingGoal {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "strength" => TrainingGoal::Strength,
            "hypertrophy" => TrainingGoal::Hypertrophy,
            _ => TrainingGoal::Conditioning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NutritionGoal {
    Muscle,
    FatLoss,
    Maintain,
}

impl From<&str> for NutritionGoal {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "muscle" => NutritionGoal::Muscle,
            "fatloss" => NutritionGoal::FatLoss,
            _ => NutritionGoal::Maintain,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Experience {
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    #[must_use]
    pub fn is_beginner(self) -> bool {
        self == Experience::Beginner
    }
}

impl From<&str> for Experience {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Experience::Beginner,
            "advanced" => Experience::Advanced,
            _ => Experience::Intermediate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl From<&str> for Sex {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" => Sex::MALE,
            _ => Sex::FEMALE,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Diet {
    Omnivore,
    Vegetarian,
    Vegan,
    Pescatarian,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if value.is_nan() || value <= 0.0 || value >= 1000.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be greater than 0 and less than 1000 kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Height(f32);

impl Height {
    pub fn new(value: f32) -> Result<Self, HeightError> {
        if value.is_nan() || value <= 0.0 || value >= 300.0 {
            return Err(HeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Height {
    type Error = HeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => Height::new(parsed_value),
            Err(_) => Err(HeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum HeightError {
    #[error("Height must be greater than 0 and less than 300 cm")]
    OutOfRange,
    #[error("Height must be a decimal")]
    ParseError,
}

#[derive(Deref, Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u32);

impl Age {
    pub fn new(value: u32) -> Result<Self, AgeError> {
        if !(1..=120).contains(&value) {
            return Err(AgeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Age {
    type Error = AgeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Age::new(parsed_value),
            Err(_) => Err(AgeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AgeError {
    #[error("Age must be in the range 1 to 120")]
    OutOfRange,
    #[error("Age must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct BodyFatPercentage(f32);

impl BodyFatPercentage {
    pub fn new(value: f32) -> Result<Self, BodyFatError> {
        if value.is_nan() || value <= 0.0 || value >= 100.0 {
            return Err(BodyFatError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Interprets form input where 0 means the percentage is unknown.
    pub fn optional(value: f32) -> Result<Option<Self>, BodyFatError> {
        if value == 0.0 {
            return Ok(None);
        }

        Self::new(value).map(Some)
    }
}

impl TryFrom<&str> for BodyFatPercentage {
    type Error = BodyFatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f32>() {
            Ok(parsed_value) => BodyFatPercentage::new(parsed_value),
            Err(_) => Err(BodyFatError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BodyFatError {
    #[error("Body fat must be greater than 0 and less than 100 %")]
    OutOfRange,
    #[error("Body fat must be a decimal")]
    ParseError,
}

/// Number of training days per week, clamped to 1 to 6.
#[derive(Deref, Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayCount(u32);

impl DayCount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 6;
}

impl Default for DayCount {
    fn default() -> Self {
        Self(3)
    }
}

impl From<i64> for DayCount {
    fn from(value: i64) -> Self {
        Self(clamp_count(value, Self::MIN, Self::MAX))
    }
}

impl TryFrom<&str> for DayCount {
    type Error = CountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_count(value).map(|count| count.map_or_else(Self::default, Self::from))
    }
}

/// Number of meals per day, clamped to 1 to 6.
#[derive(Deref, Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MealsPerDay(u32);

impl MealsPerDay {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 6;
}

impl Default for MealsPerDay {
    fn default() -> Self {
        Self(3)
    }
}

impl From<i64> for MealsPerDay {
    fn from(value: i64) -> Self {
        Self(clamp_count(value, Self::MIN, Self::MAX))
    }
}

impl TryFrom<&str> for MealsPerDay {
    type Error = CountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_count(value).map(|count| count.map_or_else(Self::default, Self::from))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CountError {
    #[error("Count must be an integer")]
    ParseError,
}

fn clamp_count(value: i64, min: u32, max: u32) -> u32 {
    u32::try_from(value.clamp(i64::from(min), i64::from(max))).unwrap_or(min)
}

/// Blank input yields `None`, which callers map to their default.
fn parse_count(value: &str) -> Result<Option<i64>, CountError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<i64>()
        .map(Some)
        .map_err(|_| CountError::ParseError)
}

/// Lower-cased ingredient substrings a meal must not contain.
#[derive(Deref, Debug, Default, Clone, PartialEq, Eq)]
pub struct Avoid(Vec<String>);

impl Avoid {
    pub fn new<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Self {
        Self(
            items
                .into_iter()
                .map(|item| item.as_ref().trim().to_lowercase())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    /// Whether `text` contains any of the avoided substrings, ignoring case.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.0.iter().any(|item| text.contains(item.as_str()))
    }
}

impl From<&str> for Avoid {
    fn from(value: &str) -> Self {
        Self::new(value.split(','))
    }
}
