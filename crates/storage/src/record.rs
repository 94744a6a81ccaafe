use chrono::{DateTime, Utc};
use fitflow_domain as domain;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("invalid {field}: {value}")]
    Invalid { field: &'static str, value: String },
    #[error("plan of type {0} holds data of another type")]
    KindMismatch(String),
    #[error(transparent)]
    RepRange(#[from] domain::RepRangeError),
}

fn invalid(field: &'static str, value: impl ToString) -> RecordError {
    RecordError::Invalid {
        field,
        value: value.to_string(),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedPlan {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    pub data: PlanData,
    pub created: i64,
}

impl From<&domain::SavedPlan> for SavedPlan {
    fn from(value: &domain::SavedPlan) -> Self {
        Self {
            kind: value.kind().to_string(),
            title: value.title.clone(),
            data: PlanData::from(&value.data),
            created: value.created.timestamp_millis(),
        }
    }
}

impl TryFrom<SavedPlan> for domain::SavedPlan {
    type Error = RecordError;

    fn try_from(value: SavedPlan) -> Result<Self, Self::Error> {
        let kind = value
            .kind
            .parse::<domain::PlanKind>()
            .map_err(|_| invalid("type", &value.kind))?;
        let data = match (kind, value.data) {
            // An empty list is read as a workout.
            (domain::PlanKind::Meal, PlanData::Workout(days)) if days.is_empty() => {
                PlanData::MealDays(vec![])
            }
            (_, data) => data,
        };
        let data = domain::PlanData::try_from(data)?;

        if data.kind() != kind {
            return Err(RecordError::KindMismatch(value.kind));
        }

        let created = DateTime::<Utc>::from_timestamp_millis(value.created)
            .ok_or_else(|| invalid("created", value.created))?;

        Ok(Self::new(Some(value.title.as_str()), data, created))
    }
}

/// Workout plans are stored as a bare list of days. Meal plans with targets
/// are stored as an object, sample meal plans as a bare list of days.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PlanData {
    Workout(Vec<WorkoutDay>),
    Meal(MealPlan),
    MealDays(Vec<MealDay>),
}

impl From<&domain::PlanData> for PlanData {
    fn from(value: &domain::PlanData) -> Self {
        match value {
            domain::PlanData::Workout(plan) => {
                PlanData::Workout(plan.days.iter().map(WorkoutDay::from).collect())
            }
            domain::PlanData::Meal(plan) => match plan.targets {
                Some(targets) => PlanData::Meal(MealPlan {
                    targets: Targets::from(targets),
                    days: plan.days.iter().map(MealDay::from).collect(),
                }),
                None => PlanData::MealDays(plan.days.iter().map(MealDay::from).collect()),
            },
        }
    }
}

impl TryFrom<PlanData> for domain::PlanData {
    type Error = RecordError;

    fn try_from(value: PlanData) -> Result<Self, Self::Error> {
        Ok(match value {
            PlanData::Workout(days) => domain::PlanData::Workout(domain::WorkoutPlan {
                days: days
                    .into_iter()
                    .map(domain::WorkoutDay::try_from)
                    .collect::<Result<_, _>>()?,
            }),
            PlanData::Meal(plan) => domain::PlanData::Meal(domain::MealPlan::try_from(plan)?),
            PlanData::MealDays(days) => domain::PlanData::Meal(domain::MealPlan {
                targets: None,
                days: meal_days(days)?,
            }),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDay {
    pub day: u32,
    pub split: String,
    pub exercises: Vec<Exercise>,
}

impl From<&domain::WorkoutDay> for WorkoutDay {
    fn from(value: &domain::WorkoutDay) -> Self {
        Self {
            day: value.number,
            split: value.split.to_string(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<WorkoutDay> for domain::WorkoutDay {
    type Error = RecordError;

    fn try_from(value: WorkoutDay) -> Result<Self, Self::Error> {
        Ok(Self {
            number: value.day,
            split: value
                .split
                .parse()
                .map_err(|_| invalid("split", &value.split))?,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::PrescribedExercise::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub name: String,
    pub group: String,
    pub sets: u32,
    pub reps: String,
}

impl From<&domain::PrescribedExercise> for Exercise {
    fn from(value: &domain::PrescribedExercise) -> Self {
        Self {
            name: value.name.clone(),
            group: value.group.to_string(),
            sets: value.sets,
            reps: value.reps.to_string(),
        }
    }
}

impl TryFrom<Exercise> for domain::PrescribedExercise {
    type Error = RecordError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            group: value
                .group
                .parse()
                .map_err(|_| invalid("muscle group", &value.group))?,
            reps: domain::RepRange::try_from(value.reps.as_str())?,
            name: value.name,
            sets: value.sets,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MealPlan {
    pub targets: Targets,
    pub days: Vec<MealDay>,
}

impl TryFrom<MealPlan> for domain::MealPlan {
    type Error = RecordError;

    fn try_from(value: MealPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            targets: Some(value.targets.into()),
            days: meal_days(value.days)?,
        })
    }
}

fn meal_days(days: Vec<MealDay>) -> Result<Vec<domain::MealDay>, RecordError> {
    days.into_iter().map(domain::MealDay::try_from).collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl From<domain::NutritionTargets> for Targets {
    fn from(value: domain::NutritionTargets) -> Self {
        Self {
            calories: value.calories,
            protein: value.protein,
            carbs: value.carbs,
            fat: value.fat,
        }
    }
}

impl From<Targets> for domain::NutritionTargets {
    fn from(value: Targets) -> Self {
        Self {
            calories: value.calories,
            protein: value.protein,
            carbs: value.carbs,
            fat: value.fat,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MealDay {
    pub name: String,
    pub meals: Vec<Meal>,
}

impl From<&domain::MealDay> for MealDay {
    fn from(value: &domain::MealDay) -> Self {
        Self {
            name: value.name.to_string(),
            meals: value.meals.iter().map(Meal::from).collect(),
        }
    }
}

impl TryFrom<MealDay> for domain::MealDay {
    type Error = RecordError;

    fn try_from(value: MealDay) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value
                .name
                .parse::<domain::DayName>()
                .map_err(|_| invalid("day", &value.name))?,
            meals: value
                .meals
                .into_iter()
                .map(domain::PlannedMeal::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub name: String,
    pub tags: Vec<String>,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub recipe: Vec<String>,
}

impl From<&domain::PlannedMeal> for Meal {
    fn from(value: &domain::PlannedMeal) -> Self {
        Self {
            name: value.name.clone(),
            tags: value.diets.iter().map(ToString::to_string).collect(),
            calories: value.macros.calories,
            protein: value.macros.protein,
            carbs: value.macros.carbs,
            fat: value.macros.fat,
            ingredients: value.ingredients.clone(),
            recipe: value.recipe.clone(),
        }
    }
}

impl TryFrom<Meal> for domain::PlannedMeal {
    type Error = RecordError;

    fn try_from(value: Meal) -> Result<Self, Self::Error> {
        Ok(Self {
            diets: value
                .tags
                .iter()
                .map(|tag| tag.parse().map_err(|_| invalid("diet", tag)))
                .collect::<Result<_, _>>()?,
            macros: domain::Macros {
                calories: value.calories,
                protein: value.protein,
                carbs: value.carbs,
                fat: value.fat,
            },
            name: value.name,
            ingredients: value.ingredients,
            recipe: value.recipe,
        })
    }
}
