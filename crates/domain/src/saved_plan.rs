use chrono::{DateTime, Utc};

use crate::{CreateError, DeleteError, MealPlan, ReadError, WorkoutPlan};

pub trait SavedPlanService {
    fn get_saved_plans(&self) -> Result<Vec<SavedPlan>, ReadError>;
    fn save_plan(&self, title: Option<&str>, data: PlanData) -> Result<SavedPlan, CreateError>;
    fn delete_saved_plan(&self, index: usize) -> Result<SavedPlan, DeleteError>;
}

/// Saved plans in insertion order.
pub trait SavedPlanRepository {
    fn read_saved_plans(&self) -> Result<Vec<SavedPlan>, ReadError>;
    fn create_saved_plan(&self, plan: SavedPlan) -> Result<SavedPlan, CreateError>;
    fn delete_saved_plan(&self, index: usize) -> Result<SavedPlan, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedPlan {
    pub title: String,
    pub data: PlanData,
    pub created: DateTime<Utc>,
}

impl SavedPlan {
    /// A blank or missing title is replaced by the default title of the plan kind.
    #[must_use]
    pub fn new(title: Option<&str>, data: PlanData, created: DateTime<Utc>) -> Self {
        let title = match title.map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => data.kind().default_title().to_string(),
        };
        Self {
            title,
            data,
            created,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PlanKind {
        self.data.kind()
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanData {
    Workout(WorkoutPlan),
    Meal(MealPlan),
}

impl PlanData {
    #[must_use]
    pub fn kind(&self) -> PlanKind {
        match self {
            PlanData::Workout(_) => PlanKind::Workout,
            PlanData::Meal(_) => PlanKind::Meal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PlanKind {
    Workout,
    Meal,
}

impl PlanKind {
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            PlanKind::Workout => "Workout Plan",
            PlanKind::Meal => "Meal Plan",
        }
    }
}
