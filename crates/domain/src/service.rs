use std::cell::RefCell;

use chrono::Utc;
use log::{debug, error};

use crate::{
    Catalog, CreateError, DeleteError, GroceryList, MealPlan, MealPlanError, MealPlanService,
    NutritionError, NutritionInput, NutritionTargets, PlanData, Profile, ReadError, SavedPlan,
    SavedPlanRepository, SavedPlanService, Settings, SettingsRepository, SettingsService, Shuffle,
    UpdateError, WorkoutPlan, WorkoutService,
};

/// Entry point for the UI: plan generation backed by a catalog and a shuffle
/// source, plus persistence of saved plans and settings.
pub struct Service<'a, R, S> {
    repository: R,
    catalog: Catalog<'a>,
    shuffle: RefCell<S>,
}

impl<R, S> Service<'static, R, S> {
    pub fn new(repository: R, shuffle: S) -> Self {
        Self::with_catalog(repository, Catalog::default(), shuffle)
    }
}

impl<'a, R, S> Service<'a, R, S> {
    pub fn with_catalog(repository: R, catalog: Catalog<'a>, shuffle: S) -> Self {
        Self {
            repository,
            catalog,
            shuffle: RefCell::new(shuffle),
        }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R, S: Shuffle> WorkoutService for Service<'_, R, S> {
    fn generate_workout_plan(&self, profile: &Profile) -> WorkoutPlan {
        crate::generate_workout_plan(profile, &self.catalog, &mut *self.shuffle.borrow_mut())
    }

    fn sample_workout_plan(&self) -> WorkoutPlan {
        self.generate_workout_plan(&Profile::sample())
    }
}

impl<R, S> MealPlanService for Service<'_, R, S> {
    fn nutrition_targets(&self, profile: &Profile) -> Result<NutritionTargets, NutritionError> {
        crate::calculate_targets(&NutritionInput::from(profile))
    }

    fn generate_meal_plan(&self, profile: &Profile) -> Result<MealPlan, MealPlanError> {
        crate::generate_meal_plan(profile, &self.catalog)
    }

    fn grocery_list(&self, plan: &MealPlan) -> GroceryList {
        GroceryList::from(plan)
    }

    fn sample_meal_plan(&self) -> MealPlan {
        crate::sample_meal_plan(&self.catalog)
    }
}

impl<R: SavedPlanRepository, S> SavedPlanService for Service<'_, R, S> {
    fn get_saved_plans(&self) -> Result<Vec<SavedPlan>, ReadError> {
        log_on_error!(
            self.repository.read_saved_plans(),
            ReadError,
            "get",
            "saved plans"
        )
    }

    fn save_plan(&self, title: Option<&str>, data: PlanData) -> Result<SavedPlan, CreateError> {
        log_on_error!(
            self.repository
                .create_saved_plan(SavedPlan::new(title, data, Utc::now())),
            CreateError,
            "save",
            "plan"
        )
    }

    fn delete_saved_plan(&self, index: usize) -> Result<SavedPlan, DeleteError> {
        log_on_error!(
            self.repository.delete_saved_plan(index),
            DeleteError,
            "delete",
            "saved plan"
        )
    }
}

impl<R: SettingsRepository, S> SettingsService for Service<'_, R, S> {
    fn get_settings(&self) -> Result<Settings, ReadError> {
        log_on_error!(self.repository.read_settings(), ReadError, "get", "settings")
    }

    fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
        log_on_error!(
            self.repository.write_settings(settings),
            UpdateError,
            "set",
            "settings"
        )
    }

    fn toggle_theme(&self) -> Result<Settings, UpdateError> {
        let settings = self.get_settings()?;
        self.set_settings(Settings {
            theme: settings.theme.toggled(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Age, Avoid, Diet, NutritionGoal, PlanKind, Random, Split, StorageError, Theme, Unshuffled,
        catalog,
    };

    #[derive(Default)]
    struct Repository {
        saved_plans: RefCell<Vec<SavedPlan>>,
        settings: Cell<Option<Settings>>,
        unavailable: bool,
    }

    impl Repository {
        fn unavailable() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }
    }

    impl SavedPlanRepository for Repository {
        fn read_saved_plans(&self) -> Result<Vec<SavedPlan>, ReadError> {
            if self.unavailable {
                return Err(StorageError::Unavailable.into());
            }
            Ok(self.saved_plans.borrow().clone())
        }

        fn create_saved_plan(&self, plan: SavedPlan) -> Result<SavedPlan, CreateError> {
            if self.unavailable {
                return Err(StorageError::Unavailable.into());
            }
            self.saved_plans.borrow_mut().push(plan.clone());
            Ok(plan)
        }

        fn delete_saved_plan(&self, index: usize) -> Result<SavedPlan, DeleteError> {
            if self.unavailable {
                return Err(StorageError::Unavailable.into());
            }
            let mut plans = self.saved_plans.borrow_mut();
            if index >= plans.len() {
                return Err(DeleteError::NotFound(index));
            }
            Ok(plans.remove(index))
        }
    }

    impl SettingsRepository for Repository {
        fn read_settings(&self) -> Result<Settings, ReadError> {
            if self.unavailable {
                return Err(StorageError::Unavailable.into());
            }
            Ok(self.settings.get().unwrap_or_default())
        }

        fn write_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
            if self.unavailable {
                return Err(StorageError::Unavailable.into());
            }
            self.settings.set(Some(settings));
            Ok(settings)
        }
    }

    #[test]
    fn test_generate_workout_plan() {
        let service = Service::new(Repository::default(), Random::seeded(5));
        let plan = service.generate_workout_plan(&Profile::default());

        assert_eq!(
            plan.days.iter().map(|d| d.split).collect::<Vec<_>>(),
            vec![Split::FullBody; 3]
        );
    }

    #[test]
    fn test_sample_workout_plan() {
        let service = Service::new(Repository::default(), Unshuffled);
        let plan = service.sample_workout_plan();

        assert_eq!(
            plan.days.iter().map(|d| d.label()).collect::<Vec<_>>(),
            vec![
                "Day 1 — Upper",
                "Day 2 — Lower",
                "Day 3 — Upper",
                "Day 4 — Lower"
            ]
        );
        assert!(
            plan.days
                .iter()
                .flat_map(|d| &d.exercises)
                .all(|e| e.sets == 3 && e.reps.to_string() == "8-12")
        );
    }

    #[test]
    fn test_generate_meal_plan_with_injected_catalog() {
        let meals = [catalog::Meal {
            name: "Rice Bowl",
            diets: &[Diet::Vegan],
            calories: 600,
            protein: 20,
            carbs: 100,
            fat: 12,
            ingredients: &["rice", "beans"],
            recipe: &["Cook rice.", "Add beans."],
        }];
        let service = Service::with_catalog(
            Repository::default(),
            Catalog {
                exercises: &[],
                meals: &meals,
            },
            Unshuffled,
        );
        let profile = Profile {
            age: Some(Age::new(30).unwrap()),
            diet: Diet::Vegan,
            nutrition_goal: NutritionGoal::FatLoss,
            ..Profile::default()
        };

        let plan = service.generate_meal_plan(&profile).unwrap();
        assert_eq!(plan.meals().count(), 21);
        assert!(plan.meals().all(|m| m.name == "Rice Bowl"));
        assert_eq!(
            service.grocery_list(&plan).to_string(),
            "beans 21x\nrice 21x\n"
        );
        assert_eq!(plan.targets, Some(service.nutrition_targets(&profile).unwrap()));
        assert_eq!(
            service
                .sample_meal_plan()
                .meals()
                .map(|m| m.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Rice Bowl"]
        );

        assert_eq!(
            service.generate_meal_plan(&Profile {
                avoid: Avoid::from("beans"),
                ..profile
            }),
            Err(MealPlanError::NoMatchingMeals)
        );
        assert!(
            service
                .generate_workout_plan(&Profile::default())
                .days
                .iter()
                .all(|d| d.is_empty())
        );
    }

    #[test]
    fn test_saved_plans() {
        let service = Service::new(Repository::default(), Unshuffled);
        let workout = service.sample_workout_plan();

        let saved = service
            .save_plan(None, PlanData::Workout(workout.clone()))
            .unwrap();
        assert_eq!(saved.title, "Workout Plan");
        assert_eq!(saved.kind(), PlanKind::Workout);

        service
            .save_plan(Some("Week 2"), PlanData::Workout(workout))
            .unwrap();
        assert_eq!(
            service
                .get_saved_plans()
                .unwrap()
                .iter()
                .map(|p| p.title.as_str())
                .collect::<Vec<_>>(),
            vec!["Workout Plan", "Week 2"]
        );

        assert_eq!(service.delete_saved_plan(0).unwrap().title, "Workout Plan");
        assert!(matches!(
            service.delete_saved_plan(1),
            Err(DeleteError::NotFound(1))
        ));
        assert_eq!(service.get_saved_plans().unwrap().len(), 1);
    }

    #[test]
    fn test_toggle_theme() {
        let service = Service::new(Repository::default(), Unshuffled);

        assert_eq!(service.get_settings().unwrap().theme, Theme::Dark);
        assert_eq!(service.toggle_theme().unwrap().theme, Theme::Light);
        assert_eq!(service.get_settings().unwrap().theme, Theme::Light);
        assert_eq!(service.toggle_theme().unwrap().theme, Theme::Dark);
    }

    #[test]
    fn test_storage_unavailable() {
        let service = Service::new(Repository::unavailable(), Unshuffled);

        assert!(matches!(
            service.get_saved_plans(),
            Err(ReadError::Storage(StorageError::Unavailable))
        ));
        assert!(matches!(
            service.toggle_theme(),
            Err(UpdateError::Storage(StorageError::Unavailable))
        ));
        assert!(matches!(
            service.delete_saved_plan(0),
            Err(DeleteError::Storage(StorageError::Unavailable))
        ));
    }
}
