#![warn(clippy::pedantic)]

use std::collections::VecDeque;

use fitflow_domain::{
    self as domain, CreateError, DeleteError, ReadError, SavedPlanRepository, Settings,
    SettingsRepository, StorageError, Theme, UpdateError,
};

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod log;
pub mod memory;
mod record;

pub use record::RecordError;

const KEY_SAVED_PLANS: &str = "ff-saved-plans";
const KEY_THEME: &str = "ff-theme";
const KEY_LOG: &str = "log";

/// String key-value store underneath [`Storage`].
#[allow(clippy::missing_errors_doc)]
pub trait Backend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct Storage<B> {
    backend: B,
}

impl<B: Backend> Storage<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    fn read_records(&self) -> Result<Vec<record::SavedPlan>, ReadError> {
        match self.backend.get(KEY_SAVED_PLANS)? {
            Some(json) => serde_json::from_str(&json).map_err(|err| ReadError::Other(err.into())),
            None => Ok(vec![]),
        }
    }

    fn write_records(&self, records: &[record::SavedPlan]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records).map_err(|err| StorageError::Other(err.into()))?;
        self.backend.set(KEY_SAVED_PLANS, &json)
    }
}

impl<B: Backend> SavedPlanRepository for Storage<B> {
    fn read_saved_plans(&self) -> Result<Vec<domain::SavedPlan>, ReadError> {
        self.read_records()?
            .into_iter()
            .map(|r| domain::SavedPlan::try_from(r).map_err(|err| ReadError::Other(err.into())))
            .collect()
    }

    fn create_saved_plan(&self, plan: domain::SavedPlan) -> Result<domain::SavedPlan, CreateError> {
        let mut records = self.read_records()?;
        records.push(record::SavedPlan::from(&plan));
        self.write_records(&records)?;
        Ok(plan)
    }

    fn delete_saved_plan(&self, index: usize) -> Result<domain::SavedPlan, DeleteError> {
        let mut records = self.read_records()?;
        if index >= records.len() {
            return Err(DeleteError::NotFound(index));
        }
        let removed = domain::SavedPlan::try_from(records.remove(index))
            .map_err(|err| DeleteError::Other(err.into()))?;
        self.write_records(&records)?;
        Ok(removed)
    }
}

impl<B: Backend> SettingsRepository for Storage<B> {
    fn read_settings(&self) -> Result<Settings, ReadError> {
        let theme = self
            .backend
            .get(KEY_THEME)?
            .and_then(|theme| theme.parse::<Theme>().ok())
            .unwrap_or_default();
        Ok(Settings { theme })
    }

    fn write_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
        self.backend.set(KEY_THEME, &settings.theme.to_string())?;
        Ok(settings)
    }
}

impl<B: Backend + Send + Sync> log::Repository for Storage<B> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match self
            .backend
            .get(KEY_LOG)
            .map_err(|err| log::Error::Unknown(err.to_string()))?
        {
            Some(json) => {
                serde_json::from_str(&json).map_err(|err| log::Error::Unknown(err.to_string()))
            }
            None => Ok(VecDeque::new()),
        }
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::MAX_ENTRIES);
        let json =
            serde_json::to_string(&entries).map_err(|err| log::Error::Unknown(err.to_string()))?;
        self.backend
            .set(KEY_LOG, &json)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

/// A saved plan prepared for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub contents: String,
}

/// Render a saved plan as pretty-printed JSON in its stored format.
///
/// # Errors
///
/// Returns an error if the plan cannot be serialized.
pub fn export(plan: &domain::SavedPlan) -> Result<Export, serde_json::Error> {
    Ok(Export {
        file_name: plan.file_name(),
        contents: serde_json::to_string_pretty(&record::SavedPlan::from(plan))?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use fitflow_domain::{
        Age, MealPlanService, PlanData, PlanKind, Profile, SavedPlanService, Service,
        SettingsService, Unshuffled, WorkoutService,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{log::Repository, memory::Memory};

    fn created() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap()
    }

    fn workout_plan() -> domain::SavedPlan {
        let service = Service::new(Storage::new(Memory::default()), Unshuffled);
        domain::SavedPlan::new(
            Some("Home"),
            PlanData::Workout(service.sample_workout_plan()),
            created(),
        )
    }

    fn meal_plan() -> domain::SavedPlan {
        let service = Service::new(Storage::new(Memory::default()), Unshuffled);
        let profile = Profile {
            age: Some(Age::new(30).unwrap()),
            ..Profile::default()
        };
        domain::SavedPlan::new(
            None,
            PlanData::Meal(service.generate_meal_plan(&profile).unwrap()),
            created(),
        )
    }

    #[test]
    fn test_saved_plans() {
        let storage = Storage::new(Memory::default());

        assert_eq!(storage.read_saved_plans().unwrap(), vec![]);

        storage.create_saved_plan(workout_plan()).unwrap();
        storage.create_saved_plan(meal_plan()).unwrap();

        assert_eq!(
            storage.read_saved_plans().unwrap(),
            vec![workout_plan(), meal_plan()]
        );

        assert_eq!(storage.delete_saved_plan(0).unwrap(), workout_plan());
        assert_eq!(storage.read_saved_plans().unwrap(), vec![meal_plan()]);
        assert!(matches!(
            storage.delete_saved_plan(1),
            Err(DeleteError::NotFound(1))
        ));
    }

    #[test]
    fn test_saved_plans_stored_format() {
        let storage = Storage::new(Memory::default());
        storage.create_saved_plan(meal_plan()).unwrap();

        let stored: serde_json::Value =
            serde_json::from_str(&storage.backend.get(KEY_SAVED_PLANS).unwrap().unwrap()).unwrap();

        assert_eq!(stored[0]["type"], "meal");
        assert_eq!(stored[0]["title"], "Meal Plan");
        assert_eq!(stored[0]["created"], 1_700_000_000_000_i64);
        assert_eq!(stored[0]["data"]["targets"]["calories"], 1979);
        assert_eq!(stored[0]["data"]["days"][6]["name"], "Sun");
    }

    #[test]
    fn test_saved_plans_corrupt() {
        let storage = Storage::new(Memory::default());
        storage.backend.set(KEY_SAVED_PLANS, "{not json").unwrap();

        assert!(matches!(
            storage.read_saved_plans(),
            Err(ReadError::Other(_))
        ));
        assert!(matches!(
            storage.create_saved_plan(workout_plan()),
            Err(CreateError::Other(_))
        ));
    }

    #[test]
    fn test_delete_saved_plan_invalid_record() {
        let storage = Storage::new(Memory::default());
        let stored = serde_json::json!([{
            "type": "workout",
            "title": "Arms",
            "data": [{ "day": 1, "split": "Arms", "exercises": [] }],
            "created": 0
        }])
        .to_string();
        storage.backend.set(KEY_SAVED_PLANS, &stored).unwrap();

        assert!(matches!(
            storage.delete_saved_plan(0),
            Err(DeleteError::Other(_))
        ));
        assert_eq!(storage.backend.get(KEY_SAVED_PLANS).unwrap(), Some(stored));
    }

    #[test]
    fn test_saved_sample_meal_plan() {
        let service = Service::new(Storage::new(Memory::default()), Unshuffled);

        let saved = service
            .save_plan(None, PlanData::Meal(service.sample_meal_plan()))
            .unwrap();

        assert_eq!(saved.title, "Meal Plan");
        let plans = service.get_saved_plans().unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].data, saved.data);
    }

    #[test]
    fn test_saved_plans_through_service() {
        let service = Service::new(Storage::new(Memory::default()), Unshuffled);
        let plan = service.sample_workout_plan();

        let saved = service
            .save_plan(Some(" "), PlanData::Workout(plan.clone()))
            .unwrap();

        assert_eq!(saved.kind(), PlanKind::Workout);
        assert_eq!(saved.title, "Workout Plan");
        assert_eq!(
            service.get_saved_plans().unwrap(),
            vec![domain::SavedPlan {
                created: DateTime::<Utc>::from_timestamp_millis(saved.created.timestamp_millis())
                    .unwrap(),
                ..saved
            }]
        );
    }

    #[rstest]
    #[case(None, Theme::Dark)]
    #[case(Some("light"), Theme::Light)]
    #[case(Some("dark"), Theme::Dark)]
    #[case(Some("sepia"), Theme::Dark)]
    fn test_read_settings(#[case] stored: Option<&str>, #[case] expected: Theme) {
        let storage = Storage::new(Memory::default());
        if let Some(stored) = stored {
            storage.backend.set(KEY_THEME, stored).unwrap();
        }
        assert_eq!(storage.read_settings().unwrap(), Settings { theme: expected });
    }

    #[test]
    fn test_toggle_theme_stores_plain_string() {
        let storage = Storage::new(Memory::default());
        let service = Service::new(storage, Unshuffled);

        assert_eq!(service.toggle_theme().unwrap().theme, Theme::Light);
        assert_eq!(service.get_settings().unwrap().theme, Theme::Light);
    }

    #[test]
    fn test_write_settings() {
        let storage = Storage::new(Memory::default());
        storage
            .write_settings(Settings {
                theme: Theme::Light,
            })
            .unwrap();
        assert_eq!(
            storage.backend.get(KEY_THEME).unwrap(),
            Some("light".to_string())
        );
    }

    #[test]
    fn test_log_entries() {
        let storage = Storage::new(Memory::default());

        assert!(storage.read_entries().unwrap().is_empty());

        for i in 0..105 {
            storage
                .write_entry(crate::log::Entry {
                    time: "Jan 01 00:00:00".to_string(),
                    level: ::log::Level::Info,
                    message: i.to_string(),
                })
                .unwrap();
        }

        let entries = storage.read_entries().unwrap();
        assert_eq!(entries.len(), crate::log::MAX_ENTRIES);
        assert_eq!(entries.front().unwrap().message, "104");
        assert_eq!(entries.back().unwrap().message, "5");
    }

    #[test]
    fn test_export() {
        let export = export(&workout_plan()).unwrap();

        assert_eq!(export.file_name, "Home.json");
        assert!(export.contents.starts_with("{\n  \"type\": \"workout\",\n  \"title\": \"Home\","));

        let record: record::SavedPlan = serde_json::from_str(&export.contents).unwrap();
        assert_eq!(
            domain::SavedPlan::try_from(record).unwrap(),
            workout_plan()
        );
    }
}
