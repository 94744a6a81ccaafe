use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Number of entries kept by a log repository.
pub const MAX_ENTRIES: usize = 100;

const TIME_FORMAT: &str = "%b %d %H:%M:%S";

/// Log entries, newest first.
#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

impl Entry {
    fn new(record: &Record) -> Self {
        Self {
            time: Local::now().format(TIME_FORMAT).to_string(),
            level: record.level(),
            message: record.args().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Install a logger that writes every record up to `level` into `repository`.
///
/// Writes are serialized through the mutex, as repositories rewrite the
/// whole list of entries.
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(
    repository: Arc<Mutex<dyn Repository>>,
    level: LevelFilter,
) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger { repository, level }))
        .map(|()| log::set_max_level(level))
}

struct Logger {
    repository: Arc<Mutex<dyn Repository>>,
    level: LevelFilter,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(repository) = self.repository.lock() {
            // Failures cannot be reported through the logger itself.
            let _ = repository.write_entry(Entry::new(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use fitflow_domain::{
        Avoid, Diet, MealPlanError, MealsPerDay, NutritionTargets, assemble_meal_plan,
        catalog::MEALS,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Storage, memory::Memory};

    #[test]
    fn test_entry_json() {
        let entry = Entry {
            time: "Jan 02 10:04:05".to_string(),
            level: Level::Warn,
            message: "no meals match diet vegan".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(
            json,
            r#"{"time":"Jan 02 10:04:05","level":"Warn","message":"no meals match diet vegan"}"#
        );
        assert_eq!(serde_json::from_str::<Entry>(&json).unwrap(), entry);
    }

    #[test]
    fn test_init_records_domain_warnings() {
        let storage = Arc::new(Mutex::new(Storage::new(Memory::default())));
        init(storage.clone(), LevelFilter::Info).unwrap();

        assert_eq!(
            assemble_meal_plan(
                &MEALS,
                Diet::Vegan,
                &Avoid::from("a, e, i, o, u"),
                MealsPerDay::default(),
                NutritionTargets {
                    calories: 2000,
                    protein: 150,
                    carbs: 200,
                    fat: 60,
                },
            ),
            Err(MealPlanError::NoMatchingMeals)
        );
        log::debug!("below the configured level");

        let entries = storage.lock().unwrap().read_entries().unwrap();
        assert!(entries.iter().any(|e| {
            e.level == Level::Warn && e.message.starts_with("no meals match diet vegan")
        }));
        assert!(entries.iter().all(|e| e.level <= Level::Info));
        assert!(
            !entries
                .iter()
                .any(|e| e.message == "below the configured level")
        );
    }
}
