use crate::{ReadError, UpdateError};

pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, ReadError>;
    fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
    fn toggle_theme(&self) -> Result<Settings, UpdateError>;
}

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, ReadError>;
    fn write_settings(&self, settings: Settings) -> Result<Settings, UpdateError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
