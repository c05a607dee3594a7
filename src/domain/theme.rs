use crate::{error::Result, storage::Storage};
use std::fmt;

/// Colour scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub const STORAGE_KEY: &'static str = "theme";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Absent or unrecognised values mean dark
    pub fn load(storage: &dyn Storage) -> Result<Self> {
        let theme = match storage.get_item(Self::STORAGE_KEY)?.as_deref() {
            Some("light") => Self::Light,
            _ => Self::Dark,
        };
        Ok(theme)
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<()> {
        storage.set_item(Self::STORAGE_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_absent_theme_is_dark() {
        let storage = MemoryStorage::new();
        assert_eq!(Theme::load(&storage).unwrap(), Theme::Dark);
    }

    #[test]
    fn test_light_theme_persists() {
        let mut storage = MemoryStorage::new();
        Theme::Light.save(&mut storage).unwrap();

        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(Theme::load(&storage).unwrap(), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
