use crate::error::{Result, TaskboardError};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Runtime settings for the board engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskboardConfig {
    /// Touch moves earlier than this after touch-start count as a tap
    pub touch_drag_threshold_ms: i64,
    /// Boards seeded when storage holds none
    pub default_boards: Vec<String>,
}

impl Default for TaskboardConfig {
    fn default() -> Self {
        Self {
            touch_drag_threshold_ms: 200,
            default_boards: vec![
                "Platform Launch".to_string(),
                "Marketing Plan".to_string(),
                "Roadmap".to_string(),
            ],
        }
    }
}

impl TaskboardConfig {
    /// Parses a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TaskboardError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.touch_drag_threshold_ms < 0 {
            return Err(TaskboardError::ConfigError(format!(
                "touch_drag_threshold_ms must not be negative, got {}",
                self.touch_drag_threshold_ms
            )));
        }

        for (index, title) in self.default_boards.iter().enumerate() {
            if title.trim().is_empty() {
                return Err(TaskboardError::ConfigError(format!(
                    "default board #{} has an empty title",
                    index + 1
                )));
            }
            let duplicate = self.default_boards[..index]
                .iter()
                .any(|earlier| earlier.trim().to_lowercase() == title.trim().to_lowercase());
            if duplicate {
                return Err(TaskboardError::ConfigError(format!(
                    "default board \"{}\" is listed twice",
                    title
                )));
            }
        }

        Ok(())
    }

    pub fn touch_drag_threshold(&self) -> Duration {
        Duration::milliseconds(self.touch_drag_threshold_ms)
    }
}
