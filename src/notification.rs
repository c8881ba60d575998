use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Claude Notifier";
pub const DEFAULT_BODY: &str = "Hello!";
pub const DEFAULT_SOUND: &str = "Glass";

/// Everything needed to present one alert. Built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
    pub sound_name: String,
    pub working_directory_hint: Option<String>,
    pub time_sensitive: bool,
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            body: DEFAULT_BODY.to_string(),
            sound_name: DEFAULT_SOUND.to_string(),
            working_directory_hint: None,
            time_sensitive: true,
        }
    }
}

impl NotificationRequest {
    pub fn with_sound(mut self, sound_name: impl Into<String>) -> Self {
        self.sound_name = sound_name.into();
        self
    }

    pub fn correlation(&self) -> CorrelationData {
        CorrelationData {
            cwd: self.working_directory_hint.clone(),
        }
    }
}

/// Opaque payload attached to an alert and handed back untouched on click.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}
