use crate::provider::ProviderError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("config parse error in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),
    #[error("Error: Notification permission denied. Enable in System Settings > Notifications.")]
    PermissionDenied,
    #[error("Error: Notification permission not granted.")]
    PermissionNotGranted,
}
