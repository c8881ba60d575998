use crate::notification::{CorrelationData, NotificationRequest};
use crate::provider::{NotificationService, ProviderError};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// The one alert this process has in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAlert {
    pub id: String,
    pub correlation: CorrelationData,
}

impl PendingAlert {
    pub fn for_request(request: &NotificationRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            correlation: request.correlation(),
        }
    }
}

/// Submits the alert and, once the service accepts it, plays the sound cue.
pub fn dispatch<S: NotificationService + ?Sized>(
    service: &S,
    request: &NotificationRequest,
) -> Result<PendingAlert, ProviderError> {
    let alert = PendingAlert::for_request(request);
    tracing::debug!(id = %alert.id, title = %request.title, "submitting alert");
    service.submit(&alert, request)?;
    service.play_sound(&request.sound_name);
    Ok(alert)
}

/// Looks `name` up as `<dir>/<name>.aiff` in the usual sound folders.
pub fn resolve_sound(name: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    if name.is_empty() || name.contains('/') {
        return None;
    }
    search_dirs
        .iter()
        .map(|dir| dir.join(format!("{name}.aiff")))
        .find(|candidate| candidate.is_file())
}

pub fn sound_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(home) = std::env::var("HOME") {
        dirs.push(Path::new(&home).join("Library/Sounds"));
    }
    dirs.push(PathBuf::from("/Library/Sounds"));
    dirs.push(PathBuf::from("/System/Library/Sounds"));
    dirs
}
