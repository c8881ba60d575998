use crate::dispatch::PendingAlert;
use crate::notification::NotificationRequest;
use crate::race::InteractionSink;

pub mod macos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationState {
    Authorized,
    Provisional,
    NotDetermined,
    Denied,
    Unknown,
}

#[allow(dead_code)]
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider not available on this platform")]
    Unsupported,
    #[error("provider error: {0}")]
    Message(String),
}

/// How an alert is shown if it lands while this process is frontmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForegroundPresentation {
    pub banner: bool,
    pub sound: bool,
    pub list: bool,
}

impl Default for ForegroundPresentation {
    fn default() -> Self {
        Self {
            banner: true,
            sound: true,
            list: true,
        }
    }
}

/// Host notification service as seen by the lifecycle controller.
pub trait NotificationService {
    fn name(&self) -> &'static str;

    /// Installs the receiver for click callbacks. Called before anything else.
    fn subscribe(&self, sink: InteractionSink);

    /// Answer for the "presented while foregrounded" callback.
    fn foreground_presentation(&self) -> ForegroundPresentation {
        ForegroundPresentation::default()
    }

    fn authorization_state(&self) -> Result<AuthorizationState, ProviderError>;

    /// Presents the consent prompt. `Ok(true)` means granted.
    fn request_authorization(&self) -> Result<bool, ProviderError>;

    /// Returns once the service has accepted the alert.
    fn submit(
        &self,
        alert: &PendingAlert,
        request: &NotificationRequest,
    ) -> Result<(), ProviderError>;

    /// Plays `name`, or the default alert sound when `name` does not resolve.
    fn play_sound(&self, name: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreground_alerts_show_banner_sound_and_list() {
        let presentation = ForegroundPresentation::default();
        assert!(presentation.banner);
        assert!(presentation.sound);
        assert!(presentation.list);
    }
}
