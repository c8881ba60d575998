use crate::config::MacosConfig;
use crate::dispatch::PendingAlert;
use crate::notification::NotificationRequest;
use crate::provider::{AuthorizationState, NotificationService, ProviderError};
use crate::race::InteractionSink;

#[cfg(target_os = "macos")]
use crate::dispatch::{resolve_sound, sound_search_dirs};
#[cfg(target_os = "macos")]
use mac_notification_sys::error::{ApplicationError, Error as MacError};
#[cfg(target_os = "macos")]
use mac_notification_sys::{Notification as MacNotification, NotificationResponse, set_application};
#[cfg(target_os = "macos")]
use std::process::Command;
#[cfg(target_os = "macos")]
use std::sync::Mutex;

#[cfg(target_os = "macos")]
#[derive(Debug, Default)]
pub struct MacosProvider {
    sink: Mutex<Option<InteractionSink>>,
}

#[cfg(target_os = "macos")]
impl MacosProvider {
    pub fn new(config: Option<MacosConfig>) -> Result<Self, ProviderError> {
        let config = config.unwrap_or_default();

        if let Some(bundle) = config.app_bundle_id.as_deref() {
            if let Err(err) = set_application(bundle) {
                if !matches!(err, MacError::Application(ApplicationError::AlreadySet(_))) {
                    return Err(ProviderError::Message(err.to_string()));
                }
            }
        }

        Ok(Self::default())
    }

    fn current_sink(&self) -> Option<InteractionSink> {
        self.sink.lock().ok().and_then(|guard| guard.clone())
    }
}

#[cfg(target_os = "macos")]
impl NotificationService for MacosProvider {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn subscribe(&self, sink: InteractionSink) {
        if let Ok(mut guard) = self.sink.lock() {
            *guard = Some(sink);
        }
    }

    // The notification center used here delivers without a consent prompt;
    // the user can still silence it per-app in System Settings.
    fn authorization_state(&self) -> Result<AuthorizationState, ProviderError> {
        Ok(AuthorizationState::Provisional)
    }

    fn request_authorization(&self) -> Result<bool, ProviderError> {
        Ok(true)
    }

    fn submit(
        &self,
        alert: &PendingAlert,
        request: &NotificationRequest,
    ) -> Result<(), ProviderError> {
        let sink = self
            .current_sink()
            .ok_or_else(|| ProviderError::Message("no interaction subscriber".to_string()))?;
        let title = request.title.clone();
        let body = request.body.clone();
        let correlation = alert.correlation.clone();
        let id = alert.id.clone();
        // This notification center has no interruption levels.
        tracing::debug!(%id, time_sensitive = request.time_sensitive, "submitting alert");

        // Delivery blocks until the alert is activated or dismissed.
        std::thread::Builder::new()
            .name("macos-alert".to_string())
            .spawn(move || {
                let mut mac = MacNotification::new();
                // No sound here: `play_sound` is the one audio cue per alert.
                mac.title(&title).message(&body).wait_for_click(true);
                match mac.send() {
                    Ok(NotificationResponse::Click) | Ok(NotificationResponse::ActionButton(_)) => {
                        tracing::debug!(%id, "alert activated");
                        sink.clicked(correlation);
                    }
                    Ok(_) => tracing::debug!(%id, "alert closed without activation"),
                    Err(err) => tracing::warn!(%id, %err, "alert delivery failed"),
                }
            })
            .map_err(|err| ProviderError::Message(err.to_string()))?;

        Ok(())
    }

    fn play_sound(&self, name: &str) {
        let status = match resolve_sound(name, &sound_search_dirs()) {
            Some(path) => Command::new("afplay").arg(path).spawn(),
            None => {
                tracing::debug!(sound = name, "sound not found, using default");
                Command::new("osascript").args(["-e", "beep"]).spawn()
            }
        };
        if let Err(err) = status {
            tracing::warn!(%err, "sound playback failed");
        }
    }
}

#[cfg(not(target_os = "macos"))]
#[derive(Debug, Clone, Default)]
pub struct MacosProvider;

#[cfg(not(target_os = "macos"))]
impl MacosProvider {
    pub fn new(_config: Option<MacosConfig>) -> Result<Self, ProviderError> {
        Err(ProviderError::Unsupported)
    }
}

#[cfg(not(target_os = "macos"))]
impl NotificationService for MacosProvider {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn subscribe(&self, _sink: InteractionSink) {}

    fn authorization_state(&self) -> Result<AuthorizationState, ProviderError> {
        Err(ProviderError::Unsupported)
    }

    fn request_authorization(&self) -> Result<bool, ProviderError> {
        Err(ProviderError::Unsupported)
    }

    fn submit(
        &self,
        _alert: &PendingAlert,
        _request: &NotificationRequest,
    ) -> Result<(), ProviderError> {
        Err(ProviderError::Unsupported)
    }

    fn play_sound(&self, _name: &str) {}
}
