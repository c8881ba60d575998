use crate::error::NotifierError;
use crate::provider::{AuthorizationState, NotificationService};

/// Ok means alerts may be submitted. Any error here ends the run.
pub fn ensure_authorized<S: NotificationService + ?Sized>(
    service: &S,
) -> Result<(), NotifierError> {
    let state = match service.authorization_state() {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!(%err, "could not query authorization state");
            AuthorizationState::Unknown
        }
    };
    tracing::debug!(?state, "authorization state");

    match state {
        AuthorizationState::Authorized | AuthorizationState::Provisional => Ok(()),
        AuthorizationState::Denied => Err(NotifierError::PermissionDenied),
        AuthorizationState::NotDetermined | AuthorizationState::Unknown => request(service),
    }
}

fn request<S: NotificationService + ?Sized>(service: &S) -> Result<(), NotifierError> {
    match service.request_authorization() {
        Ok(true) => Ok(()),
        Ok(false) => Err(NotifierError::PermissionNotGranted),
        Err(err) => {
            tracing::warn!(%err, "authorization request failed");
            Err(NotifierError::PermissionNotGranted)
        }
    }
}
