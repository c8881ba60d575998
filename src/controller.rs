//! Lifecycle of one run: subscribe, decode, authorize, dispatch, race, resolve.

use crate::config::Settings;
use crate::dispatch::{self, PendingAlert};
use crate::error::NotifierError;
use crate::input::Decoded;
use crate::permission;
use crate::provider::NotificationService;
use crate::race::{Outcome, Race};
use crate::window::{self, WindowManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    Decoding,
    Authorizing,
    Dispatching,
    Racing,
    Idle,
    Resolving,
    Terminated,
}

/// What happened during a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub alert: Option<PendingAlert>,
    pub outcome: Outcome,
}

pub struct Controller<'a, S: ?Sized, W: ?Sized> {
    service: &'a S,
    windows: &'a W,
    settings: &'a Settings,
    state: State,
}

impl<'a, S, W> Controller<'a, S, W>
where
    S: NotificationService + ?Sized,
    W: WindowManager + ?Sized,
{
    pub fn new(service: &'a S, windows: &'a W, settings: &'a Settings) -> Self {
        Self {
            service,
            windows,
            settings,
            state: State::Start,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Drives the run to `Terminated`. `decode` is called only after the
    /// click subscription is in place.
    pub fn run<F>(&mut self, decode: F) -> Result<Report, NotifierError>
    where
        F: FnOnce() -> Decoded,
    {
        let race = Race::new();
        self.service.subscribe(race.sink());
        let presentation = self.service.foreground_presentation();
        tracing::debug!(
            banner = presentation.banner,
            sound = presentation.sound,
            list = presentation.list,
            "foreground presentation"
        );

        self.enter(State::Decoding);
        let decoded = decode();

        if !decoded.has_input {
            self.enter(State::Idle);
            let outcome = race.await_outcome(self.settings.idle_timeout);
            return Ok(self.finish(None, outcome));
        }

        self.enter(State::Authorizing);
        if let Err(err) = permission::ensure_authorized(self.service) {
            self.enter(State::Terminated);
            return Err(err);
        }

        self.enter(State::Dispatching);
        let mut request = decoded.request;
        if let Some(sound) = self.settings.sound.as_deref() {
            request = request.with_sound(sound);
        }
        let alert = match dispatch::dispatch(self.service, &request) {
            Ok(alert) => alert,
            Err(err) => {
                tracing::warn!(%err, "alert was not accepted");
                self.enter(State::Terminated);
                return Ok(Report {
                    alert: None,
                    outcome: Outcome::TimedOut,
                });
            }
        };

        self.enter(State::Racing);
        let outcome = race.await_outcome(self.settings.timeout);
        Ok(self.finish(Some(alert), outcome))
    }

    fn finish(&mut self, alert: Option<PendingAlert>, outcome: Outcome) -> Report {
        if let Outcome::Clicked(correlation) = &outcome {
            self.enter(State::Resolving);
            window::resolve(self.windows, &self.settings.terminal_app, correlation);
        }
        self.enter(State::Terminated);
        Report { alert, outcome }
    }

    fn enter(&mut self, next: State) {
        tracing::debug!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }
}
