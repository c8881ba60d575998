//! Bringing the originating terminal window back to the front after a click.
//!
//! Matching is a heuristic: terminals usually put the working directory's
//! last component at the start of the window title, so the first window
//! whose title begins with it is raised. Nothing here can fail the run.

use crate::notification::CorrelationData;

pub mod macos;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("window control not available on this platform")]
    Unsupported,
    #[error("automation script failed: {0}")]
    Script(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Window-manager operations used by the resolver.
pub trait WindowManager {
    fn activate(&self, app: &str) -> Result<(), WindowError>;

    /// Titles of `app`'s windows, front to back.
    fn window_titles(&self, app: &str) -> Result<Vec<String>, WindowError>;

    /// Raises the window at `index` in the list from `window_titles`.
    fn raise_window(&self, app: &str, index: usize) -> Result<(), WindowError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowMatchQuery {
    pub title_prefix: String,
}

impl WindowMatchQuery {
    /// None for an absent or empty hint, or one with no final component.
    pub fn from_hint(hint: Option<&str>) -> Option<Self> {
        let hint = hint?;
        let last = hint.rsplit('/').next().unwrap_or(hint);
        if last.is_empty() {
            return None;
        }
        Some(Self {
            title_prefix: last.to_string(),
        })
    }

    pub fn first_match(&self, titles: &[String]) -> Option<usize> {
        titles
            .iter()
            .position(|title| title.starts_with(&self.title_prefix))
    }
}

/// Best effort: every failure is logged and swallowed.
pub fn resolve<W: WindowManager + ?Sized>(windows: &W, app: &str, correlation: &CorrelationData) {
    if let Err(err) = windows.activate(app) {
        tracing::warn!(%err, app, "failed to activate terminal");
    }

    let Some(query) = WindowMatchQuery::from_hint(correlation.cwd.as_deref()) else {
        tracing::debug!("no working directory hint, activated application only");
        return;
    };

    let titles = match windows.window_titles(app) {
        Ok(titles) => titles,
        Err(err) => {
            tracing::warn!(%err, app, "failed to list windows");
            return;
        }
    };

    match query.first_match(&titles) {
        Some(index) => {
            tracing::debug!(prefix = %query.title_prefix, index, "raising window");
            if let Err(err) = windows.raise_window(app, index) {
                tracing::warn!(%err, "failed to raise window");
            }
        }
        None => tracing::debug!(prefix = %query.title_prefix, "no window matched"),
    }
}

/// Maps `TERM_PROGRAM`-style names to the application to activate.
pub fn terminal_app_name(terminal: Option<&str>) -> Option<&'static str> {
    match terminal {
        Some(name) if name.eq_ignore_ascii_case("ghostty") => Some("Ghostty"),
        Some(name) if name.eq_ignore_ascii_case("iterm") => Some("iTerm"),
        Some(name) if name.eq_ignore_ascii_case("iterm.app") => Some("iTerm"),
        Some(name) if name.eq_ignore_ascii_case("terminal") => Some("Terminal"),
        Some(name) if name.eq_ignore_ascii_case("apple_terminal") => Some("Terminal"),
        Some(name) if name.eq_ignore_ascii_case("apple_terminal.app") => Some("Terminal"),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every call; `titles` is what enumeration returns.
    #[derive(Default)]
    pub(crate) struct FakeWindows {
        pub titles: Vec<String>,
        pub fail_listing: bool,
        pub fail_activate: bool,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeWindows {
        pub fn with_titles(titles: &[&str]) -> Self {
            Self {
                titles: titles.iter().map(|t| t.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl WindowManager for FakeWindows {
        fn activate(&self, app: &str) -> Result<(), WindowError> {
            self.calls.borrow_mut().push(format!("activate:{app}"));
            if self.fail_activate {
                return Err(WindowError::Script("activate failed".to_string()));
            }
            Ok(())
        }

        fn window_titles(&self, app: &str) -> Result<Vec<String>, WindowError> {
            self.calls.borrow_mut().push(format!("list:{app}"));
            if self.fail_listing {
                return Err(WindowError::Script("not allowed".to_string()));
            }
            Ok(self.titles.clone())
        }

        fn raise_window(&self, app: &str, index: usize) -> Result<(), WindowError> {
            self.calls.borrow_mut().push(format!("raise:{app}:{index}"));
            Ok(())
        }
    }

    fn hint(cwd: Option<&str>) -> CorrelationData {
        CorrelationData {
            cwd: cwd.map(str::to_string),
        }
    }

    #[test]
    fn query_uses_last_path_component() {
        let query = WindowMatchQuery::from_hint(Some("/Users/me/projects/widget-app")).unwrap();
        assert_eq!(query.title_prefix, "widget-app");
        let query = WindowMatchQuery::from_hint(Some("relative")).unwrap();
        assert_eq!(query.title_prefix, "relative");
    }

    #[test]
    fn no_query_for_empty_or_absent_hint() {
        assert_eq!(WindowMatchQuery::from_hint(None), None);
        assert_eq!(WindowMatchQuery::from_hint(Some("")), None);
        assert_eq!(WindowMatchQuery::from_hint(Some("/tmp/")), None);
    }

    #[test]
    fn first_prefix_match_wins_and_is_case_sensitive() {
        let query = WindowMatchQuery {
            title_prefix: "svc".to_string(),
        };
        let titles: Vec<String> = ["Svc — zsh", "other", "svc — zsh", "svc-two"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(query.first_match(&titles), Some(2));
        assert_eq!(query.first_match(&titles[..2]), None);
    }

    #[test]
    fn raises_matching_window() {
        let windows = FakeWindows::with_titles(&["notes — vim", "svc — zsh — 80x24"]);
        resolve(&windows, "Terminal", &hint(Some("/home/u/svc")));
        assert_eq!(
            windows.calls(),
            vec!["activate:Terminal", "list:Terminal", "raise:Terminal:1"]
        );
    }

    #[test]
    fn no_match_only_activates() {
        let windows = FakeWindows::with_titles(&["notes — vim"]);
        resolve(&windows, "Terminal", &hint(Some("/home/u/svc")));
        assert_eq!(windows.calls(), vec!["activate:Terminal", "list:Terminal"]);
    }

    #[test]
    fn missing_hint_only_activates() {
        for cwd in [None, Some("")] {
            let windows = FakeWindows::with_titles(&["svc"]);
            resolve(&windows, "iTerm", &hint(cwd));
            assert_eq!(windows.calls(), vec!["activate:iTerm"]);
        }
    }

    #[test]
    fn failures_are_swallowed() {
        let windows = FakeWindows {
            fail_activate: true,
            fail_listing: true,
            ..FakeWindows::default()
        };
        resolve(&windows, "Terminal", &hint(Some("/home/u/svc")));
        assert_eq!(windows.calls(), vec!["activate:Terminal", "list:Terminal"]);
    }

    #[test]
    fn maps_terminal_program_names() {
        assert_eq!(terminal_app_name(Some("ghostty")), Some("Ghostty"));
        assert_eq!(terminal_app_name(Some("iTerm.app")), Some("iTerm"));
        assert_eq!(terminal_app_name(Some("Apple_Terminal")), Some("Terminal"));
        assert_eq!(terminal_app_name(Some("vscode")), None);
        assert_eq!(terminal_app_name(None), None);
    }
}
