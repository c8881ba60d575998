use crate::window::{WindowError, WindowManager};
use std::process::Command;

/// Drives System Events through `osascript`.
#[derive(Debug, Clone, Default)]
pub struct AppleScriptWindows;

impl AppleScriptWindows {
    fn run(&self, script: &str) -> Result<String, WindowError> {
        if !cfg!(target_os = "macos") {
            return Err(WindowError::Unsupported);
        }
        let output = Command::new("osascript").args(["-e", script]).output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WindowError::Script(stderr.trim().to_string()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl WindowManager for AppleScriptWindows {
    fn activate(&self, app: &str) -> Result<(), WindowError> {
        self.run(&activate_script(app)).map(|_| ())
    }

    fn window_titles(&self, app: &str) -> Result<Vec<String>, WindowError> {
        let output = self.run(&list_script(app))?;
        Ok(parse_titles(&output))
    }

    fn raise_window(&self, app: &str, index: usize) -> Result<(), WindowError> {
        self.run(&raise_script(app, index)).map(|_| ())
    }
}

fn activate_script(app: &str) -> String {
    format!("tell application \"{}\" to activate", escape_applescript(app))
}

fn list_script(app: &str) -> String {
    format!(
        "set AppleScript's text item delimiters to linefeed\n\
tell application \"System Events\" to set titles to name of every window of process \"{}\"\n\
return titles as text",
        escape_applescript(app)
    )
}

// AppleScript window indices are 1-based.
fn raise_script(app: &str, index: usize) -> String {
    format!(
        "tell application \"System Events\" to perform action \"AXRaise\" of window {} of process \"{}\"",
        index + 1,
        escape_applescript(app)
    )
}

// Positions must line up with AppleScript window numbers, so untitled
// windows stay in the list as empty strings.
fn parse_titles(output: &str) -> Vec<String> {
    let output = output
        .strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(output);
    if output.is_empty() {
        return Vec::new();
    }
    output.split('\n').map(str::to_string).collect()
}

fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
