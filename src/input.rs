//! Decoding of the optional JSON event piped on stdin.

use crate::notification::NotificationRequest;
use serde_json::Value;
use std::io::Read;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub request: NotificationRequest,
    pub has_input: bool,
}

impl Decoded {
    fn defaults() -> Self {
        Self {
            request: NotificationRequest::default(),
            has_input: false,
        }
    }
}

/// Reads stdin to end unless it is a terminal.
pub fn decode_stdin() -> Decoded {
    if stdin_is_tty() {
        tracing::debug!("stdin is a terminal, skipping payload read");
        return Decoded::defaults();
    }

    let mut buf = Vec::new();
    if let Err(err) = std::io::stdin().read_to_end(&mut buf) {
        tracing::warn!(%err, "failed to read stdin, using defaults");
        return Decoded::defaults();
    }
    decode_bytes(&buf)
}

pub fn decode_bytes(buf: &[u8]) -> Decoded {
    if buf.is_empty() {
        return Decoded::defaults();
    }

    let payload = match serde_json::from_slice::<Value>(buf) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::debug!("stdin payload is not a JSON object");
            return Decoded::defaults();
        }
        Err(err) => {
            tracing::debug!(%err, "stdin payload is not valid JSON");
            return Decoded::defaults();
        }
    };

    let mut request = NotificationRequest::default();
    if let Some(message) = payload.get("message").and_then(|v| v.as_str()) {
        request.body = message.to_string();
    }
    if let Some(ntype) = payload.get("notification_type").and_then(|v| v.as_str()) {
        request.title = format_notification_type(ntype);
    }
    if let Some(cwd) = payload.get("cwd").and_then(|v| v.as_str()) {
        request.working_directory_hint = Some(cwd.to_string());
    }

    Decoded {
        request,
        has_input: true,
    }
}

/// `build_finished` -> `Build Finished`.
pub fn format_notification_type(ntype: &str) -> String {
    ntype
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn stdin_is_tty() -> bool {
    #[cfg(unix)]
    unsafe {
        return libc::isatty(libc::STDIN_FILENO) == 1;
    }
    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_request() -> NotificationRequest {
        NotificationRequest::default()
    }

    #[test]
    fn empty_input_yields_defaults() {
        let decoded = decode_bytes(b"");
        assert!(!decoded.has_input);
        assert_eq!(decoded.request, default_request());
    }

    #[test]
    fn malformed_inputs_yield_defaults() {
        let cases: &[&[u8]] = &[
            b"not json",
            b"{\"message\": ",
            b"[1, 2, 3]",
            b"\"just a string\"",
            b"42",
            b"null",
            &[0xff, 0xfe, 0x00],
        ];
        for case in cases {
            let decoded = decode_bytes(case);
            assert!(!decoded.has_input, "input {:?}", String::from_utf8_lossy(case));
            assert_eq!(decoded.request, default_request());
        }
    }

    #[test]
    fn extracts_all_fields() {
        let decoded = decode_bytes(
            br#"{"message":"Build complete","notification_type":"ci_run","cwd":"/home/u/svc"}"#,
        );
        assert!(decoded.has_input);
        assert_eq!(decoded.request.title, "Ci Run");
        assert_eq!(decoded.request.body, "Build complete");
        assert_eq!(decoded.request.sound_name, "Glass");
        assert_eq!(
            decoded.request.working_directory_hint.as_deref(),
            Some("/home/u/svc")
        );
    }

    #[test]
    fn wrong_shaped_fields_are_ignored() {
        let decoded =
            decode_bytes(br#"{"message": 7, "notification_type": ["x"], "cwd": null, "extra": 1}"#);
        assert!(decoded.has_input);
        assert_eq!(decoded.request, default_request());
    }

    #[test]
    fn empty_object_counts_as_input() {
        let decoded = decode_bytes(b"{}");
        assert!(decoded.has_input);
        assert_eq!(decoded.request, default_request());
    }

    #[test]
    fn formats_notification_types() {
        assert_eq!(format_notification_type("build_finished"), "Build Finished");
        assert_eq!(format_notification_type("done"), "Done");
        assert_eq!(format_notification_type("idle_prompt"), "Idle Prompt");
        assert_eq!(format_notification_type("permission_prompt_now"), "Permission Prompt Now");
        assert_eq!(format_notification_type("a__b"), "A B");
    }
}
