//! Presentation layer: turns call outcomes into terminal text.
//!
//! Nothing here performs I/O; callers decide where the text goes.

use crate::client::{AmarsebaError, FailureReason};
use crate::domain::{SendSmsResponse, TrackSmsResponse, VendorResponse};

const NO_MESSAGE: &str = "No specific error message.";
const MISSING: &str = "-";

/// Render the outcome of a send, including one line per contact on success.
pub fn send_outcome(outcome: &Result<SendSmsResponse, AmarsebaError>) -> String {
    let mut lines = vec!["--- SMS Send API Response ---".to_owned()];

    match outcome {
        Ok(response) => {
            lines.push(pretty_json(response));
            lines.push(String::new());
            if response.is_success() {
                lines.push("SMS sending process initiated successfully!".to_owned());
                for item in response.data.iter().flatten() {
                    lines.push(format!(
                        "  Contact: {}, Status: {}, Message: {}, Track ID: {}",
                        or_missing(&item.contact),
                        or_missing(&item.status),
                        or_missing(&item.message),
                        or_missing(&item.track_id),
                    ));
                }
            } else {
                lines.push("Failed to initiate SMS sending.".to_owned());
                lines.push(error_message_line(response.message.as_deref()));
            }
        }
        Err(err) => {
            push_error(&mut lines, err);
            lines.push(String::new());
            lines.push("Failed to initiate SMS sending.".to_owned());
        }
    }

    lines.join("\n")
}

/// Render the outcome of a track query, including the delivery details on success.
pub fn track_outcome(outcome: &Result<TrackSmsResponse, AmarsebaError>) -> String {
    let mut lines = vec!["--- SMS Track API Response ---".to_owned()];

    match outcome {
        Ok(response) => {
            lines.push(pretty_json(response));
            lines.push(String::new());
            if response.is_success() {
                lines.push("SMS tracking successful!".to_owned());
                let data = response.data.clone().unwrap_or_default();
                lines.push(format!("  Track ID: {}", or_missing(&data.track_id)));
                lines.push(format!("  Contact: {}", or_missing(&data.contact)));
                lines.push(format!("  Sender: {}", or_missing(&data.sender)));
                lines.push(format!("  Text: {}", or_missing(&data.text)));
                lines.push(format!("  Cost: {}", or_missing(&data.cost)));
                lines.push(format!(
                    "  Is Masking: {}",
                    if data.is_masked() { "Yes" } else { "No" }
                ));
                lines.push(format!("  Status: {}", or_missing(&data.status)));
            } else {
                lines.push("Failed to track SMS.".to_owned());
                lines.push(error_message_line(response.message.as_deref()));
            }
        }
        Err(err) => {
            push_error(&mut lines, err);
            lines.push(String::new());
            lines.push("Failed to track SMS.".to_owned());
        }
    }

    lines.join("\n")
}

fn push_error(lines: &mut Vec<String>, err: &AmarsebaError) {
    lines.push(format!("{} ({})", reason_label(err.reason()), err));
    if let Some(body) = err.raw_body() {
        lines.push(format!("Response content: {body}"));
    }
}

fn reason_label(reason: FailureReason) -> &'static str {
    match reason {
        FailureReason::HttpError => "Request failed",
        FailureReason::InvalidJson => "Invalid JSON response",
        FailureReason::VendorReported => "Vendor reported failure",
    }
}

fn error_message_line(message: Option<&str>) -> String {
    let message = message.filter(|it| !it.trim().is_empty()).unwrap_or(NO_MESSAGE);
    format!("Error Message: {message}")
}

fn pretty_json<T>(response: &VendorResponse<T>) -> String {
    serde_json::to_string_pretty(&response.raw).unwrap_or_else(|_| response.raw.to_string())
}

fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}
