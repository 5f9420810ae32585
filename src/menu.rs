//! Interactive menu loop: collects and validates input, then renders each outcome.

use std::io::{self, BufRead, Write};

use amarseba::{
    AmarsebaClient, Contact, MessageText, SendSms, TrackId, TrackSms, ValidationError, render,
};

enum Flow {
    Continue,
    Exit,
}

/// Run the menu until the user picks "Exit" or input ends.
///
/// One request at a time: each call is awaited before the next prompt.
pub async fn run<R, W>(client: &AmarsebaClient, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output)?;
        writeln!(output, "--- SMS Service Menu ---")?;
        writeln!(output, "1. Send SMS")?;
        writeln!(output, "2. Track SMS")?;
        writeln!(output, "3. Exit")?;

        let Some(choice) = prompt(&mut input, &mut output, "Enter your choice (1-3): ")? else {
            break;
        };

        let flow = match choice.trim() {
            "1" => send(client, &mut input, &mut output).await?,
            "2" => track(client, &mut input, &mut output).await?,
            "3" => Flow::Exit,
            _ => {
                writeln!(output, "Invalid choice. Please enter 1, 2, or 3.")?;
                Flow::Continue
            }
        };
        if let Flow::Exit = flow {
            break;
        }
    }

    writeln!(output, "Exiting program. Goodbye!")?;
    output.flush()
}

async fn send<R, W>(client: &AmarsebaClient, input: &mut R, output: &mut W) -> io::Result<Flow>
where
    R: BufRead,
    W: Write,
{
    let Some(line) = prompt(
        input,
        output,
        "Enter contacts (comma-separated, e.g., 01712345678,01898765432): ",
    )?
    else {
        return Ok(Flow::Exit);
    };
    let Ok(contacts) = Contact::parse_list(&line) else {
        writeln!(output, "No valid contacts entered. Please try again.")?;
        return Ok(Flow::Continue);
    };

    let prompt_text = format!(
        "Enter message text (max {} chars): ",
        MessageText::MAX_CHARS
    );
    let Some(line) = prompt(input, output, &prompt_text)? else {
        return Ok(Flow::Exit);
    };
    let text = match MessageText::new(line) {
        Ok(text) => text,
        Err(ValidationError::TooLong { max, actual, .. }) => {
            writeln!(
                output,
                "Message too long ({actual} chars). Max is {max}. Please shorten your message."
            )?;
            return Ok(Flow::Continue);
        }
        Err(_) => {
            writeln!(output, "Message text cannot be empty. Please try again.")?;
            return Ok(Flow::Continue);
        }
    };

    let request = match SendSms::validated(contacts, text) {
        Ok(request) => request,
        Err(err) => {
            writeln!(output, "{err}. Please try again.")?;
            return Ok(Flow::Continue);
        }
    };

    let outcome = client.send_sms(&request).await;
    writeln!(output)?;
    writeln!(output, "{}", render::send_outcome(&outcome))?;
    Ok(Flow::Continue)
}

async fn track<R, W>(client: &AmarsebaClient, input: &mut R, output: &mut W) -> io::Result<Flow>
where
    R: BufRead,
    W: Write,
{
    let Some(line) = prompt(input, output, "Enter the Track ID of the SMS to query: ")? else {
        return Ok(Flow::Exit);
    };
    let Ok(track_id) = TrackId::new(line) else {
        writeln!(output, "Track ID cannot be empty. Please try again.")?;
        return Ok(Flow::Continue);
    };

    let outcome = client.track_sms(&TrackSms::from(track_id)).await;
    writeln!(output)?;
    writeln!(output, "{}", render::track_outcome(&outcome))?;
    Ok(Flow::Continue)
}

/// Print `label`, then read one line without its line terminator. `None` means end of input.
fn prompt<R, W>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use amarseba::Credentials;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn offline_client() -> AmarsebaClient {
        AmarsebaClient::builder(Credentials::new("key", "secret"))
            .endpoint_base("http://127.0.0.1:9")
            .build()
            .unwrap()
    }

    async fn run_menu(client: &AmarsebaClient, script: &str) -> String {
        let mut output = Vec::new();
        run(client, Cursor::new(script.as_bytes()), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn exit_choice_ends_loop() {
        let output = run_menu(&offline_client(), "3\n").await;
        assert!(output.contains("--- SMS Service Menu ---"));
        assert!(output.ends_with("Exiting program. Goodbye!\n"));
    }

    #[tokio::test]
    async fn end_of_input_ends_loop() {
        let output = run_menu(&offline_client(), "").await;
        assert!(output.ends_with("Exiting program. Goodbye!\n"));
    }

    #[tokio::test]
    async fn invalid_choice_reprompts() {
        let output = run_menu(&offline_client(), "9\n3\n").await;
        assert!(output.contains("Invalid choice. Please enter 1, 2, or 3."));
        assert_eq!(output.matches("--- SMS Service Menu ---").count(), 2);
    }

    #[tokio::test]
    async fn send_rejects_blank_contacts_before_calling_vendor() {
        let output = run_menu(&offline_client(), "1\n , ,\n3\n").await;
        assert!(output.contains("No valid contacts entered. Please try again."));
        assert!(!output.contains("Enter message text"));
    }

    #[tokio::test]
    async fn send_rejects_empty_and_long_text() {
        let output = run_menu(&offline_client(), "1\n017\n\n3\n").await;
        assert!(output.contains("Message text cannot be empty. Please try again."));

        let script = format!("1\n017\n{}\n3\n", "a".repeat(391));
        let output = run_menu(&offline_client(), &script).await;
        assert!(output.contains("Message too long (391 chars). Max is 390."));
        assert!(!output.contains("SMS Send API Response"));
    }

    #[tokio::test]
    async fn track_rejects_blank_id() {
        let output = run_menu(&offline_client(), "2\n   \n3\n").await;
        assert!(output.contains("Track ID cannot be empty. Please try again."));
    }

    #[tokio::test]
    async fn send_flow_posts_to_vendor_and_renders_result() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/send-sms")
                    .header("x-app-key", "key")
                    .header("x-app-secret", "secret")
                    .json_body(json!({
                        "contacts": ["01712345678", "01898765432"],
                        "text": "hello there",
                        "is_masking": false,
                        "masking_name": null,
                    }));
                then.status(200)
                    .header("content-type", "application/json")
                    .body(
                        r#"{"success": true, "message": "ok", "data": [
                            {"contact": "01712345678", "status": "sent", "message": "queued", "track_id": "T1"},
                            {"contact": "01898765432", "status": "sent", "message": "queued", "track_id": "T2"}
                        ]}"#,
                    );
            })
            .await;

        let client = AmarsebaClient::builder(Credentials::new("key", "secret"))
            .endpoint_base(server.base_url())
            .build()
            .unwrap();

        let output = run_menu(&client, "1\n 01712345678 , 01898765432\nhello there\n3\n").await;
        mock.assert_async().await;
        assert!(output.contains("SMS sending process initiated successfully!"));
        assert!(output.contains("Track ID: T1"));
        assert!(output.contains("Track ID: T2"));
    }

    #[tokio::test]
    async fn track_flow_renders_http_failure_and_keeps_running() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/track-sms");
                then.status(500).body("upstream down");
            })
            .await;

        let client = AmarsebaClient::builder(Credentials::new("key", "secret"))
            .endpoint_base(server.base_url())
            .build()
            .unwrap();

        let output = run_menu(&client, "2\nT1\n3\n").await;
        assert!(output.contains("Request failed (unexpected HTTP status: 500)"));
        assert!(output.contains("Response content: upstream down"));
        assert!(output.contains("Failed to track SMS."));
        assert!(output.ends_with("Exiting program. Goodbye!\n"));
    }
}
