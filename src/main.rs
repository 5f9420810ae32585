use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use amarseba::{
    AmarsebaClient, ApiKey, ApiSecret, Contact, Credentials, MessageText, SendSms, TrackId,
    TrackSms, VendorResponse, render,
};

mod menu;

#[derive(Parser)]
#[command(name = "amarseba-sms", version)]
#[command(about = "Send and track SMS through the e-amarseba bulk-SMS API")]
struct Cli {
    /// Vendor application key
    #[arg(
        long,
        env = "SMS_API_KEY",
        default_value = ApiKey::PLACEHOLDER,
        hide_env_values = true,
        hide_default_value = true
    )]
    api_key: String,

    /// Vendor application secret
    #[arg(
        long,
        env = "SMS_API_SECRET",
        default_value = ApiSecret::PLACEHOLDER,
        hide_env_values = true,
        hide_default_value = true
    )]
    api_secret: String,

    /// Override the send-sms endpoint URL
    #[arg(long, env = "SMS_SEND_ENDPOINT")]
    send_endpoint: Option<String>,

    /// Override the track-sms endpoint URL
    #[arg(long, env = "SMS_TRACK_ENDPOINT")]
    track_endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Send one message to a comma-separated list of contacts
    Send {
        /// Contacts, e.g. 01712345678,01898765432
        #[arg(long)]
        to: String,

        /// Message text (1-390 characters)
        #[arg(long)]
        text: String,
    },
    /// Query delivery status for a track id
    Track {
        /// Track id returned by a previous send
        track_id: String,
    },
    /// Interactive menu (default)
    Menu,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing();

    let credentials = Credentials::new(cli.api_key, cli.api_secret);
    if credentials.is_placeholder() {
        tracing::warn!(
            "SMS_API_KEY / SMS_API_SECRET are unset or still placeholders; \
             sending and tracking will likely fail"
        );
    }

    let mut builder = AmarsebaClient::builder(credentials)
        .timeout(Duration::from_secs(cli.timeout_secs))
        .user_agent(concat!("amarseba-sms/", env!("CARGO_PKG_VERSION")));
    if let Some(endpoint) = cli.send_endpoint {
        builder = builder.send_endpoint(endpoint);
    }
    if let Some(endpoint) = cli.track_endpoint {
        builder = builder.track_endpoint(endpoint);
    }
    let client = builder.build().context("failed to configure SMS client")?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Send { to, text } => {
            let contacts = Contact::parse_list(&to).context("invalid --to")?;
            let text = MessageText::new(text).context("invalid --text")?;
            let request = SendSms::validated(contacts, text)?;

            let outcome = client.send_sms(&request).await;
            println!("{}", render::send_outcome(&outcome));
            Ok(exit_code(&outcome))
        }
        Command::Track { track_id } => {
            let request = TrackSms::from(TrackId::new(track_id).context("invalid track id")?);

            let outcome = client.track_sms(&request).await;
            println!("{}", render::track_outcome(&outcome));
            Ok(exit_code(&outcome))
        }
        Command::Menu => {
            let stdin = io::stdin();
            menu::run(&client, stdin.lock(), io::stdout().lock())
                .await
                .context("terminal I/O failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn exit_code<T, E>(outcome: &Result<VendorResponse<T>, E>) -> ExitCode {
    if succeeded(outcome) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn succeeded<T, E>(outcome: &Result<VendorResponse<T>, E>) -> bool {
    matches!(outcome, Ok(response) if response.is_success())
}
