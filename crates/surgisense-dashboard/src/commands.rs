use std::path::Path;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

use surgisense_client::{ApiClient, Upload};
use surgisense_core::models::chat::{ChatMessage, ChatRole};
use surgisense_core::models::recovery::RecoveryProfile;
use surgisense_dashboard::config::{self, DashboardConfig};
use surgisense_dashboard::error::ViewError;
use surgisense_dashboard::render;
use surgisense_dashboard::state::DashboardState;

use crate::cli::{Cli, Command, ConfigCommand, OutputFormat};

pub async fn run(cli: Cli) -> eyre::Result<()> {
    let config = config::load_or_default()?;
    let api_base = config::resolve_api_base(cli.api_base.as_deref(), &config);
    let format = cli.format;

    match cli.command {
        Command::Classify { text } => classify(&text, format).await,
        Command::Dashboard => dashboard(&config, &api_base, format),
        Command::Config(command) => configure(command, config, format),
        Command::Scan { file } => {
            let state = DashboardState::new(config.recovery);
            scan(&state, &ApiClient::new(api_base)?, &file, format).await
        }
        Command::Digitize { file } => {
            let state = DashboardState::new(config.recovery);
            digitize(&state, &ApiClient::new(api_base)?, &file, format).await
        }
        Command::Wound { image } => {
            let state = DashboardState::new(config.recovery);
            wound(&state, &ApiClient::new(api_base)?, &image, format).await
        }
        Command::Transcribe { audio } => {
            let state = DashboardState::new(config.recovery);
            transcribe(&state, &ApiClient::new(api_base)?, &audio, format).await
        }
        Command::Chat { question } => {
            let state = DashboardState::new(config.recovery);
            chat(&state, &ApiClient::new(api_base)?, &question.join(" "), format).await
        }
    }
}

fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> eyre::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", text()),
    }
    Ok(())
}

async fn classify(text: &str, format: OutputFormat) -> eyre::Result<()> {
    let text = if text == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        text.to_string()
    };

    let assessment = surgisense_severity::classify(&text);
    emit(format, &assessment, || match &assessment {
        Some(assessment) => render::severity_card(assessment),
        None => "No severity score found.\n".to_string(),
    })
}

async fn scan(
    state: &DashboardState,
    api: &ApiClient,
    file: &Path,
    format: OutputFormat,
) -> eyre::Result<()> {
    state.scanner.select(Upload::from_path(file).await?).await?;
    state.scanner.scan(api).await?;
    let view = state.scanner.view().await;
    emit(format, &view, || render::scanner(&view))
}

async fn digitize(
    state: &DashboardState,
    api: &ApiClient,
    file: &Path,
    format: OutputFormat,
) -> eyre::Result<()> {
    let upload = Upload::from_path(file).await?;
    state.discharge.digitize(api, upload).await?;
    let view = state.discharge.view().await;
    emit(format, &view, || render::discharge(&view))
}

async fn wound(
    state: &DashboardState,
    api: &ApiClient,
    image: &Path,
    format: OutputFormat,
) -> eyre::Result<()> {
    state.wound.select(Upload::from_path(image).await?).await?;
    state.wound.analyze(api).await?;
    let view = state.wound.view().await;
    emit(format, &view, || render::wound(&view))
}

async fn transcribe(
    state: &DashboardState,
    api: &ApiClient,
    audio: &Path,
    format: OutputFormat,
) -> eyre::Result<()> {
    let recording = Upload::from_path(audio).await?;
    state.voice.submit(api, recording).await?;
    let view = state.voice.view().await;
    emit(format, &view, || render::voice(&view))
}

async fn chat(
    state: &DashboardState,
    api: &ApiClient,
    question: &str,
    format: OutputFormat,
) -> eyre::Result<()> {
    if !question.trim().is_empty() {
        state.chat.send(api, question).await?;
        let messages = state.chat.messages().await;
        return emit(format, &messages, || render::chat(&messages));
    }

    // Interactive: one question per line until EOF.
    let messages = state.chat.messages().await;
    print!("{}", render::chat(&messages));
    let mut seen = messages.len();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match state.chat.send(api, &line).await {
            Ok(()) | Err(ViewError::Remote { .. }) => {}
            Err(e) => return Err(e.into()),
        }
        let messages = state.chat.messages().await;
        // The question itself is already on the terminal.
        let replies: Vec<ChatMessage> = messages[seen..]
            .iter()
            .filter(|m| m.role != ChatRole::User)
            .cloned()
            .collect();
        print!("{}", render::chat(&replies));
        seen = messages.len();
    }
    Ok(())
}

fn dashboard(config: &DashboardConfig, api_base: &str, format: OutputFormat) -> eyre::Result<()> {
    #[derive(Serialize)]
    struct Summary<'a> {
        api_base: &'a str,
        recovery_day: Option<u32>,
        progress_percent: Option<u32>,
        recovery: Option<&'a RecoveryProfile>,
    }

    let today = jiff::Zoned::now().date();
    let summary = Summary {
        api_base,
        recovery_day: config.recovery.as_ref().map(|p| p.recovery_day(today)),
        progress_percent: config.recovery.as_ref().map(|p| p.progress_percent(today)),
        recovery: config.recovery.as_ref(),
    };

    emit(format, &summary, || {
        let header = match &config.recovery {
            Some(profile) => render::recovery_header(profile, today),
            None => "No patient configured. Run `surgisense config set-recovery`.\n".to_string(),
        };
        format!("{header}Backend: {api_base}\n")
    })
}

fn configure(
    command: ConfigCommand,
    mut config: DashboardConfig,
    format: OutputFormat,
) -> eyre::Result<()> {
    match command {
        ConfigCommand::Show => {
            let path = config::config_path()?;
            emit(format, &config, || {
                let mut out = format!("Config: {}\nBackend: {}\n", path.display(), config.api_base);
                if let Some(profile) = &config.recovery {
                    out.push_str(&format!(
                        "Patient: {} ({}, {} for {} days)\n",
                        profile.patient_name,
                        profile.surgery_type,
                        profile.surgery_date,
                        profile.total_days
                    ));
                }
                out
            })
        }
        ConfigCommand::SetApiBase { url } => {
            config.api_base = url;
            let path = config::save_config(&config)?;
            println!("Saved {}", path.display());
            Ok(())
        }
        ConfigCommand::SetRecovery {
            patient,
            surgery,
            date,
            days,
        } => {
            config.recovery = Some(RecoveryProfile::new(patient, surgery, &date, days)?);
            let path = config::save_config(&config)?;
            println!("Saved {}", path.display());
            Ok(())
        }
        ConfigCommand::Reset => {
            config::delete_config()?;
            println!("Configuration removed.");
            Ok(())
        }
    }
}
