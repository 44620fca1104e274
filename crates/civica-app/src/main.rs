//! Civica application binary - composition root.
//!
//! Ties together all Civica crates into a single executable:
//! 1. Load configuration from TOML
//! 2. Build the encyclopedia lookup client
//! 3. Wire the session assistant (router + extractor + formatter + log)
//! 4. Run one of three surfaces: interactive prompt, one-shot question,
//!    or the axum REST API server

mod cli;

use std::io::{BufRead, Write};
use std::sync::Arc;

use clap::Parser;

use civica_api::AppState;
use civica_chat::Assistant;
use civica_core::config::CivicaConfig;
use civica_lookup::{LookupService, MediaWikiClient};
use civica_speech::{MockSpeechService, SpeechService};

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config first so its log level can seed the filter.
    let config_file = args.resolve_config_path();
    let config = CivicaConfig::load_or_default(&config_file);

    // Tracing.
    let log_level = args
        .resolve_log_level()
        .unwrap_or_else(|| config.general.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Civica v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration loaded");

    // Collaborators.
    let lookup: Arc<dyn LookupService> = Arc::new(MediaWikiClient::new(config.lookup.clone())?);
    let speech: Arc<dyn SpeechService> = Arc::new(MockSpeechService::from_config(&config.speech));
    let assistant = Assistant::new(&config, lookup);

    if args.serve {
        let port = args.resolve_port(config.api.port);
        let state = AppState::new(assistant, speech);
        civica_api::start_server(port, state).await?;
        return Ok(());
    }

    if let Some(question) = args.ask {
        let answer = assistant.handle_message(&question).await?;
        println!("{}", answer);
        return Ok(());
    }

    run_prompt(assistant, speech).await
}

/// Interactive prompt: one question per line, with a few session commands.
async fn run_prompt(
    assistant: Assistant,
    speech: Arc<dyn SpeechService>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Civica — ask about sustainability, infrastructure, or your city.");
    println!("Commands: :voice, :transcript, :clear, :quit");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();

        match line {
            "" => continue,
            ":quit" | ":q" => break,
            ":clear" => {
                assistant.clear()?;
                println!("Session cleared.");
            }
            ":transcript" => {
                for turn in assistant.rendered()? {
                    let speaker = if turn.is_user { "you" } else { "bot" };
                    println!("[{}] {}", speaker, turn.text);
                }
            }
            ":voice" => {
                let transcript = speech.capture().await;
                match assistant.handle_transcript(&transcript).await? {
                    Some(answer) => {
                        println!("You said: {}", transcript);
                        println!("{}", answer);
                    }
                    None => println!("Sorry, I could not understand the audio."),
                }
            }
            question => match assistant.handle_message(question).await {
                Ok(answer) => println!("{}", answer),
                Err(e) => println!("{}", e),
            },
        }
    }

    Ok(())
}
