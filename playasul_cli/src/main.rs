use std::{fs, path::PathBuf};

use anyhow::Context;
use beatmap_schema::SessionCreateRequest;
use clap::{Parser, Subcommand};
use playasul_core::gameplay::{evaluate_timing, score_for_judgement};
use playasul_core::{ServiceConfig, SessionService};
use tracing_subscriber::EnvFilter;

mod simulate;

const DEFAULT_COLOR: &str = "#FF3366";

#[derive(Debug, Parser)]
#[command(name = "playasul")]
#[command(about = "Deterministic beatmap generation and judgement CLI", long_about = None)]
struct Cli {
    /// JSON service config; defaults apply to missing fields.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a session and print its response JSON.
    Generate {
        #[arg(long)]
        url: String,
        #[arg(long)]
        seed: Option<u32>,
        #[arg(long, default_value = DEFAULT_COLOR)]
        color: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create a session, replay it, and check both beatmaps match.
    ReplayDemo {
        #[arg(long)]
        url: String,
        #[arg(long)]
        seed: Option<u32>,
    },
    /// Classify a timing offset (input time minus note time).
    Judge {
        #[arg(allow_negative_numbers = true)]
        diff_ms: f64,
    },
    /// Play a generated beatmap with scripted presses and print the result.
    Autoplay {
        #[arg(long)]
        url: String,
        #[arg(long)]
        seed: u32,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        offset_ms: f64,
        #[arg(long)]
        skip_every: Option<usize>,
        #[arg(long, default_value_t = 16.0)]
        frame_ms: f64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ServiceConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => ServiceConfig::default(),
    };
    let service = SessionService::with_memory_store(config);

    match cli.command {
        Command::Generate {
            url,
            seed,
            color,
            output,
        } => {
            let response = service
                .create_session(&SessionCreateRequest {
                    url: url.clone(),
                    color_hex: color,
                    seed,
                })
                .map_err(|e| anyhow::anyhow!(e.to_string()))
                .with_context(|| format!("session creation failed: {url}"))?;

            let json = serde_json::to_string_pretty(&response).context("failed to serialize session")?;
            match output {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("failed to write: {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        Command::ReplayDemo { url, seed } => {
            let original = service
                .create_session(&SessionCreateRequest {
                    url: url.clone(),
                    color_hex: DEFAULT_COLOR.to_string(),
                    seed,
                })
                .map_err(|e| anyhow::anyhow!(e.to_string()))
                .with_context(|| format!("session creation failed: {url}"))?;
            let replayed = service
                .replay(&original.session_id)
                .map_err(|e| anyhow::anyhow!(e.to_string()))
                .context("replay failed")?
                .context("replay seed missing")?;

            let identical = original.beatmap == replayed.beatmap;
            println!("original: {} (seed {})", original.session_id, original.seed);
            println!("replayed: {} (seed {})", replayed.session_id, replayed.seed);
            println!("identical beatmap: {identical}");
            if !identical {
                anyhow::bail!("replayed beatmap differs from original");
            }
        }
        Command::Judge { diff_ms } => {
            let judgement = evaluate_timing(diff_ms);
            let json = serde_json::json!({
                "diffMs": diff_ms,
                "judgement": judgement,
                "points": score_for_judgement(judgement),
            });
            println!("{json}");
        }
        Command::Autoplay {
            url,
            seed,
            offset_ms,
            skip_every,
            frame_ms,
        } => {
            let session = service
                .create_session(&SessionCreateRequest {
                    url: url.clone(),
                    color_hex: DEFAULT_COLOR.to_string(),
                    seed: Some(seed),
                })
                .map_err(|e| anyhow::anyhow!(e.to_string()))
                .with_context(|| format!("session creation failed: {url}"))?;
            let source = service
                .session(&session.session_id)
                .map(|record| record.url)
                .unwrap_or(url);

            let result = simulate::run_autoplay(
                &session,
                &source,
                simulate::AutoplayOptions {
                    offset_ms,
                    skip_every,
                    frame_ms,
                },
            );
            let json = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
            println!("{json}");
        }
    }

    Ok(())
}
