//! CLI for the coldcall inference client.

mod commands;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use coldcall_core::client::Client;
use coldcall_core::config;
use std::path::PathBuf;

use commands::{run_generate, run_transform};

/// Default model endpoints for the generate subcommands.
pub const DEFAULT_VIDEO_MODEL: &str = "ali-vilab/text-to-video-ms-1.7b";
pub const DEFAULT_IMAGE_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";

/// Top-level CLI for the coldcall inference client.
#[derive(Debug, Parser)]
#[command(name = "coldcall")]
#[command(about = "coldcall: cold-start-aware client for hosted inference endpoints", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate a video from a text prompt.
    Video {
        /// Prompt text (English).
        prompt: String,

        /// Model endpoint identifier.
        #[arg(long, default_value = DEFAULT_VIDEO_MODEL)]
        model: String,

        /// Output file for the artifact bytes.
        #[arg(long, default_value = "out.mp4")]
        out: PathBuf,
    },

    /// Generate an image from a text prompt.
    Image {
        /// Prompt text.
        prompt: String,

        /// Model endpoint identifier.
        #[arg(long, default_value = DEFAULT_IMAGE_MODEL)]
        model: String,

        /// Output file for the artifact bytes.
        #[arg(long, default_value = "out.png")]
        out: PathBuf,
    },

    /// Send a binary payload (e.g. an input image) to a model endpoint.
    Transform {
        /// Input file uploaded as the raw request body.
        input: PathBuf,

        /// Model endpoint identifier.
        #[arg(long)]
        model: String,

        /// Output file for the artifact bytes.
        #[arg(long, default_value = "out.bin")]
        out: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let Some(token) = config::api_token() else {
            bail!("no API credential found; set COLDCALL_TOKEN (or HF_TOKEN) and retry");
        };
        let client = Client::from_config(&cfg, token);

        match cli.command {
            CliCommand::Video { prompt, model, out } => {
                run_generate(&client, &model, &prompt, &out)?;
            }
            CliCommand::Image { prompt, model, out } => {
                run_generate(&client, &model, &prompt, &out)?;
            }
            CliCommand::Transform { input, model, out } => {
                run_transform(&client, &model, &input, &out)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
