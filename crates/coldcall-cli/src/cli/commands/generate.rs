//! `coldcall video|image <prompt>` – text-prompted generation.

use anyhow::{bail, Result};
use coldcall_core::client::Client;
use coldcall_core::request::Request;
use std::path::Path;

pub fn run_generate(client: &Client, model: &str, prompt: &str, out: &Path) -> Result<()> {
    // Prompt validation is about user intent, not transport; it stays here.
    if prompt.trim().is_empty() {
        bail!("prompt must not be empty");
    }
    let request = Request::Inputs(prompt.to_string());
    super::deliver(client, model, &request, out)
}
