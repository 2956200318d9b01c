//! `coldcall transform <file>` – binary-mode call (raw upload).

use anyhow::{bail, Context, Result};
use coldcall_core::client::Client;
use coldcall_core::request::Request;
use std::path::Path;

pub fn run_transform(client: &Client, model: &str, input: &Path, out: &Path) -> Result<()> {
    let bytes =
        std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    if bytes.is_empty() {
        bail!("input file {} is empty", input.display());
    }
    let request = Request::Raw(bytes);
    super::deliver(client, model, &request, out)
}
