//! Subcommand implementations.

mod generate;
mod transform;

pub use generate::run_generate;
pub use transform::run_transform;

use anyhow::{Context, Result};
use coldcall_core::client::Client;
use coldcall_core::endpoint::Endpoint;
use coldcall_core::request::Request;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

/// Runs the call with a progress printer and writes the artifact to `out`.
fn deliver(client: &Client, model: &str, request: &Request, out: &Path) -> Result<()> {
    let endpoint = Endpoint::new(model);

    let (tx, rx) = mpsc::channel();
    let printer = thread::spawn(move || {
        for notice in rx {
            eprintln!("{}", notice);
        }
    });

    let result = client.call_with(&endpoint, request, Some(&tx), None);
    drop(tx);
    let _ = printer.join();

    let bytes = result.with_context(|| format!("call to '{}' failed", model))?;
    std::fs::write(out, &bytes).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {} bytes to {}", bytes.len(), out.display());
    Ok(())
}
