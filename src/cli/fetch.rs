//! fetch command
//!
//! Parse → export credential → ensure directory → download → report.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::config;
use crate::fetcher::{self, DownloadRequest, Fetcher};
use crate::manifest;

/// Arguments for the fetch command
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Hub model identifier (e.g. "meta-llama/Llama-2-7b-hf")
    pub model_id: String,

    /// Local directory path to save the model
    pub save_path: PathBuf,

    /// Access token for gated/private repositories
    #[arg(long)]
    pub token: Option<String>,

    /// Repository revision (branch, tag, or commit hash)
    #[arg(long, default_value = "main")]
    pub revision: String,
}

/// Execute the fetch command
pub fn execute(args: &FetchArgs) -> Result<(), anyhow::Error> {
    println!("Downloading model: {}", args.model_id);
    println!("Save path: {}", args.save_path.display());

    if let Some(token) = &args.token {
        config::set_credential(token);
    }

    fetcher::ensure_directory(&args.save_path)?;

    let request = DownloadRequest {
        model_id: args.model_id.clone(),
        save_path: args.save_path.clone(),
        revision: args.revision.clone(),
        token: config::resolve_token(args.token.as_deref()),
    };

    let stdout = std::io::stdout();
    match download_and_report(request, &mut stdout.lock()) {
        Ok(()) => Ok(()),
        Err(e) => {
            println!("\n✗ Error downloading model: {e}");
            Err(e)
        }
    }
}

fn download_and_report<W: Write>(request: DownloadRequest, out: &mut W) -> anyhow::Result<()> {
    let save_path = request.save_path.clone();
    let resolved = Fetcher::new(request).fetch_snapshot()?;

    writeln!(
        out,
        "\n✓ Model successfully downloaded to: {}",
        resolved.display()
    )?;

    let files = manifest::list_downloaded(&save_path)?;
    manifest::report(out, &files)?;
    Ok(())
}
