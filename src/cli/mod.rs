//! CLI module for hf-fetch
//!
//! A single linear command: download one model repository into one
//! destination directory.

pub mod fetch;

use clap::Parser;

/// hf-fetch - Download Hugging Face model snapshots to a local directory
#[derive(Parser, Debug)]
#[command(name = "hf-fetch")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    HF_TOKEN               Access token for gated/private repositories
    HF_FETCH_LOG_LEVEL     Log level (default: warn)

EXAMPLES:
    hf-fetch meta-llama/Llama-2-7b-hf ./models/llama2-7b
    hf-fetch Qwen/Qwen2.5-7B-Instruct ./models/qwen2.5-7b --token hf_xxx
"#)]
pub struct Cli {
    /// Download arguments
    #[command(flatten)]
    pub fetch: fetch::FetchArgs,
}
