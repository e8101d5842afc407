use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "wascope",
    version,
    about = "WebAssembly module introspection and disassembly annotation"
)]
pub struct Args {
    /// Path to the module: a .wasm binary, or .wat/.wast text that is
    /// assembled first
    pub input: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// JSON dump produced by the external disassembly engine; enables
    /// the annotated disassembly blocks (text format only)
    #[arg(long)]
    pub disasm: Option<PathBuf>,

    /// Optional git commit hash for tool metadata
    #[arg(long)]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
