use anyhow::{Context, Result, bail};
use clap::Parser;

use wascope_core::disasm::{DumpDisassembler, annotate_module};
use wascope_core::report::{model::ToolInfo, render};

mod args;

fn main() -> Result<()> {
    let args = args::Args::parse();

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: args.commit.clone(),
    };

    let analysis = wascope_core::inspect(&args.input, tool)?;

    for warning in &analysis.module.warnings {
        eprintln!("warning: {warning}");
    }

    let mut output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&analysis.report)?,
        args::OutputFormat::Text => render::render_text(&analysis.report),
    };

    if let Some(dump_path) = &args.disasm {
        if matches!(args.format, args::OutputFormat::Json) {
            bail!("--disasm requires --format text");
        }
        let dump = std::fs::read_to_string(dump_path)
            .with_context(|| format!("failed to read engine dump {}", dump_path.display()))?;
        let engine = DumpDisassembler::from_json(&dump)
            .with_context(|| format!("failed to parse engine dump {}", dump_path.display()))?;
        output.push_str(&annotate_module(
            &analysis.module,
            &analysis.artifact.bytes,
            &engine,
        )?);
    }

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    Ok(())
}
