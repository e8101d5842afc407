pub mod binary;
pub mod disasm;
pub mod error;
pub mod io;
pub mod report;

pub const TOOL_NAME: &str = "wascope";

use std::path::Path;

use anyhow::{Context, Result};

use crate::binary::module::{Module, parse_module};
use crate::io::ArtifactContext;
use crate::report::model::{Report, ToolInfo};
use crate::report::size::size_report;

/// The outcome of one full pipeline run. The artifact context keeps
/// the module bytes alive so the disassembly stage can slice function
/// bodies out of them.
#[derive(Debug)]
pub struct Analysis {
    pub artifact: ArtifactContext,
    pub module: Module,
    pub report: Report,
}

/// Run the pipeline for one input file: load it (assembling text input
/// when the extension says so), scan the section structure, and build
/// the code-size report.
pub fn inspect(path: &Path, tool: ToolInfo) -> Result<Analysis> {
    let artifact = io::load_artifact(path)?;
    let module = parse_module(&artifact.bytes)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let rows = size_report(&module);
    let report = Report::new(tool, artifact.artifact_info(), &module, &rows);
    Ok(Analysis {
        artifact,
        module,
        report,
    })
}
