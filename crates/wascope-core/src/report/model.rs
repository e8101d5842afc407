use serde::{Deserialize, Serialize};

use crate::binary::module::Module;
use crate::binary::section::Section;
use crate::report::size::FunctionSize;

/// Top-level report: the stable JSON contract for `--format json`.
/// It must stay deterministic for identical input artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub tool: ToolInfo,
    pub artifact: ArtifactInfo,
    pub module: ModuleInfo,
    pub code: CodeInfo,
}

impl Report {
    /// Assemble a report from pipeline outputs. `rows` must already be
    /// in final (descending) order.
    pub fn new(tool: ToolInfo, artifact: ArtifactInfo, module: &Module, rows: &[FunctionSize]) -> Self {
        let sections = module
            .sections
            .iter()
            .map(|section| {
                let header = section.header();
                SectionInfo {
                    id: header.id,
                    kind: header
                        .section_id()
                        .map(|id| id.name().to_string())
                        .unwrap_or_else(|| "unknown".to_string()),
                    offset: header.offset,
                    payload_len: header.payload_len,
                    name: match section {
                        Section::Custom { name, .. } => Some(name.clone()),
                        Section::Name { .. } => Some("name".to_string()),
                        _ => None,
                    },
                }
            })
            .collect();

        Self {
            tool,
            artifact,
            module: ModuleInfo {
                version: module.version,
                function_import_count: module.function_import_count,
                sections,
                warnings: module.warnings.clone(),
            },
            code: CodeInfo {
                total_bytes: rows.iter().map(|r| r.size as u64).sum(),
                functions: rows
                    .iter()
                    .map(|r| FunctionSizeInfo {
                        name: r.name.clone(),
                        size_bytes: r.size as u64,
                        percent: r.percent,
                    })
                    .collect(),
            },
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
}

/// Artifact metadata bound to this report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub path: Option<String>,
    pub size_bytes: u64,
    pub hash: ArtifactHash,
}

/// Cryptographic artifact fingerprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactHash {
    pub algorithm: String,
    pub value: String,
}

/// Structural facts about the scanned module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub version: u32,
    pub function_import_count: u32,
    pub sections: Vec<SectionInfo>,
    pub warnings: Vec<String>,
}

/// One scanned section, in encounter order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionInfo {
    pub id: u8,
    pub kind: String,
    pub offset: usize,
    pub payload_len: u32,
    /// Custom sections only.
    pub name: Option<String>,
}

/// Code-size summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeInfo {
    pub total_bytes: u64,
    pub functions: Vec<FunctionSizeInfo>,
}

/// One size-report row, largest function first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSizeInfo {
    pub name: String,
    pub size_bytes: u64,
    pub percent: f64,
}
