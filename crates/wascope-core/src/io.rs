use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::{fs, path::Path};

use crate::report::model::{ArtifactHash, ArtifactInfo};

/// Raw input context for one analysis run.
///
/// Holds the exact module bytes analyzed and a cryptographic
/// fingerprint that identifies the artifact independently of any
/// filesystem metadata.
#[derive(Debug, Clone)]
pub struct ArtifactContext {
    /// Optional source path (informational only).
    pub path: Option<String>,

    /// The module bytes under analysis.
    pub bytes: Vec<u8>,

    /// Size of the analyzed bytes.
    pub size_bytes: u64,

    /// Hash algorithm used for fingerprinting.
    pub hash_alg: String,

    /// Hex-encoded hash of the analyzed bytes.
    pub hash_hex: String,
}

impl ArtifactContext {
    /// Public, report-facing artifact metadata. Borrows because the
    /// raw bytes stay alive for the disassembly stage.
    pub fn artifact_info(&self) -> ArtifactInfo {
        ArtifactInfo {
            path: self.path.clone(),
            size_bytes: self.size_bytes,
            hash: ArtifactHash {
                algorithm: self.hash_alg.clone(),
                value: self.hash_hex.clone(),
            },
        }
    }
}

/// Load a module for analysis.
///
/// Files with a text-format extension (`.wat`, `.wast`) go through the
/// assembler; everything else is read as a binary module. The
/// fingerprint is computed over the bytes actually analyzed, so a text
/// file and the binary it assembles to share one identity.
pub fn load_artifact(path: &Path) -> Result<ArtifactContext> {
    let bytes = if has_text_extension(path) {
        wat::parse_file(path)
            .with_context(|| format!("failed to assemble {}", path.display()))?
    } else {
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
    };

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hasher.finalize();

    Ok(ArtifactContext {
        path: Some(path.display().to_string()),
        size_bytes: bytes.len() as u64,
        bytes,
        hash_alg: "sha256".to_string(),
        hash_hex: hex::encode(digest),
    })
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wat") || ext.eq_ignore_ascii_case("wast"))
}
