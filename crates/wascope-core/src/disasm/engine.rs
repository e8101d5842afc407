//! The external disassembly engine boundary.
//!
//! wascope never decodes machine code itself: the engine is handed a
//! raw code buffer and a base address and returns a complete, ordered
//! instruction list before annotation proceeds.

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One instruction as decoded by the external engine. This is the
/// interchange record at the collaborator boundary; ownership is
/// transient, scoped to rendering a single function body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecodedInstruction {
    /// Absolute offset within the module's code segment.
    pub address: u64,
    pub mnemonic: String,
    /// Formatted operand field, e.g. `"0x1f"` for a direct jump.
    pub op_str: String,
    /// Raw encoding.
    pub bytes: Vec<u8>,
}

/// The disassembly engine, injected so the annotator can be exercised
/// without a real decoder.
pub trait Disassembler {
    /// Decode `code` into an ordered instruction list. `base_address`
    /// is the absolute address of `code[0]`.
    fn disassemble(&self, code: &[u8], base_address: u64) -> Result<Vec<DecodedInstruction>>;
}

/// Everything the engine produced for a single function body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDump {
    pub base_address: u64,
    pub instructions: Vec<DecodedInstruction>,
}

/// Engine output loaded from disk and served back by base address.
///
/// The real engine runs out of process; its dump (a JSON array of
/// [`FunctionDump`] records) stands in for it at this boundary. A body
/// with no matching record yields an empty instruction list.
#[derive(Debug, Clone, Default)]
pub struct DumpDisassembler {
    by_base: HashMap<u64, Vec<DecodedInstruction>>,
}

impl DumpDisassembler {
    pub fn from_json(json: &str) -> Result<Self> {
        let dumps: Vec<FunctionDump> = serde_json::from_str(json)?;
        Ok(Self {
            by_base: dumps
                .into_iter()
                .map(|dump| (dump.base_address, dump.instructions))
                .collect(),
        })
    }
}

impl Disassembler for DumpDisassembler {
    fn disassemble(&self, _code: &[u8], base_address: u64) -> Result<Vec<DecodedInstruction>> {
        Ok(self.by_base.get(&base_address).cloned().unwrap_or_default())
    }
}
