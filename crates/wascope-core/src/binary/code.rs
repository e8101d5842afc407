//! Parser for the code section: body spans only, no opcode decoding.

use crate::binary::cursor::ByteCursor;
use crate::error::ParseError;

/// Byte span of one module-defined function body, exclusive of its
/// size prefix. Indexed by definition order; imported functions have
/// no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub body_start: usize,
    pub body_end: usize,
}

impl CodeEntry {
    pub fn size(&self) -> usize {
        self.body_end - self.body_start
    }
}

/// Read the body count, then per body a size prefix and `size` bytes
/// that are recorded as a span but never decoded.
pub fn parse_code_section(cursor: &mut ByteCursor<'_>) -> Result<Vec<CodeEntry>, ParseError> {
    let count = cursor.read_var_u32()?;
    let mut entries = Vec::new();
    for _ in 0..count {
        let size = cursor.read_var_u32()? as usize;
        let body_start = cursor.position();
        cursor.read_bytes(size)?;
        entries.push(CodeEntry {
            body_start,
            body_end: body_start + size,
        });
    }
    Ok(entries)
}
