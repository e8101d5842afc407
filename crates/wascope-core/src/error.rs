use thiserror::Error;

/// Structural errors raised while walking a module's byte stream.
///
/// Everything here aborts the current parse, with two exceptions the
/// scanner handles itself (see `binary::module`): a custom section that
/// claims the "name" tag but fails validation, and a malformed import
/// section, are both downgraded to warnings so the remaining sections
/// still parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid magic number 0x{found:08x}, expected 0x{expected:08x} (\\0asm)")]
    InvalidMagic { found: u32, expected: u32 },

    #[error("unsupported module version {found} (accepted: {accepted:?})")]
    UnsupportedVersion {
        found: u32,
        accepted: &'static [u32],
    },

    #[error("truncated input: needed {needed} byte(s) at offset {offset}, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("malformed varuint32 at offset {offset}: value does not fit in 32 bits")]
    MalformedVarint { offset: usize },

    #[error("invalid name section: {reason}")]
    InvalidNameSection { reason: String },

    #[error("invalid import section: {reason}")]
    InvalidImportSection { reason: String },
}
