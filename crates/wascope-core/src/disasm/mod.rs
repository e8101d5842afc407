pub mod annotate;
pub mod blocks;
pub mod engine;

pub use annotate::{annotate_function, annotate_module};
pub use engine::{DecodedInstruction, Disassembler, DumpDisassembler};
