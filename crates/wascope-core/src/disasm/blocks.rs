//! Basic-block reconstruction over a linear instruction stream.
//!
//! Boundaries are branch targets and the fallthrough address after
//! each branch. The map is built fresh per function and discarded
//! after rendering.

use std::collections::HashMap;

use crate::disasm::engine::DecodedInstruction;

/// x86 jump mnemonics that terminate a basic block.
pub const X86_JUMP_MNEMONICS: [&str; 31] = [
    "jmp", "ja", "jae", "jb", "jbe", "jc", "je", "jg", "jge", "jl", "jle", "jna", "jnae", "jnb",
    "jnbe", "jnc", "jne", "jng", "jnge", "jnl", "jnle", "jno", "jnp", "jns", "jnz", "jo", "jp",
    "jpe", "jpo", "js", "jz",
];

pub fn is_branch(instr: &DecodedInstruction) -> bool {
    X86_JUMP_MNEMONICS.contains(&instr.mnemonic.as_str())
}

/// Parse an operand field as a direct branch target. Accepts decimal
/// and `0x`-prefixed hex; anything else (register operands, indirect
/// jumps) means the instruction contributes no target.
pub fn branch_target(op_str: &str) -> Option<u64> {
    let token = op_str.trim().split([',', ' ']).next()?;
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else {
        token.parse().ok()
    }
}

/// Map from block-start address to the branch sources that target it,
/// in discovery order.
#[derive(Debug, Default)]
pub struct BasicBlockMap {
    blocks: HashMap<u64, Vec<u64>>,
}

impl BasicBlockMap {
    /// Single pass over the stream: record every parseable branch
    /// target with its source address, and mark the address after each
    /// branch as a fallthrough boundary. Fallthrough registration
    /// never erases sources a branch already contributed.
    pub fn build(instructions: &[DecodedInstruction]) -> Self {
        let mut map = Self::default();
        for (i, instr) in instructions.iter().enumerate() {
            if !is_branch(instr) {
                continue;
            }
            if let Some(target) = branch_target(&instr.op_str) {
                map.blocks.entry(target).or_default().push(instr.address);
            }
            if let Some(next) = instructions.get(i + 1) {
                map.blocks.entry(next.address).or_default();
            }
        }
        map
    }

    pub fn is_boundary(&self, address: u64) -> bool {
        self.blocks.contains_key(&address)
    }

    /// Branch sources recorded for `address`, in discovery order.
    pub fn sources(&self, address: u64) -> &[u64] {
        self.blocks
            .get(&address)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
