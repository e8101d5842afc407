//! Block-annotated rendering of disassembled function bodies.

use anyhow::Result;

use crate::binary::module::Module;
use crate::disasm::blocks::BasicBlockMap;
use crate::disasm::engine::{DecodedInstruction, Disassembler};

/// Width of the `mnemonic operand` field on instruction lines.
const OPERAND_WIDTH: usize = 38;
/// Width of the address label on block-boundary lines.
const LABEL_WIDTH: usize = 39;

fn to_address(n: u64) -> String {
    format!("0x{n:06x}")
}

fn to_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one function: a `name:` header, then the instruction lines.
///
/// A block boundary gets a right-padded address label line; boundaries
/// with recorded branch sources also carry a `from:` provenance note
/// listing the source addresses in discovery order. Each instruction
/// line pads the `mnemonic operand` field and trails with the
/// instruction's address and raw encoding in hex.
pub fn annotate_function(name: &str, instructions: &[DecodedInstruction]) -> String {
    let blocks = BasicBlockMap::build(instructions);
    let mut out = String::new();
    out.push_str(name);
    out.push_str(":\n");

    for instr in instructions {
        if blocks.is_boundary(instr.address) {
            let label = format!("{}:", to_address(instr.address));
            out.push(' ');
            out.push_str(&format!("{label:<LABEL_WIDTH$}"));
            let sources = blocks.sources(instr.address);
            if !sources.is_empty() {
                let from = sources
                    .iter()
                    .map(|s| to_address(*s))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!(
                    "; {} from: [{}]",
                    to_address(instr.address),
                    from
                ));
            }
            out.push('\n');
        }
        let field = format!("{} {}", instr.mnemonic, instr.op_str);
        out.push_str("  ");
        out.push_str(&format!("{field:<OPERAND_WIDTH$}"));
        out.push_str(&format!(
            "; {} {}\n",
            to_address(instr.address),
            to_bytes(&instr.bytes)
        ));
    }
    out
}

/// Annotate every function body of a scanned module, in definition
/// order. Bodies the engine has nothing for are rendered with a
/// placeholder note instead of failing the whole run.
pub fn annotate_module(
    module: &Module,
    bytes: &[u8],
    engine: &dyn Disassembler,
) -> Result<String> {
    let mut out = String::new();
    for (i, entry) in module.code_entries().iter().enumerate() {
        let name = module.function_label(i);
        let code = &bytes[entry.body_start..entry.body_end];
        let instructions = engine.disassemble(code, entry.body_start as u64)?;
        if instructions.is_empty() {
            out.push_str(&name);
            out.push_str(":\n  <no disassembly available>\n");
            continue;
        }
        out.push_str(&annotate_function(&name, &instructions));
    }
    Ok(out)
}
