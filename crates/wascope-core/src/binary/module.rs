//! Top-level section scanner.
//!
//! A single linear pass: validate the 8-byte preamble, then read
//! (id, payload length) pairs and dispatch to the specialized parsers
//! for custom "name", code and import sections. After every section,
//! parsed or skipped, the cursor is forced to the end the header
//! declared, so a short or miscounted sub-parser can never
//! desynchronize the outer scan.

use crate::binary::code::{CodeEntry, parse_code_section};
use crate::binary::cursor::ByteCursor;
use crate::binary::imports::count_function_imports;
use crate::binary::names::{NameEntry, parse_name_section};
use crate::binary::section::{Section, SectionHeader, SectionId};
use crate::error::ParseError;

/// The 4-byte magic at the head of every module: `\0asm`, read
/// little-endian.
pub const WASM_MAGIC: u32 = 0x6d73_6100;

/// Module versions this parser accepts: the standardized version plus
/// the newest of the pre-standard versions this tool's lineage checked
/// (10, 12 and 13 all shipped at some point; only 13 is still
/// recognized).
pub const ACCEPTED_VERSIONS: &[u32] = &[1, 0xd];

/// A fully scanned module: the section list in encounter order plus
/// the facts the reporting layer needs. Immutable once parsed.
#[derive(Debug, Clone)]
pub struct Module {
    pub version: u32,
    pub sections: Vec<Section>,
    /// Number of `func` imports. Defined function `i` has the absolute
    /// index `function_import_count + i`, and the name section is
    /// indexed by absolute index.
    pub function_import_count: u32,
    /// Non-fatal findings, in encounter order.
    pub warnings: Vec<String>,
}

/// Parse a binary module into its section structure.
///
/// Fatal errors ([`ParseError::InvalidMagic`],
/// [`ParseError::UnsupportedVersion`], [`ParseError::TruncatedInput`],
/// [`ParseError::MalformedVarint`]) abort the whole parse. A custom
/// section that claims the "name" tag but fails validation, and a
/// malformed import section, only produce warnings; the scan recovers
/// at the next section boundary.
pub fn parse_module(bytes: &[u8]) -> Result<Module, ParseError> {
    let mut cursor = ByteCursor::new(bytes);

    let magic = cursor.read_u32()?;
    if magic != WASM_MAGIC {
        return Err(ParseError::InvalidMagic {
            found: magic,
            expected: WASM_MAGIC,
        });
    }
    let version = cursor.read_u32()?;
    if !ACCEPTED_VERSIONS.contains(&version) {
        return Err(ParseError::UnsupportedVersion {
            found: version,
            accepted: ACCEPTED_VERSIONS,
        });
    }

    let mut sections = Vec::new();
    let mut warnings = Vec::new();
    let mut function_import_count = 0u32;
    let mut has_name_section = false;

    while cursor.has_more() {
        let offset = cursor.position();
        let id = cursor.read_var_u7()?;
        let payload_len = cursor.read_var_u32()?;
        let payload_start = cursor.position();
        let payload_end = payload_start
            .checked_add(payload_len as usize)
            .filter(|end| *end <= bytes.len())
            .ok_or(ParseError::TruncatedInput {
                offset: payload_start,
                needed: payload_len as usize,
                available: bytes.len() - payload_start,
            })?;
        let header = SectionHeader {
            id,
            offset,
            payload_len,
        };

        let section = match SectionId::from_byte(id) {
            Some(SectionId::Custom) => scan_custom(
                &bytes[..payload_end],
                payload_start,
                header,
                &mut has_name_section,
                &mut warnings,
            ),
            Some(SectionId::Code) => {
                let mut body = ByteCursor::at(&bytes[..payload_end], payload_start);
                Section::Code {
                    header,
                    entries: parse_code_section(&mut body)?,
                }
            }
            Some(SectionId::Import) => {
                let mut body = ByteCursor::at(&bytes[..payload_end], payload_start);
                match count_function_imports(&mut body) {
                    Ok(count) => function_import_count = count,
                    Err(err) => warnings.push(err.to_string()),
                }
                Section::Other { header }
            }
            _ => Section::Other { header },
        };
        sections.push(section);

        // Declared lengths win over whatever a sub-parser consumed.
        cursor.set_position(payload_end);
    }

    Ok(Module {
        version,
        sections,
        function_import_count,
        warnings,
    })
}

/// Handle one custom section: read its name, and parse it as a name
/// section when it is the first one called "name". Malformed payloads
/// degrade to a warning and an opaque record.
fn scan_custom(
    bytes: &[u8],
    payload_start: usize,
    header: SectionHeader,
    has_name_section: &mut bool,
    warnings: &mut Vec<String>,
) -> Section {
    let mut body = ByteCursor::at(bytes, payload_start);
    let name = match body.read_name() {
        Ok(name) => name,
        Err(err) => {
            warnings.push(format!(
                "custom section at offset {} skipped: {err}",
                header.offset
            ));
            return Section::Custom {
                header,
                name: String::new(),
            };
        }
    };

    if name != "name" {
        return Section::Custom { header, name };
    }
    if *has_name_section {
        warnings.push(format!(
            "duplicate name section at offset {} ignored",
            header.offset
        ));
        return Section::Custom { header, name };
    }

    // Re-parse from the payload head; the name parser re-reads the
    // section name so it advances past the header consistently with
    // the generic handling above.
    let mut body = ByteCursor::at(bytes, payload_start);
    match parse_name_section(&mut body) {
        Ok(entries) => {
            *has_name_section = true;
            Section::Name { header, entries }
        }
        Err(err) => {
            warnings.push(err.to_string());
            Section::Custom { header, name }
        }
    }
}

impl Module {
    /// First section whose id matches; custom sections additionally
    /// match on their name when one is given.
    pub fn find_section(&self, id: SectionId, name: Option<&str>) -> Option<&Section> {
        self.sections.iter().find(|section| {
            if section.header().id != id as u8 {
                return false;
            }
            match section {
                Section::Custom { name: n, .. } => name.is_none_or(|want| n == want),
                Section::Name { .. } => name.is_none_or(|want| want == "name"),
                _ => true,
            }
        })
    }

    /// Parsed name entries, if the module carries a valid name section.
    pub fn name_entries(&self) -> Option<&[NameEntry]> {
        self.sections.iter().find_map(|section| match section {
            Section::Name { entries, .. } => Some(entries.as_slice()),
            _ => None,
        })
    }

    /// Code body spans in definition order; empty when there is no
    /// code section.
    pub fn code_entries(&self) -> &[CodeEntry] {
        self.sections
            .iter()
            .find_map(|section| match section {
                Section::Code { entries, .. } => Some(entries.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Display label for the `i`-th module-defined function: its name
    /// section entry at the absolute index when present, otherwise a
    /// synthetic `Func N`.
    pub fn function_label(&self, defined_index: usize) -> String {
        let index = self.function_import_count as usize + defined_index;
        self.name_entries()
            .and_then(|entries| entries.get(index))
            .map(|entry| entry.function_name.clone())
            .unwrap_or_else(|| format!("Func {index}"))
    }
}
