//! Parser for the "name" custom section.
//!
//! The layout is the flat pre-standard one: a function count, then per
//! function one name followed by a counted list of local names. Entry
//! `i` corresponds to function index `i` across imported and
//! module-defined functions combined.

use crate::binary::cursor::ByteCursor;
use crate::error::ParseError;

/// Debug names for one function, in ascending function-index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    pub function_name: String,
    pub local_names: Vec<String>,
}

/// Parse the payload of a custom section the scanner has already
/// located. `cursor` must sit right after the section header, on the
/// section's own name string, which is re-read here so this parser
/// advances past the header the same way the generic custom-section
/// handling does.
pub fn parse_name_section(cursor: &mut ByteCursor<'_>) -> Result<Vec<NameEntry>, ParseError> {
    let section_name = cursor.read_name().map_err(invalid)?;
    if section_name != "name" {
        return Err(ParseError::InvalidNameSection {
            reason: format!("custom section is named {section_name:?}, not \"name\""),
        });
    }

    let function_count = cursor.read_var_u32().map_err(invalid)?;
    let mut entries = Vec::new();
    for _ in 0..function_count {
        let function_name = cursor.read_name().map_err(invalid)?;
        let local_count = cursor.read_var_u32().map_err(invalid)?;
        let local_names = cursor.read_names(local_count).map_err(invalid)?;
        entries.push(NameEntry {
            function_name,
            local_names,
        });
    }
    Ok(entries)
}

fn invalid(err: ParseError) -> ParseError {
    ParseError::InvalidNameSection {
        reason: err.to_string(),
    }
}
