//! Minimal import-section walk.
//!
//! Only the function-import count matters here: it anchors the
//! absolute function index space that the name section is indexed by.
//! Entries of other kinds are decoded just far enough to skip them.

use crate::binary::cursor::ByteCursor;
use crate::error::ParseError;

const KIND_FUNC: u8 = 0x00;
const KIND_TABLE: u8 = 0x01;
const KIND_MEMORY: u8 = 0x02;
const KIND_GLOBAL: u8 = 0x03;

/// Count `func` imports in an import-section payload.
pub fn count_function_imports(cursor: &mut ByteCursor<'_>) -> Result<u32, ParseError> {
    let count = cursor.read_var_u32().map_err(invalid)?;
    let mut function_imports = 0u32;
    for _ in 0..count {
        // module name, then field name
        cursor.read_name().map_err(invalid)?;
        cursor.read_name().map_err(invalid)?;
        match cursor.read_byte().map_err(invalid)? {
            KIND_FUNC => {
                cursor.read_var_u32().map_err(invalid)?; // type index
                function_imports += 1;
            }
            KIND_TABLE => {
                cursor.read_byte().map_err(invalid)?; // element type
                skip_limits(cursor)?;
            }
            KIND_MEMORY => skip_limits(cursor)?,
            KIND_GLOBAL => {
                cursor.read_byte().map_err(invalid)?; // value type
                cursor.read_byte().map_err(invalid)?; // mutability
            }
            other => {
                return Err(ParseError::InvalidImportSection {
                    reason: format!("unknown import kind 0x{other:02x}"),
                });
            }
        }
    }
    Ok(function_imports)
}

fn skip_limits(cursor: &mut ByteCursor<'_>) -> Result<(), ParseError> {
    let flags = cursor.read_var_u32().map_err(invalid)?;
    cursor.read_var_u32().map_err(invalid)?; // minimum
    if flags & 0x01 != 0 {
        cursor.read_var_u32().map_err(invalid)?; // maximum
    }
    Ok(())
}

fn invalid(err: ParseError) -> ParseError {
    ParseError::InvalidImportSection {
        reason: err.to_string(),
    }
}
