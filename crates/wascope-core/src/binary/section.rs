//! Top-level section records.
//!
//! The reader this replaces modeled sections as an inheritance chain
//! (generic section → user section → name section) purely to share
//! cursor methods; a tagged variant per interpreted kind is all the
//! structure actually needed.

use crate::binary::code::CodeEntry;
use crate::binary::names::NameEntry;

/// Section identifiers of the binary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SectionId {
    /// User-defined (custom) section, carries its own name string.
    Custom = 0,
    Type = 1,
    Import = 2,
    Function = 3,
    Table = 4,
    Memory = 5,
    Global = 6,
    Export = 7,
    Start = 8,
    Element = 9,
    Code = 10,
    Data = 11,
}

impl SectionId {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(SectionId::Custom),
            1 => Some(SectionId::Type),
            2 => Some(SectionId::Import),
            3 => Some(SectionId::Function),
            4 => Some(SectionId::Table),
            5 => Some(SectionId::Memory),
            6 => Some(SectionId::Global),
            7 => Some(SectionId::Export),
            8 => Some(SectionId::Start),
            9 => Some(SectionId::Element),
            10 => Some(SectionId::Code),
            11 => Some(SectionId::Data),
            _ => None,
        }
    }

    /// Human-readable name for this section kind.
    pub fn name(self) -> &'static str {
        match self {
            SectionId::Custom => "custom",
            SectionId::Type => "type",
            SectionId::Import => "import",
            SectionId::Function => "function",
            SectionId::Table => "table",
            SectionId::Memory => "memory",
            SectionId::Global => "global",
            SectionId::Export => "export",
            SectionId::Start => "start",
            SectionId::Element => "element",
            SectionId::Code => "code",
            SectionId::Data => "data",
        }
    }
}

/// Header shared by every section: the raw id tag as read from the
/// stream, the offset of the header itself, and the declared payload
/// length. The raw tag is kept because the varuint7 id read admits
/// values outside [`SectionId`]; such sections are recorded opaquely
/// and never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub id: u8,
    pub offset: usize,
    pub payload_len: u32,
}

impl SectionHeader {
    pub fn section_id(&self) -> Option<SectionId> {
        SectionId::from_byte(self.id)
    }
}

/// One scanned top-level section, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Custom section whose payload is not interpreted beyond its name.
    Custom { header: SectionHeader, name: String },
    /// Custom section named "name": per-function debug names.
    Name {
        header: SectionHeader,
        entries: Vec<NameEntry>,
    },
    /// Code section: one body span per module-defined function.
    Code {
        header: SectionHeader,
        entries: Vec<CodeEntry>,
    },
    /// Any other section, recorded but skipped.
    Other { header: SectionHeader },
}

impl Section {
    pub fn header(&self) -> &SectionHeader {
        match self {
            Section::Custom { header, .. }
            | Section::Name { header, .. }
            | Section::Code { header, .. }
            | Section::Other { header } => header,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_id_round_trips_through_bytes() {
        for byte in 0u8..=11 {
            let id = SectionId::from_byte(byte).expect("known id");
            assert_eq!(id as u8, byte);
        }
    }

    #[test]
    fn section_id_rejects_out_of_range_tags() {
        assert_eq!(SectionId::from_byte(12), None);
        assert_eq!(SectionId::from_byte(0x7f), None);
    }

    #[test]
    fn section_names_are_distinct() {
        let mut names: Vec<&str> = (0u8..=11)
            .map(|b| SectionId::from_byte(b).unwrap().name())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }
}
