pub mod code;
pub mod cursor;
pub mod imports;
pub mod module;
pub mod names;
pub mod section;
