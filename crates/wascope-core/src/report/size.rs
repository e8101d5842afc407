//! Code-size metrics: the join of code body spans with debug names.

use crate::binary::module::Module;

/// One row of the size report, in final (descending) order.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSize {
    pub name: String,
    pub size: usize,
    /// Share of the total code size, 0.0–100.0.
    pub percent: f64,
}

/// Build the per-function size table.
///
/// Defined function `i` is looked up in the name section at the
/// absolute index `function_import_count + i`; functions the name
/// section does not cover get a synthetic `Func N` label. Rows are
/// sorted by size, largest first; equal sizes keep definition order
/// (the sort is stable).
pub fn size_report(module: &Module) -> Vec<FunctionSize> {
    let code = module.code_entries();
    let total: usize = code.iter().map(|entry| entry.size()).sum();

    let mut rows: Vec<FunctionSize> = code
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let size = entry.size();
            let percent = if total == 0 {
                0.0
            } else {
                size as f64 / total as f64 * 100.0
            };
            FunctionSize {
                name: module.function_label(i),
                size,
                percent,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.size.cmp(&a.size));
    rows
}

/// Human-readable byte count: exact integer below 1 KB, two decimals
/// with a binary unit above.
pub fn bytes_to_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} Bytes");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::cursor::write_var_u32;
    use crate::binary::module::{WASM_MAGIC, parse_module};
    use crate::binary::section::SectionId;

    fn push_section(out: &mut Vec<u8>, id: u8, payload: &[u8]) {
        out.push(id);
        write_var_u32(payload.len() as u32, out);
        out.extend_from_slice(payload);
    }

    fn push_name(out: &mut Vec<u8>, name: &str) {
        write_var_u32(name.len() as u32, out);
        out.extend_from_slice(name.as_bytes());
    }

    fn module_with(body_sizes: &[usize], names: Option<&[&str]>) -> Module {
        let mut bytes = WASM_MAGIC.to_le_bytes().to_vec();
        bytes.extend_from_slice(&1u32.to_le_bytes());

        let mut code = Vec::new();
        write_var_u32(body_sizes.len() as u32, &mut code);
        for size in body_sizes {
            write_var_u32(*size as u32, &mut code);
            code.extend(std::iter::repeat_n(0u8, *size));
        }
        push_section(&mut bytes, SectionId::Code as u8, &code);

        if let Some(names) = names {
            let mut payload = Vec::new();
            push_name(&mut payload, "name");
            write_var_u32(names.len() as u32, &mut payload);
            for name in names {
                push_name(&mut payload, name);
                write_var_u32(0, &mut payload);
            }
            push_section(&mut bytes, SectionId::Custom as u8, &payload);
        }

        parse_module(&bytes).unwrap()
    }

    #[test]
    fn sorts_descending_by_size() {
        let module = module_with(&[10, 30], Some(&["foo", "bar"]));
        let rows = size_report(&module);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "bar");
        assert_eq!(rows[0].size, 30);
        assert_eq!(rows[1].name, "foo");
        assert_eq!(rows[1].size, 10);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let module = module_with(&[10, 30, 7, 13], None);
        let rows = size_report(&module);

        let sum: f64 = rows.iter().map(|r| r.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
        for window in rows.windows(2) {
            assert!(window[0].size >= window[1].size);
        }
    }

    #[test]
    fn equal_sizes_keep_definition_order() {
        let module = module_with(&[5, 9, 5, 5], None);
        let rows = size_report(&module);

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Func 1", "Func 0", "Func 2", "Func 3"]);
    }

    #[test]
    fn missing_name_section_yields_synthetic_labels() {
        let module = module_with(&[4, 2], None);
        let rows = size_report(&module);

        assert_eq!(rows[0].name, "Func 0");
        assert_eq!(rows[1].name, "Func 1");
    }

    #[test]
    fn empty_code_section_is_an_empty_report() {
        let module = module_with(&[], None);
        assert!(size_report(&module).is_empty());
    }

    #[test]
    fn zero_sized_bodies_do_not_divide_by_zero() {
        let module = module_with(&[0, 0], None);
        let rows = size_report(&module);
        assert_eq!(rows[0].percent, 0.0);
        assert_eq!(rows[1].percent, 0.0);
    }

    #[test]
    fn bytes_to_size_units() {
        assert_eq!(bytes_to_size(0), "0 Bytes");
        assert_eq!(bytes_to_size(40), "40 Bytes");
        assert_eq!(bytes_to_size(1023), "1023 Bytes");
        assert_eq!(bytes_to_size(1024), "1.00 KB");
        assert_eq!(bytes_to_size(1536), "1.50 KB");
        assert_eq!(bytes_to_size(1024 * 1024), "1.00 MB");
    }
}
