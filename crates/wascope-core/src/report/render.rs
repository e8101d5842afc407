use crate::report::model::Report;
use crate::report::size::bytes_to_size;

/// Render the code-size table: a total line, then one row per function
/// with percentage and byte count in fixed-width columns.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Total Code Size: {}\n",
        bytes_to_size(report.code.total_bytes)
    ));
    for f in &report.code.functions {
        out.push_str(&format!(
            "{:<10} {:<10} {}\n",
            format!("{:.2}%", f.percent),
            f.size_bytes,
            f.name
        ));
    }
    out
}
