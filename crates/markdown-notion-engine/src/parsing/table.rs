//! # Table Fallback
//!
//! Pipe tables have no native block here. A buffered table region is
//! rendered as one KaTeX `array` expression and emitted as an equation
//! block: a grid with a rule under every row, header cells in bold.
//!
//! Column count comes from the first row; later rows are not checked
//! against it, so ragged tables render ragged.

use super::blocks::kinds::TableRow;

const PREAMBLE: &str = r"\def\arraystretch{1.4}\begin{array}";
const ROW_END: &str = r" \\\hline";
const END: &str = r"\end{array}";

/// Renders the raw lines of one table region.
///
/// A delimiter row in second position marks the first row as a header and
/// is dropped from the output.
pub fn render_table<S: AsRef<str>>(lines: &[S]) -> String {
    let mut rows: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    let has_header = rows.get(1).is_some_and(|row| TableRow::is_delimiter(row));
    if has_header {
        rows.remove(1);
    }

    let columns = rows.first().map_or(1, |row| TableRow::column_count(row));
    let mut out = format!("{PREAMBLE}{{{}|}}\\hline\n", "|c".repeat(columns));

    for (i, row) in rows.iter().enumerate() {
        let header = has_header && i == 0;
        let cells: Vec<String> = TableRow::cells(row)
            .into_iter()
            .map(|cell| render_cell(cell, header))
            .collect();
        if cells.is_empty() {
            continue;
        }
        out.push_str(&cells.join(" & "));
        out.push_str(ROW_END);
        out.push('\n');
    }

    out.push_str(END);
    out
}

fn render_cell(cell: &str, header: bool) -> String {
    let text = escape(cell);
    if header {
        format!(r"\textsf{{\textbf{{{text}}}}}")
    } else {
        format!(r"\textsf{{{text}}}")
    }
}

/// Escapes characters that are special in KaTeX text mode.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(ch),
        }
    }
    out
}
