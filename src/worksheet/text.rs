use chrono::{DateTime, Local};

use super::{footer, title, Page};
use crate::practice_engine::models::ProblemSet;

/// Gap between columns, in characters.
const GUTTER: usize = 4;

/// Plain-text worksheet. Pages are separated by a form feed so a line
/// printer starts each one on a new sheet.
pub(super) fn render(set: &ProblemSet, pages: &[Page<'_>], now: &DateTime<Local>) -> String {
    let title = title(set);
    // `×` and `÷` are multi-byte, so widths are counted in chars.
    let width = set
        .iter()
        .map(|p| p.chars().count())
        .max()
        .unwrap_or(0)
        + GUTTER;
    let total = pages.len();

    let mut page_texts = Vec::with_capacity(total);
    for (i, page) in pages.iter().enumerate() {
        let mut lines = vec![title.clone(), String::new()];
        for row in page {
            let line: String = row
                .iter()
                .map(|p| format!("{:<width$}", p, width = width))
                .collect();
            lines.push(line.trim_end().to_string());
            lines.push(String::new());
        }
        if i + 1 == total {
            lines.push(footer(now));
        }
        lines.push(format!("Page {}/{}", i + 1, total));
        page_texts.push(lines.join("\n"));
    }

    let mut doc = page_texts.join("\n\u{0C}");
    doc.push('\n');
    doc
}
