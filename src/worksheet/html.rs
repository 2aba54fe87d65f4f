use std::fmt;
use std::fmt::Write as _;

use chrono::{DateTime, Local};

use super::{footer, title, Page, WorksheetLayout};
use crate::practice_engine::models::ProblemSet;

const STYLE: &str = "\
@page { size: A4; margin: 20mm; }
body { font-family: sans-serif; font-size: 16pt; }
.page { page-break-after: always; }
.page:last-child { page-break-after: auto; }
h1 { font-size: 16pt; font-weight: normal; margin: 0 0 20mm 0; }
.row { display: grid; margin-bottom: 15mm; }
.footer { font-size: 9pt; margin-top: 15mm; }
.page-number { font-size: 9pt; text-align: right; }
";

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

pub(super) fn render(
    set: &ProblemSet,
    layout: &WorksheetLayout,
    pages: &[Page<'_>],
    now: &DateTime<Local>,
) -> String {
    let mut doc = String::new();
    // fmt::Write for String never fails.
    let _ = write_document(&mut doc, set, layout, pages, now);
    doc
}

fn write_document<W: fmt::Write>(
    doc: &mut W,
    set: &ProblemSet,
    layout: &WorksheetLayout,
    pages: &[Page<'_>],
    now: &DateTime<Local>,
) -> fmt::Result {
    let title = escape(&title(set));
    let total = pages.len();

    writeln!(doc, "<!DOCTYPE html>")?;
    writeln!(doc, "<html><head><meta charset=\"utf-8\">")?;
    writeln!(doc, "<title>{title}</title>")?;
    writeln!(doc, "<style>{STYLE}</style></head><body>")?;

    for (i, page) in pages.iter().enumerate() {
        writeln!(doc, "<section class=\"page\">")?;
        writeln!(doc, "<h1>{title}</h1>")?;
        for row in page {
            write!(
                doc,
                "<div class=\"row\" style=\"grid-template-columns: repeat({}, 1fr)\">",
                layout.per_row
            )?;
            for problem in row.iter() {
                write!(doc, "<span>{}</span>", escape(problem))?;
            }
            writeln!(doc, "</div>")?;
        }
        if i + 1 == total {
            writeln!(doc, "<p class=\"footer\">{}</p>", escape(&footer(now)))?;
        }
        writeln!(doc, "<p class=\"page-number\">Page {}/{}</p>", i + 1, total)?;
        writeln!(doc, "</section>")?;
    }

    writeln!(doc, "</body></html>")
}
