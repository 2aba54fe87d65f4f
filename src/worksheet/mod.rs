//! Printable worksheet rendering.
//!
//! Takes a finished [`ProblemSet`] by shared reference, lays the problems out
//! in rows and pages, and writes a self-contained document. Nothing here can
//! alter the problem set, so a failed write leaves the generated problems
//! intact for the caller to print or retry.

mod html;
mod text;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::practice_engine::models::ProblemSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    Html,
    Text,
}

impl DocumentFormat {
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Html => "html",
            DocumentFormat::Text => "txt",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetLayout {
    /// Problems per row.
    pub per_row: usize,
    /// Rows per page; the title is repeated on every page.
    pub rows_per_page: usize,
    pub format: DocumentFormat,
}

impl Default for WorksheetLayout {
    fn default() -> Self {
        WorksheetLayout {
            per_row: 4,
            rows_per_page: 13,
            format: DocumentFormat::Html,
        }
    }
}

impl WorksheetLayout {
    pub fn validate(&self) -> Result<()> {
        if self.per_row == 0 {
            return Err(Error::InvalidLayout("per_row must be at least 1".to_string()));
        }
        if self.rows_per_page == 0 {
            return Err(Error::InvalidLayout(
                "rows_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// One printed page: a list of rows, each holding up to `per_row` problems.
pub(crate) type Page<'a> = Vec<&'a [String]>;

/// Split problems into pages of rows. An empty set still yields one page.
pub(crate) fn paginate<'a>(set: &'a ProblemSet, layout: &WorksheetLayout) -> Vec<Page<'a>> {
    let rows: Vec<&[String]> = set.problems().chunks(layout.per_row).collect();
    if rows.is_empty() {
        return vec![Vec::new()];
    }
    rows.chunks(layout.rows_per_page).map(|page| page.to_vec()).collect()
}

/// `"<course> (<min>-<max>)"`.
pub fn title(set: &ProblemSet) -> String {
    format!("{} ({})", set.course_name, set.range)
}

pub fn footer(now: &DateTime<Local>) -> String {
    format!("Printed at: {}", now.to_rfc2822())
}

/// `<course>(<min>-<max>)_<YYYYMMDD>_<HHMMSS>.<ext>`.
pub fn artifact_name(set: &ProblemSet, format: DocumentFormat, now: &DateTime<Local>) -> String {
    format!(
        "{}({})_{}.{}",
        file_safe(set.course_name),
        set.range,
        now.format("%Y%m%d_%H%M%S"),
        format
    )
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Render the whole document to a string.
pub fn render(set: &ProblemSet, layout: &WorksheetLayout, now: &DateTime<Local>) -> Result<String> {
    layout.validate()?;
    let pages = paginate(set, layout);
    let doc = match layout.format {
        DocumentFormat::Html => html::render(set, layout, &pages, now),
        DocumentFormat::Text => text::render(set, &pages, now),
    };
    Ok(doc)
}

/// Render and write the worksheet into `dir`, creating it if needed.
/// Returns the path of the written file.
pub fn write_worksheet(
    set: &ProblemSet,
    layout: &WorksheetLayout,
    dir: &Path,
    now: &DateTime<Local>,
) -> Result<PathBuf> {
    let doc = render(set, layout, now)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(artifact_name(set, layout.format, now));
    fs::write(&path, doc)?;
    info!(path = %path.display(), problems = set.len(), "worksheet written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::{generate_problems, GenerateRequest};
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 18, 9, 5, 3).earliest().unwrap()
    }

    fn sample_set(quota: usize) -> ProblemSet {
        generate_problems(&GenerateRequest::new(1, 1, 20).with_quota(quota).with_seed(5)).unwrap()
    }

    #[test]
    fn artifact_name_embeds_course_range_and_time() {
        let set = sample_set(4);
        assert_eq!(
            artifact_name(&set, DocumentFormat::Html, &fixed_now()),
            "Addition(1-20)_20261018_090503.html"
        );
        assert!(artifact_name(&set, DocumentFormat::Text, &fixed_now()).ends_with(".txt"));
    }

    #[test]
    fn file_safe_replaces_separators() {
        assert_eq!(file_safe("a/b\\c:d"), "a_b_c_d");
        assert_eq!(file_safe("Four Operations"), "Four Operations");
    }

    #[test]
    fn pagination_respects_layout() {
        let set = sample_set(50);
        let layout = WorksheetLayout { per_row: 4, rows_per_page: 5, ..Default::default() };
        let pages = paginate(&set, &layout);
        // 50 problems -> 13 rows -> pages of 5, 5, 3
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].len(), 3);
        assert_eq!(pages[2][2].len(), 2);
        let flattened: Vec<&String> = pages.iter().flatten().flat_map(|row| row.iter()).collect();
        assert_eq!(flattened, set.problems().iter().collect::<Vec<_>>());
    }

    #[test]
    fn empty_set_renders_one_page() {
        let course = crate::practice_engine::course(1).unwrap();
        let range = crate::practice_engine::normalize(1, 20).unwrap();
        let set = ProblemSet::new(course, range, 50);
        assert_eq!(paginate(&set, &WorksheetLayout::default()).len(), 1);
        let doc = render(&set, &WorksheetLayout::default(), &fixed_now()).unwrap();
        assert!(doc.contains("Addition (1-20)"));
    }

    #[test]
    fn zero_sized_layout_is_rejected() {
        let set = sample_set(2);
        let layout = WorksheetLayout { per_row: 0, ..Default::default() };
        assert!(matches!(render(&set, &layout, &fixed_now()), Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn writes_into_created_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("out");
        let set = sample_set(8);
        let path = write_worksheet(&set, &WorksheetLayout::default(), &dir, &fixed_now()).unwrap();
        assert!(path.starts_with(&dir));
        let written = fs::read_to_string(&path).unwrap();
        for problem in &set {
            assert!(written.contains(problem.as_str()), "missing {problem}");
        }
    }

    #[test]
    fn write_failure_leaves_set_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();
        let set = sample_set(10);
        let before = set.problems().to_vec();
        let result = write_worksheet(&set, &WorksheetLayout::default(), &blocker, &fixed_now());
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(set.problems(), before.as_slice());
    }
}
