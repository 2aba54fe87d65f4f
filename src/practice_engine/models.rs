use std::collections::HashSet;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::practice_engine::formulas::Formula;

/// Number of problems a run tries to collect unless told otherwise.
pub const DEFAULT_QUOTA: usize = 50;

/// Hard ceiling on sampling attempts per run.
pub const MAX_ATTEMPTS: u32 = 100_000;

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

/// A selectable category: a display name plus the formulas it draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub key: u8,
    pub name: &'static str,
    /// Never empty; a formula listed twice is picked twice as often.
    pub formulas: &'static [Formula],
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// Inclusive operand interval. Only built by `range::normalize`, which
/// guarantees `min < max` and a span of at least 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberRange {
    min: i64,
    max: i64,
}

impl NumberRange {
    pub(crate) fn new_unchecked(min: i64, max: i64) -> Self {
        debug_assert!(min < max);
        NumberRange { min, max }
    }

    pub fn min(self) -> i64 {
        self.min
    }

    pub fn max(self) -> i64 {
        self.max
    }

    pub fn span(self) -> i64 {
        self.max.saturating_sub(self.min)
    }

    pub fn contains(self, n: i64) -> bool {
        (self.min..=self.max).contains(&n)
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Request / result types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Registry key, 1-based.
    pub course_key: u8,
    /// Raw bounds as entered; normalized before sampling.
    pub min: i64,
    pub max: i64,
    pub quota: usize,
    /// `None` seeds from OS entropy; `Some` makes the run reproducible.
    pub rng_seed: Option<u64>,
}

impl GenerateRequest {
    /// Request with the default quota and an entropy seed.
    pub fn new(course_key: u8, min: i64, max: i64) -> Self {
        GenerateRequest {
            course_key,
            min,
            max,
            quota: DEFAULT_QUOTA,
            rng_seed: None,
        }
    }

    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = quota;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// The ordered, duplicate-free output of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemSet {
    pub course_key: u8,
    pub course_name: &'static str,
    pub range: NumberRange,
    pub quota: usize,
    /// Attempts consumed, capped at [`MAX_ATTEMPTS`].
    pub attempts: u32,
    problems: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl ProblemSet {
    pub(crate) fn new(course: &Course, range: NumberRange, quota: usize) -> Self {
        ProblemSet {
            course_key: course.key,
            course_name: course.name,
            range,
            quota,
            attempts: 0,
            problems: Vec::with_capacity(quota),
            seen: HashSet::with_capacity(quota),
        }
    }

    /// Append `problem` unless it is already present. Returns whether it was added.
    pub(crate) fn insert(&mut self, problem: String) -> bool {
        if self.seen.contains(&problem) {
            return false;
        }
        self.seen.insert(problem.clone());
        self.problems.push(problem);
        true
    }

    pub fn problems(&self) -> &[String] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// True when the run reached its quota rather than the attempt ceiling.
    pub fn is_complete(&self) -> bool {
        self.problems.len() >= self.quota
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.problems.iter()
    }
}

impl<'a> IntoIterator for &'a ProblemSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.problems.iter()
    }
}
