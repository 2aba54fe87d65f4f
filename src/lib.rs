//! # arith_drill_gen
//!
//! Randomised arithmetic practice sheets.
//!
//! The library picks a course (addition, subtraction, mixed, multiplication,
//! division, ...), samples operands from a user-supplied range, and collects
//! a set of distinct, valid problems that can be rendered into a printable
//! worksheet.
//!
//! ## How it works
//!
//! 1. Build a [`GenerateRequest`] with a course key, raw `min`/`max` bounds,
//!    a quota (default 50), and an optional RNG seed.
//! 2. Call [`generate_problems`]: the range is validated and widened, then
//!    the engine repeatedly picks one of the course's formulas, samples three
//!    operands, and keeps the problem if the formula accepts the operands and
//!    the text is new.
//! 3. The returned [`ProblemSet`] holds the problems in generation order. It
//!    may be shorter than the quota when the range is too narrow; the loop is
//!    bounded by [`MAX_ATTEMPTS`].
//! 4. Hand the set to [`worksheet::write_worksheet`] to get an HTML or text
//!    document, and optionally [`viewer::open_in_viewer`] to show it.
//!
//! ## Quick start
//!
//! ```rust
//! use arith_drill_gen::{generate_problems, GenerateRequest};
//!
//! // Course 2 = Subtraction; 5 is widened to 10, so operands come from 1..=10.
//! let set = generate_problems(&GenerateRequest::new(2, 1, 5).with_seed(42)).unwrap();
//! assert!(set.len() <= 50);
//! for problem in &set {
//!     println!("{problem}");
//! }
//! ```

pub mod error;
pub mod practice_engine;
pub mod viewer;
pub mod worksheet;

pub use error::{Error, Result};
pub use practice_engine::{
    course, courses, generate, generate_problems, is_valid_course_key, normalize, Course,
    Formula, GenerateRequest, NumberRange, ProblemSet, DEFAULT_QUOTA, MAX_ATTEMPTS,
};
pub use worksheet::{DocumentFormat, WorksheetLayout};
