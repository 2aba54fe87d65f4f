//! Core problem engine: formulas, courses, ranges, sampling, and generation.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: `Course`, `NumberRange`, `GenerateRequest`, `ProblemSet` |
//! | `formulas`  | The closed set of problem shapes and their validity rules |
//! | `courses`   | Static registry mapping selector keys to courses |
//! | `range`     | Validation and widening of user-entered bounds |
//! | `sampler`   | Uniform operand triples, optionally filtered by a predicate |
//! | `generator` | `generate_problems()` entry point and the bounded collection loop |

pub mod courses;
pub mod formulas;
pub mod generator;
pub mod models;
pub mod range;
pub mod sampler;

pub use courses::{all_courses, course, courses, is_valid_course_key, menu_line};
pub use formulas::Formula;
pub use generator::{generate, generate_problems};
pub use models::{Course, GenerateRequest, NumberRange, ProblemSet, DEFAULT_QUOTA, MAX_ATTEMPTS};
pub use range::{is_valid_raw_range, normalize};
