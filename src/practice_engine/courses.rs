//! Fixed course registry.
//!
//! The table is a `static`, so it is built at compile time and there is no
//! way to mutate it afterwards. Keys are 1-based and contiguous, which makes
//! lookup a bounds-checked index.

use crate::error::{Error, Result};
use crate::practice_engine::formulas::Formula;
use crate::practice_engine::models::Course;

use Formula::*;

static COURSES: [Course; 7] = [
    Course { key: 1, name: "Addition", formulas: &[Addition] },
    Course { key: 2, name: "Subtraction", formulas: &[Subtraction] },
    Course {
        key: 3,
        name: "Addition and Subtraction",
        formulas: &[
            Addition,
            Subtraction,
            SubtractionThenAddition,
            AdditionThenSubtraction,
            AdditionThenAddition,
            SubtractionThenSubtraction,
        ],
    },
    Course { key: 4, name: "Multiplication", formulas: &[Multiplication] },
    Course { key: 5, name: "Division", formulas: &[Division] },
    Course {
        key: 6,
        name: "Multiplication and Division",
        formulas: &[Multiplication, Division],
    },
    Course {
        key: 7,
        name: "Four Operations",
        formulas: &[Addition, Subtraction, Multiplication, Division],
    },
];

/// Every course in key order.
pub fn all_courses() -> &'static [Course] {
    &COURSES
}

/// `(key, display name)` pairs in key order.
pub fn courses() -> Vec<(u8, &'static str)> {
    COURSES.iter().map(|c| (c.key, c.name)).collect()
}

pub fn is_valid_course_key(key: u8) -> bool {
    key >= 1 && usize::from(key) <= COURSES.len()
}

pub fn course(key: u8) -> Result<&'static Course> {
    if !is_valid_course_key(key) {
        return Err(Error::CourseNotFound(key));
    }
    Ok(&COURSES[usize::from(key) - 1])
}

/// Menu line for the interactive prompt, e.g. `1.Addition 2.Subtraction ...`.
pub fn menu_line() -> String {
    COURSES
        .iter()
        .map(|c| format!("{}.{}", c.key, c.name))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_contiguous_from_one() {
        for (i, c) in COURSES.iter().enumerate() {
            assert_eq!(usize::from(c.key), i + 1, "course {} out of place", c.name);
            assert!(!c.formulas.is_empty(), "course {} has no formulas", c.name);
        }
    }

    #[test]
    fn lookup_and_membership_agree() {
        for key in 0..=10u8 {
            assert_eq!(is_valid_course_key(key), course(key).is_ok(), "key {key}");
        }
        assert!(matches!(course(0), Err(Error::CourseNotFound(0))));
        assert!(matches!(course(8), Err(Error::CourseNotFound(8))));
    }

    #[test]
    fn mixed_course_has_six_variants() {
        let mixed = course(3).unwrap();
        assert_eq!(mixed.formulas.len(), 6);
        assert!(mixed.formulas.contains(&SubtractionThenSubtraction));
    }

    #[test]
    fn four_operations_draws_all_four() {
        let four = course(7).unwrap();
        assert_eq!(four.name, "Four Operations");
        for formula in [Addition, Subtraction, Multiplication, Division] {
            assert!(four.formulas.contains(&formula), "missing {formula}");
        }
    }

    #[test]
    fn listing_is_in_key_order() {
        let listed = courses();
        assert_eq!(listed.len(), 7);
        assert_eq!(listed[0], (1, "Addition"));
        assert!(listed.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(menu_line().starts_with("1.Addition 2.Subtraction"));
    }
}
