use std::fmt;
use serde::{Deserialize, Serialize};

/// One problem shape. Every variant maps a sampled triple `(n1, n2, n3)` to
/// the problem text, or to `None` when the triple is unsuitable.
///
/// Two-operand formulas ignore `n3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    Addition,
    Subtraction,
    AdditionThenSubtraction,
    SubtractionThenAddition,
    AdditionThenAddition,
    /// Same pattern and rule as `SubtractionThenAddition`; listed separately
    /// so a course can weight that shape twice.
    SubtractionThenSubtraction,
    Multiplication,
    Division,
}

impl Formula {
    pub const ALL: [Formula; 8] = [
        Formula::Addition,
        Formula::Subtraction,
        Formula::AdditionThenSubtraction,
        Formula::SubtractionThenAddition,
        Formula::AdditionThenAddition,
        Formula::SubtractionThenSubtraction,
        Formula::Multiplication,
        Formula::Division,
    ];

    /// Does the triple satisfy this formula's validity rule?
    pub fn accepts(self, n1: i64, n2: i64, n3: i64) -> bool {
        // widened so the checks cannot overflow for extreme user ranges
        let (a, b, c) = (n1 as i128, n2 as i128, n3 as i128);
        match self {
            Formula::Addition
            | Formula::AdditionThenAddition
            | Formula::Multiplication => true,
            Formula::Subtraction
            | Formula::SubtractionThenAddition
            | Formula::SubtractionThenSubtraction => a >= b,
            Formula::AdditionThenSubtraction => a + b >= c,
            Formula::Division => b != 0 && a % b == 0,
        }
    }

    /// Render the problem text, or `None` if the triple must be resampled.
    pub fn apply(self, n1: i64, n2: i64, n3: i64) -> Option<String> {
        if !self.accepts(n1, n2, n3) {
            return None;
        }
        let text = match self {
            Formula::Addition                   => format!("{n1}+{n2}="),
            Formula::Subtraction                => format!("{n1}-{n2}="),
            Formula::AdditionThenSubtraction    => format!("{n1}+{n2}-{n3}="),
            Formula::SubtractionThenAddition
            | Formula::SubtractionThenSubtraction => format!("{n1}-{n2}+{n3}="),
            Formula::AdditionThenAddition       => format!("{n1}+{n2}+{n3}="),
            Formula::Multiplication             => format!("{n1}×{n2}="),
            Formula::Division                   => format!("{n1}÷{n2}="),
        };
        Some(text)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Formula::Addition                   => "addition",
            Formula::Subtraction                => "subtraction",
            Formula::AdditionThenSubtraction    => "addition-then-subtraction",
            Formula::SubtractionThenAddition    => "subtraction-then-addition",
            Formula::AdditionThenAddition       => "addition-then-addition",
            Formula::SubtractionThenSubtraction => "subtraction-then-subtraction",
            Formula::Multiplication             => "multiplication",
            Formula::Division                   => "division",
        };
        write!(f, "{}", s)
    }
}
