//! Interactive course and range selection.

use std::io::{self, BufRead, Write};

use arith_drill_gen::practice_engine::{course, courses, is_valid_course_key, range};
use arith_drill_gen::Course;

/// What the user picked. Bounds are still raw; the engine normalizes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub course: &'static Course,
    pub min: i64,
    pub max: i64,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask for a course, then a range, until both are acceptable.
    ///
    /// An invalid course key re-asks for the course; an invalid or
    /// unparsable range starts over from the course question.
    pub fn select(&mut self) -> io::Result<Selection> {
        writeln!(self.output, "Arithmetic practice generator")?;
        writeln!(self.output, "{}", courses::menu_line())?;

        loop {
            write!(self.output, "\nSelect a course: ")?;
            let key = match self.read_line()?.parse::<u8>() {
                Ok(key) if is_valid_course_key(key) => key,
                _ => {
                    writeln!(self.output, "Invalid selection")?;
                    continue;
                }
            };
            let Ok(chosen) = course(key) else { continue };
            writeln!(self.output, "Selected: {}", chosen.name)?;

            write!(self.output, "Minimum number: ")?;
            let min = self.read_line()?.parse::<i64>();
            write!(self.output, "Maximum number (at least 10): ")?;
            let max = self.read_line()?.parse::<i64>();

            match (min, max) {
                (Ok(min), Ok(max)) if range::is_valid_raw_range(min, max) => {
                    return Ok(Selection { course: chosen, min, max });
                }
                _ => writeln!(self.output, "Invalid range, try again")?,
            }
        }
    }
}
