use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::practice_engine::{
    courses,
    models::{Course, GenerateRequest, NumberRange, ProblemSet, MAX_ATTEMPTS},
    range, sampler,
};

/// Validate a request, seed the RNG, and run the generator.
///
/// Input errors (unknown course, degenerate range, zero quota) are returned
/// before any sampling happens.
pub fn generate_problems(request: &GenerateRequest) -> Result<ProblemSet> {
    let course = courses::course(request.course_key)?;
    let range = range::normalize(request.min, request.max)?;
    if request.quota == 0 {
        return Err(Error::InvalidQuota(request.quota));
    }

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    Ok(generate(course, range, request.quota, &mut rng))
}

/// Collect up to `quota` distinct valid problems from `course`.
///
/// Each attempt picks a formula uniformly, samples a triple, and keeps the
/// text if the formula accepts it and it is new. Stops at `quota` problems or
/// after [`MAX_ATTEMPTS`] attempts, whichever comes first; a short set is a
/// normal result when the range cannot supply enough distinct problems.
pub fn generate<R: Rng>(
    course: &Course,
    range: NumberRange,
    quota: usize,
    rng: &mut R,
) -> ProblemSet {
    let mut set = ProblemSet::new(course, range, quota);
    let formulas = course.formulas;

    while set.len() < quota {
        if set.attempts >= MAX_ATTEMPTS {
            warn!(
                course = course.name,
                range = %range,
                collected = set.len(),
                quota,
                "attempt ceiling reached; returning partial problem set"
            );
            break;
        }
        set.attempts += 1;

        let formula = formulas[rng.gen_range(0..formulas.len())];
        let (n1, n2, n3) = sampler::sample(rng, range);
        if let Some(problem) = formula.apply(n1, n2, n3) {
            set.insert(problem);
        }
    }

    debug!(
        course = course.name,
        range = %range,
        collected = set.len(),
        attempts = set.attempts,
        "problem generation finished"
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn fills_quota_on_ample_range() {
        let course = courses::course(1).unwrap();
        let range = range::normalize(1, 20).unwrap();
        let set = generate(course, range, 50, &mut seeded(1));
        assert_eq!(set.len(), 50);
        assert!(set.is_complete());
        assert!(set.attempts < MAX_ATTEMPTS);
    }

    #[test]
    fn narrow_range_stops_at_ceiling() {
        // 1..=10 subtraction has only 55 pairs with a >= b.
        let course = courses::course(2).unwrap();
        let range = range::normalize(1, 5).unwrap();
        let set = generate(course, range, 80, &mut seeded(2));
        assert_eq!(set.attempts, MAX_ATTEMPTS);
        assert_eq!(set.len(), 55);
        assert!(!set.is_complete());
    }

    #[test]
    fn quota_of_one() {
        let course = courses::course(5).unwrap();
        let range = range::normalize(1, 30).unwrap();
        let set = generate(course, range, 1, &mut seeded(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn request_rejects_bad_input_before_sampling() {
        assert!(matches!(
            generate_problems(&GenerateRequest::new(0, 1, 20)),
            Err(Error::CourseNotFound(0))
        ));
        assert!(matches!(
            generate_problems(&GenerateRequest::new(4, 0, 5)),
            Err(Error::InvalidRange { min: 0, max: 5 })
        ));
        assert!(matches!(
            generate_problems(&GenerateRequest::new(1, 1, 20).with_quota(0)),
            Err(Error::InvalidQuota(0))
        ));
    }

    #[test]
    fn request_uses_normalized_range() {
        let set = generate_problems(&GenerateRequest::new(1, 3, 5).with_seed(9)).unwrap();
        assert_eq!((set.range.min(), set.range.max()), (1, 10));
        assert_eq!(set.course_name, "Addition");
    }
}
