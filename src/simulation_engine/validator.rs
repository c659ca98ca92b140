use crate::simulation_engine::error::ConfigViolation;

/// Check a Monty Hall door layout, reporting the first invariant it breaks.
///
/// A layout is well defined when every count is positive, the host still
/// has an empty door to open (`count_prize <= count_door - 2`) and the
/// closed set can hold all prizes while leaving at least one door to reveal
/// (`count_prize <= closed_door < count_door - 1`).
pub fn validate(count_prize: usize, count_door: usize, closed_door: usize) -> Result<(), ConfigViolation> {
    if count_prize == 0 || count_door == 0 || closed_door == 0 {
        return Err(ConfigViolation::NonPositiveCount);
    }
    if count_prize > count_door.saturating_sub(2) {
        return Err(ConfigViolation::TooManyPrizes { count_prize, count_door });
    }
    if closed_door < count_prize {
        return Err(ConfigViolation::ClosedBelowPrizes { count_prize, closed_door });
    }
    if closed_door >= count_door.saturating_sub(1) {
        return Err(ConfigViolation::TooManyClosed { closed_door, count_door });
    }
    Ok(())
}

pub fn is_valid(count_prize: usize, count_door: usize, closed_door: usize) -> bool {
    validate(count_prize, count_door, closed_door).is_ok()
}
