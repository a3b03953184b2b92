//! Cell rule

/// Next age of a cell given its current age and live neighbour count
///
/// Survivors age by one (saturating at 255), newborns start at 1 and
/// everything else is dead.
pub const fn evolve_cell(age: u8, neighbors: u8) -> u8 {
    match (age, neighbors) {
        (0, 3) => 1,
        (0, _) => 0,
        (age, 2 | 3) => age.saturating_add(1),
        _ => 0,
    }
}
