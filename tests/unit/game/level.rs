//! Tests for difficulty brackets and their threshold boundaries

#[cfg(test)]
mod tests {
    use stackburger::game::level::DifficultyLevel;

    // Tests each bracket's range at a representative level
    // Verified by widening the first bracket to 3..6
    #[test]
    fn test_bracket_table() {
        assert_eq!(DifficultyLevel::new(1).filling_range(), 3..5);
        assert_eq!(DifficultyLevel::new(7).filling_range(), 4..6);
        assert_eq!(DifficultyLevel::new(12).filling_range(), 5..7);
        assert_eq!(DifficultyLevel::new(17).filling_range(), 5..8);
        assert_eq!(DifficultyLevel::new(25).filling_range(), 6..10);
    }

    // Tests thresholds belong to the higher bracket
    // Verified by changing the first comparison to an inclusive upper bound
    #[test]
    fn test_bracket_boundaries_inclusive_low() {
        assert_eq!(DifficultyLevel::new(4).filling_range(), 3..5);
        assert_eq!(DifficultyLevel::new(5).filling_range(), 4..6);
        assert_eq!(DifficultyLevel::new(9).filling_range(), 4..6);
        assert_eq!(DifficultyLevel::new(10).filling_range(), 5..7);
        assert_eq!(DifficultyLevel::new(14).filling_range(), 5..7);
        assert_eq!(DifficultyLevel::new(15).filling_range(), 5..8);
        assert_eq!(DifficultyLevel::new(19).filling_range(), 5..8);
        assert_eq!(DifficultyLevel::new(20).filling_range(), 6..10);
    }

    // Tests levels below one fall back to the lowest bracket
    // Verified by rejecting non-positive levels
    #[test]
    fn test_levels_below_one_use_lowest_bracket() {
        assert_eq!(DifficultyLevel::new(0).filling_range(), 3..5);
        assert_eq!(DifficultyLevel::new(-3).filling_range(), 3..5);
        assert_eq!(DifficultyLevel::new(i32::MIN).filling_range(), 3..5);
    }

    // Tests unbounded levels stay in the top bracket
    // Verified by adding a bracket above 20
    #[test]
    fn test_no_upper_bound() {
        assert_eq!(DifficultyLevel::new(i32::MAX).filling_range(), 6..10);
        assert_eq!(DifficultyLevel::new(i32::MAX).next().get(), i32::MAX);
    }

    // Tests default level and increment
    // Verified by starting at level zero
    #[test]
    fn test_default_and_next() {
        let level = DifficultyLevel::default();
        assert_eq!(level, DifficultyLevel::FIRST);
        assert_eq!(level.get(), 1);
        assert_eq!(level.next(), DifficultyLevel::from(2));
        assert_eq!(level.next().to_string(), "2");
    }
}
