use super::*;

#[test]
fn test_key_points_are_the_given_ticks() {
    let axis = FixedTicks::new(0.5..4.5, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(axis.key_points(10usize), vec![1.0, 2.0, 3.0, 4.0]);
    // The tick list does not shrink with a small hint.
    assert_eq!(axis.key_points(2usize).len(), 4);
}

#[test]
fn test_map_and_range_follow_the_float_range() {
    let axis = FixedTicks::new(0.0..2.0, vec![0.5, 1.5]);
    assert_eq!(axis.range(), 0.0..2.0);
    assert_eq!(axis.map(&0.0, (0, 200)), 0);
    assert_eq!(axis.map(&2.0, (0, 200)), 200);
    assert_eq!(axis.map(&0.5, (0, 200)), 50);
}

#[test]
fn test_default_format_prints_the_value() {
    assert_eq!(<FixedTicks as ValueFormatter<f64>>::format(&3.0), "3");
}
