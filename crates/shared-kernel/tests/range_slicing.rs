use data_range_shared_kernel::Range;

fn r(start: i64, end: i64) -> Range {
    Range::new(start, end).unwrap()
}

#[test]
fn first_and_last_clip_to_the_range() {
    let range = r(10, 20);
    assert_eq!(range.first(0), Range::EMPTY);
    assert_eq!(range.first(5), r(10, 15));
    assert_eq!(range.first(50), range);
    assert_eq!(range.last(0), Range::EMPTY);
    assert_eq!(range.last(5), r(15, 20));
    assert_eq!(range.last(50), range);
}

#[test]
fn before_and_after_are_adjacent() {
    let range = r(10, 20);
    assert_eq!(range.before(0), Range::EMPTY);
    assert_eq!(range.before(4), r(6, 10));
    assert_eq!(range.after(0), Range::EMPTY);
    assert_eq!(range.after(4), r(20, 24));
    assert_eq!(Range::EMPTY.before(3), r(-3, 0));
}

#[test]
fn add_extends_one_side() {
    let range = r(10, 20);
    assert_eq!(range.add_before(3), r(7, 20));
    assert_eq!(range.add_after(3), r(10, 23));
    assert_eq!(range.add_after(0), range);
    assert_eq!(Range::EMPTY.add_after(2), r(0, 2));
}

#[test]
fn remove_shrinks_one_side_and_collapses() {
    let range = r(10, 20);
    assert_eq!(range.remove_first(3), r(13, 20));
    assert_eq!(range.remove_last(3), r(10, 17));
    assert_eq!(range.remove_first(10), Range::EMPTY);
    assert_eq!(range.remove_first(25), Range::EMPTY);
    assert_eq!(range.remove_last(25), Range::EMPTY);
    assert_eq!(Range::EMPTY.remove_last(1), Range::EMPTY);
}

#[test]
fn for_each_yields_ascending_indices() {
    let mut seen = Vec::new();
    r(12, 15).for_each(|idx| seen.push(idx));
    assert_eq!(seen, vec![12, 13, 14]);

    Range::EMPTY.for_each(|_| panic!("empty range has no indices"));
    assert_eq!(r(-2, 1).into_iter().collect::<Vec<_>>(), vec![-2, -1, 0]);
}
