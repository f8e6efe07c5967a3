use data_range_shared_kernel::Range;

#[test]
fn renders_as_half_open_interval() {
    assert_eq!(Range::new(23, 45).unwrap().to_string(), "[23, 45)");
    assert_eq!(Range::new(-4, -1).unwrap().to_string(), "[-4, -1)");
    assert_eq!(Range::EMPTY.to_string(), "[0, 0)");
}

#[test]
fn parses_what_it_renders() {
    let range = Range::new(-7, 12).unwrap();
    assert_eq!(range.to_string().parse::<Range>().unwrap(), range);
    assert_eq!("[9, 9)".parse::<Range>().unwrap(), Range::EMPTY);
}
