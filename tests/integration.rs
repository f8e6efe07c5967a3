//! End-to-end window scrolling, the way a viewport consumer drives the API.

use data_range::{DataRange, ErrorContext, Range};

/// Pretend upstream: the value at index `i` is `i * i`.
fn fetch(range: Range) -> Vec<i64> {
    range.iter().map(|i| i * i).collect()
}

fn fill_unknowns(data: &mut DataRange<i64>) {
    let window = data.range();
    let missing: Vec<i64> = data.iter().filter(|(_, v)| v.is_none()).map(|(i, _)| i).collect();
    if let (Some(&first), Some(&last)) = (missing.first(), missing.last()) {
        let gap = Range::new(first, last + 1).unwrap().intersection(window);
        data.update_values(gap, &fetch(gap));
    }
}

#[test]
fn scrolling_viewport_only_fetches_revealed_rows() {
    let mut data = DataRange::new();
    let mut fetched = 0usize;

    for top in [0i64, 5, 8, 3, 40] {
        let viewport = Range::new(top, top + 10).unwrap();
        let revealed = data.range().difference(viewport);
        revealed.patch(|added| fetched += added.len(), |_| {});

        data.update_range(viewport);
        fill_unknowns(&mut data);

        assert_eq!(data.range(), viewport);
        assert_eq!(data.get(viewport), fetch(viewport).into_iter().map(Some).collect::<Vec<_>>());
    }

    // 10 initially, +5, +3, +5 scrolling back up, +10 after the jump.
    assert_eq!(fetched, 33);
}

#[test]
fn infinite_feed_appends_and_trims() {
    let mut data = DataRange::from_values(0, ["a", "b", "c"]).unwrap();
    data.push(["d", "e"]).unwrap();
    while data.len() > 3 {
        data.shift();
    }
    assert_eq!(data.range().to_string(), "[2, 5)");
    assert_eq!(data.get(data.range()), vec![Some("c"), Some("d"), Some("e")]);
}

#[test]
fn parsed_windows_report_context_on_failure() {
    let window: Range = "[10, 20)".parse().unwrap();
    assert_eq!(window.len(), 10);

    let err = "[20, 10)"
        .parse::<Range>()
        .with_context(|| "parsing viewport from query string".to_string())
        .unwrap_err();
    assert!(err.to_string().starts_with("parsing viewport from query string: Domain error:"));
}

#[test]
fn version_is_exposed() {
    assert!(!data_range::VERSION.is_empty());
}
