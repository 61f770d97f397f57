use super::*;

#[test]
fn test_span_merge() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged, Span::new(10, 30));
}

#[test]
fn test_span_overlaps() {
    let a = Span::new(10, 20);
    assert!(a.overlaps(Span::new(19, 25)));
    assert!(a.overlaps(Span::new(0, 11)));
    // touching spans do not overlap
    assert!(!a.overlaps(Span::new(20, 25)));
    assert!(!a.overlaps(Span::new(5, 10)));
}

#[test]
fn test_point_overlaps_only_strictly_inside() {
    let a = Span::new(10, 20);
    assert!(a.overlaps(Span::point(15)));
    assert!(Span::point(15).overlaps(a));
    assert!(!a.overlaps(Span::point(10)));
    assert!(!a.overlaps(Span::point(20)));
    assert!(!Span::point(4).overlaps(Span::point(4)));
}

#[test]
fn test_span_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Span::new(0, 10));
    set.insert(Span::new(0, 10)); // duplicate
    set.insert(Span::new(5, 15));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_span_try_from_range_success() {
    let Ok(span) = Span::try_from_range(50..100) else {
        panic!("expected Ok for valid range");
    };
    assert_eq!(span, Span::new(50, 100));
    assert_eq!(span.to_range(), 50..100);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_span_try_from_range_overflow() {
    let too_big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(too_big..too_big + 1),
        Err(SpanError::StartTooLarge(too_big))
    );
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(3, 9).to_string(), "3..9");
    assert_eq!(format!("{:?}", Span::new(3, 9)), "3..9");
}
