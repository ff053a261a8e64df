use crate::clipper::scanbeam::Scanbeam;

#[test]
fn test_pops_largest_first() {
    let mut scanbeam = Scanbeam::new();
    for y in [10, -4, 35, 0, 12] {
        scanbeam.insert(y);
    }

    let popped: Vec<i64> = std::iter::from_fn(|| scanbeam.pop()).collect();
    assert_eq!(popped, vec![35, 12, 10, 0, -4]);
    assert!(scanbeam.is_empty());
    assert_eq!(scanbeam.pop(), None);
}

#[test]
fn test_duplicates_collapse() {
    let mut scanbeam = Scanbeam::new();
    scanbeam.insert(5);
    scanbeam.insert(5);
    scanbeam.insert(3);
    assert_eq!(scanbeam.len(), 2);

    assert_eq!(scanbeam.pop(), Some(5));
    scanbeam.insert(5);
    assert_eq!(scanbeam.pop(), Some(5));
    assert_eq!(scanbeam.pop(), Some(3));
}
