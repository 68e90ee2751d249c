use tagfilter::prelude::*;

#[derive(FilterSource)]
struct Between<T: ToValue> {
    #[filter = "opt:>="]
    low: T,
    #[filter = "opt:<="]
    high: T,
}

#[derive(FilterSource)]
struct Nothing;

fn main() {
    let scope = tagfilter::build_from_struct(&Between { low: 1.5, high: 9.0 }).unwrap();
    assert_eq!(scope.condition(), Some("low >= ? AND high <= ?"));

    assert!(tagfilter::build_from_struct(&Nothing).unwrap().is_noop());
}
