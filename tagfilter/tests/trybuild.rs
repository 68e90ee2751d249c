#[test]
fn derive_test() {
    let t = trybuild::TestCases::new();
    t.pass("tests/macro/*.rs");
}
