#[test]
fn version_matches_the_package() {
    assert_eq!(strata::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!strata::VERSION.is_empty());
}
