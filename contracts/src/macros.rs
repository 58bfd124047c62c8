/// Path to a checked-in test fixture, relative to `src/<module>/fixtures/`.
///
/// With only a module name, expands to the fixtures directory itself.
#[macro_export]
macro_rules! test_fixture {
    ($module:expr) => {
        format!("{}/src/{}/fixtures", env!("CARGO_MANIFEST_DIR"), $module)
    };
    ($module:expr, $file:expr) => {
        format!("{}/{}", $crate::test_fixture!($module), $file)
    };
}
