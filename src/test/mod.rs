//! Test helpers and the checks that need the tree's internals (and `Tree::validate`).


/// Routes `log` output to the test harness so it's captured per test.
pub(crate) fn init_logging() {
    // Another test may have installed the logger already.
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Debug, simplelog::Config::default());
}
