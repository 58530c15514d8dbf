/// Asserts that evaluating `$run` panics. The expression is wrapped in
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe) so that it can borrow collections mutably.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:expr) => {
        assert_panics!($run, "expression failed to panic")
    };
    ($run:expr, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| { $run; })).is_err(),
            $msg
        );
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
