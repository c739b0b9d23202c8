/// Unwraps a `Result` inside a function that returns `Option<Result<T, E>>`.
///
/// Evaluates to the `Ok` value, or makes the enclosing function return
/// `Some(Err(e))` on failure. Intended for `next()` implementations of
/// `Iterator<Item = Result<T, E>>` that call fallible traversal steps: a step
/// error becomes the iterator's next item instead of ending the iteration
/// silently.
#[macro_export]
macro_rules! try_step {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => {
                return Some(Err(err));
            }
        }
    };
}
