/// Returns early with an error if a condition doesn't hold
///
/// Like `assert!`, but returns `Err($err)` from the enclosing function instead of panicking.
/// Equivalent to `if !$cond { return Err($err); }`
///
/// ```
/// # use ensure_macro::ensure;
/// #[derive(Debug, PartialEq)]
/// enum CheckError {
///     AboveCheckpoint(u64)
/// }
///
/// fn below_checkpoint(height: u64, checkpoint: u64) -> Result<u64, CheckError> {
///     ensure!(height <= checkpoint, CheckError::AboveCheckpoint(height));
///     Ok(checkpoint - height)
/// }
///
/// assert_eq!(below_checkpoint(90, 100), Ok(10));
/// assert_eq!(below_checkpoint(101, 100), Err(CheckError::AboveCheckpoint(101)));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
