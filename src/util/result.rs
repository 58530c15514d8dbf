use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Similar to [`Result::unwrap`], except that it only applies to [`Error`] types and panics
    /// with the error's own message rather than its debug representation.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
