/// Converts an error type into the crate-level [`crate::Error`] enum.
///
/// ```ignore
/// isograph::impl_err!(GraphError, Graph);
/// ```
#[macro_export]
macro_rules! impl_err {
    ($from:ty, $variant:ident) => {
        impl From<$from> for $crate::Error {
            fn from(value: $from) -> Self {
                $crate::Error::$variant(value)
            }
        }
    };
}
