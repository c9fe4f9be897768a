//! Macros for last-resort debugging.
//!
//! Decoding errors only tell what went wrong and where in the data. They
//! don’t tell which check in the decoder produced them. To help with that
//! when chasing odd data, this module contains a macro `xerr!()` that
//! prints a backtrace if the `extra-debug` feature is enabled before
//! resolving into the expression it encloses. Use it whenever you initially
//! produce a decoding error, i.e.:
//!
//! ```rust,ignore
//! if truncated {
//!     return xerr!(Err(DecodeError::new(ErrorKind::TruncatedBody, pos)))
//! }
//! ```
//!
//! Without the feature, the macro is nothing but its argument.

#[cfg(feature="extra-debug")]
pub use backtrace::Backtrace;

#[cfg(feature = "extra-debug")]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => {{
        eprintln!(
            "--- EXTRA DEBUG ---\n{:?}\n--- EXTRA DEBUG ---",
            $crate::debug::Backtrace::new()
        );
        $test
    }}
}

#[cfg(not(feature = "extra-debug"))]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => { $test };
}
