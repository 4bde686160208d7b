//! Internal logging macro.
//!
//! Expands to `tracing::trace!` with the `tracing` feature and to nothing
//! without it, so the hot paths carry no logging cost by default.

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace_event;
