//! Logging facade
//!
//! Re-exports the `log` macros (host builds) or the `defmt` macros
//! (embedded builds). With neither feature the macros compile to nothing.
//!
//! Format strings must stick to `{}` and `{:?}` so they work with both.

#![allow(unused_imports, unused_macros)]

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        pub use log::{debug, error, info, trace, warn};
    } else if #[cfg(feature = "defmt")] {
        pub use defmt::{debug, error, info, trace, warn};
    } else {
        macro_rules! noop {
            ($($arg:tt)*) => {{}};
        }
        pub(crate) use noop as trace;
        pub(crate) use noop as debug;
        pub(crate) use noop as info;
        pub(crate) use noop as warn;
        pub(crate) use noop as error;
    }
}
