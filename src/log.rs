//  LOG.rs
//    by Lut99
//
//  Created:
//    14 Apr 2025, 10:06:51
//  Last edited:
//    16 Apr 2025, 09:12:30
//  Auto updated?
//    Yes
//
//  Description:
//!   Provides [`log`]-macro counterparts that conditionally log if the
//!   appropriate feature is given.
//!
//!   The calculator is a library first; only the `setcal` binary (or a test
//!   run with `LOGGER=1`) actually installs a logger.
//


/***** LIBRARY *****/
/// Mirrors the `info!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature enabled, this macro has exactly the same behaviour.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! info {
    ($($t:tt)*) => {
        ::log::info!($($t)*)
    };
}
/// Mirrors the `info!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature disabled, this macro does nothing.
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! info {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use info;

/// Mirrors the `debug!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature enabled, this macro has exactly the same behaviour.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! debug {
    ($($t:tt)*) => {
        ::log::debug!($($t)*)
    };
}
/// Mirrors the `debug!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature disabled, this macro does nothing.
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! debug {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use debug;

/// Mirrors the `trace!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature enabled, this macro has exactly the same behaviour.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! trace {
    ($($t:tt)*) => {
        ::log::trace!($($t)*)
    };
}
/// Mirrors the `trace!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature disabled, this macro does nothing.
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! trace {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use trace;

/// Mirrors the `warn!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature enabled, this macro has exactly the same behaviour.
#[cfg(feature = "log")]
#[allow(unused)]
macro_rules! warn_ {
    ($($t:tt)*) => {
        ::log::warn!($($t)*)
    };
}
/// Mirrors the `warn!()`-macro from the [`log`](https://github.com/rust-lang/log)-crate.
///
/// With the `log`-feature disabled, this macro does nothing.
#[cfg(not(feature = "log"))]
#[allow(unused)]
macro_rules! warn_ {
    ($($t:tt)*) => {};
}
#[allow(unused)]
pub(crate) use warn_ as warn;
