//! Console plumbing shared by the `helloworld` and `secure_loader` UEFI
//! applications.
//!
//! Everything except [`firmware`] is plain `no_std` code written against the
//! [`Console`] trait, so it runs (and is tested) on the host as well.

#![cfg_attr(not(test), no_std)]

pub mod banner;
pub mod console;
pub mod format;
pub mod session;
pub mod ucs2;

#[cfg(feature = "firmware")]
pub mod firmware;

pub use console::{Console, FirmwareInfo, KeyPress};
pub use format::{copy_bounded, format_bounded, format_bounded_checked, Arg, Formatted};
