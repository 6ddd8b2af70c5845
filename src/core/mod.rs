//! Core domain logic for the HYDROBLT landing page
//!
//! Everything here is plain Rust with no browser dependencies: the intro
//! timeline, thunder synthesis parameters, the viewport trigger and the
//! waitlist store. The `ui` module wires these into the DOM and Web Audio.

#[cfg(feature = "ssr")]
pub mod config;
mod intro;
mod thunder;
mod viewport;
mod waitlist;

pub use intro::*;
pub use thunder::*;
pub use viewport::*;
pub use waitlist::*;
