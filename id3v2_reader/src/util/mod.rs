//! Utilities for working with ID3v2 data

pub(crate) mod alloc;
pub mod synchsafe;
pub(crate) mod text;
mod upgrade;

pub use upgrade::upgrade_v2;
