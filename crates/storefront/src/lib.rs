//! Pocket Shop storefront library.
//!
//! Owns the shopping [`Session`](session::Session), the screen stack, and the
//! text screens rendered from it. The `pocket-shop` binary drives it from a
//! terminal; tests drive it directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod navigation;
pub mod screens;
pub mod session;
