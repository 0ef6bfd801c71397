//! Application state module

mod form;

pub use form::*;
