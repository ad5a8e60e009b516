//! Internationalization for Todo Smart
//!
//! This crate provides the locale identifier and text direction the
//! application renders with. The app ships a single Persian locale;
//! screens own their literal text, so there is no translation catalog.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;

pub use lang::{Locale, LocaleError, TextDirection, DEFAULT_LOCALE};
