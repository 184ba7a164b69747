#![forbid(unsafe_code)]

//! Shared primitives for Klaxon: geometry, color, fonts, and the text
//! measurement seam.
//!
//! This crate has no opinion about rendering. Everything here is a plain
//! value type except [`TextMeasurer`], the trait behind which hosts plug
//! their own text stack. [`MonospaceMetrics`] is a deterministic reference
//! implementation used by the layout tests and by hosts that have none.

pub mod color;
pub mod font;
pub mod geometry;
pub mod measure;

pub use color::Rgba;
pub use font::{FontSpec, FontWeight};
pub use geometry::{Point, Rect, Size};
pub use measure::{MonospaceMetrics, TextMeasurer};
