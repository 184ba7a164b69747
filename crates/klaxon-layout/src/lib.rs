#![forbid(unsafe_code)]

//! Deterministic alert panel layout.
//!
//! [`compute_layout`] is a pure function from alert content and
//! [`LayoutMetrics`] to a [`GeometryPlan`]: the container rectangle plus
//! every child frame (text blocks, hairline dividers, action slots). It does
//! no rendering, no logging, and touches no global state, so plans can be
//! unit-tested without a surface and are bit-identical across repeated
//! calls with equal inputs.
//!
//! Text is measured through the [`klaxon_core::TextMeasurer`] seam; the
//! engine itself never looks at glyphs.

mod engine;
mod metrics;
mod plan;

pub use engine::compute_layout;
pub use metrics::{AlertContent, LayoutMetrics};
pub use plan::GeometryPlan;
