//! gold-price-rs: headless engines for a bilingual gold-price page.
//!
//! The crate keeps pricing arithmetic, locale numerals and the chart hover
//! animation free of any DOM or drawing code. Hosts plug in a form surface,
//! a chart renderer, a frame scheduler and preference storage.

pub mod api;
pub mod chart;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod localization;
pub mod pricing;
pub mod render;
pub mod telemetry;

pub use api::{GoldPage, PageConfig};
pub use error::{GoldError, GoldResult};
