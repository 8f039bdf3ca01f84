//! Application layer - Use cases and orchestration

pub mod convert;

pub use convert::{ConversionReport, ConvertService};
