//!
//! Crate wide error type. Every client call returns a
//! [color_eyre::Report](https://docs.rs/eyre/0.6.8/eyre/struct.Report.html),
//! and the report raised by the chain client is handed back to the caller as-is.
//!

pub use color_eyre::eyre::eyre;
pub use color_eyre::Report;
