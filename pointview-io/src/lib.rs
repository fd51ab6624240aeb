//! Input parsing for pointview
//!
//! Reads the whitespace-delimited `x y z` text files written by the external
//! point generator into a [`pointview_core::PointSet`].

pub mod xyz;

pub use xyz::XyzReader;
