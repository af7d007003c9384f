//! Typed append-only column storage for quadro frames.
//!
//! This crate focuses on:
//! - One native storage variant per primitive type (int / float / string /
//!   bool) behind a single [`Column`] surface.
//! - NA tracking via a validity bitmap, never via in-band sentinel values.
//! - Value coercion at append time, so every row-input shape funnels through
//!   the same typed checks.
//! - Per-position string rendering, which the frame layer composes into its
//!   tabular display.

#![forbid(unsafe_code)]

mod bitmap;
mod column;
mod types;

pub use crate::bitmap::BitVec;
pub use crate::column::{Column, ColumnError};
pub use crate::types::{ColumnType, Value};
