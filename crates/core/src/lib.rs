//! Vector Math Core Library
//!
//! A small `f32` vector value type for spatial and colour data, with element-wise
//! arithmetic, exact comparison, magnitude, normalisation and cross product.
//!
//! The types here carry no graphics-API dependency. Conversions into a
//! graphics library's vector live in the `vecmath-bridge` crate.
//!
//! ## Features
//!
//! - `bytemuck`: derives `Pod`/`Zeroable` on [`Vec3`] for GPU buffer uploads

// Core types
pub mod core_types;

// Re-export core types
pub use core_types::{Vec3, Vector};
