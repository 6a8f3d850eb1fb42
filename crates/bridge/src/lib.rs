//! Adapters from [`Vec3`] into graphics-library vector types.
//!
//! `vecmath-core` knows nothing about any graphics API. This crate is the one
//! place where a [`Vec3`] crosses into a renderer's or math library's own
//! 3-component vector. The conversion is one-directional.
//!
//! # Example
//! ```rust
//! use nalgebra::Vector3;
//! use vecmath_bridge::{to_graphics, Vec3GraphicsExt};
//! use vecmath_core::Vec3;
//!
//! let v = Vec3::new(1.0, 2.0, 3.0);
//! let a: Vector3<f32> = to_graphics(v);
//! assert_eq!(a, v.as_nalgebra());
//! ```
//!
//! ## Features
//!
//! - `glam`: adapters for `glam::Vec3` and `glam::Vec3A`

use nalgebra::Vector3;
use vecmath_core::Vec3;

#[cfg(feature = "glam")]
mod glam_impl;
mod nalgebra_impl;

/// A graphics library's 3-component `f32` vector.
///
/// Implementations build the value from components in `(x, y, z)` order and
/// copy them verbatim.
pub trait GraphicsVector3 {
    fn from_xyz(x: f32, y: f32, z: f32) -> Self;
}

/// Convert `v` into the graphics vector type `G`.
#[inline]
pub fn to_graphics<G: GraphicsVector3>(v: Vec3) -> G {
    G::from_xyz(v.x, v.y, v.z)
}

/// Graphics conversions as methods on [`Vec3`].
pub trait Vec3GraphicsExt {
    /// Convert into any [`GraphicsVector3`].
    fn as_graphics_vector<G: GraphicsVector3>(&self) -> G;

    /// Convert into a `nalgebra` column vector.
    fn as_nalgebra(&self) -> Vector3<f32>;
}

impl Vec3GraphicsExt for Vec3 {
    #[inline]
    fn as_graphics_vector<G: GraphicsVector3>(&self) -> G {
        to_graphics(*self)
    }

    #[inline]
    fn as_nalgebra(&self) -> Vector3<f32> {
        to_graphics(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Records the order components arrive in
    #[derive(Debug, PartialEq)]
    struct Recorded([f32; 3]);

    impl GraphicsVector3 for Recorded {
        fn from_xyz(x: f32, y: f32, z: f32) -> Self {
            Recorded([x, y, z])
        }
    }

    #[test]
    fn test_components_pass_in_xyz_order() {
        let v = Vec3::from_rgb(0.1, 0.2, 0.3);
        assert_eq!(to_graphics::<Recorded>(v), Recorded([0.1, 0.2, 0.3]));
        assert_eq!(v.as_graphics_vector::<Recorded>(), Recorded([0.1, 0.2, 0.3]));
    }

    #[test]
    fn test_conversion_leaves_source_untouched() {
        let v = Vec3::new(4.0, 5.0, 6.0);
        let _ = v.as_nalgebra();
        assert_eq!(v, Vec3::new(4.0, 5.0, 6.0));
    }
}
