//! Core value types

pub mod vec3;
pub mod vector;

pub use vec3::Vec3;
pub use vector::Vector;
