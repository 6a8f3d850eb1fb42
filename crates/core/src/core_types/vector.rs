//! Operations shared by vector value types.

use super::vec3::Vec3;

/// Common interface for fixed-size `f32` vector values.
///
/// Lets callers write code against "some vector" without naming [`Vec3`].
///
/// # Example
/// ```rust
/// use vecmath_core::{Vec3, Vector};
///
/// fn direction<V: Vector>(v: V) -> V {
///     v.normalised()
/// }
///
/// assert_eq!(direction(Vec3::new(0.0, 2.0, 0.0)), Vec3::new(0.0, 1.0, 0.0));
/// ```
pub trait Vector: Copy {
    /// Euclidean norm
    fn magnitude(self) -> f32;

    /// Alias for [`Vector::magnitude`]
    fn length(self) -> f32 {
        self.magnitude()
    }

    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is exactly zero
    fn normalised(self) -> Self;

    /// Scalar product with `other`
    fn dot(self, other: Self) -> f32;
}

impl Vector for Vec3 {
    #[inline]
    fn magnitude(self) -> f32 {
        Vec3::magnitude(self)
    }

    #[inline]
    fn normalised(self) -> Self {
        Vec3::normalised(self)
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        Vec3::dot(self, other)
    }
}
