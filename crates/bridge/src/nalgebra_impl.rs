use crate::GraphicsVector3;
use nalgebra::{Point3, Vector3};

impl GraphicsVector3 for Vector3<f32> {
    #[inline]
    fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Vector3::new(x, y, z)
    }
}

impl GraphicsVector3 for Point3<f32> {
    #[inline]
    fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Point3::new(x, y, z)
    }
}
