use crate::GraphicsVector3;

impl GraphicsVector3 for glam::Vec3 {
    #[inline]
    fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        glam::Vec3::new(x, y, z)
    }
}

impl GraphicsVector3 for glam::Vec3A {
    #[inline]
    fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        glam::Vec3A::new(x, y, z)
    }
}
