//! Four-dimensional vectors.

use super::base::Vector;
use num_traits::{One, Zero};

/// A four-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// A four-dimensional vector with `f32` elements.
pub type Vec4f = Vec4<f32>;

/// A four-dimensional vector with `f64` elements.
pub type Vec4d = Vec4<f64>;

/// A four-dimensional vector with `i32` elements.
pub type Vec4i = Vec4<i32>;

/// A four-dimensional vector with `u32` elements.
pub type Vec4u = Vec4<u32>;

/// Creates a four-dimensional vector from its components.
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> { Vector([x, y, z, w]) }

impl<T> Vector<T, 4> {
    /// Creates a vector from its four components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self { Self([x, y, z, w]) }

    /// Drops the w component, producing a three-dimensional vector.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T: Zero + One> Vector<T, 4> {
    /// The unit vector along the x axis.
    pub fn unit_x() -> Self { Self([T::one(), T::zero(), T::zero(), T::zero()]) }

    /// The unit vector along the y axis.
    pub fn unit_y() -> Self { Self([T::zero(), T::one(), T::zero(), T::zero()]) }

    /// The unit vector along the z axis.
    pub fn unit_z() -> Self { Self([T::zero(), T::zero(), T::one(), T::zero()]) }

    /// The unit vector along the w axis.
    pub fn unit_w() -> Self { Self([T::zero(), T::zero(), T::zero(), T::one()]) }
}

/// Extension constructor: the scalar becomes the last element.
impl<T> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    fn from((v, w): (Vector<T, 3>, T)) -> Self { v.extend(w) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec3;

    #[test]
    fn construction_and_access() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
        assert_eq!(v[3], v.w);
    }

    #[test]
    fn extension() {
        let v = vec2_to_vec4();
        assert_eq!(v, vec4(1, 2, 3, 4));
        assert_eq!(Vec4::from((vec3(1, 2, 3), 4)), vec4(1, 2, 3, 4));
        assert_eq!(vec4(1, 2, 3, 4).truncate(), vec3(1, 2, 3));
    }

    // Chained promotion from the lowest dimension up.
    fn vec2_to_vec4() -> Vec4<i32> {
        crate::vector::vec2(1, 2).extend(3).extend(4)
    }

    #[test]
    fn unit_axes() {
        assert_eq!(Vec4i::unit_w(), vec4(0, 0, 0, 1));
        assert_eq!(Vec4f::unit_x().dot(Vec4f::unit_w()), 0.0);
    }
}
