//! Three-dimensional vectors.

use super::base::Vector;
use num_traits::{Num, One, Zero};

/// A three-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;

/// A three-dimensional vector with `f32` elements.
pub type Vec3f = Vec3<f32>;

/// A three-dimensional vector with `f64` elements.
pub type Vec3d = Vec3<f64>;

/// A three-dimensional vector with `i32` elements.
pub type Vec3i = Vec3<i32>;

/// A three-dimensional vector with `u32` elements.
pub type Vec3u = Vec3<u32>;

/// Creates a three-dimensional vector from its components.
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> { Vector([x, y, z]) }

impl<T> Vector<T, 3> {
    /// Creates a vector from its three components.
    pub const fn new(x: T, y: T, z: T) -> Self { Self([x, y, z]) }

    /// Extends the vector with a w component, placing it last.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, w])
    }

    /// Drops the z component, producing a two-dimensional vector.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }
}

impl<T: Num + Copy> Vector<T, 3> {
    /// Computes the cross product of the two vectors.
    ///
    /// The result is perpendicular to both inputs, with
    /// `a.cross(b) == -(b.cross(a))`, up to the element type's rounding.
    pub fn cross(self, rhs: Self) -> Self {
        Self([
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        ])
    }
}

impl<T: Zero + One> Vector<T, 3> {
    /// The unit vector along the x axis.
    pub fn unit_x() -> Self { Self([T::one(), T::zero(), T::zero()]) }

    /// The unit vector along the y axis.
    pub fn unit_y() -> Self { Self([T::zero(), T::one(), T::zero()]) }

    /// The unit vector along the z axis.
    pub fn unit_z() -> Self { Self([T::zero(), T::zero(), T::one()]) }
}

/// Extension constructor: the scalar becomes the last element.
impl<T> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    fn from((v, z): (Vector<T, 2>, T)) -> Self { v.extend(z) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{vec2, vec4};
    use proptest::prelude::*;

    #[test]
    fn construction_and_access() {
        let v = Vec3::new(5, 6, 7);
        assert_eq!(v[0], 5);
        assert_eq!(v.x, 5);
        assert_eq!(v[1], 6);
        assert_eq!(v.y, 6);
        assert_eq!(v[2], 7);
        assert_eq!(v.z, 7);
    }

    #[test]
    fn extension() {
        assert_eq!(Vec3::from((vec2(1, 2), 3)), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).extend(4), vec4(1, 2, 3, 4));
        assert_eq!(vec3(1, 2, 3).truncate(), vec2(1, 2));
    }

    #[test]
    fn cross_product() {
        // Right-handed basis.
        assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 0)), vec3(0, 0, 1));
        assert_eq!(vec3(1.0, 2.0, 3.0).cross(vec3(4.0, 5.0, 6.0)), vec3(-3.0, 6.0, -3.0));
    }

    #[test]
    fn cross_orthogonality_under_rounding() {
        let a = vec3(0.3f32, -1.7, 2.9);
        let b = vec3(4.1f32, 0.2, -0.8);
        let c = a.cross(b);
        approx::assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1.0e-4);
        approx::assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1.0e-4);
    }

    #[test]
    fn unit_axes() {
        assert_eq!(Vec3i::unit_x(), vec3(1, 0, 0));
        assert_eq!(Vec3f::unit_y(), vec3(0.0, 1.0, 0.0));
        assert_eq!(Vec3f::unit_x().cross(Vec3f::unit_y()), Vec3f::unit_z());
    }

    proptest! {
        #[test]
        fn cross_is_anti_commutative(a in prop::array::uniform3(-1_000i64..1_000),
                                     b in prop::array::uniform3(-1_000i64..1_000))
        {
            let (a, b) = (Vector(a), Vector(b));
            prop_assert_eq!(a.cross(b), -b.cross(a));
        }

        #[test]
        fn cross_is_orthogonal_to_its_inputs(a in prop::array::uniform3(-1_000i64..1_000),
                                             b in prop::array::uniform3(-1_000i64..1_000))
        {
            let (a, b) = (Vector(a), Vector(b));
            let c = a.cross(b);
            prop_assert_eq!(c.dot(a), 0);
            prop_assert_eq!(c.dot(b), 0);
        }
    }
}
