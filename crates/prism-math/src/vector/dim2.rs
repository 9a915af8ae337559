//! Two-dimensional vectors.

use super::base::Vector;
use num_traits::{One, Zero};

/// A two-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;

/// A two-dimensional vector with `f32` elements.
pub type Vec2f = Vec2<f32>;

/// A two-dimensional vector with `f64` elements.
pub type Vec2d = Vec2<f64>;

/// A two-dimensional vector with `i32` elements.
pub type Vec2i = Vec2<i32>;

/// A two-dimensional vector with `u32` elements.
pub type Vec2u = Vec2<u32>;

/// Creates a two-dimensional vector from its components.
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> { Vector([x, y]) }

impl<T> Vector<T, 2> {
    /// Creates a vector from its two components.
    pub const fn new(x: T, y: T) -> Self { Self([x, y]) }

    /// Extends the vector with a z component, placing it last.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, z])
    }
}

impl<T: Zero + One> Vector<T, 2> {
    /// The unit vector along the x axis.
    pub fn unit_x() -> Self { Self([T::one(), T::zero()]) }

    /// The unit vector along the y axis.
    pub fn unit_y() -> Self { Self([T::zero(), T::one()]) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec3;

    #[test]
    fn construction_and_access() {
        let v = Vec2::new(3.0, -1.5);
        assert_eq!(v, vec2(3.0, -1.5));
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, -1.5);
        assert_eq!(v[0], v.x);
        assert_eq!(v[1], v.y);
    }

    #[test]
    fn extension() {
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
    }

    #[test]
    fn unit_axes() {
        assert_eq!(Vec2i::unit_x(), vec2(1, 0));
        assert_eq!(Vec2f::unit_y(), vec2(0.0, 1.0));
        assert_eq!(Vec2f::unit_x().dot(Vec2f::unit_y()), 0.0);
    }
}
