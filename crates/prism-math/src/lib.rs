//! # prism-math
//! Fixed-size vector math primitives for prism.
//!
//! The crate provides one generic vector family, [`Vector<T, N>`], with
//! dimension-specific surface for 2, 3 and 4 components. All arithmetic is
//! implemented once against the underlying element sequence and
//! monomorphized per dimension, so a [`Vec3<f32>`] compiles to the same
//! code as a hand-written three-float struct.

pub mod vector;

pub use vector::{
    vec2, vec3, vec4, Vec2, Vec2d, Vec2f, Vec2i, Vec2u, Vec3, Vec3d, Vec3f, Vec3i, Vec3u, Vec4,
    Vec4d, Vec4f, Vec4i, Vec4u, Vector, XY, XYZ, XYZW,
};

/// Machine epsilon for double precision floating point numbers.
pub const MACHINE_EPSILON_F64: f64 = f64::EPSILON * 0.5;

/// Machine epsilon for single precision floating point numbers.
pub const MACHINE_EPSILON_F32: f32 = f32::EPSILON * 0.5;

/// Equality test of two floating point numbers.
///
/// Exact equality on vector components is the default (`==`); this helper is
/// for callers that need a units-in-the-last-place comparison instead.
///
/// # Arguments
///
/// * `a`: The first number.
/// * `b`: The second number.
///
/// returns: bool
pub fn ulp_eq(a: f32, b: f32) -> bool {
    let diff = (a - b).abs();
    let a_abs = a.abs();
    let b_abs = b.abs();
    if a == b {
        true
    } else if a == 0.0 || b == 0.0 || a_abs < f32::MIN_POSITIVE || b_abs < f32::MIN_POSITIVE {
        diff < (f32::MIN_POSITIVE * f32::EPSILON)
    } else {
        (diff / f32::min(a_abs + b_abs, f32::MAX)) < f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::{ulp_eq, MACHINE_EPSILON_F32};

    #[test]
    fn test_ulp_eq() {
        assert!(ulp_eq(0.0, 0.0));
        assert!(ulp_eq(1.0, 1.0 + MACHINE_EPSILON_F32));
        assert!(ulp_eq(1.0, 1.0 + 1e-7 * 0.5));
        assert!(ulp_eq(1.0, 1.0 - 1e-7 * 0.5));
        assert!(!ulp_eq(1.0, 1.0 + 1e-6));
        assert!(!ulp_eq(1.0, 1.0 - 1e-6));
    }
}
