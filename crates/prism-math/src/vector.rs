//! Fixed-size vector types.
//!
//! [`Vector<T, N>`] carries every operation that is well defined for an
//! arbitrary dimension; the `dim*` modules add the named-field views,
//! constructors and operations that only exist for a specific dimension.

/// Generates the element-wise binary operators together with their
/// compound-assignment forms.
macro_rules! impl_elementwise_ops {
    ($($op:ident),* for $t:ident) => {
        paste::paste! {
            $(
                impl<T, const N: usize> core::ops::$op for $t<T, N>
                where
                    T: core::ops::$op<Output = T> + Copy,
                {
                    type Output = $t<T, N>;

                    fn [<$op:lower>](self, rhs: Self) -> Self::Output {
                        $t(core::array::from_fn(|i| self.0[i].[<$op:lower>](rhs.0[i])))
                    }
                }

                impl<T, const N: usize> core::ops::[<$op Assign>] for $t<T, N>
                where
                    T: core::ops::[<$op Assign>] + Copy,
                {
                    fn [<$op:lower _assign>](&mut self, rhs: Self) {
                        for i in 0..N {
                            self.0[i].[<$op:lower _assign>](rhs.0[i]);
                        }
                    }
                }
            )*
        }
    };
}

/// Generates the vector-by-scalar operators together with their
/// compound-assignment forms. Division by a zero scalar follows the element
/// type's native semantics: infinity or NaN for floats, a panic for
/// integers.
macro_rules! impl_scalar_ops {
    ($($op:ident),* for $t:ident) => {
        paste::paste! {
            $(
                impl<T, const N: usize> core::ops::$op<T> for $t<T, N>
                where
                    T: core::ops::$op<Output = T> + Copy,
                {
                    type Output = $t<T, N>;

                    fn [<$op:lower>](self, rhs: T) -> Self::Output {
                        $t(core::array::from_fn(|i| self.0[i].[<$op:lower>](rhs)))
                    }
                }

                impl<T, const N: usize> core::ops::[<$op Assign>]<T> for $t<T, N>
                where
                    T: core::ops::[<$op Assign>] + Copy,
                {
                    fn [<$op:lower _assign>](&mut self, rhs: T) {
                        for i in 0..N {
                            self.0[i].[<$op:lower _assign>](rhs);
                        }
                    }
                }
            )*
        }
    };
}

/// Generates `scalar * vector` for the primitive numeric types, one impl
/// per primitive.
macro_rules! impl_scalar_lhs_mul {
    ($t:ident: $($s:ty),*) => {
        $(
            impl<const N: usize> core::ops::Mul<$t<$s, N>> for $s {
                type Output = $t<$s, N>;

                fn mul(self, rhs: $t<$s, N>) -> Self::Output { rhs * self }
            }
        )*
    };
}

mod base;
mod dim2;
mod dim3;
mod dim4;
mod view;

pub use base::Vector;
pub use dim2::{vec2, Vec2, Vec2d, Vec2f, Vec2i, Vec2u};
pub use dim3::{vec3, Vec3, Vec3d, Vec3f, Vec3i, Vec3u};
pub use dim4::{vec4, Vec4, Vec4d, Vec4f, Vec4i, Vec4u};
pub use view::{XY, XYZ, XYZW};
