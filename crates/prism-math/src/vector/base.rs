use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::{
    array,
    fmt::{Debug, Display, Formatter},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_traits::{Float, Num, Zero};

/// An `N`-element vector storing elements of type `T` as a contiguous,
/// index-addressable sequence.
///
/// `N` is part of the type; a vector never changes its dimension. Vectors
/// are plain values: they are `Copy`, allocate nothing, and two instances
/// compare equal exactly when all of their elements do (no implicit epsilon
/// for floating-point elements — see the [`approx`] trait impls for the
/// tolerance-based comparisons).
///
/// Vectors of up to four dimensions expose their elements as named fields
/// (`v.x`, `v.y`, ...) through the [`XY`](super::XY), [`XYZ`](super::XYZ)
/// and [`XYZW`](super::XYZW) views; a named field and its sequence index
/// address the same storage.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

impl<T, const N: usize> Vector<T, N> {
    /// Returns the number of elements, which is always `N`.
    pub const fn len(&self) -> usize { N }

    /// Returns true only for the zero-dimensional vector type.
    pub const fn is_empty(&self) -> bool { N == 0 }

    /// Creates a vector with all elements set to `value`.
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Creates a vector with all elements set to zero.
    pub fn zero() -> Self
    where
        T: Zero + Copy,
    {
        Self::splat(T::zero())
    }

    /// Creates a vector by invoking a closure with the index of each
    /// element.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    /// Creates a vector from up to `N` values; elements without a
    /// corresponding value are left at zero.
    ///
    /// # Panics
    ///
    /// Panics when more than `N` values are supplied.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        assert!(
            values.len() <= N,
            "vector initializer has {} elements, expected at most {}",
            values.len(),
            N
        );
        let mut data = [T::zero(); N];
        data[..values.len()].copy_from_slice(values);
        Self(data)
    }

    /// Returns the elements as an array reference.
    pub const fn as_array(&self) -> &[T; N] { &self.0 }

    /// Returns the elements as a mutable array reference.
    pub fn as_mut_array(&mut self) -> &mut [T; N] { &mut self.0 }

    /// Returns the elements as a slice.
    pub const fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Consumes the vector and returns its elements as an array.
    pub fn into_array(self) -> [T; N] { self.0 }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }
}

impl<T: Num + Copy, const N: usize> Vector<T, N> {
    /// Computes the dot product of the two vectors.
    pub fn dot(self, rhs: Self) -> T {
        self.0
            .into_iter()
            .zip(rhs.0)
            .fold(T::zero(), |acc, (a, b)| acc + a * b)
    }

    /// Computes the squared length of the vector.
    pub fn length_squared(self) -> T { self.dot(self) }

    /// Computes the squared distance between the two vectors.
    pub fn distance_squared(self, rhs: Self) -> T { (rhs - self).length_squared() }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Computes the length of the vector.
    pub fn length(self) -> T { self.length_squared().sqrt() }

    /// Computes the distance between the two vectors.
    pub fn distance(self, rhs: Self) -> T { (rhs - self).length() }

    /// Returns the vector scaled to length 1.
    ///
    /// # Panics
    ///
    /// Panics on a zero-length vector; callers that cannot rule one out
    /// must use [`Self::try_normalize`] instead.
    pub fn normalize(self) -> Self {
        let length = self.length();
        assert!(
            length != T::zero(),
            "cannot normalize a zero-length vector"
        );
        self / length
    }

    /// Returns the vector scaled to length 1, or `None` for a zero-length
    /// vector.
    pub fn try_normalize(self) -> Option<Self> {
        let length = self.length();
        if length == T::zero() {
            None
        } else {
            Some(self / length)
        }
    }

    /// Linearly interpolates between `self` and `rhs` by `t`. The result is
    /// `self` at `t == 0` and `rhs` at `t == 1`; `t` outside `[0, 1]`
    /// extrapolates.
    pub fn lerp(self, rhs: Self, t: T) -> Self { self + (rhs - self) * t }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::from_fn(|_| T::default()) }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    /// Panics when `index >= N`.
    fn index(&self, index: usize) -> &T { &self.0[index] }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T { &mut self.0[index] }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self { Self(value) }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self { value.0 }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    fn as_ref(&self) -> &[T; N] { &self.0 }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T; N] { &mut self.0 }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg<Output = T>,
{
    type Output = Vector<T, N>;

    fn neg(self) -> Self::Output { Vector(self.0.map(T::neg)) }
}

impl_elementwise_ops!(Add, Sub for Vector);
impl_scalar_ops!(Mul, Div for Vector);
impl_scalar_lhs_mul!(Vector: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl<T: Debug, const N: usize> Debug for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut tuple = f.debug_tuple("Vector");
        for elem in &self.0 {
            tuple.field(elem);
        }
        tuple.finish()
    }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T: serde::Serialize, const N: usize> serde::Serialize for Vector<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(N)?;
        for elem in &self.0 {
            tuple.serialize_element(elem)?;
        }
        tuple.end()
    }
}

/// Customized deserialization for the `Vector` type: exactly `N` elements,
/// anything else is a length error.
impl<'de, T, const N: usize> serde::Deserialize<'de> for Vector<T, N>
where
    T: serde::Deserialize<'de> + Default + Copy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VectorVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> serde::de::Visitor<'de> for VectorVisitor<T, N>
        where
            T: serde::Deserialize<'de> + Default + Copy,
        {
            type Value = Vector<T, N>;

            fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
                write!(formatter, "a sequence of {} elements", N)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut data = [T::default(); N];
                for (i, slot) in data.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                Ok(Vector(data))
            }
        }

        deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
    }
}

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]`.
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]`, which is itself
// `Pod` whenever `T` is.
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}
