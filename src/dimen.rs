/*
 *  Copyright 2021 QuantumBadger
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

use std::f64::consts::TAU;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use num_traits::Float;
use rand::Rng;

use crate::error::{BacktraceError, NumericError};
use crate::numeric::PrimitiveZero;

/// A vector with two f64 values. This is the main vector type of this crate.
pub type Vec2 = Vector2<f64>;

/// A vector containing two numeric values. This may represent a size,
/// position, velocity, or direction.
///
/// The mutating operations return `&mut Self`, so updates can be chained:
///
/// ```
/// # use planar2d::Vec2;
/// let mut pos = Vec2::new(1.0, 2.0);
/// pos.add_xy(3.0, 0.0).multiply(2.0).rotate(0.1);
/// ```
///
/// The type is `Copy`. Callers which must not observe later mutations of
/// the original should take a copy, not hold a shared reference.
#[repr(C)]
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub struct Vector2<T>
{
    /// The horizontal component of the vector.
    pub x: T,
    /// The vertical component of the vector.
    pub y: T
}

impl<T> Vector2<T>
{
    /// Instantiates a new `Vector2` from the specified horizontal and
    /// vertical components. No validation is performed: NaN and infinity
    /// are accepted.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self
    {
        Vector2 { x, y }
    }

    /// Returns the components as a tuple, in `(x, y)` order.
    #[inline]
    #[must_use]
    pub fn into_tuple(self) -> (T, T)
    {
        (self.x, self.y)
    }
}

impl<T: PrimitiveZero> Vector2<T>
{
    /// A constant representing a vector of zero magnitude. Each component
    /// is set to zero.
    pub const ZERO: Vector2<T> = Vector2::new(T::ZERO, T::ZERO);

    /// Instantiates a new `Vector2` with both components set to zero.
    #[inline]
    #[must_use]
    pub const fn new_zero() -> Self
    {
        Self::ZERO
    }
}

impl<T: Float> Vector2<T>
{
    /// Overwrites both components with those of `other`, returning the
    /// receiver for chaining. `other` is never modified.
    #[inline]
    pub fn set(&mut self, other: Vector2<T>) -> &mut Self
    {
        self.x = other.x;
        self.y = other.y;
        self
    }

    /// Overwrites both components, returning the receiver for chaining.
    #[inline]
    pub fn set_xy(&mut self, x: T, y: T) -> &mut Self
    {
        self.x = x;
        self.y = y;
        self
    }

    /// Adds `other` to the receiver component-wise, returning the receiver
    /// for chaining.
    #[inline]
    pub fn add(&mut self, other: Vector2<T>) -> &mut Self
    {
        self.add_xy(other.x, other.y)
    }

    /// Adds the specified components to the receiver, returning the
    /// receiver for chaining.
    #[inline]
    pub fn add_xy(&mut self, x: T, y: T) -> &mut Self
    {
        self.x = self.x + x;
        self.y = self.y + y;
        self
    }

    /// Subtracts `other` from the receiver component-wise, returning the
    /// receiver for chaining.
    #[inline]
    pub fn subtract(&mut self, other: Vector2<T>) -> &mut Self
    {
        self.subtract_xy(other.x, other.y)
    }

    /// Subtracts the specified components from the receiver, returning the
    /// receiver for chaining.
    #[inline]
    pub fn subtract_xy(&mut self, x: T, y: T) -> &mut Self
    {
        self.x = self.x - x;
        self.y = self.y - y;
        self
    }

    /// Multiplies both components by `scalar`, returning the receiver for
    /// chaining.
    #[inline]
    pub fn multiply(&mut self, scalar: T) -> &mut Self
    {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
        self
    }

    /// Divides both components by `scalar`, returning the receiver for
    /// chaining.
    ///
    /// The division is not guarded: dividing by zero yields infinite or NaN
    /// components per the usual floating point rules, rather than an error.
    #[inline]
    pub fn divide(&mut self, scalar: T) -> &mut Self
    {
        self.x = self.x / scalar;
        self.y = self.y / scalar;
        self
    }

    /// Rounds each component toward negative infinity, returning the
    /// receiver for chaining.
    #[inline]
    pub fn floor(&mut self) -> &mut Self
    {
        self.x = self.x.floor();
        self.y = self.y.floor();
        self
    }

    /// Rounds each component to the nearest integer, with ties rounding
    /// away from zero, returning the receiver for chaining.
    #[inline]
    pub fn round(&mut self) -> &mut Self
    {
        self.x = self.x.round();
        self.y = self.y.round();
        self
    }

    /// Replaces the direction of the vector while preserving its magnitude,
    /// returning the receiver for chaining. The angle is in radians,
    /// measured from the positive x axis.
    pub fn set_angle(&mut self, angle: T) -> &mut Self
    {
        let magnitude = self.magnitude();
        self.x = angle.cos() * magnitude;
        self.y = angle.sin() * magnitude;
        self
    }

    /// Rotates the vector by `delta_angle` radians, preserving its
    /// magnitude, and returns the receiver for chaining.
    #[inline]
    pub fn rotate(&mut self, delta_angle: T) -> &mut Self
    {
        let angle = self.angle();
        self.set_angle(angle + delta_angle)
    }

    /// Moves the receiver a fraction `t` of the straight-line distance
    /// toward `other`, returning the receiver for chaining.
    ///
    /// `t` is not clamped: values outside `[0, 1]` extrapolate beyond the
    /// endpoints.
    #[inline]
    pub fn lerp_towards(&mut self, other: Vector2<T>, t: T) -> &mut Self
    {
        self.x = self.x + (other.x - self.x) * t;
        self.y = self.y + (other.y - self.y) * t;
        self
    }

    /// Clamps each component into the range `[radius, dimension - radius]`,
    /// where `dimension` is `width` for x and `height` for y, returning the
    /// receiver for chaining.
    ///
    /// Only components strictly outside the range are moved: a component
    /// exactly on a bound is left untouched. Note the asymmetry with
    /// [Vector2::is_within_rect], which treats the bounds as exclusive.
    pub fn clamp_to_rect(&mut self, width: T, height: T, radius: T) -> &mut Self
    {
        if radius + radius > width || radius + radius > height {
            log::warn!(
                "clamp_to_rect: radius exceeds half the rectangle size, \
                 clamp range is empty"
            );
        }

        if self.x < radius {
            self.x = radius;
        }
        if self.x > width - radius {
            self.x = width - radius;
        }
        if self.y < radius {
            self.y = radius;
        }
        if self.y > height - radius {
            self.y = height - radius;
        }
        self
    }

    /// Returns the magnitude of the vector, squared.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(&self) -> T
    {
        self.x * self.x + self.y * self.y
    }

    /// Returns the magnitude of the vector, i.e. its Euclidean length.
    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> T
    {
        self.magnitude_squared().sqrt()
    }

    /// Returns the straight-line distance between the receiver and `other`.
    /// Neither operand is modified.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: Vector2<T>) -> T
    {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns the angle of the vector in radians, measured from the
    /// positive x axis, in the range `(-π, π]` per the two-argument
    /// arctangent convention.
    #[inline]
    #[must_use]
    pub fn angle(&self) -> T
    {
        self.y.atan2(self.x)
    }

    /// Returns the dot product of the receiver and `other`.
    #[inline]
    #[must_use]
    pub fn dot(&self, other: Vector2<T>) -> T
    {
        self.x * other.x + self.y * other.y
    }

    /// Returns `true` if either component is NaN.
    #[inline]
    #[must_use]
    pub fn has_nan(&self) -> bool
    {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Fails with a [NumericError] if either component is NaN, and
    /// otherwise does nothing.
    ///
    /// This is a diagnostic checkpoint: place it after a sequence of
    /// arithmetic which may have produced NaN. Infinite components pass the
    /// check, as they still carry directional information.
    pub fn assert_finite(&self) -> Result<(), BacktraceError<NumericError>>
    {
        if self.has_nan() {
            Err(NumericError::non_finite())
        } else {
            Ok(())
        }
    }

    /// Returns `true` if both components lie strictly inside
    /// `(radius, dimension - radius)`, where `dimension` is `width` for x
    /// and `height` for y.
    ///
    /// All four bounds are exclusive: a vector exactly on a bound is
    /// reported as not inside, even though [Vector2::clamp_to_rect] would
    /// leave it untouched.
    #[inline]
    #[must_use]
    pub fn is_within_rect(&self, width: T, height: T, radius: T) -> bool
    {
        self.x > radius
            && self.x < width - radius
            && self.y > radius
            && self.y < height - radius
    }
}

impl Vector2<f64>
{
    /// Returns a new vector with a uniformly random direction and the
    /// specified magnitude, drawing from the given random source. The
    /// angle is drawn uniformly from `[0, 2π)`.
    #[must_use]
    pub fn random_angle_with<R>(rng: &mut R, magnitude: f64) -> Self
    where
        R: Rng + ?Sized
    {
        let angle = rng.gen::<f64>() * TAU;
        Vector2::new(angle.cos() * magnitude, angle.sin() * magnitude)
    }

    /// Returns a new vector with a uniformly random direction and the
    /// specified magnitude, drawing from the thread-local random source.
    /// Pass `1.0` for a unit vector.
    #[inline]
    #[must_use]
    pub fn random_angle(magnitude: f64) -> Self
    {
        Self::random_angle_with(&mut rand::thread_rng(), magnitude)
    }

    /// Returns a new vector with a uniformly random direction and a
    /// magnitude drawn uniformly from `[0, max_magnitude)`, using the given
    /// random source.
    ///
    /// The magnitude is uniform on the linear scale, so samples cluster
    /// toward the center of the disc rather than being area-uniform.
    #[must_use]
    pub fn random_magnitude_and_angle_with<R>(rng: &mut R, max_magnitude: f64) -> Self
    where
        R: Rng + ?Sized
    {
        let magnitude = rng.gen::<f64>() * max_magnitude;
        Self::random_angle_with(rng, magnitude)
    }

    /// Returns a new vector with a uniformly random direction and a
    /// magnitude drawn uniformly from `[0, max_magnitude)`, using the
    /// thread-local random source.
    #[inline]
    #[must_use]
    pub fn random_magnitude_and_angle(max_magnitude: f64) -> Self
    {
        Self::random_magnitude_and_angle_with(&mut rand::thread_rng(), max_magnitude)
    }

    /// Returns a new vector with x drawn uniformly from `[0, width)` and y
    /// drawn uniformly from `[0, height)`, using the given random source.
    #[must_use]
    pub fn random_in_box_with<R>(rng: &mut R, width: f64, height: f64) -> Self
    where
        R: Rng + ?Sized
    {
        Vector2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height)
    }

    /// Returns a new vector with x drawn uniformly from `[0, width)` and y
    /// drawn uniformly from `[0, height)`, using the thread-local random
    /// source. Pass the same value twice for a square region.
    #[inline]
    #[must_use]
    pub fn random_in_box(width: f64, height: f64) -> Self
    {
        Self::random_in_box_with(&mut rand::thread_rng(), width, height)
    }

    /// Scales the vector so that its direction is unchanged and its
    /// magnitude equals `new_magnitude`, returning the receiver for
    /// chaining. Randomness, if needed, comes from the given source.
    ///
    /// A vector of magnitude zero has no direction to preserve, so one is
    /// manufactured: the receiver becomes a uniformly random direction
    /// scaled to `new_magnitude`. Callers needing determinism in that case
    /// should seed the source themselves.
    pub fn set_magnitude_with<R>(&mut self, rng: &mut R, new_magnitude: f64) -> &mut Self
    where
        R: Rng + ?Sized
    {
        let current = self.magnitude();
        if current == 0.0 {
            *self = Self::random_angle_with(rng, new_magnitude);
        } else {
            self.multiply(new_magnitude / current);
        }
        self
    }

    /// Scales the vector so that its direction is unchanged and its
    /// magnitude equals `new_magnitude`, returning the receiver for
    /// chaining. A zero-magnitude receiver is given a random direction
    /// from the thread-local source.
    #[inline]
    pub fn set_magnitude(&mut self, new_magnitude: f64) -> &mut Self
    {
        self.set_magnitude_with(&mut rand::thread_rng(), new_magnitude)
    }

    /// Scales the vector to magnitude `1.0`, returning the receiver for
    /// chaining. Equivalent to `set_magnitude_with(rng, 1.0)`, including
    /// the random-direction treatment of a zero-magnitude receiver.
    #[inline]
    pub fn normalize_with<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: Rng + ?Sized
    {
        self.set_magnitude_with(rng, 1.0)
    }

    /// Scales the vector to magnitude `1.0`, returning the receiver for
    /// chaining. Equivalent to `set_magnitude(1.0)`.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self
    {
        self.set_magnitude(1.0)
    }
}

impl<T> From<(T, T)> for Vector2<T>
{
    #[inline]
    fn from((x, y): (T, T)) -> Self
    {
        Vector2::new(x, y)
    }
}

impl<T: Add<Output = T>> Add for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn add(self, rhs: Vector2<T>) -> Self::Output
    {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Self::Output
    {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Neg<Output = T>> Neg for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn neg(self) -> Self::Output
    {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output
    {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output
    {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Add<Output = T> + Copy> AddAssign for Vector2<T>
{
    #[inline]
    fn add_assign(&mut self, rhs: Vector2<T>)
    {
        *self = *self + rhs;
    }
}

impl<T: Sub<Output = T> + Copy> SubAssign for Vector2<T>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2<T>)
    {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod test
{
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn copy_is_independent_of_original()
    {
        let original = Vec2::new(1.5, -2.5);
        let mut copy = original;

        copy.add_xy(10.0, 10.0);

        assert_eq!(original, Vec2::new(1.5, -2.5));
        assert_eq!(copy, Vec2::new(11.5, 7.5));
    }

    #[test]
    fn magnitude_agrees_with_magnitude_squared()
    {
        let v = Vec2::new(-3.7, 12.9);
        assert_relative_eq!(
            v.magnitude() * v.magnitude(),
            v.magnitude_squared(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn pythagorean_triple()
    {
        let a = Vec2::new(4.0, 0.0);
        let b = Vec2::new(0.0, 3.0);

        let mut sum = a;
        sum.add(b);

        assert_eq!(sum.magnitude(), 5.0);
        assert_eq!(a.distance_to(Vec2::ZERO), 4.0);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn rotate_round_trip_preserves_vector()
    {
        let original = Vec2::new(3.0, -7.0);
        let mut v = original;

        v.rotate(1.234).rotate(-1.234);

        assert_relative_eq!(v.x, original.x, epsilon = 1e-9);
        assert_relative_eq!(v.y, original.y, epsilon = 1e-9);
        assert_relative_eq!(v.magnitude(), original.magnitude(), epsilon = 1e-9);
    }

    #[test]
    fn set_angle_preserves_magnitude()
    {
        let mut v = Vec2::new(3.0, 4.0);
        v.set_angle(0.0);

        assert_relative_eq!(v.x, 5.0);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_follows_atan2_convention()
    {
        assert_relative_eq!(Vec2::new(1.0, 0.0).angle(), 0.0);
        assert_relative_eq!(Vec2::new(0.0, 1.0).angle(), std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(Vec2::new(-1.0, 0.0).angle(), std::f64::consts::PI);
    }

    #[test]
    fn normalize_nonzero_vector()
    {
        let mut v = Vec2::new(3.0, 4.0);
        v.normalize();

        assert_relative_eq!(v.magnitude(), 1.0);
        assert_relative_eq!(v.x, 0.6);
        assert_relative_eq!(v.y, 0.8);
    }

    #[test]
    fn normalize_zero_vector_manufactures_direction()
    {
        let mut rng = StdRng::seed_from_u64(42);
        let mut v = Vec2::ZERO;
        v.normalize_with(&mut rng);

        assert_relative_eq!(v.magnitude(), 1.0);

        // Same seed, same direction
        let mut rng = StdRng::seed_from_u64(42);
        let mut w = Vec2::ZERO;
        w.normalize_with(&mut rng);

        assert_eq!(v, w);
    }

    #[test]
    fn set_magnitude_scales_existing_direction()
    {
        let mut rng = StdRng::seed_from_u64(1);
        let mut v = Vec2::new(3.0, 4.0);
        v.set_magnitude_with(&mut rng, 10.0);

        assert_relative_eq!(v.x, 6.0);
        assert_relative_eq!(v.y, 8.0);
    }

    #[test]
    fn lerp_endpoints()
    {
        let target = Vec2::new(10.0, -20.0);

        let mut unchanged = Vec2::new(1.0, 2.0);
        unchanged.lerp_towards(target, 0.0);
        assert_eq!(unchanged, Vec2::new(1.0, 2.0));

        let mut moved = Vec2::new(1.0, 2.0);
        moved.lerp_towards(target, 1.0);
        assert_relative_eq!(moved.x, target.x);
        assert_relative_eq!(moved.y, target.y);
    }

    #[test]
    fn lerp_extrapolates_outside_unit_range()
    {
        let mut v = Vec2::new(0.0, 0.0);
        v.lerp_towards(Vec2::new(1.0, 1.0), 2.0);

        assert_relative_eq!(v.x, 2.0);
        assert_relative_eq!(v.y, 2.0);
    }

    #[test]
    fn within_rect_excludes_boundary()
    {
        assert!(Vec2::new(5.0, 5.0).is_within_rect(10.0, 10.0, 0.0));
        assert!(!Vec2::new(10.0, 5.0).is_within_rect(10.0, 10.0, 0.0));
        assert!(!Vec2::new(0.0, 5.0).is_within_rect(10.0, 10.0, 0.0));
        assert!(!Vec2::new(5.0, 2.0).is_within_rect(10.0, 10.0, 2.0));
        assert!(Vec2::new(5.0, 2.1).is_within_rect(10.0, 10.0, 2.0));
    }

    #[test]
    fn clamp_to_rect_leaves_boundary_untouched()
    {
        let mut outside = Vec2::new(15.0, 5.0);
        outside.clamp_to_rect(10.0, 10.0, 0.0);
        assert_eq!(outside, Vec2::new(10.0, 5.0));

        let mut on_edge = Vec2::new(10.0, 5.0);
        on_edge.clamp_to_rect(10.0, 10.0, 0.0);
        assert_eq!(on_edge, Vec2::new(10.0, 5.0));

        let mut on_radius = Vec2::new(2.0, 5.0);
        on_radius.clamp_to_rect(10.0, 10.0, 2.0);
        assert_eq!(on_radius, Vec2::new(2.0, 5.0));

        let mut below_radius = Vec2::new(-1.0, 5.0);
        below_radius.clamp_to_rect(10.0, 10.0, 2.0);
        assert_eq!(below_radius, Vec2::new(2.0, 5.0));
    }

    #[test]
    fn dot_products()
    {
        assert_eq!(Vec2::new(1.0, 0.0).dot(Vec2::new(0.0, 1.0)), 0.0);
        assert_eq!(Vec2::new(1.0, 0.0).dot(Vec2::new(1.0, 0.0)), 1.0);
        assert_eq!(Vec2::new(2.0, 3.0).dot(Vec2::new(4.0, 5.0)), 23.0);
    }

    #[test]
    fn assert_finite_flags_nan_only()
    {
        assert!(Vec2::new(3.0, 4.0).assert_finite().is_ok());
        assert!(Vec2::new(f64::NAN, 4.0).assert_finite().is_err());
        assert!(Vec2::new(3.0, f64::NAN).assert_finite().is_err());

        // Infinity carries a direction and passes the check
        assert!(Vec2::new(f64::INFINITY, 4.0).assert_finite().is_ok());
    }

    #[test]
    fn divide_by_zero_propagates_per_ieee754()
    {
        let mut v = Vec2::new(1.0, 0.0);
        v.divide(0.0);

        assert_eq!(v.x, f64::INFINITY);
        assert!(v.y.is_nan());
        assert!(v.has_nan());
    }

    #[test]
    fn floor_and_round()
    {
        let mut v = Vec2::new(1.7, -1.2);
        v.floor();
        assert_eq!(v, Vec2::new(1.0, -2.0));

        // Ties round away from zero
        let mut w = Vec2::new(2.5, -2.5);
        w.round();
        assert_eq!(w, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn mutators_chain()
    {
        let mut v = Vec2::new_zero();
        v.set_xy(1.0, 2.0).add_xy(1.0, -2.0).multiply(3.0).subtract_xy(1.0, 0.0);

        assert_eq!(v, Vec2::new(5.0, 0.0));

        let mut w = Vec2::new(9.0, 9.0);
        w.set(v).divide(5.0);
        assert_eq!(w, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn random_angle_has_requested_magnitude()
    {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let v = Vec2::random_angle_with(&mut rng, 3.0);
            assert_relative_eq!(v.magnitude(), 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn random_magnitude_and_angle_stays_below_max()
    {
        let mut rng = StdRng::seed_from_u64(8);

        for _ in 0..100 {
            let v = Vec2::random_magnitude_and_angle_with(&mut rng, 5.0);
            assert!(v.magnitude() < 5.0);
        }
    }

    #[test]
    fn random_in_box_stays_in_bounds()
    {
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..100 {
            let v = Vec2::random_in_box_with(&mut rng, 20.0, 10.0);
            assert!(v.x >= 0.0 && v.x < 20.0);
            assert!(v.y >= 0.0 && v.y < 10.0);
        }
    }

    #[test]
    fn operator_surface()
    {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(4.0, 6.0));
        c -= a;
        assert_eq!(c, b);

        assert_eq!(Vec2::from((1.0, 2.0)), a);
        assert_eq!(a.into_tuple(), (1.0, 2.0));
    }
}
