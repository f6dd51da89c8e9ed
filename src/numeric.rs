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

/// A primitive numeric type with a constant zero value. Unlike
/// `num_traits::Zero`, the zero here is a `const`, so it can be used in
/// constant expressions.
pub trait PrimitiveZero: Copy
{
    /// The number zero, as represented by this type.
    const ZERO: Self;
}

macro_rules! impl_primitive_zero {
    ($t:ty, $zero:expr) => {
        impl PrimitiveZero for $t
        {
            const ZERO: Self = $zero;
        }
    };
}

impl_primitive_zero!(i8, 0);
impl_primitive_zero!(i16, 0);
impl_primitive_zero!(i32, 0);
impl_primitive_zero!(i64, 0);
impl_primitive_zero!(i128, 0);
impl_primitive_zero!(isize, 0);

impl_primitive_zero!(u8, 0);
impl_primitive_zero!(u16, 0);
impl_primitive_zero!(u32, 0);
impl_primitive_zero!(u64, 0);
impl_primitive_zero!(u128, 0);
impl_primitive_zero!(usize, 0);

impl_primitive_zero!(f32, 0.0);
impl_primitive_zero!(f64, 0.0);
