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

//! A small, chainable 2D vector type for games and simulations.
//!
//! The main type is [Vec2] (an alias for [Vector2]`<f64>`). Mutating
//! operations return the receiver, so a sequence of updates reads as a
//! single chain:
//!
//! ```
//! use planar2d::Vec2;
//!
//! let mut velocity = Vec2::new(3.0, 4.0);
//! velocity.normalize().multiply(10.0);
//!
//! assert_eq!(velocity.magnitude(), 10.0);
//! ```
//!
//! Vectors with a random direction, magnitude, or position can be created
//! with the `random_*` factories, either from the thread-local random
//! source or (for deterministic tests) from any [rand::Rng] passed to the
//! `_with` variants.

pub use ::log as log;

/// Types representing sizes and positions.
pub mod dimen;

/// Utilities and traits for numeric values.
pub mod numeric;

/// Error types.
pub mod error;

pub use crate::dimen::{Vec2, Vector2};
pub use crate::error::{BacktraceError, NumericError};
