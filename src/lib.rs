/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Trigonometry available in const context.
//!
//! `tan`, `cos` and `sin` are evaluated with continued fractions and the half
//! angle substitution using nothing but arithmetic, so they can seed `const`
//! and `static` items such as lookup tables. Results stay within `1e-7` of
//! the system math library for double precision.
//!
//! ```
//! use const_trig::{Vector4f, sin, sin4};
//!
//! const SIN_ONE: f64 = sin(1.0);
//! const WAVE: Vector4f = sin4(Vector4f::new(0., 1., 2., 3.));
//!
//! assert!((SIN_ONE - 1f64.sin()).abs() < 1e-7);
//! assert!((WAVE.v[1] - 1f32.sin()).abs() < 1e-6);
//! ```
#![allow(clippy::excessive_precision)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
mod math;
mod vector;

pub use math::{
    CF_DEPTH_MEDIUM, CF_DEPTH_NARROW, CF_DEPTH_WIDE, MAX_RANGE_REDUCTIONS, POLE_SENTINEL,
    RESONANCE_LOWER, RESONANCE_UPPER, Trigonometry, abs, absf, cos, cosf, floor, floorf,
    infinity, infinityf, is_finite, is_finitef, is_infinite, is_infinitef, is_nan, is_nanf,
    is_neg_infinity, is_neg_infinityf, is_odd, is_pos_infinity, is_pos_infinityf, pow_integer,
    pow_integerf, sin, sinf, tan, tanf,
};
pub use vector::{Vector4, Vector4f, cos4, sin4, tan4};
