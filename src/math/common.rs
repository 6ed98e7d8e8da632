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
#![allow(clippy::eq_op)]

/// π at double precision, narrowed with `as f32` for single precision routines
pub(crate) const PI: f64 = std::f64::consts::PI;
/// π/2 at double precision
pub(crate) const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

pub(crate) const PI_F: f32 = PI as f32;
pub(crate) const HALF_PI_F: f32 = HALF_PI as f32;

/// Checks if value is NaN
#[inline]
pub const fn is_nan(x: f64) -> bool {
    x != x
}

/// Checks if value is NaN
#[inline]
pub const fn is_nanf(x: f32) -> bool {
    x != x
}

/// Positive infinity
#[inline(always)]
pub const fn infinity() -> f64 {
    f64::INFINITY
}

/// Positive infinity
#[inline(always)]
pub const fn infinityf() -> f32 {
    f32::INFINITY
}

#[inline]
pub const fn is_neg_infinity(x: f64) -> bool {
    x == -f64::INFINITY
}

#[inline]
pub const fn is_neg_infinityf(x: f32) -> bool {
    x == -f32::INFINITY
}

#[inline]
pub const fn is_pos_infinity(x: f64) -> bool {
    x == f64::INFINITY
}

#[inline]
pub const fn is_pos_infinityf(x: f32) -> bool {
    x == f32::INFINITY
}

/// Checks if value is either of infinities
#[inline]
pub const fn is_infinite(x: f64) -> bool {
    is_neg_infinity(x) || is_pos_infinity(x)
}

/// Checks if value is either of infinities
#[inline]
pub const fn is_infinitef(x: f32) -> bool {
    is_neg_infinityf(x) || is_pos_infinityf(x)
}

/// Neither NaN nor infinity
#[inline]
pub const fn is_finite(x: f64) -> bool {
    !is_nan(x) && !is_infinite(x)
}

/// Neither NaN nor infinity
#[inline]
pub const fn is_finitef(x: f32) -> bool {
    !is_nanf(x) && !is_infinitef(x)
}

/// Absolute value, `-0` maps to `+0`
#[inline]
pub const fn abs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !(1 << 63))
}

/// Absolute value, `-0` maps to `+0`
#[inline]
pub const fn absf(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & !(1 << 31))
}

/// Tests lowest bit
#[inline(always)]
pub const fn is_odd(x: i64) -> bool {
    (x & 1) != 0
}

/// Value is too small to be told apart from zero at double precision
#[inline(always)]
pub(crate) const fn is_negligible(x: f64) -> bool {
    f64::MIN_POSITIVE > abs(x)
}

/// Value is too small to be told apart from zero at single precision
#[inline(always)]
pub(crate) const fn is_negligiblef(x: f32) -> bool {
    f32::MIN_POSITIVE > absf(x)
}
