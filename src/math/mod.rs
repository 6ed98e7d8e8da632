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
mod common;
mod floor;
mod pow;
mod tan;
mod trigo;

pub use common::{
    abs, absf, infinity, infinityf, is_finite, is_finitef, is_infinite, is_infinitef, is_nan,
    is_nanf, is_neg_infinity, is_neg_infinityf, is_odd, is_pos_infinity, is_pos_infinityf,
};
pub use floor::{floor, floorf};
use num_traits::{AsPrimitive, Float};
pub use pow::{pow_integer, pow_integerf};
pub use tan::{
    CF_DEPTH_MEDIUM, CF_DEPTH_NARROW, CF_DEPTH_WIDE, MAX_RANGE_REDUCTIONS, POLE_SENTINEL,
    RESONANCE_LOWER, RESONANCE_UPPER, tan, tanf,
};
pub use trigo::{cos, cosf, sin, sinf};

/// Gives generic code access to the const evaluable routines.
///
/// Every method forwards to the matching `const fn`, so results are
/// bit identical to the ones computed in const context.
pub trait Trigonometry: Float {
    fn c_tan(self) -> Self;
    fn c_cos(self) -> Self;
    fn c_sin(self) -> Self;
    fn c_floor(self) -> Self;
    fn c_abs(self) -> Self;
    /// Exponent is normalized to `i64` before evaluation
    fn c_pow_integer<E: AsPrimitive<i64>>(self, exponent: E) -> Self;
}

impl Trigonometry for f32 {
    #[inline]
    fn c_tan(self) -> Self {
        tanf(self)
    }

    #[inline]
    fn c_cos(self) -> Self {
        cosf(self)
    }

    #[inline]
    fn c_sin(self) -> Self {
        sinf(self)
    }

    #[inline]
    fn c_floor(self) -> Self {
        floorf(self)
    }

    #[inline]
    fn c_abs(self) -> Self {
        absf(self)
    }

    #[inline]
    fn c_pow_integer<E: AsPrimitive<i64>>(self, exponent: E) -> Self {
        pow_integerf(self, exponent.as_())
    }
}

impl Trigonometry for f64 {
    #[inline]
    fn c_tan(self) -> Self {
        tan(self)
    }

    #[inline]
    fn c_cos(self) -> Self {
        cos(self)
    }

    #[inline]
    fn c_sin(self) -> Self {
        sin(self)
    }

    #[inline]
    fn c_floor(self) -> Self {
        floor(self)
    }

    #[inline]
    fn c_abs(self) -> Self {
        abs(self)
    }

    #[inline]
    fn c_pow_integer<E: AsPrimitive<i64>>(self, exponent: E) -> Self {
        pow_integer(self, exponent.as_())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_circle<T: Trigonometry>(x: T) -> T {
        let c = x.c_cos();
        let s = x.c_sin();
        c * c + s * s
    }

    #[test]
    fn generic_forwarding() {
        assert_eq!(1.25f64.c_tan(), tan(1.25));
        assert_eq!(1.25f32.c_tan(), tanf(1.25));
        assert_eq!((-2.5f64).c_floor(), -3.);
        assert_eq!((-2.5f32).c_abs(), 2.5);
        assert_eq!(3f64.c_pow_integer(4u8), 81.);
        assert_eq!(2f32.c_pow_integer(-1i32), 0.5);
        assert_eq!(2f64.c_pow_integer(i64::MAX), f64::INFINITY);
    }

    #[test]
    fn generic_identity() {
        assert!((unit_circle(0.7f64) - 1.).abs() < 1e-12);
        assert!((unit_circle(0.7f32) - 1.).abs() < 1e-5);
    }
}
