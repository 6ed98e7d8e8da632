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
use crate::math::common::is_odd;

/// Exponentiation by squaring, `exponent` is expected to be > 1
#[inline]
const fn pow_squaring(base: f64, exponent: i64) -> f64 {
    let mut base = base;
    let mut acc = 1.;
    let mut e = exponent;
    while e > 1 {
        if is_odd(e) {
            acc *= base;
        }
        base *= base;
        e /= 2;
    }
    if e == 1 { acc * base } else { acc }
}

/// Exponentiation by squaring, `exponent` is expected to be > 1
#[inline]
const fn pow_squaringf(base: f32, exponent: i64) -> f32 {
    let mut base = base;
    let mut acc = 1.;
    let mut e = exponent;
    while e > 1 {
        if is_odd(e) {
            acc *= base;
        }
        base *= base;
        e /= 2;
    }
    if e == 1 { acc * base } else { acc }
}

/// Raises `base` to an integer power.
///
/// `i64::MIN` is treated as underflow and yields `0`,
/// `i64::MAX` is treated as overflow and yields `+inf`.
/// Negative exponents produce the reciprocal `1 / base^|exponent|`
/// rather than collapsing to the multiplicative identity.
#[inline]
pub const fn pow_integer(base: f64, exponent: i64) -> f64 {
    if exponent == 3 {
        base * base * base
    } else if exponent == 2 {
        base * base
    } else if exponent == 1 {
        base
    } else if exponent == 0 {
        1.
    } else if exponent == i64::MIN {
        0.
    } else if exponent == i64::MAX {
        f64::INFINITY
    } else if exponent < 0 {
        1. / pow_squaring(base, -exponent)
    } else {
        pow_squaring(base, exponent)
    }
}

/// Raises `base` to an integer power.
///
/// Same edge cases as [pow_integer].
#[inline]
pub const fn pow_integerf(base: f32, exponent: i64) -> f32 {
    if exponent == 3 {
        base * base * base
    } else if exponent == 2 {
        base * base
    } else if exponent == 1 {
        base
    } else if exponent == 0 {
        1.
    } else if exponent == i64::MIN {
        0.
    } else if exponent == i64::MAX {
        f32::INFINITY
    } else if exponent < 0 {
        1. / pow_squaringf(base, -exponent)
    } else {
        pow_squaringf(base, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow_integer_test() {
        assert_eq!(pow_integer(2., 10), 1024.);
        assert_eq!(pow_integer(2., 3), 8.);
        assert_eq!(pow_integer(-3., 2), 9.);
        assert_eq!(pow_integer(7.5, 1), 7.5);
        assert_eq!(pow_integer(-2., 5), -32.);
        assert_eq!(pow_integer(3., 13), 1594323.);
        assert_eq!(pow_integer(2., -2), 0.25);
        assert_eq!(pow_integer(-2., -3), -0.125);

        assert_eq!(pow_integerf(2., 10), 1024.);
        assert_eq!(pow_integerf(0.5, 4), 0.0625);
        assert_eq!(pow_integerf(-1., 7), -1.);
    }

    #[test]
    fn pow_integer_negative_exponent_is_reciprocal() {
        assert_eq!(pow_integer(2., -1), 0.5);
        assert_eq!(pow_integer(2., -10), 1. / 1024.);
        assert_eq!(pow_integer(0., -4), f64::INFINITY);
        assert_eq!(pow_integerf(4., -3), 1. / 64.);
        assert_ne!(pow_integer(3., -5), 1.);
    }

    #[test]
    fn pow_integer_edges() {
        for base in [0., -0., 1., -1., 2.5, 1e300, -1e-300] {
            assert_eq!(pow_integer(base, 0), 1., "{base}^0");
            assert_eq!(pow_integer(base, i64::MAX), f64::INFINITY, "{base}^max");
            assert_eq!(pow_integer(base, i64::MIN), 0., "{base}^min");
            assert_eq!(pow_integerf(base as f32, 0), 1.);
            assert_eq!(pow_integerf(base as f32, i64::MAX), f32::INFINITY);
            assert_eq!(pow_integerf(base as f32, i64::MIN), 0.);
        }
        assert!(pow_integer(f64::NAN, 0) == 1.);
        assert!(pow_integer(f64::NAN, 5).is_nan());
        assert_eq!(pow_integer(10., 400), f64::INFINITY);
    }

    #[test]
    fn pow_integer_matches_powi() {
        for i in -40..40 {
            let base = i as f64 / 7.;
            for e in -9..=12 {
                let ours = pow_integer(base, e);
                let system = base.powi(e as i32);
                if ours.is_infinite() && system.is_infinite() {
                    assert_eq!(ours, system, "{base}^{e}");
                    continue;
                }
                let diff = (ours - system).abs();
                assert!(
                    diff <= 1e-12 * system.abs().max(1.),
                    "{base}^{e}: {ours} vs {system}"
                );
            }
        }
    }

    #[test]
    fn pow_integer_const() {
        const KILO: f64 = pow_integer(2., 10);
        const CUBE: f32 = pow_integerf(1.5, 3);
        assert_eq!(KILO, 1024.);
        assert_eq!(CUBE, 3.375);
    }
}
