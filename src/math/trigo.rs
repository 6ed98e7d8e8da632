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
use crate::math::common::{
    HALF_PI, HALF_PI_F, PI, PI_F, is_nan, is_nanf, is_negligible, is_negligiblef,
};
use crate::math::tan::{tan, tanf};

/// Computes cosine.
///
/// Derived from tan(x/2) through the half angle substitution
/// `cos(x) = (1 - t^2) / (1 + t^2)`. Exact at 0, ±π/2 and ±π.
/// Available in const context.
#[inline]
pub const fn cos(x: f64) -> f64 {
    if is_nan(x) {
        return f64::NAN;
    }
    if is_negligible(x) {
        return 1.;
    }
    if is_negligible(x - HALF_PI) || is_negligible(x + HALF_PI) {
        return 0.;
    }
    if is_negligible(x - PI) || is_negligible(x + PI) {
        return -1.;
    }
    let t = tan(x / 2.);
    let t2 = t * t;
    (1. - t2) / (1. + t2)
}

/// Computes cosine at single precision.
///
/// Available in const context.
#[inline]
pub const fn cosf(x: f32) -> f32 {
    if is_nanf(x) {
        return f32::NAN;
    }
    if is_negligiblef(x) {
        return 1.;
    }
    if is_negligiblef(x - HALF_PI_F) || is_negligiblef(x + HALF_PI_F) {
        return 0.;
    }
    if is_negligiblef(x - PI_F) || is_negligiblef(x + PI_F) {
        return -1.;
    }
    let t = tanf(x / 2.);
    let t2 = t * t;
    (1. - t2) / (1. + t2)
}

/// Computes sine.
///
/// Derived from tan(x/2) through the half angle substitution
/// `sin(x) = 2t / (1 + t^2)`. Exact at 0, ±π/2 and ±π.
/// Available in const context.
#[inline]
pub const fn sin(x: f64) -> f64 {
    if is_nan(x) {
        return f64::NAN;
    }
    if is_negligible(x) {
        return 0.;
    }
    if is_negligible(x - HALF_PI) {
        return 1.;
    }
    if is_negligible(x + HALF_PI) {
        return -1.;
    }
    if is_negligible(x - PI) {
        return 0.;
    }
    if is_negligible(x + PI) {
        return -0.;
    }
    let t = tan(x / 2.);
    2. * t / (1. + t * t)
}

/// Computes sine at single precision.
///
/// Available in const context.
#[inline]
pub const fn sinf(x: f32) -> f32 {
    if is_nanf(x) {
        return f32::NAN;
    }
    if is_negligiblef(x) {
        return 0.;
    }
    if is_negligiblef(x - HALF_PI_F) {
        return 1.;
    }
    if is_negligiblef(x + HALF_PI_F) {
        return -1.;
    }
    if is_negligiblef(x - PI_F) {
        return 0.;
    }
    if is_negligiblef(x + PI_F) {
        return -0.;
    }
    let t = tanf(x / 2.);
    2. * t / (1. + t * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn cos_test() {
        assert_eq!(cos(0.0), 1.0);
        assert_eq!(cos(-0.0), 1.0);
        assert_eq!(cos(std::f64::consts::PI), -1.);
        assert_eq!(cos(-std::f64::consts::PI), -1.);
        assert_eq!(cos(std::f64::consts::FRAC_PI_2), 0.);
        assert_eq!(cos(-std::f64::consts::FRAC_PI_2), 0.);
        assert!(cos(f64::NAN).is_nan());
        for x in [-1.5, 0.5, 1.0, 2.0, 3.0, 11.1, -7.25] {
            assert!(
                (cos(x) - x.cos()).abs() < 1e-7,
                "cos({x}) = {}, expected {}",
                cos(x),
                x.cos()
            );
        }

        assert_eq!(cosf(0.0), 1.0);
        assert_eq!(cosf(std::f32::consts::PI), -1f32);
        assert_eq!(cosf(std::f32::consts::FRAC_PI_2), 0f32);
        assert!(cosf(f32::NAN).is_nan());
    }

    #[test]
    fn sin_test() {
        assert_eq!(sin(0.0), 0.0);
        assert_eq!(sin(std::f64::consts::FRAC_PI_2), 1.);
        assert_eq!(sin(-std::f64::consts::FRAC_PI_2), -1.);
        assert_eq!(sin(std::f64::consts::PI), 0.);
        assert_eq!(sin(-std::f64::consts::PI).to_bits(), (-0f64).to_bits());
        assert!(sin(f64::NAN).is_nan());
        for x in [-1.5, 0.001, 1.001, 1.5, 11.1, 2.0, 3.0] {
            assert!(
                (sin(x) - x.sin()).abs() < 1e-7,
                "sin({x}) = {}, expected {}",
                sin(x),
                x.sin()
            );
        }

        assert_eq!(sinf(0.0), 0.0);
        assert_eq!(sinf(std::f32::consts::FRAC_PI_2), 1f32);
        assert_eq!(sinf(-std::f32::consts::FRAC_PI_2), -1f32);
        assert!(sinf(f32::NAN).is_nan());
    }

    #[test]
    fn cos_sin_infinities() {
        assert!(cos(f64::INFINITY).is_nan());
        assert!(sin(f64::NEG_INFINITY).is_nan());
        assert!(cosf(f32::INFINITY).is_nan());
        assert!(sinf(f32::INFINITY).is_nan());
    }

    #[test]
    fn cos_sin_match_system() {
        let mut max_cos = 0f64;
        let mut max_sin = 0f64;
        for i in -20000..20000i32 {
            let x = i as f64 / 1000.;
            let (c, s) = (cos(x), sin(x));
            max_cos = max_cos.max((c - x.cos()).abs());
            max_sin = max_sin.max((s - x.sin()).abs());
            assert!((c - x.cos()).abs() < 1e-7, "cos({x}) = {c}, expected {}", x.cos());
            assert!((s - x.sin()).abs() < 1e-7, "sin({x}) = {s}, expected {}", x.sin());
        }
        println!("cos max diff {max_cos}, sin max diff {max_sin}");
    }

    #[test]
    fn cosf_sinf_match_system() {
        for i in -5000..5000i32 {
            let x = i as f32 / 500.;
            let (c, s) = (cosf(x), sinf(x));
            assert!((c - x.cos()).abs() < 1e-5, "cosf({x}) = {c}, expected {}", x.cos());
            assert!((s - x.sin()).abs() < 1e-5, "sinf({x}) = {s}, expected {}", x.sin());
        }
    }

    #[test]
    fn cos_sin_random_sweep() {
        let mut rng = rand::rng();
        for _ in 0..5000 {
            let x: f64 = rng.random_range(-30.0..30.0);
            assert!((cos(x) - x.cos()).abs() < 1e-7, "cos({x})");
            assert!((sin(x) - x.sin()).abs() < 1e-7, "sin({x})");
        }
    }

    #[test]
    fn pythagorean_identity() {
        for i in -600..600i32 {
            let x = i as f64 / 100.;
            let (c, s) = (cos(x), sin(x));
            assert!((c * c + s * s - 1.).abs() < 1e-12, "identity broken at {x}");
        }
    }

    #[test]
    fn cos_sin_const() {
        const C: f64 = cos(1.0);
        const S: f32 = sinf(0.5);
        assert!((C - 1.0f64.cos()).abs() < 1e-12);
        assert!((S - 0.5f32.sin()).abs() < 1e-6);
    }
}
