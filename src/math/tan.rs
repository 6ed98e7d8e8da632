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
use crate::math::floor::{floor, floorf};
use crate::math::pow::{pow_integer, pow_integerf};

/// Lower bound of the band around π/2 where the pole expansion is used
pub const RESONANCE_LOWER: f64 = 1.55;
/// Upper bound of the band around π/2 where the pole expansion is used
pub const RESONANCE_UPPER: f64 = 1.60;
/// Continued fraction depth for arguments above 1.4
pub const CF_DEPTH_WIDE: i32 = 45;
/// Continued fraction depth for arguments in (1, 1.4]
pub const CF_DEPTH_MEDIUM: i32 = 35;
/// Continued fraction depth for arguments up to 1
pub const CF_DEPTH_NARROW: i32 = 25;
/// Value returned for an argument that is floating point π/2.
///
/// Matches what a conventional `tan` gives for `FRAC_PI_2`.
pub const POLE_SENTINEL: f64 = 1.633124e+16;
/// Range reduction attempts before giving up with NaN
pub const MAX_RANGE_REDUCTIONS: i32 = 2;

/// Fourth order expansion of tan around π/2 in Bernoulli numbers, `d = x - π/2`
#[inline]
const fn tan_pole_expansion(d: f64) -> f64 {
    -1. / d
        + (d / 3.
            + (pow_integer(d, 3) / 45.
                + (2. * pow_integer(d, 5) / 945. + pow_integer(d, 7) / 4725.)))
}

#[inline]
const fn tan_pole_expansionf(d: f32) -> f32 {
    -1. / d
        + (d / 3.
            + (pow_integerf(d, 3) / 45.
                + (2. * pow_integerf(d, 5) / 945. + pow_integerf(d, 7) / 4725.)))
}

#[inline]
const fn tan_resonance(x: f64) -> f64 {
    let d = x - HALF_PI;
    if is_negligible(d) {
        POLE_SENTINEL
    } else {
        tan_pole_expansion(d)
    }
}

#[inline]
const fn tan_resonancef(x: f32) -> f32 {
    let d = x - HALF_PI_F;
    if is_negligiblef(d) {
        POLE_SENTINEL as f32
    } else {
        tan_pole_expansionf(d)
    }
}

/// Evaluates `1 - z/(3 - z/(5 - ...))` bottom-up from `max_depth`
#[inline]
const fn tan_cf(xx: f64, max_depth: i32) -> f64 {
    let mut acc = (2 * max_depth - 1) as f64;
    let mut depth = max_depth - 1;
    while depth >= 1 {
        acc = (2 * depth - 1) as f64 - xx / acc;
        depth -= 1;
    }
    acc
}

#[inline]
const fn tan_cff(xx: f32, max_depth: i32) -> f32 {
    let mut acc = (2 * max_depth - 1) as f32;
    let mut depth = max_depth - 1;
    while depth >= 1 {
        acc = (2 * depth - 1) as f32 - xx / acc;
        depth -= 1;
    }
    acc
}

/// Tangent on the reduced interval `[0, π]`
#[inline]
const fn tan_reduced(x: f64) -> f64 {
    if x > RESONANCE_LOWER && x < RESONANCE_UPPER {
        return tan_resonance(x);
    }
    let depth = if x > 1.4 {
        CF_DEPTH_WIDE
    } else if x > 1. {
        CF_DEPTH_MEDIUM
    } else {
        CF_DEPTH_NARROW
    };
    x / tan_cf(x * x, depth)
}

#[inline]
const fn tan_reducedf(x: f32) -> f32 {
    if x > RESONANCE_LOWER as f32 && x < RESONANCE_UPPER as f32 {
        return tan_resonancef(x);
    }
    let depth = if x > 1.4 {
        CF_DEPTH_WIDE
    } else if x > 1. {
        CF_DEPTH_MEDIUM
    } else {
        CF_DEPTH_NARROW
    };
    x / tan_cff(x * x, depth)
}

/// Folds a non-negative angle into `[0, π]` and evaluates,
/// NaN once more than `max_reductions` folds would be required
#[inline]
const fn tan_folded(x: f64, max_reductions: i32) -> f64 {
    let mut x = x;
    let mut reductions = 0;
    while x > PI {
        if reductions >= max_reductions {
            return f64::NAN;
        }
        x -= PI * floor(x / PI);
        reductions += 1;
    }
    tan_reduced(x)
}

#[inline]
const fn tan_foldedf(x: f32, max_reductions: i32) -> f32 {
    let mut x = x;
    let mut reductions = 0;
    while x > PI_F {
        if reductions >= max_reductions {
            return f32::NAN;
        }
        x -= PI_F * floorf(x / PI_F);
        reductions += 1;
    }
    tan_reducedf(x)
}

#[inline]
const fn tan_positive(x: f64) -> f64 {
    tan_folded(x, MAX_RANGE_REDUCTIONS)
}

#[inline]
const fn tan_positivef(x: f32) -> f32 {
    tan_foldedf(x, MAX_RANGE_REDUCTIONS)
}

/// Computes tangent.
///
/// Continued fraction expansion everywhere except a narrow band
/// around π/2, where a series about the pole is used instead.
/// Available in const context.
#[inline]
pub const fn tan(x: f64) -> f64 {
    if is_nan(x) {
        f64::NAN
    } else if is_negligible(x) {
        0.
    } else if x < 0. {
        -tan_positive(-x)
    } else {
        tan_positive(x)
    }
}

/// Computes tangent at single precision.
///
/// Available in const context.
#[inline]
pub const fn tanf(x: f32) -> f32 {
    if is_nanf(x) {
        f32::NAN
    } else if is_negligiblef(x) {
        0.
    } else if x < 0. {
        -tan_positivef(-x)
    } else {
        tan_positivef(x)
    }
}
