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
    is_finite, is_finitef, is_nan, is_nanf, is_negligible, is_negligiblef,
};

/// Rounds towards minus infinity.
///
/// NaN and infinities are passed through, as well as values
/// indistinguishable from zero.
#[inline]
pub const fn floor(x: f64) -> f64 {
    const D1_52: f64 = (1u64 << 52) as f64;
    if is_nan(x) {
        return f64::NAN;
    }
    if !is_finite(x) || is_negligible(x) {
        return x;
    }
    // every double above 2^52 is already integral
    if x >= D1_52 || x <= -D1_52 {
        return x;
    }
    let whole = x as i64 as f64;
    if x < 0. && x < whole {
        whole - 1.
    } else {
        whole
    }
}

/// Rounds towards minus infinity.
///
/// NaN and infinities are passed through, as well as values
/// indistinguishable from zero.
#[inline]
pub const fn floorf(x: f32) -> f32 {
    const F1_23: f32 = (1u32 << 23) as f32;
    if is_nanf(x) {
        return f32::NAN;
    }
    if !is_finitef(x) || is_negligiblef(x) {
        return x;
    }
    if x >= F1_23 || x <= -F1_23 {
        return x;
    }
    let whole = x as i64 as f32;
    if x < 0. && x < whole {
        whole - 1.
    } else {
        whole
    }
}
