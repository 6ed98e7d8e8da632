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
use crate::math::{Trigonometry, cosf, sinf, tanf};
use num_traits::AsPrimitive;

/// Four independent lanes
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector4<T> {
    pub v: [T; 4],
}

pub type Vector4f = Vector4<f32>;

impl<T> Vector4<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { v: [x, y, z, w] }
    }

    /// Applies `f` to every lane keeping lane order
    #[inline]
    pub fn map<Z>(self, f: impl Fn(T) -> Z) -> Vector4<Z> {
        let [x, y, z, w] = self.v;
        Vector4 {
            v: [f(x), f(y), f(z), f(w)],
        }
    }

    #[inline]
    pub fn to_<Z: Copy + 'static>(self) -> Vector4<Z>
    where
        T: AsPrimitive<Z>,
    {
        self.map(|x| x.as_())
    }
}

impl<T: Trigonometry> Vector4<T> {
    #[inline]
    pub fn tan(self) -> Self {
        self.map(T::c_tan)
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.map(T::c_cos)
    }

    #[inline]
    pub fn sin(self) -> Self {
        self.map(T::c_sin)
    }
}

impl<T> From<T> for Vector4<T>
where
    T: Copy,
{
    fn from(value: T) -> Self {
        Self {
            v: [value, value, value, value],
        }
    }
}

impl<T> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from(v: [T; 4]) -> Self {
        Self { v }
    }
}

impl<T> From<Vector4<T>> for [T; 4] {
    #[inline]
    fn from(value: Vector4<T>) -> Self {
        value.v
    }
}

/// Lane-wise tangent, available in const context
#[inline]
pub const fn tan4(a: Vector4f) -> Vector4f {
    Vector4f {
        v: [tanf(a.v[0]), tanf(a.v[1]), tanf(a.v[2]), tanf(a.v[3])],
    }
}

/// Lane-wise cosine, available in const context
#[inline]
pub const fn cos4(a: Vector4f) -> Vector4f {
    Vector4f {
        v: [cosf(a.v[0]), cosf(a.v[1]), cosf(a.v[2]), cosf(a.v[3])],
    }
}

/// Lane-wise sine, available in const context
#[inline]
pub const fn sin4(a: Vector4f) -> Vector4f {
    Vector4f {
        v: [sinf(a.v[0]), sinf(a.v[1]), sinf(a.v[2]), sinf(a.v[3])],
    }
}
