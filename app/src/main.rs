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
use const_trig::{Vector4f, cos, cos4, sinf, tan, tan4};

const TABLE_SIZE: usize = 64;

const fn sine_table() -> [f32; TABLE_SIZE] {
    let mut table = [0f32; TABLE_SIZE];
    let mut i = 0usize;
    while i < TABLE_SIZE {
        let angle = i as f32 * (std::f32::consts::TAU / TABLE_SIZE as f32);
        table[i] = sinf(angle);
        i += 1;
    }
    table
}

static SINE_TABLE: [f32; TABLE_SIZE] = sine_table();

const QUARTERS: Vector4f = Vector4f::new(
    0.,
    std::f32::consts::FRAC_PI_4,
    std::f32::consts::FRAC_PI_2,
    3. * std::f32::consts::FRAC_PI_4,
);
const QUARTER_COS: Vector4f = cos4(QUARTERS);
const QUARTER_TAN: Vector4f = tan4(QUARTERS);

const TAN_ONE: f64 = tan(1.);
const COS_TWO: f64 = cos(2.);

fn main() {
    let mut max_diff = 0f32;
    let mut max_diff_libm = 0f32;
    for (i, &value) in SINE_TABLE.iter().enumerate() {
        let angle = i as f32 * (std::f32::consts::TAU / TABLE_SIZE as f32);
        max_diff = max_diff.max((value - angle.sin()).abs());
        max_diff_libm = max_diff_libm.max((value - libm::sinf(angle)).abs());
    }
    println!(
        "sine table of {} entries: max diff std {}, libm {}",
        TABLE_SIZE, max_diff, max_diff_libm
    );

    for (i, angle) in QUARTERS.v.iter().enumerate() {
        println!(
            "angle {:.6}: cos {:.9} (std {:.9}), tan {:.9} (std {:.9})",
            angle,
            QUARTER_COS.v[i],
            angle.cos(),
            QUARTER_TAN.v[i],
            angle.tan()
        );
    }

    println!("tan(1) = {} (std {})", TAN_ONE, 1f64.tan());
    println!("cos(2) = {} (std {})", COS_TWO, 2f64.cos());
}
