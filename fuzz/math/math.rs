#![no_main]

use const_trig::{
    Vector4f, cos, cos4, cosf, floor, floorf, pow_integer, pow_integerf, sin, sin4, sinf, tan,
    tan4, tanf,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, i64)| {
    let lo = data.0.to_ne_bytes();

    let z_f64 = f64::from_bits(data.0);
    let z_f32 = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    _ = tan(z_f64);
    _ = cos(z_f64);
    _ = sin(z_f64);
    _ = floor(z_f64);
    _ = pow_integer(z_f64, data.1);
    _ = tanf(z_f32);
    _ = cosf(z_f32);
    _ = sinf(z_f32);
    _ = floorf(z_f32);
    _ = pow_integerf(z_f32, data.1);

    let v = Vector4f::from(z_f32);
    _ = tan4(v);
    _ = cos4(v);
    _ = sin4(v);
});
