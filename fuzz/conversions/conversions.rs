/*
 * // Copyright (c) Radzivon Bartoshyk 2/2025. All rights reserved.
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
#![no_main]

use hexcone::{Cmyk, Gray, Hls, Hsv, Rgb};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u32, u32, u32, u32)| {
    let x = f32::from_bits(data.0);
    let y = f32::from_bits(data.1);
    let z = f32::from_bits(data.2);
    let w = f32::from_bits(data.3);

    let rgb = Rgb::new(x, y, z);

    // Never panic expected, for any bit pattern
    _ = Gray::from_rgb(rgb).to_rgb();
    _ = Gray::new(x).to_rgb();
    _ = Cmyk::from_rgb(rgb).to_rgb();
    _ = Cmyk::new(x, y, z, w).to_rgb();
    _ = Hsv::from_rgb(rgb).to_rgb();
    _ = Hsv::new(x, y, z).to_rgb();
    _ = Hsv::new(x, y, z).wrap_hue();
    _ = Hls::from_rgb(rgb).to_rgb();
    _ = Hls::new(x, y, z).to_rgb();
    _ = Hls::new(x, y, z).wrap_hue().to_rgb();

    if x.is_finite() && y.is_finite() && z.is_finite() {
        let hue = Hsv::from_rgb(rgb).h;
        if !hue.is_nan() {
            assert!((0. ..360.).contains(&hue), "{rgb:?} gave hue {hue}");
        }
    }
});
