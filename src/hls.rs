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
use crate::Rgb;
use crate::hue::{sextant, wrap_hue};
use std::ops::{Index, IndexMut};

/// Represents a color in the double hexcone HLS model.
///
/// Channels are stored as `(h, l, s)`. Within this pair of transforms the middle
/// channel holds the range of the RGB channels normalized against the double cone
/// (what most libraries call saturation) and the last channel holds the mid-point
/// of the largest and smallest RGB channel (what most libraries call lightness).
/// [Hls::from_rgb] and [Hls::to_rgb] agree on this layout, so samples round-trip.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq)]
pub struct Hls {
    /// Hue in degrees.
    ///
    /// Not wrapped by [Hls::from_rgb]: pure red is reported as 360.
    pub h: f32,
    /// Range of the channels normalized against the cone, 0–1 range
    pub l: f32,
    /// Mid-point of the largest and smallest channel, 0–1 range
    pub s: f32,
}

impl Hls {
    #[inline]
    pub const fn new(h: f32, l: f32, s: f32) -> Hls {
        Hls { h, l, s }
    }

    /// Converts [Rgb] into [Hls].
    ///
    /// Black yields all zeros, other achromatic colors yield `(0, 0, mid-point)`.
    /// The hue is left as computed and may equal 360, use [Hls::wrap_hue] before
    /// feeding it back into [Hls::to_rgb].
    #[inline]
    pub fn from_rgb(rgb: Rgb<f32>) -> Hls {
        let (r, g, b) = (rgb.r, rgb.g, rgb.b);
        let v = rgb.max_channel();
        let m = rgb.min_channel();

        let s = (m + v) / 2.;
        if s <= 0. {
            return Hls::new(0., 0., 0.);
        }

        let vm = v - m;
        if vm <= 0. {
            return Hls::new(0., vm, s);
        }

        let l = if s <= 0.5 {
            vm / (v + m)
        } else {
            vm / (2. - v - m)
        };

        let r2 = (v - r) / vm;
        let g2 = (v - g) / vm;
        let b2 = (v - b) / vm;

        let h = if r == v {
            if g == m { 5. + b2 } else { 1. - g2 }
        } else if g == v {
            if b == m { 1. + r2 } else { 3. - b2 }
        } else if r == m {
            3. + g2
        } else {
            5. - r2
        };

        Hls::new(h * 60., l, s)
    }

    /// Converts [Hls] into [Rgb].
    ///
    /// Hue must lie in [0, 360): any other sextant leaves the output black.
    #[inline]
    pub fn to_rgb(&self) -> Rgb<f32> {
        let (h, l, s) = (self.h, self.l, self.s);

        let v = if s <= 0.5 { s * (1. + l) } else { s + l - s * l };

        if v <= 0. {
            return Rgb::black();
        }

        let m = s + s - v;
        let sv = (v - m) / v;
        let (sextant, fract) = sextant(h);
        let vsf = v * sv * fract;
        let mid1 = m + vsf;
        let mid2 = v - vsf;

        match sextant {
            0 => Rgb::new(v, mid1, m),
            1 => Rgb::new(mid2, v, m),
            2 => Rgb::new(m, v, mid1),
            3 => Rgb::new(m, mid2, v),
            4 => Rgb::new(mid1, m, v),
            5 => Rgb::new(v, m, mid2),
            _ => Rgb::black(),
        }
    }

    /// Returns a copy with hue folded into [0, 360)
    #[inline]
    pub fn wrap_hue(&self) -> Hls {
        Hls::new(wrap_hue(self.h), self.l, self.s)
    }
}

impl Index<usize> for Hls {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.h,
            1 => &self.l,
            2 => &self.s,
            _ => panic!("Index out of bounds for Hls"),
        }
    }
}

impl IndexMut<usize> for Hls {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.h,
            1 => &mut self.l,
            2 => &mut self.s,
            _ => panic!("Index out of bounds for Hls"),
        }
    }
}

impl From<[f32; 3]> for Hls {
    #[inline]
    fn from(value: [f32; 3]) -> Self {
        Hls::new(value[0], value[1], value[2])
    }
}

impl From<Hls> for [f32; 3] {
    #[inline]
    fn from(value: Hls) -> Self {
        [value.h, value.l, value.s]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn forward_reference() {
        let hls = Hls::from_rgb(Rgb::new(0.2, 0.4, 0.9));
        assert!((hls.h - 222.857).abs() < 1e-2);
        assert!((hls.l - 0.778).abs() < 1e-2);
        assert!((hls.s - 0.55).abs() < 1e-2);
    }

    #[test]
    fn round_trip() {
        let rgb = Rgb::new(0.2, 0.4, 0.9);
        let rolled_back = Hls::from_rgb(rgb).to_rgb();
        let dx = (rgb.r - rolled_back.r).abs();
        let dy = (rgb.g - rolled_back.g).abs();
        let dz = (rgb.b - rolled_back.b).abs();
        assert!(dx < 1e-5);
        assert!(dy < 1e-5);
        assert!(dz < 1e-5);
    }

    #[test]
    fn inverse_reference() {
        let rgb = Hls::new(222.857, 0.778, 0.55).to_rgb();
        assert!((rgb.r - 0.2).abs() < 1e-2);
        assert!((rgb.g - 0.4).abs() < 1e-2);
        assert!((rgb.b - 0.9).abs() < 1e-2);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(Hls::from_rgb(Rgb::black()), Hls::new(0., 0., 0.));
        assert_eq!(Hls::from_rgb(Rgb::dup(0.4)), Hls::new(0., 0., 0.4));
        assert_eq!(Hls::from_rgb(Rgb::white()), Hls::new(0., 0., 1.));
        assert_eq!(Hls::new(123., 0.9, 0.).to_rgb(), Rgb::black());
    }

    #[test]
    fn pure_red_reports_full_turn() {
        let hls = Hls::from_rgb(Rgb::new(1., 0., 0.));
        assert_eq!(hls, Hls::new(360., 1., 0.5));
        // Unwrapped hue lands past the last sextant
        assert_eq!(hls.to_rgb(), Rgb::black());
        assert_eq!(hls.wrap_hue().to_rgb(), Rgb::new(1., 0., 0.));
    }

    #[test]
    fn random_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let rgb = Rgb::new(
                rng.random_range(0f32..=1.),
                rng.random_range(0f32..=1.),
                rng.random_range(0f32..=1.),
            );
            let hls = Hls::from_rgb(rgb).wrap_hue();
            if rgb.is_achromatic() {
                continue;
            }
            let rolled_back = hls.to_rgb();
            for i in 0..3 {
                assert!(
                    (rgb[i] - rolled_back[i]).abs() < 1e-5,
                    "{rgb:?} came back as {rolled_back:?} through {hls:?}"
                );
            }
        }
    }
}
