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
use crate::hue::{normalize_hue, sextant, wrap_hue};
use std::ops::{Index, IndexMut};

/// Represents a color in the hexcone HSV model
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, 0–360 exclusive.
    ///
    /// Undefined for achromatic colors, where it is reported as zero.
    pub h: f32,
    /// Saturation, 0–1 range
    pub s: f32,
    /// Value (largest RGB channel), 0–1 range
    pub v: f32,
}

impl Hsv {
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Hsv {
        Hsv { h, s, v }
    }

    /// Converts [Rgb] into [Hsv].
    ///
    /// Achromatic input yields `(0, 0, v)`. Otherwise hue is taken from the channel
    /// holding the maximum, red first, and is always in [0, 360).
    #[inline]
    pub fn from_rgb(rgb: Rgb<f32>) -> Hsv {
        let max = rgb.max_channel();
        let min = rgb.min_channel();
        let delta = max - min;

        if delta == 0. {
            return Hsv::new(0., 0., max);
        }

        let s = delta / max;

        let h = if max == rgb.r {
            (rgb.g - rgb.b) / delta
        } else if max == rgb.g {
            2. + (rgb.b - rgb.r) / delta
        } else {
            4. + (rgb.r - rgb.g) / delta
        };

        Hsv::new(normalize_hue(h * 60.), s, max)
    }

    /// Converts [Hsv] into [Rgb].
    ///
    /// Zero value wins over zero saturation, both short-circuit before hue is looked at.
    /// Any sextant outside 0..=4 falls into the magenta–red row.
    #[inline]
    pub fn to_rgb(&self) -> Rgb<f32> {
        let (h, s, v) = (self.h, self.s, self.v);

        if v == 0. {
            return Rgb::black();
        }

        if s == 0. {
            return Rgb::dup(v);
        }

        let (sextant, f) = sextant(h);

        let t1 = v * (1. - s);
        let t2 = v * (1. - s * f);
        let t3 = v * (1. - s * (1. - f));

        match sextant {
            0 => Rgb::new(v, t3, t1),
            1 => Rgb::new(t2, v, t1),
            2 => Rgb::new(t1, v, t3),
            3 => Rgb::new(t1, t2, v),
            4 => Rgb::new(t3, t1, v),
            _ => Rgb::new(v, t1, t2),
        }
    }

    /// Returns a copy with hue folded into [0, 360)
    #[inline]
    pub fn wrap_hue(&self) -> Hsv {
        Hsv::new(wrap_hue(self.h), self.s, self.v)
    }
}

impl Index<usize> for Hsv {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.h,
            1 => &self.s,
            2 => &self.v,
            _ => panic!("Index out of bounds for Hsv"),
        }
    }
}

impl IndexMut<usize> for Hsv {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.h,
            1 => &mut self.s,
            2 => &mut self.v,
            _ => panic!("Index out of bounds for Hsv"),
        }
    }
}

impl From<[f32; 3]> for Hsv {
    #[inline]
    fn from(value: [f32; 3]) -> Self {
        Hsv::new(value[0], value[1], value[2])
    }
}

impl From<Hsv> for [f32; 3] {
    #[inline]
    fn from(value: Hsv) -> Self {
        [value.h, value.s, value.v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn forward_reference() {
        let hsv = Hsv::from_rgb(Rgb::new(0.7, 0.8, 0.2));
        assert!((hsv.h - 70.).abs() < 1e-2);
        assert!((hsv.s - 0.75).abs() < 1e-2);
        assert!((hsv.v - 0.8).abs() < 1e-2);
    }

    #[test]
    fn inverse_reference() {
        let rgb = Hsv::new(70., 0.75, 0.8).to_rgb();
        assert!((rgb.r - 0.7).abs() < 1e-2);
        assert!((rgb.g - 0.8).abs() < 1e-2);
        assert!((rgb.b - 0.2).abs() < 1e-2);
    }

    #[test]
    fn round_trip() {
        let rgb = Rgb::new(0.1, 0.2, 0.3);
        let rolled_back = Hsv::from_rgb(rgb).to_rgb();
        let dx = (rgb.r - rolled_back.r).abs();
        let dy = (rgb.g - rolled_back.g).abs();
        let dz = (rgb.b - rolled_back.b).abs();
        assert!(dx < 1e-5);
        assert!(dy < 1e-5);
        assert!(dz < 1e-5);
    }

    #[test]
    fn primaries() {
        assert_eq!(Hsv::from_rgb(Rgb::new(1., 0., 0.)), Hsv::new(0., 1., 1.));
        assert_eq!(Hsv::from_rgb(Rgb::new(0., 1., 0.)), Hsv::new(120., 1., 1.));
        assert_eq!(Hsv::from_rgb(Rgb::new(0., 0., 1.)), Hsv::new(240., 1., 1.));
        // red is the max, blue exceeds green: wraps from negative
        assert_eq!(Hsv::from_rgb(Rgb::new(1., 0., 1.)).h, 300.);
    }

    #[test]
    fn achromatic() {
        for x in [0f32, 0.25, 0.5, 1.] {
            let hsv = Hsv::from_rgb(Rgb::dup(x));
            assert_eq!(hsv, Hsv::new(0., 0., x));
            assert_eq!(hsv.to_rgb(), Rgb::dup(x));
        }
    }

    #[test]
    fn value_guard_precedes_saturation() {
        for h in [0f32, 45., 200., 359.] {
            for s in [0f32, 0.5, 1.] {
                assert_eq!(Hsv::new(h, s, 0.).to_rgb(), Rgb::black());
            }
            assert_eq!(Hsv::new(h, 0., 0.6).to_rgb(), Rgb::dup(0.6));
        }
    }

    #[test]
    fn out_of_range_sextant_uses_last_row() {
        let rgb = Hsv::new(360., 1., 1.).to_rgb();
        assert_eq!(rgb, Rgb::new(1., 0., 1.));
        let rgb = Hsv::new(-10., 1., 1.).to_rgb();
        assert!(rgb.r == 1. && rgb.g == 0.);
    }

    #[test]
    fn random_round_trip_and_hue_range() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let rgb = Rgb::new(
                rng.random_range(0f32..=1.),
                rng.random_range(0f32..=1.),
                rng.random_range(0f32..=1.),
            );
            let hsv = Hsv::from_rgb(rgb);
            assert!((0. ..360.).contains(&hsv.h), "{rgb:?} gave hue {}", hsv.h);
            assert!((0. ..=1.).contains(&hsv.s));
            if rgb.is_achromatic() {
                continue;
            }
            let rolled_back = hsv.to_rgb();
            for i in 0..3 {
                assert!(
                    (rgb[i] - rolled_back[i]).abs() < 1e-5,
                    "{rgb:?} came back as {rolled_back:?}"
                );
            }
        }
    }

    #[test]
    fn wrap_keeps_color() {
        let hsv = Hsv::new(430., 0.5, 0.5);
        let wrapped = hsv.wrap_hue();
        assert_eq!(wrapped.h, 70.);
        assert!(wrapped.to_rgb().euclidean_distance(Hsv::new(70., 0.5, 0.5).to_rgb()) < 1e-6);
    }
}
