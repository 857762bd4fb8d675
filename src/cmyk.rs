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
use std::ops::{Index, IndexMut};

/// Represents a subtractive CMYK sample, every channel in 0..1 range
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq)]
pub struct Cmyk {
    /// Cyan ink remaining after black extraction
    pub c: f32,
    /// Magenta ink remaining after black extraction
    pub m: f32,
    /// Yellow ink remaining after black extraction
    pub y: f32,
    /// Black (key)
    pub k: f32,
}

impl Cmyk {
    #[inline]
    pub const fn new(c: f32, m: f32, y: f32, k: f32) -> Cmyk {
        Cmyk { c, m, y, k }
    }

    /// Converts [Rgb] into [Cmyk] by extracting black and re-scaling the remaining inks.
    ///
    /// Pure black yields `(0, 0, 0, 1)`.
    #[inline]
    pub fn from_rgb(rgb: Rgb<f32>) -> Cmyk {
        let c = 1. - rgb.r;
        let m = 1. - rgb.g;
        let y = 1. - rgb.b;

        let mut k = 1f32;
        if c < k {
            k = c;
        }
        if m < k {
            k = m;
        }
        if y < k {
            k = y;
        }

        if k == 1. {
            return Cmyk::new(0., 0., 0., k);
        }

        let scale = 1. - k;
        Cmyk::new((c - k) / scale, (m - k) / scale, (y - k) / scale, k)
    }

    /// Converts [Cmyk] into [Rgb]
    #[inline]
    pub fn to_rgb(&self) -> Rgb<f32> {
        let scale = 1. - self.k;
        let c = self.c * scale + self.k;
        let m = self.m * scale + self.k;
        let y = self.y * scale + self.k;
        Rgb::new(1. - c, 1. - m, 1. - y)
    }
}

impl Index<usize> for Cmyk {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.c,
            1 => &self.m,
            2 => &self.y,
            3 => &self.k,
            _ => panic!("Index out of bounds for Cmyk"),
        }
    }
}

impl IndexMut<usize> for Cmyk {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.c,
            1 => &mut self.m,
            2 => &mut self.y,
            3 => &mut self.k,
            _ => panic!("Index out of bounds for Cmyk"),
        }
    }
}

impl From<[f32; 4]> for Cmyk {
    #[inline]
    fn from(value: [f32; 4]) -> Self {
        Cmyk::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Cmyk> for [f32; 4] {
    #[inline]
    fn from(value: Cmyk) -> Self {
        [value.c, value.m, value.y, value.k]
    }
}
