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

/// ITU-R BT.601 luma weights for R, G, B
pub const BT601_LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Represents a single channel gray sample
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialOrd, PartialEq)]
pub struct Gray {
    /// Luminance in 0..1 range
    pub y: f32,
}

impl Gray {
    #[inline]
    pub const fn new(y: f32) -> Gray {
        Gray { y }
    }

    /// Computes BT.601 luma of [Rgb].
    ///
    /// Defined for every real input, no clamping is performed.
    #[inline]
    pub fn from_rgb(rgb: Rgb<f32>) -> Gray {
        let [wr, wg, wb] = BT601_LUMA_WEIGHTS;
        Gray::new(rgb.r * wr + rgb.g * wg + rgb.b * wb)
    }

    /// Broadcasts the gray level into every [Rgb] channel.
    ///
    /// This is not an inverse of [Gray::from_rgb]: chroma discarded by the
    /// luma projection cannot be recovered.
    #[inline]
    pub fn to_rgb(&self) -> Rgb<f32> {
        Rgb::dup(self.y)
    }
}

impl From<f32> for Gray {
    #[inline]
    fn from(value: f32) -> Self {
        Gray::new(value)
    }
}

/// Reads the first channel, the remaining two are ignored
impl From<[f32; 3]> for Gray {
    #[inline]
    fn from(value: [f32; 3]) -> Self {
        Gray::new(value[0])
    }
}

impl From<Gray> for [f32; 3] {
    #[inline]
    fn from(value: Gray) -> Self {
        [value.y; 3]
    }
}
