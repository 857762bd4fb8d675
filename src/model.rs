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
use std::fmt::Display;

/// Declares which color model a flat channel slice holds.
///
/// Channel order for each model matches the field order of its sample type.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum ColorModel {
    /// R, G, B
    Rgb = 0,
    /// Luminance broadcast to three channels, only the first one is read
    Gray = 1,
    /// C, M, Y, K
    Cmyk = 2,
    /// H, S, V
    Hsv = 3,
    /// H, L, S
    Hls = 4,
}

impl ColorModel {
    pub const ALL: [ColorModel; 5] = [
        ColorModel::Rgb,
        ColorModel::Gray,
        ColorModel::Cmyk,
        ColorModel::Hsv,
        ColorModel::Hls,
    ];

    /// Number of channels a sample of this model occupies
    #[inline(always)]
    pub const fn channels(self) -> usize {
        match self {
            ColorModel::Rgb => 3,
            ColorModel::Gray => 3,
            ColorModel::Cmyk => 4,
            ColorModel::Hsv => 3,
            ColorModel::Hls => 3,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ColorModel::Rgb => "RGB",
            ColorModel::Gray => "Gray",
            ColorModel::Cmyk => "CMYK",
            ColorModel::Hsv => "HSV",
            ColorModel::Hls => "HLS",
        }
    }
}

impl Display for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for ColorModel {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ColorModel::Rgb),
            1 => Ok(ColorModel::Gray),
            2 => Ok(ColorModel::Cmyk),
            3 => Ok(ColorModel::Hsv),
            4 => Ok(ColorModel::Hls),
            _ => Err(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_cmyk_is_wide() {
        for model in ColorModel::ALL {
            let expected = if model == ColorModel::Cmyk { 4 } else { 3 };
            assert_eq!(model.channels(), expected, "{model}");
        }
    }

    #[test]
    fn discriminant_round_trip() {
        for model in ColorModel::ALL {
            assert_eq!(ColorModel::try_from(model as u8), Ok(model));
        }
        assert_eq!(ColorModel::try_from(5), Err(5));
    }
}
