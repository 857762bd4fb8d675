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
use crate::{Cmyk, ColorModel, ConversionError, Gray, Hls, Hsv, Rgb};

/// BT.601 luma broadcast into three channels
#[inline]
pub fn gray_from_rgb(rgb: [f32; 3]) -> [f32; 3] {
    Gray::from_rgb(Rgb::from(rgb)).into()
}

/// Broadcasts the first channel into R, G and B
#[inline]
pub fn rgb_from_gray(gray: [f32; 3]) -> [f32; 3] {
    Gray::from(gray).to_rgb().into()
}

#[inline]
pub fn cmyk_from_rgb(rgb: [f32; 3]) -> [f32; 4] {
    Cmyk::from_rgb(Rgb::from(rgb)).into()
}

#[inline]
pub fn rgb_from_cmyk(cmyk: [f32; 4]) -> [f32; 3] {
    Cmyk::from(cmyk).to_rgb().into()
}

#[inline]
pub fn hsv_from_rgb(rgb: [f32; 3]) -> [f32; 3] {
    Hsv::from_rgb(Rgb::from(rgb)).into()
}

#[inline]
pub fn rgb_from_hsv(hsv: [f32; 3]) -> [f32; 3] {
    Hsv::from(hsv).to_rgb().into()
}

/// See [Hls::from_rgb], hue is not wrapped
#[inline]
pub fn hls_from_rgb(rgb: [f32; 3]) -> [f32; 3] {
    Hls::from_rgb(Rgb::from(rgb)).into()
}

/// See [Hls::to_rgb], hue outside [0, 360) yields black
#[inline]
pub fn rgb_from_hls(hls: [f32; 3]) -> [f32; 3] {
    Hls::from(hls).to_rgb().into()
}

#[derive(Debug, Copy, Clone)]
enum Sample {
    Rgb(Rgb<f32>),
    Gray(Gray),
    Cmyk(Cmyk),
    Hsv(Hsv),
    Hls(Hls),
}

impl Sample {
    /// Caller guarantees `src.len() >= model.channels()`
    fn read(model: ColorModel, src: &[f32]) -> Sample {
        match model {
            ColorModel::Rgb => Sample::Rgb(Rgb::new(src[0], src[1], src[2])),
            ColorModel::Gray => Sample::Gray(Gray::new(src[0])),
            ColorModel::Cmyk => Sample::Cmyk(Cmyk::new(src[0], src[1], src[2], src[3])),
            ColorModel::Hsv => Sample::Hsv(Hsv::new(src[0], src[1], src[2])),
            ColorModel::Hls => Sample::Hls(Hls::new(src[0], src[1], src[2])),
        }
    }

    fn from_rgb(model: ColorModel, rgb: Rgb<f32>) -> Sample {
        match model {
            ColorModel::Rgb => Sample::Rgb(rgb),
            ColorModel::Gray => Sample::Gray(Gray::from_rgb(rgb)),
            ColorModel::Cmyk => Sample::Cmyk(Cmyk::from_rgb(rgb)),
            ColorModel::Hsv => Sample::Hsv(Hsv::from_rgb(rgb)),
            ColorModel::Hls => Sample::Hls(Hls::from_rgb(rgb)),
        }
    }

    fn model(&self) -> ColorModel {
        match self {
            Sample::Rgb(_) => ColorModel::Rgb,
            Sample::Gray(_) => ColorModel::Gray,
            Sample::Cmyk(_) => ColorModel::Cmyk,
            Sample::Hsv(_) => ColorModel::Hsv,
            Sample::Hls(_) => ColorModel::Hls,
        }
    }

    fn to_rgb(self) -> Rgb<f32> {
        match self {
            Sample::Rgb(rgb) => rgb,
            Sample::Gray(gray) => gray.to_rgb(),
            Sample::Cmyk(cmyk) => cmyk.to_rgb(),
            Sample::Hsv(hsv) => hsv.to_rgb(),
            Sample::Hls(hls) => hls.to_rgb(),
        }
    }

    fn into_model(self, model: ColorModel) -> Sample {
        if self.model() == model {
            return self;
        }
        Sample::from_rgb(model, self.to_rgb())
    }

    /// Caller guarantees `dst.len() >= self.model().channels()`
    fn write(self, dst: &mut [f32]) {
        match self {
            Sample::Rgb(rgb) => dst[..3].copy_from_slice(&<[f32; 3]>::from(rgb)),
            Sample::Gray(gray) => dst[..3].copy_from_slice(&<[f32; 3]>::from(gray)),
            Sample::Cmyk(cmyk) => dst[..4].copy_from_slice(&<[f32; 4]>::from(cmyk)),
            Sample::Hsv(hsv) => dst[..3].copy_from_slice(&<[f32; 3]>::from(hsv)),
            Sample::Hls(hls) => dst[..3].copy_from_slice(&<[f32; 3]>::from(hls)),
        }
    }
}

/// Converts one sample held in `src` into `dst`.
///
/// Models other than RGB are bridged through [Rgb]; converting a model into itself
/// copies the channels as they are, so Gray is the only model whose identity
/// conversion changes anything (it re-broadcasts the first channel).
/// `dst` is left untouched when an error is returned.
pub fn convert(
    src_model: ColorModel,
    src: &[f32],
    dst_model: ColorModel,
    dst: &mut [f32],
) -> Result<(), ConversionError> {
    if src.len() != src_model.channels() {
        return Err(ConversionError::SourceLength {
            model: src_model,
            expected: src_model.channels(),
            found: src.len(),
        });
    }
    if dst.len() != dst_model.channels() {
        return Err(ConversionError::DestinationLength {
            model: dst_model,
            expected: dst_model.channels(),
            found: dst.len(),
        });
    }
    Sample::read(src_model, src)
        .into_model(dst_model)
        .write(dst);
    Ok(())
}

/// Converts the sample at the front of `buf` in place.
///
/// The whole source sample is read before any channel is written, so source and
/// destination may overlap freely. Elements past the destination sample are left
/// untouched, which matters when narrowing CMYK into a three channel model.
pub fn convert_in_place(
    src_model: ColorModel,
    dst_model: ColorModel,
    buf: &mut [f32],
) -> Result<(), ConversionError> {
    let required = src_model.channels().max(dst_model.channels());
    if buf.len() < required {
        return Err(ConversionError::BufferTooSmall {
            required,
            found: buf.len(),
        });
    }
    let sample = Sample::read(src_model, buf).into_model(dst_model);
    sample.write(buf);
    Ok(())
}
