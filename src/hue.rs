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
//! Hue wheel helpers shared by the cylindrical models.

pub(crate) const FULL_TURN: f32 = 360.;
pub(crate) const SEXTANT_WIDTH: f32 = 60.;

/// Splits a hue in degrees into its sextant index and the position inside it.
///
/// The index is `floor(hue / 60)`, so a hue in [0, 360) maps onto 0..=5 and the
/// fraction lies in [0, 1). Out of range hues give out of range indices, NaN gives 0.
#[inline]
pub(crate) fn sextant(hue: f32) -> (i32, f32) {
    let scaled = hue / SEXTANT_WIDTH;
    let whole = scaled.floor();
    (whole as i32, scaled - whole)
}

/// Corrects a hue produced by the max-channel formula, which is at most
/// one turn away from [0, 360).
#[inline]
pub(crate) fn normalize_hue(hue: f32) -> f32 {
    let mut h = hue;
    if h == FULL_TURN {
        h = 0.;
    } else if h < 0. {
        h += FULL_TURN;
    } else if h > FULL_TURN {
        h -= FULL_TURN;
    }
    // -1e-6 + 360 rounds to 360 in f32
    if h >= FULL_TURN { 0. } else { h }
}

/// Folds an arbitrary hue into [0, 360).
#[inline]
pub(crate) fn wrap_hue(hue: f32) -> f32 {
    let h = hue.rem_euclid(FULL_TURN);
    if h >= FULL_TURN { 0. } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sextant_split() {
        let (index, fract) = sextant(70.);
        assert_eq!(index, 1);
        assert!((fract - 1. / 6.).abs() < 1e-6);
        assert_eq!(sextant(0.), (0, 0.));
        assert_eq!(sextant(360.).0, 6);
        assert_eq!(sextant(-30.).0, -1);
        assert_eq!(sextant(f32::NAN).0, 0);
    }

    #[test]
    fn normalize_single_step() {
        assert_eq!(normalize_hue(360.), 0.);
        assert_eq!(normalize_hue(-60.), 300.);
        assert_eq!(normalize_hue(420.), 60.);
        assert_eq!(normalize_hue(123.5), 123.5);
        assert_eq!(normalize_hue(-1e-6), 0.);
    }

    #[test]
    fn wrap_any_turn() {
        assert_eq!(wrap_hue(720.), 0.);
        assert_eq!(wrap_hue(-90.), 270.);
        assert_eq!(wrap_hue(1090.), 10.);
        assert_eq!(wrap_hue(-1e-7), 0.);
    }
}
