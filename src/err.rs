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
use crate::ColorModel;
use std::error::Error;
use std::fmt::Display;

/// Shape errors reported by the slice based conversion entry points.
///
/// The conversions themselves are total and never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// Source slice length does not match the source model channel count
    SourceLength {
        model: ColorModel,
        expected: usize,
        found: usize,
    },
    /// Destination slice length does not match the destination model channel count
    DestinationLength {
        model: ColorModel,
        expected: usize,
        found: usize,
    },
    /// In-place buffer cannot hold both the source and the destination sample
    BufferTooSmall { required: usize, found: usize },
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::SourceLength {
                model,
                expected,
                found,
            } => write!(
                f,
                "{model} source expects {expected} channels, but {found} were provided"
            ),
            ConversionError::DestinationLength {
                model,
                expected,
                found,
            } => write!(
                f,
                "{model} destination expects {expected} channels, but {found} were provided"
            ),
            ConversionError::BufferTooSmall { required, found } => write!(
                f,
                "In-place conversion requires at least {required} channels, but buffer has {found}"
            ),
        }
    }
}

impl Error for ConversionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_model() {
        let err = ConversionError::SourceLength {
            model: ColorModel::Cmyk,
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "CMYK source expects 4 channels, but 3 were provided"
        );
        let err = ConversionError::BufferTooSmall {
            required: 4,
            found: 1,
        };
        assert!(err.to_string().contains("at least 4"));
    }
}
