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
use criterion::{Criterion, criterion_group, criterion_main};
use hexcone::{Cmyk, ColorModel, Gray, Hls, Hsv, Rgb, convert};
use std::hint::black_box;

fn sweep() -> Vec<Rgb<f32>> {
    let steps = 16;
    let mut samples = Vec::with_capacity(steps * steps * steps);
    for r in 0..steps {
        for g in 0..steps {
            for b in 0..steps {
                let scale = 1. / (steps - 1) as f32;
                samples.push(Rgb::new(
                    r as f32 * scale,
                    g as f32 * scale,
                    b as f32 * scale,
                ));
            }
        }
    }
    samples
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let samples = sweep();

    c.bench_function("hexcone: RGB -> Gray -> RGB", |b| {
        b.iter(|| {
            for &rgb in samples.iter() {
                black_box(Gray::from_rgb(black_box(rgb)).to_rgb());
            }
        })
    });

    c.bench_function("hexcone: RGB -> CMYK -> RGB", |b| {
        b.iter(|| {
            for &rgb in samples.iter() {
                black_box(Cmyk::from_rgb(black_box(rgb)).to_rgb());
            }
        })
    });

    c.bench_function("hexcone: RGB -> HSV -> RGB", |b| {
        b.iter(|| {
            for &rgb in samples.iter() {
                black_box(Hsv::from_rgb(black_box(rgb)).to_rgb());
            }
        })
    });

    c.bench_function("hexcone: RGB -> HLS -> RGB", |b| {
        b.iter(|| {
            for &rgb in samples.iter() {
                black_box(Hls::from_rgb(black_box(rgb)).wrap_hue().to_rgb());
            }
        })
    });

    c.bench_function("hexcone: convert HSV -> CMYK", |b| {
        let hsv = samples
            .iter()
            .map(|&rgb| <[f32; 3]>::from(Hsv::from_rgb(rgb)))
            .collect::<Vec<_>>();
        let mut dst = [0f32; 4];
        b.iter(|| {
            for src in hsv.iter() {
                convert(ColorModel::Hsv, src, ColorModel::Cmyk, &mut dst).unwrap();
                black_box(&dst);
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
