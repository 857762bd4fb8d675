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
use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use hexcone::{
    Cmyk, ColorModel, Gray, Hls, Hsv, Rgb, convert, hls_from_rgb, hsv_from_rgb, rgb_from_hls,
    rgb_from_hsv,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hexcone")]
#[command(about = "Converts a color sample between RGB, Gray, CMYK, HSV and HLS")]
struct Cli {
    /// Model of the channel values passed on the command line
    #[arg(short, long, value_enum, default_value = "rgb")]
    from: Model,

    /// Channel values in model order, e.g. `0.7 0.8 0.2` for RGB.
    /// Without values the reference conversions are printed.
    #[arg(allow_negative_numbers = true)]
    values: Vec<f32>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Model {
    Rgb,
    Gray,
    Cmyk,
    Hsv,
    Hls,
}

impl From<Model> for ColorModel {
    fn from(value: Model) -> Self {
        match value {
            Model::Rgb => ColorModel::Rgb,
            Model::Gray => ColorModel::Gray,
            Model::Cmyk => ColorModel::Cmyk,
            Model::Hsv => ColorModel::Hsv,
            Model::Hls => ColorModel::Hls,
        }
    }
}

fn format_channels(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| format!("{v:.3}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn convert_to_all(src_model: ColorModel, values: &[f32]) -> anyhow::Result<()> {
    // Gray is given as a single level for convenience
    let src = if src_model == ColorModel::Gray && values.len() == 1 {
        vec![values[0]; 3]
    } else {
        values.to_vec()
    };
    if src.len() != src_model.channels() {
        bail!(
            "{src_model} takes {} values, got {}",
            src_model.channels(),
            values.len()
        );
    }

    for dst_model in ColorModel::ALL {
        let mut dst = vec![0f32; dst_model.channels()];
        convert(src_model, &src, dst_model, &mut dst)
            .with_context(|| format!("converting {src_model} into {dst_model}"))?;
        debug!(%src_model, %dst_model, "converted");
        println!("{dst_model}({})", format_channels(&dst));
    }
    Ok(())
}

/// Subtractive mix of two inks: CMYK channels are summed and clipped to 0..1
fn mix_inks(a: Rgb<f32>, b: Rgb<f32>) -> Rgb<f32> {
    let a = Cmyk::from_rgb(a);
    let b = Cmyk::from_rgb(b);
    let mut mixed = Cmyk::default();
    for i in 0..4 {
        mixed[i] = (a[i] + b[i]).clamp(0., 1.);
    }
    mixed.to_rgb()
}

fn print_reference() {
    let rgb = [0.9, 0.58, 0.24];
    let cmyk = hexcone::cmyk_from_rgb(rgb);
    println!(
        "CMYK({}) <-- RGB({})",
        format_channels(&cmyk),
        format_channels(&rgb)
    );

    let rgb = [0.7, 0.8, 0.2];
    println!(
        "HSV({}) <-- RGB({})",
        format_channels(&hsv_from_rgb(rgb)),
        format_channels(&rgb)
    );

    let hsv = [70., 0.75, 0.8];
    println!(
        "RGB({}) <-- HSV({})",
        format_channels(&rgb_from_hsv(hsv)),
        format_channels(&hsv)
    );

    let rgb = [0.2, 0.4, 0.9];
    println!(
        "HLS({}) <-- RGB({})",
        format_channels(&hls_from_rgb(rgb)),
        format_channels(&rgb)
    );

    let hls = [222.857, 0.778, 0.55];
    println!(
        "RGB({}) <-- HLS({})",
        format_channels(&rgb_from_hls(hls)),
        format_channels(&hls)
    );

    println!("\n----------------------------------------------------------\n");

    let yellow = Rgb::new(1., 1., 0.);
    let magenta = Rgb::new(1., 0., 1.);
    let mixed = mix_inks(yellow, magenta);
    let brightness = Gray::from_rgb(yellow).y * Gray::from_rgb(magenta).y;
    println!(
        "RGB({}, {:.3}) <-- yellow + magenta ink",
        format_channels(&<[f32; 3]>::from(mixed)),
        brightness
    );

    let red = Hls::from_rgb(Rgb::new(1., 0., 0.));
    info!(hue = red.h, "HLS hue of pure red is not wrapped");
    println!(
        "RGB({}) <-- HLS({}) wrapped",
        format_channels(&<[f32; 3]>::from(red.wrap_hue().to_rgb())),
        format_channels(&<[f32; 3]>::from(red))
    );

    let hsv = Hsv::from_rgb(Rgb::new(1., 0., 1.));
    println!(
        "HSV({}) <-- RGB(1.000, 0.000, 1.000)",
        format_channels(&<[f32; 3]>::from(hsv))
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    if cli.values.is_empty() {
        print_reference();
        return Ok(());
    }

    convert_to_all(cli.from.into(), &cli.values)
}
