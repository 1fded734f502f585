//! Line plots of scalar functions written as PNG images.
use crate::solution::sample_points;
use eyre::{eyre, WrapErr};
use plotters::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub type Rgb = [u8; 3];

pub const BACKGROUND: Rgb = [255, 255, 255];
pub const AXIS: Rgb = [80, 128, 80];
pub const CURVE: Rgb = [24, 64, 160];

fn rgb_color([r, g, b]: Rgb) -> RGBColor {
    RGBColor(r, g, b)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlotSettings {
    pub width: u32,
    pub height: u32,
    /// Number of evenly spaced samples of the plotted function.
    pub samples: usize,
    /// Fraction of the smaller image dimension left empty around the chart.
    pub margin: f64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            samples: 500,
            margin: 0.1,
        }
    }
}

impl PlotSettings {
    fn font<'a>(&self, fraction_of_height: f64) -> FontDesc<'a> {
        let size = (fraction_of_height * self.height as f64).max(8.0);
        FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
    }

    fn margin_pixels(&self) -> u32 {
        (self.margin * self.width.min(self.height) as f64).round() as u32
    }
}

/// An RGB raster with the origin in the top left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let data = BACKGROUND.repeat(width as usize * height as usize);
        Self { width, height, data }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| {
            let offset = 3 * (y as usize * self.width as usize + x as usize);
            [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
        })
    }

    /// Writes the raster as an 8-bit RGB PNG with `title` as its `Title` text chunk.
    pub fn write_png(&self, path: impl AsRef<Path>, title: &str) -> eyre::Result<()> {
        let path = path.as_ref();
        let file = File::create(path).wrap_err_with(|| format!("failed to create {}", path.display()))?;
        let mut encoder = ::png::Encoder::new(BufWriter::new(file), self.width, self.height);
        encoder.set_color(::png::ColorType::Rgb);
        encoder.set_depth(::png::BitDepth::Eight);
        encoder.add_text_chunk("Title".to_string(), title.to_string())?;
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;
        writer.finish()?;
        Ok(())
    }
}

/// Value range of `values`, widened to a non-degenerate interval.
fn padded_range(values: impl IntoIterator<Item = f64>) -> Option<[f64; 2]> {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })?;
    let pad = if lo == hi {
        if lo == 0.0 {
            1.0
        } else {
            0.5 * lo.abs()
        }
    } else {
        0.05 * (hi - lo)
    };
    Some([lo - pad, hi + pad])
}

/// Plots `f` over `[from, to]` into a canvas, with `title` as the caption.
///
/// The chart carries a labelled mesh, with axes drawn through the origin when it lies
/// within the plotted range. Non-finite samples break the curve. An empty title leaves
/// out the caption.
pub fn plot_function(
    f: impl Fn(f64) -> f64,
    from: f64,
    to: f64,
    settings: &PlotSettings,
    title: &str,
) -> eyre::Result<Canvas> {
    if !(from.is_finite() && to.is_finite() && from < to) {
        return Err(eyre!("cannot plot over the interval [{}, {}]", from, to));
    }
    if settings.width < 2 || settings.height < 2 {
        return Err(eyre!("plot of size {}x{} is too small", settings.width, settings.height));
    }
    if !(0.0..0.5).contains(&settings.margin) {
        return Err(eyre!("plot margin must be in [0, 0.5), got {}", settings.margin));
    }

    let samples: Vec<(f64, f64)> = sample_points(from, to, settings.samples)
        .map(|x| (x, f(x)))
        .collect();
    let [y_lo, y_hi] = padded_range(samples.iter().map(|&(_, y)| y))
        .ok_or_else(|| eyre!("function has no finite values on [{}, {}]", from, to))?;

    let mut canvas = Canvas::new(settings.width, settings.height);
    {
        let root = BitMapBackend::with_buffer(&mut canvas.data, (settings.width, settings.height))
            .into_drawing_area();
        root.fill(&rgb_color(BACKGROUND))
            .wrap_err("failed to clear plot")?;

        let label_font = settings.font(1.0 / 54.0);
        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(settings.margin_pixels())
            .x_label_area_size(3 * label_font.get_size() as u32)
            .y_label_area_size(5 * label_font.get_size() as u32);
        if !title.is_empty() {
            builder.caption(title, settings.font(1.0 / 27.0));
        }
        let mut chart = builder
            .build_cartesian_2d(from..to, y_lo..y_hi)
            .wrap_err("failed to lay out plot")?;

        chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("u(x)")
            .label_style(label_font.clone())
            .axis_desc_style(label_font)
            .draw()
            .wrap_err("failed to draw plot mesh")?;

        let axis_style = rgb_color(AXIS).stroke_width(1);
        if from <= 0.0 && 0.0 <= to {
            chart
                .draw_series(LineSeries::new([(0.0, y_lo), (0.0, y_hi)], axis_style))
                .wrap_err("failed to draw plot axis")?;
        }
        if y_lo <= 0.0 && 0.0 <= y_hi {
            chart
                .draw_series(LineSeries::new([(from, 0.0), (to, 0.0)], axis_style))
                .wrap_err("failed to draw plot axis")?;
        }

        let curve_style = rgb_color(CURVE).stroke_width((settings.height / 540).max(1));
        for run in samples.split(|&(_, y)| !y.is_finite()) {
            if run.len() >= 2 {
                chart
                    .draw_series(LineSeries::new(run.iter().copied(), curve_style))
                    .wrap_err("failed to draw plotted function")?;
            }
        }

        root.present().wrap_err("failed to finish plot")?;
    }

    Ok(canvas)
}

/// Plots `f` over `[from, to]` and writes the result to `path`. The title is drawn as the
/// caption and also stored as PNG text metadata.
pub fn render_function(
    f: impl Fn(f64) -> f64,
    from: f64,
    to: f64,
    path: impl AsRef<Path>,
    settings: &PlotSettings,
    title: &str,
) -> eyre::Result<()> {
    let path = path.as_ref();
    let canvas = plot_function(f, from, to, settings, title)?;
    canvas
        .write_png(path, title)
        .wrap_err_with(|| format!("failed to write plot to {}", path.display()))
}
