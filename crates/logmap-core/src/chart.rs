// File: crates/logmap-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::Axis;
use crate::series::{Marker, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable titles and tick/axis labels (text shaping varies across
    /// platforms; snapshot tests turn this off).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Render the chart to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();

        // Background
        canvas.clear(opts.theme.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left as i32;
        let plot_right = opts.width - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = opts.height - opts.insets.bottom as i32;

        draw_grid(canvas, plot_left, plot_top, plot_right, plot_bottom, &self.x_axis, &self.y_axis, &opts.theme);
        draw_axis_lines(canvas, plot_left, plot_top, plot_right, plot_bottom, &opts.theme);

        for s in &self.series {
            draw_line_series(
                canvas,
                plot_left, plot_top, plot_right, plot_bottom,
                &self.x_axis, &self.y_axis, s,
            );
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_labels(
                canvas,
                plot_left, plot_top, plot_right, plot_bottom,
                &self.x_axis, &self.y_axis, &self.title,
                &opts.theme, &shaper,
            );
        }

        // Snapshot and encode
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent dirs.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn scale_x(axis: &Axis, l: i32, r: i32) -> impl Fn(f64) -> f32 + '_ {
    let span = (axis.max - axis.min).max(1e-9);
    let min = axis.min;
    move |x: f64| -> f32 { l as f32 + ((x - min) / span) as f32 * (r - l) as f32 }
}

fn scale_y(axis: &Axis, t: i32, b: i32) -> impl Fn(f64) -> f32 + '_ {
    let span = (axis.max - axis.min).max(1e-9);
    let min = axis.min;
    move |y: f64| -> f32 { b as f32 - ((y - min) / span) as f32 * (b - t) as f32 }
}

fn draw_grid(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let sx = scale_x(x_axis, l, r);
    let sy = scale_y(y_axis, t, b);

    // verticals at x ticks
    for &tx in &x_axis.ticks {
        if tx < x_axis.min || tx > x_axis.max { continue; }
        let x = sx(tx);
        canvas.draw_line((x, t as f32), (x, b as f32), &paint);
    }
    // horizontals at y ticks
    for &ty in &y_axis.ticks {
        if ty < y_axis.min || ty > y_axis.max { continue; }
        let y = sy(ty);
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, l: i32, t: i32, r: i32, b: i32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);
}

fn draw_labels(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    title: &str,
    theme: &Theme,
    shaper: &TextShaper,
) {
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let sx = scale_x(x_axis, l, r);
    let sy = scale_y(y_axis, t, b);

    // x ticks: mark below the axis, numeric label under the mark
    for &tx in &x_axis.ticks {
        if tx < x_axis.min || tx > x_axis.max { continue; }
        let x = sx(tx);
        canvas.draw_line((x, b as f32), (x, b as f32 + 4.0), &tick_paint);
        shaper.draw_centered(canvas, &Axis::format_tick(tx), x, b as f32 + 16.0, 10.0, theme.tick, true);
    }
    // y ticks: mark left of the axis, right-aligned numeric label
    for &ty in &y_axis.ticks {
        if ty < y_axis.min || ty > y_axis.max { continue; }
        let y = sy(ty);
        canvas.draw_line((l as f32 - 4.0, y), (l as f32, y), &tick_paint);
        shaper.draw_right(canvas, &Axis::format_tick(ty), l as f32 - 8.0, y + 4.0, 10.0, theme.tick, true);
    }

    // axis labels and title
    shaper.draw_right(canvas, &x_axis.label, r as f32, b as f32 + 34.0, 13.0, theme.axis_label, false);
    shaper.draw_left(canvas, &y_axis.label, 6.0, t as f32 + 12.0, 13.0, theme.axis_label, false);
    if !title.is_empty() {
        shaper.draw_left(canvas, title, l as f32, t as f32 - 10.0, 15.0, theme.title, false);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32, t: i32, r: i32, b: i32,
    x_axis: &Axis, y_axis: &Axis,
    series: &Series,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    let sx = scale_x(x_axis, l, r);
    let sy = scale_y(y_axis, t, b);
    let color = series.style.effective_color();

    if data.len() >= 2 {
        let mut builder = skia::PathBuilder::new();
        let (x0, y0) = data[0];
        builder.move_to((sx(x0), sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            builder.line_to((sx(x), sy(y)));
        }
        let path = builder.detach();

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(series.style.stroke_width);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);
    }

    if series.style.marker == Marker::None {
        return;
    }
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    let half = series.style.marker_size * 0.5;

    for &(x, y) in data {
        let (px, py) = (sx(x), sy(y));
        match series.style.marker {
            Marker::Circle => {
                canvas.draw_circle((px, py), half, &fill);
            }
            Marker::Diamond => {
                let mut d = skia::PathBuilder::new();
                d.move_to((px, py - half));
                d.line_to((px + half, py));
                d.line_to((px, py + half));
                d.line_to((px - half, py));
                d.close();
                let d = d.detach();
                canvas.draw_path(&d, &fill);
            }
            Marker::None => {}
        }
    }
}
