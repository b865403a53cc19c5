use std::{path::PathBuf, time::Instant};

use clap::Parser;
use log::info;
use shared::{
    config::{RenderConfig, DEFAULT_OUTPUT},
    env::OUTPUT_VAR,
    graphics::export::save_png,
    models::{resolution::Resolution, viewport::Viewport},
    rendering::{report::RenderReport, EscapeTimeRenderer},
    result::RenderResult,
};

/// 🖼️ Render Command
///
/// Renders one viewport at a fixed resolution and saves it as a PNG.
#[derive(Parser, Debug)]
#[command(name = "render", about = "🖼️ Render the Mandelbrot set to a PNG file.", long_about = None)]
pub struct RenderCommand {
    /// 🔍 Magnification factor
    ///
    /// Must be positive. 1 shows the real axis from -2 to 1.
    #[arg(short, long, value_name = "ZOOM")]
    pub zoom: Option<f64>,

    /// ↔️ Real offset of the view
    #[arg(short = 'x', long, value_name = "X", allow_negative_numbers = true)]
    pub offset_x: Option<f64>,

    /// ↕️ Imaginary offset of the view
    #[arg(short = 'y', long, value_name = "Y", allow_negative_numbers = true)]
    pub offset_y: Option<f64>,

    /// 📏 Image width in pixels
    ///
    /// Defaults to 7680.
    #[arg(long, value_name = "WIDTH")]
    pub width: Option<u32>,

    /// 📐 Image height in pixels
    ///
    /// Defaults to 4320.
    #[arg(long, value_name = "HEIGHT")]
    pub height: Option<u32>,

    /// 🔁 Iteration cap
    ///
    /// Defaults to 1000. Intensity is `255 * n / cap`.
    #[arg(short, long, value_name = "N")]
    pub max_iterations: Option<u32>,

    /// 💾 Destination PNG
    #[arg(short, long, value_name = "PATH", env = OUTPUT_VAR)]
    pub output: Option<PathBuf>,

    /// 🧾 Print a JSON report of the render to stdout
    #[arg(long)]
    pub json: bool,
}

impl RenderCommand {
    pub fn into_config(self) -> RenderResult<RenderConfig> {
        let defaults = RenderConfig::default();

        let viewport = Viewport::new(
            self.zoom.unwrap_or(defaults.viewport.zoom),
            self.offset_x.unwrap_or(defaults.viewport.offset_x),
            self.offset_y.unwrap_or(defaults.viewport.offset_y),
        )?;
        let resolution = Resolution::new(
            self.width.unwrap_or(defaults.resolution.width()),
            self.height.unwrap_or(defaults.resolution.height()),
        )?;

        Ok(RenderConfig {
            viewport,
            resolution,
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            output: self.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
        })
    }
}

pub fn run(args: RenderCommand) -> RenderResult<()> {
    let json = args.json;
    let config = args.into_config()?;
    let report = render_to_file(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.to_json()?)?);
    }
    Ok(())
}

pub fn render_to_file(config: &RenderConfig) -> RenderResult<RenderReport> {
    info!(
        "Rendering {}x{} at zoom={} offset=({}, {}) with {} iterations",
        config.resolution.width(),
        config.resolution.height(),
        config.viewport.zoom,
        config.viewport.offset_x,
        config.viewport.offset_y,
        config.max_iterations
    );

    let started = Instant::now();
    let mut renderer =
        EscapeTimeRenderer::with_max_iterations(config.resolution, config.max_iterations)?;
    renderer.render(&config.viewport);
    let elapsed_ms = started.elapsed().as_millis() as u64;
    info!("Render finished in {} ms", elapsed_ms);

    save_png(renderer.buffer(), &config.output)?;

    Ok(RenderReport::new(
        config.viewport,
        renderer.buffer(),
        config.max_iterations,
        elapsed_ms,
    ))
}
