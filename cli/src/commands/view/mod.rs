use clap::Parser;
use shared::{
    config::ViewerConfig,
    graphics::start_viewer,
    models::{resolution::Resolution, viewport::Viewport},
    result::RenderResult,
};

/// 🔭 View Command
///
/// Opens the interactive window. Defaults:
/// 1280x720, zoom 1, offset (-0.5, 0).
#[derive(Parser, Debug)]
#[command(name = "view", about = "🔭 Explore the Mandelbrot set interactively.", long_about = None)]
pub struct ViewCommand {
    /// 📏 Window width in pixels
    #[arg(long, value_name = "WIDTH")]
    pub width: Option<u32>,

    /// 📐 Window height in pixels
    #[arg(long, value_name = "HEIGHT")]
    pub height: Option<u32>,

    /// 🔍 Initial magnification
    #[arg(short, long, value_name = "ZOOM")]
    pub zoom: Option<f64>,

    /// ↔️ Initial real offset
    #[arg(short = 'x', long, value_name = "X", allow_negative_numbers = true)]
    pub offset_x: Option<f64>,

    /// ↕️ Initial imaginary offset
    #[arg(short = 'y', long, value_name = "Y", allow_negative_numbers = true)]
    pub offset_y: Option<f64>,

    /// 🔁 Iteration cap
    #[arg(short, long, value_name = "N")]
    pub max_iterations: Option<u32>,
}

impl ViewCommand {
    pub fn into_config(self) -> RenderResult<ViewerConfig> {
        let defaults = ViewerConfig::default();

        let viewport = Viewport::new(
            self.zoom.unwrap_or(defaults.viewport.zoom),
            self.offset_x.unwrap_or(defaults.viewport.offset_x),
            self.offset_y.unwrap_or(defaults.viewport.offset_y),
        )?;
        let resolution = Resolution::new(
            self.width.unwrap_or(defaults.resolution.width()),
            self.height.unwrap_or(defaults.resolution.height()),
        )?;

        Ok(ViewerConfig {
            viewport,
            resolution,
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            ..defaults
        })
    }
}

pub async fn run(args: ViewCommand) -> RenderResult<()> {
    let config = args.into_config()?;
    start_viewer(config).await
}
