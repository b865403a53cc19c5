use clap::Subcommand;

use self::{render::RenderCommand, view::ViewCommand};

pub mod render;
pub mod view;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 🖼️ Render to PNG
    ///
    /// Compute the escape-time image of a viewport and write it to disk.
    Render(RenderCommand),

    /// 🔭 Interactive viewer
    ///
    /// Open a window; scroll to zoom at the cursor, drag to pan, R to reset.
    View(ViewCommand),
}
