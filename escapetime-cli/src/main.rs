//! Renders the default Mandelbrot view to `fractal.png`.

use std::process::ExitCode;

use escapetime_render::{Mandelbrot, PngSink, RenderMode};
use log::{error, info};

const OUTPUT_PATH: &str = "fractal.png";

fn main() -> ExitCode {
    env_logger::init();

    let mut engine = Mandelbrot::new();
    engine.set_render_mode(RenderMode::Parallel);

    let sink = PngSink::new(OUTPUT_PATH);
    match engine.render(&sink) {
        Ok(()) => {
            let size = engine.image_size();
            info!(
                "wrote {}x{} image to {OUTPUT_PATH}",
                size.width(),
                size.height()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("render failed: {err}");
            ExitCode::FAILURE
        }
    }
}
