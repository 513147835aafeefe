//! Cairo-based rendering.
//!
//! Implements [`Surface`] for `cairo::Context` and provides the one-frame
//! paint used by the command-line host: clear to the background, ask the
//! controller to draw, then write the image out as PNG.

use super::color::Color;
use super::surface::Surface;
use crate::input::SelectionController;
use crate::util::{self, Point, Rect};
use log::{debug, info, warn};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while producing an image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

impl Surface for cairo::Context {
    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        let (cx, cy, rx, ry) = util::ellipse_in(bounds);
        self.set_source_rgba(color.r, color.g, color.b, color.a);

        self.save().ok();
        self.translate(cx, cy);
        self.scale(rx, ry);
        self.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
        self.restore().ok();

        let _ = self.fill();
    }

    fn fill_rect(&mut self, bounds: Rect, color: Color) {
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.rectangle(
            bounds.x as f64,
            bounds.y as f64,
            bounds.width as f64,
            bounds.height as f64,
        );
        let _ = self.fill();
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        self.set_source_rgba(color.r, color.g, color.b, color.a);
        self.move_to(first.x as f64, first.y as f64);
        for point in rest {
            self.line_to(point.x as f64, point.y as f64);
        }
        self.close_path();
        let _ = self.fill();
    }
}

/// Fills the whole canvas with a solid background color.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // A failed paint leaves the surface transparent
}

/// Paints one frame of the current selection into a fresh image surface.
pub fn render_frame(
    controller: &mut SelectionController,
    width: i32,
    height: i32,
    background: Color,
) -> Result<cairo::ImageSurface, RenderError> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;

    if let Some(region) = controller.damage_region() {
        debug!("Damage region: {:?}", region);
        if region.max_x() > width || region.max_y() > height {
            warn!(
                "Shape extends to ({}, {}), past the {}x{} canvas; it will be clipped",
                region.max_x(),
                region.max_y(),
                width,
                height
            );
        }
    }

    {
        let mut ctx = cairo::Context::new(&surface)?;
        ctx.set_antialias(cairo::Antialias::Best);
        fill_background(&ctx, background);
        controller.render(&mut ctx);
    }
    surface.flush();
    debug!("Rendered {}x{} frame", width, height);
    Ok(surface)
}

/// Renders the current selection and writes it to `path` as PNG.
pub fn render_to_png(
    controller: &mut SelectionController,
    width: i32,
    height: i32,
    background: Color,
    path: &Path,
) -> Result<(), RenderError> {
    let surface = render_frame(controller, width, height, background)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    surface.write_to_png(&mut file)?;

    info!("Wrote {}", path.display());
    Ok(())
}
