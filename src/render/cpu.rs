use resvg::tiny_skia;

use crate::config::RevealConfig;
use crate::foundation::core::{Affine, BezPath, Rgba8, affine_to_skia};
use crate::foundation::error::{RevealError, RevealResult};
use crate::illustration::model::Illustration;
use crate::render::scene::RevealFrameState;

/// A rendered frame as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, not premultiplied.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Options for [`CpuRenderer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuRendererOpts {
    /// Background painted beneath both layers; transparent when `None`.
    pub background: Option<Rgba8>,
}

/// Rasterizes the two stacked layers of a reveal: the full-color illustration underneath and the
/// dash-animated outline on top.
#[derive(Clone, Debug)]
pub struct CpuRenderer {
    size: u32,
    stroke_color: Rgba8,
    stroke_width: f64,
    tolerance: f64,
    opts: CpuRendererOpts,
}

impl CpuRenderer {
    /// Build a renderer from the cosmetic part of a configuration.
    pub fn new(config: &RevealConfig, opts: CpuRendererOpts) -> Self {
        Self {
            size: config.size,
            stroke_color: config.stroke_color.rgba8(),
            stroke_width: config.stroke_width,
            tolerance: config.accuracy,
            opts,
        }
    }

    /// Output edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Render `state` for `illustration`.
    pub fn render(
        &self,
        illustration: &Illustration,
        state: &RevealFrameState,
    ) -> RevealResult<FrameRGBA> {
        let mut canvas = new_pixmap(self.size)?;
        if let Some(bg) = self.opts.background {
            canvas.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        }

        let fit = self.fit_transform(illustration);

        if state.color_opacity > 0.0 {
            let layer = self.color_layer(illustration, fit)?;
            composite(&mut canvas, &layer, state.color_opacity);
        }

        if state.outline_opacity > 0.0 && state.strokes.iter().any(|s| s.drawn_fraction() > 0.0) {
            let layer = self.outline_layer(illustration, state, fit)?;
            composite(&mut canvas, &layer, state.outline_opacity);
        }

        Ok(FrameRGBA {
            width: canvas.width(),
            height: canvas.height(),
            data: demultiply(&canvas),
        })
    }

    /// Fit the illustration into the square canvas, centered, preserving aspect ratio.
    fn fit_transform(&self, illustration: &Illustration) -> Affine {
        let size = illustration.size();
        let edge = self.size as f64;
        let scale = (edge / size.width).min(edge / size.height);
        let dx = (edge - size.width * scale) / 2.0;
        let dy = (edge - size.height * scale) / 2.0;
        Affine::translate((dx, dy)) * Affine::scale(scale)
    }

    fn color_layer(&self, illustration: &Illustration, fit: Affine) -> RevealResult<tiny_skia::Pixmap> {
        let mut layer = new_pixmap(self.size)?;

        if let Some(tree) = illustration.svg_tree() {
            resvg::render(tree, affine_to_skia(fit), &mut layer.as_mut());
            return Ok(layer);
        }

        for shape in illustration.shapes() {
            let Some(fill) = shape.fill else {
                continue;
            };
            let Some(path) = shape
                .geometry
                .to_bez_path(self.tolerance)
                .and_then(|p| skia_path(&p))
            else {
                continue;
            };
            let mut paint = tiny_skia::Paint::default();
            paint.set_color_rgba8(fill.r, fill.g, fill.b, fill.a);
            paint.anti_alias = true;
            layer.fill_path(
                &path,
                &paint,
                tiny_skia::FillRule::Winding,
                affine_to_skia(fit * shape.transform),
                None,
            );
        }
        Ok(layer)
    }

    fn outline_layer(
        &self,
        illustration: &Illustration,
        state: &RevealFrameState,
        fit: Affine,
    ) -> RevealResult<tiny_skia::Pixmap> {
        let mut layer = new_pixmap(self.size)?;

        let mut paint = tiny_skia::Paint::default();
        let c = self.stroke_color;
        paint.set_color_rgba8(c.r, c.g, c.b, c.a);
        paint.anti_alias = true;

        for stroke_state in &state.strokes {
            if stroke_state.drawn_fraction() <= 0.0 {
                continue;
            }
            let Some(shape) = illustration.shape(stroke_state.shape) else {
                return Err(RevealError::render(format!(
                    "stroke refers to unknown shape {}",
                    stroke_state.shape.0
                )));
            };
            let Some(path) = shape
                .geometry
                .to_bez_path(self.tolerance)
                .and_then(|p| skia_path(&p))
            else {
                continue;
            };

            let len = stroke_state.dash_len as f32;
            let stroke = tiny_skia::Stroke {
                width: self.stroke_width as f32,
                line_cap: tiny_skia::LineCap::Round,
                line_join: tiny_skia::LineJoin::Round,
                dash: tiny_skia::StrokeDash::new(vec![len, len], stroke_state.dash_offset as f32),
                ..Default::default()
            };
            layer.stroke_path(
                &path,
                &paint,
                &stroke,
                affine_to_skia(fit * shape.transform),
                None,
            );
        }
        Ok(layer)
    }
}

fn new_pixmap(size: u32) -> RevealResult<tiny_skia::Pixmap> {
    tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| RevealError::render(format!("failed to allocate {size}x{size} pixmap")))
}

fn composite(canvas: &mut tiny_skia::Pixmap, layer: &tiny_skia::Pixmap, opacity: f64) {
    let paint = tiny_skia::PixmapPaint {
        opacity: opacity.clamp(0.0, 1.0) as f32,
        ..Default::default()
    };
    canvas.draw_pixmap(
        0,
        0,
        layer.as_ref(),
        &paint,
        tiny_skia::Transform::identity(),
        None,
    );
}

fn demultiply(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    out
}

pub(crate) fn skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    for el in path.elements() {
        match *el {
            kurbo::PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            kurbo::PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            kurbo::PathEl::QuadTo(p1, p2) => {
                pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            kurbo::PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            kurbo::PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
