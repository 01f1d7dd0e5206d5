use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::{FontDescription, Weight};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontWeight, RenderFrame, Renderer, TextHAlign, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster backend.
///
/// The image surface is recreated whenever a frame with a different viewport
/// arrives, so every render starts from a blank surface of the container size.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        Ok(Self {
            surface: create_surface(width, height)?,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn ensure_surface_size(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let width = i32::try_from(frame.viewport.width)
            .map_err(|_| ChartError::InvalidData("viewport width exceeds i32".to_owned()))?;
        let height = i32::try_from(frame.viewport.height)
            .map_err(|_| ChartError::InvalidData("viewport height exceeds i32".to_owned()))?;
        if self.surface.width() != width || self.surface.height() != height {
            self.surface = create_surface(width, height)?;
        }
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.ensure_surface_size(frame)?;

        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.translate(frame.origin_x, frame.origin_y);

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            for line in &layer.lines {
                apply_color(&context, line.color);
                context.set_line_width(line.stroke_width);
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
                stats.lines_drawn += 1;
            }
            for rect in &layer.rects {
                apply_color(&context, rect.fill_color);
                context.rectangle(rect.x, rect.y, rect.width, rect.height);
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                stats.rects_drawn += 1;
            }
            for text in &layer.texts {
                draw_text(&context, text)?;
                stats.texts_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save context", err))?;
    context.translate(text.x, text.y);
    context.rotate(text.rotation_deg.to_radians());

    let mut font_description = FontDescription::from_string("Sans");
    font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
    if text.weight == FontWeight::Bold {
        font_description.set_weight(Weight::Bold);
    }

    apply_color(context, text.color);
    let mut baseline = text.dy_em * text.font_size_px;
    for line in text.lines() {
        let layout = pangocairo::functions::create_layout(context);
        layout.set_font_description(Some(&font_description));
        layout.set_text(line);

        let (text_width, _text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => -f64::from(text_width) / 2.0,
            TextHAlign::Right => -f64::from(text_width),
        };
        let ascent = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        context.move_to(x, baseline - ascent);
        pangocairo::functions::show_layout(context, &layout);
        baseline += TextPrimitive::LINE_HEIGHT_EM * text.font_size_px;
    }

    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore context", err))
}

fn create_surface(width: i32, height: i32) -> ChartResult<ImageSurface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::InvalidData(
            "cairo surface size must be > 0".to_owned(),
        ));
    }
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
