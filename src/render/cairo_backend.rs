use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::PI;

use crate::error::{RoadmapError, RoadmapResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

/// Per-frame draw counters, mostly useful for assertions in headless tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RoadmapResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Draws either offscreen into an owned `ImageSurface` (`Renderer::render`)
/// or in place on a context the host provides (`CairoContextRenderer`). Draw
/// order within a frame is the background wash, lines, circles, rects, then
/// texts, so bubbles cover the grid and the legend stays on top of bubbles.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> RoadmapResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(RoadmapError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
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

    /// Consumes the renderer and hands out the offscreen surface, e.g. to
    /// read pixels back or pass the image to an encoder.
    #[must_use]
    pub fn into_surface(self) -> ImageSurface {
        self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> RoadmapResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn paint_frame(&mut self, context: &Context, frame: &RenderFrame) -> RoadmapResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        set_source(context, self.clear_color);
        context
            .paint()
            .map_err(|err| backend_error("failed to clear surface", err))?;
        if let Some(background) = frame.background {
            set_source(context, background);
            context
                .paint()
                .map_err(|err| backend_error("failed to paint background", err))?;
        }

        let mut stats = CairoRenderStats::default();
        for line in &frame.lines {
            stroke_line(context, line)?;
            stats.lines_drawn += 1;
        }
        for circle in &frame.circles {
            fill_bubble(context, circle)?;
            stats.circles_drawn += 1;
        }
        for rect in &frame.rects {
            fill_rect(context, rect)?;
            stats.rects_drawn += 1;
        }
        for text in &frame.texts {
            show_label(context, text)?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RoadmapResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| backend_error("failed to create cairo context", err))?;
        self.paint_frame(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> RoadmapResult<()> {
        self.paint_frame(context, frame)
    }
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> RoadmapResult<()> {
    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke line", err))
}

fn fill_rect(context: &Context, rect: &RectPrimitive) -> RoadmapResult<()> {
    if rect.corner_radius > 0.0 {
        rounded_rect_path(context, rect);
    } else {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
    }
    fill_current_path(context, rect.fill_color, rect.border_color, rect.border_width)
}

fn fill_bubble(context: &Context, circle: &CirclePrimitive) -> RoadmapResult<()> {
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, 2.0 * PI);
    fill_current_path(
        context,
        circle.fill_color,
        circle.border_color,
        circle.border_width,
    )
}

/// Fills the current path, stroking its border afterwards when one is set.
fn fill_current_path(
    context: &Context,
    fill: Color,
    border: Color,
    border_width: f64,
) -> RoadmapResult<()> {
    set_source(context, fill);
    if border_width <= 0.0 {
        return context
            .fill()
            .map_err(|err| backend_error("failed to fill shape", err));
    }

    context
        .fill_preserve()
        .map_err(|err| backend_error("failed to fill shape", err))?;
    set_source(context, border);
    context.set_line_width(border_width);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke shape border", err))
}

fn show_label(context: &Context, text: &TextPrimitive) -> RoadmapResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width_px, _) = layout.pixel_size();
    let x = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(width_px) / 2.0,
        TextHAlign::Right => text.x - f64::from(width_px),
    };

    set_source(context, text.color);
    context.move_to(x, text.y);
    pangocairo::functions::show_layout(context, &layout);
    Ok(())
}

fn rounded_rect_path(context: &Context, rect: &RectPrimitive) {
    let r = rect
        .corner_radius
        .min(rect.width / 2.0)
        .min(rect.height / 2.0);
    let (x0, y0) = (rect.x, rect.y);
    let (x1, y1) = (rect.x + rect.width, rect.y + rect.height);

    // Corner arc centres clockwise from top-right, each sweeping a quarter turn.
    let quarter = PI / 2.0;
    context.new_sub_path();
    context.arc(x1 - r, y0 + r, r, -quarter, 0.0);
    context.arc(x1 - r, y1 - r, r, 0.0, quarter);
    context.arc(x0 + r, y1 - r, r, quarter, PI);
    context.arc(x0 + r, y0 + r, r, PI, PI + quarter);
    context.close_path();
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn backend_error(prefix: &str, err: cairo::Error) -> RoadmapError {
    RoadmapError::InvalidData(format!("{prefix}: {err}"))
}
