use crate::error::RoadmapResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::axis_labels::{month_axis_labels, value_axis_labels};
use super::RoadmapEngine;

impl<R: Renderer> RoadmapEngine<R> {
    /// Builds the backend-agnostic scene for the current state.
    ///
    /// Draw order is background, grid, bubbles, legend, labels; within the
    /// bubble layer, store order decides stacking.
    pub fn build_frame(&self) -> RoadmapResult<RenderFrame> {
        let viewport = self.core.model.viewport;
        let style = self.core.presentation.render_style;
        let mut frame = RenderFrame::new(viewport);

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);

        if style.background_color.alpha > 0.0 {
            frame.background = Some(style.background_color);
        }

        if style.show_month_grid {
            self.push_month_grid(&mut frame, height)?;
        }
        if style.show_value_ticks {
            self.push_value_ticks(&mut frame, width)?;
        }
        if style.show_axis_labels {
            self.push_axis_labels(&mut frame, height)?;
        }
        self.push_bubbles(&mut frame)?;
        if style.show_legend {
            self.push_legend(&mut frame, width);
        }

        frame.validate()?;
        Ok(frame)
    }

    fn push_month_grid(&self, frame: &mut RenderFrame, height: f64) -> RoadmapResult<()> {
        let model = &self.core.model;
        let style = self.core.presentation.render_style;

        for month_index in 0..12 {
            let x = model.calendar_grid.slot_start_x(month_index, model.viewport)?;
            frame.lines.push(LinePrimitive::new(
                x,
                0.0,
                x,
                height,
                style.grid_line_width,
                style.grid_line_color,
            ));
        }
        let right = f64::from(model.viewport.width);
        frame.lines.push(LinePrimitive::new(
            right,
            0.0,
            right,
            height,
            style.grid_line_width,
            style.grid_line_color,
        ));
        Ok(())
    }

    fn push_value_ticks(&self, frame: &mut RenderFrame, width: f64) -> RoadmapResult<()> {
        let model = &self.core.model;
        let style = self.core.presentation.render_style;

        let ticks = model.value_axis.ticks(style.value_tick_count)?;
        for value in ticks {
            let y = model.value_axis.value_to_pixel(value, model.viewport)?;
            frame.lines.push(LinePrimitive::new(
                0.0,
                y,
                width,
                y,
                style.value_tick_line_width,
                style.value_tick_line_color,
            ));
        }
        Ok(())
    }

    fn push_axis_labels(&self, frame: &mut RenderFrame, height: f64) -> RoadmapResult<()> {
        let model = &self.core.model;
        let style = self.core.presentation.render_style;

        let month_y = height - style.axis_label_inset_px - style.axis_label_font_size_px;
        for label in month_axis_labels(model.calendar_grid, model.viewport)? {
            frame.texts.push(TextPrimitive::new(
                label.text,
                label.position_px,
                month_y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ));
        }

        for label in value_axis_labels(model.value_axis, model.viewport, style.value_tick_count)? {
            frame.texts.push(TextPrimitive::new(
                label.text,
                style.axis_label_inset_px,
                label.position_px - style.axis_label_font_size_px / 2.0,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Left,
            ));
        }
        Ok(())
    }

    fn push_bubbles(&self, frame: &mut RenderFrame) -> RoadmapResult<()> {
        let style = self.core.presentation.render_style;
        let palette = &self.core.presentation.service_palette;

        for project in self.visible_projects() {
            let geometry = self.project_bubble(&project)?;
            let base = palette.color_for(&project.service);
            let fill = Color::rgba(
                base.red,
                base.green,
                base.blue,
                base.alpha * style.bubble_fill_alpha,
            );

            frame.circles.push(
                CirclePrimitive::filled(
                    geometry.center.x,
                    geometry.center.y,
                    geometry.radius_px(),
                    fill,
                )
                .with_border(style.bubble_border_color, style.bubble_border_width_px),
            );

            if style.show_bubble_labels && !project.name.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    project.name.clone(),
                    geometry.center.x,
                    geometry.center.y - style.bubble_label_font_size_px / 2.0,
                    style.bubble_label_font_size_px,
                    style.bubble_label_color,
                    TextHAlign::Center,
                ));
            }
        }
        Ok(())
    }

    fn push_legend(&self, frame: &mut RenderFrame, width: f64) {
        let style = self.core.presentation.render_style;
        let palette = &self.core.presentation.service_palette;

        let swatch = style.legend_swatch_size_px;
        let swatch_x = width - style.legend_inset_px - swatch;
        let mut y = style.legend_inset_px;

        for (service, color) in palette.entries() {
            let alpha_scale = if self.is_service_visible(service) {
                1.0
            } else {
                style.legend_hidden_alpha
            };

            frame.rects.push(
                RectPrimitive::filled(
                    swatch_x,
                    y,
                    swatch,
                    swatch,
                    Color::rgba(color.red, color.green, color.blue, color.alpha * alpha_scale),
                )
                .with_corner_radius(style.legend_swatch_corner_px),
            );
            frame.texts.push(TextPrimitive::new(
                service.to_owned(),
                swatch_x - 6.0,
                y + (swatch - style.legend_font_size_px) / 2.0,
                style.legend_font_size_px,
                Color::rgba(
                    style.legend_text_color.red,
                    style.legend_text_color.green,
                    style.legend_text_color.blue,
                    style.legend_text_color.alpha * alpha_scale,
                ),
                TextHAlign::Right,
            ));

            y += swatch + style.legend_row_gap_px;
        }
    }
}
