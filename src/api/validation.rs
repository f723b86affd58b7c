use crate::error::{RoadmapError, RoadmapResult};

use super::RenderStyle;

pub(super) fn validate_render_style(style: RenderStyle) -> RoadmapResult<()> {
    style.background_color.validate()?;
    style.grid_line_color.validate()?;
    style.value_tick_line_color.validate()?;
    style.axis_label_color.validate()?;
    style.bubble_border_color.validate()?;
    style.bubble_label_color.validate()?;
    style.legend_text_color.validate()?;

    for (name, value) in [
        ("grid_line_width", style.grid_line_width),
        ("value_tick_line_width", style.value_tick_line_width),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
        ("bubble_border_width_px", style.bubble_border_width_px),
        ("bubble_label_font_size_px", style.bubble_label_font_size_px),
        ("legend_swatch_size_px", style.legend_swatch_size_px),
        ("legend_font_size_px", style.legend_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(RoadmapError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("axis_label_inset_px", style.axis_label_inset_px),
        ("legend_swatch_corner_px", style.legend_swatch_corner_px),
        ("legend_row_gap_px", style.legend_row_gap_px),
        ("legend_inset_px", style.legend_inset_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RoadmapError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }

    for (name, value) in [
        ("bubble_fill_alpha", style.bubble_fill_alpha),
        ("legend_hidden_alpha", style.legend_hidden_alpha),
    ] {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(RoadmapError::InvalidData(format!(
                "render style `{name}` must be finite and in [0, 1]"
            )));
        }
    }

    if style.value_tick_count < 2 {
        return Err(RoadmapError::InvalidData(
            "render style `value_tick_count` must be >= 2".to_owned(),
        ));
    }

    Ok(())
}
