use crate::render::Color;

/// Visual styling knobs applied when building render frames.
///
/// All lengths are device pixels and colors are straight-alpha RGBA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub background_color: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub value_tick_line_color: Color,
    pub value_tick_line_width: f64,
    /// Tick count along the value axis, endpoints included.
    pub value_tick_count: usize,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    /// Gap between the month labels and the bottom grid edge.
    pub axis_label_inset_px: f64,
    pub bubble_fill_alpha: f64,
    pub bubble_border_color: Color,
    pub bubble_border_width_px: f64,
    pub bubble_label_color: Color,
    pub bubble_label_font_size_px: f64,
    pub show_month_grid: bool,
    pub show_value_ticks: bool,
    pub show_axis_labels: bool,
    pub show_bubble_labels: bool,
    pub show_legend: bool,
    pub legend_swatch_size_px: f64,
    pub legend_swatch_corner_px: f64,
    pub legend_row_gap_px: f64,
    pub legend_inset_px: f64,
    pub legend_text_color: Color,
    pub legend_font_size_px: f64,
    /// Alpha multiplier applied to legend entries for hidden services.
    pub legend_hidden_alpha: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background_color: Color::rgb(0.98, 0.98, 0.99),
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.10),
            grid_line_width: 1.0,
            value_tick_line_color: Color::rgba(0.0, 0.0, 0.0, 0.06),
            value_tick_line_width: 1.0,
            value_tick_count: 6,
            axis_label_color: Color::rgb(0.35, 0.38, 0.42),
            axis_label_font_size_px: 12.0,
            axis_label_inset_px: 6.0,
            bubble_fill_alpha: 0.85,
            bubble_border_color: Color::rgba(1.0, 1.0, 1.0, 0.9),
            bubble_border_width_px: 2.0,
            bubble_label_color: Color::rgb(1.0, 1.0, 1.0),
            bubble_label_font_size_px: 12.0,
            show_month_grid: true,
            show_value_ticks: true,
            show_axis_labels: true,
            show_bubble_labels: true,
            show_legend: true,
            legend_swatch_size_px: 12.0,
            legend_swatch_corner_px: 3.0,
            legend_row_gap_px: 8.0,
            legend_inset_px: 16.0,
            legend_text_color: Color::rgb(0.20, 0.23, 0.28),
            legend_font_size_px: 12.0,
            legend_hidden_alpha: 0.35,
        }
    }
}
