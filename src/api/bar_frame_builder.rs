use crate::render::{
    CanvasLayerKind, FontWeight, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::axis_frame_builder::{push_category_axis, push_value_axis, rotate_point};
use super::{BarChartConfig, BarChartLayout};

/// Materializes a complete chart surface from resolved layout.
#[must_use]
pub(super) fn build_bar_chart_frame(
    layout: &BarChartLayout,
    config: &BarChartConfig,
) -> RenderFrame {
    let mut frame = RenderFrame::new(layout.viewport, layout.region);
    let width = layout.region.width;
    let height = layout.region.height;
    let captions = &config.captions;
    let fonts = &config.fonts;

    if !captions.title.is_empty() {
        frame.push_text(
            CanvasLayerKind::Title,
            TextPrimitive::new(
                captions.title.clone(),
                width / 2.0,
                -captions.title_offset_px,
                fonts.title_px,
                config.axis.color,
                TextHAlign::Center,
            )
            .with_weight(FontWeight::Bold),
        );
    }

    push_category_axis(&mut frame, layout, &config.axis, fonts.tick_label_px);
    push_value_axis(&mut frame, layout, &config.axis, fonts.tick_label_px);

    if !captions.x_axis_title.is_empty() {
        frame.push_text(
            CanvasLayerKind::AxisTitles,
            TextPrimitive::new(
                captions.x_axis_title.clone(),
                width / 2.0,
                height + captions.x_axis_title_offset_px,
                fonts.axis_title_px,
                config.axis.color,
                TextHAlign::Center,
            ),
        );
    }
    if !captions.y_axis_title.is_empty() {
        // Placed at (-height/2, -offset) in the caption's rotated frame.
        let (x, y) = rotate_point(-height / 2.0, -captions.y_axis_title_offset_px, -90.0);
        frame.push_text(
            CanvasLayerKind::AxisTitles,
            TextPrimitive::new(
                captions.y_axis_title.clone(),
                x,
                y,
                fonts.axis_title_px,
                config.axis.color,
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        );
    }

    for bar in &layout.bars {
        frame.push_rect(
            CanvasLayerKind::Bars,
            RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, config.bar_color),
        );
        frame.push_text(
            CanvasLayerKind::BarLabels,
            TextPrimitive::new(
                format_bar_value(bar.value),
                bar.center_x(),
                bar.y - config.bar_label_offset_px,
                fonts.bar_label_px,
                config.bar_label_color,
                TextHAlign::Center,
            ),
        );
    }

    frame
}

/// Shortest decimal form of a bar value (`98`, `12.5`).
#[must_use]
pub fn format_bar_value(value: f64) -> String {
    value.to_string()
}
