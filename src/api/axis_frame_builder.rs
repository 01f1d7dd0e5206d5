use crate::core::ticks::format_tick;
use crate::render::{CanvasLayerKind, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{AxisStyle, BarChartLayout};

/// Baseline shift that hangs category labels below their anchor.
const CATEGORY_LABEL_DY_EM: f64 = 0.71;
/// Baseline shift that centers value labels on their tick.
const VALUE_LABEL_DY_EM: f64 = 0.32;

/// Emits the bottom category axis: domain path, one tick per band center and
/// rotated, end-anchored tick labels.
pub(super) fn push_category_axis(
    frame: &mut RenderFrame,
    layout: &BarChartLayout,
    style: &AxisStyle,
    font_size_px: f64,
) {
    let kind = CanvasLayerKind::CategoryAxis;
    let baseline = layout.region.height;
    let (range_start, range_end) = layout.band_scale.range();
    let tick = style.tick_size_px;

    for (x1, y1, x2, y2) in [
        (range_start, baseline + tick, range_start, baseline),
        (range_start, baseline, range_end, baseline),
        (range_end, baseline, range_end, baseline + tick),
    ] {
        frame.push_line(kind, axis_line(x1, y1, x2, y2, style));
    }

    let label_distance = tick + style.tick_padding_px;
    let (anchor_dx, anchor_dy) =
        rotate_point(0.0, label_distance, style.category_label_rotation_deg);
    for bar in &layout.bars {
        let center = bar.center_x();
        frame.push_line(kind, axis_line(center, baseline, center, baseline + tick, style));
        // Unlabelled records keep their tick and bar.
        if bar.label.is_empty() {
            continue;
        }
        frame.push_text(
            kind,
            TextPrimitive::new(
                bar.label.clone(),
                center + anchor_dx,
                baseline + anchor_dy,
                font_size_px,
                style.color,
                TextHAlign::Right,
            )
            .with_rotation(style.category_label_rotation_deg)
            .with_dy_em(CATEGORY_LABEL_DY_EM),
        );
    }
}

/// Emits the left value axis with round-number ticks.
pub(super) fn push_value_axis(
    frame: &mut RenderFrame,
    layout: &BarChartLayout,
    style: &AxisStyle,
    font_size_px: f64,
) {
    let kind = CanvasLayerKind::ValueAxis;
    let (range_start, range_end) = layout.value_scale.range();
    let tick = style.tick_size_px;

    for (x1, y1, x2, y2) in [
        (-tick, range_start, 0.0, range_start),
        (0.0, range_start, 0.0, range_end),
        (0.0, range_end, -tick, range_end),
    ] {
        frame.push_line(kind, axis_line(x1, y1, x2, y2, style));
    }

    let step = layout.value_scale.tick_step(style.value_tick_count);
    let label_x = -(tick + style.tick_padding_px);
    for value in layout.value_scale.ticks(style.value_tick_count) {
        let y = layout.value_scale.map(value);
        frame.push_line(kind, axis_line(0.0, y, -tick, y, style));
        frame.push_text(
            kind,
            TextPrimitive::new(
                format_tick(value, step),
                label_x,
                y,
                font_size_px,
                style.color,
                TextHAlign::Right,
            )
            .with_dy_em(VALUE_LABEL_DY_EM),
        );
    }
}

fn axis_line(x1: f64, y1: f64, x2: f64, y2: f64, style: &AxisStyle) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, style.stroke_width, style.color)
}

/// Rotates `(x, y)` around the origin, clockwise-positive in screen space.
pub(super) fn rotate_point(x: f64, y: f64, degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}
