use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FontWeight, LayerPrimitives, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Serializes frames to standalone SVG documents.
///
/// Each layer becomes a `<g>` group inside one translated root group, so the
/// markup mirrors the frame's drawable-region coordinates.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    last_document: Option<String>,
    render_count: usize,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup produced by the most recent successful render.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.last_document.as_deref()
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    #[must_use]
    pub fn into_document(self) -> Option<String> {
        self.last_document
    }

    pub fn render_to_string(frame: &RenderFrame) -> ChartResult<String> {
        frame.validate()?;

        let mut out = String::with_capacity(4096);
        write_frame(&mut out, frame).map_err(map_fmt_error)?;
        Ok(out)
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let document = Self::render_to_string(frame)?;
        self.last_document = Some(document);
        self.render_count += 1;
        Ok(())
    }
}

fn write_frame(out: &mut String, frame: &RenderFrame) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="{SVG_NAMESPACE}" width="{}" height="{}">"#,
        frame.viewport.width, frame.viewport.height
    )?;
    writeln!(
        out,
        r#"<g transform="translate({},{})">"#,
        num(frame.origin_x),
        num(frame.origin_y)
    )?;
    for layer in &frame.layers {
        if layer.is_empty() {
            continue;
        }
        write_layer(out, layer)?;
    }
    out.push_str("</g>\n</svg>\n");
    Ok(())
}

fn write_layer(out: &mut String, layer: &LayerPrimitives) -> std::fmt::Result {
    writeln!(out, r#"<g class="{}">"#, layer.kind.class_name())?;
    for line in &layer.lines {
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"{} stroke-width="{}"/>"#,
            num(line.x1),
            num(line.y1),
            num(line.x2),
            num(line.y2),
            line.color.to_hex(),
            opacity_attr("stroke-opacity", line.color),
            num(line.stroke_width)
        )?;
    }
    for rect in &layer.rects {
        writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}/>"#,
            num(rect.x),
            num(rect.y),
            num(rect.width),
            num(rect.height),
            rect.fill_color.to_hex(),
            opacity_attr("fill-opacity", rect.fill_color)
        )?;
    }
    for text in &layer.texts {
        write_text(out, text)?;
    }
    out.push_str("</g>\n");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let x = num(text.x);
    let y = num(text.y);

    write!(
        out,
        r#"<text x="{x}" y="{y}" font-size="{}" fill="{}"{} text-anchor="{anchor}""#,
        num(text.font_size_px),
        text.color.to_hex(),
        opacity_attr("fill-opacity", text.color)
    )?;
    if text.weight == FontWeight::Bold {
        out.push_str(r#" font-weight="bold""#);
    }
    if text.rotation_deg != 0.0 {
        write!(out, r#" transform="rotate({},{x},{y})""#, num(text.rotation_deg))?;
    }

    let lines = text.lines();
    if lines.len() == 1 {
        if text.dy_em != 0.0 {
            write!(out, r#" dy="{}em""#, num(text.dy_em))?;
        }
        out.push('>');
        out.push_str(&escape_xml(lines[0]));
    } else {
        out.push('>');
        for (index, line) in lines.iter().enumerate() {
            let dy = if index == 0 {
                text.dy_em
            } else {
                TextPrimitive::LINE_HEIGHT_EM
            };
            write!(
                out,
                r#"<tspan x="{x}" dy="{}em">{}</tspan>"#,
                num(dy),
                escape_xml(line)
            )?;
        }
    }
    out.push_str("</text>\n");
    Ok(())
}

fn opacity_attr(name: &str, color: Color) -> String {
    if color.alpha < 1.0 {
        format!(r#" {name}="{}""#, num(color.alpha))
    } else {
        String::new()
    }
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // `+ 0.0` folds negative zero so the output never reads `-0`.
    let mut text = format!("{:.3}", rounded + 0.0);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn map_fmt_error(err: std::fmt::Error) -> ChartError {
    ChartError::InvalidData(format!("failed to write svg markup: {err}"))
}
