use std::fmt::Write as _;

use crate::render::frame::SceneFrame;

/// Presentation attributes for SVG output.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SvgStyle {
    pub font_family: String,
    pub fill: String,
    /// Optional full-canvas background rectangle.
    pub background: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            fill: "#1f2937".to_string(),
            background: Some("#ffffff".to_string()),
        }
    }
}

/// Serialize a frame as a standalone SVG document, one centred `<text>` per entity.
///
/// Fully transparent entities are skipped.
pub fn frame_to_svg(frame: &SceneFrame, style: &SvgStyle) -> String {
    let w = frame.canvas.width;
    let h = frame.canvas.height;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    if let Some(bg) = &style.background {
        let _ = writeln!(
            out,
            r#"  <rect width="{w}" height="{h}" fill="{}"/>"#,
            escape_xml(bg)
        );
    }
    for e in &frame.entities {
        if e.opacity <= 0.0 {
            continue;
        }
        let _ = writeln!(
            out,
            r#"  <text class="word" x="{:.3}" y="{:.3}" text-anchor="middle" dominant-baseline="middle" font-family="{}" font-size="{:.3}" fill="{}" opacity="{:.4}">{}</text>"#,
            e.x,
            e.y,
            escape_xml(&style.font_family),
            e.font_size.max(0.0),
            escape_xml(&style.fill),
            e.opacity.clamp(0.0, 1.0),
            escape_xml(&e.word),
        );
    }
    out.push_str("</svg>\n");
    out
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
