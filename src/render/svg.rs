use super::{DisplayList, DrawCommand, Stroke};

/// Serialize a display list as a standalone SVG document
pub fn to_svg(list: &DisplayList, width: f64, height: f64) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = width,
        h = height
    );
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"#fff\"/>\n");

    for cmd in &list.commands {
        let element = match cmd {
            DrawCommand::Line { from, to, stroke } => format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                from.0,
                from.1,
                to.0,
                to.1,
                stroke_attrs(stroke)
            ),
            DrawCommand::Dot {
                center,
                radius,
                fill,
                outline,
                ..
            } => format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" {}/>"#,
                center.0,
                center.1,
                radius,
                rgb(fill),
                stroke_attrs(outline)
            ),
            DrawCommand::Ring {
                center,
                radius,
                stroke,
                ..
            } => format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="none" {}/>"#,
                center.0,
                center.1,
                radius,
                stroke_attrs(stroke)
            ),
            DrawCommand::Square {
                center,
                size,
                fill,
                stroke,
                ..
            } => format!(
                r#"<rect x="{:.2}" y="{:.2}" width="{}" height="{}" fill="{}" {}/>"#,
                center.0 - size / 2.0,
                center.1 - size / 2.0,
                size,
                size,
                rgb(fill),
                stroke_attrs(stroke)
            ),
        };
        out.push_str(&element);
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

fn rgb(fill: &[u8; 3]) -> String {
    format!("rgb({},{},{})", fill[0], fill[1], fill[2])
}

fn stroke_attrs(stroke: &Stroke) -> String {
    format!(r#"stroke="{}" stroke-width="{}""#, stroke.color, stroke.width)
}
