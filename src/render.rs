use crate::chart::{ChartLayout, ScaledPoint};
use crate::error::ChartError;
use crate::theme::Theme;
use std::path::Path;

pub fn render_svg(layout: &ChartLayout, theme: &Theme) -> String {
    let mut svg = String::new();
    let width = layout.width;
    let height = layout.height;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));

    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\" rx=\"{}\"/>",
        theme.background, theme.corner_radius
    ));

    svg.push_str(&format!(
        "<g stroke=\"{}\" stroke-width=\"1\">",
        theme.grid_color
    ));
    for line in &layout.gridlines {
        svg.push_str(&format!(
            "<line x1=\"{}\" y1=\"{:.2}\" x2=\"{}\" y2=\"{:.2}\" stroke-opacity=\"{}\"/>",
            line.x1, line.y, line.x2, line.y, theme.grid_opacity
        ));
    }
    svg.push_str("</g>");

    let positions: Vec<ScaledPoint> = layout.scaled_points().collect();
    svg.push_str(&format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
        points_to_path(&positions),
        theme.line_color,
        theme.line_width
    ));

    for point in &layout.points {
        let ScaledPoint { x, y } = point.position;
        svg.push_str(&format!(
            "<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            theme.marker_radius, theme.marker_fill, theme.marker_stroke, theme.marker_stroke_width
        ));
        svg.push_str(&text_svg(
            x,
            layout.label_baseline,
            &point.label,
            &theme.axis_label_color,
            theme.axis_label_size,
            theme,
        ));
        svg.push_str(&text_svg(
            x,
            point.value_label_y,
            &format_currency(point.value),
            &theme.value_label_color,
            theme.value_label_size,
            theme,
        ));
    }

    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"bold\" fill=\"{}\">{}</text>",
        layout.title.x,
        layout.title.y,
        theme.font_family,
        theme.title_size,
        theme.title_color,
        escape_xml(&layout.title.text)
    ));

    svg.push_str("</svg>");
    svg
}

fn points_to_path(points: &[ScaledPoint]) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };
    let mut d = String::new();
    d.push_str(&format!("M {:.2} {:.2}", first.x, first.y));
    for point in points.iter().skip(1) {
        d.push_str(&format!(" L {:.2} {:.2}", point.x, point.y));
    }
    d
}

fn text_svg(x: f64, y: f64, content: &str, fill: &str, size: f32, theme: &Theme) -> String {
    format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{size}\" fill=\"{fill}\">{}</text>",
        theme.font_family,
        escape_xml(content)
    )
}

/// Whole-dollar amount with comma thousands separators, e.g. `$1,500`.
pub fn format_currency(value: f64) -> String {
    let rounded = format!("{value:.0}");
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${sign}{grouped}")
}

pub fn write_output_svg(svg: &str, output: &Path) -> Result<(), ChartError> {
    std::fs::write(output, svg).map_err(|source| ChartError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote {} bytes of SVG to {}", svg.len(), output.display());
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, theme: &Theme) -> Result<(), ChartError> {
    let mut opt = usvg::Options::default();
    opt.font_family = theme
        .font_family
        .split(',')
        .next()
        .unwrap_or("Inter")
        .trim()
        .to_string();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|err| ChartError::Raster(err.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ChartError::Raster("failed to allocate pixmap".to_string()))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output).map_err(|err| ChartError::Raster(err.to_string()))?;
    tracing::info!("wrote {}x{} PNG to {}", size.width(), size.height(), output.display());
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
