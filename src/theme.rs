#[derive(Debug, Clone)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    pub corner_radius: f32,
    pub grid_color: String,
    pub grid_opacity: f32,
    pub line_color: String,
    pub line_width: f32,
    pub marker_fill: String,
    pub marker_stroke: String,
    pub marker_radius: f32,
    pub marker_stroke_width: f32,
    pub axis_label_color: String,
    pub axis_label_size: f32,
    pub value_label_color: String,
    pub value_label_size: f32,
    pub title_color: String,
    pub title_size: f32,
}

impl Theme {
    /// Dark slate canvas with a sky-blue trend line and orange markers.
    pub fn midnight() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            background: "#0b1120".to_string(),
            corner_radius: 16.0,
            grid_color: "#1f2937".to_string(),
            grid_opacity: 0.4,
            line_color: "#38bdf8".to_string(),
            line_width: 3.0,
            marker_fill: "#f97316".to_string(),
            marker_stroke: "#fff".to_string(),
            marker_radius: 5.0,
            marker_stroke_width: 2.0,
            axis_label_color: "#e2e8f0".to_string(),
            axis_label_size: 14.0,
            value_label_color: "#38bdf8".to_string(),
            value_label_size: 12.0,
            title_color: "#e2e8f0".to_string(),
            title_size: 16.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}
