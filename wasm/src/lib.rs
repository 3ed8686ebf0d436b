use serde::Deserialize;
use series_chart::{RenderOptions, render_json};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartRenderOptions {
    width: Option<f32>,
    height: Option<f32>,
    padding: Option<f32>,
    title: Option<String>,
}

fn build_render_options(options: ChartRenderOptions) -> RenderOptions {
    let mut render_options = RenderOptions::default();
    let dims = &mut render_options.chart.dimensions;

    if let Some(width) = options.width {
        dims.width = width;
    }
    if let Some(height) = options.height {
        dims.height = height;
    }
    if let Some(padding) = options.padding {
        dims.padding = padding;
    }
    if let Some(title) = options.title {
        render_options.chart.title = title;
    }

    render_options
}

fn render(payload: &str, options_json: Option<&str>) -> Result<String, String> {
    let options = match options_json {
        Some(raw_options) => serde_json::from_str::<ChartRenderOptions>(raw_options)
            .map_err(|error| error.to_string())?,
        None => ChartRenderOptions::default(),
    };
    render_json(payload, &build_render_options(options)).map_err(|error| error.to_string())
}

#[wasm_bindgen]
pub fn render_chart_svg(payload_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    render(payload_json, options_json.as_deref()).map_err(|error| JsValue::from_str(&error))
}
