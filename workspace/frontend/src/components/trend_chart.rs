use common::ChartPoint;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub title: String,
    pub points: Vec<ChartPoint>,
    #[prop_or_default]
    pub y_label: Option<String>,
    #[prop_or(AttrValue::Static("chart-trend"))]
    pub chart_id: AttrValue,
}

/// Line chart of the points in the order given.
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with(props.points.clone(), move |points| {
            if let Some(element) = chart_ref.cast::<Element>() {
                if !points.is_empty() {
                    draw(&element.id(), points);
                }
            }
            || ()
        });
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{&props.title}</h2>
                if props.points.is_empty() {
                    <div class="text-sm opacity-70">{"No data for this range."}</div>
                } else {
                    <div ref={chart_ref} id={props.chart_id.clone()} class="chart-container" style="height: 320px;"></div>
                    if let Some(label) = &props.y_label {
                        <div class="text-sm opacity-70 mt-2">{label}</div>
                    }
                }
            </div>
        </div>
    }
}

fn draw(div_id: &str, points: &[ChartPoint]) {
    if div_id.is_empty() {
        log::warn!("Trend chart container has no id, skipping draw");
        return;
    }

    let xs: Vec<&str> = points.iter().map(|p| p.x.as_str()).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();

    let trace = serde_json::json!([{
        "x": xs,
        "y": ys,
        "type": "scatter",
        "mode": "lines",
        "line": {"color": "#3b82f6", "width": 2, "shape": "spline"},
        "name": "Check-ins"
    }]);

    let layout = serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false, "tickfont": {"size": 12}},
        "yaxis": {"showgrid": true, "gridcolor": "#eee", "tickfont": {"size": 12}}
    });

    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    // Plain JS objects, not `Map`s, for Plotly
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    match (
        trace.serialize(&serializer),
        layout.serialize(&serializer),
        config.serialize(&serializer),
    ) {
        (Ok(trace), Ok(layout), Ok(config)) => newPlot(div_id, trace, layout, config),
        _ => log::error!("Failed to convert trend chart options for Plotly"),
    }
}
