//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js`, are embedded at compile time
//! and evaluated as globals (no ES modules) once D3 itself has loaded.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Launch dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
///
/// JSON string syntax is valid JS, so this is safe for arbitrary payloads.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Safe to call more than once; only the first call installs the scripts.
/// The scripts are evaluated at global scope via indirect eval so their
/// function declarations can be promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");

    call_js(&format!(
        r#"
        (function() {{
            if (window.__launchChartsInit) return;
            window.__launchChartsInit = true;
            var scripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(scripts);
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__launchChartsReady = true;
                    console.log('Launch dashboard charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = js_string(&all_js),
    ));
}

/// Call a global renderer once D3, the chart scripts and the container exist.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let container = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__launchChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({container}, {data}, {config});
                    }} catch(e) {{ console.error('[Launch UI] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the success pie chart.
///
/// `data_json` is an array of `{label, value}` slices.
pub fn render_pie_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderPieChart", container_id, data_json, config_json);
}

/// Render the payload/outcome scatter chart.
///
/// `data_json` is an array of launch records; `config_json` carries axis
/// labels and the ordered booster categories used for colors.
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderScatterChart", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}
