//! JSON renderer for editor and CI integration.

use crate::render::{FunctionReport, Renderer};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct FunctionView<'a> {
    source: &'a str,
    function: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    fixed: bool,
    diagnostics: Vec<DiagnosticView<'a>>,
}

#[derive(Serialize)]
struct DiagnosticView<'a> {
    name: &'a str,
    message: &'a str,
    fixable: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, reports: &[FunctionReport]) -> String {
        let views: Vec<FunctionView> = reports
            .iter()
            .map(|report| FunctionView {
                source: &report.source,
                function: &report.function,
                line: report.line,
                fixed: report.fixed,
                diagnostics: report
                    .diagnostics
                    .iter()
                    .map(|diag| DiagnosticView {
                        name: &diag.name,
                        message: &diag.message,
                        fixable: diag.is_fixable(),
                    })
                    .collect(),
            })
            .collect();
        let mut out = serde_json::to_string_pretty(&views).unwrap_or_default();
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::report;
    use serde_json::Value;

    #[test]
    fn renders_functions_and_diagnostics() {
        let out = JsonRenderer.render(&[report(false)]);
        let value: Value = serde_json::from_str(&out).unwrap();
        let func = &value[0];
        assert_eq!(func["function"], "quux");
        assert_eq!(func["line"], 7);
        assert_eq!(func["fixed"], false);
        let diags = func["diagnostics"].as_array().unwrap();
        assert_eq!(diags.len(), 3);
        assert_eq!(diags[1]["name"], "root0");
        assert_eq!(diags[0]["fixable"], true);
        assert_eq!(diags[2]["fixable"], false);
    }

    #[test]
    fn empty_report_is_an_empty_array() {
        assert_eq!(JsonRenderer.render(&[]), "[]\n");
    }
}
