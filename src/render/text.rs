//! Plain text renderer, one line per diagnostic in `file:line: ...` form.

use crate::render::{FunctionReport, Renderer};

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, reports: &[FunctionReport]) -> String {
        let mut out = String::new();
        let mut problems = 0;
        let mut fixed = 0;

        for report in reports {
            let location = match report.line {
                Some(line) => format!("{}:{}", report.source, line),
                None => report.source.clone(),
            };
            for diag in &report.diagnostics {
                let marker = if report.fixed {
                    " (fixed)"
                } else if diag.is_fixable() {
                    " [fixable]"
                } else {
                    ""
                };
                out.push_str(&format!(
                    "{}: {}: {}{}\n",
                    location, report.function, diag.message, marker
                ));
            }
            problems += report.diagnostics.len();
            if report.fixed {
                fixed += report.diagnostics.len();
            }
        }

        if problems > 0 {
            out.push_str(&format!(
                "\n{} {} in {} {}",
                problems,
                plural(problems, "problem", "problems"),
                reports.len(),
                plural(reports.len(), "function", "functions"),
            ));
            if fixed > 0 {
                out.push_str(&format!(", {} fixed", fixed));
            }
            out.push('\n');
        }
        out
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}
