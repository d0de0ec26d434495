//! Prometheus text rendering of every parameter leaf.

use crate::param::{Leaf, ParamGroup};
use std::fmt::Write;

/// Renders one line per leaf, named `group_param_field`.
///
/// Numbers render as `name value`, whole numbers without a decimal point. Text renders as an
/// info style sample `name{value="text"} 1`. Empty text and absent values are skipped.
pub fn render_metrics(group: &ParamGroup) -> String {
    let mut out = String::new();
    group.walk_leaves(|_, name, leaf| {
        let name = format!("{}_{}", group.name(), name).to_ascii_lowercase().replace('.', "_");
        // writing into a String cannot fail
        let _ = match leaf {
            Leaf::Number(v) => writeln!(out, "{name} {}", sample(v)),
            Leaf::Text(t) if !t.is_empty() => writeln!(out, "{name}{{value=\"{}\"}} 1", escape(&t)),
            Leaf::Text(_) => Ok(()),
        };
    });
    out
}

/// Sample value in exposition syntax. Infinities are spelled `+Inf`/`-Inf`.
fn sample(v: f64) -> String {
    match v {
        v if v.is_infinite() && v > 0.0 => "+Inf".to_string(),
        v if v.is_infinite() => "-Inf".to_string(),
        v => v.to_string(),
    }
}

fn escape(label: &str) -> String { label.replace('\\', r"\\").replace('"', "\\\"").replace('\n', r"\n") }
