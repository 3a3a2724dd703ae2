use serde::Serialize;
use serde_json::Value;
use std::process::Command;

/// Result block printed by every run, in text or JSON form.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub code_rev: String,
    pub engine: &'static str,
    pub op: String,
    pub params: Value,
    pub results: Vec<Value>,
}

impl Summary {
    pub fn new(engine: &'static str, op: impl Into<String>, params: Value) -> Self {
        Self {
            code_rev: current_git_rev(),
            engine,
            op: op.into(),
            params,
            results: Vec::new(),
        }
    }

    /// Plain-text rendering: one line per result, in order.
    pub fn lines(&self) -> Vec<String> {
        self.results.iter().map(line).collect()
    }

    pub fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(self.lines().join("\n"))
        }
    }
}

fn line(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(x) => format!("{x:.3}"),
            None => n.to_string(),
        },
        Value::Object(o) => match (o.get("kind"), o.get("value")) {
            (Some(Value::String(kind)), Some(value)) => format!("{kind}: {}", line(value)),
            _ => v.to_string(),
        },
        other => other.to_string(),
    }
}

/// Commit hash from `GIT_COMMIT` (build or run time), else `git rev-parse`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_lines_follow_result_order() {
        let mut s = Summary::new("closed", "area", json!({"scale": 1.0}));
        s.results.push(json!({"kind": "circle", "value": 16.619_025}));
        s.results.push(json!({"kind": "square", "value": 1.44}));
        s.results.push(json!("center=(1.00,1.00), radius=11.00"));
        assert_eq!(
            s.lines(),
            vec![
                "circle: 16.619".to_string(),
                "square: 1.440".to_string(),
                "center=(1.00,1.00), radius=11.00".to_string(),
            ]
        );
    }

    #[test]
    fn json_summary_carries_params_and_results() {
        let mut s = Summary::new("open", "report", json!({"precision": 2}));
        s.results.push(json!("a"));
        s.results.push(json!("b"));
        let parsed: Value = serde_json::from_str(&s.render(true).unwrap()).unwrap();
        assert_eq!(parsed["engine"], "open");
        assert_eq!(parsed["op"], "report");
        assert_eq!(parsed["params"]["precision"], 2);
        assert_eq!(parsed["results"], json!(["a", "b"]));
        assert!(parsed["code_rev"].is_string());
    }
}
