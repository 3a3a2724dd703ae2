//! Text reports of a shape's fields.
//!
//! Inline layout, `precision = 2`, hidden label:
//! `center=(1.00,1.00), radius=11.00`.
//! Block layout puts the label on its own line and one indented `key=value`
//! line per field underneath.

use std::fmt::Write;

use super::{DeepClone, Strategy};
use crate::data::{Circle, Point2, Square, Triangle};
use crate::error::AllocationError;

/// Label case for the leading shape name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Label {
    #[default]
    Hidden,
    Lower,
    Upper,
}

impl Label {
    fn render(self, name: &str) -> Option<String> {
        match self {
            Label::Hidden => None,
            Label::Lower => Some(name.to_ascii_lowercase()),
            Label::Upper => Some(name.to_ascii_uppercase()),
        }
    }
}

/// Line structure of the report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Inline,
    Block { indent: String },
}

/// Formats a shape's fields with fixed `precision` decimals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub label: Label,
    pub precision: usize,
    pub layout: Layout,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            label: Label::Hidden,
            precision: 2,
            layout: Layout::Inline,
        }
    }
}

impl Report {
    pub fn new(label: Label, precision: usize) -> Self {
        Self {
            label,
            precision,
            layout: Layout::Inline,
        }
    }

    /// Switch to block layout with the given indent.
    pub fn block(mut self, indent: impl Into<String>) -> Self {
        self.layout = Layout::Block {
            indent: indent.into(),
        };
        self
    }

    fn point(&self, p: Point2) -> String {
        format!("({:.*},{:.*})", self.precision, p.x, self.precision, p.y)
    }

    fn number(&self, v: f64) -> String {
        format!("{:.*}", self.precision, v)
    }

    fn render(&self, name: &str, fields: &[(&str, String)]) -> String {
        let label = self.label.render(name);
        let mut out = String::new();
        match &self.layout {
            Layout::Inline => {
                if let Some(l) = label {
                    let _ = write!(out, "{l}: ");
                }
                for (k, (key, value)) in fields.iter().enumerate() {
                    if k > 0 {
                        out.push_str(", ");
                    }
                    let _ = write!(out, "{key}={value}");
                }
            }
            Layout::Block { indent } => {
                let mut first = true;
                if let Some(l) = label {
                    let _ = write!(out, "{l}:");
                    first = false;
                }
                for (key, value) in fields {
                    if !first {
                        out.push('\n');
                    }
                    first = false;
                    let _ = write!(out, "{indent}{key}={value}");
                }
            }
        }
        out
    }
}

impl Strategy<Circle> for Report {
    type Output = String;
    fn apply(&self, c: &Circle) -> String {
        self.render(
            "circle",
            &[
                ("center", self.point(c.center())),
                ("radius", self.number(c.radius())),
            ],
        )
    }
}

impl Strategy<Square> for Report {
    type Output = String;
    fn apply(&self, s: &Square) -> String {
        self.render(
            "square",
            &[
                ("center", self.point(s.center())),
                ("side", self.number(s.side())),
            ],
        )
    }
}

impl Strategy<Triangle> for Report {
    type Output = String;
    fn apply(&self, t: &Triangle) -> String {
        self.render(
            "triangle",
            &[
                ("base", self.number(t.base())),
                ("height", self.number(t.height())),
            ],
        )
    }
}

impl DeepClone for Layout {
    fn deep_clone(&self) -> Result<Self, AllocationError> {
        Ok(match self {
            Layout::Inline => Layout::Inline,
            Layout::Block { indent } => Layout::Block {
                indent: indent.deep_clone()?,
            },
        })
    }
}

impl DeepClone for Report {
    fn deep_clone(&self) -> Result<Self, AllocationError> {
        Ok(Self {
            label: self.label,
            precision: self.precision,
            layout: self.layout.deep_clone()?,
        })
    }
}
