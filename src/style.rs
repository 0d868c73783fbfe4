use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// RGBA, each channel in 0..=1.
pub type Color = [f32; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Per-line drawing configuration. Immutable during a draw pass; replaced
/// wholesale through `LeadingLine::set_style`.
///
/// `sign_interval` and `weight` must stay positive. A zero or negative
/// interval is a contract violation, not a reported error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub weight: f32,
    pub color: Color,
    pub border_size: f32,
    pub border_color: Color,
    pub sign_color: Color,
    pub sign_interval: f32,
    pub opacity: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub closed: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            weight: 14.0,
            color: [1.0, 1.0, 0.0, 1.0],
            border_size: 2.0,
            border_color: [0.667, 0.667, 0.667, 1.0],
            sign_color: [1.0, 1.0, 1.0, 1.0],
            sign_interval: 60.0,
            opacity: 1.0,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            closed: false,
        }
    }
}

impl LineStyle {
    /// Width of the inner fill stroke. Narrower than the full weight by twice
    /// the border size so the border shows symmetrically on both edges.
    pub fn foreground_width(&self) -> f32 {
        self.weight - 2.0 * self.border_size
    }

    pub fn load(path: &Path) -> anyhow::Result<LineStyle> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading style file {}", path.display()))?;
        let style = serde_json::from_str(&data)
            .with_context(|| format!("parsing style file {}", path.display()))?;
        Ok(style)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let data = serde_json::to_string_pretty(self).context("serializing style")?;
        std::fs::write(path, data)
            .with_context(|| format!("writing style file {}", path.display()))?;
        Ok(())
    }
}
