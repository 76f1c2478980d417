use crate::image::GridLayout;
use crate::restorer::{RestoreParams, RestorePreset};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RestoreToolConfig {
    pub input: PathBuf,
    /// Treat the input as an export sheet and restore every cell.
    #[serde(default)]
    pub grid: Option<GridLayout>,
    /// Output file stems, one per cell in row-major order.
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub preset: RestorePreset,
    /// Full parameter set; replaces the preset when present.
    #[serde(default)]
    pub params: Option<RestoreParams>,
    pub output: RestoreOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct RestoreOutputConfig {
    pub dir: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl RestoreToolConfig {
    pub fn resolve_params(&self) -> RestoreParams {
        self.params
            .clone()
            .unwrap_or_else(|| self.preset.params())
    }

    /// File stem for output `index`.
    pub fn output_name(&self, index: usize) -> String {
        match self.names.get(index) {
            Some(name) => name.clone(),
            None if self.grid.is_none() => self
                .input
                .file_stem()
                .map(|s| format!("{}_restored", s.to_string_lossy()))
                .unwrap_or_else(|| "restored".to_string()),
            None => format!("icon_{index}"),
        }
    }
}

pub fn load_config(path: &Path) -> Result<RestoreToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RestoreToolConfig {
        serde_json::from_str(json).expect("valid config")
    }

    #[test]
    fn preset_used_without_params() {
        let cfg = parse(
            r#"{ "input": "in/icon.png", "preset": "studio_gray", "output": { "dir": "out" } }"#,
        );
        assert_eq!(cfg.resolve_params(), RestoreParams::studio_gray());
        assert_eq!(cfg.output_name(0), "icon_restored");
    }

    #[test]
    fn params_override_preset() {
        let cfg = parse(
            r#"{ "input": "sheet.png", "preset": "tight",
                 "params": { "margin_ratio": 0.2 },
                 "grid": { "origin": [10, 10], "cell": 64, "gap": 4, "cols": 3, "rows": 3 },
                 "names": ["navy"],
                 "output": { "dir": "out", "report_json": "out/report.json" } }"#,
        );
        let params = cfg.resolve_params();
        assert_eq!(params.margin_ratio, 0.2);
        assert_eq!(params.background_threshold, 30.0);
        assert_eq!(cfg.output_name(0), "navy");
        assert_eq!(cfg.output_name(4), "icon_4");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/nonexistent/restore.json")).unwrap_err();
        assert!(err.contains("/nonexistent/restore.json"));
    }
}
