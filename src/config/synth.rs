use crate::synth::{preset, IconSpec, DEFAULT_ICON_SIZE, PRESET_NAMES};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SynthToolConfig {
    /// Canvas size for presets.
    #[serde(default = "default_size")]
    pub size: usize,
    /// Preset names to render. Empty with no `icons` means every preset.
    #[serde(default)]
    pub presets: Vec<String>,
    #[serde(default)]
    pub icons: Vec<NamedIconSpec>,
    pub output: SynthOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct NamedIconSpec {
    pub name: String,
    #[serde(flatten)]
    pub spec: IconSpec,
}

#[derive(Debug, Deserialize)]
pub struct SynthOutputConfig {
    pub dir: PathBuf,
    /// Also dump each emblem's coverage mask as a grayscale PNG.
    #[serde(default)]
    pub coverage_dir: Option<PathBuf>,
}

fn default_size() -> usize {
    DEFAULT_ICON_SIZE
}

impl SynthToolConfig {
    /// Named specs to render, presets first.
    pub fn resolve_icons(&self) -> Result<Vec<(String, IconSpec)>, String> {
        let names: Vec<&str> = if self.presets.is_empty() && self.icons.is_empty() {
            PRESET_NAMES.to_vec()
        } else {
            self.presets.iter().map(String::as_str).collect()
        };
        let mut out = Vec::with_capacity(names.len() + self.icons.len());
        for name in names {
            let spec = preset(name, self.size).ok_or_else(|| {
                format!(
                    "Unknown preset '{name}' (expected one of {})",
                    PRESET_NAMES.join(", ")
                )
            })?;
            out.push((name.to_string(), spec));
        }
        out.extend(
            self.icons
                .iter()
                .map(|icon| (icon.name.clone(), icon.spec.clone())),
        );
        Ok(out)
    }
}

pub fn load_config(path: &Path) -> Result<SynthToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
