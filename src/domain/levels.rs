//! Level registry - named maze presets with target times
//!
//! The frontend populates its level dropdown from `manifest_json` and never
//! hard-codes dimensions. A custom bundle can replace the built-in table at
//! runtime; validation failures leave the active table untouched.

use serde::{Deserialize, Serialize};

/// Smallest playable level dimension accepted from a bundle.
pub const MIN_LEVEL_DIM: u32 = 8;

/// One playable maze preset.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDef {
    pub name: String,
    pub cols: u32,
    pub rows: u32,
    pub target_ms: f64,
}

#[derive(Clone, Debug)]
pub struct LevelRegistry {
    levels: Vec<LevelDef>,
}

impl LevelRegistry {
    /// The shipped level table. Index 0 is the default level.
    pub fn builtin() -> Self {
        let levels = vec![
            preset("Toddler", 8, 30_000.0),
            preset("Warm-up", 14, 45_000.0),
            preset("Easy", 18, 60_000.0),
            preset("Medium", 22, 90_000.0),
            preset("Hard", 26, 120_000.0),
            preset("Expert", 30, 180_000.0),
        ];

        Self { levels }
    }

    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_bundle(bundle)
    }

    pub fn count(&self) -> usize {
        self.levels.len()
    }

    pub fn get(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    /// Clamp an arbitrary index into the table. The registry is never empty,
    /// so the result always names a real level.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.levels.len() - 1)
    }

    pub fn manifest_json(&self) -> String {
        let out = LevelManifest {
            format_version: 1,
            levels: &self.levels,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_bundle(bundle: BundleRoot) -> Result<Self, String> {
        if bundle.format_version != 1 {
            return Err(format!(
                "unsupported level bundle format: {}",
                bundle.format_version
            ));
        }

        if bundle.levels.is_empty() {
            return Err("level bundle contains no levels".to_string());
        }

        let mut levels = Vec::with_capacity(bundle.levels.len());
        for (idx, lv) in bundle.levels.into_iter().enumerate() {
            if lv.name.is_empty() {
                return Err(format!("level {} has an empty name", idx));
            }
            if lv.cols < MIN_LEVEL_DIM || lv.rows < MIN_LEVEL_DIM {
                return Err(format!(
                    "level {} ({}) is too small: {}x{} (minimum {})",
                    idx, lv.name, lv.cols, lv.rows, MIN_LEVEL_DIM
                ));
            }
            if lv.target_ms <= 0.0 {
                return Err(format!(
                    "level {} ({}) has a non-positive target time",
                    idx, lv.name
                ));
            }

            levels.push(LevelDef {
                name: lv.name,
                cols: lv.cols,
                rows: lv.rows,
                target_ms: lv.target_ms,
            });
        }

        Ok(Self { levels })
    }
}

fn preset(name: &str, dim: u32, target_ms: f64) -> LevelDef {
    LevelDef {
        name: name.to_string(),
        cols: dim,
        rows: dim,
        target_ms,
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LevelManifest<'a> {
    format_version: u32,
    levels: &'a [LevelDef],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    format_version: u32,
    levels: Vec<BundleLevel>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleLevel {
    name: String,
    cols: u32,
    rows: u32,
    target_ms: f64,
}
