//! JSON configuration for a grid and its boundaries.
//!
//! ```json
//! {
//!   "grid": {"axes": [{"size": 64, "periodic": true}, {"size": 32, "spacing": 0.5}]},
//!   "boundaries": ["periodic", {"low": {"value": 1}, "high": "neumann"}]
//! }
//! ```
//!
//! `boundaries` accepts any shape [`GridBoundaries::from_value`] does.
//! Axis `periodic` defaults to `false` and `spacing` to `1.0`.

use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use gridbc_boundary::GridBoundaries;
use gridbc_core::{BoundaryError, GridAxis, GridShape};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ── Schema ─────────────────────────────────────────────────────────

/// Top-level configuration document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConfig {
    /// Grid description.
    pub grid: GridConfig,
    /// Boundary specification, per axis or for all axes.
    pub boundaries: Value,
    /// Keys not recognised by the loader. Reported, then ignored.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    ignored: Map<String, Value>,
}

/// Grid section of a [`BoundaryConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Axes in order.
    pub axes: Vec<AxisConfig>,
}

/// One axis of a [`GridConfig`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Number of points.
    pub size: usize,
    /// Whether the axis wraps around. Default: `false`.
    #[serde(default)]
    pub periodic: bool,
    /// Distance between neighbouring points. Default: `1.0`.
    #[serde(default = "default_spacing")]
    pub spacing: f64,
}

fn default_spacing() -> f64 {
    1.0
}

impl BoundaryConfig {
    /// Parse a configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        if !config.ignored.is_empty() {
            let keys: Vec<&str> = config.ignored.keys().map(String::as_str).collect();
            log::warn!("ignoring unknown configuration keys: {}", keys.join(", "));
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded boundary configuration from {}", path.display());
        Self::from_json_str(&text)
    }

    /// The configuration describing existing boundaries, in canonical form.
    pub fn from_boundaries(bcs: &GridBoundaries) -> Self {
        let axes = bcs
            .grid()
            .axes()
            .iter()
            .map(|a| AxisConfig {
                size: a.size(),
                periodic: a.is_periodic(),
                spacing: a.spacing(),
            })
            .collect();
        Self {
            grid: GridConfig { axes },
            boundaries: bcs.to_value(),
            ignored: Map::new(),
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Keys present in the document that the loader did not use.
    pub fn ignored_keys(&self) -> impl Iterator<Item = &str> {
        self.ignored.keys().map(String::as_str)
    }

    /// Validate the grid and build its boundaries.
    pub fn build(&self) -> Result<(GridShape, GridBoundaries), ConfigError> {
        let grid = self.grid.build()?;
        let bcs = GridBoundaries::from_value(&grid, &self.boundaries)?;
        Ok((grid, bcs))
    }
}

impl GridConfig {
    /// Validate every axis and assemble the grid.
    pub fn build(&self) -> Result<GridShape, BoundaryError> {
        let axes = self
            .axes
            .iter()
            .map(|a| GridAxis::new(a.size, a.periodic)?.with_spacing(a.spacing))
            .collect::<Result<Vec<_>, _>>()?;
        GridShape::new(axes)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors from loading or building a [`BoundaryConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the schema.
    Json(serde_json::Error),
    /// The grid or boundary section is invalid.
    Boundary(BoundaryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "reading {}: {source}", path.display()),
            Self::Json(e) => write!(f, "parsing configuration: {e}"),
            Self::Boundary(e) => write!(f, "building boundaries: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::Boundary(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<BoundaryError> for ConfigError {
    fn from(e: BoundaryError) -> Self {
        Self::Boundary(e)
    }
}
