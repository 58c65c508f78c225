//! Pipeline snapshot plugin for visualization and debugging.
//!
//! This module provides a plugin that captures the pipeline state after each
//! phase, so the intermediate models can be inspected as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::Result;
use mapgen_ir::{DomainModel, DtoSchema, GenerationConfig};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// The generation config (available after "lower").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<GenerationConfig>,

    /// The domain model (available after "parse").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<DomainModel>,

    /// The DTO schema (available after "schema").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<DtoSchema>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// Used by the `--visualize` flag to dump intermediate models.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".mapgen/debug"));
/// let ctx = pipeline.run(manifest, root)?;
/// ```
pub struct SnapshotPlugin {
    /// Collected snapshots.
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Output directory for snapshots.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    /// Create a new snapshot plugin.
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a new snapshot plugin that writes to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write all snapshots to `dir`, one `<phase>.json` per phase.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        for snapshot in self
            .snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
        {
            write_snapshot(dir, snapshot)?;
        }

        Ok(())
    }

    fn capture_snapshot(&self, phase: &str, ctx: &CompilationContext) -> PhaseSnapshot {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            config: ctx.config.clone(),
            domain: ctx.domain.clone(),
            schema: ctx.schema.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        snapshot
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = self.capture_snapshot(phase, ctx);

        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)?;
            write_snapshot(dir, &snapshot)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pipeline::Pipeline, testing::Fixture};

    #[test]
    fn test_snapshot_plugin_creation() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().is_empty());
    }

    #[test]
    fn test_snapshots_written_per_phase() {
        let fixture = Fixture::restaurant().unwrap();
        let out = fixture.root().join(".mapgen/debug");

        Pipeline::new()
            .plugin(SnapshotPlugin::with_output_dir(&out))
            .run(fixture.manifest().unwrap(), fixture.root())
            .unwrap();

        for phase in ["lower", "parse", "bind", "validate", "schema"] {
            assert!(out.join(format!("{phase}.json")).exists(), "{phase}.json");
        }

        let schema = fs::read_to_string(out.join("schema.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        assert!(value["schema"]["types"]["Restaurant"].is_object());
        assert!(value.get("config").is_some());
    }
}
