//! Test helpers for writing datasets and fixed timestamps.

use camino::Utf8PathBuf;
use tempfile::TempDir;

use crate::dataset::{EngineSettings, FactorOverrides};

/// A temporary directory holding JSON inputs for one test.
pub(super) struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub(super) fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir"),
        }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join(name)).expect("utf-8 temp path")
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        std::fs::write(path.as_std_path(), contents).expect("write test input");
        path
    }

    /// A dataset with one 0.9-severity hazard at the origin.
    pub(super) fn origin_hazard(&self) -> Utf8PathBuf {
        self.write(
            "hazards.json",
            r#"{"hazards":[{"latitude":0.0,"longitude":0.0,"severity":"high","severity_score":0.9,"category":"assault"}]}"#,
        )
    }
}

/// Engine settings over `hazards` pinned to `hour` with default factors.
pub(super) fn settings_at(hazards: Option<Utf8PathBuf>, hour: u32) -> EngineSettings {
    EngineSettings::new(hazards, FactorOverrides::default(), Some(hour)).expect("valid settings")
}
