use super::*;
use crate::game::Rules;
use anyhow::Context;
use std::path::PathBuf;

/// JSON snapshot on the local filesystem.
/// Loaded tables are checked against the rules they will be played under.
#[derive(Debug, Clone)]
pub struct Disk {
    path: PathBuf,
    rules: Rules,
}

impl Disk {
    pub fn new<P: Into<PathBuf>>(path: P, rules: Rules) -> Self {
        Self {
            path: path.into(),
            rules,
        }
    }
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
    /// check if a snapshot exists on disk
    pub fn done(&self) -> bool {
        std::fs::metadata(&self.path).is_ok()
    }
    fn staging(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

impl Storage for Disk {
    fn load(&self) -> anyhow::Result<Option<Table>> {
        if !self.done() {
            log::info!("no snapshot at {}", self.path.display());
            return Ok(None);
        }
        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("open snapshot {}", self.path.display()))?;
        let table = serde_json::from_reader::<_, Table>(std::io::BufReader::new(file))
            .with_context(|| format!("parse snapshot {}", self.path.display()))?;
        table
            .validate(&self.rules)
            .with_context(|| format!("reject snapshot {}", self.path.display()))?;
        log::info!(
            "loaded snapshot {} at round {}",
            self.path.display(),
            table.state.current_round()
        );
        Ok(Some(table))
    }
    fn save(&self, table: &Table) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let staging = self.staging();
        let bytes = serde_json::to_vec_pretty(table)?;
        std::fs::write(&staging, bytes).with_context(|| format!("write {}", staging.display()))?;
        std::fs::rename(&staging, &self.path)
            .with_context(|| format!("move snapshot into {}", self.path.display()))?;
        log::info!(
            "saved snapshot {} at round {}",
            self.path.display(),
            table.state.current_round()
        );
        Ok(())
    }
}
