use super::History;
use crate::tree::Record;
use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::path::PathBuf;

/// JSON file I/O for types that live in the data directory.
pub trait Disk: Serialize + DeserializeOwned {
    /// File name inside the data directory.
    fn name() -> &'static str;
    /// Path to file on disk.
    fn path(dir: &Path) -> PathBuf {
        dir.join(Self::name())
    }
    /// Check if file exists on disk.
    fn done(dir: &Path) -> bool {
        std::fs::metadata(Self::path(dir)).is_ok()
    }
    /// Read from disk. Nesting depth is unbounded: a learned tree is
    /// as deep as its longest run of questions.
    fn load(dir: &Path) -> anyhow::Result<Self> {
        let ref path = Self::path(dir);
        let file = std::fs::File::open(path)
            .with_context(|| format!("open {}", path.display()))?;
        let mut json = serde_json::Deserializer::from_reader(std::io::BufReader::new(file));
        json.disable_recursion_limit();
        let stacked = serde_stacker::Deserializer::new(&mut json);
        let value = <Self as serde::Deserialize>::deserialize(stacked)
            .with_context(|| format!("parse {}", path.display()))?;
        json.end()
            .with_context(|| format!("trailing data in {}", path.display()))?;
        Ok(value)
    }
    /// Moves an unusable file aside so the next save cannot clobber it.
    fn quarantine(dir: &Path) -> anyhow::Result<PathBuf> {
        let ref path = Self::path(dir);
        let aside = path.with_extension(format!("json.{}.bad", crate::now()));
        std::fs::rename(path, &aside)
            .with_context(|| format!("move {} aside", path.display()))?;
        Ok(aside)
    }
    /// Write to disk, replacing the previous file only once the new one is complete.
    fn save(&self, dir: &Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let ref path = Self::path(dir);
        let ref temp = path.with_extension("json.tmp");
        let file = std::fs::File::create(temp)
            .with_context(|| format!("create {}", temp.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("write {}", temp.display()))?;
        std::io::Write::flush(&mut writer)?;
        std::fs::rename(temp, path).with_context(|| format!("replace {}", path.display()))?;
        log::debug!("saved {}", path.display());
        Ok(())
    }
}

impl Disk for Record {
    fn name() -> &'static str {
        crate::TREE_FILE
    }
}

impl Disk for History {
    fn name() -> &'static str {
        crate::HISTORY_FILE
    }
}
