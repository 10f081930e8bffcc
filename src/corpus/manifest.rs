use serde::Deserialize;

/// Current manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

/// File name looked up when a corpus path is a directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// `manifest.json` of a sharded corpus export.
#[derive(Deserialize, Clone, Debug)]
pub struct CorpusManifest {
    pub version: u32,
    /// Shard files relative to the manifest, concatenated in this order.
    pub shards: Vec<String>,
    /// Folder on the disk the export was taken from, if recorded.
    #[serde(default)]
    pub root_folder: Option<String>,
}

impl CorpusManifest {
    pub fn is_supported(&self) -> bool {
        self.version == MANIFEST_VERSION
    }
}
