//! Volume filter rules
//!
//! Controls which mounts appear in the volume list. Read synchronously
//! from the `[volumes]` table of the config file, before the prefer
//! runtime is up.

use std::path::PathBuf;

use toml::map::Map;

/// Filesystem types hidden from the volume list by default: kernel API
/// mounts and other plumbing nobody browses.
const DEFAULT_HIDDEN: &[&str] = &[
    "autofs",
    "binfmt_misc",
    "bpf",
    "cgroup",
    "cgroup2",
    "configfs",
    "debugfs",
    "devpts",
    "devtmpfs",
    "efivarfs",
    "fuse.gvfsd-fuse",
    "fuse.portal",
    "fusectl",
    "hugetlbfs",
    "mqueue",
    "nsfs",
    "overlay",
    "proc",
    "pstore",
    "ramfs",
    "rpc_pipefs",
    "securityfs",
    "selinuxfs",
    "squashfs",
    "sysfs",
    "tracefs",
];

/// Which mounts the volume list shows.
#[derive(Clone, Debug)]
pub struct MountRules {
    pub show_all: bool,
    hidden: Vec<String>,
}

impl Default for MountRules {
    fn default() -> Self {
        Self {
            show_all: false,
            hidden: DEFAULT_HIDDEN.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl MountRules {
    /// Load rules from the `[volumes]` table of the config file.
    pub fn load() -> Self {
        Self::from_table(&load_existing())
    }

    fn from_table(table: &Map<String, toml::Value>) -> Self {
        let mut rules = Self::default();

        let Some(toml::Value::Table(volumes)) = table.get("volumes") else {
            return rules;
        };

        if let Some(toml::Value::Boolean(show_all)) = volumes.get("show_all") {
            rules.show_all = *show_all;
        }

        if let Some(toml::Value::Array(extra)) = volumes.get("hide") {
            for value in extra {
                if let toml::Value::String(fs_type) = value {
                    rules.hidden.push(fs_type.clone());
                }
            }
        }

        rules
    }

    /// True when mounts of `fs_type` should not be listed.
    pub fn is_hidden(&self, fs_type: &str) -> bool {
        self.hidden.iter().any(|h| h == fs_type)
    }
}

/// The config file path (`~/.config/diskman/config.toml`).
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("diskman").join("config.toml"))
}

/// Read the config file as a raw TOML table. Missing or broken files
/// read as empty.
fn load_existing() -> Map<String, toml::Value> {
    config_path()
        .and_then(|p| std::fs::read_to_string(&p).ok())
        .and_then(|s| s.parse::<toml::Table>().ok())
        .unwrap_or_default()
}
