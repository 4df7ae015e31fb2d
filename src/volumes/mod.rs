//! Volume enumeration
//!
//! Builds the startup snapshot of mounted volumes from /proc/mounts,
//! statvfs and sysfs. Split into modules for reduced complexity.

mod mounts;
mod statfs;

pub use statfs::{Usage, usage};

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::MountRules;

/// What kind of device backs a volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeKind {
    Fixed,
    Removable,
    Network,
    Optical,
    Ram,
    Pseudo,
    Unknown,
}

impl VolumeKind {
    pub fn label(&self) -> &'static str {
        match self {
            VolumeKind::Fixed => "fixed",
            VolumeKind::Removable => "removable",
            VolumeKind::Network => "network",
            VolumeKind::Optical => "optical",
            VolumeKind::Ram => "ram",
            VolumeKind::Pseudo => "pseudo",
            VolumeKind::Unknown => "unknown",
        }
    }
}

/// One mounted volume, snapshotted at process start.
#[derive(Clone, Debug)]
pub struct Volume {
    pub device: String,
    pub mount_point: PathBuf,
    pub kind: VolumeKind,
    pub format: String,
    pub label: Option<String>,
    pub ready: bool,
    pub total_bytes: u64,
    pub free_bytes: u64,
}

impl Volume {
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }
}

/// Enumerate mounted volumes.
///
/// Never fails: when /proc/mounts cannot be read the snapshot degrades
/// to a single entry for the filesystem root. When two mounts share a
/// mount point the first one listed wins.
pub fn list(rules: &MountRules) -> Vec<Volume> {
    let Ok(text) = fs::read_to_string("/proc/mounts") else {
        return vec![probe(
            "rootfs".to_string(),
            PathBuf::from("/"),
            "unknown".to_string(),
        )];
    };

    let labels = LabelTable::load();
    let mut taken: Vec<PathBuf> = Vec::new();
    let mut volumes = Vec::new();

    for entry in mounts::parse(&text) {
        if !rules.show_all && rules.is_hidden(&entry.fs_type) {
            continue;
        }
        if taken.contains(&entry.mount_point) {
            continue;
        }
        taken.push(entry.mount_point.clone());

        let mut volume = probe(entry.device, entry.mount_point, entry.fs_type);
        volume.label = labels.lookup(&volume.device);
        volumes.push(volume);
    }

    volumes
}

fn probe(device: String, mount_point: PathBuf, fs_type: String) -> Volume {
    let kind = classify(&device, &fs_type);
    let (ready, total_bytes, free_bytes) = match statfs::usage(&mount_point) {
        Ok(usage) => (true, usage.total_bytes, usage.free_bytes),
        Err(_) => (false, 0, 0),
    };

    Volume {
        device,
        mount_point,
        kind,
        format: fs_type,
        label: None,
        ready,
        total_bytes,
        free_bytes,
    }
}

const NETWORK_FS: &[&str] = &[
    "nfs",
    "nfs4",
    "cifs",
    "smb3",
    "smbfs",
    "sshfs",
    "fuse.sshfs",
    "9p",
    "ceph",
    "glusterfs",
    "afs",
];

const OPTICAL_FS: &[&str] = &["iso9660", "udf"];

const RAM_FS: &[&str] = &["tmpfs", "ramfs"];

/// Classify a mount by its backing device and filesystem type.
fn classify(device: &str, fs_type: &str) -> VolumeKind {
    if NETWORK_FS.contains(&fs_type) {
        return VolumeKind::Network;
    }
    if OPTICAL_FS.contains(&fs_type) {
        return VolumeKind::Optical;
    }
    if RAM_FS.contains(&fs_type) {
        return VolumeKind::Ram;
    }
    if !device.starts_with("/dev/") {
        // Network devices ("host:/export", "//host/share") were caught
        // above; what remains is kernel plumbing.
        return VolumeKind::Pseudo;
    }
    if device.starts_with("/dev/sr") || device.starts_with("/dev/cdrom") {
        return VolumeKind::Optical;
    }
    match is_removable(device) {
        Some(true) => VolumeKind::Removable,
        Some(false) => VolumeKind::Fixed,
        None => VolumeKind::Unknown,
    }
}

/// Read the sysfs removable flag for the disk backing `device`.
///
/// Tries the device name itself first (whole-disk mounts), then with
/// the partition suffix stripped.
fn is_removable(device: &str) -> Option<bool> {
    let name = device.strip_prefix("/dev/")?;
    for disk in [name.to_string(), base_disk(name)] {
        if let Ok(flag) = fs::read_to_string(format!("/sys/block/{disk}/removable")) {
            return Some(flag.trim() == "1");
        }
    }
    None
}

/// Strip a partition suffix: sda1 -> sda, nvme0n1p2 -> nvme0n1.
fn base_disk(name: &str) -> String {
    if let Some(pos) = name.rfind('p')
        && name[..pos].ends_with(|c: char| c.is_ascii_digit())
        && !name[pos + 1..].is_empty()
        && name[pos + 1..].chars().all(|c| c.is_ascii_digit())
    {
        return name[..pos].to_string();
    }
    name.trim_end_matches(|c: char| c.is_ascii_digit()).to_string()
}

/// Volume labels resolved from /dev/disk/by-label.
struct LabelTable {
    entries: Vec<(PathBuf, String)>,
}

impl LabelTable {
    fn load() -> Self {
        Self::from_dir(Path::new("/dev/disk/by-label"))
    }

    fn from_dir(dir: &Path) -> Self {
        let mut entries = Vec::new();
        if let Ok(read_dir) = fs::read_dir(dir) {
            for entry in read_dir.filter_map(|e| e.ok()) {
                if let Ok(target) = fs::canonicalize(entry.path()) {
                    let raw = entry.file_name().to_string_lossy().into_owned();
                    entries.push((target, decode_label(&raw)));
                }
            }
        }
        Self { entries }
    }

    fn lookup(&self, device: &str) -> Option<String> {
        let canonical = fs::canonicalize(device).ok()?;
        self.entries
            .iter()
            .find(|(dev, _)| *dev == canonical)
            .map(|(_, label)| label.clone())
    }
}

/// Decode udev's `\xNN` escapes in a by-label name.
fn decode_label(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'\\'
            && i + 3 < bytes.len()
            && bytes[i + 1] == b'x'
            && let (Some(hi), Some(lo)) = (hex_val(bytes[i + 2]), hex_val(bytes[i + 3]))
        {
            out.push(hi * 16 + lo);
            i += 4;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
