//! Navigator state machine
//!
//! Two states: no volume selected (startup) and browsing, where a
//! current path inside one volume is set. Failed operations report
//! through [`NavError`] and leave the state untouched.

use std::path::{Component, Path, PathBuf};

use crate::error::NavError;
use crate::filesystem::{self, DeletedKind, DirListing};
use crate::volumes::{self, Volume};

pub struct Navigator {
    volumes: Vec<Volume>,
    current: Option<PathBuf>,
    show_hidden: bool,
}

impl Navigator {
    pub fn new(volumes: Vec<Volume>, show_hidden: bool) -> Self {
        Self {
            volumes,
            current: None,
            show_hidden,
        }
    }

    /// The volume snapshot taken at startup.
    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    pub fn is_browsing(&self) -> bool {
        self.current.is_some()
    }

    /// Select a volume by snapshot index and move to its mount point.
    pub fn select_volume(&mut self, index: usize) -> Result<(), NavError> {
        let volume = self.volumes.get(index).ok_or(NavError::OutOfRange)?;
        if !volume.ready {
            return Err(NavError::NotReady);
        }
        self.current = Some(volume.mount_point.clone());
        Ok(())
    }

    /// The volume owning the current path, with size metrics re-read
    /// from the kernel so the numbers are current.
    pub fn current_volume(&self) -> Result<Volume, NavError> {
        let path = self.require_path()?;
        let mut volume = self
            .owning_volume(path)
            .ok_or(NavError::NoVolumeSelected)?
            .clone();

        match volumes::usage(&volume.mount_point) {
            Ok(usage) => {
                volume.ready = true;
                volume.total_bytes = usage.total_bytes;
                volume.free_bytes = usage.free_bytes;
            }
            Err(_) => volume.ready = false,
        }

        Ok(volume)
    }

    /// List the current directory.
    pub fn list_current(&self) -> Result<DirListing, NavError> {
        let path = self.require_path()?;
        filesystem::list_dir(path, self.show_hidden)
    }

    /// Descend into a child directory.
    ///
    /// Only plain child names are accepted. Anything absolute, empty or
    /// re-entering `.`/`..` reports as not found, like a missing name.
    pub fn enter(&mut self, name: &str) -> Result<(), NavError> {
        let name = name.trim();
        if !is_child_name(name) {
            return Err(NavError::NotFound(name.to_string()));
        }

        let target = self.require_path()?.join(name);
        if !target.is_dir() {
            return Err(NavError::NotFound(name.to_string()));
        }

        self.current = Some(target);
        Ok(())
    }

    /// Move to the parent directory, clamped at the mount point of the
    /// volume owning the current path.
    pub fn to_parent(&mut self) -> Result<(), NavError> {
        let path = self.require_path()?.to_path_buf();
        let root = self
            .owning_volume(&path)
            .map(|v| v.mount_point.clone())
            .unwrap_or_else(|| PathBuf::from("/"));

        if path == root {
            return Err(NavError::AtRoot);
        }

        match path.parent() {
            Some(parent) => {
                self.current = Some(parent.to_path_buf());
                Ok(())
            }
            None => Err(NavError::AtRoot),
        }
    }

    /// Create a directory (and missing intermediate segments) under the
    /// current path.
    pub fn create_directory(&self, name: &str) -> Result<PathBuf, NavError> {
        let target = self.child_path(name)?;
        filesystem::create_directory(&target)?;
        Ok(target)
    }

    /// Write `lines` to a file under the current path, replacing any
    /// existing file of that name.
    pub fn create_file(&self, name: &str, lines: &[String]) -> Result<PathBuf, NavError> {
        let target = self.child_path(name)?;
        filesystem::write_lines(&target, lines)?;
        Ok(target)
    }

    /// Delete a file or directory under the current path.
    ///
    /// Without confirmation nothing is touched and `None` is returned.
    pub fn delete(&self, name: &str, confirmed: bool) -> Result<Option<DeletedKind>, NavError> {
        let target = self.child_path(name)?;
        if !confirmed {
            return Ok(None);
        }

        match filesystem::delete_entry(&target)? {
            Some(kind) => Ok(Some(kind)),
            None => Err(NavError::NotFound(name.trim().to_string())),
        }
    }

    /// The absolute path `name` refers to under the current directory.
    pub fn child_path(&self, name: &str) -> Result<PathBuf, NavError> {
        let path = self.require_path()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(NavError::InvalidName);
        }
        Ok(path.join(name))
    }

    fn require_path(&self) -> Result<&Path, NavError> {
        self.current.as_deref().ok_or(NavError::NoVolumeSelected)
    }

    /// The snapshot volume whose mount point is the longest prefix of
    /// `path`.
    fn owning_volume(&self, path: &Path) -> Option<&Volume> {
        self.volumes
            .iter()
            .filter(|v| path.starts_with(&v.mount_point))
            .max_by_key(|v| v.mount_point.as_os_str().len())
    }
}

/// A plain child name: relative, non-empty, no `.` or `..` segments.
fn is_child_name(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volumes::VolumeKind;
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    static SCRATCH_ID: AtomicU32 = AtomicU32::new(0);

    fn scratch(name: &str) -> PathBuf {
        let id = SCRATCH_ID.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "diskman-nav-{}-{}-{}",
            name,
            std::process::id(),
            id
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn volume_at(root: &Path, ready: bool) -> Volume {
        Volume {
            device: "/dev/test0".to_string(),
            mount_point: root.to_path_buf(),
            kind: VolumeKind::Fixed,
            format: "ext4".to_string(),
            label: None,
            ready,
            total_bytes: 1 << 30,
            free_bytes: 1 << 29,
        }
    }

    fn browsing_at(root: &Path) -> Navigator {
        let mut nav = Navigator::new(vec![volume_at(root, true)], false);
        nav.select_volume(0).unwrap();
        nav
    }

    #[test]
    fn test_select_volume_out_of_range() {
        let root = scratch("range");
        let mut nav = Navigator::new(vec![volume_at(&root, true)], false);

        assert!(matches!(nav.select_volume(5), Err(NavError::OutOfRange)));
        assert!(nav.current_path().is_none());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_select_volume_not_ready() {
        let root = scratch("notready");
        let mut nav = Navigator::new(vec![volume_at(&root, false)], false);

        assert!(matches!(nav.select_volume(0), Err(NavError::NotReady)));
        assert!(!nav.is_browsing());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_select_volume_lands_on_mount_point() {
        let root = scratch("select");
        let nav = browsing_at(&root);

        assert_eq!(nav.current_path(), Some(root.as_path()));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_operations_require_a_volume() {
        let root = scratch("gated");
        let mut nav = Navigator::new(vec![volume_at(&root, true)], false);

        assert!(matches!(nav.list_current(), Err(NavError::NoVolumeSelected)));
        assert!(matches!(nav.enter("docs"), Err(NavError::NoVolumeSelected)));
        assert!(matches!(nav.to_parent(), Err(NavError::NoVolumeSelected)));
        assert!(matches!(
            nav.create_directory("docs"),
            Err(NavError::NoVolumeSelected)
        ));
        assert!(matches!(
            nav.create_file("a.txt", &[]),
            Err(NavError::NoVolumeSelected)
        ));
        assert!(matches!(
            nav.delete("a.txt", true),
            Err(NavError::NoVolumeSelected)
        ));
        assert!(matches!(
            nav.current_volume(),
            Err(NavError::NoVolumeSelected)
        ));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_enter_missing_directory_keeps_path() {
        let root = scratch("enter-missing");
        let mut nav = browsing_at(&root);

        assert!(matches!(nav.enter("nope"), Err(NavError::NotFound(_))));
        assert_eq!(nav.current_path(), Some(root.as_path()));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_enter_rejects_traversal_names() {
        let root = scratch("enter-dots");
        fs::create_dir(root.join("docs")).unwrap();
        let mut nav = browsing_at(&root);

        for name in ["..", ".", "", "/etc", "docs/../.."] {
            assert!(
                matches!(nav.enter(name), Err(NavError::NotFound(_))),
                "accepted {name:?}"
            );
            assert_eq!(nav.current_path(), Some(root.as_path()));
        }

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_enter_file_is_not_found() {
        let root = scratch("enter-file");
        fs::write(root.join("notes.txt"), "x").unwrap();
        let mut nav = browsing_at(&root);

        assert!(matches!(nav.enter("notes.txt"), Err(NavError::NotFound(_))));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_enter_then_parent_round_trip() {
        let root = scratch("round-trip");
        fs::create_dir(root.join("docs")).unwrap();
        let mut nav = browsing_at(&root);

        nav.enter("docs").unwrap();
        assert_eq!(nav.current_path(), Some(root.join("docs").as_path()));

        nav.to_parent().unwrap();
        assert_eq!(nav.current_path(), Some(root.as_path()));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_parent_clamps_at_mount_point() {
        // The mount point is a scratch directory, not "/", so a plain
        // parent() would escape the volume here.
        let root = scratch("clamp");
        let mut nav = browsing_at(&root);

        assert!(matches!(nav.to_parent(), Err(NavError::AtRoot)));
        assert_eq!(nav.current_path(), Some(root.as_path()));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_create_directory_and_enter() {
        let root = scratch("mkdir");
        let mut nav = browsing_at(&root);

        let created = nav.create_directory("docs").unwrap();
        assert_eq!(created, root.join("docs"));
        assert!(created.is_dir());

        nav.enter("docs").unwrap();
        assert_eq!(nav.current_path(), Some(created.as_path()));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_create_directory_rejects_blank_names() {
        let root = scratch("mkdir-blank");
        let nav = browsing_at(&root);

        assert!(matches!(nav.create_directory(""), Err(NavError::InvalidName)));
        assert!(matches!(
            nav.create_directory("   "),
            Err(NavError::InvalidName)
        ));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_create_directory_existing_is_ok() {
        let root = scratch("mkdir-again");
        let nav = browsing_at(&root);

        nav.create_directory("docs").unwrap();
        nav.create_directory("docs").unwrap();

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_create_file_writes_and_overwrites() {
        let root = scratch("mkfile");
        let nav = browsing_at(&root);

        let path = nav
            .create_file("notes.txt", &["alpha".to_string(), "beta".to_string()])
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "alpha\nbeta\n");

        nav.create_file("notes.txt", &["gamma".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "gamma\n");

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_create_file_rejects_blank_names() {
        let root = scratch("mkfile-blank");
        let nav = browsing_at(&root);

        assert!(matches!(
            nav.create_file("  ", &[]),
            Err(NavError::InvalidName)
        ));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_delete_unconfirmed_is_a_noop() {
        let root = scratch("del-noop");
        let nav = browsing_at(&root);
        fs::write(root.join("keep.txt"), "x").unwrap();

        assert_eq!(nav.delete("keep.txt", false).unwrap(), None);
        assert!(root.join("keep.txt").exists());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_delete_reports_kind() {
        let root = scratch("del-kind");
        let nav = browsing_at(&root);
        fs::write(root.join("file.txt"), "x").unwrap();
        fs::create_dir_all(root.join("tree/inner")).unwrap();

        assert_eq!(
            nav.delete("file.txt", true).unwrap(),
            Some(DeletedKind::File)
        );
        assert_eq!(
            nav.delete("tree", true).unwrap(),
            Some(DeletedKind::Directory)
        );
        assert!(!root.join("tree").exists());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let root = scratch("del-missing");
        let nav = browsing_at(&root);

        assert!(matches!(
            nav.delete("ghost", true),
            Err(NavError::NotFound(_))
        ));

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_current_volume_reports_owner() {
        let root = scratch("owner");
        fs::create_dir(root.join("docs")).unwrap();
        let mut nav = browsing_at(&root);

        nav.enter("docs").unwrap();
        let volume = nav.current_volume().unwrap();
        assert_eq!(volume.mount_point, root);
        assert_eq!(volume.device, "/dev/test0");
        // Metrics come from a live statvfs on the scratch dir.
        assert!(volume.ready);
        assert!(volume.total_bytes > 0);

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_owning_volume_prefers_longest_prefix() {
        let outer = scratch("nested");
        let inner = outer.join("inner");
        fs::create_dir(&inner).unwrap();

        let mut nav = Navigator::new(
            vec![volume_at(&outer, true), volume_at(&inner, true)],
            false,
        );
        nav.select_volume(1).unwrap();

        let volume = nav.current_volume().unwrap();
        assert_eq!(volume.mount_point, inner);

        // The inner mount point is a volume root of its own.
        assert!(matches!(nav.to_parent(), Err(NavError::AtRoot)));

        fs::remove_dir_all(&outer).unwrap();
    }

    #[test]
    fn test_browse_walkthrough() {
        let root = scratch("walkthrough");
        let mut nav = browsing_at(&root);

        assert!(matches!(nav.enter("docs"), Err(NavError::NotFound(_))));
        assert_eq!(nav.current_path(), Some(root.as_path()));

        nav.create_directory("docs").unwrap();
        nav.enter("docs").unwrap();
        assert_eq!(nav.current_path(), Some(root.join("docs").as_path()));

        nav.to_parent().unwrap();
        assert_eq!(nav.current_path(), Some(root.as_path()));

        fs::remove_dir_all(&root).unwrap();
    }
}
