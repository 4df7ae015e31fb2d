//! Screen text for the menus
//!
//! Pure string builders; the handlers print the result. Color goes
//! through [`Console::paint`], so with color off every function returns
//! plain text and stays testable without a terminal.

use std::path::Path;

use crate::console::{self, Console};
use crate::filesystem::{self, DirListing};
use crate::volumes::Volume;

/// The top-level menu. Items 3-7 appear once a volume is selected.
pub fn main_menu(has_volume: bool) -> String {
    let mut out = String::new();
    out.push_str("=== Disk Manager ===\n");
    out.push_str("1. List available volumes\n");
    if has_volume {
        out.push_str("2. Show current volume info\n");
        out.push_str("3. Browse current volume\n");
        out.push_str("4. Create a directory\n");
        out.push_str("5. Create a file\n");
        out.push_str("6. Delete a file or directory\n");
        out.push_str("7. Change current volume\n");
    } else {
        out.push_str("2. Select a volume\n");
    }
    out.push_str("0. Exit\n");
    out
}

/// The browse submenu commands.
pub fn browse_menu() -> String {
    let mut out = String::new();
    out.push_str("Commands:\n");
    out.push_str("1. Enter a subdirectory\n");
    out.push_str("2. Go to parent directory\n");
    out.push_str("3. Return to main menu\n");
    out
}

/// Detailed table of every volume in the snapshot.
pub fn volume_table(volumes: &[Volume], console: &Console) -> String {
    let mut out = String::new();
    out.push_str("Available volumes:\n");
    out.push_str("------------------\n");

    if volumes.is_empty() {
        out.push_str("  (none found)\n");
        return out;
    }

    for volume in volumes {
        if !volume.ready {
            let line = format!(
                "{} on {} [not ready]",
                volume.device,
                volume.mount_point.display()
            );
            out.push_str(&console.paint(console::RED, &line));
            out.push('\n');
            continue;
        }

        let mut head = format!(
            "{} on {} [{}]",
            volume.device,
            volume.mount_point.display(),
            volume.kind.label()
        );
        if let Some(label) = &volume.label {
            head.push_str(&format!(" \"{label}\""));
        }
        out.push_str(&console.paint(console::GREEN, &head));
        out.push('\n');
        out.push_str(&format!(
            "  Total size: {}\n",
            filesystem::format_size(volume.total_bytes)
        ));
        out.push_str(&format!(
            "  Free space: {}\n",
            filesystem::format_size(volume.free_bytes)
        ));
        out.push_str(&format!("  Filesystem: {}\n", volume.format));
    }

    out
}

/// Numbered one-line-per-volume list for the selection prompt.
pub fn volume_choices(volumes: &[Volume], console: &Console) -> String {
    let mut out = String::new();
    out.push_str("Select a volume:\n");

    for (i, volume) in volumes.iter().enumerate() {
        let line = format!(
            "{}. {} on {} [{}]",
            i + 1,
            volume.device,
            volume.mount_point.display(),
            volume.kind.label()
        );
        if volume.ready {
            out.push_str(&line);
        } else {
            out.push_str(&console.paint(console::RED, &format!("{line} [not ready]")));
        }
        out.push('\n');
    }

    out
}

/// Full info card for one volume.
pub fn volume_info(volume: &Volume, console: &Console) -> String {
    let mut out = String::new();
    let title = format!(
        "Volume {} (mounted on {})",
        volume.device,
        volume.mount_point.display()
    );
    out.push_str(&console.paint(console::BOLD, &title));
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');

    out.push_str(&format!(
        "Label:       {}\n",
        volume.label.as_deref().unwrap_or("(none)")
    ));
    out.push_str(&format!("Kind:        {}\n", volume.kind.label()));
    out.push_str(&format!("Filesystem:  {}\n", volume.format));

    if volume.ready {
        out.push_str(&format!(
            "Total size:  {}\n",
            filesystem::format_size(volume.total_bytes)
        ));
        out.push_str(&format!(
            "Free space:  {}\n",
            filesystem::format_size(volume.free_bytes)
        ));
        out.push_str(&format!(
            "Used space:  {}\n",
            filesystem::format_size(volume.used_bytes())
        ));
    } else {
        out.push_str(&console.paint(console::RED, "The volume is not ready."));
        out.push('\n');
    }

    out
}

/// The whole browse screen: current path, entries, submenu.
pub fn browse_screen(path: &Path, listing: &DirListing, console: &Console) -> String {
    let mut out = String::new();
    let title = format!("Contents of {}", path.display());
    out.push_str(&console.paint(console::BOLD, &title));
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');

    if listing.is_empty() {
        out.push_str("  (empty)\n");
    }

    for dir in &listing.dirs {
        let line = format!(
            "[DIR]  {:<28} {:>8}  {}",
            dir.name,
            "-",
            filesystem::format_mtime(dir.modified)
        );
        out.push_str(&console.paint(console::BLUE, &line));
        out.push('\n');
    }

    for file in &listing.files {
        out.push_str(&format!(
            "[FILE] {:<28} {:>8}  {}\n",
            file.name,
            filesystem::format_size(file.size),
            filesystem::format_mtime(file.modified)
        ));
    }

    out.push('\n');
    out.push_str(&browse_menu());
    out
}
