//! Menu input parsing
//!
//! Turns typed lines into tagged actions. Parsing is state-aware: item
//! 2 selects a volume before one is chosen and shows volume info after,
//! and items 3-7 are gated on having a volume at all.

/// Main menu actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainAction {
    ListVolumes,
    SelectVolume,
    VolumeInfo,
    Browse,
    CreateDirectory,
    CreateFile,
    Delete,
    ChangeVolume,
    Exit,
    /// A gated item was chosen with no volume selected.
    RequiresVolume,
    Unknown,
}

/// Browse submenu actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowseAction {
    Enter,
    Parent,
    Back,
    Unknown,
}

/// Outcome of the volume-number prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeChoice {
    Cancel,
    Index(usize),
    Invalid,
}

/// Parse a main-menu line. `has_volume` decides the meaning of item 2
/// and gates items 3-7.
pub fn parse_main(input: &str, has_volume: bool) -> MainAction {
    match input.trim() {
        "1" => MainAction::ListVolumes,
        "2" if has_volume => MainAction::VolumeInfo,
        "2" => MainAction::SelectVolume,
        "3" if has_volume => MainAction::Browse,
        "4" if has_volume => MainAction::CreateDirectory,
        "5" if has_volume => MainAction::CreateFile,
        "6" if has_volume => MainAction::Delete,
        "7" if has_volume => MainAction::ChangeVolume,
        "3" | "4" | "5" | "6" | "7" => MainAction::RequiresVolume,
        "0" => MainAction::Exit,
        _ => MainAction::Unknown,
    }
}

pub fn parse_browse(input: &str) -> BrowseAction {
    match input.trim() {
        "1" => BrowseAction::Enter,
        "2" => BrowseAction::Parent,
        "3" => BrowseAction::Back,
        _ => BrowseAction::Unknown,
    }
}

/// Parse the volume-number prompt: numbering is one-based, `0` or an
/// empty line cancels.
pub fn parse_volume_choice(input: &str) -> VolumeChoice {
    let input = input.trim();
    if input.is_empty() {
        return VolumeChoice::Cancel;
    }
    match input.parse::<usize>() {
        Ok(0) => VolumeChoice::Cancel,
        Ok(n) => VolumeChoice::Index(n - 1),
        Err(_) => VolumeChoice::Invalid,
    }
}

/// True for `y`/`yes` in any case.
pub fn parse_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
