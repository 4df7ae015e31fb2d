//! Action execution dispatch

use std::io;

use crate::error::NavError;
use crate::input::MainAction;

use super::App;

impl App {
    /// Execute one main-menu action. Navigation failures are reported
    /// and recovered here; only console I/O errors propagate.
    pub fn execute(&mut self, action: MainAction) -> io::Result<()> {
        match action {
            // Volume actions
            MainAction::ListVolumes => self.execute_list_volumes(),
            MainAction::SelectVolume | MainAction::ChangeVolume => self.execute_select_volume(),
            MainAction::VolumeInfo => self.execute_volume_info(),

            // Browsing
            MainAction::Browse => self.execute_browse(),

            // File operations
            MainAction::CreateDirectory => self.execute_create_directory(),
            MainAction::CreateFile => self.execute_create_file(),
            MainAction::Delete => self.execute_delete(),

            MainAction::RequiresVolume => self.report_and_pause(&NavError::NoVolumeSelected),
            MainAction::Unknown => {
                println!("Unknown command.");
                self.pause()
            }
            MainAction::Exit => {
                self.should_exit = true;
                Ok(())
            }
        }
    }
}
