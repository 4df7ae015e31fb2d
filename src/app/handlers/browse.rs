//! Browse submenu handlers

use std::io;

use crate::app::App;
use crate::error::NavError;
use crate::input::{self, BrowseAction};
use crate::render;

impl App {
    /// Menu 3: list the current directory and run the browse submenu
    /// until the user returns to the main menu.
    pub fn execute_browse(&mut self) -> io::Result<()> {
        loop {
            self.console.clear_screen();

            let Some(path) = self.navigator.current_path().map(|p| p.to_path_buf()) else {
                return self.report_and_pause(&NavError::NoVolumeSelected);
            };

            let listing = match self.navigator.list_current() {
                Ok(listing) => listing,
                // Unreadable directory: report and fall back to the
                // main menu, the path is left as it was.
                Err(e) => return self.report_and_pause(&e),
            };

            print!("{}", render::browse_screen(&path, &listing, &self.console));

            let Some(line) = self.prompt("Select an option: ")? else {
                return Ok(());
            };

            match input::parse_browse(&line) {
                BrowseAction::Enter => {
                    let Some(name) = self.prompt("Enter directory name: ")? else {
                        return Ok(());
                    };
                    if let Err(e) = self.navigator.enter(&name) {
                        self.console.report(&e);
                        self.pause()?;
                    }
                }
                BrowseAction::Parent => {
                    if let Err(e) = self.navigator.to_parent() {
                        self.console.report(&e);
                        self.pause()?;
                    }
                }
                BrowseAction::Back => return Ok(()),
                BrowseAction::Unknown => {}
            }
        }
    }
}
