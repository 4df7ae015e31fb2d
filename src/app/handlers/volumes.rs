//! Volume action handlers

use std::io;

use crate::app::App;
use crate::error::NavError;
use crate::input::{self, VolumeChoice};
use crate::render;

impl App {
    /// Menu 1: the detailed volume table.
    pub fn execute_list_volumes(&mut self) -> io::Result<()> {
        self.console.clear_screen();
        print!(
            "{}",
            render::volume_table(self.navigator.volumes(), &self.console)
        );
        self.pause()
    }

    /// Menu 2 before a volume is selected, and menu 7 after: pick a
    /// volume by its number.
    pub fn execute_select_volume(&mut self) -> io::Result<()> {
        self.console.clear_screen();
        print!(
            "{}",
            render::volume_choices(self.navigator.volumes(), &self.console)
        );

        let Some(line) = self.prompt("Enter volume number (0 to cancel): ")? else {
            return Ok(());
        };

        match input::parse_volume_choice(&line) {
            VolumeChoice::Cancel => Ok(()),
            VolumeChoice::Invalid => self.report_and_pause(&NavError::OutOfRange),
            VolumeChoice::Index(index) => match self.navigator.select_volume(index) {
                Ok(()) => {
                    let volume = &self.navigator.volumes()[index];
                    println!(
                        "Selected volume: {} on {}",
                        volume.device,
                        volume.mount_point.display()
                    );
                    self.pause()
                }
                Err(e) => self.report_and_pause(&e),
            },
        }
    }

    /// Menu 2 once a volume is selected: live info for the volume that
    /// owns the current path.
    pub fn execute_volume_info(&mut self) -> io::Result<()> {
        self.console.clear_screen();
        match self.navigator.current_volume() {
            Ok(volume) => {
                print!("{}", render::volume_info(&volume, &self.console));
                self.pause()
            }
            Err(e) => self.report_and_pause(&e),
        }
    }
}
