//! Create and delete handlers

use std::io;

use crate::app::App;
use crate::error::NavError;
use crate::filesystem::{self, DeletedKind};
use crate::input;

impl App {
    /// Menu 4: create a directory under the current path.
    pub fn execute_create_directory(&mut self) -> io::Result<()> {
        self.console.clear_screen();
        let Some(header) = self.current_path_header() else {
            return self.report_and_pause(&NavError::NoVolumeSelected);
        };
        println!("Creating a directory in: {header}");

        let Some(name) = self.prompt("Enter directory name: ")? else {
            return Ok(());
        };

        match self.navigator.create_directory(&name) {
            Ok(_) => println!("Directory '{}' created.", name.trim()),
            Err(e) => self.console.report(&e),
        }
        self.pause()
    }

    /// Menu 5: create a file from typed lines. Input ends at the first
    /// empty line; an existing file of the same name is replaced.
    pub fn execute_create_file(&mut self) -> io::Result<()> {
        self.console.clear_screen();
        let Some(header) = self.current_path_header() else {
            return self.report_and_pause(&NavError::NoVolumeSelected);
        };
        println!("Creating a file in: {header}");

        let Some(name) = self.prompt("Enter file name: ")? else {
            return Ok(());
        };
        if name.trim().is_empty() {
            return self.report_and_pause(&NavError::InvalidName);
        }

        println!("Enter the file content, line by line. An empty line finishes:");
        let lines = self.console.read_lines_until_blank()?;

        match self.navigator.create_file(&name, &lines) {
            Ok(_) => println!("File '{}' created.", name.trim()),
            Err(e) => self.console.report(&e),
        }
        self.pause()
    }

    /// Menu 6: delete a file or directory after confirmation.
    pub fn execute_delete(&mut self) -> io::Result<()> {
        self.console.clear_screen();
        let Some(header) = self.current_path_header() else {
            return self.report_and_pause(&NavError::NoVolumeSelected);
        };
        println!("Deleting from: {header}");

        let Some(name) = self.prompt("Name of the file or directory to delete: ")? else {
            return Ok(());
        };

        let target = match self.navigator.child_path(&name) {
            Ok(target) => target,
            Err(e) => return self.report_and_pause(&e),
        };

        // Describe the target before asking. For a directory the
        // confirmation includes how much a recursive delete removes.
        if target.is_dir() {
            let entries = filesystem::count_entries(&target);
            let noun = if entries == 1 { "entry" } else { "entries" };
            println!(
                "'{}' is a directory with {} {} inside.",
                name.trim(),
                entries,
                noun
            );
        } else if !target.is_file() && !target.is_symlink() {
            return self.report_and_pause(&NavError::NotFound(name.trim().to_string()));
        }

        let Some(answer) = self.prompt(&format!("Delete '{}'? (y/n): ", name.trim()))? else {
            return Ok(());
        };
        let confirmed = input::parse_yes(&answer);

        match self.navigator.delete(&name, confirmed) {
            Ok(None) => println!("Nothing deleted."),
            Ok(Some(DeletedKind::File)) => println!("File '{}' deleted.", name.trim()),
            Ok(Some(DeletedKind::Directory)) => {
                println!("Directory '{}' deleted.", name.trim())
            }
            Err(e) => self.console.report(&e),
        }
        self.pause()
    }

    fn current_path_header(&self) -> Option<String> {
        self.navigator
            .current_path()
            .map(|p| p.display().to_string())
    }
}
