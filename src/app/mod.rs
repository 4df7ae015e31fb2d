//! Application state and menu loop
//!
//! This module contains the main App struct and its implementation,
//! split across multiple files to keep complexity manageable.

mod execute;
mod handlers;

use std::io;

use crate::cli::CliArgs;
use crate::config::{Config, MountRules};
use crate::console::{self, Console};
use crate::error::NavError;
use crate::input;
use crate::navigation::Navigator;
use crate::render;
use crate::volumes;

/// Main application state
pub struct App {
    pub console: Console,
    pub navigator: Navigator,
    pub should_exit: bool,
}

impl App {
    /// Create a new App instance: load config, apply CLI overrides,
    /// snapshot the mounted volumes.
    pub async fn new(args: CliArgs) -> Self {
        let config = Config::load().await.unwrap_or_else(|e| {
            eprintln!("failed to load config: {e}");
            std::process::exit(1);
        });

        let tty = console::stdout_is_tty();
        let color = !args.no_color && config.color().await.unwrap_or(tty);
        let clear = !args.no_clear && config.clear_screen().await.unwrap_or(tty);
        let show_hidden = args.show_all || config.show_hidden().await;

        let rules = MountRules::load();
        let volumes = volumes::list(&rules);

        Self {
            console: Console::new(color, clear),
            navigator: Navigator::new(volumes, show_hidden),
            should_exit: false,
        }
    }

    /// Run the menu loop until the user exits or stdin closes.
    pub fn run(&mut self) -> io::Result<()> {
        while !self.should_exit {
            self.console.clear_screen();
            print!("{}", render::main_menu(self.navigator.is_browsing()));

            let Some(line) = self.console.prompt("Select an option: ")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let action = input::parse_main(&line, self.navigator.is_browsing());
            self.execute(action)?;
        }
        Ok(())
    }

    /// Prompt wrapper that records EOF as an exit request.
    fn prompt(&mut self, msg: &str) -> io::Result<Option<String>> {
        let line = self.console.prompt(msg)?;
        if line.is_none() {
            self.should_exit = true;
        }
        Ok(line)
    }

    fn pause(&self) -> io::Result<()> {
        self.console.pause()
    }

    fn report_and_pause(&self, err: &NavError) -> io::Result<()> {
        self.console.report(err);
        self.pause()
    }
}
