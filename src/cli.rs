//! Command-line argument parsing

/// Parsed command-line flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub show_all: bool,
    pub no_color: bool,
    pub no_clear: bool,
}

pub fn parse_args() -> CliArgs {
    parse(std::env::args().skip(1))
}

fn parse(args: impl Iterator<Item = String>) -> CliArgs {
    let mut parsed = CliArgs::default();

    for arg in args {
        match arg.as_str() {
            "-a" | "--all" => parsed.show_all = true,
            "--no-color" => parsed.no_color = true,
            "--no-clear" => parsed.no_clear = true,
            "-h" | "--help" => print_help(),
            "-V" | "--version" => print_version(),
            other => {
                eprintln!("diskman: unknown argument '{other}'");
                eprintln!("Try 'diskman --help'.");
                std::process::exit(2);
            }
        }
    }

    parsed
}

fn print_help() -> ! {
    eprintln!("Usage: diskman [OPTIONS]");
    eprintln!();
    eprintln!("An interactive volume browser for the terminal.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -a, --all        Show hidden entries in directory listings");
    eprintln!("      --no-color   Disable colored output");
    eprintln!("      --no-clear   Do not clear the screen between menus");
    eprintln!("  -h, --help       Show this help message");
    eprintln!("  -V, --version    Print the version");
    eprintln!();
    eprintln!("Menu:");
    eprintln!("  1                List available volumes");
    eprintln!("  2                Select a volume / show current volume info");
    eprintln!("  3                Browse the current volume");
    eprintln!("  4                Create a directory");
    eprintln!("  5                Create a file");
    eprintln!("  6                Delete a file or directory");
    eprintln!("  7                Change the current volume");
    eprintln!("  0                Exit");
    std::process::exit(0);
}

fn print_version() -> ! {
    println!("diskman {}", env!("CARGO_PKG_VERSION"));
    std::process::exit(0);
}
