mod app;
mod cli;
mod config;
mod console;
mod error;
mod filesystem;
mod input;
mod navigation;
mod render;
mod volumes;

use app::App;

fn main() {
    let args = cli::parse_args();

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to create tokio runtime");

    let mut app = rt.block_on(App::new(args));

    if let Err(e) = app.run() {
        eprintln!("diskman: {e}");
        std::process::exit(1);
    }
}
