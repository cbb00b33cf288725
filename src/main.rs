mod app;
mod config;
mod error;
mod library;
mod player;
mod quiz;
mod runtime;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
