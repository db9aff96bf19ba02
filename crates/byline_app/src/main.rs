mod app;
mod fixtures;
mod logging;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    logging::initialize(logging::LogDestination::File);
    app::run()
}
