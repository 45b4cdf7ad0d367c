use anyhow::Result;
use clap::Parser;

use cube_demo::app::App;
use cube_demo::demos::DemoKind;

#[derive(Parser)]
#[command(name = "cube-demo", about = "Rotating cube rendering demos")]
struct Cli {
    /// Which demo variant to run
    #[arg(long, value_enum, default_value = "spin")]
    demo: DemoKind,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.demo.uses_orbit_controls() {
        log::info!(
            "{}: left-drag orbits, right-drag pans, scroll zooms; Escape quits",
            cli.demo.title()
        );
    } else {
        log::info!("{}: Escape quits", cli.demo.title());
    }
    App::run(cli.demo)
}
