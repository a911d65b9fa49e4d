mod commands;
mod waypoint;

use std::{env, path::PathBuf, process, time::Instant};

use campus_nav::prelude::*;
use tracing::{error, info};

const BUNDLE_ENV: &str = "CAMPUS_NAV_BUNDLE";
const DEFAULT_BUNDLE: &str = "campus_bundle";

const USAGE: &str = "usage:
  campus-nav indoor <origin floor> <destination floor> [transport]
  campus-nav toggle [times]
  campus-nav search <query>
  campus-nav shuttle <SGW|LOY> [HH:MM]
  campus-nav route <from> <to> [HH:MM]

locations are building codes (H), rooms (H:8) or coordinates (45.49,-73.57)
the campus bundle is read from $CAMPUS_NAV_BUNDLE (default ./campus_bundle)";

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    let result = match command.as_str() {
        "indoor" => commands::indoor(rest),
        "toggle" => commands::toggle(rest),
        "search" => load_repository().and_then(|repo| commands::search(&repo, rest)),
        "shuttle" => load_repository().and_then(|repo| commands::shuttle(&repo, rest)),
        "route" => load_repository().and_then(|repo| commands::route(&repo, rest)),
        _ => Err(commands::Error::Usage),
    };

    match result {
        Ok(()) => {}
        Err(commands::Error::Usage) => {
            eprintln!("{USAGE}");
            process::exit(1);
        }
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}

fn load_repository() -> Result<Repository, commands::Error> {
    let path: PathBuf = env::var(BUNDLE_ENV)
        .unwrap_or_else(|_| DEFAULT_BUNDLE.to_string())
        .into();
    info!("Loading campus bundle from {}", path.display());
    let now = Instant::now();
    let reader = BundleReader::new().from_path(&path)?;
    let repository = Repository::new().load_bundle(reader)?;
    info!(
        "Loaded {} buildings and {} shuttle departures in {:?}",
        repository.buildings.len(),
        repository.departures.len(),
        now.elapsed()
    );
    Ok(repository)
}
