//! Interactive console front-end for the sortlab engine.
//!
//! The binary owns everything the core treats as an external collaborator:
//! the menu loop, numeric input validation, console formatting, and the
//! mutable "current array" state. All algorithmic work happens in the
//! `sortlab` library.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod input;
mod logging;
mod menu;

use menu::Menu;

#[derive(Parser)]
#[command(name = "sortlab")]
#[command(about = "Interactive laboratory for step-narrated sorting algorithms")]
#[command(
    long_about = "Sortlab: fill a small integer array, then watch classic sorting and \
selection algorithms rearrange it one observable step at a time.

Every sort narrates its full intermediate history: array snapshots after \
each swap/shift/placement, phase markers, and (for quicksort and merge \
sort) the folded recursion range tree."
)]
struct Cli {
    /// Enable verbose progress output with timestamps
    #[arg(short, long)]
    verbose: bool,

    /// Fixed RNG seed for reproducible fills and shuffles
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let rng = match cli.seed {
        Some(seed) => {
            log::info!("seeding RNG with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    Menu::new(rng).run()
}
