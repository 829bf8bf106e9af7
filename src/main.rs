//! Main executable for hpfold

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use hpfold::builder::RandomWalkBuilder;
use hpfold::conformation::{Chain, Conformation};
use hpfold::residue::AcidType;
use hpfold::scoring::ContactModel;
use hpfold::search::hillclimb::HillClimb;
use hpfold::search::{LocalSearch, SearchReport};

/// Command-line arguments for the application
#[derive(Parser, Debug)]
#[clap(
    name = "hpfold",
    version = hpfold::VERSION,
    about = "Lattice HP-model protein folding"
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a random conformation and improve it by hillclimbing
    Fold {
        /// Residue type sequence, e.g. HPHPPHHC
        #[clap(long, short)]
        sequence: String,

        /// Improvement attempts per restart
        #[clap(long, short, default_value_t = 1000)]
        iterations: usize,

        /// Independent restarts; the best result is kept
        #[clap(long, short, default_value_t = 1)]
        restarts: usize,

        /// RNG seed for reproducible runs
        #[clap(long)]
        seed: Option<u64>,

        /// Print the folded conformation as JSON
        #[clap(long)]
        json: bool,
    },

    /// Build a random conformation and report its score without searching
    Score {
        /// Residue type sequence, e.g. HPHPPHHC
        #[clap(long, short)]
        sequence: String,

        /// RNG seed for reproducible runs
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Parse command-line arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Fold {
            sequence,
            iterations,
            restarts,
            seed,
            json,
        } => {
            let types = AcidType::parse_sequence(&sequence)
                .with_context(|| format!("Invalid residue sequence: {}", sequence))?;
            let base_seed = seed.unwrap_or_else(rand::random);

            info!(
                "Folding {} residues, {} iterations, {} restart(s), seed {}",
                types.len(),
                iterations,
                restarts,
                base_seed
            );

            // Each restart owns its chain and RNG, so the runs are independent
            // and safe to spread across threads
            let (chain, report) = (0..restarts as u64)
                .into_par_iter()
                .map(|restart| fold_once(&types, iterations, base_seed.wrapping_add(restart)))
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .min_by_key(|(_, report)| report.final_score)
                .context("At least one restart is required")?;

            println!(
                "score: {} (initial {}, {} accepted, {} reverted, {} poisoned)",
                report.final_score,
                report.initial_score,
                report.accepted,
                report.reverted,
                report.poisoned
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&chain)?);
            }
        }

        Commands::Score { sequence, seed } => {
            let types = AcidType::parse_sequence(&sequence)
                .with_context(|| format!("Invalid residue sequence: {}", sequence))?;
            let base_seed = seed.unwrap_or_else(rand::random);
            let mut rng = StdRng::seed_from_u64(base_seed);

            let chain = RandomWalkBuilder::new()
                .build(&types, &mut rng)
                .context("Failed to build a random conformation")?;

            let model = ContactModel::new();
            let bonds = model.find_bonds(chain.residues());

            println!("score: {}", model.score(chain.residues()));
            for bond in bonds {
                println!(
                    "  {:?} bond between residues {} and {}",
                    bond.kind, bond.i, bond.j
                );
            }
        }
    }

    Ok(())
}

/// Build and search one conformation with its own seeded RNG
fn fold_once(
    types: &[AcidType],
    iterations: usize,
    seed: u64,
) -> Result<(Chain, SearchReport)> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut chain = RandomWalkBuilder::new()
        .build(types, &mut rng)
        .context("Failed to build a random conformation")?;

    let report = HillClimb::new().run(&mut chain, iterations, &mut rng);
    Ok((chain, report))
}
