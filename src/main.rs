#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[cfg(feature = "std")]
use seahelper::{
    best_guess, cell_label, init_logging, print_field, print_probability_board,
    print_suggestions, ranked_cells, sample_heatmap, Analyzer, Assessment, Grid, ShipType, FLEET,
    TOTAL_SHIP_CELLS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Check a recorded field and print the remaining ships with a
    /// probability board.
    Analyze {
        /// Field file, or `-` for stdin.
        input: String,
        #[arg(long, help = "Emit the result as JSON instead of text")]
        json: bool,
        #[arg(long, default_value_t = 5, help = "Number of ranked suggestions to print")]
        top: usize,
    },
    /// Sample a guess from the probability board.
    Suggest {
        /// Field file, or `-` for stdin.
        input: String,
        #[arg(long, help = "Fix RNG seed for reproducible suggestions (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(
            long,
            default_value_t = 0.5,
            help = "Sampling temperature; lower hones in on the top cells"
        )]
        temperature: f64,
    },
    /// Print the placement catalog summary.
    Shapes,
}

#[cfg(feature = "std")]
fn read_field(input: &str) -> anyhow::Result<Grid> {
    let text = if input == "-" {
        std::io::read_to_string(std::io::stdin()).context("reading field from stdin")?
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading field from {input}"))?
    };
    Grid::from_text(&text).map_err(|e| anyhow::anyhow!(e))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let analyzer = Analyzer::new();

    match cli.command {
        Commands::Analyze { input, json, top } => {
            let grid = read_field(&input)?;
            let assessment = analyzer.assess(&grid);
            if json {
                let result = match &assessment {
                    Assessment::Impossible => json!({ "valid": false }),
                    Assessment::Possible { remaining, heatmap } => json!({
                        "valid": true,
                        "remaining": {
                            "square": remaining[ShipType::Square],
                            "triangle": remaining[ShipType::Triangle],
                            "domino": remaining[ShipType::Domino],
                            "mine": remaining[ShipType::Mine],
                        },
                        "heatmap": heatmap.iter().map(|row| row.to_vec()).collect::<Vec<_>>(),
                    }),
                };
                println!("{}", serde_json::to_string(&result)?);
                return Ok(());
            }
            print_field(&grid);
            match assessment {
                Assessment::Impossible => {
                    println!("\nImpossible field: check the recorded marks.");
                }
                Assessment::Possible { remaining, heatmap } => {
                    println!("\nRemaining: {}", remaining);
                    print_probability_board(&heatmap);
                    if let Some(cell) = best_guess(&grid, &heatmap) {
                        println!("\nBest guess: {}", cell_label(cell));
                    }
                    if top > 0 {
                        println!("\nBest next guesses:");
                        print_suggestions(&ranked_cells(&grid, &heatmap), top);
                    }
                }
            }
        }
        Commands::Suggest {
            input,
            seed,
            temperature,
        } => {
            let grid = read_field(&input)?;
            match analyzer.assess(&grid) {
                Assessment::Impossible => {
                    println!("Impossible field: check the recorded marks.");
                }
                Assessment::Possible { heatmap, .. } => {
                    let mut rng = match seed {
                        Some(s) => SmallRng::seed_from_u64(s),
                        None => {
                            let mut seed_rng = rand::rng();
                            SmallRng::from_rng(&mut seed_rng)
                        }
                    };
                    info!("sampling a guess at temperature {temperature}");
                    match sample_heatmap(&grid, &heatmap, temperature, &mut rng) {
                        Some(cell) => println!("Guess {}", cell_label(cell)),
                        None => println!("No information to suggest a guess."),
                    }
                }
            }
        }
        Commands::Shapes => {
            for ship_type in ShipType::ALL {
                println!(
                    "{:<8} cells={} fleet={} placements={}",
                    ship_type,
                    ship_type.cell_count(),
                    FLEET[ship_type],
                    analyzer.catalog().placements(ship_type).len()
                );
            }
            println!("Total fleet cells: {}", TOTAL_SHIP_CELLS);
        }
    }
    Ok(())
}
