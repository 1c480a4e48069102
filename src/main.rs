use clap::{Parser, Subcommand};
use palindrome_grid::grid::Grid;
use palindrome_grid::parallel::{ParallelConfig, run_parallel_count};
use palindrome_grid::sweep::{SweepConfig, SweepPhase, run_sweep};
use tracing_subscriber::EnvFilter;

/// Grids larger than this are never echoed by `--print-grid`.
const MAX_PRINTED_CELLS: usize = 10_000;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "pgrid")]
#[command(about = "pgrid - parallel palindrome counter for random letter grids")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count palindromes of one length in one grid
    Count {
        /// Number of grid rows
        #[arg(long, default_value = "1000")]
        rows: usize,
        /// Number of grid columns
        #[arg(long, default_value = "1000")]
        cols: usize,
        /// Run length to count
        #[arg(long, short, default_value = "3")]
        length: usize,
        /// Number of worker threads (defaults to the number of CPUs)
        #[arg(long, short = 'j')]
        workers: Option<usize>,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Print the grid before counting (small grids only)
        #[arg(long)]
        print_grid: bool,
        /// Print per-worker statistics
        #[arg(long, short)]
        verbose: bool,
    },
    /// Time counts over a range of lengths and worker counts
    Sweep {
        /// Side length of the single-worker warm-up grid
        #[arg(long, default_value = "10")]
        small: usize,
        /// Rows of the large grid
        #[arg(long, default_value = "1000")]
        rows: usize,
        /// Columns of the large grid
        #[arg(long, default_value = "1000")]
        cols: usize,
        /// Shortest run length
        #[arg(long, default_value = "3")]
        min_len: usize,
        /// Longest run length (inclusive)
        #[arg(long, default_value = "6")]
        max_len: usize,
        /// Largest worker count; every count from 1 up is measured
        #[arg(long, default_value = "8")]
        max_workers: usize,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Route `tracing` output to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();
}

// --- Commands ---

struct CountOptions {
    rows: usize,
    cols: usize,
    length: usize,
    workers: Option<usize>,
    seed: Option<u64>,
    print_grid: bool,
    verbose: bool,
}

fn run_count(options: &CountOptions) -> Result<(), Box<dyn std::error::Error>> {
    let grid = Grid::new(options.rows, options.cols, options.seed)?;
    tracing::info!(
        rows = grid.rows(),
        cols = grid.cols(),
        seed = ?options.seed,
        "grid built"
    );

    if options.print_grid {
        if grid.rows() * grid.cols() <= MAX_PRINTED_CELLS {
            print!("{}", grid);
            println!();
        } else {
            eprintln!(
                "Grid has more than {} cells; not printing it",
                MAX_PRINTED_CELLS
            );
        }
    }

    let config = ParallelConfig::default().with_workers_option(options.workers);
    let result = run_parallel_count(&grid, options.length, &config)?;

    print!("{}", result.format_summary());
    if options.verbose {
        println!("Workers:");
        print!("{}", result.format_workers());
    }

    Ok(())
}

fn run_benchmark_sweep(config: &SweepConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_phase = None;
    let mut last_workers = 0;

    run_sweep(config, |record| {
        if last_phase != Some(record.phase) {
            match record.phase {
                SweepPhase::Small => println!(
                    "Running a small {}x{} test",
                    config.small_size, config.small_size
                ),
                SweepPhase::Large => {
                    println!("\nRunning full {}x{} test", config.rows, config.cols)
                }
            }
            last_phase = Some(record.phase);
        }
        if record.phase == SweepPhase::Large && record.num_workers != last_workers {
            println!("\nUsing {} threads:", record.num_workers);
            last_workers = record.num_workers;
        }
        println!("{}", record);
    })?;

    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    match args.command {
        Commands::Count {
            rows,
            cols,
            length,
            workers,
            seed,
            print_grid,
            verbose,
        } => {
            let options = CountOptions {
                rows,
                cols,
                length,
                workers,
                seed,
                print_grid,
                verbose,
            };
            if let Err(e) = run_count(&options) {
                eprintln!("Error counting palindromes: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Sweep {
            small,
            rows,
            cols,
            min_len,
            max_len,
            max_workers,
            seed,
        } => {
            let config = SweepConfig::default()
                .with_small_size(small)
                .with_dimensions(rows, cols)
                .with_lengths(min_len, max_len)
                .with_max_workers(max_workers)
                .with_seed_option(seed);
            if let Err(e) = run_benchmark_sweep(&config) {
                eprintln!("Error running sweep: {}", e);
                std::process::exit(1);
            }
        }
    }
}
