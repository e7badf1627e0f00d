#[macro_use]
extern crate log;

use clap::Parser;
use log::LevelFilter;
use search_trees::config::Config;
use search_trees::error::{self, Result};
use search_trees::{AvlTree, BinarySearchTree, Trace};
use simplelog::SimpleLogger;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

const INPUT_ERROR: &str = "Помилка введених даних";
const SEPARATOR: &str =
    "------------------------------------------------------------------------";

/// Seeds a binary search tree and an avl tree with the same keys and runs one traced
/// find-or-insert query against each.
#[derive(Debug, Parser)]
#[command(name = "search-trees", version)]
struct Args {
    /// TOML file with `seeds` and `log_level`.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured log level.
    #[arg(long)]
    log_level: Option<LevelFilter>,
    /// Query key. Read as one line from stdin when absent.
    #[arg(long, allow_hyphen_values = true)]
    key: Option<String>,
}

fn read_key(args: &Args) -> Result<i32> {
    match args.key {
        Some(ref text) => error::parse_key(text),
        None => {
            let mut buffer = String::new();
            io::stdin().read_line(&mut buffer)?;
            error::parse_key(&buffer)
        },
    }
}

fn report<T, Q>(tree: &mut T, render: fn(&T) -> String, query: Q)
where
    Q: FnOnce(&mut T) -> Trace,
{
    println!("Before");
    println!("{}\n", render(tree));

    let start = Instant::now();
    let trace = query(tree);
    let elapsed = start.elapsed();
    println!("{}", trace);
    println!("{:?}", elapsed);
    info!("{:?} {} in {:?}", trace.outcome(), trace.key(), elapsed);

    println!("After");
    println!("{}\n", render(tree));
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let mut bst: BinarySearchTree = config.seeds.iter().cloned().collect();
    let key = read_key(args)?;

    report(&mut bst, BinarySearchTree::render, |tree| tree.find_or_insert(key));
    println!("{}", SEPARATOR);

    let mut avl: AvlTree = config.seeds.iter().cloned().collect();
    report(&mut avl, AvlTree::render, |tree| tree.find_or_insert(key));
    Ok(())
}

fn main() {
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => Config::open(path),
        None => Ok(Config::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            println!("{}", INPUT_ERROR);
            process::exit(1);
        },
    };

    let level = args.log_level.unwrap_or(config.log_level);
    if SimpleLogger::init(level, simplelog::Config::default()).is_err() {
        eprintln!("logger already initialized");
    }
    debug!("seeding both trees with {:?}", config.seeds);

    if let Err(err) = run(&args, &config) {
        error!("{}", err);
        println!("{}", INPUT_ERROR);
        process::exit(1);
    }
}
