mod error;
mod logging;
mod pairs;

use error::AppError;
use std::env;

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError>
{
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => play(&[]),
        Some("play") => play(&args[1..]),
        Some("symbols") => {
            list_symbols();
            Ok(())
        }
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(option) if option.starts_with("--") => play(&args),
        Some(other) => Err(AppError::usage(format!(
            "Unknown command '{other}'. Run with --help."
        ))),
    }
}

fn play(args: &[String]) -> Result<(), AppError>
{
    let config = pairs::PairsConfig::from_args(args)?;
    logging::init(config.log_path.as_deref())?;
    pairs::run_with_config(config)
}

fn list_symbols()
{
    println!("Symbols in play (each appears on two cards):");
    for symbol in pairs::catalog::ANIMALS {
        println!("  {}  {}", symbol.emoji, symbol.name);
    }
}

fn print_help()
{
    println!("kb-pairs");
    println!("\nUsage:");
    println!("  kb-pairs [play] [--seed=N] [--pairs=2..8] [--delay=MS] [--log=PATH]");
    println!("  kb-pairs symbols");
    println!("\nControls:");
    println!("  Arrows or h/j/k/l move, Home/End jump within a row.");
    println!("  Enter or Space flips the focused card. R starts a new game. Esc quits.");
    println!("\nNotes:");
    println!("  --seed replays the same sequence of deals.");
    println!("  Set PAIRS_LOG to a tracing filter (default 'info') when logging with --log.");
}
