use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use inkforge::config::Config;
use inkforge::trial::TrialFile;
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Recorded trial (reference strokes + captured attempts) as JSON.
    #[arg(global = true, short, long, default_value = "data/trial.json")]
    trial: String,

    /// JSON config; explicit flags override its values.
    #[arg(global = true, long)]
    config_file: Option<String>,

    /// Drawing scale relative to the 1024-unit box the distance thresholds
    /// assume.
    #[arg(global = true, long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Check(cmd::check::CheckArgs),
    Replay(cmd::replay::ReplayArgs),
}

fn main() {
    // Reports own stdout; logs go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    info!("📂 Loading Trial: {}", cli.trial);
    let trial = TrialFile::load_from_file(&cli.trial).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let (cli_config, sub_name) = match &cli.command {
        Commands::Check(args) => (&args.config, "check"),
        Commands::Replay(args) => (&args.config, "replay"),
    };
    let Some(sub_matches) = matches.subcommand_matches(sub_name) else {
        error!("Missing subcommand arguments");
        process::exit(2);
    };

    let mut config = match &cli.config_file {
        Some(path) => {
            info!("⚖️  Loading Config from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => {
            warn!("⚠️  No config file given. Using defaults and flags.");
            cli_config.clone()
        }
    };

    if !(cli.scale.is_finite() && cli.scale > 0.0) {
        error!("❌ --scale must be a positive number, got {}", cli.scale);
        process::exit(1);
    }
    config.matching = config.matching.scaled(cli.scale);

    if let Err(e) = config.validate() {
        error!("❌ {}", e);
        process::exit(1);
    }

    let strokes = trial.reference_set().unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let outcome = match cli.command {
        Commands::Check(args) => cmd::check::run(&args, &trial, &strokes, &config),
        Commands::Replay(args) => cmd::replay::run(&args, &trial, &strokes, &config),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
