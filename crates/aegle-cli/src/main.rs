use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use aegle_cli::config::{load_run_config, RunConfig};
use aegle_cli::interactive;
use aegle_cli::train::run_training;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("AEGLE_LOG", "error,aegle=info"))
        .init();

    let matches = Command::new("aegle")
        .version(clap::crate_version!())
        .about("Disease prediction from patient attributes with a random-forest classifier")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .help("Path to the patient dataset CSV. Overrides the config file.")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("cache_dir")
                .long("cache-dir")
                .help("Directory for the train/test split cache files. Overrides the config file.")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON run configuration file.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no_predict")
                .long("no-predict")
                .help("Train and report only; skip the interactive prediction prompt.")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        log::info!("Using config: {:?}", config_path);
        load_run_config(config_path)?
    } else {
        RunConfig::default()
    };

    if let Some(data) = matches.get_one::<String>("data") {
        config.data_path = data.clone();
    }
    if let Some(cache_dir) = matches.get_one::<String>("cache_dir") {
        config.cache_dir = cache_dir.clone();
    }

    let outcome = match run_training(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Training failed: {:#}", e);
            std::process::exit(1)
        }
    };

    log::info!(
        "Selected {:?} (mean CV accuracy {:.4})",
        outcome.best_params,
        outcome.cv_accuracy
    );
    println!("Model Accuracy: {:.2}%", outcome.test_accuracy * 100.0);
    println!("Classification Report:\n{}", outcome.report);

    if !matches.get_flag("no_predict") {
        interactive::run(&outcome.pipeline)?;
    }

    Ok(())
}
