use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use serde_json::{Map, Value};
use std::{fs, path::PathBuf};
use strength_runtime::{
    compute_maximum_strength, compute_solution, print_algorithm_help, verify_solution,
    BenchmarkSettings,
};
use strength_utils::{compress_obj, jsonify, load_json};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const EXIT_NO_SOLUTION: i32 = 85;
const EXIT_RUNTIME_ERROR: i32 = 86;

fn cli() -> Command {
    Command::new("strength-runtime")
        .about("Computes or verifies maximum strength solutions")
        .arg_required_else_help(true)
        .arg(
            arg!(-v --verbose "Log seeds and instance sizes")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("compute_solution")
                .about("Computes a solution")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RAND_HASH> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NONCE> "Nonce value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--hyperparameters [HYPERPARAMETERS] "Hyperparameters json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress "If output file is set, the output data will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RAND_HASH> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NONCE> "Nonce value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("maximum_strength")
                .about("Computes the maximum strength of a sequence directly")
                .arg(
                    arg!(<NUMS> "Comma separated integers, e.g. 1,2,3,-1,2")
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<K> "Number of subarrays").value_parser(clap::value_parser!(usize))),
        )
        .subcommand(
            Command::new("help_algorithm")
                .about("Describes an algorithm and its hyperparameters")
                .arg(
                    arg!(<ALGORITHM_ID> "Algorithm name, e.g. prefix_dp")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let exit_code = match matches.subcommand() {
        Some(("compute_solution", sub_m)) => run_compute_solution(sub_m),
        Some(("verify_solution", sub_m)) => run_verify_solution(sub_m),
        Some(("maximum_strength", sub_m)) => run_maximum_strength(sub_m),
        Some(("help_algorithm", sub_m)) => required::<String>(sub_m, "ALGORITHM_ID")
            .and_then(|id| print_algorithm_help(id))
            .map(|_| 0),
        _ => Err(anyhow!("Invalid subcommand")),
    };
    match exit_code {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn required<'a, T: Clone + Send + Sync + 'static>(sub_m: &'a ArgMatches, id: &str) -> Result<&'a T> {
    sub_m
        .get_one::<T>(id)
        .ok_or_else(|| anyhow!("Missing argument {}", id))
}

fn run_compute_solution(sub_m: &ArgMatches) -> Result<i32> {
    let settings = load_json::<BenchmarkSettings>(required::<String>(sub_m, "SETTINGS")?)?;
    let rand_hash = required::<String>(sub_m, "RAND_HASH")?;
    let nonce = *required::<u64>(sub_m, "NONCE")?;
    let hyperparameters = sub_m
        .get_one::<String>("hyperparameters")
        .map(|h| load_json::<Map<String, Value>>(h))
        .transpose()?;

    let result = compute_solution(&settings, rand_hash, nonce, &hyperparameters)?;

    match sub_m.get_one::<PathBuf>("output") {
        Some(path) => {
            if sub_m.get_flag("compress") {
                fs::write(path, compress_obj(&result.output_data)?)?;
            } else {
                fs::write(path, jsonify(&result.output_data)?)?;
            }
            info!("output_data written to: {:?}", path);
        }
        None => println!("{}", jsonify(&result.output_data)?),
    }

    if let Some(err_msg) = result.err_msg {
        error!("Runtime error: {}", err_msg);
        Ok(EXIT_RUNTIME_ERROR)
    } else if result.output_data.solution.is_empty() {
        warn!("No solution found");
        Ok(EXIT_NO_SOLUTION)
    } else {
        Ok(0)
    }
}

fn run_verify_solution(sub_m: &ArgMatches) -> Result<i32> {
    let settings = load_json::<BenchmarkSettings>(required::<String>(sub_m, "SETTINGS")?)?;
    let rand_hash = required::<String>(sub_m, "RAND_HASH")?;
    let nonce = *required::<u64>(sub_m, "NONCE")?;
    let solution = load_json::<Map<String, Value>>(required::<String>(sub_m, "SOLUTION")?)?;

    verify_solution(&settings, rand_hash, nonce, solution)?;
    println!("Solution is valid");
    Ok(0)
}

fn run_maximum_strength(sub_m: &ArgMatches) -> Result<i32> {
    let nums = required::<String>(sub_m, "NUMS")?;
    let k = *required::<usize>(sub_m, "K")?;
    println!("{}", compute_maximum_strength(nums, k)?);
    Ok(0)
}
