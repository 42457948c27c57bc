use crate::{BenchmarkSettings, OutputData};
use anyhow::{anyhow, Result};
use serde_json::{Map, Value};
use std::cell::RefCell;
use strength_algorithms::k_disjoint_subarrays::{get_algorithm, get_help};
use strength_challenges::k_disjoint_subarrays::{
    maximum_strength, Challenge, Difficulty, Solution,
};
use tracing::{debug, info};

pub struct ComputeResult {
    pub output_data: OutputData,
    pub err_msg: Option<String>,
}

fn generate_challenge(
    settings: &BenchmarkSettings,
    rand_hash: &str,
    nonce: u64,
) -> Result<Challenge> {
    match settings.challenge_id.as_str() {
        "c001" | "k_disjoint_subarrays" => {}
        other => return Err(anyhow!("Unsupported challenge: {}", other)),
    }
    let seed = settings.calc_seed(rand_hash, nonce)?;
    let difficulty = Difficulty::try_from(settings.difficulty.clone())?;
    debug!(
        seed = %hex::encode(seed),
        num_elements = difficulty.num_elements,
        num_subarrays = difficulty.num_subarrays,
        "generating instance"
    );
    Challenge::generate_instance(&seed, &difficulty)
}

/// Runs the algorithm named in `settings` on the instance for `nonce`.
///
/// An algorithm failure is not an `Err`: whatever solution was saved before the
/// failure is still returned, with the failure in `err_msg`.
pub fn compute_solution(
    settings: &BenchmarkSettings,
    rand_hash: &str,
    nonce: u64,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<ComputeResult> {
    let solve_challenge = get_algorithm(&settings.algorithm_id)
        .ok_or_else(|| anyhow!("Unknown algorithm: {}", settings.algorithm_id))?;
    let challenge = generate_challenge(settings, rand_hash, nonce)?;

    let solution = RefCell::new(Map::new());
    let save_solution_fn = |s: &Solution| -> Result<()> {
        match serde_json::to_value(s)? {
            Value::Object(map) => {
                *solution.borrow_mut() = map;
                Ok(())
            }
            _ => Err(anyhow!("Solution did not serialize to a json object")),
        }
    };
    info!(
        algorithm_id = %settings.algorithm_id,
        nonce,
        "computing solution"
    );
    let err_msg = solve_challenge(&challenge, &save_solution_fn, hyperparameters)
        .err()
        .map(|e| e.to_string());

    Ok(ComputeResult {
        output_data: OutputData {
            nonce,
            solution: solution.into_inner(),
        },
        err_msg,
    })
}

pub fn verify_solution(
    settings: &BenchmarkSettings,
    rand_hash: &str,
    nonce: u64,
    solution: Map<String, Value>,
) -> Result<()> {
    let challenge = generate_challenge(settings, rand_hash, nonce)?;
    let solution = Solution::try_from(solution).map_err(|e| {
        anyhow!(
            "Invalid solution. Cannot convert to k_disjoint_subarrays::Solution: {}",
            e
        )
    })?;
    challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))
}

pub fn parse_nums(input: &str) -> Result<Vec<i32>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|e| anyhow!("Invalid element '{}': {}", s, e))
        })
        .collect()
}

pub fn compute_maximum_strength(nums: &str, k: usize) -> Result<i64> {
    let nums = parse_nums(nums)?;
    debug!(num_elements = nums.len(), k, "computing maximum strength");
    Ok(maximum_strength(&nums, k)?)
}

pub fn print_algorithm_help(algorithm_id: &str) -> Result<()> {
    let help =
        get_help(algorithm_id).ok_or_else(|| anyhow!("Unknown algorithm: {}", algorithm_id))?;
    help();
    Ok(())
}
