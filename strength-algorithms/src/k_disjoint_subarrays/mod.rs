use anyhow::Result;
use serde_json::{Map, Value};
use strength_challenges::k_disjoint_subarrays::{Challenge, Solution};

pub mod exhaustive;
pub mod prefix_dp;

pub type SolveFn =
    fn(&Challenge, &dyn Fn(&Solution) -> Result<()>, &Option<Map<String, Value>>) -> Result<()>;

pub fn get_algorithm(name: &str) -> Option<SolveFn> {
    match name {
        "prefix_dp" => Some(prefix_dp::solve_challenge),
        "exhaustive" => Some(exhaustive::solve_challenge),
        _ => None,
    }
}

pub fn get_help(name: &str) -> Option<fn()> {
    match name {
        "prefix_dp" => Some(prefix_dp::help),
        "exhaustive" => Some(exhaustive::help),
        _ => None,
    }
}

pub fn algorithm_exists(name: &str) -> bool {
    get_algorithm(name).is_some()
}
