use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strength_challenges::k_disjoint_subarrays::*;

#[derive(Serialize, Deserialize)]
pub struct Hyperparameters {
    pub max_elements: usize,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self { max_elements: 12 }
    }
}

pub fn help() {
    println!("Tries every selection of ordered, disjoint subarrays and keeps the strongest.");
    println!("Hyperparameters:");
    println!("  max_elements: refuse instances with more elements than this (default: 12)");
}

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let hyperparameters = match hyperparameters {
        Some(hyperparameters) => {
            serde_json::from_value::<Hyperparameters>(Value::Object(hyperparameters.clone()))
                .map_err(|e| anyhow!("Failed to parse hyperparameters: {}", e))?
        }
        None => Hyperparameters::default(),
    };
    let n = challenge.nums.len();
    if n > hyperparameters.max_elements {
        return Err(anyhow!(
            "Instance has {} elements, exhaustive search is limited to {}",
            n,
            hyperparameters.max_elements
        ));
    }

    let mut search = Search {
        nums: &challenge.nums,
        k: challenge.difficulty.num_subarrays,
        current: Vec::with_capacity(challenge.difficulty.num_subarrays),
        best: None,
    };
    search.extend(0, 0)?;
    match search.best {
        Some((_, subarrays)) => save_solution(&Solution { subarrays }),
        None => Ok(()),
    }
}

struct Search<'a> {
    nums: &'a [i32],
    k: usize,
    current: Vec<[usize; 2]>,
    best: Option<(i64, Vec<[usize; 2]>)>,
}

impl Search<'_> {
    fn extend(&mut self, from: usize, strength: i64) -> Result<()> {
        let j = self.current.len() + 1;
        if j > self.k {
            if self.best.as_ref().map_or(true, |(best, _)| strength > *best) {
                self.best = Some((strength, self.current.clone()));
            }
            return Ok(());
        }
        // leave room for the subarrays still to place
        let remaining = self.k - j;
        for start in from..self.nums.len().saturating_sub(remaining) {
            let mut sum = 0i64;
            for end in start + 1..=self.nums.len() - remaining {
                sum = sum
                    .checked_add(self.nums[end - 1] as i64)
                    .ok_or(StrengthError::Overflow)?;
                let next = coefficient(j, self.k)
                    .checked_mul(sum)
                    .and_then(|term| strength.checked_add(term))
                    .ok_or(StrengthError::Overflow)?;
                self.current.push([start, end]);
                self.extend(end, next)?;
                self.current.pop();
            }
        }
        Ok(())
    }
}
