mod baselines;
use anyhow::{anyhow, Result};
pub use baselines::prefix_dp::{coefficient, maximum_strength, StrengthError};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};

pub const MAX_ABS_VALUE: i32 = 1_000_000_000;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Difficulty {
    pub num_elements: usize,
    pub num_subarrays: usize,
}

impl TryFrom<Vec<i32>> for Difficulty {
    type Error = anyhow::Error;

    fn try_from(arr: Vec<i32>) -> Result<Self> {
        match arr.as_slice() {
            &[num_elements, num_subarrays] if num_elements >= 0 && num_subarrays >= 0 => {
                Ok(Self {
                    num_elements: num_elements as usize,
                    num_subarrays: num_subarrays as usize,
                })
            }
            _ => Err(anyhow!(
                "Difficulty must be [num_elements, num_subarrays] with non-negative values, got {:?}",
                arr
            )),
        }
    }
}

impl From<Difficulty> for Vec<i32> {
    fn from(difficulty: Difficulty) -> Self {
        vec![
            difficulty.num_elements as i32,
            difficulty.num_subarrays as i32,
        ]
    }
}

/// Selected subarrays as half-open `[start, end)` index ranges, left to right.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub subarrays: Vec<[usize; 2]>,
}

impl Solution {
    pub fn new() -> Self {
        Self {
            subarrays: Vec::new(),
        }
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: [u8; 32],
    pub difficulty: Difficulty,
    pub nums: Vec<i32>,
}

impl Challenge {
    pub fn generate_instance(seed: &[u8; 32], difficulty: &Difficulty) -> Result<Self> {
        if difficulty.num_subarrays == 0 {
            return Err(anyhow!("num_subarrays must be at least 1"));
        }
        if difficulty.num_subarrays > difficulty.num_elements {
            return Err(anyhow!(
                "num_subarrays ({}) cannot exceed num_elements ({})",
                difficulty.num_subarrays,
                difficulty.num_elements
            ));
        }
        let mut rng = SmallRng::from_seed(*seed);
        let nums = (0..difficulty.num_elements)
            .map(|_| rng.gen_range(-MAX_ABS_VALUE..=MAX_ABS_VALUE))
            .collect::<Vec<i32>>();

        Ok(Self {
            seed: *seed,
            difficulty: *difficulty,
            nums,
        })
    }

    pub fn evaluate_strength(&self, solution: &Solution) -> Result<i64> {
        let k = self.difficulty.num_subarrays;
        if solution.subarrays.len() != k {
            return Err(anyhow!(
                "Expecting {} subarrays, got {}",
                k,
                solution.subarrays.len()
            ));
        }
        let mut strength = 0i64;
        let mut prev_end = 0;
        for (idx, &[start, end]) in solution.subarrays.iter().enumerate() {
            if start >= end {
                return Err(anyhow!("Subarray {} ({}..{}) is empty", idx, start, end));
            }
            if end > self.nums.len() {
                return Err(anyhow!(
                    "Subarray {} ({}..{}) is out of bounds for {} elements",
                    idx,
                    start,
                    end,
                    self.nums.len()
                ));
            }
            if start < prev_end {
                return Err(anyhow!(
                    "Subarray {} ({}..{}) overlaps or precedes the previous subarray ending at {}",
                    idx,
                    start,
                    end,
                    prev_end
                ));
            }
            let sum = self.nums[start..end]
                .iter()
                .map(|&v| v as i64)
                .sum::<i64>();
            strength = coefficient(idx + 1, k)
                .checked_mul(sum)
                .and_then(|term| strength.checked_add(term))
                .ok_or_else(|| anyhow!("Strength overflowed at subarray {}", idx))?;
            prev_end = end;
        }
        Ok(strength)
    }

    pub fn compute_baseline(&self) -> Result<i64> {
        Ok(maximum_strength(
            &self.nums,
            self.difficulty.num_subarrays,
        )?)
    }

    conditional_pub!(
        fn verify_solution(&self, solution: &Solution) -> Result<()> {
            let strength = self.evaluate_strength(solution)?;
            let optimal_strength = self.compute_baseline()?;
            if strength != optimal_strength {
                Err(anyhow!(
                    "Strength ({}) does not match the optimal strength ({})",
                    strength,
                    optimal_strength
                ))
            } else {
                Ok(())
            }
        }
    );
}
