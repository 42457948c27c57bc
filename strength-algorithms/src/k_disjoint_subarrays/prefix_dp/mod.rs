use anyhow::{anyhow, Result};
use ndarray::Array3;
use serde_json::{Map, Value};
use strength_challenges::k_disjoint_subarrays::*;

const CLOSED: usize = 0;
const OPEN: usize = 1;

pub fn help() {
    println!("Exact prefix dynamic programme over (prefix length, subarrays used, last element open).");
    println!("Keeps the full table so the optimal subarrays can be recovered by walking it backwards.");
    println!("Hyperparameters: none");
}

pub fn solve_challenge(
    challenge: &Challenge,
    save_solution: &dyn Fn(&Solution) -> Result<()>,
    _hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let k = challenge.difficulty.num_subarrays;
    let table = build_table(&challenge.nums, k)?;
    let subarrays = reconstruct(&table, &challenge.nums, k)?;
    save_solution(&Solution { subarrays })
}

/// `table[[i, j, f]]` is the best partial strength using `j` subarrays within the
/// first `i` elements, where `f == OPEN` iff element `i - 1` ends the open
/// `j`-th subarray. `None` marks unreachable states.
pub fn build_table(nums: &[i32], k: usize) -> Result<Array3<Option<i64>>> {
    if k == 0 {
        return Err(StrengthError::ZeroSubarrays.into());
    }
    if k > nums.len() {
        return Err(StrengthError::TooManySubarrays {
            k,
            len: nums.len(),
        }
        .into());
    }
    let n = nums.len();
    let mut table = Array3::<Option<i64>>::from_elem((n + 1, k + 1, 2), None);
    for i in 0..=n {
        table[[i, 0, CLOSED]] = Some(0);
    }

    for i in 1..=n {
        let v = nums[i - 1] as i64;
        for j in 1..=k {
            let contribution = coefficient(j, k)
                .checked_mul(v)
                .ok_or(StrengthError::Overflow)?;
            table[[i, j, CLOSED]] = table[[i - 1, j, CLOSED]].max(table[[i - 1, j, OPEN]]);
            let best_prev = table[[i - 1, j - 1, CLOSED]]
                .max(table[[i - 1, j - 1, OPEN]])
                .max(table[[i - 1, j, OPEN]]);
            table[[i, j, OPEN]] = match best_prev {
                Some(strength) => Some(
                    strength
                        .checked_add(contribution)
                        .ok_or(StrengthError::Overflow)?,
                ),
                None => None,
            };
        }
    }
    Ok(table)
}

/// Walks back from the best final state, preferring to keep the current
/// subarray open on ties.
pub fn reconstruct(table: &Array3<Option<i64>>, nums: &[i32], k: usize) -> Result<Vec<[usize; 2]>> {
    let mut i = nums.len();
    let mut j = k;
    let mut flag = if table[[i, j, OPEN]] >= table[[i, j, CLOSED]] {
        OPEN
    } else {
        CLOSED
    };
    let mut end = i;
    let mut subarrays = Vec::with_capacity(k);

    while j > 0 {
        if i == 0 {
            return Err(anyhow!("Walked past the start with {} subarrays left", j));
        }
        let value = table[[i, j, flag]];
        if flag == CLOSED {
            if table[[i - 1, j, OPEN]] == value {
                flag = OPEN;
                end = i - 1;
            }
        } else {
            let prev = value.map(|s| s - coefficient(j, k) * nums[i - 1] as i64);
            if table[[i - 1, j, OPEN]] != prev {
                subarrays.push([i - 1, end]);
                j -= 1;
                flag = if table[[i - 1, j, OPEN]] == prev {
                    end = i - 1;
                    OPEN
                } else {
                    CLOSED
                };
            }
        }
        i -= 1;
    }

    subarrays.reverse();
    Ok(subarrays)
}
