use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthError {
    #[error("At least one subarray must be selected")]
    ZeroSubarrays,
    #[error("Cannot select {k} non-empty subarrays from {len} elements")]
    TooManySubarrays { k: usize, len: usize },
    #[error("Strength does not fit in 64 bits")]
    Overflow,
}

/// Signed multiplier of the `j`-th selected subarray (1-indexed) when `k`
/// subarrays are selected: `+(k + 1 - j)` for odd `j`, `-(k + 1 - j)` for even.
pub fn coefficient(j: usize, k: usize) -> i64 {
    let weight = (k + 1 - j) as i64;
    if j % 2 == 1 {
        weight
    } else {
        -weight
    }
}

/// Maximum strength over every choice of `k` disjoint, non-empty, ordered
/// subarrays of `nums`.
///
/// Runs the prefix recurrence over `(subarrays used, last element open)` states,
/// keeping only the row for the previous prefix length. `None` marks a state
/// no selection can reach; `Option`'s ordering places it below every `Some`.
///
/// # Errors
///
/// `ZeroSubarrays` when `k == 0`, `TooManySubarrays` when `k > nums.len()`, and
/// `Overflow` when a partial strength leaves the `i64` range.
pub fn maximum_strength(nums: &[i32], k: usize) -> Result<i64, StrengthError> {
    if k == 0 {
        return Err(StrengthError::ZeroSubarrays);
    }
    if k > nums.len() {
        return Err(StrengthError::TooManySubarrays {
            k,
            len: nums.len(),
        });
    }

    // [closed, open] per subarray count
    let mut prev: Vec<[Option<i64>; 2]> = vec![[None, None]; k + 1];
    prev[0][0] = Some(0);
    let mut curr = prev.clone();

    for &v in nums {
        for j in 1..=k {
            let contribution = coefficient(j, k)
                .checked_mul(v as i64)
                .ok_or(StrengthError::Overflow)?;
            curr[j][0] = prev[j][0].max(prev[j][1]);
            curr[j][1] = match prev[j - 1][0].max(prev[j - 1][1]).max(prev[j][1]) {
                Some(strength) => Some(
                    strength
                        .checked_add(contribution)
                        .ok_or(StrengthError::Overflow)?,
                ),
                None => None,
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    // Unreachable only if k > nums.len(), which the guard above already rejected:
    // one element per subarray always reaches the final state.
    prev[k][0]
        .max(prev[k][1])
        .ok_or(StrengthError::TooManySubarrays {
            k,
            len: nums.len(),
        })
}
