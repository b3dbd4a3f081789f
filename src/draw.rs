use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::MAX_COUNT;
use crate::error::DrawError;

// Ranges up to this size are drawn from a materialised candidate list.
const DENSE_RANGE_LIMIT:u64 = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawRequest {
  pub min:i32,
  pub max:i32,
  pub count:u32,
}

/// Unique numbers from one draw, strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DrawResult(Vec<i32>);

impl DrawRequest {
  pub const fn new(min:i32, max:i32, count:u32) -> DrawRequest {
    DrawRequest {min, max, count}
  }

  pub fn available(&self) -> u64 {
    range_size(self.min, self.max)
  }

  pub fn draw<R:Rng + ?Sized>(&self, rng:&mut R) -> Result<DrawResult, DrawError> {
    draw(self.min, self.max, self.count, rng)
  }
}

impl DrawResult {
  pub fn as_slice(&self) -> &[i32] {
    &self.0
  }

  pub fn into_vec(self) -> Vec<i32> {
    self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, i32> {
    self.0.iter()
  }
}

impl fmt::Display for DrawResult {
  fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&render(&self.0))
  }
}

/// The form a draw is shown and copied in: `"3, 17, 42"`.
pub fn render(numbers:&[i32]) -> String {
  numbers.iter().map(i32::to_string).collect::<Vec<_>>().join(", ")
}

impl<'a> IntoIterator for &'a DrawResult {
  type Item = &'a i32;
  type IntoIter = std::slice::Iter<'a, i32>;
  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

/// Number of integers in `[min, max]`, zero when the range is empty.
fn range_size(min:i32, max:i32) -> u64 {
  if min > max {0} else {(max as i64 - min as i64 + 1) as u64}
}

/// Draws `count` distinct integers from `[min, max]` and returns them
/// sorted ascending.
///
/// Each pick is uniform over the candidates not yet taken. Fails with
/// [`DrawError::InvalidRange`] unless `min < max`, and with
/// [`DrawError::InvalidCount`] when `count` is zero or larger than the range.
pub fn draw<R:Rng + ?Sized>(min:i32, max:i32, count:u32, rng:&mut R)
  -> Result<DrawResult, DrawError>
{
  if min >= max {return Err(DrawError::InvalidRange {min, max})}
  let available = range_size(min, max);
  if count == 0 || count as u64 > available {
    return Err(DrawError::InvalidCount {count, available});
  }

  let mut numbers = if available <= DENSE_RANGE_LIMIT {
    pick_dense(min, max, count, rng)
  } else {
    pick_sparse(min, available, count, rng)
  };
  numbers.sort_unstable();
  debug!(min, max, count, "drew numbers");
  Ok(DrawResult(numbers))
}

fn pick_dense<R:Rng + ?Sized>(min:i32, max:i32, count:u32, rng:&mut R) -> Vec<i32> {
  let mut candidates:Vec<i32> = (min..=max).collect();
  (0..count).map(|_| {
    let index = rng.gen_range(0..candidates.len());
    candidates.remove(index)
  }).collect()
}

// Partial Fisher-Yates over a virtual candidate list; `displaced` holds the
// slots whose value no longer equals their offset from `min`.
fn pick_sparse<R:Rng + ?Sized>(min:i32, available:u64, count:u32, rng:&mut R)
  -> Vec<i32>
{
  let mut displaced:HashMap<u64,u64> = HashMap::with_capacity(count as usize);
  let mut remaining = available;
  (0..count).map(|_| {
    let index = rng.gen_range(0..remaining);
    let picked = *displaced.get(&index).unwrap_or(&index);
    remaining -= 1;
    let last = *displaced.get(&remaining).unwrap_or(&remaining);
    displaced.insert(index, last);
    (min as i64 + picked as i64) as i32
  }).collect()
}

/// Pulls raw form values into a drawable request. Never fails.
pub fn clamp_inputs(min:i32, max:i32, count:i32) -> DrawRequest {
  clamp_inputs_capped(min, max, count, MAX_COUNT)
}

pub fn clamp_inputs_capped(min:i32, max:i32, count:i32, max_count:u32) -> DrawRequest {
  let (min, max) = if min < max {(min, max)}
    else if min == i32::MAX {(i32::MAX - 1, i32::MAX)}
    else {(min, min + 1)};
  let cap = max_count.max(1) as i64;
  let count = (count as i64).clamp(1, cap).min(range_size(min, max) as i64) as u32;
  let clamped = DrawRequest {min, max, count};
  debug!(?clamped, "clamped inputs");
  clamped
}
