use std::collections::BTreeMap;

use serde::Serialize;

use crate::draw::DrawResult;

// Only the newest draws keep their full range record.
pub const RANGES_USED_CAPACITY:usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeUsed {
  pub min:i32,
  pub max:i32,
  pub numbers:Vec<i32>,
}

/// Running tally over every completed draw since the last reset.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawStats {
  total_draws:u64,
  frequencies:BTreeMap<i32,u32>,
  ranges_used:Vec<RangeUsed>,
}

impl DrawStats {
  pub fn new() -> DrawStats {
    DrawStats::default()
  }

  pub fn observe(&mut self, result:&DrawResult, min:i32, max:i32) {
    self.total_draws += 1;
    for &n in result {
      *self.frequencies.entry(n).or_insert(0) += 1;
    }
    if self.ranges_used.len() == RANGES_USED_CAPACITY {
      self.ranges_used.remove(0);
    }
    self.ranges_used.push(RangeUsed {min, max, numbers: result.as_slice().to_vec()});
  }

  /// Number drawn most often with its tally. Ties go to the smallest number.
  pub fn most_frequent(&self) -> Option<(i32, u32)> {
    self.frequencies.iter().fold(None, |best, (&n, &hits)| match best {
      Some((_, top)) if top >= hits => best,
      _ => Some((n, hits)),
    })
  }

  pub fn total_draws(&self) -> u64 {self.total_draws}
  pub fn frequency(&self, n:i32) -> u32 {self.frequencies.get(&n).copied().unwrap_or(0)}
  pub fn frequencies(&self) -> &BTreeMap<i32,u32> {&self.frequencies}
  pub fn ranges_used(&self) -> &[RangeUsed] {&self.ranges_used}

  pub fn reset(&mut self) {
    *self = DrawStats::default();
  }
}
