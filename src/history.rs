use std::collections::VecDeque;

use serde::{Serialize, Serializer};

use crate::config::{HISTORY_CAPACITY, TIMESTAMP_LOCALE};
use crate::draw::DrawResult;

/// One past draw. Fields are fixed once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
  #[serde(serialize_with = "rendered")]
  numbers:DrawResult,
  timestamp:String,
  min:i32,
  max:i32,
}

fn rendered<S:Serializer>(numbers:&DrawResult, s:S) -> Result<S::Ok, S::Error> {
  s.collect_str(numbers)
}

impl HistoryEntry {
  pub fn new(numbers:DrawResult, timestamp:String, min:i32, max:i32) -> HistoryEntry {
    HistoryEntry {numbers, timestamp, min, max}
  }

  /// Stamps the entry with the current time in `locale`.
  pub fn now(numbers:DrawResult, min:i32, max:i32, locale:&str) -> HistoryEntry {
    HistoryEntry::new(numbers, crate::timestamp::now(locale), min, max)
  }

  pub fn numbers(&self) -> &DrawResult {&self.numbers}
  pub fn timestamp(&self) -> &str {&self.timestamp}
  pub fn min(&self) -> i32 {self.min}
  pub fn max(&self) -> i32 {self.max}
}

/// Most recent draws, newest first. Never grows past its capacity; the
/// oldest entries fall off the back.
#[derive(Debug, Clone)]
pub struct HistoryLog {
  entries:VecDeque<HistoryEntry>,
  capacity:usize,
}

impl Default for HistoryLog {
  fn default() -> Self {
    HistoryLog::new()
  }
}

impl HistoryLog {
  pub fn new() -> HistoryLog {
    HistoryLog::with_capacity(HISTORY_CAPACITY)
  }

  pub fn with_capacity(capacity:usize) -> HistoryLog {
    HistoryLog {entries: VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY)), capacity}
  }

  pub fn record(&mut self, result:DrawResult, min:i32, max:i32) {
    self.record_entry(HistoryEntry::now(result, min, max, TIMESTAMP_LOCALE));
  }

  pub fn record_entry(&mut self, entry:HistoryEntry) {
    self.entries.push_front(entry);
    self.entries.truncate(self.capacity);
  }

  pub fn clear(&mut self) {
    self.entries.clear();
  }

  pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> + '_ {
    self.entries.iter()
  }

  pub fn latest(&self) -> Option<&HistoryEntry> {
    self.entries.front()
  }

  pub fn len(&self) -> usize {self.entries.len()}
  pub fn is_empty(&self) -> bool {self.entries.is_empty()}
}

impl Serialize for HistoryLog {
  fn serialize<S:Serializer>(&self, s:S) -> Result<S::Ok, S::Error> {
    s.collect_seq(self.entries.iter())
  }
}
