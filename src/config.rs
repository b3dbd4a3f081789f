use serde::{Deserialize, Serialize};

use crate::draw::DrawRequest;
use crate::error::PickerError;

pub const HISTORY_CAPACITY:usize = 10;
pub const MAX_HISTORY_CAPACITY:usize = 1000;
pub const MAX_COUNT:u32 = 10;          // policy cap, independent of range size
pub const REVEAL_STAGGER_MS:u32 = 100;
pub const NOTICE_DURATION_MS:u32 = 3000;
pub const TIMESTAMP_LOCALE:&str = "pt-BR";
pub const DEFAULT_REQUEST:DrawRequest = DrawRequest {min: 1, max: 100, count: 1};

/// Settings a page may hand to `new Picker(config)`.
///
/// Every field is optional on the JS side; missing ones take the defaults
/// above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
  pub history_capacity:usize,
  pub max_count:u32,
  pub reveal_stagger_ms:u32,
  pub notice_duration_ms:u32,
  pub locale:String,
}

impl Default for PickerConfig {
  fn default() -> Self {
    PickerConfig {
      history_capacity: HISTORY_CAPACITY,
      max_count: MAX_COUNT,
      reveal_stagger_ms: REVEAL_STAGGER_MS,
      notice_duration_ms: NOTICE_DURATION_MS,
      locale: TIMESTAMP_LOCALE.to_string(),
    }
  }
}

impl PickerConfig {
  pub fn validate(self) -> Result<Self, PickerError> {
    if self.history_capacity == 0 {
      return Err(PickerError::Config("historyCapacity must be at least 1".into()));
    }
    if self.history_capacity > MAX_HISTORY_CAPACITY {
      return Err(PickerError::Config(
        format!("historyCapacity must be at most {MAX_HISTORY_CAPACITY}")
      ));
    }
    if self.max_count == 0 {
      return Err(PickerError::Config("maxCount must be at least 1".into()));
    }
    Ok(self)
  }
}
