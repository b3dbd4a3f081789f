use thiserror::Error;

/// Reasons a draw is refused. The messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
  #[error("The minimum number must be less than the maximum! (got {min} and {max})")]
  InvalidRange {min:i32, max:i32},
  #[error("Cannot draw {count} unique numbers when only {available} are available!")]
  InvalidCount {count:u32, available:u64},
}

#[derive(Debug, Error)]
pub enum PickerError {
  #[error(transparent)]
  Draw(#[from] DrawError),
  #[error("invalid picker config: {0}")]
  Config(String),
  #[error("nothing has been drawn yet")]
  NothingToCopy,
  #[error("javascript call failed: {0}")]
  Js(String),
}

impl From<serde_wasm_bindgen::Error> for PickerError {
  fn from(err:serde_wasm_bindgen::Error) -> Self {
    PickerError::Config(err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_name_the_offending_values() {
    let range = DrawError::InvalidRange {min: 5, max: 5};
    assert!(range.to_string().contains("5 and 5"));
    let count = DrawError::InvalidCount {count: 10, available: 5};
    assert!(count.to_string().contains("10 unique numbers"));
    assert!(count.to_string().contains("only 5"));
  }

  #[test]
  fn picker_error_is_transparent_over_draw_error() {
    let err:PickerError = DrawError::InvalidRange {min: 2, max: 1}.into();
    assert_eq!(err.to_string(), DrawError::InvalidRange {min: 2, max: 1}.to_string());
  }
}
