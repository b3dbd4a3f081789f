pub mod config;
pub mod draw;
pub mod error;
pub mod history;
pub mod random;
pub mod reveal;
pub mod stats;
pub mod timestamp;
mod utils;

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;

use config::{PickerConfig, DEFAULT_REQUEST};
use draw::{clamp_inputs_capped, render, DrawRequest, DrawResult};
use error::{DrawError, PickerError};
use history::{HistoryEntry, HistoryLog};
use random::MathRandom;
use reveal::reveal_schedule;
use stats::{DrawStats, RangeUsed};

pub use draw::{clamp_inputs, draw};

const KEY_ENTER:u8 = 13;
const KEY_ESCAPE:u8 = 27;
const EMPTY_HISTORY:&str = "No numbers drawn yet";

/// Page-facing state: the current form values, the rolling history and the
/// frequency tally. JavaScript owns the handle and drives it one user
/// action at a time.
#[wasm_bindgen]
pub struct Picker {
  config:PickerConfig,
  inputs:DrawRequest,
  history:HistoryLog,
  stats:DrawStats,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStats<'a> {
  total_draws:u64,
  most_frequent:Option<JsFrequency>,
  frequencies:&'a BTreeMap<i32,u32>,
  ranges_used:&'a [RangeUsed],
}

#[derive(Serialize)]
struct JsFrequency {
  number:i32,
  frequency:u32,
}

fn write_clipboard(text:&str) -> Result<js_sys::Promise, PickerError> {
  let window = web_sys::window().ok_or_else(|| PickerError::Js("no window".into()))?;
  let promise = window.navigator().clipboard().write_text(text);
  debug!(text, "copying to clipboard");
  Ok(promise)
}

fn to_js<T:Serialize + ?Sized>(value:&T) -> Result<JsValue, PickerError> {
  let serializer = serde_wasm_bindgen::Serializer::json_compatible();
  Ok(value.serialize(&serializer)?)
}

impl Picker {
  pub fn with_config(config:PickerConfig) -> Result<Picker, PickerError> {
    let config = config.validate()?;
    info!(?config, "picker ready");
    Ok(Picker {
      history: HistoryLog::with_capacity(config.history_capacity),
      inputs: DEFAULT_REQUEST,
      stats: DrawStats::new(),
      config,
    })
  }

  /// Clamps raw form values and keeps them for the next draw.
  pub fn apply_inputs(&mut self, min:i32, max:i32, count:i32) -> DrawRequest {
    self.inputs = clamp_inputs_capped(min, max, count, self.config.max_count);
    self.inputs
  }

  /// Draws with the stored inputs. On success the result is recorded in
  /// history and stats; on failure nothing changes.
  pub fn submit<R:Rng + ?Sized>(&mut self, rng:&mut R) -> Result<DrawResult, DrawError> {
    let DrawRequest {min, max, ..} = self.inputs;
    let result = self.inputs.draw(rng).map_err(|err| {
      warn!(%err, "draw rejected");
      err
    })?;
    self.stats.observe(&result, min, max);
    self.history.record_entry(
      HistoryEntry::now(result.clone(), min, max, &self.config.locale)
    );
    Ok(result)
  }

  /// Empties history and puts the form back to its defaults.
  pub fn reset(&mut self) {
    self.history.clear();
    self.inputs = DEFAULT_REQUEST;
    info!("picker cleared");
  }

  pub fn reset_stats(&mut self) {
    self.stats.reset();
  }

  /// Rendered numbers of the newest draw, if there is one.
  pub fn clipboard_text(&self) -> Option<String> {
    self.history.latest().map(|entry| entry.numbers().to_string())
  }

  fn stats_view(&self) -> JsStats<'_> {
    let stats = &self.stats;
    JsStats {
      total_draws: stats.total_draws(),
      most_frequent: stats.most_frequent()
        .map(|(number, frequency)| JsFrequency {number, frequency}),
      frequencies: stats.frequencies(),
      ranges_used: stats.ranges_used(),
    }
  }

  pub fn current_inputs(&self) -> DrawRequest {self.inputs}
  pub fn history_log(&self) -> &HistoryLog {&self.history}
  pub fn draw_stats(&self) -> &DrawStats {&self.stats}
}

#[wasm_bindgen]
impl Picker {
  #[wasm_bindgen(constructor)]
  pub fn new(config:JsValue) -> Result<Picker, JsError> {
    let config = if config.is_undefined() || config.is_null() {
      PickerConfig::default()
    } else {
      serde_wasm_bindgen::from_value(config).map_err(PickerError::from)?
    };
    Ok(Picker::with_config(config)?)
  }

  #[wasm_bindgen(js_name = setInputs)]
  pub fn set_inputs(&mut self, min:i32, max:i32, count:i32) -> Result<JsValue, JsError> {
    let clamped = self.apply_inputs(min, max, count);
    Ok(to_js(&clamped)?)
  }

  pub fn inputs(&self) -> Result<JsValue, JsError> {
    Ok(to_js(&self.inputs)?)
  }

  pub fn draw(&mut self) -> Result<Vec<i32>, JsError> {
    Ok(self.submit(&mut MathRandom)?.into_vec())
  }

  pub fn clear(&mut self) {
    self.reset();
  }

  pub fn history(&self) -> Result<JsValue, JsError> {
    Ok(to_js(&self.history)?)
  }

  pub fn stats(&self) -> Result<JsValue, JsError> {
    Ok(to_js(&self.stats_view())?)
  }

  #[wasm_bindgen(js_name = resetStats)]
  pub fn reset_stats_js(&mut self) {
    self.reset_stats();
  }

  /// Copies the newest draw to the clipboard. The returned promise settles
  /// when the browser has written it.
  #[wasm_bindgen(js_name = copyLatest)]
  pub fn copy_latest(&self) -> Result<js_sys::Promise, JsError> {
    let text = self.clipboard_text().ok_or(PickerError::NothingToCopy)?;
    Ok(write_clipboard(&text)?)
  }

  pub fn copy(&self, numbers:Vec<i32>) -> Result<js_sys::Promise, JsError> {
    Ok(write_clipboard(&render(&numbers))?)
  }

  /// Calls `callback(number, index)` once per number, staggered so the
  /// numbers appear one after another.
  pub fn reveal(&self, numbers:Vec<i32>, callback:&js_sys::Function) -> Result<(), JsError> {
    let window = web_sys::window().ok_or_else(|| PickerError::Js("no window".into()))?;
    for step in reveal_schedule(&numbers, self.config.reveal_stagger_ms) {
      let delay = i32::try_from(step.delay_ms).unwrap_or(i32::MAX);
      window.set_timeout_with_callback_and_timeout_and_arguments_2(
        callback,
        delay,
        &JsValue::from(step.number),
        &JsValue::from(step.index as u32),
      ).map_err(|e| PickerError::Js(format!("setTimeout failed: {e:?}")))?;
    }
    debug!(count = numbers.len(), "reveal scheduled");
    Ok(())
  }

  /// Enter draws, Escape clears. Returns which one happened so the page
  /// knows what to re-render.
  #[wasm_bindgen(js_name = sendKeypress)]
  pub fn receive_keypress(&mut self, key:u8) -> Result<String, JsError> {
    let action = match key {
      KEY_ENTER  => {self.draw()?; "draw"}
      KEY_ESCAPE => {self.reset(); "clear"}
      _          => "none"
    };
    Ok(action.to_string())
  }

  #[wasm_bindgen(js_name = noticeDurationMs)]
  pub fn notice_duration_ms(&self) -> u32 {
    self.config.notice_duration_ms
  }
}

#[wasm_bindgen(js_name = clampInputs)]
pub fn clamp_inputs_js(min:i32, max:i32, count:i32) -> Result<JsValue, JsError> {
  Ok(to_js(&clamp_inputs(min, max, count))?)
}

#[wasm_bindgen(js_name = emptyHistoryMessage)]
pub fn empty_history_message() -> String {
  EMPTY_HISTORY.to_string()
}

#[wasm_bindgen(start)]
pub fn main() {
  utils::set_panic_hook();
  utils::init_logging();
  info!("number picker loaded; press Enter to draw or Escape to clear");
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn picker() -> Picker {
    Picker::with_config(PickerConfig::default()).unwrap()
  }

  #[test]
  fn starts_from_default_inputs() {
    assert_eq!(picker().current_inputs(), DrawRequest::new(1, 100, 1));
  }

  #[test]
  fn submit_records_history_and_stats() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut picker = picker();
    picker.apply_inputs(1, 20, 4);
    let result = picker.submit(&mut rng).unwrap();
    assert_eq!(result.len(), 4);
    assert_eq!(picker.history_log().latest().unwrap().numbers(), &result);
    assert_eq!(picker.draw_stats().total_draws(), 1);
  }

  #[test]
  fn rejected_draw_changes_nothing() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut picker = picker();
    // bypass clamping to reach the validation path
    picker.inputs = DrawRequest::new(1, 5, 10);
    assert_eq!(
      picker.submit(&mut rng),
      Err(DrawError::InvalidCount {count: 10, available: 5})
    );
    assert!(picker.history_log().is_empty());
    assert_eq!(picker.draw_stats().total_draws(), 0);
  }

  #[test]
  fn configured_cap_applies_to_inputs() {
    let mut picker = Picker::with_config(PickerConfig {max_count: 3, ..PickerConfig::default()}).unwrap();
    assert_eq!(picker.apply_inputs(1, 100, 9), DrawRequest::new(1, 100, 3));
  }

  #[test]
  fn reset_clears_history_and_restores_inputs() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut picker = picker();
    picker.apply_inputs(10, 20, 5);
    picker.submit(&mut rng).unwrap();
    picker.reset();
    assert!(picker.history_log().is_empty());
    assert_eq!(picker.current_inputs(), DEFAULT_REQUEST);
    // stats keep observing across clears
    assert_eq!(picker.draw_stats().total_draws(), 1);
  }

  #[test]
  fn clipboard_text_is_the_newest_rendered_draw() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut picker = picker();
    assert_eq!(picker.clipboard_text(), None);
    picker.apply_inputs(1, 3, 3);
    picker.submit(&mut rng).unwrap();
    assert_eq!(picker.clipboard_text().as_deref(), Some("1, 2, 3"));
    picker.reset();
    assert_eq!(picker.clipboard_text(), None);
  }

  #[test]
  fn stats_view_shape() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut picker = picker();
    assert_eq!(
      serde_json::to_value(picker.stats_view()).unwrap(),
      serde_json::json!({"totalDraws": 0, "mostFrequent": null, "frequencies": {}, "rangesUsed": []})
    );
    picker.apply_inputs(1, 2, 2);
    picker.submit(&mut rng).unwrap();
    picker.submit(&mut rng).unwrap();
    assert_eq!(
      serde_json::to_value(picker.stats_view()).unwrap(),
      serde_json::json!({
        "totalDraws": 2,
        "mostFrequent": {"number": 1, "frequency": 2},
        "frequencies": {"1": 2, "2": 2},
        "rangesUsed": [
          {"min": 1, "max": 2, "numbers": [1, 2]},
          {"min": 1, "max": 2, "numbers": [1, 2]}
        ]
      })
    );
  }

  #[test]
  fn reset_stats_leaves_history_alone() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut picker = picker();
    picker.submit(&mut rng).unwrap();
    picker.reset_stats();
    assert_eq!(picker.draw_stats().total_draws(), 0);
    assert_eq!(picker.history_log().len(), 1);
  }

  #[test]
  fn notice_duration_follows_config() {
    assert_eq!(picker().notice_duration_ms(), 3000);
    let picker = Picker::with_config(PickerConfig {notice_duration_ms: 5000, ..PickerConfig::default()}).unwrap();
    assert_eq!(picker.notice_duration_ms(), 5000);
  }

  #[test]
  fn oversized_history_config_is_an_error() {
    let config:PickerConfig =
      serde_json::from_str(r#"{"historyCapacity": 18446744073709551615}"#).unwrap();
    assert!(matches!(Picker::with_config(config), Err(PickerError::Config(_))));
  }

  #[test]
  fn history_capacity_follows_config() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut picker = Picker::with_config(PickerConfig {history_capacity: 2, ..PickerConfig::default()}).unwrap();
    for _ in 0..5 {picker.submit(&mut rng).unwrap();}
    assert_eq!(picker.history_log().len(), 2);
  }
}
