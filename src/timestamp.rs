//! Wall-clock time for history entries, rendered the way the page shows it.

/// Current local time of day formatted for `locale`, e.g. `"14:03:27"` for
/// `pt-BR`.
#[cfg(target_arch = "wasm32")]
pub fn now(locale:&str) -> String {
  js_sys::Date::new_0().to_locale_time_string(locale).into()
}

/// Current local time of day as `HH:MM:SS`. The locale is ignored outside
/// the browser; every supported locale uses a 24-hour clock.
#[cfg(not(target_arch = "wasm32"))]
pub fn now(_locale:&str) -> String {
  use time::macros::format_description;
  use time::OffsetDateTime;

  let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
  now.format(format_description!("[hour]:[minute]:[second]"))
    .unwrap_or_default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
  use super::*;

  #[test]
  fn native_time_is_hours_minutes_seconds() {
    let stamp = now("pt-BR");
    let parts:Vec<&str> = stamp.split(':').collect();
    assert_eq!(parts.len(), 3);
    assert!(parts.iter().all(|p| p.len() == 2 && p.chars().all(|c| c.is_ascii_digit())));
  }
}
