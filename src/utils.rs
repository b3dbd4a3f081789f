/// Route Rust panics to the browser console with a readable message.
pub fn set_panic_hook() {
  #[cfg(feature = "console_error_panic_hook")]
  console_error_panic_hook::set_once();
}

/// Installs the console subscriber for `tracing` events.
pub fn init_logging() {
  #[cfg(target_arch = "wasm32")]
  tracing_wasm::set_as_global_default();
}
