use rand_core::{impls, Error, RngCore};
use wasm_bindgen::prelude::*;

/// The browser's `Math.random`, usable anywhere a `rand::Rng` is expected.
///
/// Only meaningful on `wasm32`; calling it natively panics inside
/// wasm-bindgen.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathRandom;

impl RngCore for MathRandom {
  fn next_u32(&mut self) -> u32 {
    // random() is in [0, 1), so the product never reaches 2^32
    (random() * 4_294_967_296.0).floor() as u32
  }

  fn next_u64(&mut self) -> u64 {
    impls::next_u64_via_u32(self)
  }

  fn fill_bytes(&mut self, dest:&mut [u8]) {
    impls::fill_bytes_via_next(self, dest)
  }

  fn try_fill_bytes(&mut self, dest:&mut [u8]) -> Result<(), Error> {
    self.fill_bytes(dest);
    Ok(())
  }
}

#[wasm_bindgen]
extern "C" {
  #[wasm_bindgen(js_namespace = Math, js_name = random)]
  fn random() -> f64;

}
