/// A single number becoming visible `delay_ms` after the draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
  pub index:usize,
  pub number:i32,
  pub delay_ms:u32,
}

/// Staggers `numbers` so each appears `stagger_ms` after the previous one,
/// the first immediately.
pub fn reveal_schedule(numbers:&[i32], stagger_ms:u32)
  -> impl Iterator<Item = RevealStep> + '_
{
  numbers.iter().enumerate().map(move |(index, &number)| RevealStep {
    index,
    number,
    delay_ms: u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger_ms),
  })
}
