//! Fletcher-16 checksum over dense section contents.
//!
//! Two 8-bit limbs, both reduced modulo 255 after every byte. The low
//! limb is a running sum of the bytes; the high limb is a running sum
//! of the low limb. The combined value is `sum_high * 256 + sum_low`.

/// Modulus shared by both limbs.
const FLETCHER_MOD: u16 = 255;

/// Incremental two-limb checksum accumulator.
///
/// Both limbs stay in `0..=254`; reduction is explicit and never relies
/// on integer wrap-around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fletcher16 {
    sum_low: u16,
    sum_high: u16,
}

impl Fletcher16 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporate one byte into the running sum.
    ///
    /// Folding a zero byte is not a no-op: the low limb is unchanged
    /// but the high limb still advances by the current low limb, once
    /// per byte. Order matters.
    pub fn fold(&mut self, byte: u8) {
        self.sum_low = (self.sum_low + byte as u16) % FLETCHER_MOD;
        self.sum_high = (self.sum_high + self.sum_low) % FLETCHER_MOD;
    }

    /// Current combined 16-bit checksum, `sum_high * 256 + sum_low`.
    pub fn value(&self) -> u16 {
        (self.sum_high << 8) | self.sum_low
    }

    /// Clear both limbs.
    pub fn reset(&mut self) {
        self.sum_low = 0;
        self.sum_high = 0;
    }
}

/// One-shot checksum of a byte slice.
pub fn fletcher16(data: &[u8]) -> u16 {
    let mut sum = Fletcher16::new();
    for &b in data {
        sum.fold(b);
    }
    sum.value()
}
