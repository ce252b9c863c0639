use ttsim_core::core::InputBus;
use ttsim_core::device::gamepad::ButtonSnapshot;

const WORD_BITS: u32 = 24;
const WORD_MASK: u32 = (1 << WORD_BITS) - 1;

/// Receiving end of the gamepad PMOD link.
///
/// Data is sampled on each rising edge of the PMOD clock and shifted in
/// from the top, so after 24 pulses the first bit sent sits at bit 0. A
/// rising edge on the latch line copies the shift register to the output.
#[derive(Clone, Debug, Default)]
pub struct GamepadReceiver {
    shift: u32,
    latched: u32,
    prev_clk: bool,
    prev_latch: bool,
}

impl GamepadReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sample the input bus on a system clock edge.
    pub fn clock(&mut self, bus: InputBus) {
        if bus.clock() && !self.prev_clk {
            self.shift = (self.shift >> 1) | ((bus.data() as u32) << (WORD_BITS - 1));
        }
        if bus.latch() && !self.prev_latch {
            self.latched = self.shift & WORD_MASK;
        }
        self.prev_clk = bus.clock();
        self.prev_latch = bus.latch();
    }

    /// Last latched 24-bit word.
    pub fn word(&self) -> u32 {
        self.latched
    }

    /// Latched button state of both pads (pad 0 from the upper 12 bits).
    pub fn pads(&self) -> [ButtonSnapshot; 2] {
        [
            ButtonSnapshot::from_bits((self.latched >> 12) as u16),
            ButtonSnapshot::from_bits(self.latched as u16),
        ]
    }
}
