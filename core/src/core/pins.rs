//! Named-bit views over the model's 8-bit pin buses.
//!
//! Both buses are plain `u8` values. Every field is extracted or inserted
//! with an explicit mask and shift so the bit positions below are the only
//! contract; nothing depends on struct layout.
//!
//! Output bus (`uo_out`), bit 7 first:
//!
//! | 7     | 6        | 5         | 4       | 3     | 2        | 1         | 0       |
//! |-------|----------|-----------|---------|-------|----------|-----------|---------|
//! | hsync | blue lsb | green lsb | red lsb | vsync | blue msb | green msb | red msb |
//!
//! Input bus (`ui_in`): bit 4 latch, bit 5 clock, bit 6 data. Bits 0-3 and
//! bit 7 are not used by the harness and are always driven low.

const HSYNC: u8 = 1 << 7;
const VSYNC: u8 = 1 << 3;

const RED_MSB: u8 = 1 << 0;
const GREEN_MSB: u8 = 1 << 1;
const BLUE_MSB: u8 = 1 << 2;
const RED_LSB: u8 = 1 << 4;
const GREEN_LSB: u8 = 1 << 5;
const BLUE_LSB: u8 = 1 << 6;

const LATCH: u8 = 1 << 4;
const PMOD_CLK: u8 = 1 << 5;
const PMOD_DATA: u8 = 1 << 6;

#[inline]
fn set_mask(value: &mut u8, mask: u8, on: bool) {
    if on {
        *value |= mask;
    } else {
        *value &= !mask;
    }
}

/// A 2-bit-per-channel color as carried on the output bus.
///
/// Each channel holds an intensity in `0..=3`; higher bits are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb222 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb222 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(3, 3, 3);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r & 3,
            g: g & 3,
            b: b & 3,
        }
    }

    /// Scale each 2-bit channel to 8 bits: {0,1,2,3} -> {0,85,170,255}.
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        (self.r * 85, self.g * 85, self.b * 85)
    }
}

/// Value of the model's 8-bit output bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputBus(pub u8);

impl OutputBus {
    /// Assemble a bus value from sync levels and a color.
    pub fn pack(hsync: bool, vsync: bool, color: Rgb222) -> Self {
        let mut v = 0u8;
        set_mask(&mut v, HSYNC, hsync);
        set_mask(&mut v, VSYNC, vsync);
        set_mask(&mut v, RED_MSB, color.r & 2 != 0);
        set_mask(&mut v, RED_LSB, color.r & 1 != 0);
        set_mask(&mut v, GREEN_MSB, color.g & 2 != 0);
        set_mask(&mut v, GREEN_LSB, color.g & 1 != 0);
        set_mask(&mut v, BLUE_MSB, color.b & 2 != 0);
        set_mask(&mut v, BLUE_LSB, color.b & 1 != 0);
        Self(v)
    }

    #[inline]
    pub fn hsync(self) -> bool {
        self.0 & HSYNC != 0
    }

    #[inline]
    pub fn vsync(self) -> bool {
        self.0 & VSYNC != 0
    }

    /// Decode the six color lines. The low nibble carries the msb of each
    /// channel, the high nibble the lsb.
    #[inline]
    pub fn color(self) -> Rgb222 {
        let v = self.0;
        Rgb222 {
            r: ((v & RED_MSB) << 1) | ((v & RED_LSB) >> 4),
            g: (v & GREEN_MSB) | ((v & GREEN_LSB) >> 5),
            b: ((v & BLUE_MSB) >> 1) | ((v & BLUE_LSB) >> 6),
        }
    }
}

/// Value driven onto the model's 8-bit input bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputBus(pub u8);

impl InputBus {
    pub const IDLE: Self = Self(0);

    pub fn new(clock: bool, data: bool, latch: bool) -> Self {
        let mut bus = Self::IDLE;
        bus.set_clock(clock);
        bus.set_data(data);
        bus.set_latch(latch);
        bus
    }

    #[inline]
    pub fn latch(self) -> bool {
        self.0 & LATCH != 0
    }

    #[inline]
    pub fn clock(self) -> bool {
        self.0 & PMOD_CLK != 0
    }

    #[inline]
    pub fn data(self) -> bool {
        self.0 & PMOD_DATA != 0
    }

    pub fn set_latch(&mut self, on: bool) {
        set_mask(&mut self.0, LATCH, on);
    }

    pub fn set_clock(&mut self, on: bool) {
        set_mask(&mut self.0, PMOD_CLK, on);
    }

    pub fn set_data(&mut self, on: bool) {
        set_mask(&mut self.0, PMOD_DATA, on);
    }
}
