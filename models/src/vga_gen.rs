use ttsim_core::core::{OutputBus, Rgb222};
use ttsim_core::device::raster::{SyncPolarity, VGA_640X480, VgaTiming};

/// Horizontal/vertical counters of a VGA timing generator.
///
/// Both counters start at the top-left active pixel. A line is `h_total`
/// pixels (active, front porch, sync, back porch); a frame is `v_total`
/// lines in the same order.
#[derive(Clone, Debug)]
pub struct VgaTimingGenerator {
    timing: VgaTiming,
    polarity: SyncPolarity,
    x: i32,
    y: i32,
}

impl VgaTimingGenerator {
    pub fn new(polarity: SyncPolarity) -> Self {
        Self::with_timing(VGA_640X480, polarity)
    }

    pub fn with_timing(timing: VgaTiming, polarity: SyncPolarity) -> Self {
        Self {
            timing,
            polarity,
            x: 0,
            y: 0,
        }
    }

    pub fn reset(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Pixel coordinate if the counters are in the active area.
    pub fn active(&self) -> Option<(u32, u32)> {
        if self.x < self.timing.h_active && self.y < self.timing.v_active {
            Some((self.x as u32, self.y as u32))
        } else {
            None
        }
    }

    pub fn hsync_active(&self) -> bool {
        let start = self.timing.h_active + self.timing.h_front_porch;
        (start..start + self.timing.h_sync_pulse).contains(&self.x)
    }

    pub fn vsync_active(&self) -> bool {
        let start = self.timing.v_active + self.timing.v_front_porch;
        (start..start + self.timing.v_sync_pulse).contains(&self.y)
    }

    /// Output bus for the current position. Color is forced to black
    /// outside the active area.
    pub fn output(&self, color: Rgb222) -> OutputBus {
        let level = |active: bool| active == (self.polarity == SyncPolarity::ActiveHigh);
        let color = if self.active().is_some() {
            color
        } else {
            Rgb222::BLACK
        };
        OutputBus::pack(
            level(self.hsync_active()),
            level(self.vsync_active()),
            color,
        )
    }

    pub fn tick(&mut self) {
        self.x += 1;
        if self.x == self.timing.h_total() {
            self.x = 0;
            self.y += 1;
            if self.y == self.timing.v_total() {
                self.y = 0;
            }
        }
    }
}
