//! Raster position tracker: recovers (h, v) from the sync lines alone.
//!
//! There is no blanking signal on the bus. The tracker counts cycles along
//! a line, wraps at the end of the blanking interval, and snaps back to the
//! blanking origin whenever both sync lines sit at the active level.
use crate::core::pins::OutputBus;

/// VGA line and frame timing, in pixels and lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VgaTiming {
    pub h_active: i32,
    pub h_front_porch: i32,
    pub h_sync_pulse: i32,
    pub h_back_porch: i32,

    pub v_active: i32,
    pub v_front_porch: i32,
    pub v_sync_pulse: i32,
    pub v_back_porch: i32,
}

/// 640x480 @ 60 Hz (25.175 MHz pixel clock).
pub const VGA_640X480: VgaTiming = VgaTiming {
    h_active: 640,
    h_front_porch: 16,
    h_sync_pulse: 96,
    h_back_porch: 48,

    v_active: 480,
    v_front_porch: 11,
    v_sync_pulse: 2,
    v_back_porch: 31,
};

impl VgaTiming {
    pub const fn h_total(&self) -> i32 {
        self.h_active + self.h_front_porch + self.h_sync_pulse + self.h_back_porch
    }

    pub const fn v_total(&self) -> i32 {
        self.v_active + self.v_front_porch + self.v_sync_pulse + self.v_back_porch
    }

    /// Clock cycles in one complete frame.
    pub const fn frame_cycles(&self) -> u64 {
        self.h_total() as u64 * self.v_total() as u64
    }

    /// Horizontal count at which a line wraps back to the back porch.
    pub const fn h_wrap(&self) -> i32 {
        self.h_active + self.h_front_porch + self.h_sync_pulse
    }

    /// Raster origin a sync event resets to.
    pub const fn sync_origin(&self) -> (i32, i32) {
        (-self.h_back_porch, -(self.v_back_porch + self.v_sync_pulse))
    }
}

impl Default for VgaTiming {
    fn default() -> Self {
        VGA_640X480
    }
}

/// Level the decoder treats as "sync asserted".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncPolarity {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl SyncPolarity {
    pub fn toggled(self) -> Self {
        match self {
            SyncPolarity::ActiveHigh => SyncPolarity::ActiveLow,
            SyncPolarity::ActiveLow => SyncPolarity::ActiveHigh,
        }
    }

    #[inline]
    pub fn is_active(self, level: bool) -> bool {
        level == (self == SyncPolarity::ActiveHigh)
    }
}

/// Per-cycle raster state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterTracker {
    timing: VgaTiming,
    h: i32,
    v: i32,
}

impl RasterTracker {
    /// Start at (0, 0); the first sync event aligns the counters.
    pub fn new(timing: VgaTiming) -> Self {
        Self { timing, h: 0, v: 0 }
    }

    pub fn timing(&self) -> &VgaTiming {
        &self.timing
    }

    pub fn position(&self) -> (i32, i32) {
        (self.h, self.v)
    }

    /// First half of a cycle: resynchronise if both sync lines are active.
    ///
    /// Level-sensitive. A signal that holds both lines active for several
    /// cycles resets the raster on each of them.
    #[inline]
    pub fn sync(&mut self, out: OutputBus, polarity: SyncPolarity) -> bool {
        if polarity.is_active(out.hsync()) && polarity.is_active(out.vsync()) {
            (self.h, self.v) = self.timing.sync_origin();
            true
        } else {
            false
        }
    }

    /// Second half of a cycle, after the pixel at the current position has
    /// been consumed.
    #[inline]
    pub fn advance(&mut self) {
        self.h += 1;
        if self.h >= self.timing.h_wrap() {
            self.h = -self.timing.h_back_porch;
            self.v += 1;
        }
    }

    /// Framebuffer coordinate of the current position, if it is inside the
    /// active window.
    #[inline]
    pub fn active_pixel(&self) -> Option<(usize, usize)> {
        let t = &self.timing;
        if (0..t.h_active).contains(&self.h) && (0..t.v_active).contains(&self.v) {
            Some((self.h as usize, self.v as usize))
        } else {
            None
        }
    }
}
