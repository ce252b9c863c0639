pub mod clock;
pub mod compositor;
pub mod framebuffer;
pub mod gamepad;
pub mod raster;

pub use clock::{Edge, advance_cycle};
pub use framebuffer::FrameBuffer;
pub use gamepad::{Button, ButtonSnapshot, GamepadPmod, Player};
pub use raster::{RasterTracker, SyncPolarity, VGA_640X480, VgaTiming};
