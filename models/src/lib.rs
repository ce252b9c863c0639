pub mod clocked;
pub mod colorbars;
pub mod padtest;
pub mod pmod_rx;
pub mod registry;
pub mod vga_gen;

pub use clocked::{Clocked, Sequential};
pub use colorbars::ColorBars;
pub use padtest::PadTest;
pub use pmod_rx::GamepadReceiver;
pub use vga_gen::VgaTimingGenerator;
