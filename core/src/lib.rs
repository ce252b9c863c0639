pub mod core;
pub mod device;
pub mod harness;

pub use harness::Harness;

pub mod prelude {
    pub use crate::core::machine::{InputButton, Machine};
    pub use crate::core::{ControlSource, ControlState, HardwareModel, InputBus, OutputBus, Rgb222};
    pub use crate::device::{Button, ButtonSnapshot, Player, SyncPolarity, VgaTiming};
    pub use crate::harness::Harness;
}
