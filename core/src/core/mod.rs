pub mod control;
pub mod machine;
pub mod model;
pub mod pins;

pub use control::{ControlSource, ControlState};
pub use machine::{InputButton, Machine};
pub use model::HardwareModel;
pub use pins::{InputBus, OutputBus, Rgb222};
