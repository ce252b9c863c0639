//! Clock-edge driver: one logical cycle is two evaluations of the model.
use crate::core::model::HardwareModel;
use crate::core::pins::{InputBus, OutputBus};

/// The two phases of a clock cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Clock driven low and the model settled. Reset and input pins are
    /// untouched, so the model sees the values left by the previous cycle.
    Falling,
    /// Clock driven high and the model settled, with reset (if requested)
    /// and the new input bus value applied beforehand.
    Rising,
}

/// Drive one clock edge.
///
/// Pre: no pin writes have happened since the previous edge.
/// Post: the model has been evaluated exactly once with the clock at the
/// edge's level. After `Rising`, the reset pin is released again (without
/// another evaluation) and the input bus is re-driven.
pub fn drive_edge<M: HardwareModel + ?Sized>(
    model: &mut M,
    edge: Edge,
    reset_active: bool,
    input: InputBus,
) {
    match edge {
        Edge::Falling => {
            model.set_clk(false);
            model.eval();
        }
        Edge::Rising => {
            if reset_active {
                model.set_rst_n(false);
            }
            model.set_ui_in(input.0);
            model.set_clk(true);
            model.eval();
            if reset_active {
                model.set_rst_n(true);
            }
            model.set_ui_in(input.0);
        }
    }
}

/// Run one full clock cycle and return the settled output bus.
#[inline]
pub fn advance_cycle<M: HardwareModel + ?Sized>(
    model: &mut M,
    reset_active: bool,
    input: InputBus,
) -> OutputBus {
    drive_edge(model, Edge::Falling, reset_active, input);
    drive_edge(model, Edge::Rising, reset_active, input);
    OutputBus(model.uo_out())
}
