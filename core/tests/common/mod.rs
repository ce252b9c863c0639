#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use ttsim_core::core::HardwareModel;

/// One pin write or evaluation, in call order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinEvent {
    Clk(bool),
    RstN(bool),
    UiIn(u8),
    Eval { clk: bool, rst_n: bool, ui_in: u8 },
}

/// Records every pin interaction; its output bus is a fixed value.
pub struct RecordingModel {
    pub events: Vec<PinEvent>,
    pub out: u8,
    clk: bool,
    rst_n: bool,
    ui_in: u8,
}

impl RecordingModel {
    pub fn new(out: u8) -> Self {
        Self {
            events: Vec::new(),
            out,
            clk: false,
            rst_n: true,
            ui_in: 0,
        }
    }

    pub fn eval_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PinEvent::Eval { .. }))
            .count()
    }
}

impl HardwareModel for RecordingModel {
    fn set_clk(&mut self, high: bool) {
        self.clk = high;
        self.events.push(PinEvent::Clk(high));
    }

    fn set_rst_n(&mut self, high: bool) {
        self.rst_n = high;
        self.events.push(PinEvent::RstN(high));
    }

    fn set_ui_in(&mut self, value: u8) {
        self.ui_in = value;
        self.events.push(PinEvent::UiIn(value));
    }

    fn uo_out(&self) -> u8 {
        self.out
    }

    fn eval(&mut self) {
        self.events.push(PinEvent::Eval {
            clk: self.clk,
            rst_n: self.rst_n,
            ui_in: self.ui_in,
        });
    }
}

/// Plays back a looping list of output bus values, one per rising clock
/// edge taken out of reset. Edges taken in reset drive the bus low and do
/// not advance the script.
pub struct ScriptedModel {
    script: Vec<u8>,
    pos: usize,
    out: u8,
    clk: bool,
    prev_clk: bool,
    rst_n: bool,
    ui_in: u8,
    /// `ui_in` as sampled at each rising edge.
    pub seen_ui_in: Vec<u8>,
    /// Rising edges that saw the reset pin low.
    pub reset_edges: usize,
    /// Rising edges that saw the reset pin high.
    pub run_edges: usize,
    pub finished: Rc<Cell<bool>>,
}

impl ScriptedModel {
    pub fn new(script: Vec<u8>) -> Self {
        assert!(!script.is_empty());
        Self {
            script,
            pos: 0,
            out: 0,
            clk: false,
            prev_clk: false,
            rst_n: true,
            ui_in: 0,
            seen_ui_in: Vec::new(),
            reset_edges: 0,
            run_edges: 0,
            finished: Rc::new(Cell::new(false)),
        }
    }
}

impl HardwareModel for ScriptedModel {
    fn set_clk(&mut self, high: bool) {
        self.clk = high;
    }

    fn set_rst_n(&mut self, high: bool) {
        self.rst_n = high;
    }

    fn set_ui_in(&mut self, value: u8) {
        self.ui_in = value;
    }

    fn uo_out(&self) -> u8 {
        self.out
    }

    fn eval(&mut self) {
        if self.clk && !self.prev_clk {
            self.seen_ui_in.push(self.ui_in);
            if self.rst_n {
                self.out = self.script[self.pos % self.script.len()];
                self.pos += 1;
                self.run_edges += 1;
            } else {
                self.out = 0;
                self.reset_edges += 1;
            }
        }
        self.prev_clk = self.clk;
    }

    fn finish(&mut self) {
        self.finished.set(true);
    }
}
