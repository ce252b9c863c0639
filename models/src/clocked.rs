use ttsim_core::core::HardwareModel;

/// A synchronous design described at the register-transfer level.
///
/// `posedge` is the body of an `always @(posedge clk)` block: it sees the
/// input pins as sampled on the edge and updates registers. `uo_out` is the
/// combinational view of the output bus.
pub trait Sequential {
    fn posedge(&mut self, rst_n: bool, ui_in: u8);
    fn uo_out(&self) -> u8;
}

/// Pin-level wrapper turning a [`Sequential`] design into a
/// [`HardwareModel`]. `eval` detects rising clock edges.
pub struct Clocked<T> {
    design: T,
    clk: bool,
    prev_clk: bool,
    rst_n: bool,
    ui_in: u8,
    out: u8,
    edges: u64,
}

impl<T: Sequential> Clocked<T> {
    pub fn new(design: T) -> Self {
        let out = design.uo_out();
        Self {
            design,
            clk: false,
            prev_clk: false,
            rst_n: true,
            ui_in: 0,
            out,
            edges: 0,
        }
    }

    pub fn design(&self) -> &T {
        &self.design
    }

    pub fn design_mut(&mut self) -> &mut T {
        &mut self.design
    }

    /// Rising edges seen so far.
    pub fn edges(&self) -> u64 {
        self.edges
    }
}

impl<T: Sequential> HardwareModel for Clocked<T> {
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
            self.design.posedge(self.rst_n, self.ui_in);
            self.edges += 1;
        }
        self.prev_clk = self.clk;
        self.out = self.design.uo_out();
    }

    fn finish(&mut self) {
        log::debug!("model finished after {} clock edges", self.edges);
    }
}
