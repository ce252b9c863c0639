/// Pin-level interface of a cycle-evaluated hardware model.
///
/// The model is a black box: the harness only writes input pins, calls
/// [`eval`](HardwareModel::eval) to settle the logic, and reads the output
/// bus. Sequential state inside the model advances when `eval` observes a
/// rising edge on the clock pin, so every logical clock cycle takes exactly
/// two `eval` calls (one per edge).
pub trait HardwareModel {
    /// Drive the clock pin.
    fn set_clk(&mut self, high: bool);

    /// Drive the active-low reset pin (`false` holds the design in reset).
    fn set_rst_n(&mut self, high: bool);

    /// Drive the 8-bit input bus.
    fn set_ui_in(&mut self, value: u8);

    /// Read the 8-bit output bus as settled by the last `eval`.
    fn uo_out(&self) -> u8;

    /// Settle the model's logic after pin writes.
    fn eval(&mut self);

    /// Called once when the harness is done with the model.
    fn finish(&mut self) {}
}

impl<M: HardwareModel + ?Sized> HardwareModel for Box<M> {
    fn set_clk(&mut self, high: bool) {
        (**self).set_clk(high)
    }

    fn set_rst_n(&mut self, high: bool) {
        (**self).set_rst_n(high)
    }

    fn set_ui_in(&mut self, value: u8) {
        (**self).set_ui_in(value)
    }

    fn uo_out(&self) -> u8 {
        (**self).uo_out()
    }

    fn eval(&mut self) {
        (**self).eval()
    }

    fn finish(&mut self) {
        (**self).finish()
    }
}
