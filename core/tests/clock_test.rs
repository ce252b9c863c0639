mod common;

use common::{PinEvent, RecordingModel};
use ttsim_core::core::{InputBus, OutputBus};
use ttsim_core::device::clock::{Edge, advance_cycle, drive_edge};

#[test]
fn test_cycle_pin_sequence_without_reset() {
    let mut model = RecordingModel::new(0x5A);
    let out = advance_cycle(&mut model, false, InputBus(0x30));

    assert_eq!(out, OutputBus(0x5A));
    assert_eq!(
        model.events,
        vec![
            PinEvent::Clk(false),
            PinEvent::Eval {
                clk: false,
                rst_n: true,
                ui_in: 0
            },
            PinEvent::UiIn(0x30),
            PinEvent::Clk(true),
            PinEvent::Eval {
                clk: true,
                rst_n: true,
                ui_in: 0x30
            },
            PinEvent::UiIn(0x30),
        ]
    );
}

#[test]
fn test_cycle_pin_sequence_with_reset() {
    let mut model = RecordingModel::new(0);
    advance_cycle(&mut model, true, InputBus(0x10));

    assert_eq!(
        model.events,
        vec![
            PinEvent::Clk(false),
            PinEvent::Eval {
                clk: false,
                rst_n: true,
                ui_in: 0
            },
            PinEvent::RstN(false),
            PinEvent::UiIn(0x10),
            PinEvent::Clk(true),
            PinEvent::Eval {
                clk: true,
                rst_n: false,
                ui_in: 0x10
            },
            PinEvent::RstN(true),
            PinEvent::UiIn(0x10),
        ]
    );
}

#[test]
fn test_two_evaluations_per_cycle() {
    let mut model = RecordingModel::new(0);
    for i in 0..10 {
        advance_cycle(&mut model, i % 3 == 0, InputBus(i));
    }
    assert_eq!(model.eval_count(), 20);
}

#[test]
fn test_falling_edge_leaves_inputs_alone() {
    let mut model = RecordingModel::new(0);
    drive_edge(&mut model, Edge::Falling, true, InputBus(0xFF));
    assert_eq!(
        model.events,
        vec![
            PinEvent::Clk(false),
            PinEvent::Eval {
                clk: false,
                rst_n: true,
                ui_in: 0
            },
        ]
    );
}

#[test]
fn test_reset_released_before_next_cycle() {
    let mut model = RecordingModel::new(0);
    advance_cycle(&mut model, true, InputBus::IDLE);
    model.events.clear();
    advance_cycle(&mut model, false, InputBus::IDLE);

    // The falling edge of the following cycle already sees reset released.
    assert_eq!(
        model.events[1],
        PinEvent::Eval {
            clk: false,
            rst_n: true,
            ui_in: 0
        }
    );
}
