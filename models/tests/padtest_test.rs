use ttsim_core::core::Machine;
use ttsim_core::device::gamepad::{Button, ButtonSnapshot, Player, button_id};
use ttsim_core::harness::Harness;
use ttsim_models::Clocked;
use ttsim_models::padtest::{
    BACKGROUND, BOX_SIZE, PRESSED, PadTest, RELEASED, ROW_HEIGHT, box_origin,
};

fn box_center(player: Player, button: Button) -> (usize, usize) {
    let (x, y) = box_origin(player, button);
    ((x + BOX_SIZE / 2) as usize, (y + ROW_HEIGHT / 2) as usize)
}

#[test]
fn test_receiver_sees_harness_pads() {
    let mut sys = Harness::new(Clocked::new(PadTest::new()));
    let pads = [
        ButtonSnapshot::default().with(Button::Start).with(Button::Up),
        ButtonSnapshot::default().with(Button::A),
    ];
    sys.set_pads(pads);
    sys.run_frame();
    assert_eq!(sys.model().design().receiver().pads(), pads);
}

#[test]
fn test_pressed_buttons_light_up() {
    let mut sys = Harness::new(Clocked::new(PadTest::new()));
    sys.set_input(button_id(Player::One, Button::Start), true);
    sys.set_input(button_id(Player::Two, Button::A), true);
    sys.run_frame();
    sys.run_frame();

    let fb = sys.framebuffer();
    let (x, y) = box_center(Player::One, Button::Start);
    assert_eq!(fb.get(x, y), PRESSED[0].to_rgb888());
    let (x, y) = box_center(Player::Two, Button::A);
    assert_eq!(fb.get(x, y), PRESSED[1].to_rgb888());

    let (x, y) = box_center(Player::One, Button::B);
    assert_eq!(fb.get(x, y), RELEASED.to_rgb888());
    let (x, y) = box_center(Player::Two, Button::Start);
    assert_eq!(fb.get(x, y), RELEASED.to_rgb888());

    assert_eq!(fb.get(600, 50), BACKGROUND.to_rgb888());
}

#[test]
fn test_release_clears_box() {
    let mut sys = Harness::new(Clocked::new(PadTest::new()));
    let id = button_id(Player::One, Button::Left);
    sys.set_input(id, true);
    sys.run_frame();
    sys.run_frame();
    let (x, y) = box_center(Player::One, Button::Left);
    assert_eq!(sys.framebuffer().get(x, y), PRESSED[0].to_rgb888());

    sys.set_input(id, false);
    sys.run_frame();
    assert_eq!(sys.framebuffer().get(x, y), RELEASED.to_rgb888());
}

#[test]
fn test_reset_clears_latched_buttons() {
    let mut sys = Harness::new(Clocked::new(PadTest::new()));
    sys.set_input(button_id(Player::Two, Button::R), true);
    sys.run_frame();
    assert!(sys.model().design().receiver().pads()[1].is_pressed(Button::R));

    sys.reset();
    assert_eq!(sys.model().design().receiver().word(), 0);
}
