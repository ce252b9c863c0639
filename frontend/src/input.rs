use std::collections::{BTreeMap, HashMap};

use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use ttsim_core::core::machine::InputButton;
use ttsim_core::core::{ControlSource, ControlState};
use ttsim_core::device::gamepad::decode_button_id;

/// Maps SDL scancodes to machine button IDs.
pub struct KeyMap {
    map: HashMap<Scancode, u8>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a scancode to a machine button ID.
    pub fn bind(&mut self, scancode: Scancode, button_id: u8) {
        self.map.insert(scancode, button_id);
    }

    /// Look up the machine button ID for a scancode.
    pub fn get(&self, scancode: Scancode) -> Option<u8> {
        self.map.get(&scancode).copied()
    }

    /// Bind `scancode` to `button_id`, dropping the button's other keys.
    pub fn rebind(&mut self, scancode: Scancode, button_id: u8) {
        self.map.retain(|_, id| *id != button_id);
        self.bind(scancode, button_id);
    }

    /// Apply `[keys]` overrides (button name -> scancode name).
    ///
    /// Scancode names SDL does not recognize are skipped with a warning.
    pub fn apply_overrides(&mut self, keys: &BTreeMap<String, String>, buttons: &[InputButton]) {
        for (button_name, key_name) in keys {
            let Some(button) = buttons.iter().find(|b| b.name == button_name) else {
                log::warn!("no button named {button_name:?}, ignoring binding");
                continue;
            };
            let Some(scancode) = Scancode::from_name(key_name) else {
                log::warn!("unknown key {key_name:?} for {button_name}, ignoring binding");
                continue;
            };
            self.rebind(scancode, button.id);
            log::debug!("{button_name} bound to {key_name}");
        }
    }
}

/// Build a default key map for a machine's input buttons.
///
/// Player 1 gets the usual SNES-on-keyboard layout. Player 2 has no
/// default keys and is only reachable through config overrides.
pub fn default_key_map(buttons: &[InputButton]) -> KeyMap {
    let mut km = KeyMap::new();

    for button in buttons {
        let scancode = match button.name {
            "P1 B" => Some(Scancode::B),
            "P1 Y" => Some(Scancode::Y),
            "P1 Select" => Some(Scancode::Space),
            "P1 Start" => Some(Scancode::Return),
            "P1 Up" => Some(Scancode::Up),
            "P1 Down" => Some(Scancode::Down),
            "P1 Left" => Some(Scancode::Left),
            "P1 Right" => Some(Scancode::Right),
            "P1 A" => Some(Scancode::A),
            "P1 X" => Some(Scancode::X),
            "P1 L" => Some(Scancode::LShift),
            "P1 R" => Some(Scancode::RShift),
            _ => None,
        };

        if let Some(sc) = scancode {
            km.bind(sc, button.id);
        }
    }

    km
}

/// Frontend requests that do not reach the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontendAction {
    ToggleFullscreen,
    Screenshot,
}

/// Folds keyboard events into a [`ControlState`].
///
/// Hotkeys win over button bindings: Escape/Q quit, F toggles fullscreen,
/// P swaps sync polarity, R holds reset while down, F12 saves a screenshot.
pub struct ControlTracker {
    key_map: KeyMap,
    state: ControlState,
    actions: Vec<FrontendAction>,
}

impl ControlTracker {
    pub fn new(key_map: KeyMap) -> Self {
        Self {
            key_map,
            state: ControlState::default(),
            actions: Vec::new(),
        }
    }

    pub fn handle(&mut self, event: &Event) {
        match *event {
            Event::Quit { .. } => self.state.quit = true,

            Event::KeyDown {
                scancode: Some(sc),
                repeat,
                ..
            } => match sc {
                Scancode::Escape | Scancode::Q => self.state.quit = true,
                Scancode::R => self.state.reset_held = true,
                Scancode::F if !repeat => self.actions.push(FrontendAction::ToggleFullscreen),
                Scancode::P if !repeat => self.state.polarity_toggles += 1,
                Scancode::F12 if !repeat => self.actions.push(FrontendAction::Screenshot),
                _ => self.set_button(sc, true),
            },

            Event::KeyUp {
                scancode: Some(sc), ..
            } => match sc {
                Scancode::R => self.state.reset_held = false,
                _ => self.set_button(sc, false),
            },

            _ => {}
        }
    }

    fn set_button(&mut self, scancode: Scancode, pressed: bool) {
        let Some(id) = self.key_map.get(scancode) else {
            return;
        };
        if let Some((player, button)) = decode_button_id(id) {
            self.state.pad_mut(player).set(button, pressed);
        }
    }

    /// Current state; per-poll counters are cleared afterwards.
    pub fn take_state(&mut self) -> ControlState {
        let state = self.state;
        self.state.polarity_toggles = 0;
        state
    }

    pub fn drain_actions(&mut self) -> std::vec::Drain<'_, FrontendAction> {
        self.actions.drain(..)
    }
}

/// Keyboard [`ControlSource`] backed by the SDL event pump.
pub struct KeyboardControls {
    event_pump: EventPump,
    tracker: ControlTracker,
}

impl KeyboardControls {
    pub fn new(event_pump: EventPump, key_map: KeyMap) -> Self {
        Self {
            event_pump,
            tracker: ControlTracker::new(key_map),
        }
    }

    pub fn drain_actions(&mut self) -> std::vec::Drain<'_, FrontendAction> {
        self.tracker.drain_actions()
    }
}

impl ControlSource for KeyboardControls {
    fn poll(&mut self) -> ControlState {
        for event in self.event_pump.poll_iter() {
            self.tracker.handle(&event);
        }
        self.tracker.take_state()
    }
}
