use macroquad::prelude::*;
use crate::application::AppState;
use crate::domain::Style;

/// Discrete actions triggered by a key press
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    ToggleGrid,
    Clear,
    SelectStyle(Style),
}

/// Key table: several keys may map to the same command
const KEY_BINDINGS: [(KeyCode, Command); 12] = [
    (KeyCode::G, Command::ToggleGrid),
    (KeyCode::C, Command::Clear),
    (KeyCode::Backspace, Command::Clear),
    (KeyCode::Delete, Command::Clear),
    (KeyCode::Key1, Command::SelectStyle(Style::Round)),
    (KeyCode::Key2, Command::SelectStyle(Style::RoundTwist)),
    (KeyCode::Key3, Command::SelectStyle(Style::Sharp)),
    (KeyCode::Key4, Command::SelectStyle(Style::SharpTwist)),
    (KeyCode::Kp1, Command::SelectStyle(Style::Round)),
    (KeyCode::Kp2, Command::SelectStyle(Style::RoundTwist)),
    (KeyCode::Kp3, Command::SelectStyle(Style::Sharp)),
    (KeyCode::Kp4, Command::SelectStyle(Style::SharpTwist)),
];

/// Look up the command bound to a key
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, command)| command)
}

/// Everything the controller needs from the input devices for one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: (f32, f32),
    pub pointer_down: bool,
    pub erase_held: bool,
    pub commands: Vec<Command>,
}

impl FrameInput {
    /// Sample mouse and keyboard state from macroquad.
    /// Keys pressed in the same frame arrive in no particular order.
    pub fn capture() -> Self {
        let commands = get_keys_pressed().into_iter().filter_map(command_for_key).collect();

        Self {
            pointer: mouse_position(),
            pointer_down: is_mouse_button_down(MouseButton::Left),
            erase_held: is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt),
            commands,
        }
    }
}

/// Apply a single command to the state
pub fn apply_command(state: AppState, command: Command) -> AppState {
    match command {
        Command::ToggleGrid => state.toggle_grid(),
        Command::Clear => state.clear(),
        Command::SelectStyle(style) => state.select_style(style),
    }
}

/// Apply one frame of input: commands first, then the pointer drag
pub fn apply_frame(state: AppState, input: &FrameInput) -> AppState {
    let mut state = input.commands.iter().fold(state, |s, &command| apply_command(s, command));

    if input.pointer_down {
        state.paint_at(input.pointer.0, input.pointer.1, input.erase_held);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use proptest::prelude::*;

    const TILE: f32 = 100.0;

    fn drag(x: f32, y: f32) -> FrameInput {
        FrameInput {
            pointer: (x, y),
            pointer_down: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key(KeyCode::G), Some(Command::ToggleGrid));
        for key in [KeyCode::C, KeyCode::Backspace, KeyCode::Delete] {
            assert_eq!(command_for_key(key), Some(Command::Clear));
        }
        assert_eq!(command_for_key(KeyCode::Key1), Some(Command::SelectStyle(Style::Round)));
        assert_eq!(command_for_key(KeyCode::Key4), Some(Command::SelectStyle(Style::SharpTwist)));
        assert_eq!(command_for_key(KeyCode::Kp4), Some(Command::SelectStyle(Style::SharpTwist)));
        assert_eq!(command_for_key(KeyCode::Space), None);
    }

    #[test]
    fn test_every_style_has_a_digit_key() {
        let digit_keys = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];
        for style in Style::ALL {
            let key = digit_keys[(style.select_digit() - 1) as usize];
            assert_eq!(command_for_key(key), Some(Command::SelectStyle(style)));
        }
    }

    #[test]
    fn test_idle_frame_changes_nothing() {
        let state = AppState::new(300.0, 300.0, TILE);
        let after = apply_frame(state.clone(), &FrameInput::default());
        assert_eq!(after.grid, state.grid);
        assert_eq!(after.active_style, state.active_style);
    }

    #[test]
    fn test_drag_paints_and_erase_modifier_erases() {
        let state = apply_frame(AppState::new(300.0, 300.0, TILE), &drag(150.0, 150.0));
        assert_eq!(state.grid.cell_at(2, 2), Cell::Module(Style::Round));

        let erase = FrameInput { erase_held: true, ..drag(150.0, 150.0) };
        let state = apply_frame(state, &erase);
        assert_eq!(state.grid.cell_at(2, 2), Cell::Empty);
    }

    #[test]
    fn test_pointer_up_does_not_paint() {
        let input = FrameInput { pointer_down: false, ..drag(150.0, 150.0) };
        let state = apply_frame(AppState::new(300.0, 300.0, TILE), &input);
        assert_eq!(state.grid.filled_count(), 0);
    }

    #[test]
    fn test_style_switch_applies_to_same_frame_paint() {
        let input = FrameInput {
            commands: vec![Command::SelectStyle(Style::Sharp)],
            ..drag(50.0, 50.0)
        };
        let state = apply_frame(AppState::new(300.0, 300.0, TILE), &input);
        assert_eq!(state.active_style, Style::Sharp);
        assert_eq!(state.grid.cell_at(1, 1), Cell::Module(Style::Sharp));
    }

    #[test]
    fn test_clear_command() {
        let mut state = AppState::new(300.0, 300.0, TILE);
        for (x, y) in [(50.0, 50.0), (150.0, 50.0), (250.0, 250.0)] {
            state = apply_frame(state, &drag(x, y));
        }
        assert_eq!(state.grid.filled_count(), 3);

        let clear = FrameInput { commands: vec![Command::Clear], ..Default::default() };
        let state = apply_frame(state, &clear);
        assert!(state.grid.iter_cells().all(|(_, _, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_toggle_grid_twice_in_one_frame() {
        let input = FrameInput {
            commands: vec![Command::ToggleGrid, Command::ToggleGrid],
            ..Default::default()
        };
        let state = apply_frame(AppState::new(300.0, 300.0, TILE), &input);
        assert!(state.show_grid);
    }

    fn arb_frame() -> impl Strategy<Value = FrameInput> {
        let command = prop_oneof![
            Just(Command::ToggleGrid),
            Just(Command::Clear),
            (0usize..4).prop_map(|i| Command::SelectStyle(Style::ALL[i])),
        ];
        (
            (-1000.0f32..2000.0, -1000.0f32..2000.0),
            any::<bool>(),
            any::<bool>(),
            proptest::collection::vec(command, 0..3),
        )
            .prop_map(|(pointer, pointer_down, erase_held, commands)| FrameInput {
                pointer,
                pointer_down,
                erase_held,
                commands,
            })
    }

    proptest! {
        #[test]
        fn prop_border_never_painted(frames in proptest::collection::vec(arb_frame(), 1..60)) {
            let mut state = AppState::new(500.0, 400.0, TILE);
            for frame in &frames {
                state = apply_frame(state, frame);
            }
            for (gx, gy, cell) in state.grid.iter_cells() {
                if !state.grid.is_interior(gx, gy) {
                    prop_assert_eq!(cell, Cell::Empty);
                }
            }
        }

        #[test]
        fn prop_repeated_drag_is_idempotent(x in 0.0f32..500.0, y in 0.0f32..400.0) {
            let once = apply_frame(AppState::new(500.0, 400.0, TILE), &drag(x, y));
            let twice = apply_frame(once.clone(), &drag(x, y));
            prop_assert_eq!(once.grid, twice.grid);
        }
    }
}
