use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use minesweep_core::{Delta, FieldEvent};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move(Delta),
    Field(FieldEvent),
}

pub fn map_key(key: KeyEvent) -> Option<Command> {
    use Command::*;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    Some(match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Quit,
        KeyCode::Char('q') | KeyCode::Esc => Quit,
        KeyCode::Char('r') => Field(FieldEvent::Reset),
        KeyCode::Char('w') | KeyCode::Up => Move((0, -1)),
        KeyCode::Char('s') | KeyCode::Down => Move((0, 1)),
        KeyCode::Char('a') | KeyCode::Left => Move((-1, 0)),
        KeyCode::Char('d') | KeyCode::Right => Move((1, 0)),
        KeyCode::Char('f') => Field(FieldEvent::ToggleFlag),
        KeyCode::Char(' ') | KeyCode::Enter => Field(FieldEvent::Activate),
        _ => return None,
    })
}
