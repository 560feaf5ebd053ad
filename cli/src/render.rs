use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use minesweep_core::{Field, FieldState};

const HELP: &str = "wasd/arrows move  f flag  space open  r reset  q quit";

/// Draws the whole field from the top-left corner of the screen.
pub fn render(field: &Field, out: &mut impl Write) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    // raw mode does not translate \n into a carriage return
    for line in draw_lines(field) {
        write!(out, "{line}\r\n")?;
    }
    out.flush()
}

/// Status line, one line per row, then the key help.
pub fn draw_lines(field: &Field) -> Vec<String> {
    let mut lines = Vec::with_capacity(usize::from(field.rows()) + 2);
    lines.push(status(field));

    let cursor = field.cursor();
    let mut row = String::with_capacity(usize::from(field.columns()) * 3);
    for pos in field.positions() {
        let Some(tile) = field.get(pos) else {
            continue;
        };
        let (open, close) = if pos == cursor { ('[', ']') } else { (' ', ' ') };
        row.push(open);
        row.push(tile.label());
        row.push(close);
        if pos.0 + 1 == field.columns() {
            lines.push(std::mem::take(&mut row));
        }
    }

    lines.push(HELP.to_owned());
    lines
}

fn status(field: &Field) -> String {
    match field.state() {
        FieldState::Won => "You win!".to_owned(),
        FieldState::Lost => "You lose!".to_owned(),
        FieldState::Uninitialized | FieldState::Playing => {
            format!("Mines left: {}", field.mines_left())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweep_core::{FieldConfig, FieldEvent, PresetMinePlacer};

    fn field(mines: &[(u16, u16)]) -> Field {
        let config = FieldConfig::new(3, 2, 17, false);
        Field::with_placer(config, PresetMinePlacer::new(mines.iter().copied())).unwrap()
    }

    #[test]
    fn fresh_field_draws_closed_tiles_and_cursor() {
        let lines = draw_lines(&field(&[(2, 1)]));

        assert_eq!(lines[0], "Mines left: 1");
        assert_eq!(lines[1], "[.] .  . ");
        assert_eq!(lines[2], " .  .  . ");
        assert_eq!(lines[3], HELP);
    }

    #[test]
    fn draws_numbers_flags_and_end_state() {
        let mut field = field(&[(2, 1)]);
        field.push_event(FieldEvent::Activate);
        field.move_cursor((1, 1));
        field.push_event(FieldEvent::Activate);
        field.move_cursor((1, 0));
        field.push_event(FieldEvent::ToggleFlag);

        let lines = draw_lines(&field);
        assert_eq!(lines[0], "Mines left: 0");
        assert_eq!(lines[1], " 0  .  . ");
        assert_eq!(lines[2], " .  1 [F]");

        field.push_event(FieldEvent::ToggleFlag);
        field.push_event(FieldEvent::Activate);
        let lines = draw_lines(&field);
        assert_eq!(lines[0], "You lose!");
        assert_eq!(lines[2], " .  1 [*]");
    }

    #[test]
    fn render_writes_every_line() {
        let field = field(&[(0, 1)]);
        let mut out = Vec::new();

        render(&field, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Mines left: 1\r\n"));
        assert!(text.contains("[.] .  . \r\n"));
        assert!(text.ends_with(&format!("{HELP}\r\n")));
    }
}
