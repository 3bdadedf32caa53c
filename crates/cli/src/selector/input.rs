use std::io::{BufRead, Write};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use instance_picker_core::error::Result;
use instance_picker_core::selector::Key;

use super::types::HostInput;

/// Decodes a terminal event into something the selector handles.
#[must_use]
pub fn translate_event(event: Event) -> Option<HostInput> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            // Some platforms report releases as well as presses
            if kind == KeyEventKind::Release {
                return None;
            }
            translate_key(code, modifiers).map(HostInput::Key)
        }
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers,
        }) if modifiers == KeyModifiers::NONE => match kind {
            MouseEventKind::Down(MouseButton::Left) => Some(HostInput::Click { column, row }),
            MouseEventKind::ScrollDown => Some(HostInput::Key(Key::Down)),
            MouseEventKind::ScrollUp => Some(HostInput::Key(Key::Up)),
            _ => None,
        },
        Event::Resize(width, height) => Some(HostInput::Resize { width, height }),
        _ => None,
    }
}

/// Decodes a key press. Chords other than Ctrl-C are dropped.
#[must_use]
pub fn translate_key(code: KeyCode, modifiers: KeyModifiers) -> Option<Key> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Interrupt),
        KeyCode::Char(_) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

/// Asks a yes/no question, defaulting to no.
pub fn confirm<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, question: &str) -> Result<bool> {
    loop {
        write!(writer, "{question} (y/N): ")?;
        writer.flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            // EOF
            return Ok(false);
        }

        let lowercase_input = input.trim().to_lowercase();

        if lowercase_input.as_str() == "n" || lowercase_input.is_empty() {
            return Ok(false);
        }

        if lowercase_input.as_str() == "y" {
            return Ok(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (bool, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut writer = Vec::new();
        let confirmed = confirm(&mut reader, &mut writer, "Continue?").unwrap();
        (confirmed, String::from_utf8(writer).unwrap())
    }

    #[test]
    fn test_confirm_yes() {
        let (confirmed, prompt) = answer("y\n");
        assert!(confirmed);
        assert_eq!(prompt, "Continue? (y/N): ");
    }

    #[test]
    fn test_confirm_defaults_to_no() {
        assert!(!answer("\n").0);
        assert!(!answer("").0);
        assert!(!answer("N\n").0);
    }

    #[test]
    fn test_confirm_reprompts_on_garbage() {
        let (confirmed, prompt) = answer("maybe\nY\n");
        assert!(confirmed);
        assert_eq!(prompt.matches("Continue?").count(), 2);
    }
}
