//! Reading an API key without echoing it.
//!
//! The key is typed in raw mode and nothing is printed for it, so it never
//! shows on screen or in scrollback. When stdin is not a terminal the line
//! is read as-is.

use std::io::{BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use rustyline::error::ReadlineError;

/// Read one line after showing `prompt`, without echo.
///
/// Ctrl-C maps to `ReadlineError::Interrupted` and Ctrl-D on an empty line
/// to `ReadlineError::Eof`, as with rustyline.
pub fn read_secret(prompt: &str) -> Result<String, ReadlineError> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    if !std::io::stdin().is_terminal() {
        return read_piped();
    }

    let result = {
        let _raw = RawMode::enable()?;
        read_keys()
    };
    writeln!(stdout)?;
    result
}

fn read_piped() -> Result<String, ReadlineError> {
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(ReadlineError::Eof);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn read_keys() -> Result<String, ReadlineError> {
    let mut line = SecretLine::default();
    loop {
        if let Event::Key(key) = event::read()? {
            match line.apply(key) {
                Step::More => {}
                Step::Done => return Ok(line.into_inner()),
                Step::Interrupted => return Err(ReadlineError::Interrupted),
                Step::Eof => return Err(ReadlineError::Eof),
            }
        }
    }
}

/// Restores cooked mode on drop, including on error paths.
struct RawMode;

impl RawMode {
    fn enable() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    More,
    Done,
    Interrupted,
    Eof,
}

/// The hidden line being typed.
#[derive(Default)]
struct SecretLine {
    buf: String,
}

impl SecretLine {
    fn apply(&mut self, key: KeyEvent) -> Step {
        if key.kind == KeyEventKind::Release {
            return Step::More;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => Step::Done,
            KeyCode::Char('c') if ctrl => Step::Interrupted,
            KeyCode::Char('d') if ctrl && self.buf.is_empty() => Step::Eof,
            KeyCode::Char('u') if ctrl => {
                self.buf.clear();
                Step::More
            }
            KeyCode::Char(_) if ctrl => Step::More,
            KeyCode::Char(c) => {
                self.buf.push(c);
                Step::More
            }
            KeyCode::Backspace => {
                self.buf.pop();
                Step::More
            }
            _ => Step::More,
        }
    }

    fn into_inner(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(line: &mut SecretLine, text: &str) {
        for c in text.chars() {
            assert_eq!(line.apply(key(KeyCode::Char(c))), Step::More);
        }
    }

    #[test]
    fn collects_until_enter() {
        let mut line = SecretLine::default();
        type_str(&mut line, "AIza_key-1");
        assert_eq!(line.apply(key(KeyCode::Enter)), Step::Done);
        assert_eq!(line.into_inner(), "AIza_key-1");
    }

    #[test]
    fn backspace_and_ctrl_u_edit() {
        let mut line = SecretLine::default();
        type_str(&mut line, "wrong");
        assert_eq!(line.apply(ctrl('u')), Step::More);
        type_str(&mut line, "AIzx");
        line.apply(key(KeyCode::Backspace));
        type_str(&mut line, "a");
        assert_eq!(line.into_inner(), "AIza");
    }

    #[test]
    fn ctrl_c_interrupts() {
        let mut line = SecretLine::default();
        type_str(&mut line, "AI");
        assert_eq!(line.apply(ctrl('c')), Step::Interrupted);
    }

    #[test]
    fn ctrl_d_is_eof_only_on_empty_line() {
        let mut line = SecretLine::default();
        assert_eq!(line.apply(ctrl('d')), Step::Eof);

        let mut line = SecretLine::default();
        type_str(&mut line, "x");
        assert_eq!(line.apply(ctrl('d')), Step::More);
        assert_eq!(line.into_inner(), "x");
    }

    #[test]
    fn key_release_is_ignored() {
        let mut line = SecretLine::default();
        let mut release = key(KeyCode::Char('z'));
        release.kind = KeyEventKind::Release;
        assert_eq!(line.apply(release), Step::More);
        assert_eq!(line.into_inner(), "");
    }
}
