use super::navigation::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command
{
    Activate,
    Move(Direction),
    Reset,
    Quit,
}

pub fn command_for_key(key: KeyEvent) -> Option<Command>
{
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let command = match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Activate,
        KeyCode::Left | KeyCode::Char('h') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Command::Move(Direction::Right),
        KeyCode::Up | KeyCode::Char('k') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Command::Move(Direction::Down),
        KeyCode::Home => Command::Move(Direction::Home),
        KeyCode::End => Command::Move(Direction::End),
        _ => return None,
    };
    Some(command)
}
