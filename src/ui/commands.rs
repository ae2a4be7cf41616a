use crate::app::{Command, Screen};
use crate::game::Guess;
use crate::shared::AppError;

/// Parses one line of input for the given screen. On the name entry screen
/// the whole line is the name.
pub fn parse_command(screen: Screen, line: &str) -> Result<Command, AppError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(AppError::InvalidInput("Empty input".to_string()));
    }

    if screen == Screen::NameEntry {
        return Ok(Command::SubmitName(line.to_string()));
    }

    let mut parts = line.split_whitespace();
    let keyword = parts.next().unwrap_or_default().to_ascii_lowercase();
    let argument = parts.next();

    let command = match keyword.as_str() {
        "h" | "higher" => Command::Guess(Guess::Higher),
        "l" | "lower" => Command::Guess(Guess::Lower),
        "r" | "reshuffle" => Command::Reshuffle,
        "p" | "play" => Command::StartGame,
        "s" | "settings" => Command::OpenSettings,
        "lb" | "leaders" | "leaderboard" => Command::OpenLeaderboard,
        "b" | "back" => Command::Back,
        "q" | "quit" => Command::Quit,
        "music" => Command::SetMusicVolume(parse_volume(argument)?),
        "sfx" => Command::SetEffectsVolume(parse_volume(argument)?),
        other => {
            return Err(AppError::InvalidInput(format!(
                "Unknown command '{}'",
                other
            )))
        }
    };

    Ok(command)
}

fn parse_volume(argument: Option<&str>) -> Result<u8, AppError> {
    let value = argument
        .ok_or_else(|| AppError::InvalidInput("Missing volume (0-100)".to_string()))?;

    value
        .parse::<u8>()
        .ok()
        .filter(|v| *v <= 100)
        .ok_or_else(|| AppError::InvalidInput(format!("Volume must be 0-100, got '{}'", value)))
}
