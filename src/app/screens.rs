use std::fmt;

use crate::game::Guess;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    NameEntry,
    Greeting,
    Play,
    Settings,
    Leaderboard,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Screen::NameEntry => "name entry",
                Screen::Greeting => "greeting",
                Screen::Play => "play",
                Screen::Settings => "settings",
                Screen::Leaderboard => "leaderboard",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SubmitName(String),
    StartGame,
    OpenSettings,
    OpenLeaderboard,
    Back,
    Guess(Guess),
    Reshuffle,
    SetMusicVolume(u8),
    SetEffectsVolume(u8),
    Quit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::SubmitName(_) => "submit a name",
            Command::StartGame => "start a game",
            Command::OpenSettings => "open settings",
            Command::OpenLeaderboard => "open the leaderboard",
            Command::Back => "go back",
            Command::Guess(_) => "guess",
            Command::Reshuffle => "reshuffle",
            Command::SetMusicVolume(_) => "set the music volume",
            Command::SetEffectsVolume(_) => "set the effects volume",
            Command::Quit => "quit",
        }
    }
}
