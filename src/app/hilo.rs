use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::screens::{Command, Screen};
use crate::assets::AssetCatalog;
use crate::audio::AudioSink;
use crate::game::{Deck, FlipOutcome, GameSession, Guess, RoundPhase, STARTING_MONEY};
use crate::leaderboard::{LeaderboardService, LeaderboardView};
use crate::player::{PlayerEntry, PlayerRepository, PlayerService};
use crate::settings::{AudioSettings, MusicChange};
use crate::shared::AppError;

pub const NO_CARDS_LEFT_MESSAGE: &str = "No more cards in the deck!";

type DeckFactory = Box<dyn Fn() -> Deck + Send + Sync>;

/// The whole application: which screen is showing, who is playing and the
/// state each screen needs. Every command is handled to completion before
/// the next one is read.
pub struct HiLoApp {
    screen: Screen,
    players: PlayerService,
    leaderboard: LeaderboardService,
    settings: AudioSettings,
    audio: Arc<dyn AudioSink>,
    assets: AssetCatalog,
    new_deck: DeckFactory,
    player: Option<PlayerEntry>,
    session: Option<GameSession>,
    message: Option<String>,
    music_playing: bool,
    running: bool,
}

impl HiLoApp {
    pub fn new(
        repository: Arc<dyn PlayerRepository>,
        audio: Arc<dyn AudioSink>,
        assets: AssetCatalog,
    ) -> Self {
        Self {
            screen: Screen::NameEntry,
            players: PlayerService::new(repository.clone()),
            leaderboard: LeaderboardService::new(repository),
            settings: AudioSettings::default(),
            audio,
            assets,
            new_deck: Box::new(Deck::new_shuffled),
            player: None,
            session: None,
            message: None,
            music_playing: false,
            running: true,
        }
    }

    /// Replaces how decks are built for new games and reshuffles
    pub fn with_deck_factory(mut self, factory: impl Fn() -> Deck + Send + Sync + 'static) -> Self {
        self.new_deck = Box::new(factory);
        self
    }

    /// Starts the looping background music if it is available and enabled
    pub fn start(&mut self) {
        if self.settings.music_enabled() {
            self.start_music();
        }
    }

    #[instrument(skip(self), fields(screen = %self.screen))]
    pub async fn handle(&mut self, command: Command) -> Result<(), AppError> {
        debug!(command = command.name(), "Handling command");

        match (self.screen, command) {
            (_, Command::Quit) => self.quit(),

            (Screen::NameEntry, Command::SubmitName(name)) => {
                let entry = self.players.enter(&name).await?;
                info!(player = %entry.name(), "Player entered");
                self.player = Some(entry);
                self.screen = Screen::Greeting;
            }

            (Screen::Greeting, Command::StartGame) => self.start_game()?,
            (Screen::Greeting, Command::OpenSettings) => self.screen = Screen::Settings,
            (Screen::Greeting, Command::OpenLeaderboard) => {
                self.leaderboard.refresh().await?;
                self.screen = Screen::Leaderboard;
            }
            (Screen::Greeting, Command::Back) => {
                self.player = None;
                self.session = None;
                self.screen = Screen::NameEntry;
            }

            (Screen::Play, Command::Guess(guess)) => self.guess(guess).await?,
            (Screen::Play, Command::Reshuffle) => {
                if let Some(session) = self.session.as_mut() {
                    session.reshuffle_with((self.new_deck)());
                    info!(player = %session.player_name(), "Deck reshuffled");
                }
                self.message = None;
            }

            (Screen::Settings, Command::SetMusicVolume(value)) => self.set_music_volume(value),
            (Screen::Settings, Command::SetEffectsVolume(value)) => {
                self.settings.set_sfx_volume(value);
                debug!(enabled = self.settings.sfx_enabled(), "Sound effects toggled");
            }

            (Screen::Play | Screen::Settings | Screen::Leaderboard, Command::Back) => {
                self.screen = Screen::Greeting;
            }

            (screen, command) => {
                return Err(AppError::InvalidInput(format!(
                    "Cannot {} on the {} screen",
                    command.name(),
                    screen
                )));
            }
        }

        Ok(())
    }

    /// Every game starts from the fixed stake, returning players included.
    /// The stored balance only changes once a round resolves.
    fn start_game(&mut self) -> Result<(), AppError> {
        let name = match &self.player {
            Some(entry) => entry.name().to_string(),
            None => {
                return Err(AppError::InvalidInput(
                    "Enter a name before starting a game".to_string(),
                ))
            }
        };

        let session = GameSession::start(name, STARTING_MONEY, (self.new_deck)());
        info!(player = %session.player_name(), balance = STARTING_MONEY, "Game started");

        self.session = Some(session);
        self.message = None;
        self.screen = Screen::Play;
        Ok(())
    }

    async fn guess(&mut self, guess: Guess) -> Result<(), AppError> {
        self.play_effect();

        let session = self.session.as_mut().ok_or_else(|| {
            AppError::InvalidInput("No game in progress".to_string())
        })?;

        if session.phase() == RoundPhase::NoCardsLeft {
            self.message = Some(NO_CARDS_LEFT_MESSAGE.to_string());
            return Ok(());
        }

        match session.play_round(guess)? {
            FlipOutcome::Resolved(result) => {
                let name = session.player_name().to_string();
                info!(
                    player = %name,
                    outcome = %result.outcome,
                    previous = %result.previous,
                    revealed = %result.revealed,
                    balance = result.balance,
                    "Round resolved"
                );

                self.message = Some(result.outcome.to_string());
                self.players.record_balance(&name, result.balance).await?;
                self.leaderboard.add_score(result.balance);
            }
            FlipOutcome::NoCardsLeft => {
                info!(player = %session.player_name(), "Deck exhausted");
                self.message = Some(NO_CARDS_LEFT_MESSAGE.to_string());
            }
        }

        Ok(())
    }

    fn set_music_volume(&mut self, value: u8) {
        match self.settings.set_bgm_volume(value) {
            MusicChange::Stop => {
                if self.music_playing {
                    self.audio.stop_music();
                    self.music_playing = false;
                }
            }
            MusicChange::Play { volume } => {
                if !self.music_playing {
                    self.start_music();
                }
                if self.music_playing {
                    self.audio.set_music_volume(volume);
                }
            }
        }
    }

    fn start_music(&mut self) {
        match self.assets.music() {
            Some(path) => {
                self.audio.play_music(path);
                self.music_playing = true;
            }
            None => warn!("No background music to play"),
        }
    }

    fn play_effect(&self) {
        if !self.settings.sfx_enabled() {
            return;
        }
        if let Some(path) = self.assets.effect() {
            self.audio.play_effect(path);
        }
    }

    fn quit(&mut self) {
        if self.music_playing {
            self.audio.stop_music();
            self.music_playing = false;
        }
        self.running = false;
        info!("Quitting");
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn player(&self) -> Option<&PlayerEntry> {
        self.player.as_ref()
    }

    pub fn greeting(&self) -> Option<String> {
        self.player.as_ref().map(|p| p.greeting())
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Result line shown under the cards
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn leaderboard(&self) -> &LeaderboardView {
        self.leaderboard.view()
    }

    pub fn settings(&self) -> &AudioSettings {
        &self.settings
    }

    pub fn assets(&self) -> &AssetCatalog {
        &self.assets
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }
}
