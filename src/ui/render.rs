use crate::app::{HiLoApp, Screen};

/// Renders the current screen as plain text
pub fn render(app: &HiLoApp) -> String {
    let mut out = String::new();

    match app.screen() {
        Screen::NameEntry => {
            out.push_str("=== HI-LO ===\n");
            out.push_str("Enter your name:\n");
        }
        Screen::Greeting => {
            if let Some(greeting) = app.greeting() {
                out.push_str(&format!("{}\n", greeting));
            }
            out.push_str("[p]lay  [s]ettings  [lb] leaderboard  [b]ack  [q]uit\n");
        }
        Screen::Play => render_play(app, &mut out),
        Screen::Settings => {
            let settings = app.settings();
            out.push_str("=== SETTINGS ===\n");
            out.push_str(&format!(
                "Music: {}{}\n",
                settings.bgm_volume(),
                if app.music_playing() { "" } else { " (off)" }
            ));
            out.push_str(&format!(
                "Sound effects: {}{}\n",
                settings.sfx_volume(),
                if settings.sfx_enabled() { "" } else { " (off)" }
            ));
            out.push_str("music <0-100>  sfx <0-100>  [b]ack\n");
        }
        Screen::Leaderboard => {
            out.push_str("=== LEADERBOARD ===\n");
            let view = app.leaderboard();
            if view.entries().is_empty() {
                out.push_str("No players yet\n");
            }
            for line in view.lines() {
                out.push_str(&format!("{}\n", line));
            }
            if let Some(best) = view.best_session_score() {
                out.push_str(&format!("Best this session: ${}\n", best));
            }
            out.push_str("[b]ack\n");
        }
    }

    out
}

fn render_play(app: &HiLoApp, out: &mut String) {
    let Some(session) = app.session() else {
        out.push_str("No game in progress\n");
        return;
    };

    let assets = app.assets();
    match session.current_card() {
        Some(card) => {
            out.push_str(&format!(
                "Current card: {}  ({})\n",
                card,
                assets.card_image(&card).display()
            ));
        }
        None => out.push_str("Current card: none\n"),
    }
    out.push_str(&format!(
        "Next card:    ??  ({})\n",
        assets.back_card_image().display()
    ));
    out.push_str(&format!("Cards left: {}\n", session.cards_remaining()));

    if let Some(message) = app.message() {
        out.push_str(&format!("{}\n", message));
    }
    out.push_str(&format!("Money: ${}\n", session.balance()));
    out.push_str("[h]igher  [l]ower  [r]eshuffle  [b]ack  [q]uit\n");
}
