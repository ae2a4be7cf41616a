use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::commands::parse_command;
use super::render::render;
use crate::app::{Command, HiLoApp};
use crate::shared::AppError;

/// Reads commands line by line until the player quits or input ends.
///
/// Bad input and rejected game moves are shown and the loop carries on.
/// Store and I/O failures end the loop with an error.
pub async fn run<R, W>(app: &mut HiLoApp, reader: R, mut writer: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut notice: Option<String> = None;

    while app.is_running() {
        let mut screen = render(app);
        if let Some(text) = notice.take() {
            screen.push_str(&format!("! {}\n", text));
        }
        screen.push_str("> ");
        writer.write_all(screen.as_bytes()).await?;
        writer.flush().await?;

        let command = match lines.next_line().await? {
            Some(line) => match parse_command(app.screen(), &line) {
                Ok(command) => command,
                Err(e) => {
                    notice = Some(e.to_string());
                    continue;
                }
            },
            None => {
                debug!("Input closed");
                Command::Quit
            }
        };

        match app.handle(command).await {
            Ok(()) => {}
            Err(e @ (AppError::InvalidInput(_) | AppError::Game(_))) => {
                warn!(error = %e, "Command rejected");
                notice = Some(e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    writer.write_all(b"\nGoodbye!\n").await?;
    writer.flush().await?;
    Ok(())
}
