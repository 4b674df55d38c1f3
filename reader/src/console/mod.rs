//! Line-oriented console front end for the tag reader screen.
//!
//! Commands arrive as JSON lines on the input; the screen is written to the
//! output whenever what it shows changes.

mod device;
mod ui;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};
use tokio::sync::mpsc;

use crate::config::OutputFormat;
use crate::nfc::{NfcEvent, SimulatedNfc};
use crate::screen::Screen;
use crate::view::ScreenView;

pub use device::{ConsoleCommand, Flow, apply_command, parse_command};
pub use ui::{format_view, write_view};

/// Drive the screen until the input ends or a `quit` command arrives.
pub async fn run<R, W>(
    mut screen: Screen<SimulatedNfc>,
    mut events: mpsc::UnboundedReceiver<NfcEvent>,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> std::io::Result<Screen<SimulatedNfc>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut shown: ScreenView = screen.view();
    write_view(&mut output, &shown, format).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("Console input closed");
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let cmd = match parse_command(line) {
                    Ok(cmd) => cmd,
                    Err(e) => {
                        tracing::warn!("Invalid console command: {}", e);
                        continue;
                    }
                };
                tracing::debug!(?cmd, "Console command");
                if apply_command(&mut screen, cmd) == Flow::Quit {
                    break;
                }

                // Scans queue events synchronously; settle them before redrawing.
                while let Ok(event) = events.try_recv() {
                    screen.handle_nfc_event(event);
                }
            }
            Some(event) = events.recv() => {
                screen.handle_nfc_event(event);
            }
        }

        let view = screen.view();
        if view != shown {
            write_view(&mut output, &view, format).await?;
            shown = view;
        }
    }

    Ok(screen)
}

#[cfg(test)]
#[path = "../tests/console_tests.rs"]
mod tests;
