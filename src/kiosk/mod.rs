pub mod commands;
pub mod render;

use crate::controller::{ListingController, ListingView};
use crate::listings::ListingSource;
use anyhow::{Context, Result};
use commands::{parse_line, Command, HELP};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::watch;
use tracing::{debug, info};

/// Interactive terminal browser over a listing controller
///
/// Reads commands from stdin until `quit` or end of input. Each line is one
/// user action and triggers at most one fetch.
pub async fn run<S: ListingSource>(controller: &ListingController<S>) -> Result<()> {
    let indicator = tokio::spawn(loading_indicator(controller.subscribe()));

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print(&mut stdout, &render::render_view(&controller.view())).await?;
    print(&mut stdout, "Type 'help' for commands.\n> ").await?;

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let commands = match parse_line(&line) {
            Ok(commands) => commands,
            Err(err) => {
                print(&mut stdout, &format!("{}\n> ", err)).await?;
                continue;
            }
        };

        let mut changes = Vec::new();
        let mut show = false;
        let mut quit = false;
        for command in commands {
            match command {
                Command::Change(change) => changes.push(change),
                Command::Show => show = true,
                Command::Help => print(&mut stdout, &format!("{}\n", HELP)).await?,
                Command::Quit => quit = true,
            }
        }

        if !changes.is_empty() {
            debug!("Applying {} change(s)", changes.len());
            show |= controller.apply(changes).await.is_some();
        }
        if show {
            print(&mut stdout, &render::render_view(&controller.view())).await?;
        }
        if quit {
            break;
        }
        print(&mut stdout, "> ").await?;
    }

    indicator.abort();
    info!("Kiosk closed");
    Ok(())
}

/// Prints a loading line whenever a fetch starts
async fn loading_indicator(mut rx: watch::Receiver<ListingView>) {
    let mut was_loading = rx.borrow_and_update().loading;
    while rx.changed().await.is_ok() {
        let loading = rx.borrow_and_update().loading;
        if loading && !was_loading {
            eprintln!("Loading properties...");
        }
        was_loading = loading;
    }
}

async fn print(stdout: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
