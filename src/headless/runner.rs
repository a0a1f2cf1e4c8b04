//! Headless mode runner - drives one picker from stdin
//!
//! Activates the picker, waits for the catalog fetch, then applies stdin
//! commands until `quit`, end of input or Ctrl-C.

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use dspick_app::{Engine, Notifier, SelectorConfig};
use dspick_catalog::CatalogClient;
use dspick_core::prelude::*;
use dspick_core::SelectableOption;

use super::commands::{HeadlessCommand, ParseError};
use super::HeadlessEvent;

const STDIN_CHANNEL_CAPACITY: usize = 16;

/// Warnings become `warning` events
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessNotifier;

impl Notifier for HeadlessNotifier {
    fn add_warning(&self, id: &str, message: &str) {
        warn!("[{}] {}", id, message);
        HeadlessEvent::warning(id, message).emit();
    }
}

/// Run in headless mode - output JSON events instead of a UI
pub async fn run_headless<C>(config: SelectorConfig<C>) -> Result<()>
where
    C: CatalogClient + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Data source picker starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let config = config.with_notifier(HeadlessNotifier);
    let mut engine = Engine::new(config, |options: Vec<SelectableOption>| {
        HeadlessEvent::selected_data_sources(options).emit();
    });

    let (cmd_tx, cmd_rx) = mpsc::channel(STDIN_CHANNEL_CAPACITY);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(cmd_tx);
    });

    engine.activate();
    if let Err(e) = engine.settle().await {
        error!("Picker failed to initialize: {}", e);
        HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
        engine.teardown();
        return Err(e);
    }

    ready_event(&engine).emit();

    headless_command_loop(&mut engine, cmd_rx).await;

    engine.teardown();
    HeadlessEvent::teardown().emit();

    info!("Headless mode exiting");
    Ok(())
}

/// Snapshot of the settled picker for the `ready` event
fn ready_event<C>(engine: &Engine<C>) -> HeadlessEvent
where
    C: CatalogClient + Sync + 'static,
{
    HeadlessEvent::ready(
        engine.state.selection.all_options().to_vec(),
        engine.state.default_source_id().map(str::to_string),
        engine.state.full_width,
    )
}

/// Apply stdin commands until quit, end of input or Ctrl-C
async fn headless_command_loop<C>(
    engine: &mut Engine<C>,
    mut cmd_rx: mpsc::Receiver<std::result::Result<HeadlessCommand, ParseError>>,
) where
    C: CatalogClient + Sync + 'static,
{
    loop {
        let input = tokio::select! {
            input = cmd_rx.recv() => input,
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        };

        let command = match input {
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                warn!("{}", e);
                HeadlessEvent::error(e.to_string(), false).emit();
                continue;
            }
            None => {
                info!("Stdin closed");
                break;
            }
        };

        if !apply_command(engine, command) {
            info!("Quit requested");
            break;
        }
    }
}

/// Apply one command; returns false when the loop should stop
fn apply_command<C>(engine: &mut Engine<C>, command: HeadlessCommand) -> bool
where
    C: CatalogClient + Sync + 'static,
{
    match command {
        HeadlessCommand::Quit => return false,
        HeadlessCommand::List => {
            HeadlessEvent::options(engine.state.selection.checked_subset().to_vec()).emit();
        }
        _ => match command.apply(engine.state.selection.checked_subset()) {
            Some(options) => engine.toggle(options),
            None => {
                let index = command.index().unwrap_or_default();
                HeadlessEvent::error(format!("No option at index {}", index), false).emit();
            }
        },
    }
    true
}

/// Read stdin lines and forward parsed commands (blocking version)
fn spawn_stdin_reader_blocking(
    cmd_tx: mpsc::Sender<std::result::Result<HeadlessCommand, ParseError>>,
) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let parsed = HeadlessCommand::parse(trimmed);
                let quit = parsed == Ok(HeadlessCommand::Quit);
                if cmd_tx.blocking_send(parsed).is_err() || quit {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use dspick_catalog::test_utils::{test_record, StaticCatalogClient};

    async fn ready_engine() -> Engine<StaticCatalogClient> {
        let catalog = StaticCatalogClient::with_records(vec![test_record("ds1", "Prod")]);
        let mut engine = Engine::new(SelectorConfig::new(catalog), |_: Vec<SelectableOption>| {});
        engine.activate();
        engine.settle().await.unwrap();
        engine
    }

    #[tokio::test]
    async fn test_off_command_updates_selection() {
        let mut engine = ready_engine().await;

        assert!(apply_command(&mut engine, HeadlessCommand::Off(1)));

        let current = engine.state.selection.checked_subset();
        assert!(current[0].is_checked());
        assert!(!current[1].is_checked());
        assert_eq!(engine.state.selection.selected().len(), 1);
    }

    #[tokio::test]
    async fn test_out_of_range_keeps_selection() {
        let mut engine = ready_engine().await;
        let before = engine.state.selection.clone();

        assert!(apply_command(&mut engine, HeadlessCommand::Toggle(9)));

        assert_eq!(engine.state.selection, before);
    }

    #[tokio::test]
    async fn test_full_width_reaches_ready_event() {
        let catalog = StaticCatalogClient::with_records(vec![]);
        let config = SelectorConfig::new(catalog).full_width(true);
        let mut engine = Engine::new(config, |_: Vec<SelectableOption>| {});
        engine.activate();
        engine.settle().await.unwrap();

        let event = ready_event(&engine);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "ready");
        assert_eq!(value["full_width"], true);
    }

    #[tokio::test]
    async fn test_quit_stops_loop() {
        let mut engine = ready_engine().await;

        assert!(!apply_command(&mut engine, HeadlessCommand::Quit));
    }

    #[tokio::test]
    async fn test_loop_ends_when_input_closes() {
        let mut engine = ready_engine().await;
        let (tx, rx) = mpsc::channel(4);
        tx.send(Ok(HeadlessCommand::None)).await.unwrap();
        drop(tx);

        headless_command_loop(&mut engine, rx).await;

        assert!(engine.state.selection.selected().is_empty());
    }
}
