//! Engine - owns one picker instance and drives its TEA loop
//!
//! The engine holds the [`AppState`], the message channel the background
//! fetch reports into, and the collaborators the picker talks to. All state
//! changes go through [`handler::update`]; the engine only performs the
//! returned actions.

use std::sync::Arc;
use std::time::Duration;

use dspick_catalog::CatalogClient;
use dspick_core::prelude::*;
use dspick_core::SelectableOption;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::actions::spawn_data_source_fetch;
use crate::config::{SelectorConfig, SettingsReader, DEFAULT_DATA_SOURCE_KEY};
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::services::{Notifier, SelectionHandler};
use crate::state::AppState;

/// Capacity of the engine's message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 16;

pub struct Engine<C> {
    pub state: AppState,
    pub msg_tx: mpsc::Sender<Message>,
    pub msg_rx: mpsc::Receiver<Message>,
    catalog: Arc<C>,
    settings: Box<dyn SettingsReader>,
    notifier: Box<dyn Notifier>,
    handler: Box<dyn SelectionHandler>,
    default_source_fallback: Option<String>,
    fetch_timeout: Duration,
    fetch_task: Option<JoinHandle<()>>,
}

impl<C> Engine<C>
where
    C: CatalogClient + Sync + 'static,
{
    pub fn new(config: SelectorConfig<C>, handler: impl SelectionHandler + 'static) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        Self {
            state: AppState::with_flags(config.hide_local_cluster, config.full_width),
            msg_tx,
            msg_rx,
            catalog: config.catalog,
            settings: config.settings,
            notifier: config.notifier,
            handler: Box::new(handler),
            default_source_fallback: config.default_source_id,
            fetch_timeout: config.fetch_timeout,
            fetch_task: None,
        }
    }

    /// Start the instance: read the default source once, open the guard and
    /// spawn the catalog fetch. Must run inside a tokio runtime.
    pub fn activate(&mut self) {
        if !self.state.can_activate() {
            warn!("Picker already activated or torn down, ignoring activation");
            return;
        }

        let default_source_id = self
            .settings
            .get(DEFAULT_DATA_SOURCE_KEY, self.default_source_fallback.clone());
        self.process_message(Message::Activate { default_source_id });
    }

    /// Apply a selection coming from the presentation layer
    pub fn toggle(&mut self, options: Vec<SelectableOption>) {
        self.process_message(Message::SelectionChanged { options });
    }

    /// Tear the instance down. Nothing is written or reported afterwards.
    pub fn teardown(&mut self) {
        self.process_message(Message::Teardown);
    }

    /// Process queued messages until no fetch is outstanding.
    pub async fn settle(&mut self) -> Result<()> {
        while self.state.fetch_in_flight {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => return Err(Error::ChannelClosed),
            }
        }
        Ok(())
    }

    /// Whether the spawned fetch task (if any) has run to completion
    pub fn fetch_finished(&self) -> bool {
        self.fetch_task
            .as_ref()
            .map_or(true, |task| task.is_finished())
    }

    /// Process a message through the TEA update function
    pub fn process_message(&mut self, message: Message) {
        let result = handler::update(&mut self.state, message);
        if let Some(action) = result.action {
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::FetchDataSources { fields } => {
                if self.fetch_task.is_some() {
                    warn!("Data source fetch already spawned for this picker");
                    return;
                }
                self.fetch_task = Some(spawn_data_source_fetch(
                    self.catalog.clone(),
                    fields,
                    self.fetch_timeout,
                    self.msg_tx.clone(),
                ));
            }

            UpdateAction::ReportSelection { options } => {
                if !self.state.lifecycle.is_open() {
                    debug!("Suppressing selection report, picker is not live");
                    return;
                }
                self.handler.on_selected_data_sources(options);
            }

            UpdateAction::ShowWarning { id, message } => {
                if !self.state.lifecycle.is_open() {
                    debug!("Suppressing warning, picker is not live: {}", message);
                    return;
                }
                self.notifier.add_warning(id, &message);
            }
        }
    }
}

impl<C> std::fmt::Debug for Engine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("fetch_timeout", &self.fetch_timeout)
            .finish_non_exhaustive()
    }
}
