use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, trace};

use super::commands::{SearchCommand, SearchReply};
use crate::backend::SearchBackend;

/// Launch the background search worker thread and return its communication
/// channels plus the shared latest-generation tag.
///
/// The worker consults the tag before touching the network: a command whose
/// generation is already superseded is dropped without a reply. This is an
/// optimization only; the orchestrator's generation check on replies is what
/// guarantees stale results never apply.
pub fn spawn(
    backend: Box<dyn SearchBackend>,
) -> (
    Sender<SearchCommand>,
    Receiver<SearchReply>,
    Arc<AtomicU64>,
) {
    let (command_tx, command_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    let latest_generation = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_generation);

    thread::spawn(move || worker_loop(backend.as_ref(), command_rx, reply_tx, thread_latest));

    (command_tx, reply_rx, latest_generation)
}

fn worker_loop(
    backend: &dyn SearchBackend,
    command_rx: Receiver<SearchCommand>,
    reply_tx: Sender<SearchReply>,
    latest_generation: Arc<AtomicU64>,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(backend, &reply_tx, &latest_generation, command) {
            break;
        }
    }
    debug!("search worker stopped");
}

fn handle_command(
    backend: &dyn SearchBackend,
    reply_tx: &Sender<SearchReply>,
    latest_generation: &AtomicU64,
    command: SearchCommand,
) -> bool {
    match command {
        SearchCommand::Fetch {
            generation,
            request,
        } => {
            if generation < latest_generation.load(AtomicOrdering::Acquire) {
                trace!("skipping superseded request (generation {generation})");
                return true;
            }
            let after = request.after.clone();
            let outcome = backend.fetch(&request);
            reply_tx
                .send(SearchReply {
                    generation,
                    after,
                    outcome,
                })
                .is_ok()
        }
        SearchCommand::Shutdown => false,
    }
}
