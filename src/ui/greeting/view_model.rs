//! State pipeline for the greeting screen.

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::ui::mvi::{Interpreter, Processor, Reducer, ReplayLatest, Subscription};

use super::gate::IntentGate;
use super::intent::GreetingIntent;
use super::interpreter::GreetingInterpreter;
use super::processor::GreetingProcessor;
use super::reducer::GreetingReducer;
use super::state::GreetingViewState;

/// Handle for pushing intents into the pipeline queue.
pub type IntentSender = mpsc::UnboundedSender<GreetingIntent>;

/// A live sequence of intents produced by one source.
pub type IntentStream = mpsc::UnboundedReceiver<GreetingIntent>;

/// Feed of view states for one subscriber.
pub type StateSubscription = Subscription<GreetingViewState>;

/// Runs `intent → action → result → state` for the greeting screen.
///
/// All intents, from any number of sources, are serialized through one
/// queue and folded by one task. The fold task is spawned on construction,
/// so intents are processed exactly once whether or not anyone subscribes.
///
/// Must be created inside a tokio runtime.
pub struct GreetingViewModel {
    intents: IntentSender,
    state: ReplayLatest<GreetingViewState>,
    fold_task: JoinHandle<()>,
    forwarders: Mutex<Vec<JoinHandle<()>>>,
}

impl GreetingViewModel {
    pub fn new() -> Self {
        let (intents, queue) = mpsc::unbounded_channel();
        let state = ReplayLatest::new(GreetingViewState::idle());
        let fold_task = tokio::spawn(fold(queue, state.clone()));
        Self {
            intents,
            state,
            fold_task,
            forwarders: Mutex::new(Vec::new()),
        }
    }

    /// Merge a stream of intents into the pipeline.
    ///
    /// The stream's own order is preserved. Several streams may be connected;
    /// their items interleave in arrival order.
    pub fn process_intents(&self, mut stream: IntentStream) {
        let sink = self.intent_sender();
        let forwarder = tokio::spawn(async move {
            while let Some(intent) = stream.recv().await {
                if sink.send(intent).is_err() {
                    break;
                }
            }
        });
        let mut forwarders = self.forwarders.lock();
        forwarders.retain(|handle| !handle.is_finished());
        forwarders.push(forwarder);
    }

    /// Sender for pushing single intents straight into the queue.
    pub fn intent_sender(&self) -> IntentSender {
        self.intents.clone()
    }

    /// Subscribe to view states.
    ///
    /// The first value is the latest state (idle if nothing was folded yet),
    /// followed by every later state in order.
    pub fn state(&self) -> StateSubscription {
        self.state.subscribe()
    }

    /// Latest view state.
    pub fn current(&self) -> GreetingViewState {
        self.state.latest()
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.subscriber_count()
    }
}

impl Default for GreetingViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GreetingViewModel {
    fn drop(&mut self) {
        for forwarder in self.forwarders.lock().drain(..) {
            forwarder.abort();
        }
        self.fold_task.abort();
    }
}

async fn fold(mut queue: IntentStream, state: ReplayLatest<GreetingViewState>) {
    let mut gate = IntentGate::new();
    let mut current = state.latest();

    while let Some(intent) = queue.recv().await {
        let Some(intent) = gate.admit(intent) else {
            tracing::debug!("Dropped repeated initial intent");
            continue;
        };
        tracing::debug!(?intent, initial_admitted = gate.initial_admitted(), "Admitted intent");

        let action = GreetingInterpreter::interpret(intent);
        let result = GreetingProcessor::process(action);
        tracing::debug!(?result, "Processed greeting action");

        current = GreetingReducer::reduce(current, result);
        state.publish(current.clone());
    }

    tracing::debug!("Intent queue closed");
}
