use std::fmt;

use tracing::debug;

use super::ids::{Clock, IdGenerator, SystemClock, UuidIds};
use super::reducer::{apply, CompletionPolicy, TransitionContext};
use super::{Action, AppState};

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AppState)>;

/// Single owner of the authoritative [`AppState`].
///
/// Dispatches run to completion one at a time; consumers only ever see
/// `&AppState`. Subscribers are called after each dispatch that changed the
/// state.
pub struct Store {
    state: AppState,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    completion: CompletionPolicy,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    /// Store with UUID ids, the system clock and guarded completion.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            ids: Box::new(UuidIds),
            clock: Box::new(SystemClock),
            completion: CompletionPolicy::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_completion_policy(mut self, completion: CompletionPolicy) -> Self {
        self.completion = completion;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn completion_policy(&self) -> CompletionPolicy {
        self.completion
    }

    /// Current instant according to the store's clock.
    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    // ── Mutation ─────────────────────────────────────────────────────

    /// Apply `action`. Returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let kind = action.kind();
        let mut ctx = TransitionContext {
            now: self.clock.now(),
            ids: self.ids.as_mut(),
            completion: self.completion,
        };
        let next = apply(self.state.clone(), action, &mut ctx);
        let changed = next != self.state;
        debug!(action = kind, changed, "dispatch");

        if changed {
            self.state = next;
            for (_, listener) in self.listeners.iter_mut() {
                listener(&self.state);
            }
        }
        changed
    }

    /// Register a listener called with the new state after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("ids", &self.ids)
            .field("clock", &self.clock)
            .field("completion", &self.completion)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
