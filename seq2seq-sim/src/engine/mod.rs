//! Simulation playback engine
//!
//! Owns phase/step progression for the animated encode -> context -> decode
//! replay, coordinates the one asynchronous translation call per run, and
//! exposes an immutable [`Snapshot`] after every change. The rendering layer
//! is purely reactive: it reads snapshots and calls the control entry points,
//! never mutating engine state directly.
//!
//! Two timer mechanisms drive the playback:
//!
//! - the tick timer, rescheduled after every snapshot change at the current
//!   animation speed, and
//! - the settle timer, a fixed short delay for the `Context -> Decoding`
//!   transition, deliberately independent of the animation speed.
//!
//! Both are spawned tasks keyed by a run generation (and, for ticks, a
//! schedule sequence), so a stale callback left over from a reset or a new
//! run is provably inert when it fires.

pub mod snapshot;


pub use snapshot::{Phase, SimConfig, Snapshot};

use crate::error::{GatewayError, SimError, SimResult};
use crate::gateway::TranslationGateway;
use crate::language::{Language, LanguagePair};
use crate::tokenizer::tokenize;
use crate::vector::generate_vector;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Credential values that count as "not configured".
const PLACEHOLDER_CREDENTIAL: &str = "YOUR_API_KEY_HERE";

struct EngineState {
    snapshot: Snapshot,
    /// Run generation: bumped on reset and on each accepted start request.
    /// Pending timers from earlier generations must no-op.
    run: u64,
    /// Schedule sequence: bumped on every snapshot change. A tick task is
    /// only valid for the exact sequence it was scheduled against, which is
    /// how the previous tick is deterministically cancelled.
    sched: u64,
    /// Whether a settle timer is already pending for the current `Context`.
    settling: bool,
}

impl EngineState {
    /// Apply a change as a wholesale snapshot replacement and invalidate
    /// any pending tick.
    fn update(&mut self, apply: impl FnOnce(&mut Snapshot)) {
        let mut next = self.snapshot.clone();
        apply(&mut next);
        self.snapshot = next;
        self.sched = self.sched.wrapping_add(1);
    }
}

struct Shared {
    state: Mutex<EngineState>,
    gateway: Arc<dyn TranslationGateway>,
    credential: Option<String>,
    config: SimConfig,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().expect("engine state lock poisoned")
    }

    /// The single advance routine. Timer ticks and manual steps both land
    /// here, so the two paths cannot diverge.
    fn advance(shared: &Arc<Shared>, state: &mut EngineState) {
        match state.snapshot.phase {
            Phase::Encoding => {
                let last = state.snapshot.input_tokens.len().saturating_sub(1);
                if state.snapshot.step < last {
                    state.update(|s| s.step += 1);
                } else {
                    state.update(|s| s.phase = Phase::Context);
                    debug!("encoding complete, entering context phase");
                }
                Shared::schedule_tick(shared, state);
            }
            Phase::Context => {
                // The settle timer owns the next transition; advancing in
                // Context only arms it (once).
                if !state.settling {
                    state.settling = true;
                    Shared::spawn_settle(shared, state.run);
                }
            }
            Phase::Decoding => {
                let last = state.snapshot.output_tokens.len().saturating_sub(1);
                if state.snapshot.step < last {
                    state.update(|s| s.step += 1);
                    Shared::schedule_tick(shared, state);
                } else {
                    state.update(|s| {
                        s.phase = Phase::Done;
                        s.is_paused = true;
                    });
                    info!("playback complete");
                }
            }
            phase => {
                // Guards in step() and the timers keep advance out of the
                // non-animating phases; reaching this arm is a defect.
                warn!(%phase, "advance requested outside an animating phase");
                debug_assert!(false, "advance requested in phase {}", phase);
            }
        }
    }

    /// Arm the tick timer for the current snapshot, if it should run at all.
    /// The task captures the run generation and schedule sequence; by the
    /// time it fires, any snapshot change has made a stale task inert.
    fn schedule_tick(shared: &Arc<Shared>, state: &EngineState) {
        let snap = &state.snapshot;
        if snap.is_paused || !snap.phase.is_animating() {
            return;
        }
        let run = state.run;
        let sched = state.sched;
        let delay = Duration::from_millis(snap.animation_speed_ms);
        let shared = Arc::clone(shared);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = shared.lock();
            if state.run != run || state.sched != sched {
                return;
            }
            Shared::advance(&shared, &mut state);
        });
    }

    /// Arm the settle timer for the `Context -> Decoding` transition. Guarded
    /// by the run generation and the phase only; animation-speed changes do
    /// not touch it.
    fn spawn_settle(shared: &Arc<Shared>, run: u64) {
        let delay = Duration::from_millis(shared.config.settle_delay_ms);
        let shared = Arc::clone(shared);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = shared.lock();
            if state.run != run || state.snapshot.phase != Phase::Context {
                return;
            }
            state.settling = false;
            state.update(|s| {
                s.step = 0;
                s.phase = Phase::Decoding;
            });
            debug!("context settled, entering decoding phase");
            Shared::schedule_tick(&shared, &state);
        });
    }
}

/// Cloneable handle to one simulation. All clones share the same state;
/// mutation happens only through the control entry points below, and the
/// current [`Snapshot`] is replaced atomically on every change.
#[derive(Clone)]
pub struct Simulation {
    shared: Arc<Shared>,
}

impl Simulation {
    /// Create an engine over the given gateway. `credential` is handed to
    /// the gateway on each call; `None`, blank, or the placeholder value
    /// blocks `start_translation` before any network attempt.
    pub fn new(
        gateway: Arc<dyn TranslationGateway>,
        credential: Option<String>,
        config: SimConfig,
    ) -> Self {
        let snapshot = Snapshot::idle(
            LanguagePair::default(),
            config.default_speed_ms,
            config.vector_len,
        );
        Simulation {
            shared: Arc::new(Shared {
                state: Mutex::new(EngineState {
                    snapshot,
                    run: 0,
                    sched: 0,
                    settling: false,
                }),
                gateway,
                credential,
                config,
            }),
        }
    }

    /// Read-only view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.shared.lock().snapshot.clone()
    }

    fn configured_credential(&self) -> Option<&str> {
        self.shared
            .credential
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != PLACEHOLDER_CREDENTIAL)
    }

    /// Start a new run: `Idle -> Translating`, one gateway call, then
    /// `Encoding` on success or back to `Idle` on failure.
    ///
    /// Only accepted from `Idle`. A finished run (`Done`) keeps its token
    /// data on screen until an explicit [`reset`](Self::reset), so starting
    /// from `Done` is rejected rather than silently clearing it.
    pub async fn start_translation(
        &self,
        text: &str,
        from: Language,
        to: Language,
    ) -> SimResult<String> {
        let trimmed = text.trim().to_string();
        let vector_len = self.shared.config.vector_len;

        let (run, credential) = {
            let mut state = self.shared.lock();
            let phase = state.snapshot.phase;
            if phase != Phase::Idle {
                return Err(SimError::NotIdle(phase));
            }
            // Validation failures stay in Idle; only the notice changes.
            let Some(credential) = self.configured_credential().map(str::to_string) else {
                let err = SimError::MissingCredential;
                state.update(|s| s.last_error = Some(err.to_string()));
                return Err(err);
            };
            if trimmed.is_empty() {
                let err = SimError::EmptyInput;
                state.update(|s| s.last_error = Some(err.to_string()));
                return Err(err);
            }

            // New run generation: every timer from the previous run is now
            // inert, and no other gateway call can be in flight behind the
            // Idle-only guard above.
            state.run = state.run.wrapping_add(1);
            state.settling = false;
            let source_text = trimmed.clone();
            state.update(|s| {
                s.phase = Phase::Translating;
                s.step = 0;
                s.input_tokens = Vec::new();
                s.output_tokens = Vec::new();
                s.input_vectors = Vec::new();
                s.output_vectors = Vec::new();
                s.context_vector = generate_vector(vector_len);
                s.is_paused = true;
                s.languages = LanguagePair::new(from, to);
                s.source_text = source_text;
                s.translated_text = String::new();
                s.last_error = None;
            });
            (state.run, credential)
        };

        info!(
            provider = self.shared.gateway.provider_name(),
            from = from.code(),
            to = to.code(),
            "requesting translation"
        );
        let result = self
            .shared
            .gateway
            .translate(&trimmed, from, to, &credential)
            .await;
        // A punctuation-only "translation" animates nothing; classify it
        // with the blank-result failures.
        let result = result.and_then(|translated| {
            if tokenize(&translated).is_empty() {
                Err(GatewayError::EmptyResult)
            } else {
                Ok(translated)
            }
        });

        let mut state = self.shared.lock();
        if state.run != run {
            // The run was reset while the call was in flight; this
            // completion must not touch the new state.
            debug!("discarding translation result from a superseded run");
            return result.map_err(SimError::from);
        }

        match result {
            Ok(translated) => {
                let input_tokens = tokenize(&trimmed);
                let output_tokens = tokenize(&translated);
                debug_assert!(!input_tokens.is_empty(), "non-blank input must tokenize");
                info!(
                    input_tokens = input_tokens.len(),
                    output_tokens = output_tokens.len(),
                    "translation received, entering encoding phase"
                );
                state.update(|s| {
                    s.phase = Phase::Encoding;
                    s.step = 0;
                    s.input_vectors =
                        input_tokens.iter().map(|_| generate_vector(vector_len)).collect();
                    s.output_vectors =
                        output_tokens.iter().map(|_| generate_vector(vector_len)).collect();
                    s.input_tokens = input_tokens;
                    s.output_tokens = output_tokens;
                    s.context_vector = generate_vector(vector_len);
                    s.translated_text = translated.clone();
                });
                Shared::schedule_tick(&self.shared, &state);
                Ok(translated)
            }
            Err(err) => {
                warn!(error = %err, "translation failed, returning to idle");
                let message = err.to_string();
                state.update(|s| {
                    s.phase = Phase::Idle;
                    s.step = 0;
                    s.last_error = Some(message);
                });
                Err(err.into())
            }
        }
    }

    /// Explicit reset: back to `Idle` from any state. Clears all run data,
    /// regenerates the placeholder context vector, and invalidates every
    /// pending timer and in-flight gateway completion.
    pub fn reset(&self) {
        let mut state = self.shared.lock();
        state.run = state.run.wrapping_add(1);
        state.settling = false;
        let languages = state.snapshot.languages;
        let speed = state.snapshot.animation_speed_ms;
        let vector_len = self.shared.config.vector_len;
        state.update(|s| *s = Snapshot::idle(languages, speed, vector_len));
        info!("simulation reset");
    }

    /// Toggle automatic playback. No effect in `Done` (terminal for the run)
    /// or `Translating` (the network call is not pausable).
    pub fn toggle_pause(&self) {
        let mut state = self.shared.lock();
        if matches!(state.snapshot.phase, Phase::Done | Phase::Translating) {
            return;
        }
        state.update(|s| s.is_paused = !s.is_paused);
        Shared::schedule_tick(&self.shared, &state);
    }

    /// Manual single advance. Permitted only while paused in an animating
    /// phase; anywhere else it is a no-op.
    pub fn step(&self) {
        let mut state = self.shared.lock();
        if !state.snapshot.is_paused || !state.snapshot.phase.is_animating() {
            return;
        }
        Shared::advance(&self.shared, &mut state);
    }

    /// Set the delay between automatic advances, clamped to the configured
    /// range. The pending tick is rescheduled at the new delay; the settle
    /// timer is unaffected.
    pub fn set_speed(&self, ms: u64) {
        let mut state = self.shared.lock();
        let clamped = self.shared.config.clamp_speed(ms);
        state.update(|s| s.animation_speed_ms = clamped);
        Shared::schedule_tick(&self.shared, &state);
    }

    /// Swap the source and target languages. Only available while no run is
    /// active (`Idle` or `Done`).
    pub fn swap_languages(&self) {
        let mut state = self.shared.lock();
        if !state.snapshot.phase.is_settled() {
            return;
        }
        state.update(|s| s.languages = s.languages.swapped());
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.lock();
        f.debug_struct("Simulation")
            .field("phase", &state.snapshot.phase)
            .field("run", &state.run)
            .field("provider", &self.shared.gateway.provider_name())
            .finish()
    }
}
