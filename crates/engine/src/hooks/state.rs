//! Per-hook progress tracking
//!
//! Every active hook owns exactly one entry on the [`ProgressBoard`]. The set
//! of entries is fixed before any worker starts, and each worker only ever
//! advances its own entry, so updates never contend with each other.
//!
//! Phases follow real process lifecycle events:
//!
//! ```text
//! Pending --spawn--> Running --exit--> Done(outcome)
//!    \__________spawn failure_________/
//! ```
//!
//! Drawing is delegated to a [`ProgressRenderer`], which only observes
//! transitions and never drives them.

use hookhub_core::{Error, HookDescriptor, Outcome, Result};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle phase of one hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    /// Queued, child not spawned yet
    Pending,
    /// Child process is running
    Running,
    /// Child exited (or never started)
    Done(Outcome),
}

impl ProgressPhase {
    /// Short name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Done(Outcome::Success) => "done(ok)",
            Self::Done(Outcome::Failure) => "done(fail)",
        }
    }

    /// Whether moving from `self` to `next` is a legal transition
    pub fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Running | Self::Done(_)) | (Self::Running, Self::Done(_))
        )
    }

    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done(_))
    }

    fn to_u8(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Running => 1,
            Self::Done(Outcome::Success) => 2,
            Self::Done(Outcome::Failure) => 3,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Pending,
            1 => Self::Running,
            2 => Self::Done(Outcome::Success),
            _ => Self::Done(Outcome::Failure),
        }
    }
}

/// Observer for progress transitions (terminal spinners, logs, tests)
pub trait ProgressRenderer: Sync {
    /// Called once per hook before execution begins
    fn register(&self, _key: &str, _label: &str) {}

    /// Called after an entry moved to `phase`
    fn transition(&self, key: &str, label: &str, phase: ProgressPhase);
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpRenderer;

impl ProgressRenderer for NoOpRenderer {
    fn transition(&self, _key: &str, _label: &str, _phase: ProgressPhase) {}
}

impl<T: ProgressRenderer + ?Sized> ProgressRenderer for &T {
    fn register(&self, key: &str, label: &str) {
        (**self).register(key, label);
    }

    fn transition(&self, key: &str, label: &str, phase: ProgressPhase) {
        (**self).transition(key, label, phase);
    }
}

#[derive(Debug)]
struct ProgressEntry {
    label: String,
    phase: AtomicU8,
}

/// Keyed collection of progress entries, one per active hook
pub struct ProgressBoard<'r, R: ProgressRenderer + ?Sized = NoOpRenderer> {
    entries: IndexMap<String, ProgressEntry>,
    renderer: &'r R,
}

impl<'r, R: ProgressRenderer + ?Sized> ProgressBoard<'r, R> {
    /// Create one pending entry per hook and register it with the renderer
    pub fn new(hooks: &[HookDescriptor], renderer: &'r R) -> Self {
        let entries = hooks
            .iter()
            .map(|hook| {
                let key = hook.key();
                renderer.register(&key, &hook.name);
                (
                    key,
                    ProgressEntry {
                        label: hook.name.clone(),
                        phase: AtomicU8::new(ProgressPhase::Pending.to_u8()),
                    },
                )
            })
            .collect();

        Self { entries, renderer }
    }

    /// Mark a hook's child as spawned
    pub fn start(&self, hook: &HookDescriptor) -> Result<()> {
        self.advance(&hook.key(), ProgressPhase::Running)
    }

    /// Mark a hook as finished with `outcome`
    pub fn finish(&self, hook: &HookDescriptor, outcome: Outcome) -> Result<()> {
        self.advance(&hook.key(), ProgressPhase::Done(outcome))
    }

    /// Move the entry for `key` to `next`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if the move is not forward along
    /// the lifecycle, or a message error for an unknown key
    pub fn advance(&self, key: &str, next: ProgressPhase) -> Result<()> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| Error::Message(format!("No progress entry for '{key}'")))?;

        let current = ProgressPhase::from_u8(entry.phase.load(Ordering::Acquire));
        let invalid = || Error::InvalidTransition {
            key: key.to_string(),
            from: current.name(),
            to: next.name(),
        };

        if !current.can_advance_to(next) {
            return Err(invalid());
        }

        entry
            .phase
            .compare_exchange(
                current.to_u8(),
                next.to_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|_| invalid())?;

        self.renderer.transition(key, &entry.label, next);
        Ok(())
    }

    /// Current phase of an entry
    pub fn phase(&self, key: &str) -> Option<ProgressPhase> {
        self.entries
            .get(key)
            .map(|entry| ProgressPhase::from_u8(entry.phase.load(Ordering::Acquire)))
    }

    /// Whether every entry reached `Done`
    pub fn is_complete(&self) -> bool {
        self.entries
            .values()
            .all(|entry| ProgressPhase::from_u8(entry.phase.load(Ordering::Acquire)).is_done())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use hookhub_core::HookCategory;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<(String, ProgressPhase)>>,
        registered: Mutex<Vec<String>>,
    }

    impl ProgressRenderer for Recorder {
        fn register(&self, key: &str, _label: &str) {
            self.registered.lock().unwrap().push(key.to_string());
        }

        fn transition(&self, key: &str, _label: &str, phase: ProgressPhase) {
            self.events.lock().unwrap().push((key.to_string(), phase));
        }
    }

    fn hook(category: HookCategory, name: &str) -> HookDescriptor {
        HookDescriptor {
            name: name.to_string(),
            category,
            path: PathBuf::from(name),
            enabled: true,
            index: 0,
        }
    }

    #[test]
    fn test_legal_transitions() {
        use ProgressPhase::*;
        assert!(Pending.can_advance_to(Running));
        assert!(Pending.can_advance_to(Done(Outcome::Failure)));
        assert!(Running.can_advance_to(Done(Outcome::Success)));

        assert!(!Running.can_advance_to(Pending));
        assert!(!Running.can_advance_to(Running));
        assert!(!Done(Outcome::Success).can_advance_to(Running));
        assert!(!Done(Outcome::Success).can_advance_to(Done(Outcome::Failure)));
    }

    #[test]
    fn test_board_lifecycle() {
        let recorder = Recorder::default();
        let lint = hook(HookCategory::PreCommit, "lint");
        let board = ProgressBoard::new(std::slice::from_ref(&lint), &recorder);

        assert_eq!(board.phase("pre-commit/lint"), Some(ProgressPhase::Pending));
        assert!(!board.is_complete());

        board.start(&lint).unwrap();
        board.finish(&lint, Outcome::Success).unwrap();

        assert!(board.is_complete());
        assert_eq!(*recorder.registered.lock().unwrap(), vec!["pre-commit/lint"]);
        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec![
                ("pre-commit/lint".to_string(), ProgressPhase::Running),
                (
                    "pre-commit/lint".to_string(),
                    ProgressPhase::Done(Outcome::Success)
                ),
            ]
        );
    }

    #[test]
    fn test_board_rejects_backwards_transition() {
        let lint = hook(HookCategory::PreCommit, "lint");
        let board = ProgressBoard::new(std::slice::from_ref(&lint), &NoOpRenderer);

        board.finish(&lint, Outcome::Failure).unwrap();
        let err = board.start(&lint).unwrap_err();
        assert!(matches!(err, Error::InvalidTransition { .. }));
        assert_eq!(
            board.phase("pre-commit/lint"),
            Some(ProgressPhase::Done(Outcome::Failure))
        );
    }

    #[test]
    fn test_same_name_in_two_categories_has_two_entries() {
        let a = hook(HookCategory::PreCommit, "check");
        let b = hook(HookCategory::PrePush, "check");
        let board = ProgressBoard::new(&[a.clone(), b.clone()], &NoOpRenderer);

        board.start(&a).unwrap();
        assert_eq!(board.phase("pre-commit/check"), Some(ProgressPhase::Running));
        assert_eq!(board.phase("pre-push/check"), Some(ProgressPhase::Pending));
    }

    #[test]
    fn test_unknown_key() {
        let board = ProgressBoard::new(&[], &NoOpRenderer);
        assert!(board.phase("nope").is_none());
        assert!(board.advance("nope", ProgressPhase::Running).is_err());
    }

    #[test]
    fn test_concurrent_workers_own_their_entries() {
        let hooks: Vec<HookDescriptor> = (0..32)
            .map(|i| hook(HookCategory::PreCommit, &format!("hook-{i}")))
            .collect();
        let recorder = Recorder::default();
        let board = ProgressBoard::new(&hooks, &recorder);

        std::thread::scope(|s| {
            for h in &hooks {
                let board = &board;
                s.spawn(move || {
                    board.start(h).unwrap();
                    board.finish(h, Outcome::Success).unwrap();
                });
            }
        });

        assert!(board.is_complete());
        assert_eq!(recorder.events.lock().unwrap().len(), 64);
    }
}
