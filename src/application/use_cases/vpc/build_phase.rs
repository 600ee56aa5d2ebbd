//! Build phases of a topology construction
//!
//! `Validating -> ContainerCreated -> (PublicBuilt)? -> (PrivateBuilt)? -> (LogBound)? -> Done`,
//! with `Failed` reachable from every phase that is not terminal.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Validating,
    ContainerCreated,
    PublicBuilt,
    PrivateBuilt,
    LogBound,
    Done,
    Failed,
}

impl BuildPhase {
    fn rank(self) -> u8 {
        match self {
            Self::Validating => 0,
            Self::ContainerCreated => 1,
            Self::PublicBuilt => 2,
            Self::PrivateBuilt => 3,
            Self::LogBound => 4,
            Self::Done => 5,
            Self::Failed => 6,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Whether `next` is a legal successor of this phase
    ///
    /// Advisory only: nothing stops a caller from ignoring the answer. The
    /// builder checks its own transitions with `debug_assert!`, so release
    /// builds do not enforce them.
    #[must_use]
    pub fn can_advance_to(self, next: BuildPhase) -> bool {
        if self.is_terminal() {
            return false;
        }
        match (self, next) {
            (_, Self::Failed) => true,
            (Self::Validating, next) => next == Self::ContainerCreated,
            (current, next) => next.rank() > current.rank(),
        }
    }
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validating => "validating",
            Self::ContainerCreated => "container_created",
            Self::PublicBuilt => "public_built",
            Self::PrivateBuilt => "private_built",
            Self::LogBound => "log_bound",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Tracks the phase of one construction and logs its transitions
#[derive(Debug)]
pub(super) struct BuildProgress<'a> {
    topology: &'a str,
    phase: BuildPhase,
}

impl<'a> BuildProgress<'a> {
    pub(super) fn new(topology: &'a str) -> Self {
        Self {
            topology,
            phase: BuildPhase::Validating,
        }
    }

    pub(super) fn phase(&self) -> BuildPhase {
        self.phase
    }

    pub(super) fn advance(&mut self, next: BuildPhase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal build phase transition {} -> {}",
            self.phase,
            next
        );
        tracing::debug!(topology = %self.topology, from = %self.phase, to = %next, "Build phase transition");
        self.phase = next;
    }

    /// Move to `Failed`, returning the phase the failure happened in
    pub(super) fn fail(&mut self) -> BuildPhase {
        let failed_in = self.phase;
        self.advance(BuildPhase::Failed);
        failed_in
    }
}
