//! Step completion state.

/// Edge-triggered completion latch for a wizard step.
///
/// A step moves from incomplete to complete exactly once; re-affirming the
/// checkbox afterwards, or unchecking it, never signals the parent again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCompletion {
    understood: bool,
    completed: bool,
}

impl StepCompletion {
    /// Applies a checkbox change. Returns `true` exactly when the step
    /// transitions to complete, i.e. the caller must invoke `on_complete`.
    ///
    /// `has_required_data` gates the transition; steps without required
    /// fields pass `true`.
    pub fn set_understood(&mut self, understood: bool, has_required_data: bool) -> bool {
        self.understood = understood;
        if understood && has_required_data && !self.completed {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn understood(&self) -> bool {
        self.understood
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut step = StepCompletion::default();
        assert!(step.set_understood(true, true));
        assert!(!step.set_understood(true, true));
        assert!(step.completed());
    }

    #[test]
    fn test_completion_blocked_without_required_data() {
        let mut step = StepCompletion::default();
        assert!(!step.set_understood(true, false));
        assert!(step.understood());
        assert!(!step.completed());

        // required data arrives, the user re-affirms
        assert!(step.set_understood(true, true));
    }

    #[test]
    fn test_unchecking_does_not_regress() {
        let mut step = StepCompletion::default();
        assert!(step.set_understood(true, true));

        assert!(!step.set_understood(false, true));
        assert!(!step.understood());
        assert!(step.completed(), "there is no complete -> incomplete transition");

        // checking again after a completed step stays silent
        assert!(!step.set_understood(true, true));
    }
}
