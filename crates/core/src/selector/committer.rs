use log::debug;

use super::types::{Effect, SelectionResult};

/// Finalizes the session outcome. The first call wins; later calls change nothing.
#[derive(Debug, Default)]
pub struct SelectionCommitter {
    result: Option<SelectionResult>,
}

impl SelectionCommitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` as the selection and signals termination.
    pub fn commit(&mut self, key: &str) -> Option<Effect> {
        self.finalize(SelectionResult::Selected(key.to_string()))
    }

    /// Records "no selection" and signals termination.
    pub fn cancel(&mut self) -> Option<Effect> {
        self.finalize(SelectionResult::Cancelled)
    }

    fn finalize(&mut self, result: SelectionResult) -> Option<Effect> {
        if let Some(existing) = &self.result {
            debug!("Ignoring {result:?}, session already ended with {existing:?}");
            return None;
        }

        debug!("Session ended with {result:?}");
        self.result = Some(result.clone());
        Some(Effect::Terminate(result))
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<&SelectionResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn into_result(self) -> Option<SelectionResult> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_sets_result_once() {
        let mut committer = SelectionCommitter::new();
        assert!(!committer.is_terminated());

        let effect = committer.commit("i-1");
        assert_eq!(
            effect,
            Some(Effect::Terminate(SelectionResult::Selected("i-1".to_string())))
        );

        assert_eq!(committer.commit("i-2"), None);
        assert_eq!(committer.cancel(), None);
        assert_eq!(
            committer.result(),
            Some(&SelectionResult::Selected("i-1".to_string()))
        );
    }

    #[test]
    fn test_cancel_sets_result_once() {
        let mut committer = SelectionCommitter::new();

        assert_eq!(
            committer.cancel(),
            Some(Effect::Terminate(SelectionResult::Cancelled))
        );
        assert_eq!(committer.commit("i-1"), None);
        assert_eq!(committer.into_result(), Some(SelectionResult::Cancelled));
    }
}
