//! Confirmation step for destructive actions.

/// Asks the user to confirm a destructive action.
///
/// Returning `false` aborts the action before any request is sent.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
