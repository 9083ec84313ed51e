// Navigation state - session history and current resolution

use crate::routing::table::Resolution;

/// One immutable snapshot of where the session currently is.
///
/// `history` holds visited paths oldest-first; `cursor` indexes the path
/// the active resolution was produced from. The router clones a snapshot,
/// mutates the clone, and swaps it in wholesale.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub active: Resolution,
    pub active_path: Option<String>,
    pub history: Vec<String>,
    pub cursor: usize,
}

impl NavigationState {
    /// Record a newly visited path, dropping any forward history.
    pub fn push_history(&mut self, path: String) {
        if !self.history.is_empty() {
            self.history.truncate(self.cursor + 1);
        }
        self.history.push(path);
        self.cursor = self.history.len() - 1;
    }

    /// Move the cursor back one step, returning the path to re-resolve.
    pub fn step_back(&mut self) -> Option<String> {
        if self.cursor > 0 {
            self.cursor -= 1;
            Some(self.history[self.cursor].clone())
        } else {
            None
        }
    }

    /// Move the cursor forward one step, returning the path to re-resolve.
    pub fn step_forward(&mut self) -> Option<String> {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            Some(self.history[self.cursor].clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_noops_at_either_end() {
        let mut state = NavigationState::default();
        assert_eq!(state.step_back(), None);
        assert_eq!(state.step_forward(), None);

        state.push_history("/".to_string());
        assert_eq!(state.step_back(), None);
        assert_eq!(state.step_forward(), None);
    }

    #[test]
    fn pushing_truncates_the_forward_branch() {
        let mut state = NavigationState::default();
        state.push_history("/".to_string());
        state.push_history("/about".to_string());
        state.push_history("/temp".to_string());

        assert_eq!(state.step_back(), Some("/about".to_string()));
        state.push_history("/source".to_string());

        // "/temp" is gone; forward from "/source" has nowhere to go.
        assert_eq!(state.step_forward(), None);
        assert_eq!(state.history, vec!["/", "/about", "/source"]);
    }

    #[test]
    fn back_and_forward_walk_the_history() {
        let mut state = NavigationState::default();
        state.push_history("/".to_string());
        state.push_history("/about".to_string());

        assert_eq!(state.step_back(), Some("/".to_string()));
        assert_eq!(state.step_forward(), Some("/about".to_string()));
    }
}
