// Modal overlays
//
// Modals handle their own input and return an action. App holds
// Option<Modal>; the event loop applies the returned ModalAction.

use crate::feed::ArticleId;
use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, nothing to do
    None,
    Close,
    ScrollUp,
    ScrollDown,
    /// Hide the article shown in the modal, then close
    Hide(ArticleId),
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Full article body
    Detail { id: ArticleId, scroll: u16 },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn detail(id: ArticleId) -> Self {
        Modal::Detail { id, scroll: 0 }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Detail { id, scroll } => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => {
                    *scroll = scroll.saturating_sub(1);
                    ModalAction::ScrollUp
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    *scroll = scroll.saturating_add(1);
                    ModalAction::ScrollDown
                }
                KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
                    ModalAction::Hide(id.clone())
                }
                _ => ModalAction::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_scroll_and_hide() {
        let mut modal = Modal::detail(ArticleId::Number(3));
        assert_eq!(modal.handle_input(KeyCode::Down), ModalAction::ScrollDown);
        assert_eq!(modal.handle_input(KeyCode::Down), ModalAction::ScrollDown);
        assert_eq!(modal.handle_input(KeyCode::Up), ModalAction::ScrollUp);
        assert!(matches!(modal, Modal::Detail { scroll: 1, .. }));

        assert_eq!(
            modal.handle_input(KeyCode::Char('d')),
            ModalAction::Hide(ArticleId::Number(3))
        );
    }

    #[test]
    fn test_help_closes() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
    }
}
