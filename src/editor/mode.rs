//! The editor's interaction mode.
//!
//! Exactly one mode is active at any time. The original design this replaces
//! kept three booleans (`isDrawing`/`isEditing`/`isAppending`) synchronized by
//! hand; a single tagged union makes the mutual exclusion hold by
//! construction.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::map::FeatureId;

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub enum EditorMode {
    #[default]
    Idle,
    Drawing,
    Editing {
        selected: Option<FeatureId>,
    },
    Appending {
        target: FeatureId,
        /// Deep copy of the target's line taken when the append started;
        /// restored on cancellation and used to split off the newly
        /// sketched points on confirmation.
        backup: Vec<DVec2>,
    },
}

impl EditorMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorMode::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorMode::Drawing)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditorMode::Editing { .. })
    }

    pub fn is_appending(&self) -> bool {
        matches!(self, EditorMode::Appending { .. })
    }

    /// The selected feature while Editing, or the append target while
    /// Appending (the target stays visually selected for the whole session).
    pub fn selected(&self) -> Option<FeatureId> {
        match self {
            EditorMode::Editing { selected } => *selected,
            EditorMode::Appending { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// True iff Enter can finish something (drawing or appending).
    pub fn can_finish(&self) -> bool {
        self.is_drawing() || self.is_appending()
    }

    /// True iff Escape can cancel something: an active draw/append, or a
    /// selection while editing.
    pub fn can_cancel(&self) -> bool {
        match self {
            EditorMode::Drawing | EditorMode::Appending { .. } => true,
            EditorMode::Editing { selected } => selected.is_some(),
            EditorMode::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert!(EditorMode::default().is_idle());
    }

    #[test]
    fn test_flags_are_mutually_exclusive() {
        let modes = [
            EditorMode::Idle,
            EditorMode::Drawing,
            EditorMode::Editing { selected: None },
            EditorMode::Editing {
                selected: Some(crate::map::FeatureId(7)),
            },
            EditorMode::Appending {
                target: crate::map::FeatureId(7),
                backup: vec![DVec2::ZERO, DVec2::ONE],
            },
        ];
        for mode in modes {
            let flags =
                [mode.is_idle(), mode.is_drawing(), mode.is_editing(), mode.is_appending()];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "mode {:?}", mode);
        }
    }

    #[test]
    fn test_can_finish() {
        assert!(!EditorMode::Idle.can_finish());
        assert!(EditorMode::Drawing.can_finish());
        assert!(!EditorMode::Editing { selected: None }.can_finish());
        assert!(EditorMode::Appending {
            target: crate::map::FeatureId(0),
            backup: vec![]
        }
        .can_finish());
    }

    #[test]
    fn test_can_cancel() {
        assert!(!EditorMode::Idle.can_cancel());
        assert!(EditorMode::Drawing.can_cancel());
        assert!(!EditorMode::Editing { selected: None }.can_cancel());
        assert!(EditorMode::Editing {
            selected: Some(crate::map::FeatureId(3))
        }
        .can_cancel());
    }

    #[test]
    fn test_append_target_counts_as_selected() {
        let mode = EditorMode::Appending {
            target: crate::map::FeatureId(5),
            backup: vec![],
        };
        assert_eq!(mode.selected(), Some(crate::map::FeatureId(5)));
    }
}
