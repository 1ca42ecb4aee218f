use crate::error::LoadError;
use crate::species::VariantKey;

/// Identifies one load request. Only the newest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub variant: VariantKey,
}

/// Monotonic generation counter guarding against out-of-order completions
/// when the user switches models faster than they load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadGuard {
    generation: u64,
}

impl LoadGuard {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin(&mut self, variant: VariantKey) -> LoadTicket {
        self.generation += 1;
        LoadTicket {
            generation: self.generation,
            variant,
        }
    }

    pub fn check(&self, ticket: &LoadTicket) -> Result<(), LoadError> {
        if ticket.generation == self.generation {
            Ok(())
        } else {
            Err(LoadError::Stale {
                generation: ticket.generation,
                current: self.generation,
            })
        }
    }
}

/// Which animation clip drives the walk cycle for a freshly loaded model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipSelection {
    /// The reserved walk clip was found.
    Named { index: usize },
    /// No walk clip; the first clip stands in for it.
    Fallback { index: usize, name: Option<String> },
    /// The model has no clips at all; movement is inert.
    Missing,
}

impl ClipSelection {
    /// `clips` are the asset's clip names in file order; unnamed clips are `None`.
    pub fn select(clips: &[Option<&str>], walk_clip_name: &str) -> Self {
        if let Some(index) = clips.iter().position(|name| *name == Some(walk_clip_name)) {
            return ClipSelection::Named { index };
        }
        match clips.first() {
            Some(name) => ClipSelection::Fallback {
                index: 0,
                name: name.map(str::to_owned),
            },
            None => ClipSelection::Missing,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            ClipSelection::Named { index } | ClipSelection::Fallback { index, .. } => Some(*index),
            ClipSelection::Missing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut guard = LoadGuard::default();
        let first = guard.begin(VariantKey::Gecko);
        let second = guard.begin(VariantKey::Snake);

        assert_eq!(
            guard.check(&first),
            Err(LoadError::Stale {
                generation: 1,
                current: 2
            })
        );
        assert_eq!(guard.check(&second), Ok(()));
    }

    #[test]
    fn test_walk_clip_found_by_name() {
        let clips = [Some("IDLE"), Some("WALK"), None];
        assert_eq!(
            ClipSelection::select(&clips, "WALK"),
            ClipSelection::Named { index: 1 }
        );
    }

    #[test]
    fn test_first_clip_is_fallback() {
        let clips = [Some("Armature|Slither"), Some("IDLE")];
        let selection = ClipSelection::select(&clips, "WALK");
        assert_eq!(
            selection,
            ClipSelection::Fallback {
                index: 0,
                name: Some("Armature|Slither".to_string())
            }
        );
        assert_eq!(selection.index(), Some(0));
    }

    #[test]
    fn test_name_match_is_exact() {
        let clips = [Some("walk"), Some("WALKING")];
        assert!(matches!(
            ClipSelection::select(&clips, "WALK"),
            ClipSelection::Fallback { index: 0, .. }
        ));
    }

    #[test]
    fn test_no_clips() {
        assert_eq!(ClipSelection::select(&[], "WALK"), ClipSelection::Missing);
        assert_eq!(ClipSelection::Missing.index(), None);
    }
}
