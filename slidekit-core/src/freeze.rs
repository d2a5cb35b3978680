//! FreezeGate: a hard interlock on index mutation
//!
//! While frozen every navigation request is dropped, not deferred.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezeTransition {
    Froze,
    Thawed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreezeGate {
    frozen: bool,
}

impl FreezeGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// `true` when mutation may proceed.
    pub fn admits(&self) -> bool {
        !self.frozen
    }

    /// Set the flag, reporting the edge if it changed.
    pub fn set(&mut self, frozen: bool) -> Option<FreezeTransition> {
        if self.frozen == frozen {
            return None;
        }
        self.frozen = frozen;
        Some(if frozen {
            FreezeTransition::Froze
        } else {
            FreezeTransition::Thawed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_edges_only() {
        let mut gate = FreezeGate::new();
        assert!(gate.admits());
        assert_eq!(gate.set(true), Some(FreezeTransition::Froze));
        assert_eq!(gate.set(true), None);
        assert!(!gate.admits());
        assert_eq!(gate.set(false), Some(FreezeTransition::Thawed));
    }
}
