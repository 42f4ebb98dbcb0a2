#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Activate,
    Ignore,
}

/// Animate-once bookkeeping for scroll reveal.
///
/// The observer's own threshold decides when an entry counts as intersecting,
/// so any intersecting report activates. An element taller than the viewport
/// can never reach a large visible ratio and must still be revealed.
/// Keys are watched until their first intersection, then dropped; later
/// reports for the same key are ignored.
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    watching: Vec<K>,
    activated: usize,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            watching: Vec::new(),
            activated: 0,
        }
    }
}

impl<K: PartialEq> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&mut self, key: K) {
        if !self.watching.contains(&key) {
            self.watching.push(key);
        }
    }

    pub fn record(&mut self, key: &K, is_intersecting: bool) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        match self.watching.iter().position(|k| k == key) {
            Some(i) => {
                self.watching.swap_remove(i);
                self.activated += 1;
                RevealAction::Activate
            }
            None => RevealAction::Ignore,
        }
    }

    pub fn pending(&self) -> usize {
        self.watching.len()
    }

    pub fn activated(&self) -> usize {
        self.activated
    }

    pub fn is_done(&self) -> bool {
        self.watching.is_empty()
    }
}
