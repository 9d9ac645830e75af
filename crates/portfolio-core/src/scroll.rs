//! Scroll position stack and restoration effects.
//!
//! Every drill-in transition that expects a "back" to return somewhere saves
//! the viewport offset here; the matching back/close pops it. The stack is
//! pure state — moving the viewport is described by a [`ScrollEffect`] that
//! the app layer applies after the next render pass, so the just-shown view
//! has committed its final layout height before the offset is written.

/// How the app layer should move the viewport after a transition commits.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollEffect {
    /// Instant jump to an absolute offset.
    JumpTo(f64),
    /// Eased scroll to an absolute offset.
    EaseTo(f64),
    /// Instant jump to the top of a section, resolved at apply time.
    JumpToSection(String),
    /// Eased scroll to the top of a section.
    EaseToSection(String),
    /// Instant jump to the document top.
    ToTop,
}

/// Stack of saved vertical scroll offsets. Last pushed, first restored.
#[derive(Debug, Clone, Default)]
pub struct ScrollStack {
    offsets: Vec<f64>,
}

impl ScrollStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Save an offset before a drill-in transition. Negative offsets are
    /// clamped to zero.
    pub fn save(&mut self, offset: f64) {
        self.offsets.push(offset.max(0.0));
    }

    /// Pop the most recent offset. Popping an empty stack is a defined
    /// no-op: there is simply nothing to restore.
    pub fn restore(&mut self) -> Option<f64> {
        self.offsets.pop()
    }

    /// Pop and drop the most recent offset without restoring it. Used when
    /// backing out two levels at once: the intermediate entry is not a
    /// meaningful anchor.
    pub fn discard(&mut self) {
        self.offsets.pop();
    }

    /// Number of saved offsets.
    pub fn depth(&self) -> usize {
        self.offsets.len()
    }

    /// Whether no offsets are saved.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
