//! Static view registry and the uniform visibility toggle.
//!
//! Views are declared once at startup from the site map; none are created or
//! destroyed afterwards — only their visibility flag mutates. Transitions
//! never rely on the previous state being correct: [`ViewRegistry::show_only`]
//! hides every sibling of the target's kind before showing the target.

/// What a view is, which determines its default visibility and how the app
/// layer renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Top-level page section (hero, portfolio, contact, footer, ...).
    Section,
    /// Fullscreen detail panel for one portfolio category.
    CategoryDetail,
    /// Detail panel for one item, nested inside a category.
    ItemDetail,
    /// Fullscreen biographical overlay (education, certificate, team, ...).
    Spotlight,
}

/// A unit of content that can be shown or hidden as a whole.
#[derive(Debug, Clone)]
pub struct View {
    /// Stable identifier matching the data attributes of the content model.
    pub id: String,
    pub kind: ViewKind,
    /// Item details name their parent category; spotlights name the section
    /// they belong to (used for direct-link shortcut exits).
    pub group: Option<String>,
    visible: bool,
}

impl View {
    /// Declare a view. Sections start visible; detail panels and overlays
    /// start hidden.
    pub fn new(id: impl Into<String>, kind: ViewKind, group: Option<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            group,
            visible: kind == ViewKind::Section,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Mirror of the visibility flag for overlays that stay in the tree even
    /// when hidden.
    pub fn aria_hidden(&self) -> bool {
        !self.visible
    }
}

/// The static set of views and the visibility primitive applied to all of
/// them. Unknown ids are tolerated everywhere: a missing view is an absent
/// feature, not an error.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: Vec<View>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a view at startup.
    pub fn declare(&mut self, view: View) {
        self.views.push(view);
    }

    pub fn get(&self, id: &str) -> Option<&View> {
        self.views.iter().find(|v| v.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut View> {
        self.views.iter_mut().find(|v| v.id == id)
    }

    /// Visibility of a view; unknown ids read as hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        self.get(id).is_some_and(View::is_visible)
    }

    /// Toggle one view. No-op for unknown ids.
    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(view) = self.get_mut(id) {
            view.visible = visible;
        }
    }

    /// Hide every view of `kind` and show only the target. The full reset
    /// runs unconditionally so the final state is independent of whatever
    /// came before. Returns false (and changes nothing) when the target is
    /// unknown or of a different kind.
    pub fn show_only(&mut self, kind: ViewKind, id: &str) -> bool {
        if !self.get(id).is_some_and(|v| v.kind == kind) {
            return false;
        }
        for view in self.views.iter_mut().filter(|v| v.kind == kind) {
            view.visible = view.id == id;
        }
        true
    }

    /// Hide every view of `kind`.
    pub fn hide_all(&mut self, kind: ViewKind) {
        for view in self.views.iter_mut().filter(|v| v.kind == kind) {
            view.visible = false;
        }
    }

    /// Show every view of `kind`. Used to restore the default section layout
    /// when leaving a fullscreen mode.
    pub fn show_all(&mut self, kind: ViewKind) {
        for view in self.views.iter_mut().filter(|v| v.kind == kind) {
            view.visible = true;
        }
    }

    /// Whether any view of `kind` is currently visible.
    pub fn any_visible(&self, kind: ViewKind) -> bool {
        self.views
            .iter()
            .any(|v| v.kind == kind && v.visible)
    }

    /// The visible view of `kind`, if exactly the mutual-exclusion invariant
    /// holds this is unique; callers get the first match.
    pub fn visible_of(&self, kind: ViewKind) -> Option<&View> {
        self.views.iter().find(|v| v.kind == kind && v.visible)
    }

    /// Ids of every view of `kind`, in declaration order.
    pub fn ids_of(&self, kind: ViewKind) -> Vec<String> {
        self.views
            .iter()
            .filter(|v| v.kind == kind)
            .map(|v| v.id.clone())
            .collect()
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }
}
