//! The navigation state machine.
//!
//! Tracks the current fullscreen mode, drives every visibility transition
//! through the [`ViewRegistry`], and owns both the [`ScrollStack`] and the
//! shortcut context — nothing here is ambient global state. Each operation
//! returns a [`Transition`] describing the scroll side effect and any
//! deferred inner drill-down; the app layer applies it after the next paint.
//!
//! ## States
//!
//! - `Normal` — all top-level sections visible.
//! - `PortfolioDrilldown` — one category detail visible, other sections and
//!   the footer hidden; optionally one item detail nested inside it.
//! - `SpotlightOverlay` — one biographical overlay visible.
//!
//! The two fullscreen states are mutually exclusive by construction: the
//! mode is a single enum value, never two independent flags.

use crate::scroll::{ScrollEffect, ScrollStack};
use crate::view::{ViewKind, ViewRegistry};

/// Section hosting the category drill-down. Shortcut exits from the
/// portfolio jump here instead of restoring from the stack.
pub const PORTFOLIO_SECTION: &str = "portfolio";

/// The current top-level display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenMode {
    #[default]
    None,
    PortfolioDrilldown,
    SpotlightOverlay,
}

/// Shortcut-entry flags, set when a dropdown adapter jumps directly into a
/// nested view and cleared when that view closes. At most one of the
/// portfolio/spotlight contexts is meaningfully active at a time since only
/// one fullscreen mode can be active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavContext {
    /// Portfolio drill-down was entered via a dropdown shortcut; its exit
    /// jumps to the portfolio section instead of restoring from the stack.
    pub opened_portfolio_from_shortcut: bool,
    /// Section a shortcut-opened spotlight should fall back to on soft-back.
    pub spotlight_shortcut_group: Option<String>,
    /// Section the currently open spotlight belongs to.
    pub active_spotlight_group: Option<String>,
}

/// A deferred inner drill-down, scheduled by the app layer on the next paint
/// cycle so the inner view's target has valid layout geometry. Carries the
/// generation of the transition that produced it; stale follow-ups are
/// dropped rather than acting on outdated target ids.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowUp {
    pub generation: u64,
    pub action: FollowUpAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FollowUpAction {
    EnterItem(String),
}

/// Result of a controller operation. The app layer applies the scroll
/// effect after layout commits, updates the highlighted nav link, and
/// schedules the follow-up if present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    pub scroll: Option<ScrollEffect>,
    pub active_section: Option<String>,
    pub follow_up: Option<FollowUp>,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }
}

/// The two spotlight close actions, with different restoration semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotlightClose {
    /// In-overlay back control or Escape: eased restore, unless the overlay
    /// was opened via a shortcut — then jump to the owning section and
    /// abandon the stack entry.
    SoftBack,
    /// Explicit close control: always pop and restore instantly, clearing
    /// shortcut flags regardless of how the view was entered.
    Cross,
}

/// Orchestrates transitions between views. Owns the registry, the scroll
/// stack and the shortcut context; all entry-point adapters funnel into the
/// operations below and never duplicate hide/show sequences.
#[derive(Debug, Clone)]
pub struct NavigationController {
    registry: ViewRegistry,
    stack: ScrollStack,
    ctx: NavContext,
    mode: FullscreenMode,
    generation: u64,
}

impl NavigationController {
    pub fn new(registry: ViewRegistry) -> Self {
        Self {
            registry,
            stack: ScrollStack::new(),
            ctx: NavContext::default(),
            mode: FullscreenMode::None,
            generation: 0,
        }
    }

    pub fn mode(&self) -> FullscreenMode {
        self.mode
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn context(&self) -> &NavContext {
        &self.ctx
    }

    /// Depth of the scroll stack. Exposed for the app layer's diagnostics
    /// and for tests.
    pub fn stack_depth(&self) -> usize {
        self.stack.depth()
    }

    /// Monotonic transition counter; follow-ups minted by older transitions
    /// no longer match it and are dropped.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn begin_transition(&mut self) {
        self.generation += 1;
    }

    // --- derived visibility for the app layer -------------------------------

    pub fn section_visible(&self, id: &str) -> bool {
        self.registry.is_visible(id)
    }

    /// The portfolio header and category card grid show whenever the
    /// drill-down is not active.
    pub fn categories_grid_visible(&self) -> bool {
        self.mode != FullscreenMode::PortfolioDrilldown
    }

    /// A category's item grid shows as long as none of its item details do.
    pub fn item_grid_visible(&self, category: &str) -> bool {
        !self
            .registry
            .views()
            .iter()
            .any(|v| {
                v.kind == ViewKind::ItemDetail
                    && v.group.as_deref() == Some(category)
                    && v.is_visible()
            })
    }

    pub fn active_category(&self) -> Option<&str> {
        self.registry
            .visible_of(ViewKind::CategoryDetail)
            .map(|v| v.id.as_str())
    }

    pub fn active_item(&self) -> Option<&str> {
        self.registry
            .visible_of(ViewKind::ItemDetail)
            .map(|v| v.id.as_str())
    }

    pub fn active_spotlight(&self) -> Option<&str> {
        self.registry
            .visible_of(ViewKind::Spotlight)
            .map(|v| v.id.as_str())
    }

    /// Section whose nav link stays highlighted regardless of scroll-spy:
    /// the portfolio link in drill-down mode, the owning section of an open
    /// spotlight.
    pub fn pinned_section(&self) -> Option<&str> {
        match self.mode {
            FullscreenMode::PortfolioDrilldown => Some(PORTFOLIO_SECTION),
            FullscreenMode::SpotlightOverlay => self.ctx.active_spotlight_group.as_deref(),
            FullscreenMode::None => None,
        }
    }

    // --- portfolio drill-down ----------------------------------------------

    /// Normal → PortfolioCategory.
    ///
    /// `current_offset` is the viewport offset at the moment of the gesture
    /// and becomes the restore anchor for the matching exit. A shortcut
    /// entry saves nothing: its exit jumps to the portfolio section top.
    /// `nested_item` yields a follow-up the app layer schedules once the
    /// outer view has layout.
    pub fn enter_category(
        &mut self,
        id: &str,
        current_offset: f64,
        nested_item: Option<&str>,
        via_shortcut: bool,
    ) -> Transition {
        if !self
            .registry
            .get(id)
            .is_some_and(|v| v.kind == ViewKind::CategoryDetail)
        {
            return Transition::none();
        }
        self.begin_transition();
        self.leave_fullscreen_silently();

        if via_shortcut {
            self.ctx.opened_portfolio_from_shortcut = true;
        } else {
            self.stack.save(current_offset);
        }

        for section in self.registry.ids_of(ViewKind::Section) {
            if section != PORTFOLIO_SECTION {
                self.registry.set_visible(&section, false);
            }
        }
        self.registry.hide_all(ViewKind::ItemDetail);
        self.registry.show_only(ViewKind::CategoryDetail, id);
        self.mode = FullscreenMode::PortfolioDrilldown;

        Transition {
            scroll: Some(ScrollEffect::ToTop),
            active_section: Some(PORTFOLIO_SECTION.to_string()),
            follow_up: nested_item.map(|item| FollowUp {
                generation: self.generation,
                action: FollowUpAction::EnterItem(item.to_string()),
            }),
        }
    }

    /// PortfolioCategory → PortfolioItem.
    ///
    /// Saves an extra stack entry. The item-level back restores it; exiting
    /// straight to Normal discards it, since the category view's offset —
    /// not the item grid's — is the meaningful anchor.
    pub fn enter_item(&mut self, id: &str, current_offset: f64) -> Transition {
        if self.mode != FullscreenMode::PortfolioDrilldown {
            return Transition::none();
        }
        if !self
            .registry
            .get(id)
            .is_some_and(|v| v.kind == ViewKind::ItemDetail)
        {
            return Transition::none();
        }
        self.begin_transition();
        self.stack.save(current_offset);
        self.registry.show_only(ViewKind::ItemDetail, id);
        Transition {
            scroll: Some(ScrollEffect::ToTop),
            ..Transition::none()
        }
    }

    /// Run a deferred inner transition if it is still current.
    pub fn apply_follow_up(&mut self, follow_up: &FollowUp) -> Transition {
        if follow_up.generation != self.generation {
            tracing::debug!(
                stale = follow_up.generation,
                current = self.generation,
                "dropping stale follow-up"
            );
            return Transition::none();
        }
        match &follow_up.action {
            FollowUpAction::EnterItem(id) => {
                if self.mode != FullscreenMode::PortfolioDrilldown {
                    return Transition::none();
                }
                // Shortcut path: the user never saw the item grid, so there
                // is no offset worth saving.
                if !self.registry.show_only(ViewKind::ItemDetail, id) {
                    return Transition::none();
                }
                Transition {
                    scroll: Some(ScrollEffect::ToTop),
                    ..Transition::none()
                }
            }
        }
    }

    /// PortfolioItem → PortfolioCategory: back to the item grid, restoring
    /// the category view's offset instantly. No-op unless an item detail is
    /// actually open — popping at category level would consume the origin
    /// entry the category-level exit still needs.
    pub fn back_to_item_grid(&mut self) -> Transition {
        if self.mode != FullscreenMode::PortfolioDrilldown {
            return Transition::none();
        }
        if !self.registry.any_visible(ViewKind::ItemDetail) {
            return Transition::none();
        }
        self.begin_transition();
        self.registry.hide_all(ViewKind::ItemDetail);
        Transition {
            scroll: self.stack.restore().map(ScrollEffect::JumpTo),
            ..Transition::none()
        }
    }

    /// PortfolioCategory/PortfolioItem → Normal.
    pub fn exit_portfolio(&mut self) -> Transition {
        if self.mode != FullscreenMode::PortfolioDrilldown {
            return Transition::none();
        }
        self.begin_transition();
        let scroll = self.reset_portfolio_views();
        Transition {
            scroll,
            ..Transition::none()
        }
    }

    /// Shared teardown for the drill-down: reset nested views, restore the
    /// default section layout, decide the scroll target.
    fn reset_portfolio_views(&mut self) -> Option<ScrollEffect> {
        if self.registry.any_visible(ViewKind::ItemDetail) {
            self.stack.discard();
        }
        self.registry.hide_all(ViewKind::ItemDetail);
        self.registry.hide_all(ViewKind::CategoryDetail);
        self.registry.show_all(ViewKind::Section);
        self.mode = FullscreenMode::None;

        if self.ctx.opened_portfolio_from_shortcut {
            self.ctx.opened_portfolio_from_shortcut = false;
            Some(ScrollEffect::JumpToSection(PORTFOLIO_SECTION.to_string()))
        } else {
            self.stack.restore().map(ScrollEffect::JumpTo)
        }
    }

    /// Leave whatever fullscreen mode is active without a scroll restore,
    /// consuming anything the mode saved so no entries leak. Entering one
    /// fullscreen view from another (dropdown shortcuts reach everywhere)
    /// goes through here first.
    fn leave_fullscreen_silently(&mut self) {
        match self.mode {
            FullscreenMode::None => {}
            FullscreenMode::PortfolioDrilldown => {
                if self.registry.any_visible(ViewKind::ItemDetail) {
                    self.stack.discard();
                }
                if self.ctx.opened_portfolio_from_shortcut {
                    self.ctx.opened_portfolio_from_shortcut = false;
                } else {
                    self.stack.discard();
                }
                self.registry.hide_all(ViewKind::ItemDetail);
                self.registry.hide_all(ViewKind::CategoryDetail);
                self.registry.show_all(ViewKind::Section);
                self.mode = FullscreenMode::None;
            }
            FullscreenMode::SpotlightOverlay => {
                self.registry.hide_all(ViewKind::Spotlight);
                self.ctx.active_spotlight_group = None;
                self.ctx.spotlight_shortcut_group = None;
                self.stack.discard();
                self.mode = FullscreenMode::None;
            }
        }
    }

    // --- spotlight overlays -------------------------------------------------

    /// Normal → Spotlight. Both entry paths save the offset; the two close
    /// actions differ in whether they consume it. `shortcut_group` marks a
    /// dropdown entry and names the section soft-back should land on.
    pub fn open_spotlight(
        &mut self,
        id: &str,
        current_offset: f64,
        shortcut_group: Option<&str>,
    ) -> Transition {
        let Some(view) = self.registry.get(id) else {
            return Transition::none();
        };
        if view.kind != ViewKind::Spotlight {
            return Transition::none();
        }
        let group = view.group.clone();

        self.begin_transition();
        self.leave_fullscreen_silently();
        self.stack.save(current_offset);
        self.registry.show_only(ViewKind::Spotlight, id);
        self.mode = FullscreenMode::SpotlightOverlay;
        self.ctx.active_spotlight_group = group.clone();
        self.ctx.spotlight_shortcut_group = shortcut_group.map(str::to_string);

        Transition {
            scroll: shortcut_group.is_some().then_some(ScrollEffect::ToTop),
            active_section: group,
            follow_up: None,
        }
    }

    /// Spotlight → Normal, via either close action.
    pub fn close_spotlight(&mut self, close: SpotlightClose) -> Transition {
        if self.mode != FullscreenMode::SpotlightOverlay {
            return Transition::none();
        }
        self.begin_transition();
        self.registry.hide_all(ViewKind::Spotlight);
        self.mode = FullscreenMode::None;
        self.ctx.active_spotlight_group = None;

        let scroll = match close {
            SpotlightClose::SoftBack => {
                if let Some(group) = self.ctx.spotlight_shortcut_group.take() {
                    // The entry saved at open is abandoned, not restored:
                    // soft-back from a shortcut lands on the owning section.
                    Some(ScrollEffect::JumpToSection(group))
                } else {
                    self.stack.restore().map(ScrollEffect::EaseTo)
                }
            }
            SpotlightClose::Cross => {
                self.ctx.spotlight_shortcut_group = None;
                self.stack.restore().map(ScrollEffect::JumpTo)
            }
        };

        Transition {
            scroll,
            ..Transition::none()
        }
    }

    /// Escape key: soft-back semantics when a spotlight is open, otherwise
    /// nothing.
    pub fn handle_escape(&mut self) -> Transition {
        if self.mode == FullscreenMode::SpotlightOverlay {
            self.close_spotlight(SpotlightClose::SoftBack)
        } else {
            Transition::none()
        }
    }

    // --- primary navigation -------------------------------------------------

    /// Primary nav click. Any open fullscreen mode exits first,
    /// synchronously and without its scroll restore (the jump to the new
    /// target wins), with whatever the mode saved popped or discarded so
    /// entries never leak. In Normal mode this is a plain eased section
    /// jump.
    pub fn go_to_section(&mut self, id: &str) -> Transition {
        let instant = self.mode != FullscreenMode::None;
        self.begin_transition();
        self.leave_fullscreen_silently();

        let scroll = if instant {
            ScrollEffect::JumpToSection(id.to_string())
        } else {
            ScrollEffect::EaseToSection(id.to_string())
        };
        Transition {
            scroll: Some(scroll),
            active_section: Some(id.to_string()),
            follow_up: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::View;

    fn controller() -> NavigationController {
        let mut reg = ViewRegistry::new();
        for section in ["hero", "portfolio", "team", "education", "contact", "footer"] {
            reg.declare(View::new(section, ViewKind::Section, None));
        }
        reg.declare(View::new("apps", ViewKind::CategoryDetail, None));
        reg.declare(View::new("software", ViewKind::CategoryDetail, None));
        reg.declare(View::new(
            "fitness-app",
            ViewKind::ItemDetail,
            Some("apps".to_string()),
        ));
        reg.declare(View::new(
            "recipe-app",
            ViewKind::ItemDetail,
            Some("apps".to_string()),
        ));
        reg.declare(View::new(
            "team-lena",
            ViewKind::Spotlight,
            Some("team".to_string()),
        ));
        reg.declare(View::new(
            "edu-masters",
            ViewKind::Spotlight,
            Some("education".to_string()),
        ));
        NavigationController::new(reg)
    }

    #[test]
    fn test_enter_category_pushes_and_hides_sections() {
        let mut nav = controller();
        let t = nav.enter_category("apps", 400.0, None, false);
        assert_eq!(t.scroll, Some(ScrollEffect::ToTop));
        assert_eq!(t.active_section.as_deref(), Some("portfolio"));
        assert_eq!(nav.mode(), FullscreenMode::PortfolioDrilldown);
        assert_eq!(nav.stack_depth(), 1);
        assert!(!nav.section_visible("hero"));
        assert!(!nav.section_visible("footer"));
        assert!(nav.section_visible("portfolio"));
        assert_eq!(nav.active_category(), Some("apps"));
        assert!(!nav.categories_grid_visible());
    }

    #[test]
    fn test_enter_unknown_category_is_noop() {
        let mut nav = controller();
        let t = nav.enter_category("nope", 400.0, None, false);
        assert_eq!(t, Transition::none());
        assert_eq!(nav.mode(), FullscreenMode::None);
        assert_eq!(nav.stack_depth(), 0);
    }

    #[test]
    fn test_full_drilldown_round_trip_restores_origin() {
        let mut nav = controller();

        nav.enter_category("apps", 400.0, None, false);
        assert_eq!(nav.stack_depth(), 1);

        nav.enter_item("fitness-app", 90.0);
        assert_eq!(nav.stack_depth(), 2);
        assert_eq!(nav.active_item(), Some("fitness-app"));
        assert!(!nav.item_grid_visible("apps"));

        let back = nav.back_to_item_grid();
        assert_eq!(back.scroll, Some(ScrollEffect::JumpTo(90.0)));
        assert_eq!(nav.stack_depth(), 1);
        assert!(nav.item_grid_visible("apps"));

        let exit = nav.exit_portfolio();
        assert_eq!(exit.scroll, Some(ScrollEffect::JumpTo(400.0)));
        assert_eq!(nav.stack_depth(), 0);
        assert_eq!(nav.mode(), FullscreenMode::None);
        assert!(nav.section_visible("hero"));
        assert!(nav.section_visible("footer"));
    }

    #[test]
    fn test_exit_from_item_level_discards_intermediate_entry() {
        let mut nav = controller();
        nav.enter_category("apps", 400.0, None, false);
        nav.enter_item("fitness-app", 90.0);

        let exit = nav.exit_portfolio();
        assert_eq!(exit.scroll, Some(ScrollEffect::JumpTo(400.0)));
        assert_eq!(nav.stack_depth(), 0);
    }

    #[test]
    fn test_item_switch_hides_siblings() {
        let mut nav = controller();
        nav.enter_category("apps", 0.0, None, false);
        nav.enter_item("fitness-app", 0.0);
        nav.enter_item("recipe-app", 0.0);
        assert_eq!(nav.active_item(), Some("recipe-app"));
        assert!(!nav.registry().is_visible("fitness-app"));
    }

    #[test]
    fn test_shortcut_category_entry_saves_nothing_and_exits_to_section() {
        let mut nav = controller();
        let t = nav.enter_category("apps", 400.0, None, true);
        assert_eq!(nav.stack_depth(), 0);
        assert!(nav.context().opened_portfolio_from_shortcut);
        assert_eq!(t.follow_up, None);

        let exit = nav.exit_portfolio();
        assert_eq!(
            exit.scroll,
            Some(ScrollEffect::JumpToSection("portfolio".to_string()))
        );
        assert!(!nav.context().opened_portfolio_from_shortcut);
        assert_eq!(nav.stack_depth(), 0);
    }

    #[test]
    fn test_nested_shortcut_schedules_follow_up() {
        let mut nav = controller();
        let t = nav.enter_category("apps", 0.0, Some("fitness-app"), true);
        let follow_up = t.follow_up.expect("nested target should defer");

        let inner = nav.apply_follow_up(&follow_up);
        assert_eq!(inner.scroll, Some(ScrollEffect::ToTop));
        assert_eq!(nav.active_item(), Some("fitness-app"));
        // The user never saw the item grid on this path.
        assert_eq!(nav.stack_depth(), 0);
    }

    #[test]
    fn test_stale_follow_up_is_dropped() {
        let mut nav = controller();
        let t = nav.enter_category("apps", 0.0, Some("fitness-app"), true);
        let follow_up = t.follow_up.unwrap();

        // A second transition fires before the continuation runs.
        let _ = nav.exit_portfolio();
        let inner = nav.apply_follow_up(&follow_up);
        assert_eq!(inner, Transition::none());
        assert_eq!(nav.active_item(), None);
    }

    #[test]
    fn test_open_spotlight_pushes_exactly_one_entry() {
        let mut nav = controller();
        nav.open_spotlight("team-lena", 250.0, None);
        assert_eq!(nav.mode(), FullscreenMode::SpotlightOverlay);
        assert_eq!(nav.stack_depth(), 1);
        assert_eq!(nav.active_spotlight(), Some("team-lena"));
        assert_eq!(
            nav.context().active_spotlight_group.as_deref(),
            Some("team")
        );
    }

    #[test]
    fn test_soft_back_restores_smoothly() {
        let mut nav = controller();
        nav.open_spotlight("team-lena", 250.0, None);
        let t = nav.close_spotlight(SpotlightClose::SoftBack);
        assert_eq!(t.scroll, Some(ScrollEffect::EaseTo(250.0)));
        assert_eq!(nav.mode(), FullscreenMode::None);
        assert_eq!(nav.stack_depth(), 0);
    }

    #[test]
    fn test_soft_back_from_shortcut_abandons_stack_entry() {
        let mut nav = controller();
        nav.open_spotlight("team-lena", 250.0, Some("team"));
        assert_eq!(nav.stack_depth(), 1);

        let t = nav.close_spotlight(SpotlightClose::SoftBack);
        assert_eq!(
            t.scroll,
            Some(ScrollEffect::JumpToSection("team".to_string()))
        );
        // No pop: the saved entry is abandoned.
        assert_eq!(nav.stack_depth(), 1);
        assert_eq!(nav.context().spotlight_shortcut_group, None);
    }

    #[test]
    fn test_cross_close_always_pops() {
        let mut nav = controller();
        nav.open_spotlight("team-lena", 250.0, Some("team"));
        let t = nav.close_spotlight(SpotlightClose::Cross);
        assert_eq!(t.scroll, Some(ScrollEffect::JumpTo(250.0)));
        assert_eq!(nav.stack_depth(), 0);
        assert_eq!(nav.context().spotlight_shortcut_group, None);
    }

    #[test]
    fn test_escape_closes_spotlight_with_soft_back() {
        let mut nav = controller();
        nav.open_spotlight("edu-masters", 600.0, None);
        let t = nav.handle_escape();
        assert_eq!(t.scroll, Some(ScrollEffect::EaseTo(600.0)));
        assert_eq!(nav.mode(), FullscreenMode::None);
    }

    #[test]
    fn test_escape_outside_spotlight_is_noop() {
        let mut nav = controller();
        nav.enter_category("apps", 0.0, None, false);
        let t = nav.handle_escape();
        assert_eq!(t, Transition::none());
        assert_eq!(nav.mode(), FullscreenMode::PortfolioDrilldown);
    }

    #[test]
    fn test_opening_spotlight_clears_portfolio_shortcut_context() {
        let mut nav = controller();
        nav.enter_category("apps", 0.0, None, true);
        nav.open_spotlight("team-lena", 0.0, None);
        assert!(!nav.context().opened_portfolio_from_shortcut);
        assert_eq!(nav.mode(), FullscreenMode::SpotlightOverlay);
    }

    #[test]
    fn test_nav_click_in_drilldown_exits_without_restoring() {
        let mut nav = controller();
        nav.enter_category("apps", 400.0, None, false);
        nav.enter_item("fitness-app", 90.0);

        let t = nav.go_to_section("contact");
        assert_eq!(
            t.scroll,
            Some(ScrollEffect::JumpToSection("contact".to_string()))
        );
        assert_eq!(t.active_section.as_deref(), Some("contact"));
        assert_eq!(nav.mode(), FullscreenMode::None);
        // Both entries consumed, none restored: no leaks.
        assert_eq!(nav.stack_depth(), 0);
        assert!(nav.section_visible("hero"));
    }

    #[test]
    fn test_nav_click_in_spotlight_exits_and_clears_flags() {
        let mut nav = controller();
        nav.open_spotlight("team-lena", 250.0, Some("team"));

        let t = nav.go_to_section("hero");
        assert_eq!(
            t.scroll,
            Some(ScrollEffect::JumpToSection("hero".to_string()))
        );
        assert_eq!(nav.mode(), FullscreenMode::None);
        assert_eq!(nav.stack_depth(), 0);
        assert_eq!(nav.context(), &NavContext::default());
    }

    #[test]
    fn test_nav_click_in_normal_mode_eases() {
        let mut nav = controller();
        let t = nav.go_to_section("contact");
        assert_eq!(
            t.scroll,
            Some(ScrollEffect::EaseToSection("contact".to_string()))
        );
    }

    #[test]
    fn test_pinned_section_per_mode() {
        let mut nav = controller();
        assert_eq!(nav.pinned_section(), None);
        nav.enter_category("apps", 0.0, None, false);
        assert_eq!(nav.pinned_section(), Some("portfolio"));
        nav.exit_portfolio();
        nav.open_spotlight("edu-masters", 0.0, None);
        assert_eq!(nav.pinned_section(), Some("education"));
    }

    #[test]
    fn test_item_back_at_category_level_keeps_origin_entry() {
        let mut nav = controller();
        nav.enter_category("apps", 400.0, None, false);

        // No item detail open: the item-level back must not touch the stack.
        let t = nav.back_to_item_grid();
        assert_eq!(t, Transition::none());
        assert_eq!(nav.stack_depth(), 1);

        let exit = nav.exit_portfolio();
        assert_eq!(exit.scroll, Some(ScrollEffect::JumpTo(400.0)));
        assert_eq!(nav.stack_depth(), 0);
    }

    #[test]
    fn test_enter_item_outside_drilldown_is_noop() {
        let mut nav = controller();
        let t = nav.enter_item("fitness-app", 0.0);
        assert_eq!(t, Transition::none());
        assert_eq!(nav.stack_depth(), 0);
    }
}
