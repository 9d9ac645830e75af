//! Property-based tests for the navigation controller.
//!
//! Drives the controller with arbitrary gesture sequences and checks the
//! structural invariants that must hold after every single step, whatever
//! the user mashes.

use proptest::prelude::*;

use portfolio_core::{
    CategoryDef, FullscreenMode, ItemDef, NavigationController, SectionDef, SiteMap,
    SpotlightClose, SpotlightDef, SpotlightGroup, ViewKind,
};

fn site() -> SiteMap {
    let item = |id: &str| ItemDef {
        id: id.into(),
        title: id.into(),
        summary: String::new(),
        screenshots: vec![],
        external_url: None,
    };
    SiteMap {
        sections: vec![
            SectionDef::new("hero", "Home"),
            SectionDef::new("portfolio", "Portfolio"),
            SectionDef::new("team", "Team"),
        ],
        categories: vec![
            CategoryDef {
                id: "apps".into(),
                title: "Apps".into(),
                tagline: String::new(),
                items: vec![item("app-a"), item("app-b")],
            },
            CategoryDef {
                id: "software".into(),
                title: "Software".into(),
                tagline: String::new(),
                items: vec![item("sw-a")],
            },
        ],
        spotlights: vec![SpotlightGroup {
            section: "team".into(),
            entries: vec![
                SpotlightDef {
                    id: "team-a".into(),
                    title: "A".into(),
                    summary: String::new(),
                    detail: String::new(),
                },
                SpotlightDef {
                    id: "team-b".into(),
                    title: "B".into(),
                    summary: String::new(),
                    detail: String::new(),
                },
            ],
        }],
    }
}

/// Gestures a user can produce, including ones invalid for the current
/// state and targets that do not exist.
#[derive(Debug, Clone)]
enum Gesture {
    EnterCategory(&'static str, bool),
    EnterItem(&'static str),
    BackToItemGrid,
    ExitPortfolio,
    OpenSpotlight(&'static str, bool),
    SoftBack,
    CrossClose,
    Escape,
    NavLink(&'static str),
}

fn gesture_strategy() -> impl Strategy<Value = Gesture> {
    let category = prop::sample::select(vec!["apps", "software", "missing"]);
    let item = prop::sample::select(vec!["app-a", "app-b", "sw-a", "missing"]);
    let spotlight = prop::sample::select(vec!["team-a", "team-b", "missing"]);
    let section = prop::sample::select(vec!["hero", "portfolio", "team"]);
    prop_oneof![
        (category, any::<bool>()).prop_map(|(id, shortcut)| Gesture::EnterCategory(id, shortcut)),
        item.prop_map(Gesture::EnterItem),
        Just(Gesture::BackToItemGrid),
        Just(Gesture::ExitPortfolio),
        (spotlight, any::<bool>()).prop_map(|(id, shortcut)| Gesture::OpenSpotlight(id, shortcut)),
        Just(Gesture::SoftBack),
        Just(Gesture::CrossClose),
        Just(Gesture::Escape),
        section.prop_map(Gesture::NavLink),
    ]
}

fn apply(nav: &mut NavigationController, gesture: &Gesture, offset: f64) {
    match gesture {
        Gesture::EnterCategory(id, shortcut) => {
            let _ = nav.enter_category(id, offset, None, *shortcut);
        }
        Gesture::EnterItem(id) => {
            let _ = nav.enter_item(id, offset);
        }
        Gesture::BackToItemGrid => {
            let _ = nav.back_to_item_grid();
        }
        Gesture::ExitPortfolio => {
            let _ = nav.exit_portfolio();
        }
        Gesture::OpenSpotlight(id, shortcut) => {
            let _ = nav.open_spotlight(id, offset, shortcut.then_some("team"));
        }
        Gesture::SoftBack => {
            let _ = nav.close_spotlight(SpotlightClose::SoftBack);
        }
        Gesture::CrossClose => {
            let _ = nav.close_spotlight(SpotlightClose::Cross);
        }
        Gesture::Escape => {
            let _ = nav.handle_escape();
        }
        Gesture::NavLink(id) => {
            let _ = nav.go_to_section(id);
        }
    }
}

fn visible_count(nav: &NavigationController, kind: ViewKind) -> usize {
    nav.registry()
        .views()
        .iter()
        .filter(|v| v.kind == kind && v.is_visible())
        .count()
}

proptest! {
    /// After any gesture sequence: at most one detail/overlay per kind is
    /// visible, the visible set matches the mode, and spotlight aria flags
    /// mirror visibility.
    #[test]
    fn structural_invariants_hold(
        gestures in prop::collection::vec(gesture_strategy(), 0..40),
        offsets in prop::collection::vec(0.0f64..5000.0, 40),
    ) {
        let mut nav = NavigationController::new(site().build_registry());

        for (gesture, offset) in gestures.iter().zip(offsets) {
            apply(&mut nav, gesture, offset);

            prop_assert!(visible_count(&nav, ViewKind::CategoryDetail) <= 1);
            prop_assert!(visible_count(&nav, ViewKind::ItemDetail) <= 1);
            prop_assert!(visible_count(&nav, ViewKind::Spotlight) <= 1);

            match nav.mode() {
                FullscreenMode::None => {
                    prop_assert_eq!(visible_count(&nav, ViewKind::CategoryDetail), 0);
                    prop_assert_eq!(visible_count(&nav, ViewKind::Spotlight), 0);
                    prop_assert!(nav.section_visible("hero"));
                    prop_assert!(nav.section_visible("footer"));
                }
                FullscreenMode::PortfolioDrilldown => {
                    prop_assert_eq!(visible_count(&nav, ViewKind::CategoryDetail), 1);
                    prop_assert!(!nav.section_visible("hero"));
                    prop_assert!(nav.section_visible("portfolio"));
                }
                FullscreenMode::SpotlightOverlay => {
                    prop_assert_eq!(visible_count(&nav, ViewKind::Spotlight), 1);
                    prop_assert_eq!(visible_count(&nav, ViewKind::CategoryDetail), 0);
                }
            }

            for view in nav.registry().views() {
                if view.kind == ViewKind::Spotlight {
                    prop_assert_eq!(view.aria_hidden(), !view.is_visible());
                }
            }

            // Only one shortcut context can be meaningful at a time.
            if nav.context().opened_portfolio_from_shortcut {
                prop_assert_eq!(&nav.context().spotlight_shortcut_group, &None);
            }
        }
    }

    /// The balanced gesture loop always returns to the starting offset with
    /// an empty stack, from any starting offset pair.
    #[test]
    fn balanced_drilldown_restores_origin(
        origin in 0.0f64..10_000.0,
        category_offset in 0.0f64..10_000.0,
    ) {
        let mut nav = NavigationController::new(site().build_registry());

        let _ = nav.enter_category("apps", origin, None, false);
        let _ = nav.enter_item("app-a", category_offset);
        let back = nav.back_to_item_grid();
        prop_assert_eq!(
            back.scroll,
            Some(portfolio_core::ScrollEffect::JumpTo(category_offset))
        );
        let exit = nav.exit_portfolio();
        prop_assert_eq!(
            exit.scroll,
            Some(portfolio_core::ScrollEffect::JumpTo(origin))
        );
        prop_assert_eq!(nav.stack_depth(), 0);
    }
}
