//! Static site content model.
//!
//! The app crate declares its content as one [`SiteMap`] at startup; the
//! view registry is built from it, and the data attributes every adapter
//! resolves (category id, item id, spotlight id, section anchor) come from
//! the same definitions. Content is never created or destroyed at runtime.

use crate::lightbox::GalleryImage;
use crate::view::{View, ViewKind, ViewRegistry};

/// Footer view id; part of the default section layout but not a nav target.
pub const FOOTER_SECTION: &str = "footer";

/// A top-level page section with a nav link.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDef {
    pub id: String,
    pub label: String,
}

impl SectionDef {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A portfolio category with its drill-down items.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDef {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub items: Vec<ItemDef>,
}

/// One portfolio item. Items with an external link open it instead of a
/// detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDef {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub screenshots: Vec<GalleryImage>,
    pub external_url: Option<String>,
}

/// Spotlight entries belonging to one section (education, team, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct SpotlightGroup {
    pub section: String,
    pub entries: Vec<SpotlightDef>,
}

/// One biographical overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotlightDef {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub detail: String,
}

/// The whole site: sections in page order, categories, spotlight groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteMap {
    pub sections: Vec<SectionDef>,
    pub categories: Vec<CategoryDef>,
    pub spotlights: Vec<SpotlightGroup>,
}

impl SiteMap {
    /// Declare every view once, from the content. Sections (and the footer)
    /// start visible, details and overlays hidden.
    pub fn build_registry(&self) -> ViewRegistry {
        let mut registry = ViewRegistry::new();
        for section in &self.sections {
            registry.declare(View::new(&section.id, ViewKind::Section, None));
        }
        registry.declare(View::new(FOOTER_SECTION, ViewKind::Section, None));

        for category in &self.categories {
            registry.declare(View::new(&category.id, ViewKind::CategoryDetail, None));
            for item in &category.items {
                if item.external_url.is_none() {
                    registry.declare(View::new(
                        &item.id,
                        ViewKind::ItemDetail,
                        Some(category.id.clone()),
                    ));
                }
            }
        }

        for group in &self.spotlights {
            for entry in &group.entries {
                registry.declare(View::new(
                    &entry.id,
                    ViewKind::Spotlight,
                    Some(group.section.clone()),
                ));
            }
        }
        registry
    }

    pub fn category(&self, id: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look an item up across all categories.
    pub fn find_item(&self, id: &str) -> Option<(&CategoryDef, &ItemDef)> {
        self.categories.iter().find_map(|category| {
            category
                .items
                .iter()
                .find(|item| item.id == id)
                .map(|item| (category, item))
        })
    }

    pub fn spotlight(&self, id: &str) -> Option<&SpotlightDef> {
        self.spotlights
            .iter()
            .flat_map(|group| group.entries.iter())
            .find(|entry| entry.id == id)
    }

    /// Section a spotlight belongs to.
    pub fn spotlight_section(&self, id: &str) -> Option<&str> {
        self.spotlights
            .iter()
            .find(|group| group.entries.iter().any(|entry| entry.id == id))
            .map(|group| group.section.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteMap {
        SiteMap {
            sections: vec![
                SectionDef::new("hero", "Home"),
                SectionDef::new("portfolio", "Portfolio"),
                SectionDef::new("team", "Team"),
            ],
            categories: vec![CategoryDef {
                id: "apps".into(),
                title: "App Development".into(),
                tagline: "Mobile work".into(),
                items: vec![
                    ItemDef {
                        id: "fitness-app".into(),
                        title: "Fitness App".into(),
                        summary: "Workout tracking".into(),
                        screenshots: vec![],
                        external_url: None,
                    },
                    ItemDef {
                        id: "demo-reel".into(),
                        title: "Demo Reel".into(),
                        summary: "Video walkthrough".into(),
                        screenshots: vec![],
                        external_url: Some("https://example.com/reel".into()),
                    },
                ],
            }],
            spotlights: vec![SpotlightGroup {
                section: "team".into(),
                entries: vec![SpotlightDef {
                    id: "team-lena".into(),
                    title: "Lena".into(),
                    summary: "Designer".into(),
                    detail: "Leads the visual side.".into(),
                }],
            }],
        }
    }

    #[test]
    fn test_registry_declares_all_view_kinds() {
        let registry = site().build_registry();
        assert!(registry.get("hero").is_some());
        assert!(registry.get(FOOTER_SECTION).is_some());
        assert_eq!(registry.get("apps").unwrap().kind, ViewKind::CategoryDetail);
        assert_eq!(
            registry.get("fitness-app").unwrap().group.as_deref(),
            Some("apps")
        );
        assert_eq!(
            registry.get("team-lena").unwrap().group.as_deref(),
            Some("team")
        );
    }

    #[test]
    fn test_external_items_get_no_detail_view() {
        let registry = site().build_registry();
        assert!(registry.get("demo-reel").is_none());
    }

    #[test]
    fn test_lookups() {
        let site = site();
        assert_eq!(site.category("apps").unwrap().items.len(), 2);
        let (category, item) = site.find_item("fitness-app").unwrap();
        assert_eq!(category.id, "apps");
        assert_eq!(item.title, "Fitness App");
        assert_eq!(site.spotlight_section("team-lena"), Some("team"));
        assert!(site.spotlight("nope").is_none());
    }
}
