//! Static site content.
//!
//! Everything the page shows is declared here once: sections in page
//! order, portfolio categories with their items and galleries, and the
//! spotlight groups. Runtime code never adds or removes content.

use portfolio_core::{
    CategoryDef, GalleryImage, ItemDef, SectionDef, SiteMap, SpotlightDef, SpotlightGroup,
};

/// Build the whole site map.
pub fn site() -> SiteMap {
    SiteMap {
        sections: sections(),
        categories: categories(),
        spotlights: spotlights(),
    }
}

fn sections() -> Vec<SectionDef> {
    vec![
        SectionDef::new("hero", "Home"),
        SectionDef::new("portfolio", "Portfolio"),
        SectionDef::new("education", "Education"),
        SectionDef::new("certificates", "Certificates"),
        SectionDef::new("experience", "Experience"),
        SectionDef::new("team", "Team"),
        SectionDef::new("contact", "Contact"),
    ]
}

fn shots(stem: &str, titles: &[&str]) -> Vec<GalleryImage> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            GalleryImage::new(
                format!("assets/screenshots/{stem}-{}.png", i + 1),
                format!("{title} screenshot"),
                *title,
            )
        })
        .collect()
}

fn categories() -> Vec<CategoryDef> {
    vec![
        CategoryDef {
            id: "apps".into(),
            title: "App Development".into(),
            tagline: "Mobile and desktop applications".into(),
            items: vec![
                ItemDef {
                    id: "fitness-app".into(),
                    title: "Fitness Tracker".into(),
                    summary: "Workout planning and progress tracking with offline sync."
                        .into(),
                    screenshots: shots(
                        "fitness",
                        &["Dashboard", "Workout Builder", "Progress Charts"],
                    ),
                    external_url: None,
                },
                ItemDef {
                    id: "recipe-app".into(),
                    title: "Recipe Box".into(),
                    summary: "Personal recipe collection with shopping-list export.".into(),
                    screenshots: shots("recipe", &["Browse", "Recipe Detail"]),
                    external_url: None,
                },
            ],
        },
        CategoryDef {
            id: "software".into(),
            title: "Software Projects".into(),
            tagline: "Tools, services and open source".into(),
            items: vec![
                ItemDef {
                    id: "log-triage".into(),
                    title: "Log Triage".into(),
                    summary: "Terminal tool that clusters production log noise into incidents."
                        .into(),
                    screenshots: shots("triage", &["Cluster View", "Incident Timeline"]),
                    external_url: None,
                },
                ItemDef {
                    id: "demo-reel".into(),
                    title: "Demo Reel".into(),
                    summary: "Five-minute video walkthrough of recent work.".into(),
                    screenshots: vec![],
                    external_url: Some("https://example.com/demo-reel".into()),
                },
            ],
        },
        CategoryDef {
            id: "graphics".into(),
            title: "Graphic Design".into(),
            tagline: "Branding, posters and UI concepts".into(),
            items: vec![ItemDef {
                id: "brand-suite".into(),
                title: "Brand Suite".into(),
                summary: "Logo system and collateral for a coffee roaster.".into(),
                screenshots: shots(
                    "brand",
                    &["Logo Sheet", "Packaging", "Storefront", "Web Concept"],
                ),
                external_url: None,
            }],
        },
    ]
}

fn spotlights() -> Vec<SpotlightGroup> {
    vec![
        SpotlightGroup {
            section: "education".into(),
            entries: vec![SpotlightDef {
                id: "edu-msc".into(),
                title: "MSc Computer Science".into(),
                summary: "Distributed systems focus".into(),
                detail: "Thesis on conflict-free replication for collaborative editors; \
                         teaching assistant for the systems programming course."
                    .into(),
            }],
        },
        SpotlightGroup {
            section: "certificates".into(),
            entries: vec![SpotlightDef {
                id: "cert-cloud".into(),
                title: "Cloud Architect Certification".into(),
                summary: "Professional level".into(),
                detail: "Covers multi-region deployment, cost modelling and incident \
                         response runbooks."
                    .into(),
            }],
        },
        SpotlightGroup {
            section: "experience".into(),
            entries: vec![SpotlightDef {
                id: "exp-platform".into(),
                title: "Platform Engineer".into(),
                summary: "2021 – present".into(),
                detail: "Owns the build and release pipeline for a 40-service platform; \
                         introduced progressive delivery and cut rollback time to minutes."
                    .into(),
            }],
        },
        SpotlightGroup {
            section: "team".into(),
            entries: vec![
                SpotlightDef {
                    id: "team-lena".into(),
                    title: "Lena Okafor".into(),
                    summary: "Design lead".into(),
                    detail: "Shapes the visual language across every project and runs the \
                             usability sessions."
                        .into(),
                },
                SpotlightDef {
                    id: "team-marco".into(),
                    title: "Marco Silva".into(),
                    summary: "Backend engineer".into(),
                    detail: "Keeps the services fast and the on-call calm; resident \
                             database whisperer."
                        .into(),
                },
            ],
        },
    ]
}
