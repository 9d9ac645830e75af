//! Color constants for the dark and light palettes.

#![allow(dead_code)]

// === DARK (default) ===
pub const INK_BLACK: &str = "#0d1117";
pub const INK_PANEL: &str = "#161b22";
pub const INK_BORDER: &str = "#30363d";

// === LIGHT ===
pub const PAPER_WHITE: &str = "#f6f8fa";
pub const PAPER_PANEL: &str = "#ffffff";
pub const PAPER_BORDER: &str = "#d0d7de";

// === ACCENT ===
pub const ACCENT: &str = "#e8a03e";
pub const ACCENT_GLOW: &str = "rgba(232, 160, 62, 0.3)";
pub const LINK_BLUE: &str = "#58a6ff";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#e6edf3";
pub const TEXT_SECONDARY: &str = "rgba(230, 237, 243, 0.7)";
pub const TEXT_MUTED: &str = "rgba(230, 237, 243, 0.45)";
pub const TEXT_DARK: &str = "#1f2328";

// === SEMANTIC ===
pub const SUCCESS: &str = "#3fb950";
pub const DANGER: &str = "#f85149";
