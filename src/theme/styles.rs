//! Global CSS for the portfolio shell.
//!
//! Dark palette by default; the `.light-theme` class on the root flips the
//! custom properties. Fullscreen drill-down and overlay styling lives here
//! too so components only toggle classes.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* DARK (default) */
  --bg: #0d1117;
  --bg-panel: #161b22;
  --border: #30363d;

  --accent: #e8a03e;
  --accent-glow: rgba(232, 160, 62, 0.3);
  --link: #58a6ff;

  --text-primary: #e6edf3;
  --text-secondary: rgba(230, 237, 243, 0.7);
  --text-muted: rgba(230, 237, 243, 0.45);

  --success: #3fb950;
  --danger: #f85149;

  --font-body: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-heading: 'Sora', 'Segoe UI', system-ui, sans-serif;
}

.light-theme {
  --bg: #f6f8fa;
  --bg-panel: #ffffff;
  --border: #d0d7de;
  --text-primary: #1f2328;
  --text-secondary: rgba(31, 35, 40, 0.75);
  --text-muted: rgba(31, 35, 40, 0.5);
}

/* === Base === */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body, .app {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-body);
  line-height: 1.6;
  transition: background 0.3s ease, color 0.3s ease;
}

.app {
  min-height: 100vh;
  outline: none;
}

h1, h2, h3 {
  font-family: var(--font-heading);
  line-height: 1.2;
}

a {
  color: var(--link);
  text-decoration: none;
}

section {
  padding: 5rem 2rem;
  max-width: 1100px;
  margin: 0 auto;
}

section h2 {
  font-size: 2rem;
  margin-bottom: 2rem;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: transparent;
  transition: background 0.3s ease, box-shadow 0.3s ease;
}

.navbar.scrolled {
  background: var(--bg-panel);
  box-shadow: 0 2px 12px rgba(0, 0, 0, 0.35);
}

.nav-logo {
  font-family: var(--font-heading);
  font-size: 1.3rem;
  font-weight: 700;
  color: var(--accent);
  cursor: pointer;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  list-style: none;
}

.nav-link {
  background: none;
  border: none;
  color: var(--text-secondary);
  font: inherit;
  padding: 0.5rem 0.9rem;
  border-radius: 6px;
  cursor: pointer;
}

.nav-link:hover {
  color: var(--text-primary);
  background: rgba(128, 128, 128, 0.12);
}

.nav-link.active {
  color: var(--accent);
}

/* Dropdowns */
.nav-item {
  position: relative;
}

.dropdown {
  position: absolute;
  top: 100%;
  left: 0;
  min-width: 220px;
  background: var(--bg-panel);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 0.5rem 0;
  display: none;
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
}

.nav-item:hover .dropdown {
  display: block;
}

.dropdown-entry {
  display: block;
  width: 100%;
  text-align: left;
  background: none;
  border: none;
  color: var(--text-secondary);
  font: inherit;
  padding: 0.45rem 1rem;
  cursor: pointer;
}

.dropdown-entry:hover {
  color: var(--text-primary);
  background: rgba(128, 128, 128, 0.12);
}

.dropdown-entry.nested {
  padding-left: 2rem;
  font-size: 0.9rem;
}

/* Theme switch */
.theme-switch {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* Hamburger */
.hamburger {
  display: none;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.4rem;
  cursor: pointer;
}

@media (max-width: 820px) {
  .hamburger {
    display: block;
  }
  .nav-links {
    position: fixed;
    top: 60px;
    right: 0;
    flex-direction: column;
    align-items: stretch;
    width: 260px;
    background: var(--bg-panel);
    border-left: 1px solid var(--border);
    height: calc(100vh - 60px);
    padding: 1rem;
    transform: translateX(100%);
    transition: transform 0.25s ease;
  }
  .nav-links.open {
    transform: translateX(0);
  }
}

/* === Hero === */
.hero {
  min-height: 90vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
}

.hero h1 {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.hero .tagline {
  color: var(--text-secondary);
  font-size: 1.2rem;
  max-width: 40rem;
}

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
}

.card {
  background: var(--bg-panel);
  border: 1px solid var(--border);
  border-radius: 10px;
  padding: 1.5rem;
  cursor: pointer;
  transition: transform 0.15s ease, border-color 0.15s ease;
}

.card:hover {
  transform: translateY(-3px);
  border-color: var(--accent);
}

.card h3 {
  margin-bottom: 0.5rem;
}

.card p {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

.card .cta {
  margin-top: 1rem;
  background: none;
  border: 1px solid var(--accent);
  color: var(--accent);
  padding: 0.4rem 1rem;
  border-radius: 6px;
  font: inherit;
  cursor: pointer;
}

.card .cta:hover {
  background: var(--accent-glow);
}

/* === Fullscreen drill-down === */
.detail-view {
  min-height: 100vh;
  padding-top: 6rem;
}

.back-button {
  background: none;
  border: 1px solid var(--border);
  color: var(--text-secondary);
  padding: 0.5rem 1.2rem;
  border-radius: 6px;
  font: inherit;
  cursor: pointer;
  margin-bottom: 2rem;
}

.back-button:hover {
  border-color: var(--accent);
  color: var(--accent);
}

.detail-tagline {
  color: var(--text-muted);
  margin-bottom: 2rem;
}

/* === Slideshow === */
.slideshow {
  position: relative;
  border-radius: 10px;
  overflow: hidden;
  background: var(--bg-panel);
  margin-bottom: 2rem;
}

.slideshow img {
  width: 100%;
  display: block;
  cursor: zoom-in;
}

.slideshow .arrow {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  background: rgba(0, 0, 0, 0.45);
  border: none;
  color: #fff;
  font-size: 1.5rem;
  padding: 0.4rem 0.8rem;
  cursor: pointer;
}

.slideshow .arrow.prev { left: 0.5rem; }
.slideshow .arrow.next { right: 0.5rem; }

.slideshow .dots {
  position: absolute;
  bottom: 0.6rem;
  left: 0;
  right: 0;
  display: flex;
  justify-content: center;
  gap: 0.4rem;
}

.slideshow .dot {
  width: 9px;
  height: 9px;
  border-radius: 50%;
  border: none;
  background: rgba(255, 255, 255, 0.4);
  cursor: pointer;
}

.slideshow .dot.active {
  background: var(--accent);
}

/* === Spotlight overlay === */
.spotlight-overlay {
  position: fixed;
  inset: 0;
  z-index: 200;
  background: rgba(0, 0, 0, 0.7);
  display: none;
  align-items: center;
  justify-content: center;
  padding: 2rem;
}

.spotlight-overlay.show {
  display: flex;
}

.spotlight-panel {
  position: relative;
  background: var(--bg-panel);
  border: 1px solid var(--border);
  border-radius: 12px;
  max-width: 640px;
  width: 100%;
  max-height: 85vh;
  overflow-y: auto;
  padding: 2.5rem;
}

.spotlight-close {
  position: absolute;
  top: 0.8rem;
  right: 1rem;
  background: none;
  border: none;
  color: var(--text-muted);
  font-size: 1.6rem;
  cursor: pointer;
}

.spotlight-close:hover {
  color: var(--danger);
}

.spotlight-summary {
  color: var(--accent);
  margin: 0.3rem 0 1.2rem;
}

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 300;
  background: rgba(0, 0, 0, 0.92);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

.lightbox-frame {
  max-width: 85vw;
  max-height: 75vh;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
}

.lightbox-frame img {
  max-width: 100%;
  max-height: 75vh;
  transition: transform 0.1s linear;
  user-select: none;
}

.lightbox-frame.portrait img { max-height: 80vh; }
.lightbox-frame.landscape img { max-width: 88vw; }
.lightbox-frame.square img { max-width: 70vmin; max-height: 70vmin; }

.lightbox-caption {
  color: #fff;
  margin-top: 1rem;
  text-align: center;
}

.lightbox-counter {
  color: rgba(255, 255, 255, 0.6);
  font-size: 0.9rem;
}

.lightbox-controls {
  display: flex;
  gap: 0.6rem;
  margin-top: 1rem;
}

.lightbox-controls button,
.lightbox-nav {
  background: rgba(255, 255, 255, 0.12);
  border: none;
  color: #fff;
  padding: 0.5rem 0.9rem;
  border-radius: 6px;
  font: inherit;
  cursor: pointer;
}

.lightbox-controls button:hover,
.lightbox-nav:hover {
  background: rgba(255, 255, 255, 0.25);
}

.lightbox-nav {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  font-size: 1.6rem;
}

.lightbox-nav.prev { left: 1.5rem; }
.lightbox-nav.next { right: 1.5rem; }

.lightbox-close {
  position: absolute;
  top: 1rem;
  right: 1.5rem;
  background: none;
  border: none;
  color: #fff;
  font-size: 2rem;
  cursor: pointer;
}

/* === Contact === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 560px;
}

.contact-form input,
.contact-form textarea {
  background: var(--bg-panel);
  border: 1px solid var(--border);
  border-radius: 6px;
  color: var(--text-primary);
  font: inherit;
  padding: 0.7rem 0.9rem;
}

.contact-form input:focus,
.contact-form textarea:focus {
  outline: none;
  border-color: var(--accent);
}

.contact-form textarea {
  min-height: 9rem;
  resize: vertical;
}

.contact-form .submit {
  align-self: flex-start;
  background: var(--accent);
  border: none;
  color: #1a1a1a;
  font: inherit;
  font-weight: 600;
  padding: 0.7rem 1.8rem;
  border-radius: 6px;
  cursor: pointer;
}

.contact-form .submit:disabled {
  opacity: 0.6;
  cursor: wait;
}

.form-notice {
  padding: 0.7rem 1rem;
  border-radius: 6px;
  font-size: 0.95rem;
}

.form-notice.success {
  color: var(--success);
  border: 1px solid var(--success);
}

.form-notice.error {
  color: var(--danger);
  border: 1px solid var(--danger);
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--border);
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
  font-size: 0.9rem;
}
"#;
