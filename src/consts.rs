//! DOM contract shared with the page markup: ids, selectors and class names.

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const DARK_CLASS: &str = "dark";
pub const THEME_ATTR: &str = "data-theme";

// ── Navigation ──────────────────────────────────────────────────

pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";

// ── Scroll ──────────────────────────────────────────────────────

pub const HEADER_ID: &str = "header";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_ATTR: &str = "data-parallax";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const SCROLLING_DOWN_CLASS: &str = "scrolling-down";
pub const SCROLLING_UP_CLASS: &str = "scrolling-up";
pub const HEADER_SHADOW: &str = "0 2px 10px var(--shadow)";

// ── Reveal ──────────────────────────────────────────────────────

pub const SECTION_REVEAL_SELECTOR: &str = "section, .skill-card, .timeline-item";
pub const SCROLL_REVEAL_SELECTOR: &str = ".scroll-reveal, [data-animate], .animate-on-scroll";
pub const PROGRESS_SELECTOR: &str = ".skill-progress";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const LAZY_SRC_ATTR: &str = "data-src";
pub const STAGGER_SELECTOR: &str = "[data-stagger]";
pub const FADE_UP_CLASS: &str = "animate-fade-in-up";

// ── Cursor ──────────────────────────────────────────────────────

pub const CURSOR_PRIMARY_SELECTOR: &str = ".custom_cursor_one";
pub const CURSOR_SECONDARY_SELECTOR: &str = ".custom_cursor_two";
pub const INTERACTIVE_SELECTOR: &str = "a, button, [role=\"button\"], .clickable";
pub const CURSOR_HOVER_BORDER: &str = "var(--theme-color, #667eea)";

// ── Ripple ──────────────────────────────────────────────────────

pub const RIPPLE_TARGET_SELECTOR: &str = ".btn-modern, button, [role=\"button\"]";
pub const RIPPLE_CLASS: &str = "ripple-effect";

// ── Forms ───────────────────────────────────────────────────────

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";
pub const ANY_SUBMIT_SELECTOR: &str = "[type=\"submit\"]";
pub const LOADING_CLASS: &str = "loading";
pub const BUSY_LABEL: &str = "Sending...";

// ── Enhancements ────────────────────────────────────────────────

pub const PRELOADER_ID: &str = "preloader";
pub const HIDDEN_CLASS: &str = "hidden";
pub const CARD_HOVER_SELECTOR: &str = ".card-hover, [data-card-hover]";
pub const LAZY_LOADING_IMAGE_SELECTOR: &str = "img[loading=\"lazy\"]";
pub const PRELOAD_SELECTOR: &str = "[data-preload]";
pub const PAGE_TRANSITION_CLASS: &str = "page-transition";
pub const CONFIG_BLOCK_ID: &str = "fx-config";

/// Stylesheet injected once per page for ripple, fade-in and loading states.
pub const RUNTIME_CSS: &str = r"
.ripple-effect {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.6);
    transform: scale(0);
    animation: ripple-animation 0.6s ease-out;
    pointer-events: none;
}

@keyframes ripple-animation {
    to {
        transform: scale(2);
        opacity: 0;
    }
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

.loading {
    position: relative;
    pointer-events: none;
    opacity: 0.6;
}

.loading::after {
    content: '';
    position: absolute;
    width: 16px;
    height: 16px;
    top: 50%;
    left: 50%;
    margin: -8px 0 0 -8px;
    border: 2px solid #fff;
    border-radius: 50%;
    border-top-color: transparent;
    animation: spinner 0.6s linear infinite;
}

@keyframes spinner {
    to { transform: rotate(360deg); }
}
";
