// Markup hooks shared by the page handlers. The page's HTML and CSS own these
// names; renaming one here without the stylesheet breaks the effect silently.

// Selectors
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const PARTICLES_ID: &str = "particles";
pub const TYPEWRITER_SELECTOR: &str = ".typewriter";
pub const SKILLS_SELECTOR: &str = ".skills";
pub const SOCIAL_LINKS_SELECTOR: &str = ".social-links";
pub const SKILL_CARD_SELECTOR: &str = ".skill-card";
pub const SOCIAL_LINK_SELECTOR: &str = ".social-link";
pub const MOBILE_MENU_BTN_SELECTOR: &str = ".mobile-menu-btn";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const COUNTER_SELECTOR: &str = ".number";
pub const NAV_SELECTOR: &str = "nav";
pub const HERO_BG_SELECTOR: &str = ".hero-bg";

// Classes
pub const NAV_ACTIVE_CLASSES: [&str; 2] = ["text-blue-600", "font-semibold"];
pub const REVEAL_ACTIVE_CLASS: &str = "active";
pub const PARTICLE_CLASS: &str = "particle";
pub const SKILL_CARD_HOVER_CLASS: &str = "skill-card--hover";
pub const SKILL_CARD_ACTIVE_CLASS: &str = "skill-card--active";
pub const SOCIAL_LINK_HOVER_CLASS: &str = "social-link--hover";
pub const RIPPLE_CLASS: &str = "ripple";
pub const NAV_OPEN_CLASS: &str = "nav--open";
pub const LAZY_CLASS: &str = "lazy";
pub const LOADED_CLASS: &str = "loaded";

// Attributes
pub const DATA_SRC_ATTR: &str = "data-src";
pub const COUNTED_ATTR: &str = "data-counted";
pub const TYPING_ATTR: &str = "data-typing";
