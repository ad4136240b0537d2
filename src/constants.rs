/// Page behaviour tuning constants.
///
/// Timings are in milliseconds unless the name says otherwise; sizes are CSS
/// pixels. Keeping them here keeps magic numbers out of the handlers.
// Navigation
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0; // section top lands this far below the viewport top
pub const ACTIVE_SECTION_LOOKAHEAD_PX: f64 = 100.0; // highlight a section slightly before reaching it
pub const RESIZE_DEBOUNCE_MS: i32 = 150;
pub const FRAME_FALLBACK_MS: i32 = 16; // stand-in for requestAnimationFrame

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_MIN_SIZE_PX: f64 = 2.0;
pub const PARTICLE_MAX_SIZE_PX: f64 = 6.0;
pub const PARTICLE_BASE_DURATION_SEC: f64 = 10.0;
pub const PARTICLE_MAX_EXTRA_DURATION_SEC: f64 = 25.0;
pub const PARTICLE_MAX_DELAY_SEC: f64 = 5.0;
pub const PARTICLE_REPLENISH_BATCH: usize = 5; // bounds burst cost of a refill
pub const IDLE_FALLBACK_MS: i32 = 200;

// Typewriter
pub const TYPEWRITER_START_DELAY_MS: u32 = 2000;
pub const TYPEWRITER_TYPE_STEP_MS: u32 = 100;
pub const TYPEWRITER_DELETE_STEP_MS: u32 = 50;
pub const TYPEWRITER_PAUSE_FULL_MS: u32 = 1800;
pub const TYPEWRITER_PAUSE_EMPTY_MS: u32 = 500;
pub const TYPEWRITER_PHRASES: &[&str] = &[
    "Programador & Desarrollador",
    "Especialista en Automatización",
    "Creador de Soluciones Digitales",
    "Ingeniero de Software",
];

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Number animator
pub const COUNTER_THRESHOLD: f64 = 0.6;
pub const COUNTER_STEPS: i64 = 50;
pub const COUNTER_TICK_MS: u32 = 40;

// Lazy images
pub const LAZY_ROOT_MARGIN: &str = "200px 0px";

// Micro-interactions
pub const SKILL_CARD_ACTIVE_MS: i32 = 160;

// Parallax
pub const PARALLAX_HERO_FACTOR: f64 = 0.5;
pub const PARALLAX_PARTICLES_FACTOR: f64 = 0.3;
