pub mod constants;
pub mod counter;
pub mod effects;
pub mod particles;
pub mod sections;
pub mod typewriter;

pub use constants::*;
pub use counter::{parse_target, CountUp};
pub use effects::{body_overflow, parallax_offsets, translate_y, FrameGate, Ripple};
pub use particles::{idle_batch, initial_split, replenish_batch, Disconnect, ParticleSpec, WatchSlot};
pub use sections::{active_section, href_fragment, link_is_active, scroll_target_top, SectionSpan};
pub use typewriter::Typewriter;
