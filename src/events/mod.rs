pub mod pointer;

pub use pointer::{wire_skill_cards, wire_social_links};
