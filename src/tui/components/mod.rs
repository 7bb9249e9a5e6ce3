// Reusable chrome components - rendered around the deck on every frame

pub mod status_bar;
pub mod tab_bar;
pub mod title_bar;
