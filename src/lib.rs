//! Contact-card rendering pipeline: load `me.json`, optionally animate the
//! name banner, then emit the card as text, HTML, or JSON.

pub mod animate;
pub mod banner;
pub mod cli;
pub mod record;
pub mod render;
