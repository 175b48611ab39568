pub mod ladder;

pub use ladder::{ladder_viewport, render_ladder, status_token};
