pub mod positions;
pub mod render;
pub mod rules;
pub mod snippet;
