pub mod map;
pub mod widgets;
