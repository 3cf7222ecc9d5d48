pub mod item;

pub mod step;
