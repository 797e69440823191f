pub mod creation;
pub mod offset;
