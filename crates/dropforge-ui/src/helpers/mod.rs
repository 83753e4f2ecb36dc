pub mod drop_zone;
pub mod format;
