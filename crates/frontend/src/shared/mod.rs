pub mod clipboard;
pub mod display;
pub mod icons;
pub mod list_utils;
