pub mod list_utils;
pub mod money;
