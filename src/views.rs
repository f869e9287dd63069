pub mod format;
pub mod table;
pub mod templates;
