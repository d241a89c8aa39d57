pub mod add;
pub mod export;
pub mod import;
pub mod list;
pub mod reset;
pub mod shuffle;
