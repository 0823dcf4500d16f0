pub mod error;
pub mod ids;
pub mod options;
pub mod track;
