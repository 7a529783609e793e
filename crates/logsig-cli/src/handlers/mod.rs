pub mod checks;
pub mod files;
pub mod scan;
