mod checks;
mod files;
mod scan;
