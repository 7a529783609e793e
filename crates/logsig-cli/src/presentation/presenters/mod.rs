mod checks;
mod files;
mod scan;

pub use checks::present_check_list;
pub use files::present_file_list;
pub use scan::present_scan_report;
