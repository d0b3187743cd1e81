//! Spreadsheet reading and writing

mod export;
mod reader;
mod template;

pub use export::write_records_excel;
pub use reader::{check_extension, read_raw_rows};
pub use template::{template_filename, write_template_excel};
