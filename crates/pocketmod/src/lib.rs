pub mod constants;
pub mod impose;
pub mod layout;
mod options;
mod render;
mod stats;
mod types;

pub use impose::{
    check_input_path, collect_pages, detect_paper_size, impose, load_pdf, output_file_name,
    plan_document, save_pdf,
};
pub use options::*;
pub use stats::{calculate_statistics, statistics_for_page_count};
pub use types::*;
