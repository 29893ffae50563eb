//! Core modules for ncsmc-simplify

pub mod classify;
pub mod extractor;
pub mod render;
pub mod simplify;
pub mod api;

pub use classify::{classify, LineKind};
pub use extractor::{BoundStateExtractor, extract, extract_text};
pub use render::{render_summary, render_state, format_value};
pub use simplify::{SimplifyOutcome, simplified_path, read_log, simplify_text, simplify_file, build_report};
pub use api::{create_router, run_server};
