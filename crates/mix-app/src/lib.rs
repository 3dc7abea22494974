//! Shared application service layer for mix design frontends.
//!
//! Loads design files, resolves exposure classes against the built-in
//! catalog, runs the engine and renders its results.

pub mod design_service;
pub mod error;
pub mod project_service;
pub mod render;

pub use design_service::{
    DesignOutcome, build_request, check_design_file, design_file, list_exposures, list_grades, resolve_exposure,
    run_design_file, run_design_file_with_progress,
};
pub use error::{AppError, AppResult};
pub use project_service::{
    FileFormat, load_design_file, save_design_file, template_admixture_design_file,
    template_design_file,
};
pub use render::{PRELIMINARY_NOTE, render_json, render_text};
