pub mod config;
pub mod directory;
pub mod draft;
pub mod models;
pub mod validation;

pub use config::{ClientConfig, ConfigError};
pub use directory::{
    display_name, row_name, DirectoryAction, DirectoryEffect, DirectoryState, EditSession,
    LoadPhase, Notice, NoticeKind, Overlay,
};
pub use draft::{EmployeeDraft, IntakeAction, IntakeEffect, IntakeState};
pub use models::{Department, Employee, EmployeeUpdate};
pub use validation::{EmployeeField, FieldErrors};
