mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod intake_form;
pub use intake_form::IntakeFormView;

mod directory;
pub use directory::DirectoryView;

mod not_found;
pub use not_found::NotFoundView;
