//! CLI commands

mod completions;
mod doctor;
mod init;
mod partners;
mod translate;

pub use completions::CompletionsCommand;
pub use doctor::DoctorCommand;
pub use init::InitCommand;
pub use partners::PartnersCommand;
pub use translate::TranslateCommand;
