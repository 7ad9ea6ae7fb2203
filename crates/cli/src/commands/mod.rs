pub mod create;
pub mod extract;
pub mod list;
pub mod session;
pub mod settings;
pub mod status;

pub use create::create_command;
pub use extract::extract_command;
pub use list::list_command;
pub use session::Session;
pub use settings::settings_command;
pub use status::status_command;
