pub mod activity;
pub mod auth;
pub mod customers;
pub mod notes;
pub mod users;

use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub use activity::ActivityRecorder;
pub use auth::{AuthService, AuthenticateCommand};
pub use customers::CustomerCommandService;
pub use notes::NoteCommandService;
pub use users::UserCommandService;

pub(crate) fn ensure_admin(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "administrative privileges are required",
        ))
    }
}
