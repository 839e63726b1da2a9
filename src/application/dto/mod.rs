pub mod activity;
pub mod auth;
pub mod customers;
pub mod notes;
pub mod pagination;
pub mod users;

pub use activity::ActivityLogDto;
pub use auth::{AuthTokensDto, AuthenticatedUser};
pub use customers::CustomerDto;
pub use notes::CustomerNoteDto;
pub use pagination::{MAX_PAGE_SIZE, Page, normalize_size};
pub use users::UserDto;
