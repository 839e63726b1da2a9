pub mod activity;
pub mod customers;
pub mod notes;
pub mod users;

pub use activity::{ActivityQueryService, SearchActivityLogsQuery};
pub use customers::{CustomerQueryService, SearchCustomersQuery};
pub use notes::{ListNotesQuery, NoteQueryService};
pub use users::{ListUsersQuery, UserQueryService};
