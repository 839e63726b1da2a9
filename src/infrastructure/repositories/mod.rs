mod error;
mod postgres_activity_log;
mod postgres_customer;
mod postgres_note;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_activity_log::PostgresActivityLogRepository;
pub use postgres_customer::PostgresCustomerRepository;
pub use postgres_note::PostgresCustomerNoteRepository;
pub use postgres_user::PostgresUserRepository;
