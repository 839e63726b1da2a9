use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_CUSTOMER_EMAIL: &str = "customers_email_key";
const CNT_CUSTOMER_PHONE: &str = "customers_phone_key";
const CNT_NOTE_CUSTOMER: &str = "customer_notes_customer_id_fkey";
const CNT_NOTE_STAFF: &str = "customer_notes_staff_id_fkey";
const CNT_ACTIVITY_USER: &str = "activity_logs_user_id_fkey";

/// Map database failures onto domain errors. Named constraints get specific
/// messages; the unique-violation class code is the authoritative duplicate
/// signal for anything unnamed.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_CUSTOMER_EMAIL => {
                        DomainError::Conflict("customer email already exists".into())
                    }
                    CNT_CUSTOMER_PHONE => {
                        DomainError::Conflict("customer phone already exists".into())
                    }
                    CNT_NOTE_CUSTOMER => DomainError::NotFound("customer not found".into()),
                    CNT_NOTE_STAFF => DomainError::NotFound("staff not found".into()),
                    CNT_ACTIVITY_USER => DomainError::NotFound("user not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
