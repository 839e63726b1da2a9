// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            ActivityRecorder, AuthService, CustomerCommandService, NoteCommandService,
            UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenIssuer},
            time::Clock,
        },
        queries::{
            ActivityQueryService, CustomerQueryService, NoteQueryService, UserQueryService,
        },
    },
    domain::{
        activity::ActivityLogRepository, customer::CustomerRepository,
        note::CustomerNoteRepository, user::UserRepository,
    },
};

/// One wiring point for all application services, shared as HTTP state.
pub struct ApplicationServices {
    pub auth: Arc<AuthService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub customer_commands: Arc<CustomerCommandService>,
    pub customer_queries: Arc<CustomerQueryService>,
    pub note_commands: Arc<NoteCommandService>,
    pub note_queries: Arc<NoteQueryService>,
    pub activity_queries: Arc<ActivityQueryService>,
    user_repo: Arc<dyn UserRepository>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
        note_repo: Arc<dyn CustomerNoteRepository>,
        activity_repo: Arc<dyn ActivityLogRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_issuer: Arc<dyn TokenIssuer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let recorder = Arc::new(ActivityRecorder::new(
            Arc::clone(&activity_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let auth = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_issuer),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&recorder),
            Arc::clone(&clock),
        ));

        let customer_commands = Arc::new(CustomerCommandService::new(
            Arc::clone(&customer_repo),
            Arc::clone(&recorder),
            Arc::clone(&clock),
        ));

        let note_commands = Arc::new(NoteCommandService::new(
            Arc::clone(&note_repo),
            Arc::clone(&customer_repo),
            Arc::clone(&user_repo),
            Arc::clone(&recorder),
            Arc::clone(&clock),
        ));

        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let customer_queries = Arc::new(CustomerQueryService::new(Arc::clone(&customer_repo)));
        let note_queries = Arc::new(NoteQueryService::new(Arc::clone(&note_repo)));
        let activity_queries = Arc::new(ActivityQueryService::new(Arc::clone(&activity_repo)));

        Self {
            auth,
            user_commands,
            user_queries,
            customer_commands,
            customer_queries,
            note_commands,
            note_queries,
            activity_queries,
            user_repo,
            token_issuer,
        }
    }

    pub fn token_issuer(&self) -> Arc<dyn TokenIssuer> {
        Arc::clone(&self.token_issuer)
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        Arc::clone(&self.user_repo)
    }
}
