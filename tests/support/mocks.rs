// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crm_core::application::ApplicationResult;
use crm_core::application::error::ApplicationError;
use crm_core::application::ports::{security::PasswordHasher, time::Clock};
use crm_core::domain::activity::{
    ActivityLog, ActivityLogEntry, ActivityLogFilter, ActivityLogId, ActivityLogRepository,
    NewActivityLog,
};
use crm_core::domain::customer::{
    Customer, CustomerId, CustomerRepository, CustomerUpdate, NewCustomer,
};
use crm_core::domain::errors::{DomainError, DomainResult};
use crm_core::domain::note::{
    CustomerNote, CustomerNoteRepository, NewCustomerNote, NoteContent, NoteId, NoteListFilter,
};
use crm_core::domain::user::{
    Email, NewUser, User, UserId, UserListFilter, UserRepository, UserUpdate, Username,
};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// Hashes are the password with a marker prefix, so assertions can tell what
/// was stored without real key stretching.
pub struct PlaintextHasher;

#[async_trait]
impl PasswordHasher for PlaintextHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain${password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("incorrect password"))
        }
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepo {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users
            .into_iter()
            .map(|user| (Uuid::from(user.id), user))
            .collect();
        Self {
            users: Mutex::new(map),
        }
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&Uuid::from(id)).cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .values()
            .any(|u| u.username == new_user.username || u.email == new_user.email)
        {
            return Err(DomainError::Conflict("duplicate user".into()));
        }
        let user = User {
            id: UserId::generate(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            full_name: new_user.full_name,
            role: new_user.role,
            is_active: new_user.is_active,
            last_login: None,
            created_at: new_user.created_at,
            updated_at: new_user.created_at,
        };
        users.insert(Uuid::from(user.id), user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&Uuid::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(full_name) = update.full_name {
            user.full_name = Some(full_name);
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(is_active) = update.is_active {
            user.is_active = is_active;
        }
        user.updated_at = update.updated_at;
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn find_active_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.email == email && u.is_active)
            .cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| &u.username == username))
    }

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| &u.email == email))
    }

    async fn list_page(
        &self,
        filter: &UserListFilter,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<User>, u64)> {
        let users = self.users.lock().unwrap();
        let mut matches: Vec<User> = users
            .values()
            .filter(|u| {
                filter.is_active.is_none_or(|active| u.is_active == active)
                    && filter.role.is_none_or(|role| u.role == role)
                    && filter.keyword.as_deref().is_none_or(|kw| {
                        u.username.as_str().contains(kw) || u.email.as_str().contains(kw)
                    })
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as u64;
        let start = (page as usize) * (size as usize);
        let items = matches.into_iter().skip(start).take(size as usize).collect();
        Ok((items, total))
    }
}

#[derive(Default)]
pub struct InMemoryActivityLogRepo {
    logs: Mutex<Vec<ActivityLog>>,
    usernames: Mutex<HashMap<Uuid, String>>,
}

impl InMemoryActivityLogRepo {
    pub fn with_usernames(usernames: impl IntoIterator<Item = (UserId, String)>) -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
            usernames: Mutex::new(
                usernames
                    .into_iter()
                    .map(|(id, name)| (Uuid::from(id), name))
                    .collect(),
            ),
        }
    }

    pub fn all(&self) -> Vec<ActivityLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl ActivityLogRepository for InMemoryActivityLogRepo {
    async fn insert(&self, log: NewActivityLog) -> DomainResult<ActivityLog> {
        let stored = ActivityLog {
            id: ActivityLogId(Uuid::new_v4()),
            user_id: log.user_id,
            customer_id: log.customer_id,
            activity_type: log.activity_type,
            action: log.action,
            description: log.description,
            start_at: log.start_at,
            end_at: log.end_at,
            created_at: log.created_at,
        };
        self.logs.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn search(
        &self,
        filter: &ActivityLogFilter,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<ActivityLogEntry>, u64)> {
        let usernames = self.usernames.lock().unwrap();
        let mut matches: Vec<ActivityLog> = self
            .logs
            .lock()
            .unwrap()
            .iter()
            .filter(|log| {
                filter.user_id.is_none_or(|id| log.user_id == id)
                    && filter
                        .activity_type
                        .is_none_or(|t| log.activity_type == t)
                    && filter.action.is_none_or(|a| log.action == a)
                    && filter.from.is_none_or(|from| log.created_at >= from)
                    && filter.to.is_none_or(|to| log.created_at <= to)
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as u64;
        let start = (page as usize) * (size as usize);
        let entries = matches
            .into_iter()
            .skip(start)
            .take(size as usize)
            .map(|log| {
                let username = usernames.get(&Uuid::from(log.user_id)).cloned();
                ActivityLogEntry { log, username }
            })
            .collect();
        Ok((entries, total))
    }
}

/// Activity repository whose inserts always fail, for checking that the
/// recorder swallows persistence errors.
pub struct FailingActivityLogRepo;

#[async_trait]
impl ActivityLogRepository for FailingActivityLogRepo {
    async fn insert(&self, _log: NewActivityLog) -> DomainResult<ActivityLog> {
        Err(DomainError::Persistence("insert failed".into()))
    }

    async fn search(
        &self,
        _filter: &ActivityLogFilter,
        _page: u32,
        _size: u32,
    ) -> DomainResult<(Vec<ActivityLogEntry>, u64)> {
        Ok((vec![], 0))
    }
}

#[derive(Default)]
pub struct InMemoryCustomerRepo {
    customers: Mutex<HashMap<Uuid, Customer>>,
}

impl InMemoryCustomerRepo {
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let map = customers
            .into_iter()
            .map(|c| (Uuid::from(c.id), c))
            .collect();
        Self {
            customers: Mutex::new(map),
        }
    }

    pub fn get(&self, id: CustomerId) -> Option<Customer> {
        self.customers.lock().unwrap().get(&Uuid::from(id)).cloned()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepo {
    async fn insert(&self, new_customer: NewCustomer) -> DomainResult<Customer> {
        let customer = Customer {
            id: CustomerId(Uuid::new_v4()),
            full_name: new_customer.full_name,
            email: new_customer.email,
            phone: new_customer.phone,
            address: new_customer.address,
            description: new_customer.description,
            created_by: new_customer.created_by,
            created_at: new_customer.created_at,
            updated_at: new_customer.created_at,
            deleted_at: None,
        };
        self.customers
            .lock()
            .unwrap()
            .insert(Uuid::from(customer.id), customer.clone());
        Ok(customer)
    }

    async fn update(&self, update: CustomerUpdate) -> DomainResult<Customer> {
        let mut customers = self.customers.lock().unwrap();
        let customer = customers
            .get_mut(&Uuid::from(update.id))
            .ok_or_else(|| DomainError::NotFound("customer not found".into()))?;
        customer.full_name = update.full_name;
        customer.email = update.email;
        customer.phone = update.phone;
        customer.address = update.address;
        customer.description = update.description;
        customer.updated_at = update.updated_at;
        Ok(customer.clone())
    }

    async fn find_live_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .get(&Uuid::from(id))
            .filter(|c| !c.is_deleted())
            .cloned())
    }

    async fn find_by_id(&self, id: CustomerId) -> DomainResult<Option<Customer>> {
        Ok(self.customers.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn find_live_by_email(&self, email: &Email) -> DomainResult<Option<Customer>> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .values()
            .find(|c| &c.email == email && !c.is_deleted())
            .cloned())
    }

    async fn find_live_by_phone(&self, phone: &str) -> DomainResult<Option<Customer>> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .values()
            .find(|c| c.phone.as_deref() == Some(phone) && !c.is_deleted())
            .cloned())
    }

    async fn exists_live_by_email(&self, email: &Email) -> DomainResult<bool> {
        Ok(self.find_live_by_email(email).await?.is_some())
    }

    async fn exists_live_by_phone(&self, phone: &str) -> DomainResult<bool> {
        Ok(self.find_live_by_phone(phone).await?.is_some())
    }

    async fn search(
        &self,
        keyword: Option<&str>,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<Customer>, u64)> {
        let mut matches: Vec<Customer> = self
            .customers
            .lock()
            .unwrap()
            .values()
            .filter(|c| !c.is_deleted())
            .filter(|c| {
                keyword.is_none_or(|kw| {
                    c.full_name.contains(kw)
                        || c.email.as_str().contains(kw)
                        || c.phone.as_deref().is_some_and(|p| p.contains(kw))
                        || c.address.as_deref().is_some_and(|a| a.contains(kw))
                })
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as u64;
        let start = (page as usize) * (size as usize);
        let items = matches.into_iter().skip(start).take(size as usize).collect();
        Ok((items, total))
    }

    async fn find_recent(&self, limit: u32) -> DomainResult<Vec<Customer>> {
        let (items, _) = self.search(None, 0, limit).await?;
        Ok(items)
    }

    async fn soft_delete(&self, id: CustomerId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let mut customers = self.customers.lock().unwrap();
        let customer = customers
            .get_mut(&Uuid::from(id))
            .filter(|c| !c.is_deleted())
            .ok_or_else(|| DomainError::NotFound("customer not found".into()))?;
        customer.deleted_at = Some(deleted_at);
        Ok(())
    }

    async fn restore(&self, id: CustomerId, updated_at: DateTime<Utc>) -> DomainResult<Customer> {
        let mut customers = self.customers.lock().unwrap();
        let customer = customers
            .get_mut(&Uuid::from(id))
            .filter(|c| c.is_deleted())
            .ok_or_else(|| DomainError::NotFound("customer not found".into()))?;
        customer.deleted_at = None;
        customer.updated_at = updated_at;
        Ok(customer.clone())
    }
}

#[derive(Default)]
pub struct InMemoryNoteRepo {
    notes: Mutex<HashMap<Uuid, CustomerNote>>,
}

impl InMemoryNoteRepo {
    pub fn get(&self, id: NoteId) -> Option<CustomerNote> {
        self.notes.lock().unwrap().get(&Uuid::from(id)).cloned()
    }
}

#[async_trait]
impl CustomerNoteRepository for InMemoryNoteRepo {
    async fn insert(&self, new_note: NewCustomerNote) -> DomainResult<CustomerNote> {
        let note = CustomerNote {
            id: NoteId(Uuid::new_v4()),
            customer_id: new_note.customer_id,
            staff_id: new_note.staff_id,
            content: new_note.content,
            status: true,
            created_at: new_note.created_at,
            updated_at: new_note.created_at,
        };
        self.notes
            .lock()
            .unwrap()
            .insert(Uuid::from(note.id), note.clone());
        Ok(note)
    }

    async fn update_content(
        &self,
        id: NoteId,
        content: NoteContent,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<CustomerNote> {
        let mut notes = self.notes.lock().unwrap();
        let note = notes
            .get_mut(&Uuid::from(id))
            .ok_or_else(|| DomainError::NotFound("note not found".into()))?;
        note.content = content;
        note.updated_at = updated_at;
        Ok(note.clone())
    }

    async fn find_by_id(&self, id: NoteId) -> DomainResult<Option<CustomerNote>> {
        Ok(self.notes.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn find_active_by_id(&self, id: NoteId) -> DomainResult<Option<CustomerNote>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .get(&Uuid::from(id))
            .filter(|n| n.status)
            .cloned())
    }

    async fn delete(&self, id: NoteId) -> DomainResult<()> {
        self.notes
            .lock()
            .unwrap()
            .remove(&Uuid::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("note not found".into()))
    }

    async fn list_page(
        &self,
        filter: &NoteListFilter,
        page: u32,
        size: u32,
    ) -> DomainResult<(Vec<CustomerNote>, u64)> {
        let mut matches: Vec<CustomerNote> = self
            .notes
            .lock()
            .unwrap()
            .values()
            .filter(|n| {
                filter.customer_id.is_none_or(|id| n.customer_id == id)
                    && filter.staff_id.is_none_or(|id| n.staff_id == id)
            })
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matches.len() as u64;
        let start = (page as usize) * (size as usize);
        let items = matches.into_iter().skip(start).take(size as usize).collect();
        Ok((items, total))
    }
}
