//!
//! # Generic Repository
//!
//! A single CRUD contract, [`Repository`], parameterized over an entity and
//! its input payload, with one concrete instantiation per entity type backed
//! by Postgres. Every operation takes the owner's user id and is scoped to it
//! in SQL, so one user's rows are invisible to another — a foreign-owned id
//! behaves exactly like a missing one.

pub mod notes;
pub mod tasks;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppError;

pub use notes::NoteRepository;
pub use tasks::TaskRepository;

/// Per-entity-type abstraction over persistent CRUD operations.
#[async_trait]
pub trait Repository: Send + Sync {
    /// The persisted entity row.
    type Entity: Send;
    /// The payload accepted by create and update.
    type Input: Send;

    /// Persists a new entity owned by `owner_id` and returns the stored row.
    async fn create(&self, owner_id: i32, input: Self::Input) -> Result<Self::Entity, AppError>;

    /// Fetches one entity by id. `NotFound` if the id does not exist or the
    /// row belongs to another user.
    async fn find_by_id(&self, owner_id: i32, id: Uuid) -> Result<Self::Entity, AppError>;

    /// Lists the owner's entities, newest first.
    async fn list(&self, owner_id: i32) -> Result<Vec<Self::Entity>, AppError>;

    /// Rewrites the entity's mutable fields and bumps `updated_at`.
    /// `NotFound` if the id is missing or foreign-owned.
    async fn update(
        &self,
        owner_id: i32,
        id: Uuid,
        input: Self::Input,
    ) -> Result<Self::Entity, AppError>;

    /// Deletes one entity. `NotFound` if the id is missing or foreign-owned.
    async fn delete(&self, owner_id: i32, id: Uuid) -> Result<(), AppError>;
}
