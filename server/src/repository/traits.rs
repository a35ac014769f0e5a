//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;
use reorder_core::OrderWrite;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Update an existing entity
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}

/// Collections the admin can sort by hand
#[async_trait]
pub trait OrderedRepository<T: Entity>: Repository<T> {
    /// Visible entities only, ascending by order
    async fn list_visible(&self) -> DomainResult<Vec<T>>;

    /// Apply every write or none of them. Returns how many were written.
    async fn apply_order_batch(&self, writes: &[OrderWrite<T::Id>]) -> DomainResult<usize>;
}
