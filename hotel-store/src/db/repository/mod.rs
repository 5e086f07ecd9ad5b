//! Repository Module
//!
//! CRUD operations over the JSON collections. Every call is a full
//! load → mutate → save round trip; no state is cached between calls.

pub mod customer;
pub mod hotel;
pub mod reservation;

// Re-exports
pub use customer::CustomerRepository;
pub use hotel::HotelRepository;
pub use reservation::ReservationRepository;

use super::JsonStore;
use thiserror::Error;

/// Repository error types
///
/// Failures are local: they are logged where detected and returned to
/// the caller, never escalated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No rooms available: {0}")]
    CapacityExhausted(String),

    #[error("All rooms already available: {0}")]
    AlreadyFull(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
///
/// Missing records are reported as `Ok(None)` / `Ok(false)`.
pub trait Repository<T, CreateDto, UpdateDto> {
    fn find_all(&self) -> RepoResult<Vec<T>>;
    fn find_by_id(&self, id: &str) -> RepoResult<Option<T>>;
    fn create(&self, data: CreateDto) -> RepoResult<T>;
    fn update(&self, id: &str, data: UpdateDto) -> RepoResult<T>;
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

/// Base repository with store reference
#[derive(Debug, Clone)]
pub struct BaseRepository {
    store: JsonStore,
}

impl BaseRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }
}
