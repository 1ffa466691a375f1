//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod ids;
pub mod response;
pub mod story;
pub mod user;

// Re-export for convenience
pub use error::{AppError, FetchError, SessionError, StoreError};
pub use identifiers::{InvalidStoryId, InvalidUserId, StoryId, UserId};
pub use ids::{IdAllocator, SequentialIdAllocator, DEFAULT_DUMMY_ID_SEED};
pub use response::SearchResponse;
pub use story::Story;
pub use user::{default_roster, User};
