//! Result type alias for ShipTalk operations.

use super::forum_error::ForumError;

/// Type alias for Results using ForumError.
///
/// # Example
///
/// ```ignore
/// use shiptalk::error::ForumResult;
///
/// fn load() -> ForumResult<ForumConfig> {
///     Ok(ForumConfig::default())
/// }
/// ```
pub type ForumResult<T> = Result<T, ForumError>;
