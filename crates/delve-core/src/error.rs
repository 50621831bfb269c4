/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or mutating the world model.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested room does not exist in the world.
    #[error("unknown room: \"{0}\"")]
    UnknownRoom(String),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// A container already holds an item with the same name.
    #[error("{container} already holds an item named \"{item}\"")]
    DuplicateItem {
        /// The room name, or "inventory".
        container: String,
        /// The clashing item name.
        item: String,
    },

    /// An enemy with the same name already exists.
    #[error("enemy already exists: \"{0}\"")]
    DuplicateEnemy(String),

    /// A transition points at a room that does not exist.
    #[error("transition \"{token}\" from \"{from}\" leads to unknown room \"{to}\"")]
    DanglingTransition {
        /// The room the transition leaves from.
        from: String,
        /// The trigger token.
        token: String,
        /// The missing destination.
        to: String,
    },
}
