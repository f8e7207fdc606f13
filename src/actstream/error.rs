use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActError {
    #[error("Activity not found: {0}")]
    ActivityNotFound(u64),

    #[error("Comment {comment_id} not found on activity {activity_id}")]
    CommentNotFound { activity_id: u64, comment_id: u64 },

    #[error("Group not found: {0}")]
    GroupNotFound(u64),

    #[error("User not found: {0}")]
    UserNotFound(u64),

    #[error("A group id is required for group activity updates")]
    MissingGroupId,

    #[error("No active component is eligible for activity generation")]
    NoEligibleComponent,

    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("No {0} entities available on the platform")]
    NoEntitiesAvailable(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, ActError>;
