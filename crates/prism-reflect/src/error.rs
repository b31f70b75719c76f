pub type Result<T> = std::result::Result<T, ReflectError>;

/// Errors produced by metadata resolution and candidate selection.
#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
    #[error("unknown type {name}")]
    UnknownType { name: String },

    #[error("no property or method {member} on type {class}")]
    UnknownMember { class: String, member: String },

    #[error("no compatible class found for property {property}")]
    NoCompatibleType { property: String },
}
