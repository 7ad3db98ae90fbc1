use thiserror::Error;

/// The error type returned by facades and engines.
///
/// Structural mistakes made by a script, such as naming a member that does not exist, are reported
/// as errors. Unsubscribing a callback that is not subscribed is not one of them: it is reported as
/// a `false` result by the facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The object has no operation or property with the given name, or the property is read-only.
    #[error("{object_type} does not define member `{member}`")]
    MissingMember {
        /// Type name of the object the member was looked up on
        object_type: &'static str,
        /// The name that failed to resolve
        member: String,
    },

    /// The object does not raise an event of the given kind.
    #[error("{object_type} does not define event {event}")]
    UndefinedEvent {
        /// Type name of the object the event was looked up on
        object_type: &'static str,
        /// Textual form of the rejected event kind
        event: String,
    },

    /// An operation was called with fewer arguments than it requires.
    #[error("{member} expects an argument at position {index}")]
    MissingArgument {
        /// The operation being called
        member: &'static str,
        /// Zero-based position of the missing argument
        index: usize,
    },

    /// An argument could not be converted to the type the operation requires.
    #[error("{member} expects {expected} at position {index}, got {found}")]
    InvalidArgument {
        /// The operation being called
        member: &'static str,
        /// Zero-based position of the argument
        index: usize,
        /// Description of the expected type
        expected: &'static str,
        /// Type name of the supplied value
        found: &'static str,
    },

    /// The operation cannot be performed with the given arguments or in the current state.
    #[error("{0}")]
    InvalidOperation(String),

    /// The native engine reported a failure.
    #[error("speech engine error: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A grammar could not be rendered as XML.
    #[error("failed to write grammar XML: {0}")]
    Xml(#[from] xml::writer::Error),
}

impl Error {
    /// Wraps an engine-specific error.
    pub fn engine<E: Into<Box<dyn std::error::Error + Send + Sync>>>(source: E) -> Self {
        Self::Engine(source.into())
    }

    pub(crate) fn missing_member<S: Into<String>>(object_type: &'static str, member: S) -> Self {
        Self::MissingMember {
            object_type,
            member: member.into(),
        }
    }
}
