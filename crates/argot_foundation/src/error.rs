//! Error types for argument conversion.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure the engine
//! reports is an [`Error`]; the dispatch collaborator decides how to render it.

use std::fmt;

use thiserror::Error;

use crate::value::Value;

/// Boxed error raised by user code inside a converter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The structured failure every conversion reports.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn not_found(entity: EntityKind, argument: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound {
            entity,
            argument: argument.into(),
        })
    }

    /// Creates an object not found error (token is neither an ID nor a mention).
    #[must_use]
    pub fn object_not_found(argument: impl Into<String>) -> Self {
        Self::new(ErrorKind::ObjectNotFound(argument.into()))
    }

    /// Creates a channel not readable error.
    #[must_use]
    pub fn channel_not_readable(mention: impl Into<String>) -> Self {
        Self::new(ErrorKind::ChannelNotReadable(mention.into()))
    }

    /// Creates a no private message error.
    #[must_use]
    pub fn no_private_message() -> Self {
        Self::new(ErrorKind::NoPrivateMessage)
    }

    /// Creates a bad boolean error.
    #[must_use]
    pub fn bad_bool(argument: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadBoolArgument(argument.into()))
    }

    /// Creates a bad colour error.
    #[must_use]
    pub fn bad_colour(argument: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadColourArgument(argument.into()))
    }

    /// Creates a bad invite error.
    #[must_use]
    pub fn bad_invite(argument: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadInviteArgument(argument.into()))
    }

    /// Creates a partial emoji conversion error.
    #[must_use]
    pub fn partial_emoji(argument: impl Into<String>) -> Self {
        Self::new(ErrorKind::PartialEmojiConversionFailure(argument.into()))
    }

    /// Creates a generic bad argument error.
    #[must_use]
    pub fn bad_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadArgument(message.into()))
    }

    /// Creates the bad argument error for a failed plain construction.
    #[must_use]
    pub fn construction_failed(type_name: &str, parameter: &str) -> Self {
        Self::bad_argument(format!(
            "Converting to \"{type_name}\" failed for parameter \"{parameter}\"."
        ))
    }

    /// Wraps an unexpected error raised inside a converter.
    #[must_use]
    pub fn conversion(converter: impl Into<String>, source: BoxError) -> Self {
        Self::new(ErrorKind::Conversion {
            converter: converter.into(),
            source,
        })
    }

    /// Creates the aggregate error for a union where every member failed.
    #[must_use]
    pub fn bad_union(parameter: impl Into<String>, converters: Vec<String>, errors: Vec<Error>) -> Self {
        Self::new(ErrorKind::BadUnionArgument {
            parameter: parameter.into(),
            converters,
            errors,
        })
    }

    /// Creates the aggregate error for a literal set with no match.
    #[must_use]
    pub fn bad_literal(parameter: impl Into<String>, literals: Vec<Value>, errors: Vec<Error>) -> Self {
        Self::new(ErrorKind::BadLiteralArgument {
            parameter: parameter.into(),
            literals,
            errors,
        })
    }

    /// Creates a missing required argument error.
    #[must_use]
    pub fn missing_argument(parameter: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRequiredArgument(parameter.into()))
    }

    /// Creates an unclosed quote error.
    #[must_use]
    pub fn expected_closing_quote(close_quote: char) -> Self {
        Self::new(ErrorKind::ExpectedClosingQuote(close_quote))
    }

    /// Creates an unexpected quote error.
    #[must_use]
    pub fn unexpected_quote(quote: char) -> Self {
        Self::new(ErrorKind::UnexpectedQuote(quote))
    }

    /// Creates an error for a closing quote not followed by whitespace.
    #[must_use]
    pub fn invalid_end_of_quoted_string(found: char) -> Self {
        Self::new(ErrorKind::InvalidEndOfQuotedString(found))
    }

    /// Creates an invalid annotation error (raised at registration time).
    #[must_use]
    pub fn invalid_annotation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAnnotation(message.into()))
    }

    /// Returns true if the error means "the token could not be converted".
    ///
    /// Conversion errors, missing arguments, quoting errors, scope checks,
    /// and registration errors are not bad arguments.
    #[must_use]
    pub fn is_bad_argument(&self) -> bool {
        !matches!(
            self.kind,
            ErrorKind::Conversion { .. }
                | ErrorKind::NoPrivateMessage
                | ErrorKind::MissingRequiredArgument(_)
                | ErrorKind::ExpectedClosingQuote(_)
                | ErrorKind::UnexpectedQuote(_)
                | ErrorKind::InvalidEndOfQuotedString(_)
                | ErrorKind::InvalidAnnotation(_)
        )
    }

    /// The entity kind of a not found error.
    #[must_use]
    pub fn not_found_entity(&self) -> Option<EntityKind> {
        match &self.kind {
            ErrorKind::NotFound { entity, .. } => Some(*entity),
            _ => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No entity matched the token.
    #[error("{entity} \"{argument}\" not found.")]
    NotFound {
        /// What was being looked up.
        entity: EntityKind,
        /// The original token.
        argument: String,
    },

    /// The token is neither an ID nor a mention.
    #[error("\"{0}\" does not follow a valid ID or mention format.")]
    ObjectNotFound(String),

    /// The channel exists but its history cannot be read.
    #[error("Can't read messages in {0}.")]
    ChannelNotReadable(String),

    /// The converter needs a guild but the command ran in a private channel.
    #[error("This command cannot be used in private messages.")]
    NoPrivateMessage,

    /// Token is not a recognised boolean word.
    #[error("{0} is not a recognised boolean option")]
    BadBoolArgument(String),

    /// Token is not a valid colour.
    #[error("Colour \"{0}\" is invalid.")]
    BadColourArgument(String),

    /// Invite could not be resolved.
    #[error("Invite \"{0}\" is invalid or expired.")]
    BadInviteArgument(String),

    /// Token is not an emoji mention.
    #[error("Couldn't convert \"{0}\" to PartialEmoji.")]
    PartialEmojiConversionFailure(String),

    /// Generic conversion failure.
    #[error("{0}")]
    BadArgument(String),

    /// A converter failed with an error outside this taxonomy.
    #[error("converter {converter} failed: {source}")]
    Conversion {
        /// Name of the converter that failed.
        converter: String,
        /// The original error.
        source: BoxError,
    },

    /// Every member of a union failed.
    #[error("Could not convert \"{parameter}\" into {}.", human_join(.converters))]
    BadUnionArgument {
        /// Parameter being converted.
        parameter: String,
        /// Names of the attempted members, in declaration order.
        converters: Vec<String>,
        /// One error per attempted member, in declaration order.
        errors: Vec<Error>,
    },

    /// No literal matched.
    #[error("Could not convert \"{parameter}\" into the literal {}.", human_join_values(.literals))]
    BadLiteralArgument {
        /// Parameter being converted.
        parameter: String,
        /// The declared literals, in declaration order.
        literals: Vec<Value>,
        /// One error per failed underlying conversion.
        errors: Vec<Error>,
    },

    /// A required parameter had no token left to consume.
    #[error("{0} is a required argument that is missing.")]
    MissingRequiredArgument(String),

    /// A quoted token was never closed.
    #[error("Expected closing {0}.")]
    ExpectedClosingQuote(char),

    /// A quote mark appeared inside an unquoted token.
    #[error("Unexpected quote mark, {0:?}, in non-quoted string")]
    UnexpectedQuote(char),

    /// A closing quote was followed by something other than whitespace.
    #[error("Expected space after closing quotation but received {0:?}")]
    InvalidEndOfQuotedString(char),

    /// A parameter annotation was rejected at registration time.
    #[error("invalid annotation: {0}")]
    InvalidAnnotation(String),
}

/// Entity kinds that have a dedicated not found error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Guild member.
    Member,
    /// Platform user.
    User,
    /// Message.
    Message,
    /// Channel of any kind.
    Channel,
    /// Thread.
    Thread,
    /// Role.
    Role,
    /// Guild.
    Guild,
    /// Custom emoji.
    Emoji,
    /// Guild sticker.
    Sticker,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Member => "Member",
            Self::User => "User",
            Self::Message => "Message",
            Self::Channel => "Channel",
            Self::Thread => "Thread",
            Self::Role => "Role",
            Self::Guild => "Guild",
            Self::Emoji => "Emoji",
            Self::Sticker => "Sticker",
        };
        write!(f, "{name}")
    }
}

/// Joins names as `a`, `a or b`, or `a, b, or c`.
#[must_use]
pub fn human_join(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}

fn human_join_values(values: &[Value]) -> String {
    let reprs: Vec<String> = values.iter().map(Value::repr).collect();
    human_join(&reprs)
}
