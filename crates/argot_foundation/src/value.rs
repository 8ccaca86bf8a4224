//! The value produced by a conversion.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::colour::Colour;
use crate::model::{
    Channel, Emoji, Game, GuildInfo, Invite, Member, Message, Object, PartialEmoji, PartialMessage,
    Role, Sticker, Thread, User,
};
use crate::types::Type;

/// A converted argument.
///
/// Each variant corresponds to one [`Type`]. Entity variants hold snapshots
/// cloned out of the session cache; mutating them never touches the cache.
#[derive(Clone, Debug)]
pub enum Value {
    /// The absent value (an optional parameter with no default).
    None,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    Str(String),
    /// Ordered list, produced by greedy and variadic parameters.
    List(Vec<Value>),
    /// Bare ID.
    Object(Object),
    /// Guild member.
    Member(Member),
    /// Platform user.
    User(User),
    /// Fetched message.
    Message(Message),
    /// Message reference.
    PartialMessage(PartialMessage),
    /// Guild channel of any kind.
    Channel(Channel),
    /// Thread.
    Thread(Thread),
    /// Invite.
    Invite(Invite),
    /// Guild identity.
    Guild(GuildInfo),
    /// Role.
    Role(Role),
    /// Activity name.
    Game(Game),
    /// Colour.
    Colour(Colour),
    /// Cached custom emoji.
    Emoji(Emoji),
    /// Emoji parsed from its mention.
    PartialEmoji(PartialEmoji),
    /// Guild sticker.
    Sticker(Sticker),
    /// Value produced by a user-supplied converter.
    Custom(CustomValue),
}

/// An opaque value produced by a user converter.
///
/// Equality is identity: two custom values are equal only if they share
/// the same allocation.
#[derive(Clone)]
pub struct CustomValue {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl CustomValue {
    /// Wraps any sendable value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            inner: Arc::new(value),
        }
    }

    /// The Rust type name of the wrapped value.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrows the wrapped value if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomValue({})", self.type_name)
    }
}

impl PartialEq for CustomValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Value {
    /// Wraps a user value.
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Self::Custom(CustomValue::new(value))
    }

    /// Returns the type of this value.
    ///
    /// Channels report their most specific family type.
    #[must_use]
    pub fn value_type(&self) -> Type {
        use crate::model::ChannelKind;
        match self {
            Self::None => Type::Absent,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::Str(_) => Type::Str,
            Self::List(_) => Type::List,
            Self::Object(_) => Type::Object,
            Self::Member(_) => Type::Member,
            Self::User(_) => Type::User,
            Self::Message(_) => Type::Message,
            Self::PartialMessage(_) => Type::PartialMessage,
            Self::Channel(c) => match c.kind {
                ChannelKind::Text | ChannelKind::News => Type::TextChannel,
                ChannelKind::Voice => Type::VoiceChannel,
                ChannelKind::Stage => Type::StageChannel,
                ChannelKind::Category => Type::CategoryChannel,
                ChannelKind::Store => Type::StoreChannel,
                ChannelKind::Private | ChannelKind::Group => Type::GuildChannel,
            },
            Self::Thread(_) => Type::Thread,
            Self::Invite(_) => Type::Invite,
            Self::Guild(_) => Type::Guild,
            Self::Role(_) => Type::Role,
            Self::Game(_) => Type::Game,
            Self::Colour(_) => Type::Colour,
            Self::Emoji(_) => Type::Emoji,
            Self::PartialEmoji(_) => Type::PartialEmoji,
            Self::Sticker(_) => Type::Sticker,
            Self::Custom(_) => Type::Custom,
        }
    }

    /// Returns true if this is the absent value.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string slice.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to extract a member.
    #[must_use]
    pub fn as_member(&self) -> Option<&Member> {
        match self {
            Self::Member(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a user.
    #[must_use]
    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(u) => Some(u),
            _ => None,
        }
    }

    /// Attempts to extract a role.
    #[must_use]
    pub fn as_role(&self) -> Option<&Role> {
        match self {
            Self::Role(r) => Some(r),
            _ => None,
        }
    }

    /// Attempts to extract a channel.
    #[must_use]
    pub fn as_channel(&self) -> Option<&Channel> {
        match self {
            Self::Channel(c) => Some(c),
            _ => None,
        }
    }

    /// Attempts to extract a colour.
    #[must_use]
    pub const fn as_colour(&self) -> Option<Colour> {
        match self {
            Self::Colour(c) => Some(*c),
            _ => None,
        }
    }

    /// Attempts to borrow a custom value as `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Custom(c) => c.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Source-like rendering used when listing literals in error messages.
    ///
    /// Strings are quoted and escaped, everything else uses [`fmt::Display`].
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::Str(s) => format!("{s:?}"),
            other => other.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Member(a), Self::Member(b)) => a.id() == b.id() && a.guild_id == b.guild_id,
            (Self::User(a), Self::User(b)) => a.id == b.id,
            (Self::Message(a), Self::Message(b)) => a.id == b.id,
            (Self::PartialMessage(a), Self::PartialMessage(b)) => a.id == b.id,
            (Self::Channel(a), Self::Channel(b)) => a.id == b.id,
            (Self::Thread(a), Self::Thread(b)) => a.id == b.id,
            (Self::Invite(a), Self::Invite(b)) => a.code == b.code,
            (Self::Guild(a), Self::Guild(b)) => a.id == b.id,
            (Self::Role(a), Self::Role(b)) => a.id == b.id,
            (Self::Game(a), Self::Game(b)) => a == b,
            (Self::Colour(a), Self::Colour(b)) => a == b,
            (Self::Emoji(a), Self::Emoji(b)) => a.id == b.id,
            (Self::PartialEmoji(a), Self::PartialEmoji(b)) => a.id == b.id,
            (Self::Sticker(a), Self::Sticker(b)) => a.id == b.id,
            (Self::Custom(a), Self::Custom(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item.repr())?;
                }
                write!(f, "]")
            }
            Self::Object(o) => write!(f, "<Object id={}>", o.id),
            Self::Member(m) => write!(f, "{m}"),
            Self::User(u) => write!(f, "{u}"),
            Self::Message(m) => write!(f, "<Message id={}>", m.id),
            Self::PartialMessage(m) => write!(f, "<PartialMessage id={}>", m.id),
            Self::Channel(c) => write!(f, "{}", c.name),
            Self::Thread(t) => write!(f, "{}", t.name),
            Self::Invite(i) => write!(f, "{}", i.code),
            Self::Guild(g) => write!(f, "{}", g.name),
            Self::Role(r) => write!(f, "{}", r.name),
            Self::Game(g) => write!(f, "{}", g.name),
            Self::Colour(c) => write!(f, "{c}"),
            Self::Emoji(e) => write!(f, "{}", e.mention()),
            Self::PartialEmoji(e) => write!(f, "{}", e.name),
            Self::Sticker(s) => write!(f, "{}", s.name),
            Self::Custom(c) => write!(f, "<{}>", c.type_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Colour> for Value {
    fn from(c: Colour) -> Self {
        Self::Colour(c)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}
