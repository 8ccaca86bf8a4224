//! Invocation context.
//!
//! A [`Context`] is everything a converter may look at while converting one
//! command invocation: the session, the message that triggered the command,
//! the channel it was sent in, and the cursor over its arguments.

use std::sync::Arc;

use argot_foundation::{Channel, ChannelKind, Message, Snowflake};
use argot_parser::StringView;
use argot_session::{Cache, ChannelRef, Guild, Session};

use crate::config::ConvertConfig;

/// State for one command invocation.
#[derive(Debug)]
pub struct Context {
    session: Arc<Session>,
    message: Message,
    channel: ChannelRef,
    view: StringView,
    config: ConvertConfig,
}

impl Context {
    /// Creates a context for `message` with an empty argument cursor.
    ///
    /// The channel is taken from the cache; an uncached channel is
    /// represented by a bare channel of the right scope.
    #[must_use]
    pub fn new(session: Arc<Session>, message: Message) -> Self {
        let channel = session
            .cache()
            .get_channel(message.channel_id)
            .unwrap_or_else(|| match message.guild_id {
                Some(guild_id) => {
                    ChannelRef::Channel(Channel::guild(message.channel_id, guild_id, "", ChannelKind::Text))
                }
                None => ChannelRef::Channel(Channel::private(message.channel_id)),
            });
        Self {
            session,
            message,
            channel,
            view: StringView::new(""),
            config: ConvertConfig::default(),
        }
    }

    /// Sets the argument text.
    #[must_use]
    pub fn with_args(mut self, args: impl Into<String>) -> Self {
        self.view = StringView::new(args);
        self
    }

    /// Replaces the converter configuration.
    #[must_use]
    pub fn with_config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }

    /// The session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// A snapshot of the session cache.
    #[must_use]
    pub fn cache(&self) -> Cache {
        self.session.cache()
    }

    /// The message that invoked the command.
    #[must_use]
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// The channel the command was invoked in.
    #[must_use]
    pub fn channel(&self) -> &ChannelRef {
        &self.channel
    }

    /// The ID of the guild the command was invoked in.
    #[must_use]
    pub fn guild_id(&self) -> Option<Snowflake> {
        self.message.guild_id
    }

    /// The guild the command was invoked in, if it is cached.
    #[must_use]
    pub fn guild(&self) -> Option<Guild> {
        let id = self.guild_id()?;
        self.session.cache().get_guild(id).cloned()
    }

    /// Converter configuration.
    #[must_use]
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// The argument cursor.
    #[must_use]
    pub fn view(&self) -> &StringView {
        &self.view
    }

    /// The argument cursor, mutably.
    pub fn view_mut(&mut self) -> &mut StringView {
        &mut self.view
    }
}
