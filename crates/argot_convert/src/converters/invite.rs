//! Invite converter.

use async_trait::async_trait;
use tracing::debug;

use argot_foundation::{Error, Value};

use crate::context::Context;
use crate::converter::{Converter, ConverterResult};

/// Resolves an invite code or URL remotely. Any failure is reported as a
/// bad invite.
#[derive(Clone, Copy, Debug, Default)]
pub struct InviteConverter;

#[async_trait]
impl Converter for InviteConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        match ctx.session().fetch_invite(argument).await {
            Ok(invite) => Ok(Value::Invite(invite)),
            Err(err) => {
                debug!(argument, %err, "invite lookup failed");
                Err(Error::bad_invite(argument).into())
            }
        }
    }
}
