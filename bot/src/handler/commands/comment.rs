use super::feed_failure;
use crate::errors::{Error, Result};
use crate::handler::disseminator::Disseminator;
use crate::handler::lookup::HttpLookup;
use crate::handler::renderer::CommentRenderer;
use crate::handler::Handler;
use crate::structs::{ColourCycler, Outlet, ParsedLink, Reply, Visibility};

use feed::Lookup;
use log::{debug, info};
use serenity::prelude::Context;

const NOT_A_LINK: &str = "That doesn't look like a message link.";
const NOT_NOMINATED: &str = "That message hasn't been nominated yet.";
const GONE: &str = "That message was nominated, but I can't find it anymore.";

fn closing(votes: u64) -> String {
    match votes {
        1 => "That one has 1 vote so far 🗳️".to_string(),
        n => format!("That one has {n} votes so far 🗳️"),
    }
}

impl Handler {
    pub(super) async fn comment(
        &self,
        ctx: &Context,
        reply: &Reply<'_>,
        visibility: Visibility,
        link: &str,
    ) -> Result<()> {
        let link = link.trim();
        if let Err(why) = link.parse::<ParsedLink>() {
            debug!("rejecting get-comment: {why}");
            return reply.acknowledge(NOT_A_LINK).await;
        }

        let nomination = match self.feed.comment_by_link(link).await {
            Ok(Lookup::Found(nomination)) => nomination,
            Ok(Lookup::NotFound) => return reply.acknowledge(NOT_NOMINATED).await,
            Err(why) => return feed_failure(reply, why).await,
        };

        let lookup = HttpLookup::new(ctx);
        let mut renderer = CommentRenderer::new(&lookup, ColourCycler::new(self.palette.clone()));
        match renderer.render(&nomination).await {
            Ok(rendered) => {
                Disseminator::new(reply, visibility).post(&rendered).await?;
                reply.acknowledge(&closing(nomination.vote_count)).await
            }
            Err(Error::MessageResolution(link)) => {
                info!("nominated message {link} is gone");
                reply.acknowledge(GONE).await
            }
            Err(why) => Err(why),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_votes() {
        assert_eq!(closing(1), "That one has 1 vote so far 🗳️");
        assert_eq!(closing(12), "That one has 12 votes so far 🗳️");
    }
}
