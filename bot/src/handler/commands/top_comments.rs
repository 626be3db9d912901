use super::feed_failure;
use crate::errors::Result;
use crate::handler::disseminator::{BatchSummary, Disseminator};
use crate::handler::lookup::{HttpLookup, MessageLookup};
use crate::handler::renderer::CommentRenderer;
use crate::handler::Handler;
use crate::structs::{ColourCycler, Outlet, Reply, Visibility};

use feed::NominationRecord;
use log::{debug, info};
use serenity::prelude::Context;

pub(super) const CLOSING: &str =
    "I hope you enjoyed reading though the server's top ten comments as much as I did 🤗";

impl Handler {
    pub(super) async fn top_comments(
        &self,
        ctx: &Context,
        reply: &Reply<'_>,
        visibility: Visibility,
    ) -> Result<()> {
        let ranked = self.feed.top_comments().await;
        let lookup = HttpLookup::new(ctx);
        let colours = ColourCycler::new(self.palette.clone());
        debug!("cycling through {} colours", colours.len());

        let summary = post_ranked(ranked, reply, &lookup, colours, visibility).await?;
        if summary.skipped > 0 {
            info!("{} nominations were skipped", summary.skipped);
        }
        Ok(())
    }
}

/// Posts whatever the feed returned. A feed error ends the command before
/// anything is rendered.
async fn post_ranked<O: Outlet, L: MessageLookup>(
    ranked: feed::Result<Vec<NominationRecord>>,
    outlet: &O,
    lookup: &L,
    colours: ColourCycler,
    visibility: Visibility,
) -> Result<BatchSummary> {
    let nominations = match ranked {
        Ok(nominations) => nominations,
        Err(why) => return feed_failure(outlet, why).await,
    };
    info!("fetched {} ranked nominations", nominations.len());

    let mut renderer = CommentRenderer::new(lookup, colours);
    Disseminator::new(outlet, visibility)
        .disseminate(&mut renderer, &nominations, CLOSING)
        .await
}
