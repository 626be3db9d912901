use super::lookup::MessageLookup;
use super::renderer::CommentRenderer;
use crate::errors::Result;
use crate::structs::{Outlet, RenderedComment, Visibility};

use feed::NominationRecord;
use log::{debug, error, info, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub posted: usize,
    pub skipped: usize,
}

/// Posts a ranked batch, strictly in rank order: nomination k is rendered and
/// posted before k+1 is looked at.
pub struct Disseminator<'a, O: Outlet> {
    outlet: &'a O,
    visibility: Visibility,
}

impl<'a, O: Outlet> Disseminator<'a, O> {
    pub fn new(outlet: &'a O, visibility: Visibility) -> Disseminator<'a, O> {
        Disseminator { outlet, visibility }
    }

    /// A nomination that can't be rendered or posted is logged and skipped, the
    /// rest of the batch carries on. `closing` goes to the requester at the end.
    pub async fn disseminate<L: MessageLookup>(
        &self,
        renderer: &mut CommentRenderer<'_, L>,
        nominations: &[NominationRecord],
        closing: &str,
    ) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for (index, nomination) in nominations.iter().enumerate() {
            let rank = index + 1;
            let rendered = match renderer.render(nomination).await {
                Ok(rendered) => rendered,
                Err(why) => {
                    warn!(
                        "skipping nomination #{rank} ({}): {why}",
                        nomination.message_link
                    );
                    summary.skipped += 1;
                    continue;
                }
            };

            if let Err(why) = self.post(&rendered).await {
                error!(
                    "failed to post nomination #{rank} ({}): {why}",
                    nomination.message_link
                );
                summary.skipped += 1;
                continue;
            }
            let colour = renderer.commit();
            debug!("posted nomination #{rank} in {:06X}", colour.0);
            summary.posted += 1;
        }

        info!(
            "posted {} of {} nominations ({:?})",
            summary.posted,
            nominations.len(),
            self.visibility
        );
        self.outlet.acknowledge(closing).await?;
        Ok(summary)
    }

    pub async fn post(&self, rendered: &RenderedComment) -> Result<()> {
        match self.visibility {
            Visibility::Public => self.outlet.post_public(rendered).await,
            Visibility::Ephemeral => self.outlet.post_private(rendered).await,
        }
    }
}
