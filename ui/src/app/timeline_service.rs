//! Timeline renderer
//!
//! Fetches the timeline and writes it into the feed container in one batch.

use std::sync::Arc;

use crate::domain::ports::{FeedContainer, TimelineApi};
use crate::feed::{render_feed, RenderOptions};

pub struct TimelineRenderer<A>
where
    A: TimelineApi,
{
    api: Arc<A>,
    container: Arc<dyn FeedContainer>,
    options: RenderOptions,
}

impl<A> TimelineRenderer<A>
where
    A: TimelineApi,
{
    pub fn new(api: Arc<A>, container: Arc<dyn FeedContainer>) -> Self {
        Self::with_options(api, container, RenderOptions::default())
    }

    pub fn with_options(
        api: Arc<A>,
        container: Arc<dyn FeedContainer>,
        options: RenderOptions,
    ) -> Self {
        Self {
            api,
            container,
            options,
        }
    }

    /// Fetch the timeline and replace the container's contents.
    ///
    /// Never fails: any fetch error is logged and rendered as an empty
    /// timeline. Returns the number of cards written.
    pub async fn render_timeline(&self) -> usize {
        tracing::info!("Rendering timeline");

        let records = match self.api.fetch_timeline().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    "Failed to fetch timeline, showing empty feed. Is the API server running? {}",
                    e
                );
                Vec::new()
            }
        };

        let html = render_feed(&records, &self.options);
        self.container.set_html(&html);

        tracing::info!("Rendered {} posts", records.len());
        records.len()
    }
}
