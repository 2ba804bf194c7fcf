//! Home feed
//!
//! The landing screen lists every playable scenario as a card. Refresh pulls
//! the current summaries through the gateway; the engine has already
//! filtered reserved slots out.

use std::sync::Arc;

use respondright_shared::ScenarioSummary;

use crate::ports::{GatewayError, ScenarioGateway};

pub struct HomeFeed {
    gateway: Arc<dyn ScenarioGateway>,
    cards: Vec<ScenarioSummary>,
}

impl HomeFeed {
    pub fn new(gateway: Arc<dyn ScenarioGateway>) -> Self {
        Self {
            gateway,
            cards: Vec::new(),
        }
    }

    /// Cards from the last successful refresh, in catalog order
    pub fn cards(&self) -> &[ScenarioSummary] {
        &self.cards
    }

    /// Pull the current catalog listing. On failure the previous cards stay
    /// on screen and the error is reported to the caller.
    pub async fn refresh(&mut self) -> Result<(), GatewayError> {
        match self.gateway.fetch_summaries().await {
            Ok(cards) => {
                tracing::debug!(count = cards.len(), "Home feed refreshed");
                self.cards = cards;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Home feed refresh failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use respondright_domain::{Difficulty, ScenarioId};

    use crate::ports::MockScenarioGateway;

    fn summary(id: &str, title: &str) -> ScenarioSummary {
        ScenarioSummary {
            id: ScenarioId::from(id),
            title: title.into(),
            description: "description".into(),
            image_url: String::new(),
            difficulty: Difficulty::Beginner,
            category: "Misc".into(),
        }
    }

    #[tokio::test]
    async fn refresh_replaces_cards_in_catalog_order() {
        let mut gateway = MockScenarioGateway::new();
        gateway.expect_fetch_summaries().times(1).returning(|| {
            Ok(vec![
                summary("1", "Missing Loved One"),
                summary("2", "Heart Attack Response"),
            ])
        });

        let mut feed = HomeFeed::new(Arc::new(gateway));
        feed.refresh().await.expect("refresh");
        let titles: Vec<&str> = feed.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Missing Loved One", "Heart Attack Response"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_cards() {
        let mut gateway = MockScenarioGateway::new();
        let mut seq = mockall::Sequence::new();
        gateway
            .expect_fetch_summaries()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![summary("1", "Missing Loved One")]));
        gateway
            .expect_fetch_summaries()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(GatewayError::Unavailable("engine offline".into())));

        let mut feed = HomeFeed::new(Arc::new(gateway));
        feed.refresh().await.expect("first refresh");
        assert!(feed.refresh().await.is_err());
        assert_eq!(feed.cards().len(), 1);
    }
}
