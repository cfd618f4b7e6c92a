//! Submitting a new posting: validate, pause, then hand the candidate to the
//! store.

use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::item::{validate_draft, AdmissionRules, Item, ItemDraft, ValidationError};
use crate::store::{ItemStore, KeyValueStore, StoreError};

#[derive(Debug, Error)]
pub enum PostError {
    /// Rejected by admission; the store was not touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Rejected by the store; the add was rolled back.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Front door for new postings.
#[derive(Debug, Clone, Default)]
pub struct PostingService {
    rules: AdmissionRules,
    submit_delay: Duration,
}

impl PostingService {
    #[must_use]
    pub fn new(rules: AdmissionRules) -> Self {
        Self {
            rules,
            submit_delay: Duration::ZERO,
        }
    }

    /// Wait this long between a successful validation and the store write.
    #[must_use]
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    #[must_use]
    pub fn rules(&self) -> &AdmissionRules {
        &self.rules
    }

    #[must_use]
    pub fn submit_delay(&self) -> Duration {
        self.submit_delay
    }

    pub async fn submit<B: KeyValueStore>(
        &self,
        store: &mut ItemStore<B>,
        draft: &ItemDraft,
    ) -> Result<Item, PostError> {
        let candidate = validate_draft(draft, &self.rules)?;

        if !self.submit_delay.is_zero() {
            debug!("Holding submission for {:?}", self.submit_delay);
            tokio::time::sleep(self.submit_delay).await;
        }

        let item = store.add(candidate)?;
        info!("Accepted {} posting {}", item.kind, item.id);
        Ok(item)
    }
}
