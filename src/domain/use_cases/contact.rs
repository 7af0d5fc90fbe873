use tracing::instrument;

use crate::{
    entities::contact::{ContactFormData, SubmissionResult},
    errors::ContactError,
    relays::contact::ContactRelay,
};

pub struct ContactHandler<R>
where
    R: ContactRelay,
{
    /// `None` when no relay endpoint was configured at startup.
    pub relay: Option<R>,
}

impl<R> ContactHandler<R>
where
    R: ContactRelay,
{
    pub fn new(relay: Option<R>) -> Self {
        ContactHandler { relay }
    }

    pub fn is_configured(&self) -> bool {
        self.relay.is_some()
    }

    /// Validates the form and relays it, keeping the failure kind typed.
    ///
    /// Validation and configuration are checked before any I/O. Exactly one
    /// relay attempt is made per call; there is no retry.
    pub async fn try_submit(&self, form: &ContactFormData) -> Result<SubmissionResult, ContactError> {
        form.check()?;

        let relay = self.relay.as_ref().ok_or(ContactError::NotConfigured)?;

        relay.deliver(form).await?;

        Ok(SubmissionResult::sent())
    }

    /// Same as [`try_submit`](Self::try_submit), but every outcome is folded
    /// into a displayable [`SubmissionResult`]. Never fails.
    #[instrument(skip_all)]
    pub async fn submit(&self, form: &ContactFormData) -> SubmissionResult {
        match self.try_submit(form).await {
            Ok(result) => {
                tracing::info!("Contact message relayed");
                result
            }
            Err(err) => {
                match &err {
                    ContactError::Validation(_) => tracing::debug!("Contact form rejected: {}", err),
                    _ => tracing::warn!("Contact submission failed: {}", err),
                }
                SubmissionResult::from(err)
            }
        }
    }
}
