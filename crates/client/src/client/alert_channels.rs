//! Alert notification channel API methods for [`GrafanaClient`].

use tracing::debug;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::lookup::find_by_name;
use crate::models::AlertChannel;

impl GrafanaClient {
    /// List alert notification channels in server order.
    pub async fn list_alert_channels(&self) -> Result<Vec<AlertChannel>> {
        endpoints::list_alert_channels(&self.http, &self.base_url, &self.auth, self.metrics.as_ref())
            .await
    }

    /// Find an alert notification channel by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AlertChannelNotFound`] when the listing succeeded
    /// but no channel matched. A failed listing is returned as is.
    pub async fn get_alert_channel_by_name(&self, name: &str) -> Result<AlertChannel> {
        let channels = self.list_alert_channels().await?;
        let count = channels.len();

        match find_by_name(channels, name) {
            Some(channel) => {
                debug!(name, id = channel.id, "Alert channel found");
                Ok(channel)
            }
            None => {
                debug!(name, searched = count, "No alert channel matched");
                Err(ClientError::AlertChannelNotFound)
            }
        }
    }
}
