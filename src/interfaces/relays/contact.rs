use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde::Serialize;
use tracing::instrument;
use url::Url;

use crate::{entities::contact::ContactFormData, errors::ContactError, settings::RelayEncoding};

/// Delivers a validated contact message to whatever forwards it by email.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    async fn deliver(&self, form: &ContactFormData) -> Result<(), ContactError>;
}

#[derive(Debug, Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

impl<'a> From<&'a ContactFormData> for ContactPayload<'a> {
    fn from(form: &'a ContactFormData) -> Self {
        ContactPayload {
            name: &form.name,
            // the address that passed the pattern check
            email: form.email.trim(),
            message: &form.message,
        }
    }
}

/// Relays over a single HTTP POST to a hosted form endpoint.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: Client,
    endpoint: Url,
    encoding: RelayEncoding,
    form_name: String,
}

impl HttpRelay {
    pub fn new(client: Client, endpoint: Url, encoding: RelayEncoding, form_name: &str) -> Self {
        HttpRelay {
            client,
            endpoint,
            encoding,
            form_name: form_name.to_string(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn encoding(&self) -> RelayEncoding {
        self.encoding
    }
}

#[async_trait]
impl ContactRelay for HttpRelay {
    #[instrument(skip_all, name = "contact_relay")]
    async fn deliver(&self, form: &ContactFormData) -> Result<(), ContactError> {
        let payload = ContactPayload::from(form);

        let request = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json");

        let request = match self.encoding {
            RelayEncoding::Json => request.json(&payload),
            RelayEncoding::Form => request.form(&[
                ("form-name", self.form_name.as_str()),
                ("name", payload.name),
                ("email", payload.email),
                ("message", payload.message),
            ]),
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!("Contact relay request failed: {}", e);
            ContactError::from(e)
        })?;

        let status = response.status();
        tracing::info!(
            "Contact relay at {} responded with {}",
            self.endpoint.host_str().unwrap_or("unknown"),
            status
        );

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), body = %body, "Contact relay rejected message");

        Err(ContactError::Rejected(status.as_u16()))
    }
}
