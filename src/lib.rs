mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod telemetry;

pub use domain::{data, entities, use_cases};
pub use interfaces::relays;
pub use infrastructure::{http, utils};

use data::{projects::projects, skills::skill_catalog};
use entities::{
    contact::{ContactFormData, SubmissionResult},
    filter::FilterCriteria,
    project::Project,
    skill::{Catalog, SkillCategory},
};
use errors::AppError;
use relays::contact::HttpRelay;
use use_cases::contact::ContactHandler;

/// Process-wide state: the immutable catalog plus the contact pipeline.
pub struct Portfolio {
    pub catalog: &'static Catalog,
    pub contact_handler: AppContactHandler,
}

pub type AppContactHandler = ContactHandler<HttpRelay>;

impl Portfolio {
    pub fn new(config: &settings::AppConfig) -> Result<Self, AppError> {
        let relay = match config.contact_endpoint_url()? {
            Some(endpoint) => {
                let client = http::client::create_client(config.contact_timeout())?;
                Some(HttpRelay::new(
                    client,
                    endpoint,
                    config.contact_encoding,
                    &config.contact_form_name,
                ))
            }
            None => {
                tracing::warn!("Contact endpoint not configured; submissions will be refused");
                None
            }
        };

        Ok(Portfolio {
            catalog: skill_catalog(),
            contact_handler: ContactHandler::new(relay),
        })
    }

    pub fn filter_skills(&self, criteria: &FilterCriteria) -> Vec<SkillCategory> {
        self.catalog.filter(criteria)
    }

    pub fn projects(&self) -> &'static [Project] {
        projects()
    }

    pub async fn submit_contact(&self, form: &ContactFormData) -> SubmissionResult {
        self.contact_handler.submit(form).await
    }
}
