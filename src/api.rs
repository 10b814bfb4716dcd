//! REST client for the MiMuni services backend.
//!
//! Wraps the endpoints behind a citizen's service listings: fetching the
//! professional and commerce lists, deleting a single listing, and creating
//! a new listing through a multipart form upload with photo attachments.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// A professional service listing as returned by the backend.
///
/// Field names on the wire are the backend's Spanish identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfessionalListing {
    #[serde(rename = "idservicioprofesional")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "contacto", default)]
    pub contact: String,
    #[serde(rename = "horario", default)]
    pub schedule: String,
    #[serde(rename = "rubro", default)]
    pub category: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "estado", default)]
    pub status: String,
}

/// A commerce service listing as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommerceListing {
    #[serde(rename = "idServicioComercio")]
    pub id: i64,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "contacto", default)]
    pub contact: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "estado", default)]
    pub status: String,
}

/// The two kinds of service listing a citizen can register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    #[default]
    Commerce,
    Professional,
}

impl ServiceKind {
    /// Human-readable name for display.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Commerce => "Commerce",
            ServiceKind::Professional => "Professional",
        }
    }

    /// The other kind.
    pub fn toggled(&self) -> Self {
        match self {
            ServiceKind::Commerce => ServiceKind::Professional,
            ServiceKind::Professional => ServiceKind::Commerce,
        }
    }
}

/// Kind-specific fields of a new listing, resolved at submit time.
///
/// Commerce and professional listings only share the description, so the
/// rest travels in the variant. The submit path matches exhaustively on
/// this enum; a commerce payload can never carry professional fields and
/// vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceForm {
    Commerce {
        address: String,
        contact: String,
    },
    Professional {
        contact: String,
        schedule: String,
        category: String,
    },
}

impl ServiceForm {
    /// The kind this form creates.
    pub fn kind(&self) -> ServiceKind {
        match self {
            ServiceForm::Commerce { .. } => ServiceKind::Commerce,
            ServiceForm::Professional { .. } => ServiceKind::Professional,
        }
    }
}

/// A photo attached to a new listing form.
///
/// Holds only the path until submission; the bytes are read when the
/// multipart payload is built, so an attachment that never gets submitted
/// costs nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoAttachment {
    pub path: PathBuf,
}

impl PhotoAttachment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Client for the MiMuni backend REST API.
pub struct ServiceApi {
    /// HTTP client for API requests
    http_client: Client,
    /// Backend base URL without a trailing slash
    base_url: String,
}

impl ServiceApi {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the citizen's professional service listings.
    pub async fn my_professional_services(&self, mail: &str) -> Result<Vec<ProfessionalListing>> {
        let url = format!("{}/inicio/misServiciosProfesionales", self.base_url);
        info!("Fetching professional listings for {}", mail);

        let response = self
            .http_client
            .get(&url)
            .query(&[("mail", mail)])
            .send()
            .await
            .context("Failed to fetch professional listings")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Professional listings fetch failed ({}): {}", status, error_text);
            anyhow::bail!("Backend returned {}: {}", status, error_text);
        }

        let listings: Vec<ProfessionalListing> = response
            .json()
            .await
            .context("Failed to parse professional listings response")?;
        debug!("Fetched {} professional listing(s)", listings.len());
        Ok(listings)
    }

    /// Fetch the citizen's commerce service listings.
    pub async fn my_commerce_services(&self, mail: &str) -> Result<Vec<CommerceListing>> {
        let url = format!("{}/inicio/misServiciosComercio", self.base_url);
        info!("Fetching commerce listings for {}", mail);

        let response = self
            .http_client
            .get(&url)
            .query(&[("mail", mail)])
            .send()
            .await
            .context("Failed to fetch commerce listings")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Commerce listings fetch failed ({}): {}", status, error_text);
            anyhow::bail!("Backend returned {}: {}", status, error_text);
        }

        let listings: Vec<CommerceListing> = response
            .json()
            .await
            .context("Failed to parse commerce listings response")?;
        debug!("Fetched {} commerce listing(s)", listings.len());
        Ok(listings)
    }

    /// Delete one of the citizen's listings by id.
    pub async fn delete_service(&self, kind: ServiceKind, mail: &str, id: i64) -> Result<()> {
        let url = match kind {
            ServiceKind::Professional => {
                format!("{}/inicio/eliminarServicioProfesional", self.base_url)
            }
            ServiceKind::Commerce => {
                format!("{}/inicio/eliminarServicioComercio", self.base_url)
            }
        };
        info!("Deleting {} listing {} for {}", kind.label(), id, mail);

        let id = id.to_string();
        let response = self
            .http_client
            .delete(&url)
            .query(&[("mail", mail), ("idServicio", id.as_str())])
            .send()
            .await
            .context("Failed to delete listing")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Listing delete failed ({}): {}", status, error_text);
            anyhow::bail!("Backend returned {}: {}", status, error_text);
        }

        debug!("Listing {} deleted", id);
        Ok(())
    }

    /// Create a new listing via multipart form upload.
    ///
    /// Photo files are read here and appended as `files` parts named
    /// `foto_0.jpg` through `foto_(k-1).jpg` in attachment order, content
    /// type `image/jpeg`. A missing photo file fails the whole submission.
    pub async fn create_service(
        &self,
        mail: &str,
        description: &str,
        form: &ServiceForm,
        photos: &[PhotoAttachment],
    ) -> Result<()> {
        let mut payload = Form::new()
            .text("mail", mail.to_string())
            .text("descripcion", description.to_string());

        let url = match form {
            ServiceForm::Commerce { address, contact } => {
                payload = payload
                    .text("direccion", address.clone())
                    .text("contacto", contact.clone());
                format!("{}/inicio/crearServicioComercio", self.base_url)
            }
            ServiceForm::Professional {
                contact,
                schedule,
                category,
            } => {
                payload = payload
                    .text("medioContacto", contact.clone())
                    .text("horario", schedule.clone())
                    .text("rubro", category.clone());
                format!("{}/inicio/crearServicioProfesional", self.base_url)
            }
        };

        for (index, photo) in photos.iter().enumerate() {
            let bytes = tokio::fs::read(&photo.path)
                .await
                .with_context(|| format!("Failed to read photo {:?}", photo.path))?;
            let part = Part::bytes(bytes)
                .file_name(format!("foto_{}.jpg", index))
                .mime_str("image/jpeg")
                .context("Invalid photo content type")?;
            payload = payload.part("files", part);
        }

        info!(
            "Submitting {} listing for {} ({} photo(s))",
            form.kind().label(),
            mail,
            photos.len()
        );
        let response = self
            .http_client
            .post(&url)
            .multipart(payload)
            .send()
            .await
            .context("Failed to submit listing form")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Listing creation failed ({}): {}", status, error_text);
            anyhow::bail!("Backend returned {}: {}", status, error_text);
        }

        debug!("Listing created");
        Ok(())
    }
}
