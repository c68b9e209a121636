//! Shared application state injected into every handler.

use crate::config::AppConfig;
use crate::documents::TemplateRenderer;
use crate::error::AppError;
use crate::lookup::LookupClient;
use crate::store::tabs::{ADVERTS_WORKBOOK, COMMERCE_WORKBOOK};
use crate::store::Workbook;

pub struct AppState {
    pub config: AppConfig,
    pub lookup: LookupClient,
    /// Street-vending workbook: documents, evaluations and authorizations.
    pub commerce: Workbook,
    /// Advert certificate registry.
    pub adverts: Workbook,
    pub renderer: TemplateRenderer,
}

impl AppState {
    /// Opens the workbooks and creates the template and output directories.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let lookup = LookupClient::from_config(&config.lookup)
            .map_err(|e| AppError::Config(format!("cliente de consultas: {e}")))?;
        let renderer = TemplateRenderer::open(&config.templates_dir, &config.output_dir)
            .map_err(|e| AppError::Config(format!("directorios de plantillas y salidas: {e}")))?;
        Ok(Self {
            commerce: Workbook::open(&config.data_dir, COMMERCE_WORKBOOK)?,
            adverts: Workbook::open(&config.data_dir, ADVERTS_WORKBOOK)?,
            lookup,
            renderer,
            config,
        })
    }
}
