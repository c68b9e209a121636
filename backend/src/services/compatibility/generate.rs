//! Compatibility certificate for one or more general activities.
//!
//! Activities and their trades fill numbered placeholders: `actividad_1` to
//! `actividad_5` and `giro_1_1` to `giro_5_10`. Slots beyond what the form
//! sent are filled with empty text so the template never shows a raw
//! placeholder. The first activity is also available without a number.

use super::catalog::{find_choice, find_zone, CERTIFIERS, ORDINANCES, RISK_LEVELS};
use crate::dates;
use crate::documents::{context, TemplateContext};
use crate::error::AppError;
use crate::state::AppState;
use crate::validation::{to_upper, Required};
use actix_web::{web, HttpResponse};
use chrono::{Datelike, Local, NaiveDate};
use common::model::compatibility::{Conformity, LicenseKind};
use common::model::identity::IdKind;
use common::requests::CompatibilityRequest;

pub const MAX_ACTIVITIES: usize = 5;
pub const MAX_TRADES: usize = 10;

/// Printed where the applicant has no DNI, RUC or trade name.
const NOT_GIVEN: &str = "--------------------";

/// Handler for `POST /api/compatibility`. Answers the filled `.docx`.
pub async fn process(
    state: web::Data<AppState>,
    body: web::Json<CompatibilityRequest>,
) -> Result<HttpResponse, AppError> {
    let certificate = build_certificate(body.into_inner(), Local::now().date_naive())?;
    let document = state.renderer.render(
        certificate.license.template(),
        &certificate_context(&certificate),
        &certificate.file_stem(),
    )?;
    Ok(document.into_response())
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Certificate {
    pub number: String,
    pub applicant_name: String,
    pub dni: String,
    pub ruc: String,
    pub trade_name: String,
    pub address: String,
    pub use_description: String,
    pub ordinances: Vec<&'static str>,
    pub area: String,
    pub risk_level: &'static str,
    pub certifier: &'static str,
    pub license: LicenseKind,
    pub ds_number: String,
    pub ds_date: NaiveDate,
    pub document_date: NaiveDate,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Activity {
    pub description: String,
    pub code: String,
    pub zone: &'static str,
    pub zone_description: String,
    pub trades: Vec<TradeRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TradeRow {
    pub code: String,
    pub description: String,
    pub conformity: Conformity,
}

impl Certificate {
    fn file_stem(&self) -> String {
        format!("{} - {} - {}", self.number, self.document_date.year(), self.applicant_name)
    }
}

/// Validates the form against the catalogs and normalizes it for printing:
/// names and descriptions upper-cased, missing dates are `today`.
pub(crate) fn build_certificate(
    request: CompatibilityRequest,
    today: NaiveDate,
) -> Result<Certificate, AppError> {
    if request.activities.len() > MAX_ACTIVITIES {
        return Err(AppError::InvalidInput(format!(
            "Se admiten como máximo {MAX_ACTIVITIES} actividades generales."
        )));
    }
    if let Some(position) = request.activities.iter().position(|a| a.trades.len() > MAX_TRADES) {
        return Err(AppError::InvalidInput(format!(
            "La actividad {} supera los {MAX_TRADES} giros.",
            position + 1
        )));
    }

    let mut required = Required::new()
        .text("n_compa", &request.compatibility_number)
        .text("persona", &request.applicant_name)
        .text("direccion", &request.address)
        .text("giro", &request.use_description)
        .text("area", &request.area)
        .text("itse", &request.risk_level)
        .text("certificador", &request.certifier)
        .text("ds", &request.ds_number)
        .listed("ordenanzas", &request.ordinances)
        .listed("actividades_generales", &request.activities);
    for (i, activity) in request.activities.iter().enumerate().map(|(i, a)| (i + 1, a)) {
        required = required
            .text(format!("actividad_{i}"), &activity.description)
            .text(format!("codigo_actividad_{i}"), &activity.code)
            .text(format!("zona_{i}"), &activity.zone)
            .listed(format!("giros_actividad_{i}"), &activity.trades);
        for (j, trade) in activity.trades.iter().enumerate().map(|(j, t)| (j + 1, t)) {
            required = required
                .text(format!("codigo_giro_{i}_{j}"), &trade.code)
                .text(format!("desc_giro_{i}_{j}"), &trade.description);
        }
    }
    required.check()?;

    let dni = request.dni.trim().to_owned();
    if !dni.is_empty() && IdKind::classify(&dni) != Some(IdKind::Dni) {
        return Err(AppError::InvalidInput("DNI inválido: debe tener 8 dígitos numéricos".to_owned()));
    }
    let ruc = request.ruc.trim().to_owned();
    if !ruc.is_empty() && IdKind::classify(&ruc) != Some(IdKind::Ruc) {
        return Err(AppError::InvalidInput("RUC inválido: debe tener 11 dígitos numéricos".to_owned()));
    }

    let ordinances = request
        .ordinances
        .iter()
        .map(|ordinance| catalog_choice(ORDINANCES, ordinance, "Ordenanza"))
        .collect::<Result<Vec<_>, _>>()?;
    let risk_level = catalog_choice(RISK_LEVELS, &request.risk_level, "Nivel de riesgo ITSE")?;
    let certifier = catalog_choice(CERTIFIERS, &request.certifier, "Certificador de riesgo")?;

    let activities = request
        .activities
        .into_iter()
        .map(|activity| {
            let zone = find_zone(&activity.zone).ok_or_else(|| {
                AppError::InvalidInput(format!("Zonificación no reconocida: {}", activity.zone.trim()))
            })?;
            Ok(Activity {
                description: to_upper(&activity.description),
                code: activity.code.trim().to_owned(),
                zone: zone.code,
                zone_description: to_upper(zone.description),
                trades: activity
                    .trades
                    .into_iter()
                    .map(|trade| TradeRow {
                        code: trade.code.trim().to_owned(),
                        description: to_upper(&trade.description),
                        conformity: trade.conformity,
                    })
                    .collect(),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let (dni, ruc) = match (dni.is_empty(), ruc.is_empty()) {
        (false, true) => (dni, NOT_GIVEN.to_owned()),
        (true, false) => (NOT_GIVEN.to_owned(), ruc),
        (true, true) => (NOT_GIVEN.to_owned(), NOT_GIVEN.to_owned()),
        (false, false) => (dni, ruc),
    };
    let trade_name = match request.trade_name.trim() {
        "" => NOT_GIVEN.to_owned(),
        name => to_upper(name),
    };

    Ok(Certificate {
        number: request.compatibility_number.trim().to_owned(),
        applicant_name: to_upper(&request.applicant_name),
        dni,
        ruc,
        trade_name,
        address: to_upper(&request.address),
        use_description: to_upper(&request.use_description),
        ordinances,
        area: request.area.trim().to_owned(),
        risk_level,
        certifier,
        license: request.license,
        ds_number: request.ds_number.trim().to_owned(),
        ds_date: request.ds_date.unwrap_or(today),
        document_date: request.document_date.unwrap_or(today),
        activities,
    })
}

fn catalog_choice(
    choices: &'static [&'static str],
    value: &str,
    field: &str,
) -> Result<&'static str, AppError> {
    find_choice(choices, value)
        .ok_or_else(|| AppError::InvalidInput(format!("{field} no reconocido: {}", value.trim())))
}

fn mark(conformity: Conformity, wanted: Conformity) -> String {
    if conformity == wanted { "X".to_owned() } else { String::new() }
}

fn certificate_context(certificate: &Certificate) -> TemplateContext {
    let first = certificate.activities.first();
    let mut values = context([
        ("n_compa", certificate.number.clone()),
        ("persona", certificate.applicant_name.clone()),
        ("dni", certificate.dni.clone()),
        ("ruc", certificate.ruc.clone()),
        ("nom_comercio", certificate.trade_name.clone()),
        ("direccion", certificate.address.clone()),
        ("giro", certificate.use_description.clone()),
        ("ordenanza", certificate.ordinances.join(", ")),
        ("area", certificate.area.clone()),
        ("itse", certificate.risk_level.to_owned()),
        ("certificador", certificate.certifier.to_owned()),
        ("tipo_licencia", certificate.license.label().to_owned()),
        ("actividad", first.map(|a| a.description.clone()).unwrap_or_default()),
        ("codigo", first.map(|a| a.code.clone()).unwrap_or_default()),
        ("zona", first.map(|a| a.zone.to_owned()).unwrap_or_default()),
        ("zona_desc", first.map(|a| a.zone_description.clone()).unwrap_or_default()),
        ("ds", certificate.ds_number.clone()),
        ("fecha_ds", dates::month_abbrev(certificate.ds_date)),
        ("fecha_actual", dates::long(certificate.document_date)),
    ]);

    for i in 1..=MAX_ACTIVITIES {
        let activity = certificate.activities.get(i - 1);
        let text = |pick: fn(&Activity) -> String| activity.map(pick).unwrap_or_default();
        values.insert(format!("actividad_{i}"), text(|a| a.description.clone()));
        values.insert(format!("codigo_actividad_{i}"), text(|a| a.code.clone()));
        values.insert(format!("zona_{i}"), text(|a| a.zone.to_owned()));
        values.insert(format!("zona_desc_{i}"), text(|a| a.zone_description.clone()));

        for j in 1..=MAX_TRADES {
            let trade = activity.and_then(|a| a.trades.get(j - 1));
            let cell = |pick: fn(&TradeRow) -> String| trade.map(pick).unwrap_or_default();
            values.insert(format!("codigo_giro_{i}_{j}"), cell(|t| t.code.clone()));
            values.insert(format!("giro_{i}_{j}"), cell(|t| t.description.clone()));
            values.insert(format!("conf_si_{i}_{j}"), cell(|t| mark(t.conformity, Conformity::Si)));
            values.insert(format!("conf_no_{i}_{j}"), cell(|t| mark(t.conformity, Conformity::No)));
        }
    }
    values
}
