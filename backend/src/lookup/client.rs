use crate::config::LookupConfig;
use crate::lookup::cache::TtlCache;
use crate::lookup::fields::build_record;
use crate::lookup::transport::{LookupRequest, LookupResponse, LookupTransport, ReqwestTransport};
use crate::lookup::{truncate, Attempt, LookupError};
use common::model::identity::IdKind;
use common::model::lookup::{Autocomplete, LookupRecord, UserMessage};
use log::{debug, warn};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// Statuses that mean a gateway refused the request rather than the registry
/// answering it. On the primary route 406 is treated as "use the other route".
const PRIMARY_REJECTIONS: &[u16] = &[403, 415];
const SECONDARY_REJECTIONS: &[u16] = &[403, 406, 415];
/// Primary-route statuses that send the lookup to the secondary route.
const FALLBACK_STATUSES: &[u16] = &[404, 406];

const ATTEMPT_BODY_LIMIT: usize = 200;
const ERROR_BODY_LIMIT: usize = 300;

/// One way of asking the registry for an identifier.
struct Route {
    url: String,
    query: Vec<(String, String)>,
    params: Value,
}

impl Route {
    /// `{base}/{service}/{id_type}/{id}`
    fn primary(base: &str, service: &str, id_type: &str, id: &str) -> Self {
        Self {
            url: format!("{base}/{service}/{id_type}/{id}"),
            query: Vec::new(),
            params: json!({}),
        }
    }

    /// `{base}/{service}/{id_type}/{id_type}?{id_type}={id}`
    fn secondary(base: &str, service: &str, id_type: &str, id: &str) -> Self {
        Self {
            url: format!("{base}/{service}/{id_type}/{id_type}"),
            query: vec![(id_type.to_owned(), id.to_owned())],
            params: json!({ id_type: id }),
        }
    }
}

pub struct LookupClient {
    transport: Arc<dyn LookupTransport>,
    base_url: String,
    cache: TtlCache<LookupRecord>,
}

impl LookupClient {
    pub fn new(transport: Arc<dyn LookupTransport>, base_url: impl Into<String>, cache_ttl: Duration) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            cache: TtlCache::new(cache_ttl),
        }
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        let transport = ReqwestTransport::new(config.token.clone(), config.timeout)?;
        Ok(Self::new(Arc::new(transport), config.base_url.clone(), config.cache_ttl))
    }

    /// Resolves a DNI or RUC against the registry.
    ///
    /// The primary route is tried first; a 404 or 406 there moves on to the
    /// secondary route. A gateway rejection on the route being tried is
    /// retried as a POST with the parameters in the body and then as a bare
    /// GET. Answers are cached per identifier; failures are not.
    pub async fn lookup_by_id(&self, raw: &str) -> Result<LookupRecord, LookupError> {
        let id = raw.trim();
        let kind = IdKind::classify(id).ok_or_else(|| {
            LookupError::InvalidInput(format!(
                "Identificador inválido '{id}': usa 8 (DNI), 9 (CE) u 11 (RUC) dígitos"
            ))
        })?;

        if let Some(record) = self.cache.get(id).await {
            debug!("Consulta {} {} servida desde caché", kind.label(), id);
            return Ok(record);
        }

        let (service, id_type) = match kind {
            IdKind::Dni => ("reniec", "dni"),
            IdKind::Ruc => ("sunat", "ruc"),
            IdKind::Ce => return Err(LookupError::Unsupported(kind)),
        };

        let mut attempts = Vec::new();
        let primary = Route::primary(&self.base_url, service, id_type, id);
        let result = match self.fetch_route(&primary, PRIMARY_REJECTIONS, &mut attempts).await {
            Err(LookupError::Http { status, .. }) if FALLBACK_STATUSES.contains(&status) => {
                warn!(
                    "Ruta principal de consulta {} respondió HTTP {}; probando ruta alternativa",
                    kind.label(),
                    status
                );
                let secondary = Route::secondary(&self.base_url, service, id_type, id);
                self.fetch_route(&secondary, SECONDARY_REJECTIONS, &mut attempts).await
            }
            other => other,
        };
        let result = result.inspect_err(|error| {
            warn!("Consulta {} {} falló: {}", kind.label(), id, error);
        })?;

        let record = build_record(kind, id.to_owned(), result);
        self.cache.insert(id.to_owned(), record.clone()).await;
        Ok(record)
    }

    /// Name suggestion for an identifier typed into a form. Never fails: lookup
    /// errors come back as a warning message.
    pub async fn autocomplete(&self, raw: &str) -> Autocomplete {
        let id = raw.trim();
        match IdKind::classify(id) {
            Some(IdKind::Dni) => self.autocomplete_person(id).await,
            Some(IdKind::Ruc) => self.autocomplete_business(id).await,
            Some(IdKind::Ce) => Autocomplete {
                kind: Some(IdKind::Ce),
                suggestion: None,
                message: Some(UserMessage::info("Tipo detectado: CE")),
            },
            None if id.chars().count() >= 10 => Autocomplete {
                kind: None,
                suggestion: None,
                message: Some(UserMessage::warning("RUC inválido (debe tener 11 dígitos).")),
            },
            None => Autocomplete::default(),
        }
    }

    async fn autocomplete_person(&self, id: &str) -> Autocomplete {
        let (suggestion, message) = match self.lookup_by_id(id).await {
            Ok(record) if !record.display_name.is_empty() => (
                Some(record.display_name),
                UserMessage::success("DNI válido: nombre autocompletado."),
            ),
            Ok(_) => (None, UserMessage::warning("DNI OK, pero no se encontró nombre.")),
            Err(error) => (None, UserMessage::warning(error.to_string())),
        };
        Autocomplete { kind: Some(IdKind::Dni), suggestion, message: Some(message) }
    }

    async fn autocomplete_business(&self, id: &str) -> Autocomplete {
        let (suggestion, message) = match self.lookup_by_id(id).await {
            Ok(record) if !record.display_name.is_empty() => {
                let text = if id.starts_with("10") {
                    "RUC 10 OK: nombre autocompletado."
                } else if id.starts_with("20") {
                    "RUC 20 OK: razón social autocompletada."
                } else {
                    "RUC OK: solicitante autocompletado."
                };
                (Some(record.display_name), UserMessage::success(text))
            }
            Ok(_) => (None, UserMessage::warning("RUC OK, pero no vino razón social/nombre.")),
            Err(error) => (None, UserMessage::warning(error.to_string())),
        };
        Autocomplete { kind: Some(IdKind::Ruc), suggestion, message: Some(message) }
    }

    async fn fetch_route(
        &self,
        route: &Route,
        rejections: &[u16],
        attempts: &mut Vec<Attempt>,
    ) -> Result<Map<String, Value>, LookupError> {
        let first = self
            .send(LookupRequest::get(&route.url, route.query.clone()), attempts)
            .await?;
        if !rejections.contains(&first.status) {
            return interpret(first);
        }

        warn!("Registro rechazó GET {} con HTTP {}; reintentando", route.url, first.status);
        let post = self
            .send(LookupRequest::post(&route.url, route.params.clone()), attempts)
            .await?;
        if post.status < 400 {
            return interpret(post);
        }
        let bare = self.send(LookupRequest::get(&route.url, Vec::new()), attempts).await?;
        if bare.status < 400 {
            return interpret(bare);
        }

        Err(LookupError::Blocked { attempts: attempts.clone() })
    }

    async fn send(
        &self,
        request: LookupRequest,
        attempts: &mut Vec<Attempt>,
    ) -> Result<LookupResponse, LookupError> {
        let method = request.method.as_str();
        let url = request.url.clone();
        let response = self.transport.send(request).await?;
        attempts.push(Attempt {
            method,
            url,
            status: response.status,
            body: truncate(&response.body, ATTEMPT_BODY_LIMIT),
        });
        Ok(response)
    }
}

/// Unwraps the `{success, result, message}` envelope of the registry.
fn interpret(response: LookupResponse) -> Result<Map<String, Value>, LookupError> {
    let status = response.status;
    if status >= 400 {
        return Err(LookupError::Http { status, body: truncate(&response.body, ERROR_BODY_LIMIT) });
    }
    let malformed = || LookupError::Malformed { status, body: truncate(&response.body, ERROR_BODY_LIMIT) };

    let Value::Object(mut envelope) =
        serde_json::from_str::<Value>(&response.body).map_err(|_| malformed())?
    else {
        return Err(malformed());
    };
    if envelope.get("success") != Some(&Value::Bool(true)) {
        let message = ["message", "error"]
            .iter()
            .filter_map(|key| envelope.get(*key))
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|message| !message.is_empty())
            .unwrap_or("success=false");
        return Err(LookupError::Upstream(message.to_owned()));
    }

    match envelope.remove("result") {
        Some(Value::Object(result)) => Ok(result),
        _ => Ok(Map::new()),
    }
}
