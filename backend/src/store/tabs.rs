/// A tab with its declared header. `auto_number` names the column that
/// receives the 1-based row number on append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub auto_number: Option<&'static str>,
}

pub const COMMERCE_WORKBOOK: &str = "comercio";
pub const ADVERTS_WORKBOOK: &str = "anuncios";

pub const EVALUATIONS: TabSpec = TabSpec {
    name: "Evaluaciones_CA",
    columns: &[
        "N°",
        "NUMERO DE DOCUMENTO SIMPLE",
        "NOMBRES Y APELLIDOS",
        "N° DE EVALUACIÓN",
        "FECHA",
        "N° DE RESOLUCIÓN",
        "FECHA DE RESOLUCIÓN",
        "N° DE AUTORIZACIÓN",
        "FECHA DE AUTORIZACION",
    ],
    auto_number: Some("N°"),
};

pub const AUTHORIZATIONS: TabSpec = TabSpec {
    name: "Autorizaciones_CA",
    columns: &[
        "FECHA DE INGRESO",
        "D.S",
        "NOMBRE Y APELLIDO",
        "DNI",
        "GENERO",
        "DOMICILIO FISCAL",
        "CERTIFICADO ANTERIOR",
        "FECHA EMITIDA CERTIFICADO ANTERIOR",
        "FECHA DE CADUCIDAD CERTIFICADO ANTERIOR",
        "N° DE EVALUACION",
        "FECHA DE EVALUACION",
        "N° DE RESOLUCIÓN",
        "FECHA RESOLUCIÓN",
        "N° DE CERTIFICADO",
        "FECHA EMITIDA CERTIFICADO",
        "VIGENCIA DE AUTORIZACIÓN",
        "LUGAR DE VENTA",
        "COORDENADAS",
        "REFERENCIA",
        "GIRO",
        "HORARIO",
        "N° TELEFONO",
        "TIEMPO",
        "PLAZO",
    ],
    auto_number: None,
};

pub const DOCUMENTS: TabSpec = TabSpec {
    name: "Documentos_CA",
    columns: &[
        "ESTADO",
        "N°",
        "FECHA DE INGRESO",
        "N° DE DOCUMENTO SIMPLE",
        "ASUNTO",
        "NOMBRE Y APELLIDO",
        "DNI",
        "DOMICILIO FISCAL",
        "GIRO O MOTIVO DE LA SOLICITUD",
        "UBICACIÓN A SOLICITAR",
        "N° DE CELULAR",
        "PROCEDENTE / IMPROCEDENTE",
        "N° DE CARTA",
        "FECHA DE LA CARTA",
        "FECHA DE NOTIFICACION",
        "FOLIOS",
    ],
    auto_number: Some("N°"),
};

/// Official advert-certificate registry. Column names are kept byte for byte,
/// including the trailing space of the authorization number.
pub const CERTIFICATES: TabSpec = TabSpec {
    name: "Certificados",
    columns: &[
        "EXP",
        "N° RECIBO",
        "FECHA DE INGRESO",
        "RUC DE LA EMPRESA",
        "NÚMERO DE AUTORIZACION ",
        "FECHA DE EMISIÓN DE LA AUTORIZACION",
        "FECHA DE EXPIRACIÓN DE LA AUTORIZACION",
        "TIPO DE DOCUMENTO DE IDENTIDAD DEL SOLICITANTE",
        "NÚMERO DE DOCUMENTO DE IDENTIDAD DEL SOLICITANTE",
        "APELLIDO PATERNO DEL SOLICITANTE",
        "APELLIDO MATERNO DEL SOLICITANTE",
        "NOMBRE DEL SOLICITANTE",
        "RAZÓN SOCIAL DEL SOLICITANTE",
        "CARACTERISTICA FISICA DEL PANEL",
        "CARACTERISTICA TECNICA DEL PANEL",
        "TIPO DE ANUNCIPO PUBLICITARIO (Móvil, paneles, banderolas, etc.)",
        "DIRECCION",
        "UBICACIÓN",
        "LEYENDA",
        "LARGO",
        "ALTO",
        "ANCHO",
        "GROSOR",
        "LONGUITUD DE SOPORTES",
        "COLOR",
        "MATERIAL",
        "N° CARAS",
        "COORDENADAS",
    ],
    auto_number: None,
};
