//! Trade (giro) catalog of the street-vending ordinance.

use actix_web::HttpResponse;
use common::model::permit::Trade;

pub const TRADES: &[Trade] = &[
    trade("Rubro 1.a - Golosinas y afines (CÓDIGO G 001)", "GOLOSINAS Y AFINES, DEBIDAMENTE ENVASADOS CON REGISTRO SANITARIO Y CON FECHA DE VENCIMIENTO VIGENTE", "1", "001"),
    trade("Rubro 2.a - Venta de frutas o verduras (CÓDIGO G 002)", "VENTA DE FRUTAS O VERDURAS", "2", "002"),
    trade("Rubro 2.b - Productos naturales con registro sanitario (CÓDIGO G 003)", "VENTA DE PRODUCTOS NATURALES, CON REGISTRO SANITARIO", "2", "003"),
    trade("Rubro 3.a - Bebidas saludables (CÓDIGO G 004)", "BEBIDAS SALUDABLES: EMOLIENTE, QUINUA, MACA, SOYA", "3", "004"),
    trade("Rubro 3.b - Potajes tradicionales (CÓDIGO G 005)", "POTAJES TRADICIONALES", "3", "005"),
    trade("Rubro 3.c - Dulces tradicionales (CÓDIGO G 006)", "DULCES TRADICIONALES", "3", "006"),
    trade("Rubro 3.d - Sándwiches (CÓDIGO G 007)", "SÁNDWICHES", "3", "007"),
    trade("Rubro 3.e - Jugo de naranja y similares (CÓDIGO G 008)", "JUGO DE NARANJA Y SIMILARES", "3", "008"),
    trade("Rubro 3.f - Canchitas, confitería y similares (CÓDIGO G 009)", "CANCHITAS, CONFITERÍA Y SIMILARES", "3", "009"),
    trade("Rubro 4.a - Mercería, bazar y útiles de escritorio (CÓDIGO G 010)", "MERCERÍAS, ARTÍCULOS DE BAZAR Y ÚTILES DE ESCRITORIO", "4", "010"),
    trade("Rubro 4.b - Diarios, revistas, libros y loterías (CÓDIGO G 011)", "DIARIOS Y REVISTAS, LIBROS Y LOTERÍAS", "4", "011"),
    trade("Rubro 4.c - Monedas y estampillas (CÓDIGO G 012)", "MONEDAS Y ESTAMPILLAS", "4", "012"),
    trade("Rubro 4.d - Artesanías (CÓDIGO G 013)", "ARTESANÍAS", "4", "013"),
    trade("Rubro 4.e - Artículos religiosos (CÓDIGO G 014)", "ARTÍCULOS RELIGIOSOS", "4", "014"),
    trade("Rubro 4.f - Artículos de limpieza (CÓDIGO G 015)", "ARTÍCULOS DE LIMPIEZA", "4", "015"),
    trade("Rubro 4.g - Pilas y relojes (CÓDIGO G 016)", "PILAS Y RELOJES", "4", "016"),
    trade("Rubro 5.a - Duplicado de llaves / Cerrajería (CÓDIGO G 017)", "DUPLICADO DE LLAVES Y CERRAJERÍA", "5", "017"),
    trade("Rubro 5.b - Lustradores de calzado (CÓDIGO G 018)", "LUSTRADORES DE CALZADO", "5", "018"),
    trade("Rubro 5.c - Artistas plásticos y retratistas (CÓDIGO G 019)", "ARTISTAS PLÁSTICOS Y RETRATISTAS", "5", "019"),
    trade("Rubro 5.d - Fotografías (CÓDIGO G 020)", "FOTOGRAFÍAS", "5", "020"),
];

const fn trade(
    label: &'static str,
    description: &'static str,
    category: &'static str,
    code: &'static str,
) -> Trade {
    Trade { label, description, category, code }
}

/// Catalog entry whose label matches, ignoring case and surrounding spaces.
pub fn find(label: &str) -> Option<&'static Trade> {
    let wanted = label.trim().to_uppercase();
    if wanted.is_empty() {
        return None;
    }
    TRADES.iter().find(|trade| trade.label.to_uppercase() == wanted)
}

/// Entries whose label appears in a stored (upper-cased) giro text, in catalog order.
pub fn found_in(text: &str) -> Vec<&'static Trade> {
    let text = text.to_uppercase();
    TRADES
        .iter()
        .filter(|trade| text.contains(&trade.label.to_uppercase()))
        .collect()
}

/// Handler for `GET /api/permits/catalog`.
pub async fn process() -> HttpResponse {
    HttpResponse::Ok().json(TRADES)
}
