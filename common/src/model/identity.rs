use serde::{Deserialize, Serialize};

/// Kind of identifier an applicant can present, inferred from its digit count.
///
/// - `Dni`: 8 digits, national identity document.
/// - `Ce`: 9 digits, carné de extranjería.
/// - `Ruc`: 11 digits, tax registration number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdKind {
    Dni,
    Ce,
    Ruc,
}

impl IdKind {
    /// Classifies a raw identifier. Surrounding whitespace is ignored; anything
    /// that is not all ASCII digits of length 8, 9 or 11 yields `None`.
    pub fn classify(raw: &str) -> Option<IdKind> {
        let id = raw.trim();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match id.len() {
            8 => Some(IdKind::Dni),
            9 => Some(IdKind::Ce),
            11 => Some(IdKind::Ruc),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IdKind::Dni => "DNI",
            IdKind::Ce => "CE",
            IdKind::Ruc => "RUC",
        }
    }

    /// DNI and CE identify people; RUC identifies taxpayers.
    pub fn is_person(self) -> bool {
        matches!(self, IdKind::Dni | IdKind::Ce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_digit_count() {
        assert_eq!(IdKind::classify("12345678"), Some(IdKind::Dni));
        assert_eq!(IdKind::classify("123456789"), Some(IdKind::Ce));
        assert_eq!(IdKind::classify("20123456789"), Some(IdKind::Ruc));
        assert_eq!(IdKind::classify("  12345678 "), Some(IdKind::Dni));
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(IdKind::classify(""), None);
        assert_eq!(IdKind::classify("1234567"), None);
        assert_eq!(IdKind::classify("1234567890"), None);
        assert_eq!(IdKind::classify("1234567a"), None);
        assert_eq!(IdKind::classify("１２３４５６７８"), None);
    }

    #[test]
    fn serializes_as_uppercase_label() {
        let json = serde_json::to_string(&IdKind::Ruc).unwrap();
        assert_eq!(json, "\"RUC\"");
    }
}
