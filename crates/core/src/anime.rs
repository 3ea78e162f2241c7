//! Anime domain constants and id-parameter parsing.
//!
//! The message strings are part of the HTTP contract and must match byte for
//! byte.

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in [`CoreError::NotFound`].
pub const ENTITY: &str = "Anime";

/// Body message for a successful update.
pub const MSG_UPDATED: &str = "Anime actualizado exitosamente.";

/// Body message for a successful delete.
pub const MSG_DELETED: &str = "Anime eliminado exitosamente.";

/// Body message when an update or delete matched no row.
pub const MSG_NOT_FOUND: &str = "Anime no encontrado.";

/// Body message when the `id` query parameter is absent.
pub const MSG_MISSING_ID: &str = "ID de anime no proporcionado.";

/// Body message when the `id` query parameter is not an integer.
pub const MSG_INVALID_ID: &str = "ID de anime inválido.";

/// Parse a required `id` query parameter.
///
/// The raw value is taken as-is: surrounding whitespace makes it invalid.
pub fn parse_anime_id(raw: Option<&str>) -> Result<DbId, CoreError> {
    let raw = raw.ok_or(CoreError::MissingId)?;
    raw.parse::<DbId>()
        .map_err(|_| CoreError::InvalidId(raw.to_string()))
}

/// Parse an optional `id` query parameter. `None` means "no filter".
pub fn parse_optional_anime_id(raw: Option<&str>) -> Result<Option<DbId>, CoreError> {
    raw.map(|value| parse_anime_id(Some(value))).transpose()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_anime_id(Some("42")).unwrap(), 42);
    }

    #[test]
    fn accepts_explicit_sign() {
        assert_eq!(parse_anime_id(Some("+7")).unwrap(), 7);
        assert_eq!(parse_anime_id(Some("-3")).unwrap(), -3);
    }

    #[test]
    fn missing_value_is_missing_id() {
        assert_matches!(parse_anime_id(None), Err(CoreError::MissingId));
    }

    #[test]
    fn non_numeric_value_is_invalid() {
        assert_matches!(
            parse_anime_id(Some("abc")),
            Err(CoreError::InvalidId(raw)) if raw == "abc"
        );
    }

    #[test]
    fn empty_and_padded_values_are_invalid() {
        assert_matches!(parse_anime_id(Some("")), Err(CoreError::InvalidId(_)));
        assert_matches!(parse_anime_id(Some(" 5")), Err(CoreError::InvalidId(_)));
        assert_matches!(parse_anime_id(Some("5.0")), Err(CoreError::InvalidId(_)));
    }

    #[test]
    fn optional_absent_means_no_filter() {
        assert_eq!(parse_optional_anime_id(None).unwrap(), None);
        assert_eq!(parse_optional_anime_id(Some("9")).unwrap(), Some(9));
        assert_matches!(
            parse_optional_anime_id(Some("x")),
            Err(CoreError::InvalidId(_))
        );
    }
}
