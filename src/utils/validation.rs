use crate::utils::error::{AppError, Result};
use url::Url;

/// Settings that can be checked before any source is touched.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> AppError {
    AppError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The Places endpoint must be an absolute http(s) URL; tests point it at a local mock.
pub fn endpoint_url(field: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("no es una URL válida ({})", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(
            field,
            endpoint,
            format!("el esquema '{}' no está soportado, usa http o https", other),
        )),
    }
}

pub fn data_path(field: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field, path, "indica la ruta del archivo JSON"));
    }
    if path.contains('\0') {
        return Err(invalid(field, path.escape_default(), "la ruta contiene bytes nulos"));
    }
    Ok(())
}

pub fn at_least(field: &str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(invalid(field, value, format!("debe ser al menos {}", min)));
    }
    Ok(())
}

pub fn not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "no puede estar vacío"));
    }
    Ok(())
}

/// Borrows the value or reports the setting as missing.
pub fn required<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AppError::MissingConfigError {
        field: field.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(result: Result<()>) -> String {
        match result {
            Err(AppError::InvalidConfigValueError { reason, .. }) => reason,
            other => panic!("expected an invalid value, got {:?}", other),
        }
    }

    #[test]
    fn test_endpoint_url() {
        assert!(endpoint_url("places_endpoint", "https://maps.googleapis.com").is_ok());
        assert!(endpoint_url("places_endpoint", "http://127.0.0.1:8080/search").is_ok());
        assert!(endpoint_url("places_endpoint", "").is_err());
        assert!(endpoint_url("places_endpoint", "not a url").is_err());
        assert_eq!(
            reason(endpoint_url("places_endpoint", "ftp://example.com")),
            "el esquema 'ftp' no está soportado, usa http o https"
        );
    }

    #[test]
    fn test_at_least() {
        assert!(at_least("max_results", 20, 1).is_ok());
        assert_eq!(reason(at_least("max_results", 0, 1)), "debe ser al menos 1");
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("service", "limpieza").is_ok());
        assert_eq!(reason(not_blank("service", "   ")), "no puede estar vacío");
    }

    #[test]
    fn test_required() {
        let present = Some("key".to_string());
        let missing: Option<String> = None;
        assert_eq!(required("api_key", &present).unwrap(), "key");
        assert!(matches!(
            required("api_key", &missing),
            Err(AppError::MissingConfigError { field }) if field == "api_key"
        ));
    }

    #[test]
    fn test_data_path() {
        assert!(data_path("data", "./services.json").is_ok());
        assert_eq!(reason(data_path("data", " ")), "indica la ruta del archivo JSON");
        match data_path("data", "bad\0path") {
            Err(AppError::InvalidConfigValueError { value, .. }) => assert_eq!(value, "bad\\0path"),
            other => panic!("expected an invalid value, got {:?}", other),
        }
    }
}
