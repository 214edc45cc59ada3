use crate::config::toml_config::TomlConfig;
use crate::config::{PlacesSettings, Settings, SourceSelection, DEFAULT_TOP};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "appinion")]
#[command(
    about = "Compara proveedores con base en reseñas y precios para encontrar la mejor opción."
)]
pub struct CliConfig {
    /// Servicio que quieres evaluar (por ejemplo, 'limpieza', 'mudanzas', 'fontanero').
    pub service: String,

    /// Ruta alternativa al archivo JSON con los datos de proveedores.
    #[arg(long)]
    pub data: Option<String>,

    /// Utiliza los datos de ejemplo empaquetados en lugar de la API de Google.
    #[arg(long)]
    pub use_sample: bool,

    /// Clave de Google Places.
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Ciudad o zona donde quieres buscar el servicio (por ejemplo, 'Madrid, España').
    #[arg(long)]
    pub location: Option<String>,

    /// Idioma para la respuesta de Google Places (por defecto 'es').
    #[arg(long)]
    pub language: Option<String>,

    /// Número máximo de resultados a solicitar a Google Places (por defecto 20).
    #[arg(long)]
    pub max_results: Option<usize>,

    /// Moneda a utilizar para la estimación de precios (por defecto EUR).
    #[arg(long)]
    pub currency: Option<String>,

    /// Número de resultados a mostrar en el ranking (por defecto 5, 0 muestra todos).
    #[arg(long)]
    pub top: Option<usize>,

    /// Archivo TOML con valores por defecto.
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, hide = true)]
    pub places_endpoint: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

// An empty key or location counts as not given.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl CliConfig {
    /// Merges flags over the optional config file and built-in defaults.
    pub fn into_settings(self, file: Option<TomlConfig>) -> Settings {
        let file = file.unwrap_or_default();
        let from_file = file.places();
        let defaults = PlacesSettings::default();

        let source = match (self.data, self.use_sample) {
            (Some(path), _) => SourceSelection::LocalFile(path),
            (None, true) => SourceSelection::Sample,
            (None, false) => SourceSelection::Places,
        };

        let places = PlacesSettings {
            endpoint: self
                .places_endpoint
                .or(from_file.endpoint)
                .unwrap_or(defaults.endpoint),
            api_key: non_blank(self.api_key).or(non_blank(from_file.api_key)),
            location: non_blank(self.location).or(non_blank(from_file.location)),
            language: self
                .language
                .or(from_file.language)
                .unwrap_or(defaults.language),
            max_results: self
                .max_results
                .or(from_file.max_results)
                .unwrap_or(defaults.max_results),
            currency: self
                .currency
                .or(from_file.currency)
                .unwrap_or(defaults.currency),
            page_delay: from_file
                .page_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.page_delay),
        };

        Settings {
            service: self.service,
            source,
            places,
            top: self.top.or(file.top()).unwrap_or(DEFAULT_TOP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["appinion"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_without_config_file() {
        let settings = parse(&["limpieza", "--use-sample"]).into_settings(None);

        assert_eq!(settings.service, "limpieza");
        assert_eq!(settings.source, SourceSelection::Sample);
        assert_eq!(settings.top, 5);
        assert_eq!(settings.places.language, "es");
        assert_eq!(settings.places.currency, "EUR");
        assert_eq!(settings.places.max_results, 20);
    }

    #[test]
    fn test_data_takes_precedence_over_sample() {
        let settings =
            parse(&["mudanzas", "--data", "datos.json", "--use-sample"]).into_settings(None);
        assert_eq!(
            settings.source,
            SourceSelection::LocalFile("datos.json".to_string())
        );
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[places]
api_key = "file-key"
location = "Bilbao"
max_results = 40
page_delay_ms = 0

[output]
top = 10
"#,
        )
        .unwrap();

        let settings = parse(&[
            "fontanero",
            "--api-key",
            "flag-key",
            "--top",
            "2",
        ])
        .into_settings(Some(file));

        assert_eq!(settings.source, SourceSelection::Places);
        assert_eq!(settings.places.api_key.as_deref(), Some("flag-key"));
        assert_eq!(settings.places.location.as_deref(), Some("Bilbao"));
        assert_eq!(settings.places.max_results, 40);
        assert_eq!(settings.places.page_delay, Duration::ZERO);
        assert_eq!(settings.top, 2);
    }

    #[test]
    fn test_blank_api_key_and_location_are_absent() {
        let file = TomlConfig::from_toml_str(
            r#"
[places]
api_key = ""
"#,
        )
        .unwrap();

        let settings = parse(&["fontanero", "--api-key", "", "--location", "  "])
            .into_settings(Some(file));

        assert_eq!(settings.places.api_key, None);
        assert_eq!(settings.places.location, None);
        assert!(matches!(
            settings.places_config(),
            Err(crate::utils::error::AppError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_blank_flag_falls_back_to_config_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[places]
api_key = "file-key"
location = "Bilbao"
"#,
        )
        .unwrap();

        let settings = parse(&["fontanero", "--api-key", "", "--location", ""])
            .into_settings(Some(file));

        assert_eq!(settings.places.api_key.as_deref(), Some("file-key"));
        assert_eq!(settings.places.location.as_deref(), Some("Bilbao"));
    }

    #[test]
    fn test_service_is_required() {
        assert!(CliConfig::try_parse_from(["appinion"]).is_err());
    }
}
