use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Google Places returned {status}: {message}")]
    PlacesStatusError { status: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ApiError(_) | AppError::PlacesStatusError { .. } => ErrorCategory::Network,
            AppError::SerializationError(_) => ErrorCategory::Data,
            AppError::ConfigError { .. }
            | AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. }
            | AppError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AppError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Short message for the terminal, in the language of the report.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ApiError(_) => "No se pudo contactar con Google Places.".to_string(),
            AppError::PlacesStatusError { message, .. } => {
                format!("Error de la API de Google Places: {}", message)
            }
            AppError::IoError(e) => format!("No se pudo leer el archivo de datos: {}", e),
            AppError::SerializationError(e) => {
                format!("El archivo de datos no tiene un formato JSON válido: {}", e)
            }
            AppError::MissingConfigError { field } => {
                format!("Falta un valor de configuración obligatorio: {}", field)
            }
            other => format!("Configuración no válida: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::ApiError(_) => "Comprueba tu conexión a internet y vuelve a intentarlo.",
            AppError::PlacesStatusError { .. } => {
                "Verifica que la clave de Google Places sea válida y tenga la API habilitada."
            }
            AppError::IoError(_) => {
                "Comprueba que la ruta indicada con --data existe y es legible."
            }
            AppError::SerializationError(_) => {
                "El archivo debe contener una lista JSON de opciones con service, provider, rating y review_count."
            }
            _ => "Revisa los argumentos de la línea de comandos y el archivo de configuración.",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
