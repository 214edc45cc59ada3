//! Plain-text rendering of a comparison.

use crate::core::engine::Comparison;
use crate::core::ranking::Summary;
use crate::domain::model::ServiceOption;
use crate::domain::ports::SourceKind;

const CURRENCY_SYMBOLS: [(&str, &str); 4] =
    [("EUR", "€"), ("USD", "$"), ("MXN", "$"), ("COP", "$")];

pub const MISSING_API_KEY_MESSAGE: &str =
    "Debes proporcionar una clave de Google Places mediante --api-key o la variable GOOGLE_MAPS_API_KEY.";
pub const NO_OPTIONS_MESSAGE: &str = "No se encontraron opciones para este servicio.";
pub const NO_PLACES_RESULTS_MESSAGE: &str =
    "Google Places no devolvió resultados para esa búsqueda. Prueba con otro término o ubicación.";

/// Two decimals with `.` as both the thousands and the decimal separator.
fn format_amount(price: f64) -> String {
    let formatted = format!("{:.2}", price);
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, decimals) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, decimals)
}

pub fn format_currency(price: f64, currency: Option<&str>) -> String {
    let amount = format_amount(price);
    let Some(currency) = currency.filter(|c| !c.is_empty()) else {
        return amount;
    };

    let code = currency.to_uppercase();
    let symbol = CURRENCY_SYMBOLS
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, symbol)| symbol.to_string())
        .unwrap_or(code);
    format!("{} {}", amount, symbol)
}

pub fn describe_price(option: &ServiceOption) -> Option<String> {
    let base = format_currency(option.price()?, option.currency());
    match option.pricing_unit().filter(|unit| !unit.is_empty()) {
        Some(unit) => Some(format!("{} {}", base, unit)),
        None => Some(base),
    }
}

pub fn render_service_summary(options: &[ServiceOption]) -> String {
    if options.is_empty() {
        return NO_OPTIONS_MESSAGE.to_string();
    }

    let summary = Summary::of(options);
    let mut lines = vec!["Resumen rápido:".to_string()];

    if let Some(best) = summary.best_rated {
        let price_part = describe_price(best)
            .map(|price| format!(" por {}", price))
            .unwrap_or_default();
        lines.push(format!(
            "  ⭐ Mejor valorado: {} - {:.1} ⭐ ({} reseñas){}",
            best.provider(),
            best.rating(),
            best.review_count(),
            price_part
        ));
    }
    if let Some(cheap) = summary.cheapest {
        let price_part = describe_price(cheap)
            .map(|price| format!(" - {}", price))
            .unwrap_or_default();
        lines.push(format!(
            "  💰 Más económico: {}{} con {:.1} ⭐",
            cheap.provider(),
            price_part,
            cheap.rating()
        ));
    }
    if let Some(value) = summary.best_value {
        let price_part = describe_price(value)
            .map(|price| format!(" por {}", price))
            .unwrap_or_default();
        lines.push(format!(
            "  ⚖️ Mejor relación calidad-precio: {} - {:.1} ⭐{}",
            value.provider(),
            value.rating(),
            price_part
        ));
    }

    lines.join("\n")
}

/// Numbered ranking; `None` or `Some(0)` shows every option.
pub fn render_ranking(options: &[ServiceOption], limit: Option<usize>) -> String {
    if options.is_empty() {
        return String::new();
    }

    let shown = match limit {
        Some(limit) if limit > 0 => &options[..limit.min(options.len())],
        _ => options,
    };

    let mut lines = vec!["\nRanking detallado:".to_string()];
    for (index, option) in shown.iter().enumerate() {
        let price_text =
            describe_price(option).unwrap_or_else(|| "Precio no disponible".to_string());
        lines.push(format!(
            "  {}. {}: {:.1} ⭐ ({} reseñas) - {}",
            index + 1,
            option.provider(),
            option.rating(),
            option.review_count(),
            price_text
        ));
        if let Some(notes) = option.notes().filter(|n| !n.is_empty()) {
            lines.push(format!("     Nota: {}", notes));
        }
        if let Some(link) = option.link().filter(|l| !l.is_empty()) {
            lines.push(format!("     Ficha: {}", link));
        }
    }

    lines.join("\n")
}

fn render_not_found(kind: SourceKind, available: &[String]) -> String {
    let mut message = match kind {
        SourceKind::Sample => {
            "No encontramos opciones para ese servicio en los datos de ejemplo.".to_string()
        }
        _ => "No encontramos opciones para ese servicio.".to_string(),
    };
    if !available.is_empty() {
        message.push_str(&format!(" Servicios disponibles: {}.", available.join(", ")));
    }
    message
}

/// Everything printed to stdout for one comparison, newline terminated.
pub fn render_comparison(comparison: &Comparison, top: usize) -> String {
    match comparison {
        Comparison::Found {
            service_name,
            options,
        } => format!(
            "Comparativa para: {}\n\n{}\n{}\n",
            service_name,
            render_service_summary(options),
            render_ranking(options, Some(top))
        ),
        Comparison::NotFound { kind, available } => {
            format!("{}\n", render_not_found(*kind, available))
        }
        Comparison::NoResults => format!("{}\n", NO_PLACES_RESULTS_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(provider: &str, rating: f64, reviews: i64, price: f64) -> ServiceOption {
        ServiceOption::new("limpieza", provider, rating, reviews)
            .with_price(Some(price))
            .with_currency(Some("EUR".to_string()))
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(15.0, Some("EUR")), "15.00 €");
        assert_eq!(format_currency(1234.5, Some("usd")), "1.234.50 $");
        assert_eq!(format_currency(1234567.891, None), "1.234.567.89");
        assert_eq!(format_currency(40.0, Some("GBP")), "40.00 GBP");
        assert_eq!(format_currency(999.999, Some("")), "1.000.00");
        assert_eq!(format_currency(-1500.0, Some("COP")), "-1.500.00 $");
    }

    #[test]
    fn test_describe_price() {
        let option = priced("A", 4.0, 1, 18.0).with_pricing_unit(Some("por hora".to_string()));
        assert_eq!(describe_price(&option).as_deref(), Some("18.00 € por hora"));

        let unpriced = ServiceOption::new("limpieza", "B", 4.0, 1);
        assert_eq!(describe_price(&unpriced), None);
    }

    #[test]
    fn test_render_summary() {
        let options = vec![priced("A", 4.5, 10, 20.0), priced("B", 4.5, 50, 15.0)];
        assert_eq!(
            render_service_summary(&options),
            "Resumen rápido:\n\
             \x20 ⭐ Mejor valorado: B - 4.5 ⭐ (50 reseñas) por 15.00 €\n\
             \x20 💰 Más económico: B - 15.00 € con 4.5 ⭐\n\
             \x20 ⚖️ Mejor relación calidad-precio: B - 4.5 ⭐ por 15.00 €"
        );
    }

    #[test]
    fn test_render_summary_without_prices() {
        let options = vec![ServiceOption::new("limpieza", "Solo", 5.0, 1)];
        assert_eq!(
            render_service_summary(&options),
            "Resumen rápido:\n\
             \x20 ⭐ Mejor valorado: Solo - 5.0 ⭐ (1 reseñas)\n\
             \x20 ⚖️ Mejor relación calidad-precio: Solo - 5.0 ⭐"
        );
    }

    #[test]
    fn test_render_summary_empty() {
        assert_eq!(render_service_summary(&[]), NO_OPTIONS_MESSAGE);
    }

    #[test]
    fn test_render_ranking_with_limit_and_details() {
        let options = vec![
            priced("A", 4.8, 30, 20.0)
                .with_notes(Some("Urgencias".to_string()))
                .with_link(Some("https://example.com/a".to_string())),
            ServiceOption::new("limpieza", "B", 4.1, 3),
            priced("C", 3.0, 1, 9.0),
        ];

        assert_eq!(
            render_ranking(&options, Some(2)),
            "\nRanking detallado:\n\
             \x20 1. A: 4.8 ⭐ (30 reseñas) - 20.00 €\n\
             \x20    Nota: Urgencias\n\
             \x20    Ficha: https://example.com/a\n\
             \x20 2. B: 4.1 ⭐ (3 reseñas) - Precio no disponible"
        );
    }

    #[test]
    fn test_render_ranking_zero_limit_shows_all() {
        let options = vec![priced("A", 4.0, 1, 1.0), priced("B", 3.0, 1, 1.0)];
        assert!(render_ranking(&options, Some(0)).contains("2. B"));
        assert!(render_ranking(&options, None).contains("2. B"));
        assert_eq!(render_ranking(&[], Some(5)), "");
    }

    #[test]
    fn test_render_not_found_messages() {
        let available = vec!["limpieza".to_string(), "mudanzas".to_string()];
        assert_eq!(
            render_comparison(
                &Comparison::NotFound {
                    kind: SourceKind::Sample,
                    available: available.clone(),
                },
                5
            ),
            "No encontramos opciones para ese servicio en los datos de ejemplo. Servicios disponibles: limpieza, mudanzas.\n"
        );
        assert_eq!(
            render_comparison(
                &Comparison::NotFound {
                    kind: SourceKind::LocalFile,
                    available: Vec::new(),
                },
                5
            ),
            "No encontramos opciones para ese servicio.\n"
        );
    }

    #[test]
    fn test_render_found_layout() {
        let comparison = Comparison::Found {
            service_name: "limpieza".to_string(),
            options: vec![priced("A", 4.0, 2, 10.0)],
        };
        let text = render_comparison(&comparison, 5);

        assert!(text.starts_with("Comparativa para: limpieza\n\nResumen rápido:\n"));
        assert!(text.contains("\n\nRanking detallado:\n  1. A: 4.0 ⭐ (2 reseñas) - 10.00 €"));
        assert!(text.ends_with('\n'));
    }
}
