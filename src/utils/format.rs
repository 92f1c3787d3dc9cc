use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Timestamps del backend para la tabla: RFC 3339 o `YYYY-MM-DD HH:MM:SS`
/// se formatean, cualquier otra cosa se muestra tal cual.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return "-".to_string();
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
