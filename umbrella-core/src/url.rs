use crate::error::{Result, UmbrellaError};

/// Five day / three hour forecast endpoint, up to and including `?q=`.
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/forecast?q=";

/// Build the forecast query URL against the public OpenWeather endpoint.
///
/// See [`build_url_with_base`] for the validation rules.
pub fn build_url(city: &str, country: &str, api_key: &str) -> Result<String> {
    build_url_with_base(DEFAULT_BASE_URL, city, country, api_key)
}

/// Build the forecast query URL as `<base><city>,<country>&APPID=<key>`.
///
/// * the city is trimmed and every inner run of whitespace becomes `+`
/// * the country must be a two letter code without whitespace; it is lowercased
/// * the key is passed through as is, but must not be blank
pub fn build_url_with_base(base: &str, city: &str, country: &str, api_key: &str) -> Result<String> {
    let city = normalize_city(city)?;
    let country = normalize_country(country)?;

    if api_key.trim().is_empty() {
        return Err(UmbrellaError::InvalidArgument("API key must not be empty".to_string()));
    }

    Ok(format!("{base}{city},{country}&APPID={api_key}"))
}

pub fn normalize_city(city: &str) -> Result<String> {
    let parts: Vec<&str> = city.split_whitespace().collect();
    if parts.is_empty() {
        return Err(UmbrellaError::InvalidArgument("city name must not be empty".to_string()));
    }
    Ok(parts.join("+"))
}

pub fn normalize_country(country: &str) -> Result<String> {
    if country.chars().count() != 2 || country.chars().any(char::is_whitespace) {
        return Err(UmbrellaError::InvalidArgument(format!(
            "country must be a valid postal abbreviation, got '{country}'"
        )));
    }
    Ok(country.to_lowercase())
}
