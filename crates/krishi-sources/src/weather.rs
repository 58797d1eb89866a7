// SPDX-License-Identifier: Apache-2.0

use crate::ports::WeatherSource;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use krishi_core::EngineError;
use krishi_model::{ForecastDay, WeatherReading, MAX_FORECAST_DAYS};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

const DEFAULT_GEOCODE_BASE: &str = "https://geocoding-api.open-meteo.com";
const DEFAULT_FORECAST_BASE: &str = "https://api.open-meteo.com";

/// Open-Meteo-backed weather provider.
///
/// `current` degrades to a default reading when the upstream is unreachable
/// or the location cannot be geocoded, so dashboards keep rendering;
/// `forecast` degrades to an empty sequence.
pub struct OpenMeteoWeather {
    client: reqwest::Client,
    geocode_base: String,
    forecast_base: String,
}

impl OpenMeteoWeather {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_urls(DEFAULT_GEOCODE_BASE, DEFAULT_FORECAST_BASE)
    }

    #[must_use]
    pub fn with_base_urls(geocode_base: &str, forecast_base: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            geocode_base: geocode_base.trim_end_matches('/').to_string(),
            forecast_base: forecast_base.trim_end_matches('/').to_string(),
        }
    }

    async fn geocode(&self, location: &str) -> Result<(f64, f64), EngineError> {
        let url = format!(
            "{}/v1/search?name={}&count=1",
            self.geocode_base,
            urlencode(location)
        );
        let resp: GeocodeResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EngineError::source_unavailable(format!("geocode failed: {e}")))?
            .error_for_status()
            .map_err(|e| EngineError::source_unavailable(format!("geocode failed: {e}")))?
            .json()
            .await
            .map_err(|e| EngineError::source_unavailable(format!("geocode decode failed: {e}")))?;
        let hit = resp
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| {
                EngineError::source_unavailable(format!("location not found: {location}"))
            })?;
        Ok((hit.latitude, hit.longitude))
    }

    async fn fetch_current(&self, lat: f64, lon: f64) -> Result<WeatherReading, EngineError> {
        let url = format!(
            "{}/v1/forecast?latitude={lat}&longitude={lon}\
             &current=temperature_2m,relative_humidity_2m,apparent_temperature,\
             surface_pressure,wind_speed_10m,weather_code",
            self.forecast_base
        );
        let resp: CurrentResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EngineError::source_unavailable(format!("weather fetch failed: {e}")))?
            .error_for_status()
            .map_err(|e| EngineError::source_unavailable(format!("weather fetch failed: {e}")))?
            .json()
            .await
            .map_err(|e| EngineError::source_unavailable(format!("weather decode failed: {e}")))?;
        let current = resp.current;
        let description = describe_weather_code(current.weather_code);
        Ok(WeatherReading {
            temperature_c: current.temperature_2m.round(),
            humidity_pct: current.relative_humidity_2m,
            wind_speed_kmh: current.wind_speed_10m,
            pressure_hpa: current.surface_pressure,
            feels_like_c: current.apparent_temperature.round(),
            advice: generate_advice(
                current.temperature_2m,
                current.relative_humidity_2m,
                description,
            )
            .to_string(),
            description: description.to_string(),
            observed_at: Utc::now(),
        })
    }

    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<Vec<ForecastDay>, EngineError> {
        let url = format!(
            "{}/v1/forecast?latitude={lat}&longitude={lon}\
             &daily=temperature_2m_max,weather_code&forecast_days={MAX_FORECAST_DAYS}",
            self.forecast_base
        );
        let resp: DailyResponse = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EngineError::source_unavailable(format!("forecast fetch failed: {e}")))?
            .error_for_status()
            .map_err(|e| EngineError::source_unavailable(format!("forecast fetch failed: {e}")))?
            .json()
            .await
            .map_err(|e| EngineError::source_unavailable(format!("forecast decode failed: {e}")))?;

        let daily = resp.daily;
        let mut days = Vec::with_capacity(MAX_FORECAST_DAYS);
        for ((date, temp), code) in daily
            .time
            .iter()
            .zip(daily.temperature_2m_max.iter())
            .zip(daily.weather_code.iter())
            .take(MAX_FORECAST_DAYS)
        {
            let Ok(date) = date.parse::<NaiveDate>() else {
                continue;
            };
            days.push(ForecastDay {
                date,
                temp_c: temp.round(),
                description: describe_weather_code(*code).to_string(),
            });
        }
        Ok(days)
    }
}

impl Default for OpenMeteoWeather {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoWeather {
    async fn current(&self, location: &str) -> Result<WeatherReading, EngineError> {
        let result = match self.geocode(location).await {
            Ok((lat, lon)) => self.fetch_current(lat, lon).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(reading) => Ok(reading),
            Err(e) => {
                warn!(%location, error = %e, "weather upstream failed; serving default reading");
                Ok(default_reading())
            }
        }
    }

    async fn forecast(&self, location: &str) -> Vec<ForecastDay> {
        let result = match self.geocode(location).await {
            Ok((lat, lon)) => self.fetch_forecast(lat, lon).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(days) => days,
            Err(e) => {
                warn!(%location, error = %e, "forecast upstream failed; serving empty forecast");
                Vec::new()
            }
        }
    }
}

/// Default reading served when the upstream is unavailable.
#[must_use]
pub fn default_reading() -> WeatherReading {
    WeatherReading {
        temperature_c: 28.0,
        humidity_pct: 65.0,
        wind_speed_kmh: 3.5,
        pressure_hpa: 1013.0,
        feels_like_c: 30.0,
        description: "Clear sky".to_string(),
        advice: "Weather data temporarily unavailable. Using default recommendations."
            .to_string(),
        observed_at: Utc::now(),
    }
}

/// Farming advice rules, keyed on temperature, humidity, and condition.
#[must_use]
pub fn generate_advice(temp_c: f64, humidity_pct: f64, condition: &str) -> &'static str {
    let condition = condition.to_lowercase();
    if temp_c > 35.0 {
        "High temperature alert! Increase irrigation frequency and provide shade for sensitive crops."
    } else if temp_c < 10.0 {
        "Cold weather alert! Protect sensitive crops from frost. Consider mulching."
    } else if humidity_pct > 80.0 {
        "High humidity detected. Monitor crops for fungal diseases. Ensure good air circulation."
    } else if humidity_pct < 30.0 {
        "Low humidity. Increase watering frequency to prevent crop stress."
    } else if condition.contains("rain") {
        "Rain expected. Postpone irrigation and chemical applications. Check drainage systems."
    } else if condition.contains("clear") {
        "Good weather for field activities. Ideal time for spraying and fertilizer application."
    } else {
        "Monitor weather conditions regularly. Adjust farming activities accordingly."
    }
}

/// WMO weather interpretation codes, as reported by Open-Meteo.
#[must_use]
pub fn describe_weather_code(code: u8) -> &'static str {
    match code {
        0 => "clear sky",
        1..=3 => "partly cloudy",
        45 | 48 => "fog",
        51..=57 => "drizzle",
        61..=67 => "rain",
        71..=77 => "snow",
        80..=82 => "rain showers",
        85 | 86 => "snow showers",
        95..=99 => "thunderstorm",
        _ => "overcast",
    }
}

fn urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(ch),
            ' ' => out.push_str("%20"),
            other => {
                let mut buf = [0u8; 4];
                for byte in other.encode_utf8(&mut buf).as_bytes() {
                    out.push_str(&format!("%{byte:02X}"));
                }
            }
        }
    }
    out
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeHit>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeHit {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    surface_pressure: f64,
    wind_speed_10m: f64,
    weather_code: u8,
}

#[derive(Debug, Deserialize)]
struct DailyResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    weather_code: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advice_rules_fire_in_priority_order() {
        assert!(generate_advice(36.0, 50.0, "clear sky").contains("High temperature"));
        assert!(generate_advice(8.0, 50.0, "clear sky").contains("Cold weather"));
        assert!(generate_advice(25.0, 85.0, "clear sky").contains("High humidity"));
        assert!(generate_advice(25.0, 25.0, "clear sky").contains("Low humidity"));
        assert!(generate_advice(25.0, 50.0, "Rain showers").contains("Rain expected"));
        assert!(generate_advice(25.0, 50.0, "clear sky").contains("Good weather"));
        assert!(generate_advice(25.0, 50.0, "fog").contains("Monitor weather"));
    }

    #[test]
    fn rainy_codes_mention_rain() {
        for code in [61, 63, 65, 80, 81, 82] {
            assert!(
                describe_weather_code(code).contains("rain"),
                "code {code} should describe rain"
            );
        }
        assert!(!describe_weather_code(0).contains("rain"));
    }

    #[test]
    fn urlencode_preserves_safe_chars_and_escapes_spaces() {
        assert_eq!(urlencode("Delhi"), "Delhi");
        assert_eq!(urlencode("New Delhi"), "New%20Delhi");
    }
}
