//! Weather-based survival tips.
//!
//! Deterministic fallback used when the forecast service returns conditions
//! but no advice. Selection is seeded by the caller.

use serde::{Deserialize, Serialize};

/// Temperature assumed when the reading is missing, unparsable or zero
const DEFAULT_TEMP_C: i64 = 20;
const HOT_ABOVE_C: i64 = 28;
const COLD_BELOW_C: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeatherCategory {
    Rain,
    Heat,
    Cold,
    General,
}

impl WeatherCategory {
    /// Precipitation wins over temperature; heat is checked before cold
    pub fn classify(temp: &str, condition: &str) -> Self {
        let temp = match leading_int(temp) {
            Some(t) if t != 0 => t,
            _ => DEFAULT_TEMP_C,
        };
        let cond = condition.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| cond.contains(n));

        if has(&["lluvi", "tormenta", "nieve", "rain"]) {
            WeatherCategory::Rain
        } else if temp > HOT_ABOVE_C || has(&["sol", "calor", "sun"]) {
            WeatherCategory::Heat
        } else if temp < COLD_BELOW_C || has(&["frio", "helada", "cold"]) {
            WeatherCategory::Cold
        } else {
            WeatherCategory::General
        }
    }

    pub fn tips(&self) -> &'static [&'static str; 4] {
        match self {
            WeatherCategory::Rain => &RAIN_TIPS,
            WeatherCategory::Heat => &HEAT_TIPS,
            WeatherCategory::Cold => &COLD_TIPS,
            WeatherCategory::General => &GENERAL_TIPS,
        }
    }
}

static RAIN_TIPS: [&str; 4] = [
    "Lluvia inminente: Impermeabiliza el refugio y recolecta agua potable.",
    "Suelo mojado: Aísla tu cama del suelo para evitar la pérdida de calor.",
    "Visibilidad reducida: Mantén la posición y asegura el perímetro.",
    "Riesgo de hipotermia por humedad: Mantén la ropa seca a toda costa.",
];

static HEAT_TIPS: [&str; 4] = [
    "Calor extremo: Limita el movimiento a las horas nocturnas o amanecer.",
    "Riesgo de deshidratación: Bebe agua a sorbos pequeños y constantes.",
    "Busca sombra densa y cubre tu cabeza y cuello del sol directo.",
    "No comas en exceso durante el día para reducir el calor metabólico.",
];

static COLD_TIPS: [&str; 4] = [
    "Bajas temperaturas: Mantén el fuego encendido y pequeño para no llamar la atención.",
    "Hipotermia: Prioriza refugio seco, pequeño y aislado del viento.",
    "Come alimentos grasos o dulces antes de dormir para generar calor corporal.",
    "No duermas directamente sobre el suelo frío.",
];

static GENERAL_TIPS: [&str; 4] = [
    "Mantén la calma. La mente es tu mejor herramienta de supervivencia.",
    "Asegura tu perímetro y recolecta leña antes de que anochezca.",
    "Identifica rutas de escape en tu campamento siempre.",
    "Regla de 3: 3 min sin aire, 3 días sin agua, 3 semanas sin comida.",
];

/// Category of the reading and the tip picked from it
pub fn weather_tip(temp: &str, condition: &str, seed: u64) -> (WeatherCategory, &'static str) {
    let category = WeatherCategory::classify(temp, condition);
    let tips = category.tips();
    (category, tips[(seed % tips.len() as u64) as usize])
}

/// Leading integer of a reading like " 31°C" or "-4 C".
/// Readings too large for i64 saturate instead of failing.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let mut digits = rest.bytes().take_while(u8::is_ascii_digit).peekable();
    digits.peek()?;
    let magnitude = digits.fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(sign * magnitude)
}
