//! Offline keyword router.
//!
//! Maps a free-text chat message to one of five fixed survival protocols
//! when the remote assistant is unreachable.
//!
//! Lexical policy: the message is lower-cased and each category is tested in
//! `ProtocolCategory::ALL` order; the first category with ANY keyword
//! contained as a plain substring wins. There are no word boundaries, so
//! "sed" matches inside "used" and any "frio" lands on WATER through "rio".

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Offline guidance topic. Declaration order is match precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProtocolCategory {
    Medical,
    Water,
    Shelter,
    Fire,
    Navigation,
}

impl ProtocolCategory {
    /// All categories in precedence order
    pub const ALL: [ProtocolCategory; 5] = [
        ProtocolCategory::Medical,
        ProtocolCategory::Water,
        ProtocolCategory::Shelter,
        ProtocolCategory::Fire,
        ProtocolCategory::Navigation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProtocolCategory::Medical => "MEDICAL",
            ProtocolCategory::Water => "WATER",
            ProtocolCategory::Shelter => "SHELTER",
            ProtocolCategory::Fire => "FIRE",
            ProtocolCategory::Navigation => "NAVIGATION",
        }
    }

    /// Lower-case trigger substrings (Spanish and English)
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ProtocolCategory::Medical => &[
                "sangre", "herida", "sangrado", "roto", "fractura", "quemadura", "dolor",
                "botiquin", "medico", "bleed", "wound", "pain", "burn",
            ],
            ProtocolCategory::Water => &[
                "agua", "sed", "hidratacion", "rio", "lago", "purificar", "hervir", "filtro",
                "water", "thirst",
            ],
            ProtocolCategory::Shelter => &[
                "frio", "calor", "refugio", "dormir", "lluvia", "nieve", "shelter", "cold", "rain",
            ],
            ProtocolCategory::Fire => &["fuego", "leña", "encender", "mechero", "fire", "wood"],
            ProtocolCategory::Navigation => {
                &["perdido", "norte", "mapa", "brujula", "donde", "lost", "north"]
            }
        }
    }

    /// Canned multi-step protocol text
    pub fn protocol(&self) -> &'static str {
        match self {
            ProtocolCategory::Medical => MEDICAL_PROTOCOL,
            ProtocolCategory::Water => WATER_PROTOCOL,
            ProtocolCategory::Shelter => SHELTER_PROTOCOL,
            ProtocolCategory::Fire => FIRE_PROTOCOL,
            ProtocolCategory::Navigation => NAVIGATION_PROTOCOL,
        }
    }

    /// Keyword of this category found in an already lower-cased message
    fn first_hit(&self, lower: &str) -> Option<&'static str> {
        self.keywords().iter().copied().find(|k| lower.contains(k))
    }
}

impl fmt::Display for ProtocolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const MEDICAL_PROTOCOL: &str = "[PROTOCOLO OFFLINE - MÉDICO]
1. DETENER HEMORRAGIA: Presión directa con tela estéril. Elevar extremidad. Usar torniquete SOLO si hay peligro de muerte.
2. FRACTURAS: Inmovilizar articulación por encima y debajo. No realinear el hueso.
3. QUEMADURAS: Enfriar con agua (no hielo) 10 min. Cubrir con tela limpia que no se pegue.
4. SHOCK: Tumbar boca arriba, elevar pies. Mantener caliente. No dar líquidos.";

pub const WATER_PROTOCOL: &str = "[PROTOCOLO OFFLINE - HIDRATACIÓN]
1. NUNCA beber agua sin tratar de fuentes naturales.
2. HERVIR: Llevar a ebullición fuerte al menos 1 minuto (3 min en altura).
3. QUÍMICO: Usar tabletas de Yodo o Cloro si tienes (esperar 30 min).
4. FILTRACIÓN: Usar tela para quitar sedimentos, luego filtrar con equipo o arena.
5. ¿SIN EQUIPO?: Recolectar agua de lluvia o rocío matutino.";

pub const SHELTER_PROTOCOL: &str = "[PROTOCOLO OFFLINE - REFUGIO]
1. UBICACIÓN: Terreno elevado, lejos de viento y cauces de agua.
2. AISLAMIENTO: El suelo roba calor. Haz una cama de hojas/hierba (30cm grosor).
3. ESTRUCTURA: Usa un marco en \"A\" con una viga resistente. Cubre con lona o escombros.
4. CALOR: Fuego pequeño cerca de la entrada con pared reflectora detrás.";

pub const FIRE_PROTOCOL: &str = "[PROTOCOLO OFFLINE - FUEGO]
1. TRIÁNGULO: Oxígeno, Combustible, Calor.
2. YESCA: Hierba seca, corteza, algodón, pelusa. Debe estar 100% seca.
3. RAMITAS: Ramas muy finas para iniciar.
4. COMBUSTIBLE: Troncos más grandes.
5. ESTRUCTURA: Tipo \"Tipi\" o \"Cabaña\" para permitir flujo de aire.";

pub const NAVIGATION_PROTOCOL: &str = "[PROTOCOLO OFFLINE - NAVEGACIÓN]
1. PARAR: Siéntate, Piensa, Observa, Planifica.
2. SOL: Sale por el Este, se pone por el Oeste. Al mediodía está al Sur (Hemisferio N).
3. REFERENCIAS: Busca puntos altos. Sigue el agua corriente abajo (suele llevar a civilización).
4. BRÚJULA: Usa la brújula digital del módulo de Localización.";

/// First category whose keywords occur in `text`, or `None`
pub fn classify(text: &str) -> Option<ProtocolCategory> {
    let lower = text.to_lowercase();

    for category in ProtocolCategory::ALL {
        if let Some(keyword) = category.first_hit(&lower) {
            debug!("Offline router: {} (keyword '{}')", category, keyword);
            return Some(category);
        }
    }

    debug!("Offline router: no protocol matched");
    None
}

/// Protocol text for `text`, or `None` when no category applies
pub fn offline_protocol(text: &str) -> Option<&'static str> {
    classify(text).map(|c| c.protocol())
}
