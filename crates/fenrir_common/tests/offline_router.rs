//! Offline router and chat fallback scenarios.

use fenrir_common::chat::{route_message, ChatRoute, OFFLINE_FALLBACK_MESSAGE};
use fenrir_common::offline::{classify, offline_protocol, ProtocolCategory, WATER_PROTOCOL};
use fenrir_common::NetworkQuality;

const EXPECTED_WATER: &str = "[PROTOCOLO OFFLINE - HIDRATACIÓN]
1. NUNCA beber agua sin tratar de fuentes naturales.
2. HERVIR: Llevar a ebullición fuerte al menos 1 minuto (3 min en altura).
3. QUÍMICO: Usar tabletas de Yodo o Cloro si tienes (esperar 30 min).
4. FILTRACIÓN: Usar tela para quitar sedimentos, luego filtrar con equipo o arena.
5. ¿SIN EQUIPO?: Recolectar agua de lluvia o rocío matutino.";

#[test]
fn thirst_message_returns_literal_water_protocol() {
    assert_eq!(offline_protocol("tengo mucha sed y necesito agua"), Some(EXPECTED_WATER));
    assert_eq!(WATER_PROTOCOL, EXPECTED_WATER);
}

#[test]
fn bored_message_has_no_match() {
    assert_eq!(classify("estoy aburrido"), None);
}

#[test]
fn substring_matching_has_no_word_boundaries() {
    // "resfriado" holds "fria", not "frio"
    assert_eq!(classify("tengo un resfriado"), None);
    // every "frio" also holds WATER's "rio"
    assert_eq!(classify("tengo escalofrios"), Some(ProtocolCategory::Water));
    assert_eq!(classify("hace frio"), Some(ProtocolCategory::Water));
}

#[test]
fn water_precedes_fire() {
    assert_eq!(classify("tengo sed y hay fuego"), Some(ProtocolCategory::Water));
}

#[test]
fn classification_is_deterministic() {
    let inputs = [
        "me corté y hay mucha sangre",
        "¿dónde está el norte?",
        "necesito encender fuego",
        "va a nevar, busco refugio",
        "nada relevante",
    ];
    for input in inputs {
        let first = classify(input);
        for _ in 0..10 {
            assert_eq!(classify(input), first, "{}", input);
        }
    }
}

#[test]
fn one_message_per_category() {
    let cases = [
        ("me duele, tengo una herida", ProtocolCategory::Medical),
        ("hay un lago cerca", ProtocolCategory::Water),
        ("busco refugio para dormir", ProtocolCategory::Shelter),
        ("necesito un mechero", ProtocolCategory::Fire),
        ("estoy perdido sin mapa", ProtocolCategory::Navigation),
    ];
    for (text, expected) in cases {
        assert_eq!(classify(text), Some(expected), "{}", text);
        assert_eq!(offline_protocol(text), Some(expected.protocol()));
    }
}

#[test]
fn chat_policy_end_to_end() {
    let offline = NetworkQuality::from_downlink(None, false);

    match route_message(offline, "estoy perdido") {
        ChatRoute::Offline { category, reply } => {
            assert_eq!(category, Some(ProtocolCategory::Navigation));
            assert!(reply.starts_with("[PROTOCOLO OFFLINE - NAVEGACIÓN]"));
        }
        other => panic!("unexpected {:?}", other),
    }

    assert_eq!(
        route_message(offline, "hola").reply(),
        Some(OFFLINE_FALLBACK_MESSAGE)
    );

    let online = NetworkQuality::from_downlink(Some(1.0), true);
    assert_eq!(route_message(online, "estoy perdido"), ChatRoute::Remote);
}
