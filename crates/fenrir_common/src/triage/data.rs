//! Built-in first-aid triage content (TCCC / Red Cross field protocols).
//!
//! Branches are grouped by the ROOT option that opens them.

use super::node::{DecisionNode, OptionStyle, Severity, TriageOption};

use OptionStyle::{Danger, Neutral, Safe};
use Severity::{Critical, Info, Warning};

fn opt(label: &str, next_id: &str, style: OptionStyle) -> TriageOption {
    TriageOption::new(label, next_id, style)
}

/// All nodes in definition order, ROOT first
pub fn medical_nodes() -> Vec<DecisionNode> {
    let mut nodes = vec![
        DecisionNode::branch(
            "ROOT",
            "EVALUACIÓN PRIMARIA: ¿Cuál es la situación más evidente?",
            vec![
                opt("No estoy seguro / Evaluación General", "PRIMARY_SURVEY", Neutral),
                opt("Sangrado Masivo / Trauma", "BLEEDING_CHECK", Danger),
                opt("Inconsciente / No Respira", "AIRWAY_CHECK", Danger),
                opt("Quemaduras (Fuego/Química)", "BURN_CHECK", Danger),
                opt("Huesos Rotos / Golpe Cabeza", "TRAUMA_CHECK", Neutral),
                opt("Reacción Alérgica / Hinchazón", "ALLERGY_CHECK", Danger),
                opt("Clima (Frío/Calor Extremo)", "ENV_CHECK", Neutral),
                opt("Picadura / Veneno", "TOXIN_CHECK", Neutral),
            ],
        ),
        DecisionNode::leaf(
            "PRIMARY_SURVEY",
            "Protocolo de Evaluación General (XABCDE)",
            "REGLA X-A-B-C",
            Warning,
            "Sigue este orden estricto:\n1. X (Exsanguination): Busca y para sangrados masivos primero.\n2. A (Airway): ¿Vía aérea abierta? (Háblale).\n3. B (Breathing): ¿Respira? (Mira el pecho).\n4. C (Circulation): ¿Tiene pulso?\n5. D (Disability): ¿Se mueve o habla?",
            "CHEQUEAR X-A-B-C",
        ),
    ];

    nodes.extend(bleeding_branch());
    nodes.extend(burn_branch());
    nodes.extend(trauma_branch());
    nodes.extend(allergy_branch());
    nodes.extend(airway_branch());
    nodes.extend(environment_branch());
    nodes.extend(toxin_branch());
    nodes
}

// MARCH: massive hemorrhage first
fn bleeding_branch() -> Vec<DecisionNode> {
    vec![
        DecisionNode::branch(
            "BLEEDING_CHECK",
            "¿El sangrado es en una extremidad y sale a chorros?",
            vec![
                opt("Desconocido / No distingo", "PRESSURE_APPLY", Neutral),
                opt("SÍ, rojo brillante/pulsátil", "TOURNIQUET_APPLY", Danger),
                opt("NO, es continuo/oscuro", "PRESSURE_APPLY", Neutral),
                opt("Es en el Torso/Cuello/Ingle", "PACKING_CHECK", Danger),
            ],
        ),
        DecisionNode::leaf(
            "TOURNIQUET_APPLY",
            "Arteria comprometida.",
            "APLICAR TORNIQUETE",
            Critical,
            "1. Coloca el torniquete 5-7 cm POR ENCIMA de la herida (nunca en articulación).\n2. Aprieta hasta que el sangrado PARE totalmente.\n3. Escribe la hora en la frente.\n4. NO lo aflojes.",
            "APLICAR AHORA",
        ),
        DecisionNode::leaf(
            "PRESSURE_APPLY",
            "Sangrado controlable.",
            "PRESIÓN DIRECTA",
            Warning,
            "1. Aplica presión fuerte sobre la herida con tela limpia.\n2. Mantén 10 min sin levantar.\n3. Venda compresivo.\n4. Eleva la extremidad si es posible.",
            "PRESIONAR",
        ),
        DecisionNode::branch(
            "PACKING_CHECK",
            "¿Herida en zona de unión (cuello, axila, ingle)?",
            vec![
                opt("Desconocido", "WOUND_PACKING", Neutral),
                opt("SÍ (Unión)", "WOUND_PACKING", Danger),
                opt("Es en el Pecho/Espalda", "CHEST_SEAL", Danger),
            ],
        ),
        DecisionNode::leaf(
            "WOUND_PACKING",
            "Empaquetamiento.",
            "EMPAQUETAR HERIDA",
            Critical,
            "1. Mete gasa/tela DENTRO del agujero hasta tocar hueso.\n2. Rellena a tope.\n3. Presiona encima con fuerza (3-10 min).\n4. NO empaquetar en pecho ni abdomen.",
            "RELLENAR HERIDA",
        ),
        DecisionNode::leaf(
            "CHEST_SEAL",
            "Neumotórax.",
            "SELLO TORÁCICO",
            Critical,
            "1. Tapa el agujero con plástico al exhalar.\n2. Pega 3 lados (deja 1 libre para salida de aire).\n3. Busca herida de salida en espalda.",
            "SELLAR TÓRAX",
        ),
    ]
}

fn burn_branch() -> Vec<DecisionNode> {
    vec![
        DecisionNode::branch(
            "BURN_CHECK",
            "¿Origen y gravedad de la quemadura?",
            vec![
                opt("Desconocido / Duda", "BURN_COOL", Neutral),
                opt("Fuego / Calor (Piel roja/ampollas)", "BURN_COOL", Neutral),
                opt("Química (Líquido/Polvo)", "BURN_CHEM", Danger),
                opt("Ropa pegada a la piel", "BURN_STUCK", Danger),
            ],
        ),
        DecisionNode::leaf(
            "BURN_COOL",
            "Quemadura térmica.",
            "ENFRIAR ZONA",
            Warning,
            "1. Aplica agua templada/fría (NO HELADA) por 20 min.\n2. Cubre con film transparente o tela limpia húmeda.\n3. NO rompas ampollas.\n4. NO apliques cremas ni dentífrico.",
            "IRRIGAR AGUA",
        ),
        DecisionNode::leaf(
            "BURN_CHEM",
            "Quemadura química.",
            "LAVADO MASIVO",
            Critical,
            "1. Si es polvo, cepilla antes de mojar.\n2. Lava con chorro de agua continuo durante 30-60 min.\n3. Retira ropa contaminada con cuidado.\n4. Protege tus ojos.",
            "LAVAR 30 MIN",
        ),
        DecisionNode::leaf(
            "BURN_STUCK",
            "Ropa adherida.",
            "NO TIRAR",
            Warning,
            "1. NO arranques la ropa pegada (arrancarás piel).\n2. Corta la ropa alrededor de la zona pegada.\n3. Enfría sobre la ropa.\n4. Cubre sin presionar.",
            "CORTAR ALREDEDOR",
        ),
    ]
}

fn trauma_branch() -> Vec<DecisionNode> {
    vec![
        DecisionNode::branch(
            "TRAUMA_CHECK",
            "¿Tipo de Trauma?",
            vec![
                opt("Desconocido", "HEAD_TRAUMA", Neutral),
                opt("Golpe en la Cabeza / Confusión", "HEAD_TRAUMA", Danger),
                opt("Hueso asoma (Fractura Abierta)", "OPEN_FRACTURE", Danger),
                opt("Deformidad / Dolor extremidad", "CLOSED_FRACTURE", Neutral),
                opt("Lesión en Ojo", "EYE_TRAUMA", Neutral),
            ],
        ),
        DecisionNode::leaf(
            "HEAD_TRAUMA",
            "Traumatismo Craneoencefálico (TCE).",
            "VIGILANCIA TCE",
            Critical,
            "1. Si inconsciente: Posición lateral (si no hay daño cuello).\n2. Controla vómitos.\n3. Pupilas desiguales = Peligro extremo.\n4. NO dejar dormir si hay confusión progresiva.",
            "MONITORIZAR CONSCIENCIA",
        ),
        DecisionNode::leaf(
            "EYE_TRAUMA",
            "Trauma Ocular.",
            "PROTEGER OJO",
            Warning,
            "1. Si hay objeto clavado: NO LO SAQUES.\n2. Cubre AMBOS ojos (para evitar que mueva el malo).\n3. Si es químico: lavar 15 min.\n4. No frotar.",
            "CUBRIR AMBOS",
        ),
        DecisionNode::leaf(
            "OPEN_FRACTURE",
            "Hueso expuesto.",
            "FRACTURA ABIERTA",
            Critical,
            "1. NO meter el hueso.\n2. Controlar sangrado alrededor.\n3. Cubrir con apósito húmedo.\n4. Inmovilizar como se encuentre.",
            "INMOVILIZAR",
        ),
        DecisionNode::leaf(
            "CLOSED_FRACTURE",
            "Fractura cerrada.",
            "FERULIZAR",
            Info,
            "1. Inmoviliza articulación por encima y debajo.\n2. Usa ramas/cartón y venda.\n3. Comprueba pulso/color dedos cada 15 min.",
            "ENTABLILLAR",
        ),
    ]
}

fn allergy_branch() -> Vec<DecisionNode> {
    vec![
        DecisionNode::branch(
            "ALLERGY_CHECK",
            "¿Dificultad respiratoria o hinchazón de cara/lengua?",
            vec![
                opt("Desconocido / Leve picor", "ALLERGY_MILD", Neutral),
                opt("SÍ (Anafilaxia)", "ANAPHYLAXIS", Danger),
                opt("Solo ronchas en piel", "ALLERGY_MILD", Neutral),
            ],
        ),
        DecisionNode::leaf(
            "ANAPHYLAXIS",
            "Shock Anafiláctico.",
            "USAR EPI-PEN",
            Critical,
            "1. Si tiene autoinyector (Adrenalina), ÚSALO YA en muslo externo.\n2. Posición: Tumbado piernas arriba (si respira bien) o sentado (si se ahoga).\n3. Si no mejora en 5 min, segunda dosis.",
            "ADRENALINA YA",
        ),
        DecisionNode::leaf(
            "ALLERGY_MILD",
            "Alergia leve.",
            "ANTIHISTAMÍNICO",
            Info,
            "1. Alejar del alérgeno.\n2. Tomar antihistamínico oral si disponible.\n3. Vigilar respiración por si empeora.\n4. Compresas frías para picor.",
            "OBSERVAR",
        ),
    ]
}

fn airway_branch() -> Vec<DecisionNode> {
    vec![
        DecisionNode::branch(
            "AIRWAY_CHECK",
            "¿Responde a la voz o dolor?",
            vec![
                opt("Desconocido", "BREATHING_LOOK", Neutral),
                opt("SÍ responde", "RECOVERY_POS", Safe),
                opt("NO responde", "BREATHING_LOOK", Danger),
            ],
        ),
        DecisionNode::branch(
            "BREATHING_LOOK",
            "¿El pecho se mueve? ¿Sientes aire?",
            vec![
                opt("No estoy seguro", "RECOVERY_POS", Neutral),
                opt("SÍ respira", "RECOVERY_POS", Safe),
                opt("NO respira / Boquea", "START_CPR", Danger),
            ],
        ),
        DecisionNode::leaf(
            "START_CPR",
            "Paro Cardíaco.",
            "RCP (30:2)",
            Critical,
            "1. Centro del pecho.\n2. Comprime fuerte y rápido (100-120/min).\n3. Hunde 5cm el pecho.\n4. NO PARES hasta que reviva o llegue ayuda.",
            "COMPRIMIR PECHO",
        ),
        DecisionNode::leaf(
            "RECOVERY_POS",
            "Inconsciente pero respira.",
            "POSICIÓN LATERAL",
            Info,
            "1. Tumba de lado para que no se ahogue con vómito.\n2. Extiende cuello.\n3. Revisa respiración cada minuto.",
            "PROTEGER VÍA AÉREA",
        ),
    ]
}

fn environment_branch() -> Vec<DecisionNode> {
    vec![
        DecisionNode::branch(
            "ENV_CHECK",
            "Exposición Térmica.",
            vec![
                opt("Desconocido", "GENERAL_STABILIZE", Neutral),
                opt("Frío / Hipotermia", "HYPOTHERMIA", Neutral),
                opt("Calor / Golpe de Calor", "HEATSTROKE", Neutral),
            ],
        ),
        DecisionNode::leaf(
            "GENERAL_STABILIZE",
            "Entorno.",
            "REFUGIO",
            Info,
            "1. Aísla del suelo.\n2. Protege del viento/lluvia.\n3. Mantén temperatura estable.",
            "ESTABILIZAR",
        ),
        DecisionNode::leaf(
            "HYPOTHERMIA",
            "Hipotermia.",
            "CALOR PASIVO",
            Warning,
            "1. Quitar ropa mojada.\n2. Piel con piel.\n3. Bebida tibia (si consciente).\n4. NO frotar.",
            "CALENTAR LENTO",
        ),
        DecisionNode::branch(
            "HEATSTROKE",
            "¿Piel seca y muy caliente?",
            vec![
                opt("Desconocido", "HEAT_EXHAUST", Neutral),
                opt("SÍ (No suda)", "HEATSTROKE_ACT", Danger),
                opt("NO (Suda mucho)", "HEAT_EXHAUST", Neutral),
            ],
        ),
        DecisionNode::leaf(
            "HEATSTROKE_ACT",
            "Golpe de Calor.",
            "ENFRIAR RÁPIDO",
            Critical,
            "1. Agua en cuerpo.\n2. Abanicar.\n3. Hielo en axilas/ingles.\n4. EVACUAR.",
            "BAJAR TEMP",
        ),
        DecisionNode::leaf(
            "HEAT_EXHAUST",
            "Agotamiento.",
            "HIDRATAR",
            Warning,
            "1. Sombra.\n2. Agua con sal a sorbos.\n3. Elevar piernas.",
            "DESCANSAR",
        ),
    ]
}

fn toxin_branch() -> Vec<DecisionNode> {
    vec![
        DecisionNode::branch(
            "TOXIN_CHECK",
            "Contacto Tóxico.",
            vec![
                opt("Desconocido", "GENERAL_TOXIN", Neutral),
                opt("Picadura (Serpiente/Araña)", "BITE_TREAT", Danger),
                opt("Ingesta", "POISON_INGEST", Danger),
            ],
        ),
        DecisionNode::leaf(
            "BITE_TREAT",
            "Venenos.",
            "INMOVILIZAR",
            Warning,
            "1. NO chupar.\n2. Miembro bajo nivel corazón.\n3. Lavar herida.\n4. Marcar hinchazón.",
            "QUIETO",
        ),
        DecisionNode::leaf(
            "POISON_INGEST",
            "Ingestión.",
            "NO VOMITAR",
            Warning,
            "1. NO provocar vómito.\n2. Guardar muestra.\n3. Carbón activado si hay.",
            "DILUIR",
        ),
        DecisionNode::leaf(
            "GENERAL_TOXIN",
            "General.",
            "SOPORTE",
            Info,
            "1. Lavar zona.\n2. Vigilar respiración.\n3. Retirar joyas.",
            "OBSERVAR",
        ),
    ]
}
