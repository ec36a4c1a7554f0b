use serde::{Deserialize, Serialize};

/// Dry eye subtype selected by the classification cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DryEyeCategory {
    Neuropathic,
    Mixed,
    Evaporative,
    AqueousDeficit,
    Mild,
}

impl DryEyeCategory {
    /// Categories in cascade order.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Neuropathic,
            Self::Mixed,
            Self::Evaporative,
            Self::AqueousDeficit,
            Self::Mild,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Neuropathic => "neuropathic",
            Self::Mixed => "mixed",
            Self::Evaporative => "evaporative",
            Self::AqueousDeficit => "aqueous_deficit",
            Self::Mild => "mild",
        }
    }

    pub fn label(self) -> &'static str {
        self.profile().name
    }

    pub fn profile(self) -> &'static CategoryProfile {
        match self {
            Self::Neuropathic => &NEUROPATHIC,
            Self::Mixed => &MIXED,
            Self::Evaporative => &EVAPORATIVE,
            Self::AqueousDeficit => &AQUEOUS_DEFICIT,
            Self::Mild => &MILD,
        }
    }
}

/// Patient-facing content attached to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub recommendations: &'static [&'static str],
}

static NEUROPATHIC: CategoryProfile = CategoryProfile {
    name: "Occhio Secco Neuropatico",
    description: "Il tuo profilo è compatibile con un occhio secco di tipo neuropatico. I sintomi sono intensi ma spesso l'esame oculistico può risultare normale o con pochi segni clinici visibili.",
    recommendations: &[
        "Considera una valutazione neurologica specializzata",
        "Potrebbero essere utili terapie specifiche per il dolore neuropatico",
        "Mantieni un diario dei sintomi per identificare i trigger",
    ],
};

static MIXED: CategoryProfile = CategoryProfile {
    name: "Occhio Secco Misto",
    description: "Il tuo profilo presenta caratteristiche sia dell'occhio secco evaporativo che del deficit acquoso. Questa forma combinata richiede un approccio terapeutico multiplo.",
    recommendations: &[
        "Combina impacchi caldi e lacrime artificiali",
        "Valuta igiene palpebrale quotidiana",
        "Potrebbero essere necessari diversi tipi di lacrime artificiali",
    ],
};

static EVAPORATIVE: CategoryProfile = CategoryProfile {
    name: "Occhio Secco Evaporativo",
    description: "Il tuo profilo è compatibile con un occhio secco di tipo evaporativo, spesso legato alla disfunzione delle ghiandole di Meibomio che producono la componente oleosa delle lacrime.",
    recommendations: &[
        "Impacchi caldi sulle palpebre 2 volte al giorno",
        "Massaggio delicato delle palpebre",
        "Igiene palpebrale con prodotti specifici",
        "Riduci l'uso prolungato di schermi digitali",
    ],
};

static AQUEOUS_DEFICIT: CategoryProfile = CategoryProfile {
    name: "Occhio Secco da Deficit Acquoso",
    description: "Il tuo profilo è compatibile con un occhio secco da deficit acquoso, caratterizzato da una ridotta produzione della componente acquosa delle lacrime.",
    recommendations: &[
        "Lacrime artificiali frequenti (senza conservanti se usate spesso)",
        "Considera lacrime più viscose per la notte",
        "Evita ambienti secchi o ventosi",
        "Valuta possibili farmaci che potrebbero influire sulla produzione lacrimale",
    ],
};

static MILD: CategoryProfile = CategoryProfile {
    name: "Occhio Secco Lieve",
    description: "I tuoi sintomi suggeriscono una forma lieve di occhio secco. Potrebbero essere sufficienti misure preventive e trattamenti semplici.",
    recommendations: &[
        "Lacrime artificiali al bisogno",
        "Pause frequenti durante l'uso di schermi",
        "Mantieni una buona idratazione",
        "Controlla l'umidità degli ambienti dove passi più tempo",
    ],
};
