use serde::Serialize;
use std::fmt;

/// Identifier of a questionnaire item (1..=20 in the standard catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(pub u8);

impl QuestionId {
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuestionKind {
    /// Intensity answered on the 0..=4 scale.
    #[serde(rename = "scale")]
    Graded,
    /// Yes/no answer.
    #[serde(rename = "yesno")]
    Binary,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Graded => "scale",
            Self::Binary => "yesno",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    PrincipalSymptoms,
    PredisposingFactors,
    TreatmentResponse,
    ReportedDiagnostics,
}

impl SectionKey {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::PrincipalSymptoms,
            Self::PredisposingFactors,
            Self::TreatmentResponse,
            Self::ReportedDiagnostics,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PrincipalSymptoms => "Sintomi Principali",
            Self::PredisposingFactors => "Fattori Predisponenti",
            Self::TreatmentResponse => "Risposte ai Trattamenti",
            Self::ReportedDiagnostics => "Diagnostica Riferita",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub id: u8,
    #[serde(skip)]
    pub key: SectionKey,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: &'static [Question],
}

/// Labels shown next to the 0..=4 scale values.
pub const SCALE_LABELS: [&str; 5] = ["Mai", "Raramente", "A volte", "Spesso", "Sempre"];

pub const SHORT_DISCLAIMER: &str = "Questo risultato non sostituisce una valutazione medica. Porta con te questo risultato alla visita oculistica.";
pub const PRINTABLE_DISCLAIMER: &str = "Questo risultato non sostituisce una valutazione medica professionale. Porta con te questo risultato alla visita oculistica per una valutazione completa.";
pub const PLAIN_TEXT_DISCLAIMER: &str =
    "Questo risultato non sostituisce una valutazione medica. Portalo con te alla visita oculistica.";

/// General facts about the questionnaire, published alongside the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub total_questions: usize,
    pub sections: usize,
    pub estimated_time: &'static str,
    pub disclaimer: &'static str,
}

/// Fixed, ordered set of sections and questions.
#[derive(Debug, Clone, Copy)]
pub struct QuestionnaireCatalog {
    sections: &'static [Section],
}

impl QuestionnaireCatalog {
    pub fn standard() -> Self {
        Self {
            sections: &STANDARD_SECTIONS,
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn section(&self, key: SectionKey) -> Option<&'static Section> {
        self.sections.iter().find(|section| section.key == key)
    }

    pub fn questions(&self) -> impl Iterator<Item = &'static Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
    }

    pub fn question(&self, id: QuestionId) -> Option<&'static Question> {
        self.questions().find(|question| question.id == id)
    }

    pub fn kind_of(&self, id: QuestionId) -> Option<QuestionKind> {
        self.question(id).map(|question| question.kind)
    }

    pub fn ids(&self) -> impl Iterator<Item = QuestionId> {
        self.questions().map(|question| question.id)
    }

    pub fn len(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.questions.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn info(&self) -> QuestionnaireInfo {
        QuestionnaireInfo {
            title: "Questionario per la Classificazione dell'Occhio Secco",
            description: "Questo questionario ti aiuterà a identificare il tipo di occhio secco che potresti avere.",
            total_questions: self.len(),
            sections: self.sections.len(),
            estimated_time: "5-10 minuti",
            disclaimer: SHORT_DISCLAIMER,
        }
    }
}

impl Default for QuestionnaireCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const fn graded(id: u8, text: &'static str) -> Question {
    Question {
        id: QuestionId(id),
        text,
        kind: QuestionKind::Graded,
    }
}

const fn binary(id: u8, text: &'static str) -> Question {
    Question {
        id: QuestionId(id),
        text,
        kind: QuestionKind::Binary,
    }
}

static STANDARD_SECTIONS: [Section; 4] = [
    Section {
        id: 1,
        key: SectionKey::PrincipalSymptoms,
        title: SectionKey::PrincipalSymptoms.label(),
        description: "Valuta quanto spesso hai questi sintomi (da 0 = mai a 4 = sempre)",
        questions: &[
            graded(1, "I tuoi occhi ti sembrano secchi o irritati?"),
            graded(2, "Senti bruciore o pizzicore agli occhi?"),
            graded(3, "Hai sensazione di sabbia o corpo estraneo?"),
            graded(4, "Avverti fastidio alla luce (fotofobia)?"),
            graded(5, "La tua vista diventa offuscata nel corso della giornata?"),
            graded(6, "I tuoi occhi lacrimano spontaneamente?"),
            graded(7, "I sintomi peggiorano alla sera o dopo uso del computer?"),
        ],
    },
    Section {
        id: 2,
        key: SectionKey::PredisposingFactors,
        title: SectionKey::PredisposingFactors.label(),
        description: "Rispondi Sì o No alle seguenti domande",
        questions: &[
            binary(8, "Usi frequentemente schermi (PC, tablet, smartphone)?"),
            binary(9, "Indossi lenti a contatto?"),
            binary(10, "Hai mai fatto un intervento agli occhi?"),
            binary(
                11,
                "Hai una malattia autoimmune diagnosticata (es. Sjögren, lupus)?",
            ),
            binary(
                12,
                "Assumi farmaci per la pressione, depressione o antistaminici?",
            ),
        ],
    },
    Section {
        id: 3,
        key: SectionKey::TreatmentResponse,
        title: SectionKey::TreatmentResponse.label(),
        description: "Indica se hai notato miglioramenti con questi trattamenti",
        questions: &[
            binary(13, "Noti miglioramento con lacrime artificiali?"),
            binary(14, "Noti miglioramento dopo impacchi caldi?"),
            binary(15, "I sintomi compaiono soprattutto al risveglio?"),
            binary(
                16,
                "Hai provato lacrime più viscose o gel, con miglioramento?",
            ),
        ],
    },
    Section {
        id: 4,
        key: SectionKey::ReportedDiagnostics,
        title: SectionKey::ReportedDiagnostics.label(),
        description: "Indica se conosci questi aspetti della tua condizione",
        questions: &[
            binary(17, "Ti hanno mai detto che hai un film lacrimale instabile?"),
            binary(
                18,
                "Ti hanno mai fatto il test di Schirmer (carta sotto la palpebra)?",
            ),
            binary(
                19,
                "Sai se le tue ghiandole di Meibomio funzionano bene (MGD)?",
            ),
            binary(
                20,
                "I tuoi sintomi sono molto forti anche se all'esame l'occhio è 'normale'?",
            ),
        ],
    },
];
