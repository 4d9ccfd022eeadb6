use clap::ValueEnum;

use crate::error::NarrativeError;

// region:  --- Prompt templates
//
// The instruction text the game ships with, one template per request type.
// The wording is part of the game's voice; treat it as data, not prose to
// tidy up.

const BOSS_PROMPT: &str = "Você é Hexakron, o Encarregado da Simetria, um ser colossal feito de geometrias perfeitas \
    que rege o Universo Geométrico. \
    Gere UMA frase curta ameaçadora para provocar Gronkarr. \
    Formato: 'HEXAKRON: [sua frase]' (máximo 40 caracteres incluindo o prefixo). \
    Exemplo: 'HEXAKRON: Sua assimetria será corrigida!'";

const INTRO_PROMPT: &str = "Você é Gronkarr, um guerreiro que era Peixe Cósmico e agora, após derrotar o Leviathan, \
    foi transportado para o Universo Geométrico onde se tornou um simples círculo luminoso. \
    Gere UMA frase dramática e curta sobre despertar neste universo estranho. \
    Formato: 'GRONKARR: [sua frase]' (máximo 70 caracteres incluindo o prefixo). \
    Exemplo: 'GRONKARR: Formas puras... onde estou? Sou apenas um círculo agora?'";

const KILL_MILESTONE_PROMPT: &str = "Você é uma inteligência superior de outra dimensão que sussurra mensagens absurdas para Gronkarr, \
    o círculo luminoso em um mundo de formas perfeitas. \
    Ele acabou de eliminar 10 formas geométricas hostis. \
    Gere UMA frase humorística e absurda (máximo 40 caracteres) sobre este feito. \
    Tom: surreal e cômico. \
    Exemplo: 'Círculos: 10, Quadrados: 0. Geometria básica!'";

const DAMAGE_PROMPT: &str = "Você é Gronkarr, um círculo luminoso que acaba de colidir com uma forma geométrica hostil \
    no Universo Geométrico. \
    Gere UMA onomatopeia curta (máximo 10 caracteres) para representar distorção ou dano geométrico. \
    Use letras maiúsculas e pontuação para enfatizar. \
    Exemplo: 'CRACK!' ou 'BEND!' ou 'WARP!'";

const BOSS_APPEAR_PROMPT: &str = "Você é um narrador descrevendo a chegada de Hexakron, o Encarregado da Simetria, \
    um ser colossal feito de geometrias perfeitas. \
    Gere UMA frase dramática curta (máximo 40 caracteres) para destacar sua chegada. \
    Tom: matemático e alarmante. \
    Exemplo: 'Ângulos perfeitos detectados! Hexakron vem!'";

const BOSS_PHASE_PROMPT: &str = "Você é Hexakron, o Encarregado da Simetria, que acabou de se transformar em uma forma geométrica \
    mais complexa e poderosa. \
    Gere UMA frase intimidadora curta (máximo 40 caracteres) para provocar Gronkarr, o círculo imperfeito. \
    Tom: matemático e ameaçador. \
    Exemplo: 'Recalculando para dimensão fractal superior!'";

const BOSS_DEFEAT_PROMPT: &str = "Você é Hexakron, o Encarregado da Simetria, derrotado por Gronkarr, o círculo imperfeito. \
    Gere UMA frase curta (máximo 40 caracteres) de derrota ou aviso final. \
    Tom: matemático e ameaçador. \
    Exemplo: 'Equação incompleta... Voltarei reconfigurado!'";

const RANDOM_JOKE_PROMPT: &str = "Você é uma inteligência cósmica que observa Gronkarr. \
    Gere UMA piada curta e absurda (máximo 60 caracteres) relacionada a formas geométricas. \
    Formato: 'COSMOS: [sua piada]' \
    Tom: cósmico e absurdo. \
    Exemplo: 'COSMOS: Por que o quadrado não foi à festa? Porque não era cool o suficiente!'";

const GRONKARR_LAMENT_PROMPT: &str = "Você é Gronkarr, o círculo imperfeito, sentindo saudades de seu passado como Peixe Cósmico. \
    Gere UMA frase melancólica curta (máximo 60 caracteres) comparando sua vida atual com a anterior. \
    Formato: 'GRONKARR: [sua frase]' \
    Tom: nostálgico e reflexivo. \
    Exemplo: 'GRONKARR: Antes eu nadava entre estrelas... agora flutuo em ângulos vazios.'";

const COSMIC_WISDOM_PROMPT: &str = "Você é um fragmento da sabedoria do universo que sussurra para Gronkarr. \
    Gere UMA frase filosófica curta (máximo 50 caracteres) sobre existência e formas. \
    Formato: 'UNIVERSO: [sua frase]' \
    Tom: profundo e enigmático. \
    Exemplo: 'UNIVERSO: A circunferência do ser não tem ângulos para se esconder.'";

// endregion:  --- Prompt templates

/// The ten kinds of flavor text the game can ask for. The CLI tag for each
/// variant is its snake_case name (`kill_milestone`, `boss_appear`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum RequestType {
    Boss,
    Intro,
    KillMilestone,
    Damage,
    BossAppear,
    BossPhase,
    BossDefeat,
    RandomJoke,
    GronkarrLament,
    CosmicWisdom,
}

/// Generation parameters for one request type. All fields are fixed at
/// compile time; the catalog is never mutated.
#[derive(Debug, Clone, Copy)]
pub struct PromptSpec {
    pub template: &'static str,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl RequestType {
    pub const ALL: [RequestType; 10] = [
        RequestType::Boss,
        RequestType::Intro,
        RequestType::KillMilestone,
        RequestType::Damage,
        RequestType::BossAppear,
        RequestType::BossPhase,
        RequestType::BossDefeat,
        RequestType::RandomJoke,
        RequestType::GronkarrLament,
        RequestType::CosmicWisdom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Boss => "boss",
            RequestType::Intro => "intro",
            RequestType::KillMilestone => "kill_milestone",
            RequestType::Damage => "damage",
            RequestType::BossAppear => "boss_appear",
            RequestType::BossPhase => "boss_phase",
            RequestType::BossDefeat => "boss_defeat",
            RequestType::RandomJoke => "random_joke",
            RequestType::GronkarrLament => "gronkarr_lament",
            RequestType::CosmicWisdom => "cosmic_wisdom",
        }
    }

    /// Parses a raw tag. The clap surface never reaches this with a bad
    /// value; it exists for library callers and keeps the unrecognized-tag
    /// failure explicit instead of defaulting to some arbitrary entry.
    pub fn from_tag(tag: &str) -> Result<Self, NarrativeError> {
        RequestType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == tag)
            .ok_or_else(|| NarrativeError::UnknownRequestType(tag.to_string()))
    }

    /// Template plus sampling parameters for this request type. Exhaustive:
    /// a new variant does not compile until it has an entry here.
    pub fn prompt_spec(&self) -> PromptSpec {
        let (template, temperature, max_output_tokens) = match self {
            RequestType::Boss => (BOSS_PROMPT, 0.7, 40),
            RequestType::Intro => (INTRO_PROMPT, 0.6, 70),
            RequestType::KillMilestone => (KILL_MILESTONE_PROMPT, 0.6, 40),
            RequestType::Damage => (DAMAGE_PROMPT, 0.5, 10),
            RequestType::BossAppear => (BOSS_APPEAR_PROMPT, 0.7, 40),
            RequestType::BossPhase => (BOSS_PHASE_PROMPT, 0.7, 40),
            RequestType::BossDefeat => (BOSS_DEFEAT_PROMPT, 0.7, 40),
            RequestType::RandomJoke => (RANDOM_JOKE_PROMPT, 0.8, 60),
            RequestType::GronkarrLament => (GRONKARR_LAMENT_PROMPT, 0.5, 60),
            RequestType::CosmicWisdom => (COSMIC_WISDOM_PROMPT, 0.7, 50),
        };
        PromptSpec {
            template,
            temperature,
            max_output_tokens,
        }
    }

    /// The offline line the game prints when generation fails. Same
    /// exhaustiveness guarantee as `prompt_spec`.
    pub fn fallback(&self) -> &'static str {
        match self {
            RequestType::Boss => "HEXAKRON: Sua imperfeição me ofende.",
            RequestType::Intro => "GRONKARR: Luz... geometria... meu poder... esvaído?",
            RequestType::KillMilestone => "COSMOS: Uau! Matou 10 hein... quer um presente otaro?!",
            RequestType::Damage => "GRONKARR: EITA LAPADA DO KRAI TIO!",
            RequestType::BossAppear => "NARRADOR: Um objeto geometrico poderoso se aproxima!",
            RequestType::BossPhase => "HEXAKRON: Este não é nem meu verdadeiro poder!",
            RequestType::BossDefeat => "HEXAKRON: Impossível... Como fui derrotado?!",
            RequestType::RandomJoke => {
                "COSMOS: Por que o círculo é o melhor DJ? Porque sabe fazer os melhores loops!"
            }
            RequestType::GronkarrLament => {
                "GRONKARR: Antes eu nadava livre... agora sou só um ponto no vazio."
            }
            RequestType::CosmicWisdom => {
                "UNIVERSO: Na matemática do caos, até o erro tem seu padrão."
            }
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_every_type_has_a_nonempty_stable_fallback() {
        for ty in RequestType::ALL {
            let first = ty.fallback();
            assert!(!first.is_empty(), "{ty} has an empty fallback");
            assert_eq!(first, ty.fallback(), "{ty} fallback is not stable");
        }
    }

    #[test]
    fn test_every_spec_has_sane_parameters() {
        for ty in RequestType::ALL {
            let spec = ty.prompt_spec();
            assert!(!spec.template.is_empty(), "{ty} has an empty template");
            assert!(
                (0.0..=1.0).contains(&spec.temperature),
                "{ty} temperature {} out of range",
                spec.temperature
            );
            assert!(spec.max_output_tokens > 0, "{ty} allows zero tokens");
        }
    }

    #[test]
    fn test_tags_round_trip() {
        for ty in RequestType::ALL {
            assert_eq!(RequestType::from_tag(ty.as_str()).unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let err = RequestType::from_tag("leviathan").unwrap_err();
        assert_matches!(err, NarrativeError::UnknownRequestType(tag) if tag == "leviathan");
    }

    #[test]
    fn test_tags_are_unique() {
        for a in RequestType::ALL {
            for b in RequestType::ALL {
                if a != b {
                    assert_ne!(a.as_str(), b.as_str());
                }
            }
        }
    }

    #[test]
    fn test_damage_fallback_matches_game_data() {
        assert_eq!(
            RequestType::Damage.fallback(),
            "GRONKARR: EITA LAPADA DO KRAI TIO!"
        );
    }
}
