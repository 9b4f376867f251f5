//! The values inventory catalog: ten groups of six phrases.

use super::item::{ValueGroup, ValuePhrase};
use crate::domain::scoring::MotivatorFactor::{
    Aesthetic as B, Economic as E, Political as P, Religious as R, Social as S, Theoretical as T,
};

/// The ten fixed value-phrase groups, in administration order.
pub static VALUES_GROUPS: [ValueGroup; 10] = [
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Seguir tradições e conservadoras", factor: R },
            ValuePhrase { text: "Colaborar com os menos favorecidos", factor: S },
            ValuePhrase { text: "Liderar um time vencedor", factor: P },
            ValuePhrase { text: "Contribuir para um ambiente harmônico", factor: B },
            ValuePhrase { text: "Construir um negócio lucrativo", factor: E },
            ValuePhrase { text: "Desenvolver pesquisas relevantes", factor: T },
        ],
    },
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Crescer na carreira e na sociedade", factor: P },
            ValuePhrase { text: "Ajudar o próximo", factor: S },
            ValuePhrase { text: "Vivenciar a arte em minha vida", factor: B },
            ValuePhrase { text: "Ampliar conhecimentos", factor: T },
            ValuePhrase { text: "Alcançar independência financeira", factor: E },
            ValuePhrase { text: "Expressar minhas crenças e convicções", factor: R },
        ],
    },
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Praticar minha fé ativamente", factor: R },
            ValuePhrase { text: "Contribuir com a sociedade", factor: S },
            ValuePhrase { text: "Descobrir novos conhecimentos", factor: T },
            ValuePhrase { text: "Apreciar a beleza da vida", factor: B },
            ValuePhrase { text: "Receber retorno justo pelo que invisto", factor: E },
            ValuePhrase { text: "Liderar equipes e tomar decisões", factor: P },
        ],
    },
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Ser um líder guiado por princípios", factor: R },
            ValuePhrase { text: "Ser um líder prático e produtivo", factor: E },
            ValuePhrase { text: "Ser um líder que serve", factor: S },
            ValuePhrase { text: "Ser um líder com status e poder", factor: P },
            ValuePhrase { text: "Ser um líder que busca bem-estar", factor: B },
            ValuePhrase { text: "Ser um líder que valoriza o aprendizado", factor: T },
        ],
    },
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Aprender algo novo sempre", factor: T },
            ValuePhrase { text: "Ter uma estratégia de sucesso", factor: P },
            ValuePhrase { text: "Ajudar os necessitados", factor: S },
            ValuePhrase { text: "Viver de acordo com meus valores", factor: R },
            ValuePhrase { text: "Expandir produtividade e resultados", factor: E },
            ValuePhrase { text: "Buscar equilíbrio e serenidade", factor: B },
        ],
    },
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Gerar prosperidade financeira", factor: E },
            ValuePhrase { text: "Ser reconhecido(a) e respeitado(a)", factor: P },
            ValuePhrase { text: "Fazer parte de uma comunidade de fé", factor: R },
            ValuePhrase { text: "Criar ambientes agradáveis", factor: B },
            ValuePhrase { text: "Aprender continuamente", factor: T },
            ValuePhrase { text: "Apoiar instituições de caridade", factor: S },
        ],
    },
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Exercer influência e liderança", factor: P },
            ValuePhrase { text: "Garantir segurança futura", factor: E },
            ValuePhrase { text: "Desfrutar do momento presente", factor: B },
            ValuePhrase { text: "Servir pessoas", factor: S },
            ValuePhrase { text: "Preservar tradições", factor: R },
            ValuePhrase { text: "Expandir conhecimento", factor: T },
        ],
    },
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Viver com arte e criatividade", factor: B },
            ValuePhrase { text: "Liderar metas e equipes", factor: P },
            ValuePhrase { text: "Fazer trabalho voluntário", factor: S },
            ValuePhrase { text: "Expressar fé no cotidiano", factor: R },
            ValuePhrase { text: "Multiplicar recursos financeiros", factor: E },
            ValuePhrase { text: "Buscar novos aprendizados", factor: T },
        ],
    },
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Servir ao próximo", factor: S },
            ValuePhrase { text: "Gerir tempo e recursos com sabedoria", factor: E },
            ValuePhrase { text: "Valorizar o belo e a natureza", factor: B },
            ValuePhrase { text: "Manter fé e espiritualidade", factor: R },
            ValuePhrase { text: "Desenvolver novos conhecimentos", factor: T },
            ValuePhrase { text: "Alcançar destaque e influência", factor: P },
        ],
    },
    ValueGroup {
        phrases: [
            ValuePhrase { text: "Buscar harmonia e paz", factor: B },
            ValuePhrase { text: "Buscar conhecimento", factor: T },
            ValuePhrase { text: "Buscar poder e influência", factor: P },
            ValuePhrase { text: "Buscar recompensa financeira", factor: E },
            ValuePhrase { text: "Buscar bem-estar coletivo", factor: S },
            ValuePhrase { text: "Buscar princípios próximos aos meus", factor: R },
        ],
    },
];
