//! The behavioral inventory catalog: ten groups of four adjectives.

use super::item::{Adjective, AdjectiveGroup};
use crate::domain::scoring::StyleFactor::{Conformity as C, Dominance as D, Influence as I, Stability as S};

/// The ten fixed adjective groups, in administration order.
pub static DNA_ADJECTIVE_GROUPS: [AdjectiveGroup; 10] = [
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Determinado", factor: D, description: "Firme em suas decisões e focado em metas." },
            Adjective { text: "Preciso", factor: C, description: "Busca exatidão e qualidade em tudo o que faz." },
            Adjective { text: "Consistente", factor: S, description: "Mantém o ritmo e a estabilidade emocional." },
            Adjective { text: "Confiante", factor: I, description: "Acredita em si mesmo e em sua capacidade de influenciar." },
        ],
    },
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Compreensivo", factor: S, description: "Capaz de entender o lado dos outros." },
            Adjective { text: "Persuasivo", factor: I, description: "Habilidade de convencer e atrair pessoas." },
            Adjective { text: "Cuidadoso", factor: C, description: "Atento aos detalhes e riscos envolvidos." },
            Adjective { text: "Direto", factor: D, description: "Vai direto ao ponto, sem rodeios." },
        ],
    },
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Lógico", factor: C, description: "Baseia-se em fatos e raciocínio analítico." },
            Adjective { text: "Paciente", factor: S, description: "Sabe esperar o momento certo e manter a calma." },
            Adjective { text: "Otimista", factor: I, description: "Vê o lado positivo das situações." },
            Adjective { text: "Assertivo", factor: D, description: "Posiciona-se com firmeza e clareza." },
        ],
    },
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Organizado", factor: C, description: "Mantém ordem e estrutura em seu ambiente." },
            Adjective { text: "Inspirador", factor: I, description: "Motiva as pessoas ao seu redor." },
            Adjective { text: "Persistente", factor: S, description: "Não desiste facilmente de seus objetivos." },
            Adjective { text: "Executor", factor: D, description: "Foco total em realizar e entregar resultados." },
        ],
    },
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Exato", factor: C, description: "Rigoroso com a verdade e dados técnicos." },
            Adjective { text: "Decidido", factor: D, description: "Resolve questões de forma rápida e segura." },
            Adjective { text: "Estável", factor: S, description: "Transmite segurança e previsibilidade." },
            Adjective { text: "Flexível", factor: I, description: "Adapta-se bem a novos cenários e conversas." },
        ],
    },
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Entusiasmado", factor: I, description: "Demonstra alegria e vivacidade constante." },
            Adjective { text: "Disciplinado", factor: C, description: "Segue regras e métodos com rigor." },
            Adjective { text: "Energético", factor: D, description: "Possui alta carga de ação e dinamismo." },
            Adjective { text: "Calmo", factor: S, description: "Mantém a tranquilidade mesmo sob pressão." },
        ],
    },
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Expressivo", factor: I, description: "Comunica-se bem através de gestos e fala." },
            Adjective { text: "Firme", factor: D, description: "Mantém sua posição com autoridade." },
            Adjective { text: "Amável", factor: S, description: "Trata as pessoas com gentileza e carinho." },
            Adjective { text: "Formal", factor: C, description: "Respeita hierarquias e etiquetas sociais." },
        ],
    },
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Detalhista", factor: C, description: "Preocupa-se com as nuances mínimas de um projeto." },
            Adjective { text: "Ponderado", factor: S, description: "Avalia todos os lados antes de agir." },
            Adjective { text: "Visionário", factor: D, description: "Enxerga além do óbvio e do presente." },
            Adjective { text: "Criativo", factor: I, description: "Gera ideias inovadoras e fora da caixa." },
        ],
    },
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Convincente", factor: I, description: "Possui argumentos que ganham a adesão alheia." },
            Adjective { text: "Planejador", factor: S, description: "Gosta de estruturar os passos antes da ação." },
            Adjective { text: "Audacioso", factor: D, description: "Arrisca-se em busca de grandes conquistas." },
            Adjective { text: "Cauteloso", factor: C, description: "Age com prudência para evitar erros." },
        ],
    },
    AdjectiveGroup {
        adjectives: [
            Adjective { text: "Exigente", factor: D, description: "Busca o máximo desempenho de si e dos outros." },
            Adjective { text: "Conservador", factor: S, description: "Valoriza o que é seguro e tradicional." },
            Adjective { text: "Sociável", factor: I, description: "Gosta de estar entre pessoas e fazer amigos." },
            Adjective { text: "Leal", factor: C, description: "Fiel a princípios, processos e parceiros." },
        ],
    },
];
