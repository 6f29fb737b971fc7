use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use yew::Reducible;

/// Fixed set of study areas used to tag questions and area cards.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Area {
    Sistemas,
    Contabilidad,
    Administracion,
    Finanzas,
}

impl Area {
    pub const ALL: [Area; 4] = [
        Area::Sistemas,
        Area::Contabilidad,
        Area::Administracion,
        Area::Finanzas,
    ];

    /// Stable lowercase tag, as carried in `data-area` attributes and select values.
    pub fn tag(&self) -> &'static str {
        match self {
            Area::Sistemas => "sistemas",
            Area::Contabilidad => "contabilidad",
            Area::Administracion => "administracion",
            Area::Finanzas => "finanzas",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Area::Sistemas => "Sistemas",
            Area::Contabilidad => "Contabilidad",
            Area::Administracion => "Administración",
            Area::Finanzas => "Finanzas",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Area> {
        Area::ALL.iter().copied().find(|a| a.tag() == tag)
    }
}

/// Category selection for the area grid and the question board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AreaFilter {
    #[default]
    All,
    Only(Area),
}

impl AreaFilter {
    pub fn matches(&self, area: Area) -> bool {
        match self {
            AreaFilter::All => true,
            AreaFilter::Only(selected) => *selected == area,
        }
    }

    /// Parses a select/chip value. Unknown values fall open to `All` so the
    /// grid never ends up empty because of a stray option.
    pub fn from_value(value: &str) -> AreaFilter {
        match Area::from_tag(value) {
            Some(area) => AreaFilter::Only(area),
            None => AreaFilter::All,
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            AreaFilter::All => "all",
            AreaFilter::Only(area) => area.tag(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Question {
    pub id: u32,
    pub area: Area,
    pub title: &'static str,
    pub body: &'static str,
    pub answer: &'static str,
}

pub const SAMPLE_QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        area: Area::Sistemas,
        title: "¿Cómo instalo Node.js en Windows?",
        body: "Quiero instalar Node.js para un proyecto. ¿Qué pasos debo seguir?",
        answer: "Descarga el instalador desde nodejs.org, ejecuta el instalador y verifica con `node -v`.",
    },
    Question {
        id: 2,
        area: Area::Contabilidad,
        title: "¿Qué es el activo corriente?",
        body: "Necesito una definición simple de activo corriente.",
        answer: "Son bienes y derechos convertibles en efectivo en el corto plazo, como caja, bancos e inventarios.",
    },
    Question {
        id: 3,
        area: Area::Administracion,
        title: "¿Cómo hacer un plan de trabajo?",
        body: "Busco una estructura básica para un plan de trabajo.",
        answer: "Define objetivos, tareas, responsables, tiempos y recursos; revisa y ajusta periódicamente.",
    },
    Question {
        id: 4,
        area: Area::Finanzas,
        title: "¿Qué es el VAN?",
        body: "Explicación breve del Valor Actual Neto.",
        answer: "Es la suma de flujos de caja descontados menos la inversión inicial; si es positivo, el proyecto es rentable.",
    },
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NewsItem {
    pub id: u32,
    pub title: &'static str,
    pub desc: &'static str,
    pub time: &'static str,
}

pub const SAMPLE_NEWS: &[NewsItem] = &[
    NewsItem {
        id: 1,
        title: "Convocatoria de cursos SENA",
        desc: "Abierta la inscripción para cursos técnicos gratuitos.",
        time: "hace 2 horas",
    },
    NewsItem {
        id: 2,
        title: "Hackathon estudiantil",
        desc: "Participa en el hackathon regional el próximo mes.",
        time: "1 día",
    },
    NewsItem {
        id: 3,
        title: "Nueva guía de contabilidad",
        desc: "Publicada guía práctica para registros contables básicos.",
        time: "3 días",
    },
];

/// One navigation entry; `section_id` matches the id of a page section.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavLink {
    pub section_id: &'static str,
    pub label: &'static str,
    pub color: Option<&'static str>,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { section_id: "inicio", label: "Inicio", color: Some("#2563eb") },
    NavLink { section_id: "areas", label: "Áreas", color: Some("#059669") },
    NavLink { section_id: "preguntas", label: "Preguntas", color: Some("#d97706") },
    NavLink { section_id: "noticias", label: "Noticias", color: Some("#dc2626") },
    NavLink { section_id: "nosotros", label: "Nosotros", color: Some("#7c3aed") },
];

pub fn accent_for_section(section_id: &str) -> Option<&'static str> {
    NAV_LINKS
        .iter()
        .find(|link| link.section_id == section_id)
        .and_then(|link| link.color)
}

/// Questions whose area passes the filter and whose title or body contains
/// the query. The query must already be lowercased (`BoardAction::Search`
/// normalizes it); an empty query matches everything.
pub fn visible_questions(filter: AreaFilter, query: &str) -> Vec<&'static Question> {
    SAMPLE_QUESTIONS
        .iter()
        .filter(|q| {
            filter.matches(q.area)
                && (q.title.to_lowercase().contains(query)
                    || q.body.to_lowercase().contains(query))
        })
        .collect()
}

/// View-model for the question board. Answer visibility and like counts are
/// view state keyed by question id, never part of the records themselves.
#[derive(Clone, PartialEq, Default)]
pub struct BoardState {
    pub filter: AreaFilter,
    /// Stored trimmed and lowercased; matching is case-insensitive.
    pub query: String,
    pub open_answers: HashSet<u32>,
    pub likes: HashMap<u32, u32>,
}

pub enum BoardAction {
    SelectArea(AreaFilter),
    Search(String),
    ToggleAnswer(u32),
    Like(u32),
}

impl BoardState {
    pub fn visible(&self) -> Vec<&'static Question> {
        visible_questions(self.filter, &self.query)
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.open_answers.contains(&id)
    }

    pub fn likes_for(&self, id: u32) -> u32 {
        self.likes.get(&id).copied().unwrap_or(0)
    }

    fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::SelectArea(filter) => self.filter = filter,
            BoardAction::Search(text) => self.query = text.trim().to_lowercase(),
            BoardAction::ToggleAnswer(id) => {
                if !self.open_answers.remove(&id) {
                    self.open_answers.insert(id);
                }
            }
            BoardAction::Like(id) => *self.likes.entry(id).or_insert(0) += 1,
        }
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(questions: &[&Question]) -> Vec<u32> {
        questions.iter().map(|q| q.id).collect()
    }

    #[test]
    fn filter_by_area_and_query() {
        let found = visible_questions(AreaFilter::Only(Area::Contabilidad), "activo");
        assert_eq!(ids(&found), vec![2]);
    }

    #[test]
    fn filter_by_area_alone() {
        let found = visible_questions(AreaFilter::Only(Area::Sistemas), "");
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn filter_all_areas_by_query() {
        let found = visible_questions(AreaFilter::All, "van");
        assert_eq!(ids(&found), vec![4]);
    }

    #[test]
    fn query_matches_title_and_body_case_insensitively() {
        let found = visible_questions(AreaFilter::All, "node.js");
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn no_matches_renders_empty_set() {
        assert!(visible_questions(AreaFilter::All, "blockchain").is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(visible_questions(AreaFilter::All, "").len(), SAMPLE_QUESTIONS.len());
    }

    #[test]
    fn double_toggle_returns_answer_to_hidden() {
        let mut board = BoardState::default();
        board.apply(BoardAction::ToggleAnswer(3));
        assert!(board.is_open(3));
        board.apply(BoardAction::ToggleAnswer(3));
        assert!(!board.is_open(3));
    }

    #[test]
    fn toggles_are_independent_per_question() {
        let mut board = BoardState::default();
        board.apply(BoardAction::ToggleAnswer(1));
        board.apply(BoardAction::ToggleAnswer(2));
        board.apply(BoardAction::ToggleAnswer(1));
        assert!(!board.is_open(1));
        assert!(board.is_open(2));
    }

    #[test]
    fn three_likes_count_to_three() {
        let mut board = BoardState::default();
        for _ in 0..3 {
            board.apply(BoardAction::Like(2));
        }
        assert_eq!(board.likes_for(2), 3);
        assert_eq!(board.likes_for(1), 0);
    }

    #[test]
    fn likes_survive_filter_changes() {
        let mut board = BoardState::default();
        board.apply(BoardAction::Like(4));
        board.apply(BoardAction::SelectArea(AreaFilter::Only(Area::Sistemas)));
        board.apply(BoardAction::SelectArea(AreaFilter::All));
        assert_eq!(board.likes_for(4), 1);
    }

    #[test]
    fn search_action_normalizes_text() {
        let mut board = BoardState::default();
        board.apply(BoardAction::Search("  Activo ".into()));
        assert_eq!(board.query, "activo");
        assert_eq!(ids(&board.visible()), vec![2]);
    }

    #[test]
    fn select_value_parsing() {
        assert_eq!(AreaFilter::from_value("all"), AreaFilter::All);
        assert_eq!(
            AreaFilter::from_value("finanzas"),
            AreaFilter::Only(Area::Finanzas)
        );
        assert_eq!(AreaFilter::from_value("desconocida"), AreaFilter::All);
    }

    #[test]
    fn accent_lookup_falls_through_for_unknown_sections() {
        assert_eq!(accent_for_section("inicio"), Some("#2563eb"));
        assert_eq!(accent_for_section("externa"), None);
    }
}
