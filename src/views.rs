//! Screens
//!
//! One variant per screen; each renders itself to plain text from the app state.

use std::fmt::Write;

use crate::app::App;
use crate::persistence::DocumentStore;
use crate::quiz::QuizPhase;

pub const APP_TITLE: &str = "Aprender e Viver Melhor";

const WELCOME: &str = "Este protótipo apresenta dicas e atividades sobre alimentação saudável.\n\
    Use os comandos para navegar entre as seções.\n\n\
    Objetivos:\n\
    - Ensinar hábitos alimentares saudáveis\n\
    - Propor atividades lúdicas\n\
    - Fixar conteúdo com quizzes";

const GARDEN_INTRO: &str = "Proposta: plantar uma pequena semente em copo reciclável e acompanhar seu crescimento.\n\
    Objetivos: aprender sobre alimentação saudável e agricultura sustentável.";

const GARDEN_STEPS: [&str; 4] = [
    "1. Escolher uma semente (feijão, ervilha).",
    "2. Preparar o copo com terra.",
    "3. Plantar a semente e regar.",
    "4. Anotar observações a cada semana.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Tips,
    Recipes,
    Quiz,
    /// Mini garden activity and its diary
    Garden,
}

impl View {
    pub const ALL: [View; 5] = [View::Home, View::Tips, View::Recipes, View::Quiz, View::Garden];

    /// Heading shown above the screen
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Bem-vindo!",
            View::Tips => "Dicas de Alimentação",
            View::Recipes => "Receitas Simples",
            View::Quiz => "Quiz: Alimentação Saudável",
            View::Garden => "Atividade: Mini Horta",
        }
    }

    /// Shell command that opens this view
    pub fn command(&self) -> &'static str {
        match self {
            View::Home => "inicio",
            View::Tips => "dicas",
            View::Recipes => "receitas",
            View::Quiz => "quiz",
            View::Garden => "horta",
        }
    }

    pub fn from_command(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inicio" | "início" | "home" => Some(View::Home),
            "dicas" => Some(View::Tips),
            "receitas" => Some(View::Recipes),
            "quiz" => Some(View::Quiz),
            "horta" | "atividade" => Some(View::Garden),
            _ => None,
        }
    }

    pub fn render<S: DocumentStore>(&self, app: &App<S>) -> String {
        let mut out = String::new();
        let user = match app.username() {
            "" => "Não informado",
            name => name,
        };
        let _ = writeln!(out, "{}    Aluno: {}", APP_TITLE, user);
        let _ = writeln!(out, "== {} ==", self.title());

        match self {
            View::Home => render_home(&mut out),
            View::Tips => render_tips(&mut out, app),
            View::Recipes => render_recipes(&mut out, app),
            View::Quiz => render_quiz(&mut out, app),
            View::Garden => render_garden(&mut out, app),
        }
        out
    }
}

fn render_home(out: &mut String) {
    let _ = writeln!(out, "{}", WELCOME);
}

fn render_tips<S: DocumentStore>(out: &mut String, app: &App<S>) {
    for tip in app.tips() {
        let _ = writeln!(out, "• {}", tip);
    }
    if let Some(tip) = app.last_tip() {
        let _ = writeln!(out, "\nDica aleatória: {}", tip);
    }
}

fn render_recipes<S: DocumentStore>(out: &mut String, app: &App<S>) {
    for (i, recipe) in app.recipes().iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, recipe.title);
    }
    if let Some(recipe) = app.opened_recipe() {
        let _ = writeln!(out, "\n{}", recipe.describe());
    }
}

fn render_quiz<S: DocumentStore>(out: &mut String, app: &App<S>) {
    let quiz = app.quiz();
    let question = quiz.current_question();

    let _ = writeln!(out, "{}. {}", quiz.current_index() + 1, question.prompt);
    for (i, option) in question.options.iter().enumerate() {
        let mark = if quiz.selected_option() == Some(i) { 'x' } else { ' ' };
        let _ = writeln!(out, "  ({}) {}. {}", mark, i + 1, option);
    }

    if quiz.phase() == QuizPhase::ShowingFeedback {
        if let Some(feedback) = quiz.feedback() {
            let _ = writeln!(out, "\n{}", feedback.message());
        }
    }

    let session = app.session();
    let _ = write!(out, "\nAcertos: {}/{}", quiz.score(), quiz.total());
    if let Some(best) = session.best_score_for(session.display_user()) {
        let _ = write!(out, "    Melhor resultado: {}/{}", best.score, best.total);
    }
    out.push('\n');
}

fn render_garden<S: DocumentStore>(out: &mut String, app: &App<S>) {
    let _ = writeln!(out, "{}\n\nPassos:", GARDEN_INTRO);
    for step in GARDEN_STEPS {
        let _ = writeln!(out, "  {}", step);
    }

    let _ = writeln!(out, "\nDiário de Observações:");
    let journal = app.session().journal();
    if journal.is_empty() {
        let _ = writeln!(out, "  (nenhuma observação ainda)");
    }
    for entry in journal {
        let _ = writeln!(out, "  - {}: {}", entry.user, entry.text);
    }
}
