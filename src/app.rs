//! Everything the presentation layer calls into
//!
//! `App` bundles the catalog, the session, the quiz engine and the small bits of screen
//! state (current view, last random tip, open recipe). All calls are synchronous.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::catalog::{Catalog, Recipe, pick_random};
use crate::error::Result;
use crate::persistence::DocumentStore;
use crate::quiz::{Feedback, QuizEngine, QuizResult};
use crate::session::Session;
use crate::views::View;

pub struct App<S: DocumentStore> {
    catalog: Catalog,
    session: Session<S>,
    quiz: QuizEngine,
    rng: Pcg32,
    view: View,
    last_tip: Option<String>,
    open_recipe: Option<usize>,
}

impl<S: DocumentStore> App<S> {
    /// Load the session from `store` and start the quiz at its first question
    pub fn new(catalog: Catalog, store: S, seed: u64) -> Result<Self> {
        catalog.validate()?;
        let quiz = QuizEngine::new(catalog.questions.clone())?;
        Ok(Self {
            catalog,
            session: Session::initialize(store),
            quiz,
            rng: Pcg32::seed_from_u64(seed),
            view: View::Home,
            last_tip: None,
            open_recipe: None,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn show(&mut self, view: View) {
        log::debug!("Showing {:?}", view);
        self.view = view;
    }

    // === User ===

    pub fn username(&self) -> &str {
        self.session.username()
    }

    pub fn set_username(&mut self, name: &str) -> Result<()> {
        self.session.set_username(name)
    }

    // === Tips ===

    pub fn tips(&self) -> &[String] {
        &self.catalog.tips
    }

    /// Pick a tip and remember it for the tips view
    pub fn random_tip(&mut self) -> Option<&str> {
        let tip = pick_random(&self.catalog.tips, &mut self.rng)?.to_string();
        Some(self.last_tip.insert(tip).as_str())
    }

    pub fn last_tip(&self) -> Option<&str> {
        self.last_tip.as_deref()
    }

    // === Recipes ===

    pub fn recipes(&self) -> &[Recipe] {
        &self.catalog.recipes
    }

    pub fn recipe_by_title(&self, title: &str) -> Result<&Recipe> {
        self.catalog.recipe_by_title(title)
    }

    /// Open a recipe for the recipes view. An unknown title leaves the open one alone.
    pub fn open_recipe(&mut self, title: &str) -> Result<&Recipe> {
        let recipe = self.catalog.recipe_by_title(title)?;
        let index = self
            .catalog
            .recipes
            .iter()
            .position(|r| std::ptr::eq(r, recipe));
        self.open_recipe = index;
        Ok(recipe)
    }

    pub fn opened_recipe(&self) -> Option<&Recipe> {
        self.open_recipe.and_then(|i| self.catalog.recipes.get(i))
    }

    // === Quiz ===

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn select_option(&mut self, index: usize) -> Result<()> {
        self.quiz.select_option(index)
    }

    pub fn check_answer(&mut self) -> Result<&Feedback> {
        self.quiz.check_answer()
    }

    /// Advance the quiz; a finished pass is saved before it is returned
    pub fn next_question(&mut self) -> Result<Option<QuizResult>> {
        self.quiz.next_question(&mut self.session)
    }

    // === Garden diary ===

    pub fn append_journal_entry(&mut self, text: &str) -> Result<()> {
        self.session.append_journal_entry(text)
    }
}
