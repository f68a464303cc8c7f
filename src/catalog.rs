//! Static content: tips, recipes and quiz questions
//!
//! Loaded once at startup and never mutated. The built-in set is used unless a catalog
//! file is configured.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of answer options per question
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A simple recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(alias = "ingredientes")]
    pub ingredients: Vec<String>,
    /// Preparation steps
    #[serde(alias = "modo")]
    pub method: String,
}

impl Recipe {
    /// Full text shown when a recipe is opened
    pub fn describe(&self) -> String {
        format!(
            "Título: {}\n\nIngredientes:\n- {}\n\nModo de preparo:\n{}",
            self.title,
            self.ingredients.join("\n- "),
            self.method
        )
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(alias = "pergunta")]
    pub prompt: String,
    #[serde(alias = "opcoes")]
    pub options: [String; OPTIONS_PER_QUESTION],
    #[serde(alias = "resposta")]
    pub correct_index: usize,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// All read-only content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(alias = "dicas")]
    pub tips: Vec<String>,
    #[serde(alias = "receitas")]
    pub recipes: Vec<Recipe>,
    #[serde(alias = "quiz")]
    pub questions: Vec<QuizQuestion>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Content shipped with the app
    pub fn builtin() -> Self {
        let tips = [
            "Coma frutas todos os dias — são ricas em vitaminas e fibras.",
            "Prefira água em vez de refrigerantes.",
            "Inclua verduras no prato: elas ajudam no crescimento e na saúde.",
            "Evite alimentos ultraprocessados com excesso de açúcar e sal.",
            "Faça pequenas refeições ao longo do dia para manter energia.",
        ];

        let recipes = vec![
            recipe(
                "Salada colorida",
                &["Alface", "Tomate", "Cenoura ralada"],
                "Misture os ingredientes e tempere com limão e azeite.",
            ),
            recipe(
                "Smoothie de banana e aveia",
                &["1 banana", "2 colheres de aveia", "200ml de leite ou água"],
                "Bata tudo no liquidificador até ficar cremoso.",
            ),
            recipe(
                "Sanduíche natural",
                &["Pão integral", "Peito de peru", "Folhas verdes"],
                "Monte o sanduíche com pouco sal e sem maionese industrial.",
            ),
        ];

        let questions = vec![
            question(
                "Qual é a bebida mais saudável para o dia a dia?",
                ["Refrigerante", "Suco industrial", "Água", "Energético"],
                2,
            ),
            question(
                "Qual alimento é fonte de proteína?",
                ["Maçã", "Feijão", "Alface", "Biscoito"],
                1,
            ),
            question(
                "O que é uma boa opção de lanche escolar?",
                ["Batata frita", "Fruta e iogurte", "Doces embalados", "Bebida energética"],
                1,
            ),
        ];

        Self {
            tips: tips.iter().map(|t| t.to_string()).collect(),
            recipes,
            questions,
        }
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| Error::Catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog file. Unlike the data file, a bad catalog is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| Error::Catalog(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&json)?;
        log::info!(
            "Loaded catalog {} ({} tips, {} recipes, {} questions)",
            path.display(),
            catalog.tips.len(),
            catalog.recipes.len(),
            catalog.questions.len()
        );
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(Error::Catalog("quiz has no questions".into()));
        }
        for (i, q) in self.questions.iter().enumerate() {
            if q.correct_index >= OPTIONS_PER_QUESTION {
                return Err(Error::Catalog(format!(
                    "question {} has answer index {}",
                    i + 1,
                    q.correct_index
                )));
            }
        }
        Ok(())
    }

    /// Exact title match
    pub fn recipe_by_title(&self, title: &str) -> Result<&Recipe> {
        self.recipes
            .iter()
            .find(|r| r.title == title)
            .ok_or_else(|| Error::NotFound(title.to_string()))
    }
}

/// Pick one tip at random; `None` only for an empty list
pub fn pick_random<'a, R: Rng + ?Sized>(tips: &'a [String], rng: &mut R) -> Option<&'a str> {
    tips.choose(rng).map(String::as_str)
}

fn recipe(title: &str, ingredients: &[&str], method: &str) -> Recipe {
    Recipe {
        title: title.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        method: method.to_string(),
    }
}

fn question(prompt: &str, options: [&str; OPTIONS_PER_QUESTION], correct_index: usize) -> QuizQuestion {
    QuizQuestion {
        prompt: prompt.to_string(),
        options: options.map(str::to_string),
        correct_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.tips.len(), 5);
        assert_eq!(catalog.recipes.len(), 3);
        assert_eq!(catalog.questions.len(), 3);
        assert_eq!(catalog.questions[0].correct_option(), "Água");
    }

    #[test]
    fn test_recipe_lookup() {
        let catalog = Catalog::builtin();
        let r = catalog.recipe_by_title("Sanduíche natural").unwrap();
        assert_eq!(r.ingredients[0], "Pão integral");

        let err = catalog.recipe_by_title("Does not exist").unwrap_err();
        assert!(matches!(err, Error::NotFound(ref t) if t == "Does not exist"));
    }

    #[test]
    fn test_describe_recipe() {
        let catalog = Catalog::builtin();
        let text = catalog.recipes[0].describe();
        assert_eq!(
            text,
            "Título: Salada colorida\n\nIngredientes:\n- Alface\n- Tomate\n- Cenoura ralada\n\n\
             Modo de preparo:\nMisture os ingredientes e tempere com limão e azeite."
        );
    }

    #[test]
    fn test_pick_random_is_deterministic() {
        let tips = Catalog::builtin().tips;
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        for _ in 0..10 {
            let tip = pick_random(&tips, &mut a);
            assert_eq!(tip, pick_random(&tips, &mut b));
            assert!(tips.iter().any(|t| Some(t.as_str()) == tip));
        }
    }

    #[test]
    fn test_pick_random_empty() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(pick_random(&[], &mut rng), None);
    }

    #[test]
    fn test_from_json_portuguese_keys() {
        let json = r#"{
            "dicas": ["Beba água"],
            "receitas": [{"titulo": "Suco", "ingredientes": ["Laranja"], "modo": "Esprema."}],
            "quiz": [{"pergunta": "2+2?", "opcoes": ["1", "2", "3", "4"], "resposta": 3}]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.tips, vec!["Beba água".to_string()]);
        assert_eq!(catalog.recipes[0].title, "Suco");
        assert_eq!(catalog.questions[0].correct_option(), "4");
    }

    #[test]
    fn test_from_json_rejects_bad_catalogs() {
        let no_questions = r#"{"tips": [], "recipes": [], "questions": []}"#;
        assert!(matches!(Catalog::from_json(no_questions), Err(Error::Catalog(_))));

        let bad_index = r#"{"tips": [], "recipes": [], "questions": [
            {"prompt": "?", "options": ["a", "b", "c", "d"], "correct_index": 4}
        ]}"#;
        assert!(matches!(Catalog::from_json(bad_index), Err(Error::Catalog(_))));

        let three_options = r#"{"tips": [], "recipes": [], "questions": [
            {"prompt": "?", "options": ["a", "b", "c"], "correct_index": 0}
        ]}"#;
        assert!(matches!(Catalog::from_json(three_options), Err(Error::Catalog(_))));
    }
}
