//! Line-oriented command shell
//!
//! Turns one input line into a [`Command`] and runs it against the [`App`]. Warnings
//! (bad input, unknown recipe) come back as messages; only storage write failures are
//! returned as errors.

use crate::app::App;
use crate::error::{Error, Result, ValidationError};
use crate::persistence::DocumentStore;
use crate::views::View;

pub const HELP: &str = "Comandos:\n\
    \x20 inicio | dicas | receitas | quiz | horta   trocar de tela\n\
    \x20 nome <nome>                                configurar o nome do aluno\n\
    \x20 aleatoria                                  mostrar uma dica aleatória\n\
    \x20 receita <título ou número>                 ver uma receita\n\
    \x20 opcao <1-4>                                escolher uma opção do quiz\n\
    \x20 responder                                  verificar a resposta\n\
    \x20 proxima                                    próxima pergunta\n\
    \x20 anotar <texto>                             salvar uma observação da horta\n\
    \x20 ajuda                                      esta lista\n\
    \x20 sair                                       fechar o aplicativo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show(View),
    SetName(String),
    RandomTip,
    OpenRecipe(String),
    /// 1-based option number as typed
    SelectOption(usize),
    CheckAnswer,
    NextQuestion,
    Note(String),
    Help,
    Quit,
    /// Blank line: just redraw
    Refresh,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        if word.is_empty() {
            return Command::Refresh;
        }
        if let Some(view) = View::from_command(word) {
            return Command::Show(view);
        }

        match word.to_lowercase().as_str() {
            "nome" => Command::SetName(rest.to_string()),
            "aleatoria" | "aleatória" => Command::RandomTip,
            "receita" => Command::OpenRecipe(rest.to_string()),
            "opcao" | "opção" => match rest.parse() {
                Ok(n) => Command::SelectOption(n),
                Err(_) => Command::Unknown(line.to_string()),
            },
            "responder" | "resposta" => Command::CheckAnswer,
            "proxima" | "próxima" => Command::NextQuestion,
            "anotar" => Command::Note(rest.to_string()),
            "ajuda" | "help" | "?" => Command::Help,
            "sair" | "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

/// What the shell should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the current view, optionally with a message
    Continue(Option<String>),
    Quit,
}

impl Outcome {
    fn message(text: impl Into<String>) -> Self {
        Outcome::Continue(Some(text.into()))
    }
}

/// Run one command. Recoverable errors become messages.
pub fn execute<S: DocumentStore>(app: &mut App<S>, command: Command) -> Result<Outcome> {
    match run(app, command) {
        Err(e) if e.is_recoverable() => {
            log::debug!("Rejected command: {}", e);
            Ok(Outcome::message(format!("Aviso: {}", e)))
        }
        other => other,
    }
}

fn run<S: DocumentStore>(app: &mut App<S>, command: Command) -> Result<Outcome> {
    let outcome = match command {
        Command::Show(view) => {
            app.show(view);
            Outcome::Continue(None)
        }
        Command::SetName(name) => {
            app.set_username(&name)?;
            Outcome::message(format!("Nome salvo: {}", app.username()))
        }
        Command::RandomTip => {
            app.show(View::Tips);
            match app.random_tip() {
                Some(_) => Outcome::Continue(None),
                None => Outcome::message("Nenhuma dica disponível."),
            }
        }
        Command::OpenRecipe(title) => {
            app.show(View::Recipes);
            if title.is_empty() {
                return Ok(Outcome::message("Selecione uma receita da lista."));
            }
            let title = match title.parse::<usize>() {
                Ok(n) if (1..=app.recipes().len()).contains(&n) => app.recipes()[n - 1].title.clone(),
                _ => title,
            };
            app.open_recipe(&title)?;
            Outcome::Continue(None)
        }
        Command::SelectOption(n) => {
            app.show(View::Quiz);
            let index = n.checked_sub(1).ok_or(ValidationError::OptionOutOfRange(n))?;
            app.select_option(index)?;
            Outcome::Continue(None)
        }
        Command::CheckAnswer => {
            app.show(View::Quiz);
            app.check_answer()?;
            Outcome::Continue(None)
        }
        Command::NextQuestion => {
            app.show(View::Quiz);
            match app.next_question()? {
                Some(result) => Outcome::message(format!("Quiz Finalizado! {}", result.message())),
                None => Outcome::Continue(None),
            }
        }
        Command::Note(text) => {
            app.show(View::Garden);
            app.append_journal_entry(&text)?;
            Outcome::message("Observação salva com sucesso!")
        }
        Command::Help => Outcome::message(HELP),
        Command::Quit => Outcome::Quit,
        Command::Refresh => Outcome::Continue(None),
        Command::Unknown(line) => {
            return Err(Error::from(ValidationError::UnknownCommand(line)));
        }
    };
    Ok(outcome)
}
