//! Aprender e Viver Melhor entry point
//!
//! Loads settings and content, then runs the command shell on stdin/stdout.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use aprender_viver::shell::{self, Command, Outcome};
use aprender_viver::{App, Catalog, JsonFileStore, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Aprender e Viver Melhor starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Erro: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> aprender_viver::Result<()> {
    let settings = Settings::from_env();
    let catalog = match &settings.catalog_file {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin(),
    };
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Data file: {}", settings.data_file.display());

    let mut app = App::new(catalog, JsonFileStore::new(&settings.data_file), seed)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    draw(&mut stdout, &app.view().render(&app), Some(shell::HELP));
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Stopped reading input: {}", e);
                break;
            }
        };

        match shell::execute(&mut app, Command::parse(&line))? {
            Outcome::Quit => break,
            Outcome::Continue(message) => {
                draw(&mut stdout, &app.view().render(&app), message.as_deref())
            }
        }
    }

    log::info!("Bye");
    Ok(())
}

fn draw(out: &mut impl Write, screen: &str, message: Option<&str>) {
    let _ = writeln!(out, "\n{}", screen);
    if let Some(message) = message {
        let _ = writeln!(out, "{}", message);
    }
    let _ = write!(out, "> ");
    let _ = out.flush();
}
