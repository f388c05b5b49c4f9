use std::io::Read;
use std::process::ExitCode;

use codespan_reporting::files::SimpleFile;
use polc::lexer::Lexer;
use polc::postfix;

use crate::cli::{Cli, Notation};
use crate::editor::{Editor, EditorRead};
use crate::report::Report;

pub struct Driver {
    file:       Option<SimpleFile<String, String>>,
    notation:   Notation,
    print_tree: bool,
    quiet:      bool,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(<Cli as clap::Parser>::parse())
    }

    fn read_stdin() -> String {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .expect("Should read input from stdin");
        input
    }

    #[must_use]
    fn from_config(cfg: Cli) -> Self {
        let file = if cfg.stdin {
            Some(SimpleFile::new("<stdin>".to_string(), Self::read_stdin()))
        } else {
            cfg.file.map(|path| {
                let source = std::fs::read_to_string(&path).expect("Should be valid file path");
                SimpleFile::new(path, source)
            })
        };
        Self {
            file,
            notation: cfg.notation,
            print_tree: cfg.print_tree,
            quiet: cfg.quiet,
        }
    }

    #[must_use]
    pub fn run(self) -> ExitCode {
        if let Some(file) = &self.file {
            if self.eval_source(file.name(), file.source()) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        } else {
            let _ = self.repl();
            ExitCode::SUCCESS
        }
    }

    fn report<E: Report>(&self, err: &E, name: &str, source: &str) {
        if self.quiet {
            return;
        }
        let file = SimpleFile::new(name, source);
        err.report(&file);
    }

    fn eval_source(&self, name: &str, source: &str) -> bool {
        match self.notation {
            Notation::Prefix => self.eval_prefix(name, source),
            Notation::Postfix => self.eval_postfix(name, source),
        }
    }

    fn eval_prefix(&self, name: &str, source: &str) -> bool {
        let expr = match polc::parse_complete(source) {
            Ok(expr) => expr,
            Err(err) => {
                self.report(&err, name, source);
                return false;
            }
        };

        if self.print_tree {
            println!("{expr}");
        }

        match poltree::eval(&expr) {
            Ok(value) => {
                println!("{value}");
                true
            }
            Err(err) => {
                self.report(&err, name, source);
                false
            }
        }
    }

    fn eval_postfix(&self, name: &str, source: &str) -> bool {
        match postfix::eval_postfix(Lexer::new(source)) {
            Ok(value) => {
                println!("{value}");
                true
            }
            Err(err) => {
                self.report(&err, name, source);
                false
            }
        }
    }

    fn repl(&self) -> std::io::Result<()> {
        let mut editor = Editor::default();
        loop {
            match editor.read()? {
                EditorRead::Line(input) => {
                    self.eval_source("<repl>", &input);
                }
                EditorRead::Empty => {}
                EditorRead::Quit => break,
            }
        }

        Ok(())
    }
}
