//! Interactive session: import prompt followed by the task menu

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::example::{self, ExampleGenerator, ExampleRequest};
use crate::task::{self, DueDate, ExportMode, TaskError, TaskList, CANCEL_TOKEN};

const HELP_TOKEN: &str = "help";
const EXIT_TOKEN: &str = "exit";

const MENU: &str = "\
  1) List tasks
  2) Complete a task
  3) Create a task
  4) Export tasks
  help) Show help
  exit) Quit";

const MENU_HELP: &str = "\
List shows every task in the order it was added.
Complete numbers only the incomplete tasks; pick a task by that number.
Create asks for a name, an optional category and a due date (YYYY_MM_DD).
Export writes all tasks to a file, replacing it (1) or adding to the end (2).
Type 'cancel' at any prompt inside an action to return to the menu.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct SessionOptions {
    pub example_count: usize,
    pub default_file: Option<PathBuf>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            example_count: 5,
            default_file: None,
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    list: TaskList,
    examples: Option<ExampleGenerator>,
    options: SessionOptions,
    current_file: Option<PathBuf>,
}

/// Run an interactive session on stdin/stdout
pub fn run(file: Option<PathBuf>) -> Result<()> {
    let config = Config::load()?;
    let options = SessionOptions {
        example_count: config.examples.count,
        default_file: config.tasks.default_file.clone(),
    };
    let generator = example::from_config(&config.examples);

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), options).with_examples(generator);

    session.run(file.or(config.tasks.default_file))
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            list: TaskList::new(),
            examples: None,
            options,
            current_file: None,
        }
    }

    pub fn with_examples(mut self, generator: ExampleGenerator) -> Self {
        self.examples = Some(generator);
        self
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, initial_file: Option<PathBuf>) -> Result<()> {
        let mut imported = false;
        if let Some(path) = initial_file {
            imported = self.try_import(&path)?;
        }

        if !imported && self.import_prompt()? == Flow::Exit {
            return Ok(());
        }

        while self.menu()? == Flow::Continue {}
        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Read one trimmed line, or `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}\n> ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn import_prompt(&mut self) -> Result<Flow> {
        loop {
            let Some(answer) = self.prompt(
                "Enter a file to import tasks from, 'help' to see example records,\n\
                 or press Enter to start fresh.",
            )?
            else {
                return Ok(Flow::Exit);
            };

            match answer.as_str() {
                "" => {
                    writeln!(self.output, "Starting fresh!")?;
                    return Ok(Flow::Continue);
                }
                HELP_TOKEN => self.show_examples()?,
                path => {
                    if self.try_import(Path::new(path))? {
                        return Ok(Flow::Continue);
                    }
                }
            }
        }
    }

    /// Import into a fresh list. On any failure the list stays as it was.
    fn try_import(&mut self, path: &Path) -> Result<bool> {
        writeln!(self.output, "Opening file '{}'...", path.display())?;

        let mut list = TaskList::new();
        match task::import(path, &mut list) {
            Ok(result) => {
                self.list = list;
                self.current_file = Some(result.path);
                writeln!(
                    self.output,
                    "Imported {} task(s), {} incomplete.",
                    result.imported,
                    self.list.num_incomplete()
                )?;
                Ok(true)
            }
            Err(e) if e.is_open_failure() => {
                writeln!(self.output, "Could not open: {}", e)?;
                Ok(false)
            }
            Err(e) => {
                writeln!(self.output, "Could not import: {}", e)?;
                writeln!(
                    self.output,
                    "Nothing was imported. Fix the file or choose another."
                )?;
                Ok(false)
            }
        }
    }

    fn show_examples(&mut self) -> Result<()> {
        let count = self.options.example_count;
        let Some(generator) = self.examples.as_mut() else {
            writeln!(self.output, "No example generator is available.")?;
            return Ok(());
        };

        writeln!(
            self.output,
            "Generating examples (waiting up to {}s)...",
            generator.timeout().as_secs()
        )?;
        match generator.request(ExampleRequest { count }) {
            Ok(block) => {
                writeln!(self.output, "Example task file:\n")?;
                write!(self.output, "{}", block)?;
                writeln!(self.output)?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn menu(&mut self) -> Result<Flow> {
        let summary = self.list.summary();
        writeln!(
            self.output,
            "\n{} task(s), {} incomplete\n{}",
            summary.total, summary.incomplete, MENU
        )?;

        let Some(choice) = self.prompt("Choose an option:")? else {
            return Ok(Flow::Exit);
        };
        debug!(choice = %choice, "Menu choice");

        match choice.as_str() {
            "1" => self.list_tasks(),
            "2" => self.complete_task(),
            "3" => self.create_task(),
            "4" => self.export_tasks(),
            HELP_TOKEN => {
                writeln!(self.output, "{}", MENU_HELP)?;
                Ok(Flow::Continue)
            }
            EXIT_TOKEN => Ok(Flow::Exit),
            other => {
                writeln!(self.output, "Unknown option '{}'.", other)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn list_tasks(&mut self) -> Result<Flow> {
        if self.list.is_empty() {
            writeln!(self.output, "No tasks yet.")?;
            return Ok(Flow::Continue);
        }

        for (i, task) in self.list.tasks().iter().enumerate() {
            writeln!(self.output, "{:>3}. {}", i + 1, super::format_task(task))?;
        }
        Ok(Flow::Continue)
    }

    fn complete_task(&mut self) -> Result<Flow> {
        if self.list.num_incomplete() == 0 {
            writeln!(self.output, "There are no incomplete tasks.")?;
            return Ok(Flow::Continue);
        }

        for (number, task) in self.list.incomplete() {
            writeln!(self.output, "{:>3}. {}", number, super::format_task(task))?;
        }

        let Some(answer) = self.prompt("Number of the task to complete (or 'cancel'):")? else {
            return Ok(Flow::Exit);
        };
        if answer == CANCEL_TOKEN {
            writeln!(self.output, "Cancelled.")?;
            return Ok(Flow::Continue);
        }

        let Ok(selector) = answer.parse::<usize>() else {
            writeln!(self.output, "'{}' is not a task number.", answer)?;
            return Ok(Flow::Continue);
        };

        match self.list.complete_task(selector) {
            Ok(task) => {
                let line = super::format_task(task);
                writeln!(self.output, "Completed: {}", line)?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn create_task(&mut self) -> Result<Flow> {
        let name = loop {
            let Some(name) = self.prompt("Task name (or 'cancel'):")? else {
                return Ok(Flow::Exit);
            };
            if !name.is_empty() {
                break name;
            }
            writeln!(self.output, "{}", TaskError::EmptyName)?;
        };
        if name == CANCEL_TOKEN {
            writeln!(self.output, "Cancelled.")?;
            return Ok(Flow::Continue);
        }

        let Some(category) = self.prompt("Category (press Enter for none):")? else {
            return Ok(Flow::Exit);
        };
        if category == CANCEL_TOKEN {
            writeln!(self.output, "Cancelled.")?;
            return Ok(Flow::Continue);
        }

        let due = loop {
            let Some(answer) = self.prompt("Due date (YYYY_MM_DD):")? else {
                return Ok(Flow::Exit);
            };
            if answer == CANCEL_TOKEN {
                writeln!(self.output, "Cancelled.")?;
                return Ok(Flow::Continue);
            }
            match DueDate::parse_input(&answer) {
                Some(due) => break due,
                None => writeln!(self.output, "'{}' is not a YYYY_MM_DD date.", answer)?,
            }
        };

        match self.list.create_task(&name, &category, due) {
            Ok(task) => {
                let line = super::format_task(task);
                writeln!(self.output, "Created: {}", line)?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn export_tasks(&mut self) -> Result<Flow> {
        let fallback = self
            .current_file
            .clone()
            .or_else(|| self.options.default_file.clone());

        let message = match &fallback {
            Some(path) => format!(
                "File to export to (Enter for '{}', or 'cancel'):",
                path.display()
            ),
            None => "File to export to (or 'cancel'):".to_string(),
        };

        let path = loop {
            let Some(answer) = self.prompt(&message)? else {
                return Ok(Flow::Exit);
            };
            if answer == CANCEL_TOKEN {
                writeln!(self.output, "Cancelled.")?;
                return Ok(Flow::Continue);
            }
            if !answer.is_empty() {
                break PathBuf::from(answer);
            }
            if let Some(path) = &fallback {
                break path.clone();
            }
        };

        let mode = loop {
            let Some(answer) = self.prompt("1) Overwrite  2) Append  (or 'cancel'):")? else {
                return Ok(Flow::Exit);
            };
            if answer == CANCEL_TOKEN {
                writeln!(self.output, "Cancelled.")?;
                return Ok(Flow::Continue);
            }
            match ExportMode::from_menu_token(&answer) {
                Some(mode) => break mode,
                None => writeln!(self.output, "Choose 1 or 2.")?,
            }
        };

        match task::export(&path, mode, &self.list) {
            Ok(written) => {
                info!(path = %path.display(), written, "Session export");
                writeln!(
                    self.output,
                    "Exported {} task(s) to '{}'.",
                    written,
                    path.display()
                )?;
            }
            Err(e) => writeln!(self.output, "Export failed: {}", e)?,
        }
        Ok(Flow::Continue)
    }
}
