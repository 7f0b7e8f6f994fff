//! Line-oriented driver for a [`Session`].
//!
//! Each input line is one command. Mutating commands print the recomputed
//! totals straight away, the same way the calculator page refreshes after
//! every edit.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::calculator::{AggregateResult, ModuleEntry};
use crate::output::{format_breakdown, format_totals, save_report};
use crate::parser::parse_credits;
use crate::report::{GpaReport, Period, ReportFormat};
use crate::scale::GradeScale;
use crate::session::{ModuleId, ModuleUpdate, Session};

pub const HELP: &str = "\
Commands:
  add [name, grade, credits]   add a module row (all parts optional)
  name <id> <text>             rename a module
  grade <id> [grade]           set a grade, or clear it when omitted
  credits <id> <value>         set credits
  remove <id>                  remove a module
  list                         show all modules and the GPA
  scale                        show the grading scale
  export                       save a report
  help                         show this help
  quit                         leave the shell
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(ModuleEntry),
    Name(ModuleId, String),
    Grade(ModuleId, Option<String>),
    Credits(ModuleId, f64),
    Remove(ModuleId),
    List,
    Scale,
    Export,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => Command::Add(parse_add(rest)),
        "name" => {
            let (id, text) = split_id(rest)?;
            Command::Name(id, text.to_string())
        }
        "grade" => {
            let (id, grade) = split_id(rest)?;
            Command::Grade(id, (!grade.is_empty()).then(|| grade.to_string()))
        }
        "credits" => {
            let (id, value) = split_id(rest)?;
            if value.is_empty() {
                bail!("usage: credits <id> <value>");
            }
            Command::Credits(id, parse_credits(value))
        }
        "remove" | "rm" => Command::Remove(split_id(rest)?.0),
        "list" | "ls" => Command::List,
        "scale" => Command::Scale,
        "export" => Command::Export,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command '{other}', try 'help'"),
    };

    Ok(Some(command))
}

/// `name, grade, credits`, each part optional.
fn parse_add(rest: &str) -> ModuleEntry {
    let mut parts = rest.splitn(3, ',').map(str::trim);
    let name = parts.next().unwrap_or("");
    let grade = parts.next().unwrap_or("");
    let credits = parts.next().unwrap_or("");

    ModuleEntry {
        name: name.to_string(),
        grade: (!grade.is_empty()).then(|| grade.to_string()),
        credits: parse_credits(credits),
    }
}

fn split_id(rest: &str) -> Result<(ModuleId, &str)> {
    let (raw_id, tail) = match rest.split_once(char::is_whitespace) {
        Some((id, tail)) => (id, tail.trim()),
        None => (rest, ""),
    };
    if raw_id.is_empty() {
        bail!("missing module id");
    }
    let id = raw_id
        .parse::<u32>()
        .with_context(|| format!("invalid module id '{raw_id}'"))?;
    Ok((ModuleId(id), tail))
}

/// Interactive session state plus export settings.
pub struct Shell {
    session: Session,
    period: Period,
    subject: String,
    report_dir: PathBuf,
    format: ReportFormat,
}

impl Shell {
    pub fn new(period: Period, subject: String, report_dir: PathBuf, format: ReportFormat) -> Self {
        Self {
            session: Session::new(),
            period,
            subject,
            report_dir,
            format,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<()> {
        writeln!(out, "GPA calculator, type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command, &mut out)?,
                Ok(None) => {}
                Err(e) => {
                    debug!(error = %e, line, "Rejected shell input");
                    writeln!(out, "error: {e:#}")?;
                }
            }
        }

        info!(modules = self.session.len(), "Shell session ended");
        Ok(())
    }

    /// Applies one command and writes its response to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::Add(entry) => {
                let (id, result) = self.session.add_module(entry);
                writeln!(out, "added module {id}")?;
                write_totals(out, &result)?;
            }
            Command::Name(id, name) => {
                self.apply(id, ModuleUpdate::name(name), out)?;
            }
            Command::Grade(id, grade) => {
                if let Some(g) = grade.as_deref() {
                    if GradeScale::standard().lookup(g).is_none() {
                        writeln!(out, "note: '{g}' is not on the grading scale and will not count")?;
                    }
                }
                self.apply(id, ModuleUpdate::grade(grade.as_deref()), out)?;
            }
            Command::Credits(id, credits) => {
                self.apply(id, ModuleUpdate::credits(credits), out)?;
            }
            Command::Remove(id) => match self.session.remove_module(id) {
                Some(result) => {
                    writeln!(out, "removed module {id}")?;
                    write_totals(out, &result)?;
                }
                None => writeln!(out, "no module with id {id}")?,
            },
            Command::List => {
                if self.session.is_empty() {
                    writeln!(out, "No modules yet. Use 'add' to create one.")?;
                } else {
                    let labels: Vec<String> =
                        self.session.rows().map(|(id, _)| id.to_string()).collect();
                    let result = self.session.compute();
                    write!(
                        out,
                        "{}",
                        format_breakdown(&labels, self.session.modules(), &result)
                    )?;
                }
            }
            Command::Scale => {
                for entry in GradeScale::standard().entries() {
                    writeln!(
                        out,
                        "{:<3} {:>4} {:>8}",
                        entry.grade,
                        format!("{:.1}", entry.gpa_value),
                        entry.marks_range()
                    )?;
                }
            }
            Command::Export => {
                if !self.session.can_export() {
                    writeln!(out, "Nothing to export yet: add a graded module with credits.")?;
                    return Ok(());
                }
                let report = GpaReport::build(
                    self.session.modules(),
                    self.period.clone(),
                    &self.subject,
                    Utc::now(),
                );
                match save_report(&self.report_dir, &report, self.format.renderer().as_ref()) {
                    Ok(path) => writeln!(out, "saved {}", path.display())?,
                    Err(e) => {
                        warn!(error = %e, "Report export failed");
                        writeln!(out, "error: {e:#}")?;
                    }
                }
            }
            Command::Help => write!(out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn apply<W: Write>(&mut self, id: ModuleId, update: ModuleUpdate, out: &mut W) -> Result<()> {
        match self.session.update_module(id, update) {
            Some(result) => write_totals(out, &result)?,
            None => writeln!(out, "no module with id {id}")?,
        }
        Ok(())
    }
}

fn write_totals<W: Write>(out: &mut W, result: &AggregateResult) -> Result<()> {
    write!(out, "{}", format_totals(result))?;
    Ok(())
}
