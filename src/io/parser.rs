//! Input file parser.
//!
//! # Format
//!
//! Whitespace-delimited, one record per line:
//!
//! ```text
//! <num_contributors> <num_projects>
//! <name> <num_skills>                                   ┐ per contributor
//! <skill> <level>            (num_skills lines)         ┘
//! <name> <days> <score> <best_before> <num_roles>       ┐ per project
//! <skill> <level>            (num_roles lines)          ┘
//! ```
//!
//! Blank lines are skipped. Any other deviation is fatal and reported
//! with its 1-based line number.

use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Result, StaffingError};
use crate::models::{Contributor, Project, Repository, Requirement};

/// Parses an input document.
///
/// # Example
/// ```
/// use u_staffing::io::parse_str;
///
/// let repo = parse_str("1 1\nAnna 1\nC++ 2\nLogging 5 10 5 1\nC++ 3\n").unwrap();
/// assert_eq!(repo.contributors[0].skill_level("C++"), Some(2));
/// assert_eq!(repo.projects[0].requirements[0].level, 3);
/// ```
pub fn parse_str(text: &str) -> Result<Repository> {
    let mut reader = LineReader::new(text);

    let (line, fields) = reader.next_record("header", 2)?;
    let num_contributors: usize = parse_field(line, "contributor count", fields[0])?;
    let num_projects: usize = parse_field(line, "project count", fields[1])?;

    let mut contributors = Vec::with_capacity(num_contributors);
    for _ in 0..num_contributors {
        contributors.push(parse_contributor(&mut reader)?);
    }

    let mut projects = Vec::with_capacity(num_projects);
    for _ in 0..num_projects {
        projects.push(parse_project(&mut reader)?);
    }

    if let Some((line, _)) = reader.next_non_blank() {
        return Err(StaffingError::parse(line, "unexpected trailing content"));
    }

    debug!(
        contributors = contributors.len(),
        projects = projects.len(),
        "input parsed"
    );
    Ok(Repository::new(contributors, projects))
}

/// Reads and parses an input file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Repository> {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text)
}

fn parse_contributor(reader: &mut LineReader<'_>) -> Result<Contributor> {
    let (line, fields) = reader.next_record("contributor header", 2)?;
    let mut contributor = Contributor::new(fields[0]);
    let num_skills: usize = parse_field(line, "skill count", fields[1])?;

    for _ in 0..num_skills {
        let (line, fields) = reader.next_record("skill", 2)?;
        let level: u32 = parse_field(line, "skill level", fields[1])?;
        if contributor.skills.insert(fields[0].to_string(), level).is_some() {
            return Err(StaffingError::parse(
                line,
                format!("contributor '{}' lists skill '{}' twice", contributor.name, fields[0]),
            ));
        }
    }
    Ok(contributor)
}

fn parse_project(reader: &mut LineReader<'_>) -> Result<Project> {
    let (line, fields) = reader.next_record("project header", 5)?;
    let duration: u32 = parse_field(line, "duration", fields[1])?;
    let score: f64 = parse_field(line, "score", fields[2])?;
    if !score.is_finite() {
        return Err(StaffingError::parse(
            line,
            format!("score must be finite, got '{}'", fields[2]),
        ));
    }
    let best_before: u32 = parse_field(line, "best-before day", fields[3])?;
    let num_requirements: usize = parse_field(line, "requirement count", fields[4])?;

    let mut project = Project::new(fields[0], duration, score, best_before);
    for _ in 0..num_requirements {
        let (line, fields) = reader.next_record("requirement", 2)?;
        let level: u32 = parse_field(line, "required level", fields[1])?;
        project.requirements.push(Requirement::new(fields[0], level));
    }
    Ok(project)
}

fn parse_field<T: FromStr>(line: usize, what: &str, token: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| StaffingError::parse(line, format!("invalid {what}: '{token}'")))
}

/// Line iterator that tracks 1-based line numbers.
struct LineReader<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            last_line: 0,
        }
    }

    fn next_non_blank(&mut self) -> Option<(usize, Vec<&'a str>)> {
        for (idx, raw) in self.lines.by_ref() {
            self.last_line = idx + 1;
            let fields: Vec<&str> = raw.split_whitespace().collect();
            if !fields.is_empty() {
                return Some((idx + 1, fields));
            }
        }
        None
    }

    fn next_record(&mut self, what: &str, arity: usize) -> Result<(usize, Vec<&'a str>)> {
        let Some((line, fields)) = self.next_non_blank() else {
            return Err(StaffingError::parse(
                self.last_line + 1,
                format!("unexpected end of input, expected {what}"),
            ));
        };
        if fields.len() != arity {
            return Err(StaffingError::parse(
                line,
                format!("expected {what} with {arity} fields, found {}", fields.len()),
            ));
        }
        Ok((line, fields))
    }
}
