//! Plan output writer.
//!
//! # Format
//!
//! ```text
//! <number of assignments>
//! <project name>
//! <contributor> <contributor> ...   (one per requirement, in order)
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::StaffingPlan;

/// Writes a plan in submission format.
pub fn write_plan<W: Write>(plan: &StaffingPlan, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", plan.assignment_count())?;
    for assignment in &plan.assignments {
        writeln!(writer, "{}", assignment.project)?;
        writeln!(writer, "{}", assignment.contributors.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a plan to a file, replacing it.
pub fn write_plan_file(plan: &StaffingPlan, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_plan(plan, BufWriter::new(file))
}

/// Renders a plan to a string.
pub fn render_plan(plan: &StaffingPlan) -> String {
    let mut out = format!("{}\n", plan.assignment_count());
    for assignment in &plan.assignments {
        out.push_str(&assignment.project);
        out.push('\n');
        out.push_str(&assignment.contributors.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Assignment;

    fn plan() -> StaffingPlan {
        let mut plan = StaffingPlan::new();
        plan.extend(vec![
            Assignment::new("WebServer", vec!["Bob".into(), "Anna".into()], 0),
            Assignment::new("Logging", vec!["Anna".into()], 7),
        ]);
        plan
    }

    #[test]
    fn test_render() {
        assert_eq!(render_plan(&plan()), "2\nWebServer\nBob Anna\nLogging\nAnna\n");
    }

    #[test]
    fn test_write_matches_render() {
        let mut buf = Vec::new();
        write_plan(&plan(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_plan(&plan()));
    }

    #[test]
    fn test_empty_plan() {
        assert_eq!(render_plan(&StaffingPlan::new()), "0\n");
    }
}
