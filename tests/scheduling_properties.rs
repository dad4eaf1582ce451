//! Plan-level invariants checked over seeded random instances.

use std::collections::{HashMap, HashSet};

use u_staffing::generator::InstanceGenerator;
use u_staffing::io::{parse_str, render_plan};
use u_staffing::models::{Repository, StaffingPlan};
use u_staffing::scheduler::{PlanKpi, StaffingScheduler};
use u_staffing::SchedulerConfig;

fn instances() -> Vec<Repository> {
    (0..25)
        .map(|seed| {
            InstanceGenerator::new(seed)
                .with_contributors(3 + (seed as usize % 5))
                .with_projects(6 + (seed as usize % 9))
                .with_skills(4)
                .with_max_roles(3)
                .with_max_duration(5)
                .generate()
        })
        .collect()
}

fn run(repo: &Repository) -> StaffingPlan {
    StaffingScheduler::new()
        .with_config(SchedulerConfig::new().with_horizon(60))
        .run(repo)
        .expect("generated instances are valid")
}

#[test]
fn no_contributor_works_two_projects_at_once() {
    for repo in instances() {
        let plan = run(&repo);
        let mut busy_until: HashMap<&str, u32> = HashMap::new();

        for a in &plan.assignments {
            let project = repo.project(&a.project).unwrap();
            let unique: HashSet<&String> = a.contributors.iter().collect();
            assert_eq!(
                unique.len(),
                a.contributors.len(),
                "{} staffed twice by one person",
                a.project
            );

            for name in &a.contributors {
                if let Some(&until) = busy_until.get(name.as_str()) {
                    assert!(
                        a.start_day >= until,
                        "{name} reassigned on day {} but busy until {until}",
                        a.start_day
                    );
                }
                busy_until.insert(name.as_str(), a.start_day + project.duration);
            }
        }
    }
}

#[test]
fn every_assignment_is_fully_staffed() {
    for repo in instances() {
        let plan = run(&repo);
        for a in &plan.assignments {
            let project = repo.project(&a.project).unwrap();
            assert_eq!(a.contributors.len(), project.slot_count());
            for (name, requirement) in a.contributors.iter().zip(&project.requirements) {
                let contributor = repo.contributor(name).unwrap();
                assert!(
                    contributor.has_skill(&requirement.skill),
                    "{name} lacks {} for {}",
                    requirement.skill,
                    a.project
                );
            }
        }
    }
}

#[test]
fn projects_are_committed_at_most_once() {
    for repo in instances() {
        let plan = run(&repo);
        let mut seen = HashSet::new();
        for a in &plan.assignments {
            assert!(seen.insert(a.project.clone()), "{} scheduled twice", a.project);
        }
    }
}

#[test]
fn days_are_emitted_in_order() {
    for repo in instances() {
        let plan = run(&repo);
        let days: Vec<u32> = plan.assignments.iter().map(|a| a.start_day).collect();
        let mut sorted = days.clone();
        sorted.sort_unstable();
        assert_eq!(days, sorted);
    }
}

#[test]
fn runs_are_deterministic() {
    for repo in instances().into_iter().take(5) {
        assert_eq!(run(&repo), run(&repo));
    }
}

#[test]
fn kpi_matches_plan() {
    for repo in instances() {
        let plan = run(&repo);
        let kpi = PlanKpi::calculate(&plan, &repo);
        assert_eq!(kpi.projects_completed, plan.assignment_count());
        assert_eq!(
            kpi.projects_completed + kpi.projects_unscheduled,
            repo.projects.len()
        );
        assert!(kpi.total_score >= 0.0);
        assert!(kpi.avg_utilization <= 1.0 + 1e-9);
    }
}

#[test]
fn single_contributor_end_to_end() {
    let repo = parse_str("1 1\nA 1\nC0 3\nP0 1 10 0 1\nC0 3\n").unwrap();
    let plan = StaffingScheduler::new().run(&repo).unwrap();
    assert_eq!(render_plan(&plan), "1\nP0\nA\n");
    assert_eq!(plan.assignments[0].start_day, 0);
}

#[test]
fn example_input_end_to_end() {
    let input = "\
3 3
Anna 1
C++ 2
Bob 2
HTML 5
CSS 5
Maria 1
Python 3
Logging 5 10 5 1
C++ 3
WebServer 7 10 7 2
HTML 3
C++ 2
WebChat 10 20 20 2
Python 3
HTML 3
";
    let repo = parse_str(input).unwrap();
    let plan = StaffingScheduler::new().run(&repo).unwrap();

    // Day 0: Logging (Anna) and WebChat (Maria, Bob) in input order.
    let day0: Vec<_> = plan.assignments_on(0).iter().map(|a| a.project.clone()).collect();
    assert_eq!(day0, vec!["Logging".to_string(), "WebChat".to_string()]);
    assert_eq!(
        plan.assignment_for_project("WebChat").unwrap().contributors,
        vec!["Maria".to_string(), "Bob".to_string()]
    );

    // WebServer waits for Bob (busy until day 10) and Anna (until day 5).
    let web = plan.assignment_for_project("WebServer").unwrap();
    assert_eq!(web.start_day, 10);
    assert_eq!(web.contributors, vec!["Bob".to_string(), "Anna".to_string()]);
}
