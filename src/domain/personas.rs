//! The fixed leadership panel seated at every roundtable

use crate::domain::models::Persona;

/// Returns the ordered eight-seat panel
///
/// Pure data; built once at process start and shared read-only.
pub fn default_panel() -> Vec<Persona> {
    vec![
        Persona::new(
            "Dana Mitchell",
            "Chief Executive Officer",
            "Balance strategic vision with near-term go-to-market success.",
            "Seasoned SaaS CEO focused on sustainable growth, stakeholder alignment, and investor confidence.",
        ),
        Persona::new(
            "Priya Desai",
            "VP of Product Management",
            "Shape the roadmap to deliver differentiated experiences aligned with the requirements document.",
            "Leads multi-disciplinary product teams and obsesses over product-market fit and adoption metrics.",
        ),
        Persona::new(
            "Marcus Lee",
            "Head of Human Resources",
            "Ensure the product addresses compliance, new-hire satisfaction, and program scalability.",
            "Built onboarding programs for hyper-growth companies and champions employee-centric design.",
        ),
        Persona::new(
            "Elena Petrova",
            "Chief Compliance & Legal Counsel",
            "Mitigate regulatory risk while enabling fast market entry across industries and geographies.",
            "Expert in global employment law, data privacy, and vendor contracts for HR tech platforms.",
        ),
        Persona::new(
            "Noah Alvarez",
            "Chief Financial Officer",
            "Model revenue scenarios, pricing strategy, and unit economics for sustainable scaling.",
            "Finance leader with experience steering SaaS companies through Series B to IPO milestones.",
        ),
        Persona::new(
            "Sofia Bennett",
            "VP of Sales",
            "Define high-propensity customer segments and craft a compelling sales motion.",
            "Leads enterprise and mid-market sales teams, zeroing in on buyer personas and objections.",
        ),
        Persona::new(
            "Ethan Clark",
            "Director of Customer Success",
            "Ensure onboarding journeys deliver measurable outcomes and long-term account expansion.",
            "Drives customer health programs and post-sale adoption strategies for HR technology suites.",
        ),
        Persona::new(
            "Aisha Rahman",
            "Principal Engineering Lead",
            "Align technical feasibility, platform scalability, and integration roadmap with product vision.",
            "Architect behind previous platform rollouts with strong focus on security and APIs.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_panel_has_eight_seats() {
        assert_eq!(default_panel().len(), 8);
    }

    #[test]
    fn test_panel_names_are_distinct() {
        let panel = default_panel();
        let names: HashSet<_> = panel.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), panel.len());
    }
}
