pub struct ProblemCard {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub impact: &'static str,
}

pub struct ValueCard {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub day: &'static str,
}

pub struct Deliverable {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct PriceStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ENGAGEMENT_META: &str = "$3,500 · 5 to 7 business days · Full deliverable";

pub const PROBLEMS: [ProblemCard; 4] = [
    ProblemCard {
        num: "01",
        title: "Pipeline Decay",
        desc: "Leads enter and disappear due to inconsistent follow-up.",
        impact: "Direct revenue leakage · Measurable · Recoverable",
    },
    ProblemCard {
        num: "02",
        title: "Fulfillment Friction",
        desc: "Manual handoffs break between commitment and value delivery.",
        impact: "Churn · Refund exposure · Reputation damage",
    },
    ProblemCard {
        num: "03",
        title: "Reporting Blindness",
        desc: "Decisions made on instinct, data not clean or fast enough.",
        impact: "Slow decisions · Missed inflection points · Reactive management",
    },
    ProblemCard {
        num: "04",
        title: "Hiring to Compensate",
        desc: "Headcount added to manage what systems should handle.",
        impact: "$45K to $85K per role that should not exist",
    },
];

pub const VALUES: [ValueCard; 3] = [
    ValueCard {
        num: "1%",
        title: "Conversion recovery",
        desc: "One percent improvement in fulfillment conversion at $10M revenue recovers $100K annually. Most audits surface 3 to 5 recoverable gaps of this scale.",
    },
    ValueCard {
        num: "$85K",
        title: "Cost of one compensatory hire",
        desc: "Every role added to manage what systems should handle is capital that compounds against you.",
    },
    ValueCard {
        num: "90 days",
        title: "Time to measurable ROI",
        desc: "Every roadmap is prioritised by financial impact and implementation speed. Highest-return fixes sequenced first.",
    },
];

pub const PROCESS: [ProcessStep; 5] = [
    ProcessStep {
        step: "Step 01",
        title: "Structured Intake",
        desc: "Detailed operational questionnaire, revenue flow, team structure, tool stack, process architecture.",
        day: "Day 1",
    },
    ProcessStep {
        step: "Step 02",
        title: "Stakeholder Interviews",
        desc: "Focused sessions across operations, sales, fulfillment with targeted questions.",
        day: "Days 2 to 3",
    },
    ProcessStep {
        step: "Step 03",
        title: "Systems Architecture Mapping",
        desc: "Full documentation of operational infrastructure, tool connections, data flows, failure nodes.",
        day: "Days 3 to 4",
    },
    ProcessStep {
        step: "Step 04",
        title: "Revenue Impact Modeling",
        desc: "Every inefficiency translated into financial figures using actual data, actual volume, actual timelines.",
        day: "Days 4 to 5",
    },
    ProcessStep {
        step: "Step 05",
        title: "Roadmap Delivery",
        desc: "Full written report, systems maps, revenue model, prioritised implementation roadmap.",
        day: "Days 5 to 7",
    },
];

pub const DELIVERABLES: [Deliverable; 6] = [
    Deliverable {
        num: "01",
        title: "Systems Architecture Map",
        desc: "Visual map of tool connections, data flows, handoff points, failure nodes.",
    },
    Deliverable {
        num: "02",
        title: "Revenue Impact Model",
        desc: "Financial model by process, by department, total annual cost. Actual numbers not estimates.",
    },
    Deliverable {
        num: "03",
        title: "Process Timeline Breakdown",
        desc: "Step-by-step breakdown of critical workflows, where time is lost, where delays compound.",
    },
    Deliverable {
        num: "04",
        title: "Gap Analysis Report",
        desc: "Every systems gap ranked by financial impact and implementation complexity.",
    },
    Deliverable {
        num: "05",
        title: "Prioritised Implementation Roadmap",
        desc: "Sequenced plan with financial impact estimate per intervention.",
    },
    Deliverable {
        num: "06",
        title: "Walkthrough Recording",
        desc: "Recorded video of all findings built for stakeholder distribution.",
    },
];

pub const PRICE_STATS: [PriceStat; 3] = [
    PriceStat { value: "5 to 7", label: "Business Days" },
    PriceStat { value: "Private", label: "Full Confidentiality" },
    PriceStat { value: "100%", label: "Focused On Your Business" },
];

pub const INCLUSIONS: [&str; 8] = [
    "Systems architecture mapping",
    "Revenue impact model",
    "Stakeholder interview sessions",
    "Process timeline breakdown",
    "Full gap analysis report",
    "Prioritised implementation roadmap",
    "Walkthrough recording",
    "30-day findings support",
];

pub const QUALIFICATIONS: [&str; 5] = [
    "Revenue between $1M and $20M annually",
    "Growing but operationally strained by that growth",
    "Friction in sales, fulfillment, onboarding, or reporting",
    "Adding headcount to manage what systems should handle",
    "Prepared to invest in structural improvement not surface fixes",
];

pub const PRICE_NOTICE: &str = "Important: This engagement covers the full diagnostic analysis and implementation roadmap only. Deployment of identified solutions, infrastructure buildout, and ongoing systems management are priced separately based on scope. Your roadmap will include a clear outline and investment estimate for any recommended implementation work.";

pub const NOT_FOR: &str = "This engagement is not suited for pre-revenue startups, enterprises with dedicated operations functions, or companies not prepared to act on findings. If the roadmap sits in a folder unused, this is not the right engagement.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn numbering_is_sequential() {
        for (idx, card) in PROBLEMS.iter().enumerate() {
            assert_eq!(card.num, format!("{:02}", idx + 1));
        }
        for (idx, item) in DELIVERABLES.iter().enumerate() {
            assert_eq!(item.num, format!("{:02}", idx + 1));
        }
        for (idx, step) in PROCESS.iter().enumerate() {
            assert_eq!(step.step, format!("Step {:02}", idx + 1));
        }
    }

    #[test]
    fn quoted_price_matches_checkout_price() {
        assert!(ENGAGEMENT_META.contains(config::ENGAGEMENT_PRICE));
    }

    #[test]
    fn process_ends_on_the_last_business_day() {
        assert_eq!(PROCESS[PROCESS.len() - 1].day, "Days 5 to 7");
        assert_eq!(PRICE_STATS[0].value, "5 to 7");
    }
}
