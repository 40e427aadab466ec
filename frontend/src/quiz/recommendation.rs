use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Concern {
    History,
    Credit,
    Income,
}

impl Concern {
    pub const ALL: [Concern; 3] = [Concern::History, Concern::Credit, Concern::Income];

    pub fn as_str(&self) -> &'static str {
        match self {
            Concern::History => "history",
            Concern::Credit => "credit",
            Concern::Income => "income",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Concern::History => "No rental history",
            Concern::Credit => "Low or no credit score",
            Concern::Income => "Income doesn't meet requirements",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timeline {
    Asap,
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 2] = [Timeline::Asap, Timeline::Flexible];

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Asap => "asap",
            Timeline::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timeline::Asap => "As soon as possible",
            Timeline::Flexible => "I have a few months",
        }
    }
}

/// The three fixed offerings the quiz can point to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    RentalResumeBuilder,
    ApprovalPartnerProgram,
    TotalTurnaroundPackage,
}

impl Tier {
    pub const ALL: [Tier; 3] = [
        Tier::RentalResumeBuilder,
        Tier::ApprovalPartnerProgram,
        Tier::TotalTurnaroundPackage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::RentalResumeBuilder => "Rental Résumé Builder",
            Tier::ApprovalPartnerProgram => "Approval Partner Program",
            Tier::TotalTurnaroundPackage => "Total Turnaround Package",
        }
    }

    pub fn price(&self) -> &'static str {
        match self {
            Tier::RentalResumeBuilder => "$149",
            Tier::ApprovalPartnerProgram => "$349",
            Tier::TotalTurnaroundPackage => "$599",
        }
    }

    fn quiz_reasoning(&self) -> &'static str {
        match self {
            Tier::RentalResumeBuilder => "Since you need to move quickly and lack a formal history, this service will instantly build you a verifiable 4-year rental profile, making you a much stronger applicant in days, not months.",
            Tier::ApprovalPartnerProgram => "With financial hurdles, our co-applicant program is your fastest path to approval. We'll provide the credit score and income verification landlords need to say \"yes\" within 48 hours.",
            Tier::TotalTurnaroundPackage => "For more complex situations, our comprehensive package gives you a complete fresh start with credit building, rental history, and dedicated specialist support, backed by our Approval Guarantee.",
        }
    }

    fn pitch(&self) -> &'static str {
        match self {
            Tier::RentalResumeBuilder => "Perfect for building your rental profile quickly and effectively. Get verifiable rental history and professional documentation.",
            Tier::ApprovalPartnerProgram => "Ideal for getting immediate approval with financial backing. Our qualified co-signers help you meet and exceed requirements.",
            Tier::TotalTurnaroundPackage => "The comprehensive solution for complex situations with our strongest guarantee. Complete credit and rental history solution.",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tier::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTier(wanted.to_string()))
    }
}

/// Where a recommendation came from. Only quiz results carry answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Basis {
    Quiz {
        concern: Option<Concern>,
        timeline: Option<Timeline>,
    },
    QuickSelect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub tier: Tier,
    pub reasoning: &'static str,
    pub basis: Basis,
}

impl Recommendation {
    pub fn price(&self) -> &'static str {
        self.tier.price()
    }

    /// Recommendation for a tier picked directly from a service card.
    pub fn quick_select(tier: Tier) -> Self {
        Self {
            tier,
            reasoning: tier.pitch(),
            basis: Basis::QuickSelect,
        }
    }
}

/// Decision table, first match wins. Total over unset answers too.
pub fn recommend(concern: Option<Concern>, timeline: Option<Timeline>) -> Recommendation {
    let tier = match (concern, timeline) {
        (Some(Concern::History), Some(Timeline::Asap)) => Tier::RentalResumeBuilder,
        (Some(Concern::Credit | Concern::Income), Some(Timeline::Asap)) => {
            Tier::ApprovalPartnerProgram
        }
        _ => Tier::TotalTurnaroundPackage,
    };
    Recommendation {
        tier,
        reasoning: tier.quiz_reasoning(),
        basis: Basis::Quiz { concern, timeline },
    }
}
