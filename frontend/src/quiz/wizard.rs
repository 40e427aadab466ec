//! Quiz wizard state machine.
//!
//! Every transition takes the context by value and hands back the next one.
//! Components drive it through `WizardAction` so delayed callbacks always
//! apply to the latest state.

use std::rc::Rc;

use yew::Reducible;

use super::recommendation::{recommend, Concern, Recommendation, Tier, Timeline};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Intro,
    Concern,
    Timeline,
    Result,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Step::Intro => 1,
            Step::Concern => 2,
            Step::Timeline => 3,
            Step::Result => 4,
        }
    }

    /// Width of the progress fill for this step, in percent.
    pub fn progress_percent(&self) -> u8 {
        match self {
            Step::Intro => 0,
            Step::Concern => 25,
            Step::Timeline => 50,
            Step::Result => 100,
        }
    }

    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    pub concern: Option<Concern>,
    pub timeline: Option<Timeline>,
}

impl QuizAnswers {
    pub fn is_complete(&self) -> bool {
        self.concern.is_some() && self.timeline.is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardState {
    #[default]
    Closed,
    Open(Step),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardContext {
    pub state: WizardState,
    pub answers: QuizAnswers,
    pub recommendation: Option<Recommendation>,
}

impl WizardContext {
    pub fn is_open(&self) -> bool {
        matches!(self.state, WizardState::Open(_))
    }

    pub fn step(&self) -> Option<Step> {
        match self.state {
            WizardState::Open(step) => Some(step),
            WizardState::Closed => None,
        }
    }

    /// Opening always starts over at the intro with nothing selected.
    pub fn open(self) -> Self {
        Self {
            state: WizardState::Open(Step::Intro),
            ..Self::default()
        }
    }

    pub fn close(self) -> Self {
        Self::default()
    }

    /// Whether the current step's "next" control is enabled.
    pub fn can_advance(&self) -> bool {
        match self.state {
            WizardState::Open(Step::Intro) => true,
            WizardState::Open(Step::Concern) => self.answers.concern.is_some(),
            WizardState::Open(Step::Timeline) => self.answers.is_complete(),
            _ => false,
        }
    }

    pub fn advance(self) -> Self {
        if !self.can_advance() {
            return self;
        }
        match self.state {
            WizardState::Open(Step::Intro) => Self {
                state: WizardState::Open(Step::Concern),
                ..self
            },
            WizardState::Open(Step::Concern) => Self {
                state: WizardState::Open(Step::Timeline),
                ..self
            },
            WizardState::Open(Step::Timeline) => {
                let recommendation = recommend(self.answers.concern, self.answers.timeline);
                Self {
                    state: WizardState::Open(Step::Result),
                    recommendation: Some(recommendation),
                    ..self
                }
            }
            _ => self,
        }
    }

    /// Ignored outside the concern step.
    pub fn select_concern(mut self, concern: Concern) -> Self {
        if self.state == WizardState::Open(Step::Concern) {
            self.answers.concern = Some(concern);
        }
        self
    }

    /// Ignored outside the timeline step.
    pub fn select_timeline(mut self, timeline: Timeline) -> Self {
        if self.state == WizardState::Open(Step::Timeline) {
            self.answers.timeline = Some(timeline);
        }
        self
    }

    /// Jump straight to the result for a tier picked outside the quiz.
    /// The answers are left untouched. A closed wizard stays closed.
    pub fn quick_select(self, tier: Tier) -> Self {
        if !self.is_open() {
            return self;
        }
        Self {
            state: WizardState::Open(Step::Result),
            recommendation: Some(Recommendation::quick_select(tier)),
            ..self
        }
    }

    /// Values attached to the lead form as `quiz_concern`, `quiz_timeline`
    /// and `quiz_recommendation`.
    pub fn lead_fields(&self) -> (String, String, String) {
        (
            self.answers
                .concern
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            self.answers
                .timeline
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            self.recommendation
                .as_ref()
                .map(|r| r.tier.name().to_string())
                .unwrap_or_default(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardAction {
    Open,
    Close,
    Advance,
    SelectConcern(Concern),
    SelectTimeline(Timeline),
    QuickSelect(Tier),
}

impl Reducible for WizardContext {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let ctx = (*self).clone();
        Rc::new(match action {
            WizardAction::Open => ctx.open(),
            WizardAction::Close => ctx.close(),
            WizardAction::Advance => ctx.advance(),
            WizardAction::SelectConcern(concern) => ctx.select_concern(concern),
            WizardAction::SelectTimeline(timeline) => ctx.select_timeline(timeline),
            WizardAction::QuickSelect(tier) => ctx.quick_select(tier),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::recommendation::Basis;

    fn completed_run() -> WizardContext {
        WizardContext::default()
            .open()
            .advance()
            .select_concern(Concern::History)
            .advance()
            .select_timeline(Timeline::Asap)
            .advance()
    }

    #[test]
    fn test_progress_widths() {
        assert_eq!(Step::Intro.progress_width(), "0%");
        assert_eq!(Step::Concern.progress_width(), "25%");
        assert_eq!(Step::Timeline.progress_width(), "50%");
        assert_eq!(Step::Result.progress_width(), "100%");
    }

    #[test]
    fn test_full_run_reaches_result() {
        let ctx = completed_run();
        assert_eq!(ctx.step(), Some(Step::Result));
        let rec = ctx.recommendation.as_ref().unwrap();
        assert_eq!(rec.tier, Tier::RentalResumeBuilder);
        assert_eq!(
            rec.basis,
            Basis::Quiz {
                concern: Some(Concern::History),
                timeline: Some(Timeline::Asap)
            }
        );
    }

    #[test]
    fn test_next_locked_until_selection() {
        let ctx = WizardContext::default().open().advance();
        assert_eq!(ctx.step(), Some(Step::Concern));
        assert!(!ctx.can_advance());

        let ctx = ctx.advance();
        assert_eq!(ctx.step(), Some(Step::Concern));

        let ctx = ctx.select_concern(Concern::Credit).advance();
        assert_eq!(ctx.step(), Some(Step::Timeline));
        assert!(!ctx.can_advance());
        assert_eq!(ctx.clone().advance().step(), Some(Step::Timeline));
        assert!(ctx.recommendation.is_none());
    }

    #[test]
    fn test_selecting_does_not_transition() {
        let ctx = WizardContext::default()
            .open()
            .advance()
            .select_concern(Concern::Income);
        assert_eq!(ctx.step(), Some(Step::Concern));
        assert_eq!(ctx.answers.concern, Some(Concern::Income));

        let ctx = ctx.select_concern(Concern::Credit);
        assert_eq!(ctx.answers.concern, Some(Concern::Credit));
    }

    #[test]
    fn test_selection_outside_its_step_is_ignored() {
        let ctx = WizardContext::default()
            .open()
            .select_concern(Concern::History)
            .select_timeline(Timeline::Asap);
        assert_eq!(ctx.answers, QuizAnswers::default());
    }

    #[test]
    fn test_reopen_resets_everything() {
        let ctx = completed_run().close();
        assert!(!ctx.is_open());

        let ctx = ctx.open();
        assert_eq!(ctx.step(), Some(Step::Intro));
        assert_eq!(ctx.answers, QuizAnswers::default());
        assert!(ctx.recommendation.is_none());
    }

    #[test]
    fn test_reopen_without_close_resets() {
        let ctx = completed_run().open();
        assert_eq!(ctx, WizardContext::default().open());
    }

    #[test]
    fn test_close_from_any_step() {
        let open = WizardContext::default().open();
        for ctx in [open.clone(), open.clone().advance(), completed_run()] {
            assert_eq!(ctx.close(), WizardContext::default());
        }
    }

    #[test]
    fn test_quick_select_bypasses_answers() {
        let ctx = WizardContext::default()
            .open()
            .quick_select(Tier::TotalTurnaroundPackage);
        assert_eq!(ctx.step(), Some(Step::Result));
        assert_eq!(ctx.answers, QuizAnswers::default());
        let rec = ctx.recommendation.unwrap();
        assert_eq!(rec.basis, Basis::QuickSelect);
        assert_eq!(rec.price(), "$599");
    }

    #[test]
    fn test_result_is_terminal_for_advance() {
        let ctx = completed_run();
        assert!(!ctx.can_advance());
        assert_eq!(ctx.clone().advance(), ctx);
    }

    #[test]
    fn test_lead_fields() {
        let (concern, timeline, tier) = completed_run().lead_fields();
        assert_eq!(concern, "history");
        assert_eq!(timeline, "asap");
        assert_eq!(tier, "Rental Résumé Builder");

        let (concern, timeline, tier) = WizardContext::default()
            .open()
            .quick_select(Tier::ApprovalPartnerProgram)
            .lead_fields();
        assert_eq!(concern, "");
        assert_eq!(timeline, "");
        assert_eq!(tier, "Approval Partner Program");
    }

    #[test]
    fn test_quick_select_keeps_closed_wizard_closed() {
        let closed = WizardContext::default().open().close();
        let ctx = closed.quick_select(Tier::RentalResumeBuilder);
        assert!(!ctx.is_open());
        assert!(ctx.recommendation.is_none());
        assert_eq!(ctx, WizardContext::default());
    }

    #[test]
    fn test_close_before_delayed_quick_select() {
        let ctx = Rc::new(WizardContext::default())
            .reduce(WizardAction::Open)
            .reduce(WizardAction::Close)
            .reduce(WizardAction::QuickSelect(Tier::ApprovalPartnerProgram));
        assert_eq!(*ctx, WizardContext::default());
    }

    #[test]
    fn test_actions_follow_transitions() {
        let ctx = Rc::new(WizardContext::default())
            .reduce(WizardAction::Open)
            .reduce(WizardAction::Advance)
            .reduce(WizardAction::SelectConcern(Concern::History))
            .reduce(WizardAction::Advance)
            .reduce(WizardAction::SelectTimeline(Timeline::Asap))
            .reduce(WizardAction::Advance);
        assert_eq!(*ctx, completed_run());

        let ctx = Rc::new(WizardContext::default())
            .reduce(WizardAction::Open)
            .reduce(WizardAction::QuickSelect(Tier::TotalTurnaroundPackage));
        assert_eq!(ctx.step(), Some(Step::Result));
    }
}
