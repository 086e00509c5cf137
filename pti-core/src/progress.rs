use std::fmt;

/// Amount added to savings by one demo update.
pub const SAVINGS_STEP: f64 = 15.0;
/// Amount added to debt by one demo update.
pub const DEBT_STEP: f64 = 10.0;
/// Amount added to income by one demo update.
pub const INCOME_STEP: f64 = 12.0;
/// Savings level at which the achievement message shows.
pub const ACHIEVEMENT_THRESHOLD: f64 = 80.0;
/// Bars never render wider than this percentage.
pub const FILL_CAP: f64 = 100.0;

/// One of the three demo counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meter {
    Savings,
    Debt,
    Income,
}

impl Meter {
    pub const ALL: [Self; 3] = [Self::Savings, Self::Debt, Self::Income];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Savings => "savings",
            Self::Debt => "debt",
            Self::Income => "income",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Debt => "Debt Paid",
            Self::Income => "Income",
        }
    }

    /// Increment applied by a demo update.
    #[must_use]
    pub const fn step(self) -> f64 {
        match self {
            Self::Savings => SAVINGS_STEP,
            Self::Debt => DEBT_STEP,
            Self::Income => INCOME_STEP,
        }
    }

    /// Element id of the bar fill for this meter.
    #[must_use]
    pub fn fill_id(self) -> String {
        format!("{}Fill", self.as_str())
    }

    /// Element id of the value label for this meter.
    #[must_use]
    pub fn value_id(self) -> String {
        format!("{}Value", self.as_str())
    }
}

impl fmt::Display for Meter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory demo counters. Values only grow between resets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DemoState {
    pub savings: f64,
    pub debt: f64,
    pub income: f64,
}

impl DemoState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            savings: 0.0,
            debt: 0.0,
            income: 0.0,
        }
    }

    /// Add the fixed increment to every counter. No upper bound.
    pub fn apply_update(&mut self) {
        self.savings += SAVINGS_STEP;
        self.debt += DEBT_STEP;
        self.income += INCOME_STEP;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub const fn value(&self, meter: Meter) -> f64 {
        match meter {
            Meter::Savings => self.savings,
            Meter::Debt => self.debt,
            Meter::Income => self.income,
        }
    }

    #[must_use]
    pub fn achievement_reached(&self) -> bool {
        self.savings >= ACHIEVEMENT_THRESHOLD
    }
}

/// Bar width in percent for a counter value.
#[must_use]
pub fn fill_percent(value: f64) -> f64 {
    value.min(FILL_CAP)
}

/// Round to cents without padding: `15` stays `15`, `0.125` becomes `0.13`.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Currency label for a counter value, e.g. `$27` or `$12.5`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("${}", round_cents(value))
}

/// Render data for a single bar.
#[derive(Debug, Clone, PartialEq)]
pub struct MeterView {
    pub meter: Meter,
    pub width: f64,
    pub label: String,
}

impl MeterView {
    #[must_use]
    pub fn width_style(&self) -> String {
        format!("width: {}%", self.width)
    }
}

/// Render data for the whole progress panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub meters: [MeterView; 3],
    pub achievement: bool,
}

impl ProgressView {
    #[must_use]
    pub fn meter(&self, meter: Meter) -> &MeterView {
        match meter {
            Meter::Savings => &self.meters[0],
            Meter::Debt => &self.meters[1],
            Meter::Income => &self.meters[2],
        }
    }
}

/// Compute widths, labels and the achievement flag for the current counters.
#[must_use]
pub fn render_progress(state: &DemoState) -> ProgressView {
    let view = |meter: Meter| {
        let value = state.value(meter);
        MeterView {
            meter,
            width: fill_percent(value),
            label: format_amount(value),
        }
    };
    ProgressView {
        meters: Meter::ALL.map(view),
        achievement: state.achievement_reached(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_accumulate_fixed_steps() {
        let mut state = DemoState::new();
        for _ in 0..4 {
            state.apply_update();
        }
        assert!((state.savings - 60.0).abs() < f64::EPSILON);
        assert!((state.debt - 40.0).abs() < f64::EPSILON);
        assert!((state.income - 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn reset_zeroes_all_counters() {
        let mut state = DemoState::new();
        state.apply_update();
        state.apply_update();
        state.reset();
        assert_eq!(state, DemoState::default());
    }

    #[test]
    fn fill_is_capped_but_value_is_not() {
        let mut state = DemoState::new();
        for _ in 0..10 {
            state.apply_update();
        }
        let view = render_progress(&state);
        assert!((view.meter(Meter::Savings).width - 100.0).abs() < f64::EPSILON);
        assert_eq!(view.meter(Meter::Savings).label, "$150");
        assert!((view.meter(Meter::Debt).width - 100.0).abs() < f64::EPSILON);
        assert_eq!(view.meter(Meter::Debt).label, "$100");
        assert_eq!(view.meter(Meter::Income).label, "$120");
    }

    #[test]
    fn amounts_use_shortest_cent_rounding() {
        assert_eq!(format_amount(0.0), "$0");
        assert_eq!(format_amount(15.0), "$15");
        assert_eq!(format_amount(12.5), "$12.5");
        assert_eq!(format_amount(0.125), "$0.13");
        assert_eq!(format_amount(3.14159), "$3.14");
    }

    #[test]
    fn width_style_matches_percent() {
        let view = render_progress(&DemoState {
            savings: 45.0,
            debt: 250.0,
            income: 0.0,
        });
        assert_eq!(view.meter(Meter::Savings).width_style(), "width: 45%");
        assert_eq!(view.meter(Meter::Debt).width_style(), "width: 100%");
        assert_eq!(view.meter(Meter::Income).width_style(), "width: 0%");
    }

    #[test]
    fn achievement_starts_at_threshold() {
        let below = DemoState {
            savings: 79.99,
            ..DemoState::default()
        };
        let at = DemoState {
            savings: ACHIEVEMENT_THRESHOLD,
            ..DemoState::default()
        };
        assert!(!render_progress(&below).achievement);
        assert!(render_progress(&at).achievement);
    }

    #[test]
    fn meter_ids_follow_page_markup() {
        assert_eq!(Meter::Savings.fill_id(), "savingsFill");
        assert_eq!(Meter::Income.value_id(), "incomeValue");
    }
}
