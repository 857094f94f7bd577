// Match-phase bucketing.
//
// Four fixed phases that follow natural match breaks rather than exact
// quartiles of 90 minutes:
//
//   Q1: minute <= 25
//   Q2: 25 < minute <= 47
//   Q3: 47 < minute <= 74
//   Q4: minute > 74

use std::fmt;

const Q1_END: f64 = 25.0;
const Q2_END: f64 = 47.0;
const Q3_END: f64 = 74.0;

/// One of the four match phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchQuarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl MatchQuarter {
    pub const ALL: [MatchQuarter; 4] = [
        MatchQuarter::Q1,
        MatchQuarter::Q2,
        MatchQuarter::Q3,
        MatchQuarter::Q4,
    ];

    /// Short label, e.g. "Q2".
    pub fn label(&self) -> &'static str {
        match self {
            MatchQuarter::Q1 => "Q1",
            MatchQuarter::Q2 => "Q2",
            MatchQuarter::Q3 => "Q3",
            MatchQuarter::Q4 => "Q4",
        }
    }

    /// Human-readable minute range.
    pub fn range_label(&self) -> &'static str {
        match self {
            MatchQuarter::Q1 => "First 25 minutes",
            MatchQuarter::Q2 => "Minutes 26 to 47",
            MatchQuarter::Q3 => "Minutes 48 to 74",
            MatchQuarter::Q4 => "Minute 75 to full time",
        }
    }

    /// Whether `minute` falls into this quarter. Agrees with [`bucket_quarter`].
    pub fn contains(&self, minute: f64) -> bool {
        bucket_quarter(minute) == *self
    }

    /// The next quarter, wrapping Q4 back to Q1.
    pub fn next(&self) -> Self {
        match self {
            MatchQuarter::Q1 => MatchQuarter::Q2,
            MatchQuarter::Q2 => MatchQuarter::Q3,
            MatchQuarter::Q3 => MatchQuarter::Q4,
            MatchQuarter::Q4 => MatchQuarter::Q1,
        }
    }

    /// The previous quarter, wrapping Q1 back to Q4.
    pub fn prev(&self) -> Self {
        match self {
            MatchQuarter::Q1 => MatchQuarter::Q4,
            MatchQuarter::Q2 => MatchQuarter::Q1,
            MatchQuarter::Q3 => MatchQuarter::Q2,
            MatchQuarter::Q4 => MatchQuarter::Q3,
        }
    }
}

impl fmt::Display for MatchQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a numeric minute into its match phase.
pub fn bucket_quarter(minute: f64) -> MatchQuarter {
    if minute <= Q1_END {
        MatchQuarter::Q1
    } else if minute <= Q2_END {
        MatchQuarter::Q2
    } else if minute <= Q3_END {
        MatchQuarter::Q3
    } else {
        MatchQuarter::Q4
    }
}
