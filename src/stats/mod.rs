//! Module for the statistics collectors that summarize the lines routed to
//! each data type.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{DataType, StatMode};


/// Decimal places of the reported average, rounded half-up.
const AVERAGE_SCALE: u32 = 5;

/// A per-type accumulator with exactly two operations: feed it a line,
/// render a report.
///
/// The pipeline never inspects the concrete variant; it only forwards the
/// lines of the matching type, in input order.
#[derive(Debug)]
pub(crate) enum StatisticsCollector {
    Count(CountStats),
    Numeric(NumericStats),
    StringLength(StringLengthStats),
}

impl StatisticsCollector {
    /// The collector used for `data_type` under `mode`, or `None` when
    /// statistics are disabled.
    pub(crate) fn for_mode(mode: StatMode, data_type: DataType) -> Option<Self> {
        match mode {
            StatMode::None => None,
            StatMode::Short => Some(Self::Count(CountStats::default())),
            StatMode::Full => Some(match data_type {
                DataType::Integer | DataType::Float => Self::Numeric(NumericStats::default()),
                DataType::String => Self::StringLength(StringLengthStats::default()),
            }),
        }
    }

    /// Accumulates one line. The line is passed as read from the input file;
    /// numeric variants trim it before parsing the value.
    pub(crate) fn collect(&mut self, line: &str) {
        match self {
            Self::Count(stats) => stats.collect(),
            Self::Numeric(stats) => stats.collect(line),
            Self::StringLength(stats) => stats.collect(line),
        }
    }

    /// Renders the report. Idempotent; a collector that never saw a line
    /// renders an explicit no-data message instead of failing.
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Count(stats) => stats.render(),
            Self::Numeric(stats) => stats.render(),
            Self::StringLength(stats) => stats.render(),
        }
    }
}

/// Count-only statistics (short mode, all types).
#[derive(Debug, Default)]
pub(crate) struct CountStats {
    count: u64,
}

impl CountStats {
    fn collect(&mut self) {
        self.count += 1;
    }

    fn render(&self) -> String {
        format!("count: {}", self.count)
    }
}

/// Full statistics for integer and float lines.
///
/// Sum, min and max use decimal arithmetic instead of binary floating point
/// so repeated accumulation stays exact. A value the 96-bit decimal cannot
/// represent is still counted but excluded from sum/min/max.
#[derive(Debug, Default)]
pub(crate) struct NumericStats {
    count: u64,
    sum: Decimal,
    min: Option<Decimal>,
    max: Option<Decimal>,
}

impl NumericStats {
    fn collect(&mut self, line: &str) {
        self.count += 1;

        let Some(value) = parse_decimal(line.trim()) else {
            tracing::debug!(line, "value not representable as a decimal, excluded from sum/min/max");
            return;
        };

        let Some(sum) = self.sum.checked_add(value) else {
            tracing::debug!(line, "decimal sum overflow, value excluded from sum/min/max");
            return;
        };
        self.sum = sum;

        if self.min.is_none_or(|min| value < min) {
            self.min = Some(value);
        }
        if self.max.is_none_or(|max| value > max) {
            self.max = Some(value);
        }
    }

    fn render(&self) -> String {
        let (Some(min), Some(max)) = (self.min, self.max) else {
            return match self.count {
                0 => "no data collected".to_string(),
                n => format!("count: {n} (values out of decimal range, no further statistics)"),
            };
        };

        format!(
            "count: {}\nmin: {}\nmax: {}\nsum: {}\naverage: {}",
            self.count,
            min,
            max,
            self.sum,
            self.average()
        )
    }

    fn average(&self) -> Decimal {
        debug_assert!(self.count > 0, "average is only rendered with data present");
        let mut average = (self.sum / Decimal::from(self.count))
            .round_dp_with_strategy(AVERAGE_SCALE, RoundingStrategy::MidpointAwayFromZero);
        // Pin the scale so e.g. 5.5 renders as 5.50000
        average.rescale(AVERAGE_SCALE);
        average
    }
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    value
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

/// Full statistics for string lines: line lengths in characters, measured on
/// the line as read (untrimmed).
#[derive(Debug, Default)]
pub(crate) struct StringLengthStats {
    count: u64,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl StringLengthStats {
    fn collect(&mut self, line: &str) {
        self.count += 1;
        let length = line.chars().count();

        if self.min_length.is_none_or(|min| length < min) {
            self.min_length = Some(length);
        }
        if self.max_length.is_none_or(|max| length > max) {
            self.max_length = Some(length);
        }
    }

    fn render(&self) -> String {
        let (Some(min), Some(max)) = (self.min_length, self.max_length) else {
            return "no data collected".to_string();
        };

        format!(
            "count: {}\nmin length: {min}\nmax length: {max}",
            self.count
        )
    }
}
