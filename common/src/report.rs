use serde::{Deserialize, Serialize};

/// Which running-time statistic a chart carries when the input splits
/// average/maximum/minimum into separate series sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stat {
    Avg,
    Max,
    Min,
}

impl Stat {
    /// Input block order and output file order.
    pub const ALL: [Stat; 3] = [Stat::Avg, Stat::Max, Stat::Min];

    pub fn suffix(&self) -> &'static str {
        match self {
            Stat::Avg => "avg",
            Stat::Max => "max",
            Stat::Min => "min",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Stat::Avg => "Average Running time (seconds)",
            Stat::Max => "Maximum Running time (seconds)",
            Stat::Min => "Minimum Running time (seconds)",
        }
    }
}

/// Y-axis description for a chart that may or may not be statistic-split.
pub fn y_label(stat: Option<Stat>) -> &'static str {
    match stat {
        Some(stat) => stat.axis_label(),
        None => "Running time (seconds)",
    }
}

/// Timing data for one measured function, indexed by thread count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<f64>,
}

/// One renderable line chart: every function's curve for one statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingChart {
    /// `None` when the input carries a single statistic per function.
    pub stat: Option<Stat>,
    pub series: Vec<Series>,
}

/// A thread-scaling benchmark run: running time vs. thread count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingReport {
    pub array_size: u64,
    pub threads: usize,
    pub charts: Vec<ScalingChart>,
}

/// One renderable bar chart: a single timing value per function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryChart {
    pub stat: Option<Stat>,
    pub values: Vec<f64>,
}

/// A per-function summary run: one bar per function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Source name token as supplied, e.g. `bench.txt`.
    pub source: String,
    pub array_size: u64,
    pub iterations: Option<u64>,
    /// Function names in input order; x-tick labels.
    pub names: Vec<String>,
    pub charts: Vec<SummaryChart>,
}

impl SummaryReport {
    /// Source name up to the first `.`, used for titles and file names.
    pub fn stem(&self) -> &str {
        self.source.split('.').next().unwrap_or(&self.source)
    }

    pub fn title(&self) -> String {
        match self.iterations {
            Some(iterations) => format!(
                "{}  (array size = {}, no of iterations = {})",
                self.stem(),
                self.array_size,
                iterations
            ),
            None => format!("{}  (array size = {})", self.stem(), self.array_size),
        }
    }

    pub fn file_name(&self, stat: Option<Stat>) -> String {
        match stat {
            Some(stat) => format!("{}_{}.png", self.stem(), stat.suffix()),
            None => format!("{}.png", self.stem()),
        }
    }
}
