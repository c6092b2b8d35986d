use std::{io::BufRead, str::FromStr};

use tracing::debug;

use crate::{
    error::ParseError,
    report::{ScalingChart, ScalingReport, Series, Stat, SummaryChart, SummaryReport},
};

/// Positional reader over a line-oriented report: one value per line,
/// surrounding whitespace ignored, line numbers kept for diagnostics.
pub struct LineReader<R> {
    inner: R,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: 0 }
    }

    pub fn text(&mut self, expected: &'static str) -> Result<String, ParseError> {
        let mut buf = String::new();
        if self.inner.read_line(&mut buf)? == 0 {
            return Err(ParseError::UnexpectedEof {
                line: self.line,
                expected,
            });
        }
        self.line += 1;
        Ok(buf.trim().to_owned())
    }

    pub fn value<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        let token = self.text(expected)?;
        token.parse().map_err(|_| ParseError::Malformed {
            line: self.line,
            expected,
            token,
        })
    }

    fn timings(&mut self, count: usize) -> Result<Vec<f64>, ParseError> {
        (0..count).map(|_| self.value("running time")).collect()
    }
}

/// Reads a thread-scaling report: global sum (unused), array size, function
/// count, thread count, then per function a name followed by its timing
/// values. With `split` the name is followed by three full blocks of thread
/// count values each (avg, then max, then min), never interleaved per thread.
pub fn parse_scaling<R: BufRead>(input: R, split: bool) -> Result<ScalingReport, ParseError> {
    let mut reader = LineReader::new(input);
    let _global_sum: i64 = reader.value("global sum")?;
    let array_size: u64 = reader.value("array size")?;
    let functions: usize = reader.value("function count")?;
    let threads: usize = reader.value("thread count")?;

    let mut charts: Vec<ScalingChart> = if split {
        Stat::ALL
            .into_iter()
            .map(|stat| ScalingChart {
                stat: Some(stat),
                series: Vec::with_capacity(functions),
            })
            .collect()
    } else {
        vec![ScalingChart {
            stat: None,
            series: Vec::with_capacity(functions),
        }]
    };

    for _ in 0..functions {
        let name = reader.text("function name")?;
        for chart in &mut charts {
            chart.series.push(Series {
                name: name.clone(),
                points: reader.timings(threads)?,
            });
        }
    }

    debug!(functions, threads, split, "parsed scaling report");
    Ok(ScalingReport {
        array_size,
        threads,
        charts,
    })
}

/// Reads a per-function summary report: source name, array size, iteration
/// count (absent in the single-statistic form), function count, then per
/// function a name followed by one value per statistic.
pub fn parse_summary<R: BufRead>(input: R, single: bool) -> Result<SummaryReport, ParseError> {
    let mut reader = LineReader::new(input);
    let source = reader.text("source name")?;
    let array_size: u64 = reader.value("array size")?;
    let iterations: Option<u64> = if single {
        None
    } else {
        Some(reader.value("iteration count")?)
    };
    let functions: usize = reader.value("function count")?;

    let mut charts: Vec<SummaryChart> = if single {
        vec![SummaryChart {
            stat: None,
            values: Vec::with_capacity(functions),
        }]
    } else {
        Stat::ALL
            .into_iter()
            .map(|stat| SummaryChart {
                stat: Some(stat),
                values: Vec::with_capacity(functions),
            })
            .collect()
    };

    let mut names = Vec::with_capacity(functions);
    for _ in 0..functions {
        names.push(reader.text("function name")?);
        for chart in &mut charts {
            chart.values.push(reader.value("running time")?);
        }
    }

    debug!(functions, %source, "parsed summary report");
    Ok(SummaryReport {
        source,
        array_size,
        iterations,
        names,
        charts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<u8> {
        let mut buf = input.join("\n");
        buf.push('\n');
        buf.into_bytes()
    }

    #[test]
    fn scaling_single_stat() {
        let input = lines(&[
            "0", "10", "2", "3", "seq", "1.0", "2.0", "3.0", "par", "0.5", "0.3", "0.2",
        ]);
        let report = parse_scaling(input.as_slice(), false).unwrap();

        assert_eq!(report.array_size, 10);
        assert_eq!(report.threads, 3);
        assert_eq!(report.charts.len(), 1);

        let chart = &report.charts[0];
        assert_eq!(chart.stat, None);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "seq");
        assert_eq!(chart.series[0].points, vec![1.0, 2.0, 3.0]);
        assert_eq!(chart.series[1].name, "par");
        assert_eq!(chart.series[1].points, vec![0.5, 0.3, 0.2]);
    }

    #[test]
    fn scaling_split_reads_whole_blocks() {
        let input = lines(&[
            "42", "8", "1", "2", // header
            "seq", "1.0", "2.0", // avg block
            "3.0", "4.0", // max block
            "5.0", "6.0", // min block
        ]);
        let report = parse_scaling(input.as_slice(), true).unwrap();

        assert_eq!(report.charts.len(), 3);
        assert_eq!(report.charts[0].stat, Some(Stat::Avg));
        assert_eq!(report.charts[0].series[0].points, vec![1.0, 2.0]);
        assert_eq!(report.charts[1].stat, Some(Stat::Max));
        assert_eq!(report.charts[1].series[0].points, vec![3.0, 4.0]);
        assert_eq!(report.charts[2].stat, Some(Stat::Min));
        assert_eq!(report.charts[2].series[0].points, vec![5.0, 6.0]);
    }

    #[test]
    fn scaling_short_input_is_unexpected_eof() {
        let input = lines(&["0", "10", "2", "3", "seq", "1.0", "2.0"]);
        let err = parse_scaling(input.as_slice(), false).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }), "{err}");
    }

    #[test]
    fn scaling_bad_token_names_the_conversion() {
        let input = lines(&["0", "10", "2", "3", "seq", "1.0", "not-a-number"]);
        let err = parse_scaling(input.as_slice(), false).unwrap_err();
        match err {
            ParseError::Malformed {
                line,
                expected,
                token,
            } => {
                assert_eq!(line, 7);
                assert_eq!(expected, "running time");
                assert_eq!(token, "not-a-number");
            }
            other => panic!("expected Malformed, got {other}"),
        }
    }

    #[test]
    fn scaling_tolerates_padded_values() {
        let input = lines(&["0", "10", "1", "2", "seq", "   0.12345\t", "  2.00000 "]);
        let report = parse_scaling(input.as_slice(), false).unwrap();
        assert_eq!(report.charts[0].series[0].points, vec![0.12345, 2.0]);
    }

    #[test]
    fn summary_full_keeps_min_values_on_the_min_chart() {
        let input = lines(&[
            "bench.txt",
            "100",
            "5",
            "2",
            "seq",
            "1.5",
            "2.0",
            "1.0",
            "par",
            "0.6",
            "0.9",
            "0.4",
        ]);
        let report = parse_summary(input.as_slice(), false).unwrap();

        assert_eq!(report.source, "bench.txt");
        assert_eq!(report.array_size, 100);
        assert_eq!(report.iterations, Some(5));
        assert_eq!(report.names, vec!["seq", "par"]);
        assert_eq!(report.charts.len(), 3);
        assert_eq!(report.charts[0].values, vec![1.5, 0.6]);
        assert_eq!(report.charts[1].values, vec![2.0, 0.9]);
        assert_eq!(report.charts[2].stat, Some(Stat::Min));
        assert_eq!(report.charts[2].values, vec![1.0, 0.4]);
    }

    #[test]
    fn summary_single_stat() {
        let input = lines(&["bench.txt", "100", "2", "seq", "1.5", "par", "0.6"]);
        let report = parse_summary(input.as_slice(), true).unwrap();

        assert_eq!(report.iterations, None);
        assert_eq!(report.charts.len(), 1);
        assert_eq!(report.charts[0].stat, None);
        assert_eq!(report.charts[0].values, vec![1.5, 0.6]);
    }

    #[test]
    fn summary_missing_header_is_unexpected_eof() {
        let input = lines(&["bench.txt", "100"]);
        let err = parse_summary(input.as_slice(), false).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedEof {
                expected: "iteration count",
                ..
            }
        ));
    }

    #[test]
    fn zero_functions_yields_empty_charts() {
        let input = lines(&["0", "10", "0", "4"]);
        let report = parse_scaling(input.as_slice(), false).unwrap();
        assert!(report.charts[0].series.is_empty());
    }
}
