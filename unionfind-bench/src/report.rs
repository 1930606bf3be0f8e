/// Report generation: per-structure means rendered as text bars or JSON.
use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;
use unionfind::StructureKind;

use crate::experiment::ResultRow;
use crate::workload::Workload;

const BAR_WIDTH: usize = 50;

/// Mean of one metric at one problem size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub n: usize,
    pub mean: f64,
}

/// One structure's curve, points sorted by `n`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub kind: StructureKind,
    pub label: String,
    pub points: Vec<Point>,
}

/// Both metrics for one workload, averaged over trials and operation counts.
#[derive(Debug, Serialize)]
pub struct WorkloadReport {
    pub workload: Workload,
    pub rows: usize,
    pub runtime: Vec<Series>,
    pub pointer_updates: Vec<Series>,
}

impl WorkloadReport {
    pub fn from_rows(rows: &[ResultRow], workload: Workload) -> Self {
        let selected: Vec<&ResultRow> = rows.iter().filter(|r| r.workload == workload).collect();
        Self {
            workload,
            rows: selected.len(),
            runtime: mean_series(&selected, |r| r.runtime),
            pointer_updates: mean_series(&selected, |r| r.pointer_updates as f64),
        }
    }
}

/// Group by (structure, n) and average `value`. Series follow
/// [`StructureKind::all`] order.
fn mean_series(rows: &[&ResultRow], value: impl Fn(&ResultRow) -> f64) -> Vec<Series> {
    let mut sums: BTreeMap<(usize, usize), (f64, usize)> = BTreeMap::new();
    for r in rows {
        let kind_idx = kind_index(r.kind);
        let entry = sums.entry((kind_idx, r.n)).or_insert((0.0, 0));
        entry.0 += value(*r);
        entry.1 += 1;
    }

    let mut series: Vec<Series> = Vec::new();
    for ((kind_idx, n), (sum, count)) in sums {
        let kind = StructureKind::all()[kind_idx];
        let point = Point {
            n,
            mean: sum / count as f64,
        };
        match series.last_mut() {
            Some(s) if s.kind == kind => s.points.push(point),
            _ => series.push(Series {
                kind,
                label: kind.label().to_string(),
                points: vec![point],
            }),
        }
    }
    series
}

fn kind_index(kind: StructureKind) -> usize {
    StructureKind::all()
        .iter()
        .position(|&k| k == kind)
        .unwrap_or(0)
}

/// Scaled ASCII bar chart. Bars are relative to the largest mean; every
/// point gets at least one `#`, including points with a zero mean.
pub fn text_chart(title: &str, y_label: &str, series: &[Series]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{title}");
    let _ = writeln!(out, "{y_label} (scaled bars)\n");

    let max_y = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.mean))
        .fold(0.0_f64, f64::max);
    if max_y == 0.0 {
        let _ = writeln!(out, "No data to plot.");
        return out;
    }

    for s in series {
        let _ = writeln!(out, "{}", s.label);
        for p in &s.points {
            let filled = ((p.mean / max_y) * BAR_WIDTH as f64) as usize;
            let bar = "#".repeat(filled.max(1));
            let _ = writeln!(out, " n={:<8} {} {:.4}", p.n, bar, p.mean);
        }
        let _ = writeln!(out);
    }
    out
}

/// Print both charts for a workload.
pub fn print_terminal(report: &WorkloadReport) {
    let name = report.workload.name();
    print!(
        "{}",
        text_chart(
            &format!("Runtime vs n - workload={name}"),
            "Runtime (seconds)",
            &report.runtime,
        )
    );
    print!(
        "{}",
        text_chart(
            &format!("Pointer Updates vs n - workload={name}"),
            "Pointer updates (mean)",
            &report.pointer_updates,
        )
    );
}

/// Render report as JSON.
pub fn to_json(report: &WorkloadReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
