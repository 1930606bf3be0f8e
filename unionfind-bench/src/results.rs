/// Results files: a CSV with one row per trial, or a JSON record that also
/// carries the experiment grid.
use std::io::{BufRead, Read, Write};

use serde::{Deserialize, Serialize};
use unionfind::StructureKind;

use crate::experiment::{ExperimentConfig, ResultRow};
use crate::workload::Workload;

pub const HEADER: &str =
    "structure,use_rank,path_compression,n,m,workload,trial,runtime,pointer_updates";

#[derive(Debug, thiserror::Error)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing or unexpected header, expected `{}`", HEADER)]
    BadHeader,

    #[error("line {line}: expected 9 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: invalid {field} `{value}`")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

fn format_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "True" | "true" => Some(true),
        "False" | "false" => Some(false),
        _ => None,
    }
}

/// Write `rows` with a header line.
pub fn write_csv<W: Write>(mut out: W, rows: &[ResultRow]) -> Result<(), ResultsError> {
    writeln!(out, "{HEADER}")?;
    for r in rows {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            r.kind.structure(),
            format_bool(r.kind.use_rank()),
            format_bool(r.kind.path_compression()),
            r.n,
            r.m,
            r.workload.name(),
            r.trial,
            r.runtime,
            r.pointer_updates,
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Read rows written by [`write_csv`]. Blank lines are skipped.
pub fn read_csv<R: BufRead>(input: R) -> Result<Vec<ResultRow>, ResultsError> {
    let mut lines = input.lines();
    let header = lines.next().transpose()?;
    if header.as_deref().map(str::trim) != Some(HEADER) {
        return Err(ResultsError::BadHeader);
    }

    let mut rows = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        let line_no = i + 2;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(line.trim(), line_no)?);
    }
    Ok(rows)
}

fn parse_row(line: &str, line_no: usize) -> Result<ResultRow, ResultsError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 9 {
        return Err(ResultsError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let invalid = |field: &'static str, value: &str| ResultsError::InvalidField {
        line: line_no,
        field,
        value: value.to_string(),
    };

    let use_rank = parse_bool(fields[1]).ok_or_else(|| invalid("use_rank", fields[1]))?;
    let path_compression =
        parse_bool(fields[2]).ok_or_else(|| invalid("path_compression", fields[2]))?;
    let kind = StructureKind::from_parts(fields[0], use_rank)
        .ok_or_else(|| invalid("structure", fields[0]))?;
    if kind.path_compression() != path_compression {
        return Err(invalid("path_compression", fields[2]));
    }

    Ok(ResultRow {
        kind,
        n: fields[3].parse().map_err(|_| invalid("n", fields[3]))?,
        m: fields[4].parse().map_err(|_| invalid("m", fields[4]))?,
        workload: Workload::from_name(fields[5]).ok_or_else(|| invalid("workload", fields[5]))?,
        trial: fields[6].parse().map_err(|_| invalid("trial", fields[6]))?,
        runtime: fields[7].parse().map_err(|_| invalid("runtime", fields[7]))?,
        pointer_updates: fields[8]
            .parse()
            .map_err(|_| invalid("pointer_updates", fields[8]))?,
    })
}

/// A complete run: the grid that was measured and every trial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub config: ExperimentConfig,
    pub rows: Vec<ResultRow>,
}

pub fn write_json<W: Write>(mut out: W, record: &RunRecord) -> Result<(), ResultsError> {
    serde_json::to_writer_pretty(&mut out, record)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

pub fn read_json<R: Read>(input: R) -> Result<RunRecord, ResultsError> {
    Ok(serde_json::from_reader(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: StructureKind, trial: u32) -> ResultRow {
        ResultRow {
            kind,
            n: 100,
            m: 500,
            workload: Workload::Gnp,
            trial,
            runtime: 0.125,
            pointer_updates: 321,
        }
    }

    #[test]
    fn writes_header_and_flags() {
        let mut buf = Vec::new();
        write_csv(
            &mut buf,
            &[row(StructureKind::List, 1), row(StructureKind::TreeByRank, 2)],
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "list,False,False,100,500,gnp,1,0.125,321");
        assert_eq!(lines[2], "tree,True,True,100,500,gnp,2,0.125,321");
    }

    #[test]
    fn reads_back_written_rows() {
        let rows: Vec<ResultRow> = StructureKind::all()
            .iter()
            .enumerate()
            .map(|(i, &k)| row(k, i as u32 + 1))
            .collect();
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows).unwrap();
        assert_eq!(read_csv(buf.as_slice()).unwrap(), rows);
    }

    #[test]
    fn json_record_keeps_config_and_rows() {
        let record = RunRecord {
            config: ExperimentConfig {
                ns: vec![100],
                multipliers: vec![5],
                workloads: vec![Workload::Gnp],
                kinds: StructureKind::all().to_vec(),
                trials: 1,
                seed: 9,
            },
            rows: vec![row(StructureKind::List, 1), row(StructureKind::TreeBySize, 1)],
        };
        let mut buf = Vec::new();
        write_json(&mut buf, &record).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["config"]["seed"], 9);
        assert_eq!(parsed["rows"][1]["kind"], "tree-size");
        assert_eq!(parsed["rows"][0]["workload"], "gnp");

        let loaded = read_json(buf.as_slice()).unwrap();
        assert_eq!(loaded.rows, record.rows);
        assert_eq!(loaded.config.ns, vec![100]);
        assert_eq!(loaded.config.kinds, record.config.kinds);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            read_json("{\"rows\": []}".as_bytes()),
            Err(ResultsError::Json(_))
        ));
    }

    #[test]
    fn rejects_missing_header() {
        let err = read_csv("list,False,False,1,1,gnp,1,0.1,0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ResultsError::BadHeader));
        assert!(matches!(read_csv("".as_bytes()), Err(ResultsError::BadHeader)));
    }

    #[test]
    fn reports_bad_line_number() {
        let text = format!("{HEADER}\nlist,False,False,1,1,gnp,1,0.1,0\n\ntree,False,True,x,1,gnp,1,0.1,0\n");
        let err = read_csv(text.as_bytes()).unwrap_err();
        match err {
            ResultsError::InvalidField { line, field, value } => {
                assert_eq!(line, 4);
                assert_eq!(field, "n");
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_wrong_field_count_and_unknown_workload() {
        let text = format!("{HEADER}\nlist,False\n");
        assert!(matches!(
            read_csv(text.as_bytes()),
            Err(ResultsError::FieldCount { line: 2, found: 2 })
        ));
        let text = format!("{HEADER}\nlist,False,False,1,1,sorted,1,0.1,0\n");
        assert!(matches!(
            read_csv(text.as_bytes()),
            Err(ResultsError::InvalidField { field: "workload", .. })
        ));
        let text = format!("{HEADER}\ntree,False,False,10,10,gnp,1,0.5,3\n");
        assert!(matches!(
            read_csv(text.as_bytes()),
            Err(ResultsError::InvalidField { line: 2, field: "path_compression", .. })
        ));
        let text = format!("{HEADER}\nlist,False,True,10,10,gnp,1,0.5,3\n");
        assert!(matches!(
            read_csv(text.as_bytes()),
            Err(ResultsError::InvalidField { field: "path_compression", .. })
        ));
    }
}
