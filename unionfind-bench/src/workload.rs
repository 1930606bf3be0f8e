/// Operation streams replayed against a structure during a trial.
use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use unionfind::{DisjointSets, Result};

/// A single structure operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Union(usize, usize),
    Find(usize),
}

/// A named family of operation streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workload {
    /// Half unions, half finds, uniformly random.
    #[serde(rename = "random_50_50")]
    Random5050,
    /// One union in five, uniformly random.
    #[serde(rename = "random_20_80")]
    Random2080,
    /// A path `0-1-2-...` built by unions, then random finds.
    #[serde(rename = "adversarial")]
    Adversarial,
    /// `m` random unions, then `m` random finds.
    #[serde(rename = "batched_finds")]
    BatchedFinds,
    /// `m` random edges of a sparse random graph, then `m` random finds.
    #[serde(rename = "gnp")]
    Gnp,
}

impl Workload {
    pub fn all() -> &'static [Workload] {
        &[
            Workload::Random5050,
            Workload::Random2080,
            Workload::Adversarial,
            Workload::BatchedFinds,
            Workload::Gnp,
        ]
    }

    /// Workloads run when none are requested explicitly.
    pub fn defaults() -> Vec<Workload> {
        vec![
            Workload::Random5050,
            Workload::Adversarial,
            Workload::BatchedFinds,
            Workload::Gnp,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Workload::Random5050 => "random_50_50",
            Workload::Random2080 => "random_20_80",
            Workload::Adversarial => "adversarial",
            Workload::BatchedFinds => "batched_finds",
            Workload::Gnp => "gnp",
        }
    }

    pub fn from_name(name: &str) -> Option<Workload> {
        Workload::all().iter().find(|w| w.name() == name).copied()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Workload::Random5050 => "random unions then random finds, 50% unions",
            Workload::Random2080 => "random unions then random finds, 20% unions",
            Workload::Adversarial => "chain unions (i, i+1), then m random finds",
            Workload::BatchedFinds => "m random unions, then m random finds",
            Workload::Gnp => "m random edges of a sparse G(n, p), then m random finds",
        }
    }

    /// Generate the operation stream for `n` elements and `m` operations.
    ///
    /// With `n == 0` there is nothing to pick from and the stream is empty.
    pub fn generate<R: Rng>(&self, n: usize, m: usize, rng: &mut R) -> Vec<Op> {
        if n == 0 {
            return Vec::new();
        }
        match self {
            Workload::Random5050 => random_mix(n, m, 0.5, rng),
            Workload::Random2080 => random_mix(n, m, 0.2, rng),
            Workload::Adversarial => {
                let mut ops: Vec<Op> = (0..n - 1).map(|i| Op::Union(i, i + 1)).collect();
                ops.extend(random_finds(n, m, rng));
                ops
            }
            Workload::BatchedFinds | Workload::Gnp => {
                let mut ops = random_unions(n, m, rng);
                ops.extend(random_finds(n, m, rng));
                ops
            }
        }
    }
}

fn random_mix<R: Rng>(n: usize, m: usize, union_ratio: f64, rng: &mut R) -> Vec<Op> {
    let num_unions = (union_ratio * m as f64) as usize;
    let mut ops = random_unions(n, num_unions, rng);
    ops.extend(random_finds(n, m - num_unions, rng));
    ops
}

fn random_unions<R: Rng>(n: usize, count: usize, rng: &mut R) -> Vec<Op> {
    (0..count)
        .map(|_| Op::Union(rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn random_finds<R: Rng>(n: usize, count: usize, rng: &mut R) -> Vec<Op> {
    (0..count).map(|_| Op::Find(rng.gen_range(0..n))).collect()
}

/// Apply `ops` in order and return the wall-clock time taken.
pub fn replay<S: DisjointSets + ?Sized>(structure: &mut S, ops: &[Op]) -> Result<Duration> {
    let start = Instant::now();
    for op in ops {
        match *op {
            Op::Union(x, y) => {
                structure.union(x, y)?;
            }
            Op::Find(x) => {
                structure.find(x)?;
            }
        }
    }
    Ok(start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use unionfind::StructureKind;

    fn count(ops: &[Op]) -> (usize, usize) {
        let unions = ops.iter().filter(|o| matches!(o, Op::Union(..))).count();
        (unions, ops.len() - unions)
    }

    #[test]
    fn names_round_trip() {
        for w in Workload::all() {
            assert_eq!(Workload::from_name(w.name()), Some(*w));
        }
        assert_eq!(Workload::from_name("sorted"), None);
    }

    #[test]
    fn random_mix_splits_by_ratio() {
        let mut rng = StdRng::seed_from_u64(0);
        let ops = Workload::Random5050.generate(100, 201, &mut rng);
        assert_eq!(count(&ops), (100, 101));
        let ops = Workload::Random2080.generate(100, 100, &mut rng);
        assert_eq!(count(&ops), (20, 80));
    }

    #[test]
    fn unions_precede_finds() {
        let mut rng = StdRng::seed_from_u64(1);
        for w in Workload::all() {
            let ops = w.generate(50, 80, &mut rng);
            let first_find = ops.iter().position(|o| matches!(o, Op::Find(_)));
            if let Some(i) = first_find {
                assert!(ops[i..].iter().all(|o| matches!(o, Op::Find(_))), "{}", w.name());
            }
        }
    }

    #[test]
    fn adversarial_builds_chain() {
        let mut rng = StdRng::seed_from_u64(2);
        let ops = Workload::Adversarial.generate(5, 3, &mut rng);
        assert_eq!(
            &ops[..4],
            &[Op::Union(0, 1), Op::Union(1, 2), Op::Union(2, 3), Op::Union(3, 4)]
        );
        assert_eq!(count(&ops), (4, 3));
    }

    #[test]
    fn batched_and_gnp_use_m_of_each() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(count(&Workload::BatchedFinds.generate(10, 30, &mut rng)), (30, 30));
        assert_eq!(count(&Workload::Gnp.generate(10, 30, &mut rng)), (30, 30));
    }

    #[test]
    fn indices_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for w in Workload::all() {
            for op in w.generate(7, 200, &mut rng) {
                match op {
                    Op::Union(x, y) => assert!(x < 7 && y < 7),
                    Op::Find(x) => assert!(x < 7),
                }
            }
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let a = Workload::Gnp.generate(1000, 500, &mut StdRng::seed_from_u64(9));
        let b = Workload::Gnp.generate(1000, 500, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_universe_has_no_ops() {
        let mut rng = StdRng::seed_from_u64(5);
        for w in Workload::all() {
            assert!(w.generate(0, 10, &mut rng).is_empty());
        }
    }

    #[test]
    fn replay_applies_ops() {
        let mut s = StructureKind::List.build(4);
        let ops = [Op::Union(0, 1), Op::Union(2, 3), Op::Find(3)];
        replay(&mut s, &ops).unwrap();
        assert_eq!(s.num_sets(), 2);
    }

    #[test]
    fn replay_stops_at_out_of_range() {
        let mut s = StructureKind::TreeBySize.build(2);
        let ops = [Op::Union(0, 1), Op::Find(2), Op::Union(0, 0)];
        assert!(replay(&mut s, &ops).is_err());
        assert_eq!(s.num_sets(), 1);
    }
}
