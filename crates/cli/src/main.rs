use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use planar_hull::{Algorithm, Hull, HullBuilder, HullCfg, Point};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod gen;
mod io;
mod provenance;

use gen::{GenCfg, Sampler};
use io::{HullFile, PointFile};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Point-set generation and convex hull runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a seeded point set and write it as JSON
    Gen {
        #[arg(long, value_enum, default_value_t = Sampler::Uniform)]
        sampler: Sampler,
        #[arg(long, default_value_t = 100)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Rate of the exponential sampler
        #[arg(long, default_value_t = 1.0)]
        rate: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Compute the hull of a point file and write it as JSON
    Hull {
        #[arg(long, value_enum, default_value_t = AlgoArg::Graham)]
        algo: AlgoArg,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Verify hull invariants against the input before writing
        #[arg(long)]
        check: bool,
        #[command(flatten)]
        tol: TolArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AlgoArg {
    Naive,
    Graham,
    /// Run both builders and record whether they agree
    Both,
}

#[derive(Args, Clone, Copy, Debug)]
struct TolArgs {
    /// Point/angle equality tolerance
    #[arg(long, default_value_t = HullCfg::default().eps_eq)]
    eps_eq: f64,
    /// Orientation slack (cross <= eps counts as collinear)
    #[arg(long, default_value_t = HullCfg::default().eps_orient)]
    eps_orient: f64,
    /// Containment slack used by --check
    #[arg(long, default_value_t = 1e-9)]
    check_tol: f64,
}

impl TolArgs {
    fn cfg(&self) -> HullCfg {
        HullCfg {
            eps_eq: self.eps_eq,
            eps_orient: self.eps_orient,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Gen {
            sampler,
            n,
            seed,
            rate,
            out,
        } => gen_points(
            GenCfg {
                sampler,
                n,
                seed,
                rate,
            },
            &out,
        ),
        Action::Hull {
            algo,
            input,
            out,
            check,
            tol,
        } => run_hull(algo, &input, &out, check, tol),
        Action::Report => report(),
    }
}

fn gen_points(cfg: GenCfg, out: &Path) -> Result<()> {
    tracing::info!(sampler = ?cfg.sampler, n = cfg.n, seed = cfg.seed, out = %out.display(), "gen");
    let points = gen::generate(cfg)?;
    io::write_json(out, &PointFile::from_points(&points))?;
    provenance::write_sidecar(
        out,
        Payload::new(json!({
            "sampler": format!("{:?}", cfg.sampler).to_lowercase(),
            "n": cfg.n,
            "seed": cfg.seed,
            "rate": cfg.rate,
            "produced": points.len()
        })),
    )?;
    Ok(())
}

fn run_hull(algo: AlgoArg, input: &Path, out: &Path, check: bool, tol: TolArgs) -> Result<()> {
    tracing::info!(algo = ?algo, input = %input.display(), out = %out.display(), "hull");
    let cfg = tol.cfg();
    let points = io::read_json::<PointFile>(input)?.to_points();

    let (name, hull, agree) = match algo {
        AlgoArg::Naive => ("naive", build(Algorithm::Naive, &points, cfg)?, None),
        AlgoArg::Graham => ("graham", build(Algorithm::Graham, &points, cfg)?, None),
        AlgoArg::Both => {
            let naive = build(Algorithm::Naive, &points, cfg)?;
            let graham = build(Algorithm::Graham, &points, cfg)?;
            let agree = naive.same_vertex_set(&graham);
            if !agree {
                tracing::warn!(
                    naive = naive.len(),
                    graham = graham.len(),
                    "builders disagree on the hull vertex set"
                );
            }
            ("both", graham, Some(agree))
        }
    };

    if check {
        if let Err(violation) = hull.check_against(&points, tol.check_tol) {
            bail!("hull check failed: {violation}");
        }
        tracing::info!("hull check passed");
    }

    let file = HullFile {
        algo: name.to_string(),
        input_len: points.len(),
        hull: hull.vertices().iter().map(|&p| p.into()).collect(),
        agree,
    };
    io::write_json(out, &file)?;
    provenance::write_sidecar(
        out,
        Payload::new(json!({
            "algo": name,
            "eps_eq": cfg.eps_eq,
            "eps_orient": cfg.eps_orient,
            "check": check,
            "hull_len": hull.len(),
            "interior_len": hull.interior_points(&points).len()
        }))
        .with_input(input),
    )?;
    Ok(())
}

fn build(algo: Algorithm, points: &[Point], cfg: HullCfg) -> Result<Hull> {
    let hull = algo.build(points, cfg)?;
    tracing::info!(algo = algo.name(), input = points.len(), hull = hull.len(), "built hull");
    Ok(hull)
}

fn report() -> Result<()> {
    let cfg = HullCfg::default();
    let obj = json!({
        "code_rev": provenance::code_rev(),
        "planar_hull_version": planar_hull::VERSION,
        "defaults": {
            "eps_eq": cfg.eps_eq,
            "eps_orient": cfg.eps_orient
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
