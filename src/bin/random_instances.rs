use itertools::Itertools;
use mvc::{graph::*, log::build_logger_for_verbosity};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use structopt::StructOpt;

/// Emits random `G(n,p)` instances in the `V`/`E` wire format, ready to be
/// piped into the comparison tool.
#[derive(Debug, StructOpt)]
struct Opts {
    /// Number of instances
    #[structopt(short, long, default_value = "10")]
    count: u32,

    /// Vertices per instance
    #[structopt(short, long, default_value = "12")]
    nodes: NumNodes,

    /// Expected average degree
    #[structopt(short = "d", long, default_value = "3.0")]
    avg_degree: f64,

    /// Seed; entropy when omitted
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

fn main() {
    let opts = Opts::from_args();
    build_logger_for_verbosity(::log::LevelFilter::Warn, opts.verbose);

    let mut rng = match opts.seed {
        Some(seed) => Pcg64Mcg::seed_from_u64(seed),
        None => Pcg64Mcg::from_entropy(),
    };

    let p = if opts.nodes >= 2 {
        (opts.avg_degree / (opts.nodes - 1) as f64).clamp(0.0, 1.0)
    } else {
        0.0
    };

    for _ in 0..opts.count {
        let graph = random_gnp(&mut rng, opts.nodes, p);
        println!("V {}", graph.number_of_nodes());
        println!(
            "E {{{}}}",
            graph
                .edges()
                .iter()
                .map(|&Edge(u, v)| format!("<{u},{v}>"))
                .join(",")
        );
    }
}
