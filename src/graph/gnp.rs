use rand::Rng;
use rand_distr::{Distribution, Geometric};

use super::*;

/// Samples a Gilbert `G(n,p)` graph: each of the `n(n-1)/2` possible edges is
/// present independently with probability `p`.
pub fn random_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Graph {
    Graph::try_from_edges(n, random_gnp_edges(rng, n, p)).expect("sampled endpoints are in range")
}

/// Edge list of a `G(n,p)` sample, 1-based and normalized.
///
/// Instead of tossing a coin per pair, we jump between present edges with
/// geometrically distributed skip lengths over the `n * n` index space and
/// keep the indices that decode to an ordered pair.
pub fn random_gnp_edges<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Vec<Edge> {
    if n < 2 || p <= 0.0 {
        return Vec::new();
    }

    let end = (n as u64) * (n as u64);

    if p >= 1.0 {
        return decode_ordered_pairs(n, 0..end);
    }

    let skips = Geometric::new(p).expect("p in (0, 1)");
    let mut present = Vec::new();

    let mut current: u64 = 0;
    loop {
        current = match current.checked_add(skips.sample(rng)) {
            Some(next) if next < end => next,
            _ => break,
        };
        present.push(current);
        current += 1;
    }

    decode_ordered_pairs(n, present)
}

fn decode_ordered_pairs(n: NumNodes, indices: impl IntoIterator<Item = u64>) -> Vec<Edge> {
    indices
        .into_iter()
        .filter_map(|x| {
            let u = (x / n as u64) as Node;
            let v = (x % n as u64) as Node;
            (u < v).then_some(Edge(u + 1, v + 1))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn extreme_probabilities() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x5eed);
        assert!(random_gnp_edges(&mut rng, 10, 0.0).is_empty());

        let complete = random_gnp_edges(&mut rng, 10, 1.0);
        assert_eq!(complete.len(), 45);
        assert!(complete.iter().all(|e| e.is_normalized() && !e.is_loop()));
    }

    #[test]
    fn endpoints_in_range() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x1234);
        for _ in 0..50 {
            let graph = random_gnp(&mut rng, 12, 0.3);
            assert!(
                graph
                    .edges()
                    .iter()
                    .all(|&Edge(u, v)| (1..=12).contains(&u) && (1..=12).contains(&v))
            );
        }
    }

    #[test]
    fn density_tracks_probability() {
        let mut rng = Pcg64Mcg::seed_from_u64(0xdead);
        let total: usize = (0..200)
            .map(|_| random_gnp_edges(&mut rng, 20, 0.25).len())
            .sum();
        let mean = total as f64 / 200.0;
        // 190 pairs at p = 0.25 -> expectation 47.5
        assert!((35.0..60.0).contains(&mean), "mean = {mean}");
    }
}
