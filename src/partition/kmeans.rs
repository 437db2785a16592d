//! Deterministic k-means over 2-D points.
//!
//! Lloyd's algorithm seeded with k-means++. Several seedings are tried and
//! the fit with the lowest inertia wins. All randomness comes from a
//! `StdRng` created from a fixed seed, so identical inputs always produce
//! identical centroids and assignments.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A point on the feature plane.
pub type Point = [f64; 2];

/// Parameters for one k-means fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeansParams {
    /// Number of clusters
    pub k: usize,
    /// Upper bound on Lloyd iterations per seeding
    pub max_iterations: usize,
    /// Number of independent seedings
    pub restarts: usize,
    /// RNG seed
    pub seed: u64,
}

/// Result of a k-means fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    /// Cluster centres, indexed by cluster id
    pub centroids: Vec<Point>,
    /// Cluster id of each input point
    pub assignments: Vec<usize>,
    /// Sum of squared distances from points to their centres
    pub inertia: f64,
    /// Lloyd iterations used by the winning seeding
    pub iterations: usize,
}

impl KMeansFit {
    /// Number of points assigned to each cluster.
    pub fn populations(&self) -> Vec<usize> {
        let mut counts = vec![0; self.centroids.len()];
        for &cluster in &self.assignments {
            counts[cluster] += 1;
        }
        counts
    }
}

#[inline]
pub(crate) fn squared_distance(a: &Point, b: &Point) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

/// Index of the centroid closest to `point`; ties go to the lowest index.
pub fn nearest_centroid(centroids: &[Point], point: &Point) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, centroid) in centroids.iter().enumerate() {
        let d = squared_distance(centroid, point);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Fit `params.k` clusters to `points`.
///
/// `k` is clamped to the number of points. Callers wanting non-degenerate
/// clusters should pass `k` no larger than the number of distinct points.
pub fn fit(points: &[Point], params: &KMeansParams) -> KMeansFit {
    let k = params.k.min(points.len());
    if k == 0 {
        return KMeansFit {
            centroids: Vec::new(),
            assignments: Vec::new(),
            inertia: 0.0,
            iterations: 0,
        };
    }

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut best: Option<KMeansFit> = None;

    for _ in 0..params.restarts.max(1) {
        let seeds = kmeans_plus_plus(points, k, &mut rng);
        let candidate = lloyd(points, seeds, params.max_iterations.max(1));
        let better = match &best {
            Some(current) => candidate.inertia < current.inertia,
            None => true,
        };
        if better {
            best = Some(candidate);
        }
    }

    best.unwrap_or_else(|| lloyd(points, points[..k].to_vec(), 1))
}

/// k-means++ seeding: each new centre is drawn with probability
/// proportional to its squared distance from the nearest existing centre.
fn kmeans_plus_plus(points: &[Point], k: usize, rng: &mut StdRng) -> Vec<Point> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[rng.gen_range(0..points.len())]);

    let mut min_distances: Vec<f64> = points
        .iter()
        .map(|p| squared_distance(p, &centroids[0]))
        .collect();

    while centroids.len() < k {
        let total: f64 = min_distances.iter().sum();
        let next = if total > 0.0 {
            let target = rng.gen::<f64>() * total;
            let mut cumulative = 0.0;
            let mut chosen = None;
            for (i, &d) in min_distances.iter().enumerate() {
                if d <= 0.0 {
                    continue;
                }
                cumulative += d;
                chosen = Some(i);
                if cumulative > target {
                    break;
                }
            }
            chosen.unwrap_or(0)
        } else {
            // Every point coincides with a centre already.
            rng.gen_range(0..points.len())
        };

        let centre = points[next];
        centroids.push(centre);
        for (d, p) in min_distances.iter_mut().zip(points) {
            *d = d.min(squared_distance(p, &centre));
        }
    }

    centroids
}

fn assign(points: &[Point], centroids: &[Point]) -> Vec<usize> {
    points
        .iter()
        .map(|p| nearest_centroid(centroids, p).unwrap_or(0))
        .collect()
}

/// Mean of each cluster; empty clusters keep their previous centre.
fn recompute(points: &[Point], assignments: &[usize], centroids: &mut [Point]) {
    let mut sums = vec![[0.0f64; 2]; centroids.len()];
    let mut counts = vec![0usize; centroids.len()];

    for (p, &cluster) in points.iter().zip(assignments) {
        sums[cluster][0] += p[0];
        sums[cluster][1] += p[1];
        counts[cluster] += 1;
    }

    for ((centroid, sum), count) in centroids.iter_mut().zip(sums).zip(counts) {
        if count > 0 {
            let n = count as f64;
            *centroid = [sum[0] / n, sum[1] / n];
        }
    }
}

fn lloyd(points: &[Point], mut centroids: Vec<Point>, max_iterations: usize) -> KMeansFit {
    let mut assignments = assign(points, &centroids);
    let mut iterations = max_iterations;

    for iteration in 1..=max_iterations {
        recompute(points, &assignments, &mut centroids);
        let next = assign(points, &centroids);
        if next == assignments {
            iterations = iteration;
            break;
        }
        assignments = next;
    }

    let inertia: f64 = points
        .iter()
        .zip(&assignments)
        .map(|(p, &cluster)| squared_distance(p, &centroids[cluster]))
        .sum();

    KMeansFit {
        centroids,
        assignments,
        inertia,
        iterations,
    }
}
