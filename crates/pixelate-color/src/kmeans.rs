//! Color quantization via k-means clustering
//!
//! Treats every pixel's RGB triple as a point in 3-dimensional space,
//! clusters the points into a bounded palette, and remaps each pixel to
//! its cluster center.
//!
//! Determinism is a hard contract: identical (input, cluster count,
//! seed) always produce byte-identical output. Initialization uses
//! k-means++ driven by a seeded [`StdRng`], assignment ties resolve to
//! the lowest cluster index, and centroid updates iterate pixels in
//! raster order.

use crate::error::{ColorError, ColorResult};
use pixelate_core::Raster;
use pixelate_core::color::clamp_channel;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Options for k-means color quantization
#[derive(Debug, Clone, Copy)]
pub struct KmeansOptions {
    /// Number of target clusters (palette size), must be >= 1
    pub cluster_count: u32,
    /// Seed for the random initialization
    pub seed: u64,
    /// Maximum Lloyd iterations before stopping
    pub max_iter: u32,
    /// Convergence threshold on the maximum center movement
    pub tolerance: f64,
}

impl KmeansOptions {
    /// Create options with the standard iteration cap and tolerance.
    pub fn new(cluster_count: u32, seed: u64) -> Self {
        Self {
            cluster_count,
            seed,
            max_iter: 300,
            tolerance: 1e-4,
        }
    }
}

#[inline]
fn distance_sq(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    dr * dr + dg * dg + db * db
}

/// Pick initial centers with k-means++ seeding.
///
/// The first center is a uniformly random point; each subsequent center
/// is sampled proportionally to its squared distance from the nearest
/// chosen center. When every point coincides with a chosen center the
/// weights vanish and a uniformly random point is taken instead.
fn init_centers(points: &[[f64; 3]], k: usize, rng: &mut StdRng) -> Vec<[f64; 3]> {
    let mut centers = Vec::with_capacity(k);
    centers.push(points[rng.random_range(0..points.len())]);

    let mut dist = vec![f64::INFINITY; points.len()];

    while centers.len() < k {
        let newest = centers[centers.len() - 1];
        let mut total = 0.0;
        for (d, p) in dist.iter_mut().zip(points) {
            *d = d.min(distance_sq(*p, newest));
            total += *d;
        }

        if total <= 0.0 {
            centers.push(points[rng.random_range(0..points.len())]);
            continue;
        }

        let r = rng.random_range(0.0..total);
        let mut cum = 0.0;
        let mut chosen = points.len() - 1;
        for (i, d) in dist.iter().enumerate() {
            cum += d;
            if cum > r {
                chosen = i;
                break;
            }
        }
        centers.push(points[chosen]);
    }

    centers
}

/// Index of the center nearest to `p`, lowest index on ties.
#[inline]
fn nearest_center(p: [f64; 3], centers: &[[f64; 3]]) -> usize {
    let mut best = 0;
    let mut best_d = distance_sq(p, centers[0]);
    for (i, c) in centers.iter().enumerate().skip(1) {
        let d = distance_sq(p, *c);
        if d < best_d {
            best = i;
            best_d = d;
        }
    }
    best
}

/// Quantize a raster's colors to at most `cluster_count` distinct values.
///
/// Returns a new raster of the same dimensions and layout with every
/// pixel's RGB channels replaced by its cluster center; alpha (if
/// present) is carried over unchanged.
///
/// Clusters left without any assigned pixels keep their previous center
/// and simply contribute no output color. Fewer distinct input colors
/// than `cluster_count` is therefore not an error.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `cluster_count` is 0.
pub fn quantize_colors(raster: &Raster, options: &KmeansOptions) -> ColorResult<Raster> {
    if options.cluster_count == 0 {
        return Err(ColorError::InvalidParameters(
            "cluster_count must be >= 1".to_string(),
        ));
    }

    let channels = raster.channels() as usize;
    let pixel_count = raster.data().len() / channels;
    let k = options.cluster_count as usize;

    let mut points = Vec::new();
    points
        .try_reserve_exact(pixel_count)
        .map_err(|_| pixelate_core::Error::AllocationFailed)?;
    for px in raster.data().chunks_exact(channels) {
        points.push([px[0] as f64, px[1] as f64, px[2] as f64]);
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut centers = init_centers(&points, k, &mut rng);
    let mut assignment = vec![0usize; points.len()];

    for _ in 0..options.max_iter {
        for (a, p) in assignment.iter_mut().zip(&points) {
            *a = nearest_center(*p, &centers);
        }

        let mut sums = vec![[0.0f64; 3]; k];
        let mut counts = vec![0usize; k];
        for (&a, p) in assignment.iter().zip(&points) {
            sums[a][0] += p[0];
            sums[a][1] += p[1];
            sums[a][2] += p[2];
            counts[a] += 1;
        }

        let mut max_shift = 0.0f64;
        for i in 0..k {
            if counts[i] == 0 {
                continue;
            }
            let n = counts[i] as f64;
            let new = [sums[i][0] / n, sums[i][1] / n, sums[i][2] / n];
            max_shift = max_shift.max(distance_sq(centers[i], new));
            centers[i] = new;
        }

        if max_shift <= options.tolerance * options.tolerance {
            break;
        }
    }

    // Final assignment against the converged centers, then snap the
    // centers to integer channel values.
    for (a, p) in assignment.iter_mut().zip(&points) {
        *a = nearest_center(*p, &centers);
    }
    let palette: Vec<(u8, u8, u8)> = centers
        .iter()
        .map(|c| (clamp_channel(c[0]), clamp_channel(c[1]), clamp_channel(c[2])))
        .collect();

    let mut out = raster.to_mut();
    for (px, &a) in out.data_mut().chunks_exact_mut(channels).zip(&assignment) {
        let (r, g, b) = palette[a];
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }

    Ok(out.into())
}

/// Quantize with the standard iteration settings and a fixed seed.
pub fn quantize_colors_simple(raster: &Raster, cluster_count: u32) -> ColorResult<Raster> {
    quantize_colors(raster, &KmeansOptions::new(cluster_count, 42))
}
