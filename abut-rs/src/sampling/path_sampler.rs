use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Shape};
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

/// Configuration of the path point sampler.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Lower bound on the number of curve samples
    pub min_samples: usize,
    /// Upper bound on the number of curve samples
    pub max_samples: usize,
    /// Desired arc-length spacing between consecutive samples
    pub target_spacing: f64,
    /// Accuracy passed to the arc-length computations
    pub arclen_accuracy: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            min_samples: 128,
            max_samples: 384,
            target_spacing: 2.0,
            arclen_accuracy: 1e-4,
        }
    }
}

/// Samples an ordered point sequence along `path`, uniformly spaced in arc
/// length. The sample count adapts to the total arc length, clamped to
/// `[min_samples, max_samples]`. The path's bounding-box corners are appended
/// after the curve samples as a fallback for degenerate curves.
///
/// Deterministic: identical input yields identical sample count and positions.
/// Never fails; a zero-length or unmeasurable path degrades to the corner
/// points alone, and a path without any segment yields no points at all.
pub fn sample_path(path: &BezPath, cfg: &SamplerConfig) -> Vec<Point> {
    let segs: Vec<PathSeg> = path.segments().collect();
    if segs.is_empty() {
        return vec![];
    }

    let lens: Vec<f64> = segs.iter().map(|s| s.arclen(cfg.arclen_accuracy)).collect();
    let total: f64 = lens.iter().sum();

    let mut points = Vec::new();

    if total.is_finite() && total > 0.0 {
        let n = ((total / cfg.target_spacing).ceil() as usize)
            .clamp(cfg.min_samples, cfg.max_samples);

        let mut seg_idx = 0;
        let mut consumed = 0.0; //arc length covered by segments before seg_idx
        // t = 1 would duplicate the start point on a closed path
        for i in 0..n {
            let target = total * (i as f64) / (n as f64);
            while seg_idx + 1 < segs.len() && target > consumed + lens[seg_idx] {
                consumed += lens[seg_idx];
                seg_idx += 1;
            }
            let local = (target - consumed).clamp(0.0, lens[seg_idx]);
            let t = match lens[seg_idx] {
                l if l > 0.0 => segs[seg_idx].inv_arclen(local, cfg.arclen_accuracy),
                _ => 0.0,
            };
            let p = segs[seg_idx].eval(t);
            points.push(Point(p.x, p.y));
        }
    }

    let bb = path.bounding_box();
    points.extend([
        Point(bb.x0, bb.y0),
        Point(bb.x1, bb.y0),
        Point(bb.x1, bb.y1),
        Point(bb.x0, bb.y1),
    ]);

    points
}
