use serde_json::Value;

use crate::domain::MomentumSample;

/// Reconstructed match flow plus the final per-player point totals
#[derive(Debug, Default)]
pub struct MomentumTrace {
    pub samples: Vec<MomentumSample>,
    pub p1_points: u32,
    pub p2_points: u32,
}

/// Walk the fixture's point-by-point data set by set and rebuild the
/// cumulative point counts. The feed carries no per-point timing, so
/// timestamps are synthetic: one sample per point, 60 seconds apart,
/// starting 60 seconds after `start_ms`.
pub fn build_momentum(pointbypoint: &Value, start_ms: i64) -> MomentumTrace {
    let mut trace = MomentumTrace::default();
    let mut t = start_ms;

    let Some(sets) = pointbypoint.as_array() else {
        return trace;
    };

    for set in sets {
        let Some(points) = set.get("points").and_then(Value::as_array) else {
            continue;
        };

        for point in points {
            let raw = point.get("score").and_then(Value::as_str).unwrap_or("");
            let (p1, p2) = split_point_score(raw);

            if p1 != p2 {
                if p1 > p2 {
                    trace.p1_points += 1;
                } else {
                    trace.p2_points += 1;
                }
            }

            t += 60_000;
            trace.samples.push(MomentumSample {
                t,
                p1: trace.p1_points,
                p2: trace.p2_points,
            });
        }
    }

    trace
}

/// Split a raw point score like "30 - 15" into its two sides,
/// defaulting non-numeric parts to 0
fn split_point_score(raw: &str) -> (u32, u32) {
    let mut parts = raw.splitn(2, '-');
    let first = parse_side(parts.next());
    let second = parse_side(parts.next());
    (first, second)
}

fn parse_side(part: Option<&str>) -> u32 {
    part.and_then(|p| p.trim().parse().ok()).unwrap_or(0)
}
