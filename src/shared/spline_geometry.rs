//! Reine Geometrie-Funktionen für zentripetale Catmull-Rom-Splines in 3D.
//!
//! Layer-neutral: kann von `tools` und `core` importiert werden, ohne
//! Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// Exponent der zentripetalen Parametrisierung (Knotenabstand = |Δp|^ALPHA).
pub const CENTRIPETAL_ALPHA: f32 = 0.5;

/// Untergrenze für Knotenabstände (doppelte Punkte).
const MIN_KNOT_DELTA: f32 = 1.0e-4;

/// Kubisches Hermite-Polynom eines Segments (p1 → p2).
#[derive(Debug, Clone, Copy)]
struct SegmentPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl SegmentPoly {
    /// Baut das Segment p1 → p2 mit nicht-uniformen Knotenabständen.
    fn centripetal(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let knot = |a: Vec3, b: Vec3| a.distance_squared(b).powf(CENTRIPETAL_ALPHA * 0.5);
        let mut dt1 = knot(p1, p2);
        let mut dt0 = knot(p0, p1);
        let mut dt2 = knot(p2, p3);

        // Doppelte Punkte dürfen keine Division durch 0 erzeugen
        if dt1 < MIN_KNOT_DELTA {
            dt1 = 1.0;
        }
        if dt0 < MIN_KNOT_DELTA {
            dt0 = dt1;
        }
        if dt2 < MIN_KNOT_DELTA {
            dt2 = dt1;
        }

        let t1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let t2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;

        Self {
            c0: p1,
            c1: t1,
            c2: -3.0 * p1 + 3.0 * p2 - 2.0 * t1 - t2,
            c3: 2.0 * p1 - 2.0 * p2 + t1 + t2,
        }
    }

    fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        let t3 = t2 * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t3
    }
}

/// Tastet die Spline durch `points` mit `segments_total + 1` Punkten ab.
///
/// Der Parameter läuft gleichmäßig über den gesamten Pfad (jedes Segment
/// bekommt denselben Parameterbereich). An den Rändern werden Phantom-Punkte
/// gespiegelt, damit die Kurve durch den ersten und letzten Punkt läuft.
pub fn catmull_rom_chain(points: &[Vec3], segments_total: usize) -> Vec<Vec3> {
    if points.len() < 2 || segments_total == 0 {
        return points.to_vec();
    }

    let n = points.len();
    let start_phantom = 2.0 * points[0] - points[1];
    let end_phantom = 2.0 * points[n - 1] - points[n - 2];
    let control = |i: isize| -> Vec3 {
        if i < 0 {
            start_phantom
        } else if i as usize >= n {
            end_phantom
        } else {
            points[i as usize]
        }
    };

    // Segment-Polynome einmal pro Aufruf, nicht pro Abtastpunkt
    let polys: Vec<SegmentPoly> = (0..n - 1)
        .map(|seg| {
            let s = seg as isize;
            SegmentPoly::centripetal(control(s - 1), control(s), control(s + 1), control(s + 2))
        })
        .collect();

    let mut result = Vec::with_capacity(segments_total + 1);
    for i in 0..=segments_total {
        let u = i as f32 / segments_total as f32;
        let p = (n - 1) as f32 * u;
        let seg = (p.floor() as usize).min(n - 2);
        let weight = p - seg as f32;
        result.push(polys[seg].eval(weight));
    }
    result
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
