use std::{fmt::Display, ops, time::Duration};

/// Counters gathered while rendering one camera.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderStats {
    pub primary_rays: u64,
    pub shadow_rays: u64,
    /// Reflected and refracted rays
    pub secondary_rays: u64,
    pub hits: u64,
    pub elapsed: Duration,
}

impl RenderStats {
    pub fn total_rays(&self) -> u64 {
        self.primary_rays + self.shadow_rays + self.secondary_rays
    }

    pub fn rays_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0. {
            self.total_rays() as f64 / secs
        } else {
            0.
        }
    }

    pub fn merge(&mut self, other: &RenderStats) {
        self.primary_rays += other.primary_rays;
        self.shadow_rays += other.shadow_rays;
        self.secondary_rays += other.secondary_rays;
        self.hits += other.hits;
        self.elapsed += other.elapsed;
    }
}

impl ops::Add for RenderStats {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.merge(&rhs);
        self
    }
}

impl Display for RenderStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} primary, {} shadow, {} secondary rays, {} hits in {:?} ({:.0} rays/s)",
            self.primary_rays,
            self.shadow_rays,
            self.secondary_rays,
            self.hits,
            self.elapsed,
            self.rays_per_second()
        )
    }
}
