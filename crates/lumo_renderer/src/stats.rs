//! Ray counters gathered while tracing.

use std::ops::AddAssign;

/// Counts of rays cast while shading, merged across pixels and buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Rays cast from the image plane
    pub primary_rays: u64,
    /// Rays cast toward the light
    pub shadow_rays: u64,
    /// Mirror bounces followed
    pub reflection_rays: u64,
    /// Deepest reflection level reached by any ray
    pub max_depth: u32,
}

impl TraceStats {
    /// Total number of rays of every kind.
    pub fn total_rays(&self) -> u64 {
        self.primary_rays + self.shadow_rays + self.reflection_rays
    }
}

impl AddAssign for TraceStats {
    fn add_assign(&mut self, rhs: TraceStats) {
        self.primary_rays += rhs.primary_rays;
        self.shadow_rays += rhs.shadow_rays;
        self.reflection_rays += rhs.reflection_rays;
        self.max_depth = self.max_depth.max(rhs.max_depth);
    }
}
