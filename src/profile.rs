use crate::march::{MarchResult, Termination};

/// Per frame ray counters, combined across rayon workers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,
    pub shadow_rays: usize, // rays used to test light visibility
    pub hits: usize,
    pub misses: usize,
    pub step_limit_misses: usize, // misses that ran out of iterations
    pub march_steps: usize,
}

impl Profile {
    pub fn combine(&self, other: Self) -> Self {
        Profile {
            camera_rays: self.camera_rays + other.camera_rays,
            shadow_rays: self.shadow_rays + other.shadow_rays,
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
            step_limit_misses: self.step_limit_misses + other.step_limit_misses,
            march_steps: self.march_steps + other.march_steps,
        }
    }

    pub fn record_camera_ray(&mut self, result: &MarchResult) {
        self.camera_rays += 1;
        self.march_steps += result.steps;
        match result.termination {
            Termination::Hit => self.hits += 1,
            Termination::ExceededMaxDistance => self.misses += 1,
            Termination::ExceededMaxSteps => {
                self.misses += 1;
                self.step_limit_misses += 1;
            }
        }
    }

    pub fn record_shadow_ray(&mut self, result: &MarchResult) {
        self.shadow_rays += 1;
        self.march_steps += result.steps;
    }

    pub fn total_rays(&self) -> usize {
        self.camera_rays + self.shadow_rays
    }

    pub fn log_summary(&self, elapsed: f32, threads: usize) {
        let total = self.total_rays();
        info!(
            "{} camera rays, {} hits, {} misses ({} hit the step limit)",
            self.camera_rays, self.hits, self.misses, self.step_limit_misses
        );
        info!("{} shadow rays", self.shadow_rays);
        info!(
            "{} total rays at {} per second and {} per second per thread",
            total,
            total as f32 / elapsed,
            total as f32 / elapsed / (threads.max(1) as f32)
        );
        if total > 0 {
            debug!(
                "{} march steps, {} per ray on average",
                self.march_steps,
                self.march_steps as f32 / total as f32
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_record_and_combine() {
        let mut a = Profile::default();
        a.record_camera_ray(&MarchResult {
            traveled: 5.0,
            steps: 3,
            termination: Termination::Hit,
        });
        a.record_shadow_ray(&MarchResult {
            traveled: 60.0,
            steps: 7,
            termination: Termination::ExceededMaxDistance,
        });
        let mut b = Profile::default();
        b.record_camera_ray(&MarchResult {
            traveled: 2.0,
            steps: 50,
            termination: Termination::ExceededMaxSteps,
        });

        let total = a.combine(b);
        assert_eq!(total.camera_rays, 2);
        assert_eq!(total.shadow_rays, 1);
        assert_eq!(total.hits, 1);
        assert_eq!(total.misses, 1);
        assert_eq!(total.step_limit_misses, 1);
        assert_eq!(total.march_steps, 60);
        assert_eq!(total.total_rays(), 3);
    }
}
