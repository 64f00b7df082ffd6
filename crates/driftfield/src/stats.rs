//! Frame timing and work counters.

use std::time::Duration;

use crate::config::DEFAULT_FRAME_BUDGET_US;

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(DEFAULT_FRAME_BUDGET_US);

/// One frame's timing and work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Tick this frame rendered.
    pub frame: u64,
    /// Total frame time in microseconds.
    pub total_us: u64,
    /// Particle integration time in microseconds.
    pub step_us: u64,
    /// Drawing time (bands, links, shapes) in microseconds.
    pub render_us: u64,
    /// Host events applied at frame start.
    pub events_processed: u32,
    /// Particles respawned this frame.
    pub respawned: u32,
    /// Proximity links drawn.
    pub edges: u32,
    /// Band strips filled.
    pub strips: u32,
}

/// Running totals over many frames.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Total frames recorded.
    pub frames_recorded: u64,
    /// Sum of total frame times.
    pub total_us_sum: u64,
    /// Sum of integration times.
    pub step_us_sum: u64,
    /// Sum of drawing times.
    pub render_us_sum: u64,
    /// Min frame time.
    pub min_frame_us: u64,
    /// Max frame time.
    pub max_frame_us: u64,
    /// Frames that exceeded budget.
    pub frames_over_budget: u64,
    /// Particles respawned.
    pub respawns: u64,
    /// Links drawn.
    pub edges_drawn: u64,
    /// Host events applied.
    pub events_processed: u64,
    /// Budget each frame is measured against.
    budget: Duration,
}

impl FrameStatsAccumulator {
    /// Creates an accumulator measuring against [`TARGET_FRAME_TIME`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_budget(TARGET_FRAME_TIME)
    }

    /// Creates an accumulator with a custom frame budget.
    #[must_use]
    pub fn with_budget(budget: Duration) -> Self {
        Self {
            frames_recorded: 0,
            total_us_sum: 0,
            step_us_sum: 0,
            render_us_sum: 0,
            min_frame_us: u64::MAX,
            max_frame_us: 0,
            frames_over_budget: 0,
            respawns: 0,
            edges_drawn: 0,
            events_processed: 0,
            budget,
        }
    }

    /// Frame budget.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Records a frame. Returns `true` if it was over budget.
    pub fn record(&mut self, stats: FrameStats) -> bool {
        self.frames_recorded += 1;
        self.total_us_sum += stats.total_us;
        self.step_us_sum += stats.step_us;
        self.render_us_sum += stats.render_us;
        self.min_frame_us = self.min_frame_us.min(stats.total_us);
        self.max_frame_us = self.max_frame_us.max(stats.total_us);
        self.respawns += u64::from(stats.respawned);
        self.edges_drawn += u64::from(stats.edges);
        self.events_processed += u64::from(stats.events_processed);

        let over = u128::from(stats.total_us) > self.budget.as_micros();
        if over {
            self.frames_over_budget += 1;
        }
        over
    }

    /// Average frame time in milliseconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_frame_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.total_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Average FPS.
    #[must_use]
    pub fn avg_fps(&self) -> f64 {
        let avg_ms = self.avg_frame_ms();
        if avg_ms <= 0.0 {
            return 0.0;
        }
        1000.0 / avg_ms
    }

    /// Fraction of frames over budget.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn over_budget_ratio(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        self.frames_over_budget as f64 / self.frames_recorded as f64
    }

    /// Prints a summary of the statistics.
    #[allow(clippy::cast_precision_loss)]
    pub fn print_summary(&self) {
        let min_frame_us = if self.frames_recorded == 0 { 0 } else { self.min_frame_us };

        println!("╔══════════════════════════════════════════════════════════════════╗");
        println!("║                    FRAME STATISTICS SUMMARY                      ║");
        println!("╚══════════════════════════════════════════════════════════════════╝");
        println!();
        println!("┌─ TIMING ───────────────────────────────────────────────────────┐");
        println!("│ Frames Recorded:    {}", self.frames_recorded);
        println!("│ Average Frame:      {:.3} ms ({:.1} FPS)", self.avg_frame_ms(), self.avg_fps());
        println!("│ Min Frame:          {:.3} ms", min_frame_us as f64 / 1000.0);
        println!("│ Max Frame:          {:.3} ms", self.max_frame_us as f64 / 1000.0);
        println!("└──────────────────────────────────────────────────────────────────┘");
        println!();
        println!("┌─ BUDGET ───────────────────────────────────────────────────────┐");
        println!("│ Target:             {:.3} ms", self.budget.as_micros() as f64 / 1000.0);
        println!(
            "│ Over Budget:        {} frames ({:.1}%)",
            self.frames_over_budget,
            self.over_budget_ratio() * 100.0
        );
        println!("└──────────────────────────────────────────────────────────────────┘");

        if self.frames_recorded > 0 {
            let frames = self.frames_recorded as f64;
            println!();
            println!("┌─ BREAKDOWN ─────────────────────────────────────────────────────┐");
            println!("│ Integrate:          {:.3} ms", self.step_us_sum as f64 / frames / 1000.0);
            println!("│ Draw:               {:.3} ms", self.render_us_sum as f64 / frames / 1000.0);
            println!("│ Links / frame:      {:.1}", self.edges_drawn as f64 / frames);
            println!("│ Respawns:           {}", self.respawns);
            println!("│ Host Events:        {}", self.events_processed);
            println!("└──────────────────────────────────────────────────────────────────┘");
        }
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_accumulator() {
        let acc = FrameStatsAccumulator::new();
        assert_eq!(acc.frames_recorded, 0);
        assert!(acc.avg_frame_ms().abs() < f64::EPSILON);
        assert!(acc.avg_fps().abs() < f64::EPSILON);
        assert!(acc.over_budget_ratio().abs() < f64::EPSILON);
    }

    #[test]
    fn test_record() {
        let mut acc = FrameStatsAccumulator::with_budget(Duration::from_micros(1_000));
        assert!(!acc.record(FrameStats { total_us: 500, respawned: 2, edges: 10, ..FrameStats::default() }));
        assert!(acc.record(FrameStats { total_us: 1_500, respawned: 1, edges: 30, ..FrameStats::default() }));

        assert_eq!(acc.frames_recorded, 2);
        assert_eq!(acc.min_frame_us, 500);
        assert_eq!(acc.max_frame_us, 1_500);
        assert_eq!(acc.frames_over_budget, 1);
        assert_eq!(acc.respawns, 3);
        assert_eq!(acc.edges_drawn, 40);
        assert!((acc.avg_frame_ms() - 1.0).abs() < 1e-9);
        assert!((acc.over_budget_ratio() - 0.5).abs() < 1e-9);
    }
}
