/// Frame scheduling for the animation loop
///
/// One animation cycle runs per display refresh callback. The scheduler
/// decides whether a callback should run a cycle and whether another
/// callback should be requested, and checks an explicit stop flag every
/// iteration so teardown never depends on the callback chain dying out.
use log::{debug, info};
use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Lifecycle of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for the sprite sheet; no frames run
    Waiting,
    /// Running one cycle per refresh
    Running,
    /// Stopped for good
    Stopped,
}

/// Frame scheduler state
pub struct FrameScheduler {
    state: LoopState,

    /// Set by `stop`; checked at the top of every frame
    stop_requested: bool,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time the loop started running
    start_time: Option<Instant>,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Frames run so far
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameScheduler {
    /// Create a scheduler waiting to be started
    pub fn new() -> Self {
        Self {
            state: LoopState::Waiting,
            stop_requested: false,
            last_frame_time: Instant::now(),
            start_time: None,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Start running frames. No effect once stopped.
    pub fn start(&mut self) {
        if self.state == LoopState::Waiting && !self.stop_requested {
            let now = Instant::now();
            self.state = LoopState::Running;
            self.start_time = Some(now);
            self.last_frame_time = now;
            info!("Animation loop started");
        }
    }

    /// Stop the loop; the next iteration sees the flag
    pub fn stop(&mut self) {
        self.stop_requested = true;
        self.check_stop();
    }

    /// Begin a frame. Returns whether a cycle should run now.
    pub fn begin_frame(&mut self) -> bool {
        self.check_stop();
        if self.state != LoopState::Running {
            return false;
        }

        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        if self.frame_count % FPS_WINDOW_SIZE as u64 == 0 {
            self.update_fps();
            debug!("{:.1} fps over the last {} frames", self.current_fps, FPS_WINDOW_SIZE);
        }

        true
    }

    /// Whether another refresh callback should be requested
    pub fn should_request_next(&self) -> bool {
        self.state == LoopState::Running && !self.stop_requested
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames run
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Time since the loop started running
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|start| Instant::now().duration_since(start))
            .unwrap_or_default()
    }

    fn check_stop(&mut self) {
        if self.stop_requested && self.state != LoopState::Stopped {
            self.state = LoopState::Stopped;
            info!("Animation loop stopped after {} frames", self.frame_count);
        }
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_scheduler_creation() {
        let scheduler = FrameScheduler::new();
        assert_eq!(scheduler.state, LoopState::Waiting);
        assert_eq!(scheduler.frame_count(), 0);
        assert_eq!(scheduler.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_no_frames_before_start() {
        let mut scheduler = FrameScheduler::new();
        assert!(!scheduler.begin_frame());
        assert!(!scheduler.should_request_next());
        assert_eq!(scheduler.frame_count(), 0);
    }

    #[test]
    fn test_frame_counting() {
        let mut scheduler = FrameScheduler::new();
        scheduler.start();

        assert!(scheduler.begin_frame());
        assert!(scheduler.begin_frame());
        assert_eq!(scheduler.frame_count(), 2);
        assert!(scheduler.should_request_next());
    }

    #[test]
    fn test_stop_flag_ends_loop() {
        let mut scheduler = FrameScheduler::new();
        scheduler.start();

        let mut frames = 0;
        while scheduler.begin_frame() {
            frames += 1;
            if frames == 5 {
                scheduler.stop();
            }
        }

        assert_eq!(frames, 5);
        assert_eq!(scheduler.state, LoopState::Stopped);
        assert!(!scheduler.should_request_next());
    }

    #[test]
    fn test_stop_before_start() {
        let mut scheduler = FrameScheduler::new();
        scheduler.stop();
        scheduler.start();
        assert_eq!(scheduler.state, LoopState::Stopped);
        assert!(!scheduler.begin_frame());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut scheduler = FrameScheduler::new();
        scheduler.start();
        scheduler.begin_frame();
        scheduler.start();
        assert_eq!(scheduler.frame_count(), 1);
        assert_eq!(scheduler.state, LoopState::Running);
    }

    #[test]
    fn test_fps_after_window() {
        let mut scheduler = FrameScheduler::new();
        scheduler.start();
        for _ in 0..FPS_WINDOW_SIZE {
            thread::sleep(Duration::from_millis(1));
            scheduler.begin_frame();
        }
        assert!(scheduler.fps() > 0.0);
    }

    #[test]
    fn test_elapsed_time() {
        let mut scheduler = FrameScheduler::new();
        scheduler.start();
        thread::sleep(Duration::from_millis(10));
        assert!(scheduler.elapsed() >= Duration::from_millis(10));
    }
}
