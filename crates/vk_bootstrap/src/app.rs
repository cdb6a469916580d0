//! Application orchestration
//!
//! Drives the bootstrap lifecycle: window first, instance second, poll
//! loop, then teardown in exact reverse-creation order. A failure at any
//! stage unwinds only what was already acquired.

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;
use crate::instance::VulkanInstance;
use crate::window::WindowSession;

/// Minimal contract the run loop needs from a window session.
///
/// Split out so the loop can be exercised without a display server.
pub trait Session {
    /// Drain the pending event backlog once, non-blocking.
    fn pump_events(&mut self);

    /// True once closure has been requested. Must be stable across
    /// repeated calls with no intervening events.
    fn should_terminate(&self) -> bool;
}

/// Poll events until the session requests termination.
///
/// Single-threaded and cooperative: one pump per iteration, one
/// termination check per iteration, nothing else.
pub fn run_loop<S: Session>(session: &mut S) {
    while !session.should_terminate() {
        session.pump_events();
    }
}

/// Bootstrap the graphics context and run until the window closes.
///
/// The window strictly outlives the instance: if instance creation
/// fails, the window alone is unwound; on shutdown the instance is
/// released first, the window last.
pub fn run(config: &BootstrapConfig) -> Result<(), BootstrapError> {
    let mut window = WindowSession::new(config.width, config.height, &config.window_title)?;
    log::info!("Window session open ({}x{})", config.width, config.height);

    let platform_extensions = window.required_instance_extensions()?;
    let vulkan = VulkanInstance::new(config, &platform_extensions)?;

    run_loop(&mut window);

    log::info!("Shutting down");
    // Teardown order: instance before window, always.
    drop(vulkan);
    drop(window);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSession {
        pumps: usize,
        terminate_after: usize,
    }

    impl Session for FakeSession {
        fn pump_events(&mut self) {
            self.pumps += 1;
        }

        fn should_terminate(&self) -> bool {
            self.pumps >= self.terminate_after
        }
    }

    #[test]
    fn test_loop_pumps_until_termination() {
        let mut session = FakeSession {
            pumps: 0,
            terminate_after: 5,
        };
        run_loop(&mut session);
        assert_eq!(session.pumps, 5);
    }

    #[test]
    fn test_loop_exits_immediately_when_already_terminated() {
        let mut session = FakeSession {
            pumps: 0,
            terminate_after: 0,
        };
        run_loop(&mut session);
        assert_eq!(session.pumps, 0);
    }

    #[test]
    fn test_termination_check_is_stable_without_events() {
        let session = FakeSession {
            pumps: 3,
            terminate_after: 3,
        };
        assert!(session.should_terminate());
        assert!(session.should_terminate());
        assert!(session.should_terminate());
        assert_eq!(session.pumps, 3);
    }
}
