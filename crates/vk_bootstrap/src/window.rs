//! Window session management using GLFW
//!
//! Owns the native surface and the platform event queue. The session is
//! configured for Vulkan rendering: no default client API is bound and
//! the surface is fixed-size. The session must outlive the Vulkan
//! instance; dropping it terminates GLFW.

use glfw::{Action, Key, WindowEvent};
use thiserror::Error;

/// Window session errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW library initialization failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The native surface could not be created
    #[error("Window creation failed")]
    CreationFailed,

    /// GLFW-reported error
    #[error("GLFW error: {0}")]
    Glfw(String),
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
pub struct WindowSession {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
}

impl WindowSession {
    /// Open a fixed-size window configured for Vulkan.
    ///
    /// No OpenGL context is created; the graphics backend binds to the
    /// surface explicitly later.
    pub fn new(width: u32, height: u32, title: &str) -> WindowResult<Self> {
        let mut glfw =
            glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));
        glfw.window_hint(glfw::WindowHint::Resizable(false));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.set_key_polling(true);
        window.set_close_polling(true);

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Instance extensions the platform requires to present to this
    /// surface. Pure query, no side effects.
    pub fn required_instance_extensions(&self) -> WindowResult<Vec<String>> {
        self.glfw
            .get_required_instance_extensions()
            .ok_or_else(|| WindowError::Glfw("Failed to get required extensions".to_string()))
    }

    /// True once the user has requested closure. Polling alone never
    /// changes the answer; only events drained by [`Self::pump_events`] do.
    #[must_use]
    pub fn should_terminate(&self) -> bool {
        self.window.should_close()
    }

    /// Drain the pending event backlog once, non-blocking.
    ///
    /// Escape is mapped to a close request, matching the window manager's
    /// close button.
    pub fn pump_events(&mut self) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let WindowEvent::Key(Key::Escape, _, Action::Press, _) = event {
                self.window.set_should_close(true);
            }
        }
    }
}

impl crate::app::Session for WindowSession {
    fn pump_events(&mut self) {
        Self::pump_events(self);
    }

    fn should_terminate(&self) -> bool {
        Self::should_terminate(self)
    }
}
