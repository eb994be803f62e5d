use log::{debug, info, warn};

use crate::command::CommandParams;
use crate::config::StripConfig;
use crate::handoff::{AnimationHandoff, StripRequest};

/// Request-side half of the strip controller
///
/// Decodes incoming commands and forwards them to the animator through
/// the [`AnimationHandoff`]. Never blocks and never fails: malformed or
/// unknown commands are logged and leave the strip unchanged.
pub struct Dispatcher<'a> {
    handoff: &'a AnimationHandoff,
    brightness: f32,
    color_prefix_len: usize,
}

impl<'a> Dispatcher<'a> {
    pub const fn new(handoff: &'a AnimationHandoff, config: &StripConfig) -> Self {
        Self {
            handoff,
            brightness: config.brightness,
            color_prefix_len: config.color_prefix_len,
        }
    }

    /// Brightness that the next animation will use
    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Handle one command
    ///
    /// A valid brightness is remembered even if the mode is rejected.
    /// Returns the submitted request, or `None` if the strip is left as is.
    pub fn dispatch(&mut self, params: &CommandParams<'_>) -> Option<StripRequest> {
        match params.brightness() {
            Ok(brightness) => self.brightness = brightness,
            Err(err) => debug!("Keeping brightness {}: {}", self.brightness, err),
        }

        let mode = match params.mode(self.color_prefix_len) {
            Ok(mode) => mode,
            Err(err) => {
                warn!("Ignoring command mode={:?} color={:?}: {}", params.mode, params.color, err);
                return None;
            }
        };

        let request = StripRequest {
            mode,
            brightness: self.brightness,
        };
        if let Some(replaced) = self.handoff.submit(request) {
            debug!("Dropping unstarted {} request", replaced.mode.as_str());
        }
        info!("Requested {} at brightness {}", mode.as_str(), self.brightness);
        Some(request)
    }

    /// Decode and handle an HTTP request line
    pub fn dispatch_request_line(&mut self, line: &str) -> Option<StripRequest> {
        self.dispatch(&CommandParams::from_request_line(line))
    }
}
