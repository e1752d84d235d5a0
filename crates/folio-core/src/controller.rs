//! Interaction controller for the portfolio page.
//!
//! Turns raw viewport and timer events into the page's visible interactive
//! state: whether the nav bar is condensed, whether the mobile menu is open,
//! and how much of the name has been typed out.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──mount()──▶ Mounted ──unmount()/drop──▶ Unmounted
//!                      │  listens for scroll
//!                      │  ticks the reveal timer until the name is complete
//! ```
//!
//! Registrations are owned by the mount. Unmounting (explicitly or through
//! `Drop`) releases the scroll listener and any live timer, and events
//! carrying a handle from a previous mount are ignored.

use std::time::Duration;

use folio_models::SectionId;
use tracing::{debug, trace};

use crate::host::{EventHost, HostEvent, ListenerId, TimerId};
use crate::reveal::RevealSequence;
use crate::viewport::Viewport;

/// Default scroll offset above which the nav bar condenses.
pub const DEFAULT_SCROLL_THRESHOLD: u32 = 50;

/// Default delay between revealed characters.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(150);

/// Whether the nav bar is condensed at the given scroll offset.
///
/// Strictly greater than: an offset equal to the threshold is not condensed.
pub fn nav_condensed(offset: u32, threshold: u32) -> bool {
    offset > threshold
}

/// Tunables for the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Offset above which the nav bar condenses.
    pub scroll_threshold: u32,
    /// Period of the reveal timer.
    pub reveal_interval: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
        }
    }
}

/// The visible interactive state. Re-initialised on every mount.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    pub nav_condensed: bool,
    pub mobile_menu_open: bool,
    pub revealed_text: String,
}

/// Identifies one mount of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

#[derive(Debug, Clone, Copy)]
struct Registration {
    mount: MountId,
    listener: ListenerId,
    /// `None` once the reveal has completed.
    timer: Option<TimerId>,
}

/// Drives the page's interactive state from an injected viewport and host.
pub struct InteractionController<V: Viewport, H: EventHost> {
    viewport: V,
    host: H,
    settings: ControllerSettings,
    reveal: RevealSequence,
    state: DisplayState,
    registration: Option<Registration>,
    mounts: u64,
}

impl<V: Viewport, H: EventHost> InteractionController<V, H> {
    /// Create an unmounted controller that will reveal `target` once mounted.
    pub fn new(
        viewport: V,
        host: H,
        target: impl Into<String>,
        settings: ControllerSettings,
    ) -> Self {
        Self {
            viewport,
            host,
            settings,
            reveal: RevealSequence::new(target),
            state: DisplayState::default(),
            registration: None,
            mounts: 0,
        }
    }

    /// Register listeners and start the reveal.
    ///
    /// Calling this while already mounted returns the current mount without
    /// registering anything twice.
    pub fn mount(&mut self) -> MountId {
        if let Some(registration) = self.registration {
            trace!("mount ignored, already mounted");
            return registration.mount;
        }

        self.mounts += 1;
        let mount = MountId(self.mounts);

        self.state = DisplayState::default();
        self.reveal = RevealSequence::new(self.reveal.target().to_string());

        let listener = self.host.add_scroll_listener();
        let timer = if self.reveal.is_empty() {
            None
        } else {
            Some(self.host.set_interval(self.settings.reveal_interval))
        };

        self.registration = Some(Registration { mount, listener, timer });
        debug!(
            mount = mount.0,
            target_len = self.reveal.len(),
            "interaction controller mounted"
        );
        mount
    }

    /// Release every registration. Safe to call more than once.
    pub fn unmount(&mut self) {
        let Some(registration) = self.registration.take() else {
            return;
        };

        self.host.remove_scroll_listener(registration.listener);
        if let Some(timer) = registration.timer {
            self.host.clear_interval(timer);
        }
        debug!(mount = registration.mount.0, "interaction controller unmounted");
    }

    /// Whether the controller currently holds registrations.
    pub fn is_mounted(&self) -> bool {
        self.registration.is_some()
    }

    /// The current mount, if any.
    pub fn mount_id(&self) -> Option<MountId> {
        self.registration.map(|r| r.mount)
    }

    /// Whether the reveal timer is still registered.
    pub fn reveal_timer(&self) -> Option<TimerId> {
        self.registration.and_then(|r| r.timer)
    }

    /// Route an event from the host.
    ///
    /// Events whose handle does not belong to the current mount are dropped.
    pub fn handle(&mut self, event: HostEvent) {
        let Some(registration) = self.registration else {
            return;
        };

        match event {
            HostEvent::Scroll(listener) if listener == registration.listener => self.on_scroll(),
            HostEvent::Tick(timer) if registration.timer == Some(timer) => self.on_tick(timer),
            _ => trace!(?event, "dropping event for stale registration"),
        }
    }

    fn on_scroll(&mut self) {
        let offset = self.viewport.current_scroll_offset();
        self.state.nav_condensed = nav_condensed(offset, self.settings.scroll_threshold);
    }

    fn on_tick(&mut self, timer: TimerId) {
        if let Some(prefix) = self.reveal.next() {
            self.state.revealed_text = prefix;
        }

        if self.reveal.is_complete() {
            self.host.clear_interval(timer);
            if let Some(registration) = self.registration.as_mut() {
                registration.timer = None;
            }
            debug!(text = %self.state.revealed_text, "reveal complete");
        }
    }

    /// Smooth-scroll to the element with the given identifier and close the
    /// mobile menu.
    ///
    /// An unknown identifier does nothing at all. Returns whether the
    /// element was found.
    pub fn navigate_to(&mut self, section_id: &str) -> bool {
        let Some(element) = self.viewport.find_element_by_id(section_id) else {
            trace!(section_id, "navigation target not found");
            return false;
        };

        self.viewport.smooth_scroll_to(&element);
        self.state.mobile_menu_open = false;
        debug!(section_id, top = element.top, "navigating to section");
        true
    }

    /// [`navigate_to`](Self::navigate_to) for a known section.
    pub fn navigate_to_section(&mut self, section: SectionId) -> bool {
        self.navigate_to(section.as_str())
    }

    /// Smooth-scroll to the top of the page. Leaves the menu as it is.
    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll_to_top();
    }

    /// Flip the mobile menu.
    pub fn toggle_mobile_menu(&mut self) {
        self.state.mobile_menu_open = !self.state.mobile_menu_open;
    }

    /// The current display state.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn nav_condensed(&self) -> bool {
        self.state.nav_condensed
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.state.mobile_menu_open
    }

    pub fn revealed_text(&self) -> &str {
        &self.state.revealed_text
    }

    /// Whether the whole target has been revealed.
    pub fn reveal_complete(&self) -> bool {
        self.reveal.is_complete()
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<V: Viewport, H: EventHost> Drop for InteractionController<V, H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
