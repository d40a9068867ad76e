//! System tray integration: an icon with a single "exit" item.
//!
//! Entirely optional — any failure here is returned to the caller,
//! logged, and the pet runs without a tray.

use tray_icon::{
    menu::{Menu, MenuEvent, MenuItem},
    Icon, TrayIcon, TrayIconBuilder,
};
use winit::event_loop::EventLoopProxy;

use crate::error::PetError;
use crate::sprite;
use crate::viewer::ShellEvent;

/// Keeps the tray icon alive for the lifetime of the app.
pub(crate) struct TrayHandle {
    _tray: TrayIcon,
}

impl TrayHandle {
    /// Build the tray icon and wire its "exit" item to the event loop.
    pub(crate) fn new(
        proxy: EventLoopProxy<ShellEvent>,
        tooltip: &str,
    ) -> Result<Self, PetError> {
        let (rgba, width, height) = sprite::icon_rgba()?;
        let icon = Icon::from_rgba(rgba, width, height)
            .map_err(|e| PetError::Tray(e.to_string()))?;

        let menu = Menu::new();
        let exit_item = MenuItem::new("exit", true, None);
        menu.append(&exit_item)
            .map_err(|e| PetError::Tray(e.to_string()))?;

        // Menu events arrive outside the winit loop; forward the exit
        // click as a user event so it is handled on the one app thread.
        let exit_id = exit_item.id().clone();
        MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
            if event.id == exit_id {
                let _ = proxy.send_event(ShellEvent::TrayExit);
            }
        }));

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(tooltip)
            .with_icon(icon)
            .build()
            .map_err(|e| PetError::Tray(e.to_string()))?;

        Ok(Self { _tray: tray })
    }
}
