use crate::config::{DisplayConfig, Surface};
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, Layer, LayerShell};

fn layer_for(surface: Surface) -> Option<Layer> {
    match surface {
        Surface::Window => None,
        Surface::Bottom => Some(Layer::Bottom),
        Surface::Background => Some(Layer::Background),
    }
}

/// Turns `window` into a desktop layer surface when configured and supported.
///
/// Returns `false` when the window stays an ordinary toplevel.
pub fn init_layer_shell(window: &gtk::ApplicationWindow, display: &DisplayConfig) -> bool {
    let Some(layer) = layer_for(display.surface) else {
        return false;
    };
    if !gtk4_layer_shell::is_supported() {
        log::warn!(
            "Compositor does not support layer shell, showing '{}' surface as a window",
            display.surface
        );
        return false;
    }

    window.init_layer_shell();
    window.set_layer(layer);
    window.set_namespace(Some("ringclock"));
    window.set_exclusive_zone(-1);
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, true);
    }
    window.set_keyboard_mode(gtk4_layer_shell::KeyboardMode::None);

    if let Some(name) = &display.monitor {
        set_window_monitor(window, name);
    }
    true
}

pub fn get_monitor_by_name(name: &str) -> Option<gdk::Monitor> {
    let display = gdk::Display::default()?;
    let monitors = display.monitors();
    (0..monitors.n_items()).find_map(|i| {
        monitors
            .item(i)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok())
            .filter(|m| m.connector().is_some_and(|n| n.as_str() == name))
    })
}

pub fn set_window_monitor(window: &gtk::ApplicationWindow, monitor_name: &str) {
    match get_monitor_by_name(monitor_name) {
        Some(monitor) => window.set_monitor(Some(&monitor)),
        None => log::warn!("Monitor '{}' not found, using the default", monitor_name),
    }
}
