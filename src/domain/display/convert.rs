//! Conversions from display domain types to wire types.

use super::wire::{AwtrixApp, WireDrawCommand};
use super::{CustomApp, DrawCommand, Notification};

impl From<&DrawCommand> for WireDrawCommand {
    fn from(cmd: &DrawCommand) -> Self {
        match cmd {
            DrawCommand::Text { x, y, text, color } => {
                WireDrawCommand::Text(*x, *y, text.clone(), *color)
            }
            DrawCommand::FilledRect {
                x,
                y,
                width,
                height,
                color,
            } => WireDrawCommand::FilledRect(*x, *y, *width, *height, *color),
        }
    }
}

impl From<&CustomApp> for AwtrixApp {
    fn from(app: &CustomApp) -> Self {
        let options = &app.options;
        Self {
            draw: app.draw.iter().map(WireDrawCommand::from).collect(),
            duration: options.duration,
            lifetime: options.lifetime,
            pos: options.pos,
            no_scroll: options.no_scroll.then_some(true),
            scroll_speed: options.scroll_speed,
            clients: options.clients.clone(),
            ..Self::default()
        }
    }
}

impl From<&Notification> for AwtrixApp {
    fn from(n: &Notification) -> Self {
        Self {
            text: Some(n.text.clone()),
            color: n.color,
            icon: n.icon.clone(),
            duration: n.duration,
            hold: n.hold.then_some(true),
            // The device stacks by default; always say what we want.
            stack: Some(n.stack),
            wakeup: n.wakeup.then_some(true),
            sound: n.sound.clone(),
            rtttl: n.rtttl.clone(),
            clients: n.clients.clone(),
            ..Self::default()
        }
    }
}
