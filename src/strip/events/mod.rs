mod tab_drag;
mod tab_drop;

use crate::strip::payload::DataTransfer;
use crate::strip::state::TabId;
use crate::strip::{AddTabOptions, TabStrip};

/// Input a host feeds into a strip, translated from whatever pointer, drag
/// and resize events its surface produces.
#[derive(Debug)]
pub enum StripInput<'a> {
    PointerDown {
        tab: TabId,
        x: f64,
        y: f64,
    },
    PointerUp {
        tab: TabId,
    },
    DragStart {
        tab: TabId,
        x: f64,
        transfer: &'a mut DataTransfer,
    },
    DragMove {
        tab: TabId,
        x: f64,
    },
    DragEnd {
        tab: TabId,
        x: f64,
    },
    AnimationFrame,
    DropZoneEnter {
        transfer: &'a DataTransfer,
    },
    DragOver {
        transfer: &'a DataTransfer,
    },
    DropZoneLeave {
        transfer: &'a DataTransfer,
    },
    Drop {
        transfer: &'a DataTransfer,
    },
    /// Double click on the empty strip background.
    BackgroundDoubleClick,
    /// Middle (auxiliary) click on the empty strip background.
    BackgroundAuxClick,
    /// Middle (auxiliary) click on a tab.
    TabAuxClick {
        tab: TabId,
    },
    CloseButtonClick {
        tab: TabId,
    },
    Resize {
        width: i32,
    },
    TimerTick,
}

impl TabStrip {
    /// Routes one input to the matching handler.
    pub fn dispatch(&mut self, input: StripInput<'_>) {
        match input {
            StripInput::PointerDown { tab, x, y } => self.pointer_down(tab, x, y),
            StripInput::PointerUp { tab } => self.pointer_up(tab),
            StripInput::DragStart { tab, x, transfer } => {
                self.drag_start(tab, x, transfer);
            }
            StripInput::DragMove { tab, x } => self.drag_move(tab, x),
            StripInput::DragEnd { tab, x } => self.drag_end(tab, x),
            StripInput::AnimationFrame => {
                self.on_animation_frame();
            }
            StripInput::DropZoneEnter { transfer } => self.drop_zone_drag_enter(transfer),
            StripInput::DragOver { transfer } => self.strip_drag_over(transfer),
            StripInput::DropZoneLeave { transfer } => self.drop_zone_drag_leave(transfer),
            StripInput::Drop { transfer } => {
                self.drop_tab(transfer);
            }
            StripInput::BackgroundDoubleClick | StripInput::BackgroundAuxClick => {
                self.add_tab(None, AddTabOptions::default());
            }
            StripInput::TabAuxClick { tab } | StripInput::CloseButtonClick { tab } => {
                self.remove_tab(tab);
            }
            StripInput::Resize { width } => self.resize(width),
            StripInput::TimerTick => {
                self.run_due_timers();
            }
        }
    }
}
