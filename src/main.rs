//! Headless walkthrough of two strips exchanging a tab.

use anyhow::Context;
use tabstrip::{AddTabOptions, DataTransfer, StripInput, TabData, TabStrip};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = tabstrip::config::load_config();
    let mut left = TabStrip::new("left", 640).with_config(config.clone());
    let mut right = TabStrip::new("right", 480).with_config(config);

    let mut ids = Vec::new();
    for title in ["Inbox", "Docs", "Build log", "Release notes"] {
        ids.push(left.add_tab(Some(TabData::titled(title)), AddTabOptions::default()));
    }
    right.add_tab(None, AddTabOptions::default());

    // Drag the first tab to the right until it swaps into the third slot.
    let dragged = ids[0];
    let mut transfer = DataTransfer::new();
    left.dispatch(StripInput::PointerDown { tab: dragged, x: 40.0, y: 12.0 });
    left.dispatch(StripInput::DragStart { tab: dragged, x: 40.0, transfer: &mut transfer });
    for x in [80.0, 160.0, 240.0, 330.0] {
        left.dispatch(StripInput::DragMove { tab: dragged, x });
    }
    left.dispatch(StripInput::DragEnd { tab: dragged, x: 330.0 });
    while left.on_animation_frame() {}

    // The same payload dropped on the other strip becomes a new tab there.
    right.dispatch(StripInput::DropZoneEnter { transfer: &transfer });
    right.dispatch(StripInput::DragOver { transfer: &transfer });
    right.dispatch(StripInput::Drop { transfer: &transfer });

    for strip in [&mut left, &mut right] {
        for event in strip.take_events() {
            info!(instance = %strip.instance_id(), ?event, "strip event");
        }
        let visuals = serde_json::to_string_pretty(&strip.tab_visuals())
            .context("failed to encode tab visuals")?;
        println!("{}:\n{visuals}", strip.instance_id());
        print!("{}", strip.style_rules());
    }

    Ok(())
}
