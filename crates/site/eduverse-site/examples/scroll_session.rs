//! Drives a simulated browse session: mount the chrome and home page, scroll
//! down through every section, open and close the drawer, then unmount.
//!
//! Run with `RUST_LOG=debug` to watch binding lifecycle decisions.

use anyhow::Result;

use eduverse_motion_core::{Engine, Inputs, MotionEvent, Viewport};
use eduverse_site::{mount_chrome, mount_page, PageKind};

const TICK: f32 = 1.0 / 60.0;
const CONTENT_EXTENT: f32 = 3400.0;

fn main() -> Result<()> {
    env_logger::init();

    let mut engine = Engine::default();
    let mut chrome = mount_chrome(&mut engine)?;
    let mut home = mount_page(&mut engine, PageKind::Home)?;

    // Scroll from the top to the testimonials at ~40 px per frame.
    let mut offset = 0.0f32;
    let mut events = 0usize;
    let mut changes = 0usize;
    while offset < 2700.0 {
        let out = engine.update(
            TICK,
            Inputs::with_viewport(Viewport {
                scroll_offset: offset,
                viewport_extent: 900.0,
                content_extent: CONTENT_EXTENT,
            }),
        );
        for event in &out.events {
            if let MotionEvent::ZoneEntered { element, .. } = event {
                log::info!("entered zone at offset {offset:.0}: {element:?}");
            }
        }
        events += out.events.len();
        changes += out.changes.len();
        offset += 40.0;
    }

    // Open the drawer, change our mind halfway, and let it settle.
    engine.toggle_drawer();
    for _ in 0..6 {
        engine.update(TICK, Inputs::default());
    }
    engine.toggle_drawer();
    loop {
        let out = engine.update(TICK, Inputs::default());
        if out
            .events
            .iter()
            .any(|e| matches!(e, MotionEvent::DrawerChanged { .. }))
        {
            break;
        }
    }
    println!(
        "session: {changes} style changes, {events} events, drawer settled {}",
        engine.drawer_state().name()
    );

    home.unmount(&mut engine);
    chrome.unmount(&mut engine);
    println!(
        "after unmount: {} reveals, {} ramps, {} subscriptions",
        engine.reveal_count(),
        engine.progress_count(),
        engine.subscription_count()
    );
    Ok(())
}
