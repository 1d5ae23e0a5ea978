//! Drives an overlay over a simulated scrolling area and prints the element
//! model after every frame, the way a renderer would consume it.
//!
//! Run with `RUST_LOG=debug cargo run --example headless`.

use std::time::{Duration, Instant};

use scrolling::prelude::*;

struct SimulatedArea {
    client: Size,
    scroll: Size,
    offset: PerAxis<f32>,
}

impl ScrollHost for SimulatedArea {
    fn offset_size(&self) -> Size {
        // 12px native scrollbars on both axes
        Size::new(self.client.width + 12.0, self.client.height + 12.0)
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn scroll_size(&self) -> Size {
        self.scroll
    }

    fn scroll_offset(&self, axis: Axis) -> f32 {
        *self.offset.get(axis)
    }

    fn set_scroll_offset(&mut self, axis: Axis, offset: f32) {
        let max = (self.scroll.along(axis) - self.client.along(axis)).max(0.0);
        *self.offset.get_mut(axis) = offset.clamp(0.0, max);
    }
}

fn render(overlay: &ScrollOverlay<SimulatedArea>) {
    println!(
        "container: \"{}\"  area: \"{}\" ({}) tracks {}",
        overlay.container_classes(),
        overlay.area_classes(),
        overlay.area_style(),
        if overlay.bars_visible() { "shown" } else { "hidden" }
    );
    for state in overlay.axes() {
        println!(
            "  track \"{}\"  bar \"{}\" [{}] {}",
            state.track.classes,
            state.bar.classes,
            state.bar.style(),
            state.bar.label.as_deref().unwrap_or("")
        );
    }
}

fn main() -> scrolling::Result<()> {
    env_logger::init();

    let area = SimulatedArea {
        client: Size::new(320.0, 240.0),
        scroll: Size::new(960.0, 1200.0),
        offset: PerAxis::default(),
    };
    let container = Container::new(area)
        .data("scrolling", "scrolling")
        .data("scrolling-interactive", "");
    let mut overlay = ScrollOverlay::new(
        container,
        OverlayBuilder::new()
            .track_click(TrackClick::Page)
            .indicator(Indicator::Scroll)
            .animate(Transition::default().timing(TimingFunction::EaseInOut))
            .label("{currentPage}/{pages}"),
    )?;
    render(&overlay);
    overlay.take_changes();

    let start = Instant::now();
    let frame = Duration::from_millis(16);
    let mut now = start;

    // Wheel scrolling: three notifications land in one frame
    for offset in [40.0, 80.0, 120.0] {
        overlay.host_mut().set_scroll_offset(Axis::Y, offset);
        overlay.on_scroll();
    }

    // Page down by clicking the vertical track below the bar
    let track = overlay.axis(Axis::Y).map(|state| state.track.rect);
    if let Some(track) = track {
        overlay.event(&Event::MouseDown {
            x: track.x + 1.0,
            y: track.y + track.height - 2.0,
            button: MouseButton::Left,
        });
        overlay.event(&Event::MouseUp {
            x: track.x + 1.0,
            y: track.y + track.height - 2.0,
            button: MouseButton::Left,
        });
    }

    while now - start < Duration::from_secs(1) {
        if overlay.needs_frame() {
            overlay.frame(now);
        }
        overlay.poll(now);
        let changes = overlay.take_changes();
        if !changes.is_empty() {
            println!("{:>4}ms {:?}", (now - start).as_millis(), changes);
            render(&overlay);
        }
        now += frame;
    }

    Ok(())
}
