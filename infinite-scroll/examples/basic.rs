// Example: threshold gating across a scripted scroll session.
use infinite_scroll::{InfiniteScroll, InfiniteScrollOptions, Insets, Point, ScrollEvent, Size};

fn event(offset: f64) -> ScrollEvent {
    ScrollEvent {
        content_size: Size::new(0.0, 3000.0),
        content_inset: Insets::default(),
        content_offset: Point::new(0.0, offset),
        viewport: Size::new(0.0, 600.0),
    }
}

fn main() {
    let mut scroll = InfiniteScroll::<String>::new(
        InfiniteScrollOptions::new()
            .with_can_load_more(true)
            .with_distance_to_load_more(800.0),
    );

    for offset in [0.0, 500.0, 1000.0, 1700.0, 2100.0] {
        let e = event(offset);
        let started = scroll.handle_scroll(&e);
        println!(
            "offset={offset} distance={} started={started}",
            scroll.distance_from_end(&e)
        );
        if started {
            // A real host awaits its loader here, then reports the outcome and
            // settles after its interaction batch.
            scroll.complete_load(Ok(()));
            scroll.settle();
        }
    }

    println!("trailing_slot={:?}", scroll.trailing_slot());
}
