use std::sync::Arc;

use futures::executor::block_on;
use infinite_scroll_adapter::{
    LoadFuture, ScrollContainer, ScrollContainerOptions, ScrollView, ScrollViewProps,
};

use infinite_scroll::{InfiniteScrollOptions, Point, ScrollEvent, Size};

struct SimScrollView {
    offset: Point,
    content: Size,
    viewport: Size,
}

impl ScrollView for SimScrollView {
    fn content_offset(&self) -> Point {
        self.offset
    }

    fn content_size(&self) -> Size {
        self.content
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn scroll_to(&mut self, offset: Point, _animated: bool) {
        self.offset = offset;
    }

    fn set_props(&mut self, _props: &ScrollViewProps) {}
}

fn main() {
    // Example: container driving a simulated scroll session without holding
    // any real UI objects.
    //
    // A host would:
    // - feed every scroll event to handle_scroll
    // - await the returned future and report via complete_load
    // - call on_interactions_settled from its after-interactions primitive
    // - place trailing_element() after its children when rendering
    let pages = Arc::new(std::sync::atomic::AtomicUsize::new(1));
    let loaded = Arc::clone(&pages);
    let options = ScrollContainerOptions::<SimScrollView, String>::new(
        move || -> LoadFuture<String> {
            let loaded = Arc::clone(&loaded);
            Box::pin(async move {
                // A real loader fetches the next page here.
                let page = loaded.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
                if page == 4 { Err("page 4 unavailable".to_string()) } else { Ok(()) }
            })
        },
        |_props| SimScrollView {
            offset: Point::default(),
            content: Size::new(800.0, 2000.0),
            viewport: Size::new(800.0, 600.0),
        },
    )
    .with_scroll(
        InfiniteScrollOptions::new()
            .with_can_load_more(true)
            .with_distance_to_load_more(400.0)
            .with_on_load_error(Some(|err: &String| println!("load error: {err}"))),
    );
    let mut c = ScrollContainer::new(options);

    for step in 0u32.. {
        let page_count = pages.load(std::sync::atomic::Ordering::Relaxed);
        let content = 2000.0 * page_count as f64;
        let offset = content - 600.0 - 100.0 * f64::from(step);
        let event = ScrollEvent {
            content_size: Size::new(800.0, content),
            content_offset: Point::new(0.0, offset.max(0.0)),
            viewport: Size::new(800.0, 600.0),
            ..ScrollEvent::default()
        };

        if let Some(load) = c.handle_scroll(&event) {
            println!("step={step} loading page {}", page_count + 1);
            c.complete_load(block_on(load));
            c.on_interactions_settled();
        }

        println!("step={step} trailing={:?}", c.trailing_element());
        if c.is_displaying_error() || step > 6 {
            break;
        }
    }

    // The error indicator's retry trigger drives recovery.
    c.retry_trigger().trigger();
    if let Some(load) = c.poll_retry() {
        println!("retrying");
        c.complete_load(block_on(load));
        c.on_interactions_settled();
    }
    println!("final trailing={:?}", c.trailing_element());
}
