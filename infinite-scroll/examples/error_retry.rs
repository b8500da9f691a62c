// Example: failed load, error indicator, optimistic retry.
use infinite_scroll::{InfiniteScroll, InfiniteScrollOptions};

fn main() {
    let mut scroll = InfiniteScroll::<&str>::new(
        InfiniteScrollOptions::new()
            .with_can_load_more(true)
            .with_on_load_error(Some(|err: &&str| println!("load failed: {err}"))),
    );

    scroll.begin_load();
    scroll.complete_load(Err("request timed out"));
    scroll.settle();
    println!("after failure: trailing_slot={:?}", scroll.trailing_slot());

    // Retrying clears the error display before the new load resolves.
    scroll.begin_load();
    println!("after retry: trailing_slot={:?}", scroll.trailing_slot());

    scroll.complete_load(Ok(()));
    scroll.settle();
    println!("after success: trailing_slot={:?}", scroll.trailing_slot());
}
