// Example: load images as they scroll into view, using the simulated document.
use std::cell::RefCell;
use std::rc::Rc;

use inview::{Edge, InView, InViewOptions, Rect, Size};
use inview_adapter::{SimHost, Transition, on_transition};

fn main() -> Result<(), inview::ConfigError> {
    let host = SimHost::new(Size::new(1280.0, 720.0));
    let loaded = Rc::new(RefCell::new(Vec::new()));

    let mut engines = Vec::new();
    for i in 0..8u32 {
        let image = host.add_element(
            None,
            Rect::from_xywh(40.0, 400.0 * i as f64, 600.0, 300.0),
        );
        let loaded = Rc::clone(&loaded);
        let on_change = on_transition(move |t| {
            if let Transition::Enter(v) = t {
                println!("image {i} entered view (top_left={})", v.top_left);
                if !loaded.borrow().contains(&i) {
                    loaded.borrow_mut().push(i);
                }
            }
        });
        // Start loading a little before the image is actually on screen.
        let options = InViewOptions::new().with_offset(Edge::Top, -200.0);
        engines.push(InView::new(Rc::clone(&host), image, on_change, options)?);
    }

    for engine in &engines {
        engine.recalculate();
    }
    for scroll in (0..=2400).step_by(300) {
        host.scroll_document_to(scroll as f64, 0.0);
    }

    println!("loaded images: {:?}", loaded.borrow());
    Ok(())
}
