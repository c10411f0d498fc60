// Example: highlight the section whose top is in view inside a scrolling sidebar.
use std::rc::Rc;

use inview::{InView, InViewOptions, Rect, ScrollAmount, Size, Visibility};
use inview_adapter::SimHost;

fn main() -> Result<(), inview::ConfigError> {
    let host = SimHost::new(Size::new(1024.0, 768.0));
    let panel = host.add_element(None, Rect::from_xywh(0.0, 0.0, 320.0, 600.0));

    let mut spies = Vec::new();
    for (i, name) in ["intro", "install", "usage", "faq"].into_iter().enumerate() {
        let section = host.add_element(
            Some(panel),
            Rect::from_xywh(0.0, 700.0 * i as f64, 320.0, 650.0),
        );
        let on_change = move |v: Visibility| {
            if v.top_left {
                println!("active section: {name}");
            }
        };
        let options = InViewOptions::new()
            .with_context(Some(panel))
            .with_scroll_amount(ScrollAmount::new(8.0, 0.0));
        spies.push(InView::new(Rc::clone(&host), section, on_change, options)?);
    }

    for top in [0.0, 4.0, 250.0, 720.0, 1500.0, 2100.0] {
        println!("-- panel scrolled to {top}");
        host.scroll_element_to(panel, top, 0.0);
    }

    for spy in &mut spies {
        spy.stop();
    }
    Ok(())
}
