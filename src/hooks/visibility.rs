use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    DomRectReadOnly, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

/// Fraction of the element that must be on screen before it counts as visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: "0px".to_string(),
        }
    }
}

impl ObserverOptions {
    fn to_init(&self) -> IntersectionObserverInit {
        // Zero is watched too so that elements too big to ever reach the
        // threshold still report entering and leaving the viewport.
        let thresholds = Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(self.threshold));
        let init = IntersectionObserverInit::new();
        init.set_threshold(&thresholds);
        init.set_root_margin(&self.root_margin);
        init
    }
}

/// Largest intersection ratio an element of `target` size can reach inside a
/// viewport of `root` size, both as (width, height).
pub fn reachable_ratio(target: (f64, f64), root: Option<(f64, f64)>) -> f64 {
    let Some((root_width, root_height)) = root else {
        return 1.0;
    };
    let fits = |root: f64, target: f64| {
        if target <= 0.0 {
            1.0
        } else {
            (root / target).clamp(0.0, 1.0)
        }
    };
    fits(root_width, target.0) * fits(root_height, target.1)
}

/// Decides the visibility signal for one intersection report.
///
/// The browser flags any overlap as intersecting, so a report fired while the
/// element is sliding out past the threshold still says `is_intersecting`.
/// Comparing the ratio too makes the signal drop as soon as the element falls
/// below the threshold. Elements that cannot reach the threshold at all
/// (`reachable` below it) count as visible whenever they intersect.
pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64, reachable: f64) -> bool {
    if reachable < threshold {
        return is_intersecting;
    }
    is_intersecting && ratio >= threshold
}

fn rect_size(rect: &DomRectReadOnly) -> (f64, f64) {
    (rect.width(), rect.height())
}

/// One live IntersectionObserver watching one element. Disconnects on drop.
pub struct ObservationSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObservationSubscription {
    pub fn observe(
        target: &Element,
        options: &ObserverOptions,
        on_change: Callback<bool>,
    ) -> Option<Self> {
        let threshold = options.threshold;
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            // Only the most recent report for our single target matters
            let latest = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last();
            if let Some(entry) = latest {
                let reachable = reachable_ratio(
                    rect_size(&entry.bounding_client_rect()),
                    entry.root_bounds().as_ref().map(rect_size),
                );
                on_change.emit(crosses_threshold(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                    reachable,
                ));
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options.to_init(),
        ) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable, content stays hidden: {:?}", e);
                return None;
            }
        };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObservationSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Tracks whether the element behind `node` is inside the viewport.
///
/// Starts out `false`, follows the element in both directions, and re-subscribes
/// whenever the node ref or the options change.
#[hook]
pub fn use_visibility(node: NodeRef, options: ObserverOptions) -> bool {
    let is_visible = use_state(|| false);

    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let subscription = node.cast::<Element>().and_then(|element| {
                    let setter = is_visible.setter();
                    ObservationSubscription::observe(
                        &element,
                        options,
                        Callback::from(move |visible: bool| setter.set(visible)),
                    )
                });
                if subscription.is_none() {
                    debug!("Visibility observer not attached");
                }

                move || drop(subscription)
            },
            (node, options),
        );
    }

    *is_visible
}

#[cfg(test)]
mod tests {
    use super::*;

    const FITS: f64 = 1.0;

    #[test]
    fn default_options_use_ten_percent() {
        let options = ObserverOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px");
    }

    #[test]
    fn visible_once_threshold_reached() {
        assert!(crosses_threshold(true, 0.1, 0.1, FITS));
        assert!(crosses_threshold(true, 0.75, 0.1, FITS));
        assert!(crosses_threshold(true, 1.0, 1.0, FITS));
    }

    #[test]
    fn hidden_below_threshold_even_when_overlapping() {
        assert!(!crosses_threshold(true, 0.05, 0.1, FITS));
        assert!(!crosses_threshold(false, 0.0, 0.1, FITS));
    }

    #[test]
    fn signal_follows_element_in_and_out() {
        let threshold = DEFAULT_THRESHOLD;
        let reports = [(false, 0.0), (true, 0.3), (true, 0.08), (false, 0.0), (true, 0.5)];
        let signals: Vec<bool> = reports
            .iter()
            .map(|&(hit, ratio)| crosses_threshold(hit, ratio, threshold, FITS))
            .collect();
        assert_eq!(signals, vec![false, true, false, false, true]);
    }

    #[test]
    fn zero_threshold_relies_on_intersection_flag() {
        assert!(crosses_threshold(true, 0.0, 0.0, FITS));
        assert!(!crosses_threshold(false, 0.0, 0.0, FITS));
    }

    #[test]
    fn reachable_ratio_of_elements_that_fit_is_one() {
        assert_eq!(reachable_ratio((300.0, 400.0), Some((1280.0, 800.0))), 1.0);
        assert_eq!(reachable_ratio((300.0, 400.0), None), 1.0);
        assert_eq!(reachable_ratio((0.0, 0.0), Some((1280.0, 800.0))), 1.0);
    }

    #[test]
    fn reachable_ratio_shrinks_for_oversized_elements() {
        // Twenty viewports tall: at most 5% can ever be on screen
        let reachable = reachable_ratio((1000.0, 16_000.0), Some((1280.0, 800.0)));
        assert!((reachable - 0.05).abs() < 1e-9);
    }

    #[test]
    fn oversized_element_shows_while_intersecting() {
        let reachable = reachable_ratio((1000.0, 16_000.0), Some((1280.0, 800.0)));
        assert!(crosses_threshold(true, 0.01, DEFAULT_THRESHOLD, reachable));
        assert!(crosses_threshold(true, 0.05, DEFAULT_THRESHOLD, reachable));
        assert!(!crosses_threshold(false, 0.0, DEFAULT_THRESHOLD, reachable));
    }
}
