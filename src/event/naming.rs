//! Event-name casing - the only place framework-specific names are derived

use crate::framework::FrameworkIdiom;
use crate::util::{to_kebab_case, to_pascal_case};

/// Mock name used by the bound-event form
pub const BOUND_HANDLER: &str = "fn";

/// `click` → `onClick`, `visible-change` → `onVisibleChange`
pub fn event_prop_name(event: &str) -> String {
    format!("on{}", to_pascal_case(event))
}

/// Mock handler for `event` declared in step `index`
///
/// Step 0 gets no suffix, so two steps declaring `click` get `onClickFn`
/// and `onClickFn1`.
///
/// # Examples
/// ```
/// use evgen::event::handler_name;
/// assert_eq!(handler_name("click", 0), "onClickFn");
/// assert_eq!(handler_name("click", 1), "onClickFn1");
/// ```
pub fn handler_name(event: &str, index: usize) -> String {
    if index == 0 {
        format!("{}Fn", event_prop_name(event))
    } else {
        format!("{}Fn{}", event_prop_name(event), index)
    }
}

/// Key or prop name a listener is registered under
pub fn listener_key(event: &str, idiom: FrameworkIdiom) -> String {
    match idiom {
        FrameworkIdiom::EventMap => to_kebab_case(event),
        FrameworkIdiom::PropPerEvent => event_prop_name(event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_names_unique_per_step() {
        let names: Vec<_> = (0..3).map(|i| handler_name("click", i)).collect();
        assert_eq!(names, vec!["onClickFn", "onClickFn1", "onClickFn2"]);
    }

    #[test]
    fn test_handler_name_casing() {
        assert_eq!(handler_name("mouse-enter", 0), "onMouseEnterFn");
        assert_eq!(handler_name("visibleChange", 2), "onVisibleChangeFn2");
    }

    #[test]
    fn test_listener_key() {
        assert_eq!(
            listener_key("visibleChange", FrameworkIdiom::EventMap),
            "visible-change"
        );
        assert_eq!(
            listener_key("visible-change", FrameworkIdiom::PropPerEvent),
            "onVisibleChange"
        );
    }
}
