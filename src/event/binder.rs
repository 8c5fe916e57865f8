//! Handler binding - wires mock handlers to events at mount time

use super::naming::listener_key;
use crate::framework::FrameworkIdiom;
use crate::js::quote;

/// Attribute fragment binding each `(event, handler)` pair, in input order
///
/// Returns `None` when there is nothing to bind.
pub fn bind(idiom: FrameworkIdiom, handlers: &[(String, String)]) -> Option<String> {
    if handlers.is_empty() {
        return None;
    }

    let code = match idiom {
        FrameworkIdiom::EventMap => {
            let entries: Vec<String> = handlers
                .iter()
                .map(|(event, handler)| format!("{}: {}", quote(&listener_key(event, idiom)), handler))
                .collect();
            format!("on={{{{ {} }}}}", entries.join(", "))
        }
        FrameworkIdiom::PropPerEvent => handlers
            .iter()
            .map(|(event, handler)| format!("{}={{{}}}", listener_key(event, idiom), handler))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(e, h)| (e.to_string(), h.to_string()))
            .collect()
    }

    #[test]
    fn test_event_map() {
        let code = bind(
            FrameworkIdiom::EventMap,
            &pairs(&[("click", "fn"), ("mouseEnter", "onMouseEnterFn1")]),
        );
        assert_eq!(
            code.as_deref(),
            Some("on={{ 'click': fn, 'mouse-enter': onMouseEnterFn1 }}")
        );
    }

    #[test]
    fn test_prop_per_event() {
        let code = bind(
            FrameworkIdiom::PropPerEvent,
            &pairs(&[("change", "onChangeFn"), ("blur", "onBlurFn1")]),
        );
        assert_eq!(
            code.as_deref(),
            Some("onChange={onChangeFn}\nonBlur={onBlurFn1}")
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(bind(FrameworkIdiom::PropPerEvent, &[]), None);
    }
}
