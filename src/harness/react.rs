//! `@testing-library/react` statements

use super::FireEvent;
use crate::js::quote;
use crate::model::ROOT_DOM;
use crate::util::to_camel_case;

pub(super) fn wrapper(mount_code: &str) -> String {
    format!("const {{ container }} = render({});", mount_code)
}

fn target(dom: &str) -> String {
    match dom {
        ROOT_DOM => "container.firstChild".into(),
        "document" => "document".into(),
        "body" => "document.body".into(),
        selector => format!("document.querySelector({})", quote(selector)),
    }
}

pub(super) fn fire_event(fire: &FireEvent<'_>) -> String {
    format!(
        "fireEvent.{}({});",
        to_camel_case(fire.event),
        target(fire.dom)
    )
}

pub(super) fn dom_truthy(selector: &str) -> String {
    format!(
        "expect(document.querySelector({})).toBeTruthy();",
        quote(selector)
    )
}

pub(super) fn dom_count(selector: &str, count: u64) -> String {
    format!(
        "expect(document.querySelectorAll({}).length).toBe({});",
        quote(selector),
        count
    )
}
