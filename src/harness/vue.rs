//! `@vue/test-utils` statements (Vue 2 and Vue 3)

use super::FireEvent;
use crate::framework::Framework;
use crate::js::quote;
use crate::model::ROOT_DOM;

pub(super) fn wrapper(framework: Framework, mount_code: &str) -> String {
    match framework {
        Framework::Vue2 => format!(
            "const wrapper = mount({{\n  render() {{\n    return {};\n  }},\n}});",
            mount_code
        ),
        _ => format!("const wrapper = mount(() => {});", mount_code),
    }
}

/// Vue listens for native DOM event names: `mouseEnter` → `mouseenter`
fn dom_event_name(event: &str) -> String {
    event.replace(['-', '_'], "").to_lowercase()
}

pub(super) fn fire_event(fire: &FireEvent<'_>) -> String {
    let event = quote(&dom_event_name(fire.event));
    let dispatch = match fire.dom {
        ROOT_DOM => format!(
            "wrapper.findComponent({}).trigger({});",
            fire.component, event
        ),
        "document" => format!("document.dispatchEvent(new Event({}));", event),
        "body" => format!("document.body.dispatchEvent(new Event({}));", event),
        selector => format!("wrapper.find({}).trigger({});", quote(selector), event),
    };
    format!("{}\nawait wrapper.vm.$nextTick();", dispatch)
}

pub(super) fn dom_truthy(selector: &str) -> String {
    format!("expect(wrapper.find({}).exists()).toBeTruthy();", quote(selector))
}

pub(super) fn dom_count(selector: &str, count: u64) -> String {
    format!(
        "expect(wrapper.findAll({}).length).toBe({});",
        quote(selector),
        count
    )
}
