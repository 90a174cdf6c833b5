//! Tests for ModalScope wiring
//!
//! Drives triggers and windows through the headless pointer hub the way a
//! page would: every click goes through capture listeners, the target's own
//! handler, then bubble listeners.

use std::rc::Rc;

use oasis_types::ModalConfig;

use super::{ModalScope, Transition, WindowPhase};
use crate::pointer::{ListenPhase, NodeId, NodeTree, PointerHub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CabinWindow {
    Form,
    ConfirmDelete,
}

/// Page with two trigger buttons, two window containers and some empty space
struct Page {
    tree: NodeTree,
    hub: Rc<PointerHub>,
    add_button: NodeId,
    delete_button: NodeId,
    form_container: NodeId,
    form_field: NodeId,
    confirm_container: NodeId,
    empty_space: NodeId,
}

fn page() -> Page {
    let tree = NodeTree::new();
    let body = tree.add_root();
    let toolbar = tree.add_child(body);
    let add_button = tree.add_child(toolbar);
    let delete_button = tree.add_child(toolbar);
    let layer = tree.add_child(body);
    let form_container = tree.add_child(layer);
    let form_field = tree.add_child(form_container);
    let confirm_container = tree.add_child(layer);
    let empty_space = tree.add_child(body);
    Page {
        tree,
        hub: Rc::new(PointerHub::new()),
        add_button,
        delete_button,
        form_container,
        form_field,
        confirm_container,
        empty_space,
    }
}

impl Page {
    fn click(&self, target: NodeId) {
        self.hub.dispatch(&self.tree.click(target), || {});
    }

    fn click_with(&self, target: NodeId, at_target: impl FnOnce()) {
        self.hub.dispatch(&self.tree.click(target), at_target);
    }
}

#[test]
fn test_trigger_activation_sets_open_name() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let trigger = scope.trigger(CabinWindow::Form);

    assert_eq!(trigger.opens(), &CabinWindow::Form);
    page.click_with(page.add_button, || {
        trigger.activate();
    });
    assert_eq!(scope.open_name(), Some(CabinWindow::Form));
}

#[test]
fn test_form_scenario_outside_click_dismisses() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let trigger = scope.trigger(CabinWindow::Form);
    let window = scope.window(CabinWindow::Form, page.form_container);

    assert_eq!(window.phase(), WindowPhase::Hidden);
    assert!(window.render().is_none());

    page.click_with(page.add_button, || {
        trigger.activate();
    });
    assert!(window.is_shown());
    let view = window.render().expect("window should render when open");
    assert_eq!(view.container, page.form_container);

    // Clicks inside the container keep it open
    page.click(page.form_field);
    page.click(page.form_container);
    assert!(window.is_shown());

    page.click(page.empty_space);
    assert_eq!(window.phase(), WindowPhase::Hidden);
    assert_eq!(scope.open_name(), None);
}

#[test]
fn test_form_scenario_close_control_dismisses() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let window = scope.window(CabinWindow::Form, page.form_container);

    scope.open(CabinWindow::Form);
    assert!(window.is_shown());

    assert_eq!(
        window.press_close(),
        Transition::Closed { previous: CabinWindow::Form }
    );
    assert!(!window.is_shown());
    assert_eq!(scope.open_name(), None);
}

#[test]
fn test_injected_close_capability_dismisses() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let window = scope.window(CabinWindow::Form, page.form_container);

    scope.open(CabinWindow::Form);
    let view = window.render().unwrap();

    // Content calls its injected close, e.g. from a Cancel button in the form
    page.click_with(page.form_field, || view.on_close_modal.call());
    assert!(!window.is_shown());
    assert_eq!(scope.open_name(), None);
}

#[test]
fn test_switching_windows_keeps_single_active() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let open_form = scope.trigger(CabinWindow::Form);
    let open_confirm = scope.trigger(CabinWindow::ConfirmDelete);
    let form = scope.window(CabinWindow::Form, page.form_container);
    let confirm = scope.window(CabinWindow::ConfirmDelete, page.confirm_container);

    page.click_with(page.add_button, || {
        open_form.activate();
    });
    assert!(form.is_shown());
    assert!(!confirm.is_shown());
    assert_eq!(scope.shown_windows(), vec![CabinWindow::Form]);

    // Capture listener closes the form first, then the trigger opens the other
    page.click_with(page.delete_button, || {
        open_confirm.activate();
    });
    assert!(!form.is_shown());
    assert!(confirm.is_shown());
    assert_eq!(scope.shown_windows(), vec![CabinWindow::ConfirmDelete]);
}

#[test]
fn test_direct_open_switch_shows_only_latest() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let form = scope.window(CabinWindow::Form, page.form_container);
    let confirm = scope.window(CabinWindow::ConfirmDelete, page.confirm_container);

    scope.open(CabinWindow::Form);
    scope.open(CabinWindow::ConfirmDelete);
    assert!(!form.is_shown());
    assert!(confirm.is_shown());
}

#[test]
fn test_window_never_opened_never_renders() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let confirm = scope.window(CabinWindow::ConfirmDelete, page.confirm_container);

    scope.open(CabinWindow::Form);
    page.click(page.empty_space);
    scope.open(CabinWindow::Form);
    scope.close();

    assert!(confirm.render().is_none());
    assert_eq!(confirm.phase(), WindowPhase::Hidden);
}

#[test]
fn test_reopening_same_trigger_is_idempotent() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let trigger = scope.trigger(CabinWindow::Form);

    assert!(trigger.activate().is_change());
    assert_eq!(trigger.activate(), Transition::Unchanged);
    assert_eq!(scope.close(), Transition::Closed { previous: CabinWindow::Form });
    assert_eq!(scope.close(), Transition::Unchanged);
}

#[test]
fn test_idempotent_calls_do_not_rerender() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let _form = scope.window(CabinWindow::Form, page.form_container);

    scope.close();
    assert_eq!(scope.render_count(), 0);

    scope.open(CabinWindow::Form);
    scope.open(CabinWindow::Form);
    scope.trigger(CabinWindow::Form).activate();
    assert_eq!(scope.render_count(), 1);

    scope.close();
    scope.close();
    assert_eq!(scope.render_count(), 2);
}

#[test]
fn test_hidden_window_ignores_clicks_outside_its_old_region() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let form = scope.window(CabinWindow::Form, page.form_container);
    let confirm = scope.window(CabinWindow::ConfirmDelete, page.confirm_container);

    scope.open(CabinWindow::Form);
    scope.open(CabinWindow::ConfirmDelete);
    assert!(!form.is_shown());

    // Outside the form's container but inside the shown window
    page.click(page.confirm_container);
    assert!(confirm.is_shown());
    assert_eq!(scope.open_name(), Some(CabinWindow::ConfirmDelete));
}

#[test]
fn test_unmount_removes_listener() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let window = scope.window(CabinWindow::Form, page.form_container);
    assert_eq!(page.hub.listener_count(), 1);

    scope.open(CabinWindow::Form);
    drop(window);
    assert_eq!(page.hub.listener_count(), 0);

    // No renderer left to dismiss it
    page.click(page.empty_space);
    assert_eq!(scope.open_name(), Some(CabinWindow::Form));
    assert!(scope.shown_windows().is_empty());
}

#[test]
fn test_window_mounted_while_open_shows_immediately() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    scope.open(CabinWindow::Form);

    let window = scope.window(CabinWindow::Form, page.form_container);
    assert!(window.is_shown());
    assert_eq!(window.name(), Some(CabinWindow::Form));
}

#[test]
fn test_duplicate_names_render_together() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let first = scope.window(CabinWindow::Form, page.form_container);
    let second = scope.window(CabinWindow::Form, page.confirm_container);

    scope.open(CabinWindow::Form);
    assert!(first.is_shown());
    assert!(second.is_shown());
}

#[test]
fn test_capture_phase_trigger_reopens_after_outside_close() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let trigger = scope.trigger(CabinWindow::Form);
    let window = scope.window(CabinWindow::Form, page.form_container);

    scope.open(CabinWindow::Form);
    // Capture listener closes first, then the trigger's own handler reopens
    page.click_with(page.add_button, || {
        trigger.activate();
    });
    assert!(window.is_shown());
}

#[test]
fn test_bubble_phase_closes_after_target_handler() {
    let page = page();
    let config = ModalConfig {
        listen_capturing: false,
        ..ModalConfig::default()
    };
    let scope = ModalScope::with_config(Rc::clone(&page.hub), &config);
    let trigger = scope.trigger(CabinWindow::Form);
    let window = scope.window(CabinWindow::Form, page.form_container);

    scope.open(CabinWindow::Form);
    // Trigger handler is a no-op on the open window, then the bubble listener closes it
    page.click_with(page.add_button, || {
        trigger.activate();
    });
    assert!(!window.is_shown());
    assert_eq!(scope.open_name(), None);
}

#[test]
fn test_scopes_are_isolated() {
    let page = page();
    let outer = ModalScope::with_phase(Rc::clone(&page.hub), ListenPhase::Capture);
    let inner = ModalScope::new(Rc::clone(&page.hub));

    outer.open(CabinWindow::Form);
    inner.open(CabinWindow::ConfirmDelete);
    assert_eq!(outer.open_name(), Some(CabinWindow::Form));
    assert_eq!(inner.open_name(), Some(CabinWindow::ConfirmDelete));
}

#[test]
fn test_close_capability_outliving_scope_is_inert() {
    let page = page();
    let scope = ModalScope::new(Rc::clone(&page.hub));
    let window = scope.window(CabinWindow::Form, page.form_container);
    scope.open(CabinWindow::Form);
    let view = window.render().unwrap();

    drop(window);
    drop(scope);
    view.on_close_modal.call();
    assert_eq!(page.hub.listener_count(), 0);
}
