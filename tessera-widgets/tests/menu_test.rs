//! Tests for menu construction, layout and dismissal

use std::cell::RefCell;
use std::rc::Rc;

use tessera_core::app::context::AppContext;
use tessera_core::geometry::{Position, Size};
use tessera_core::menu::{MenuTemplate, MenuTemplateItem};
use tessera_core::renderer::WidgetRenderer;
use tessera_core::widget::{Hoverable, PointEvent, Tappable, Widget};
use tessera_widgets::menu::{Menu, MenuElement};
use tessera_widgets::menu_item::MenuItem;
use tessera_widgets::popup_menu::PopUpMenu;

type Log = Rc<RefCell<Vec<String>>>;

fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn record(log: &Log, entry: &str) -> impl Fn() + 'static {
    let log = log.clone();
    let entry = entry.to_string();
    move || log.borrow_mut().push(entry.clone())
}

fn tap() -> PointEvent {
    PointEvent::new(Position::new(1.0, 1.0))
}

fn file_menu(log: &Log) -> MenuTemplate {
    MenuTemplate::new("File").with_items([
        MenuTemplateItem::new("Open").with_action(record(log, "open")),
        MenuTemplateItem::separator(),
        MenuTemplateItem::new("Quit").with_action(record(log, "quit")),
    ])
}

/// A -> "More" opens B -> "Deeper" opens C -> "Leaf".
fn nested_menu(log: &Log) -> MenuTemplate {
    let c = MenuTemplate::new("C").with_item(MenuTemplateItem::new("Leaf").with_action(record(log, "leaf")));
    let b = MenuTemplate::new("B").with_items([
        MenuTemplateItem::new("Sibling"),
        MenuTemplateItem::new("Deeper").with_submenu(c),
    ]);
    MenuTemplate::new("A").with_items([
        MenuTemplateItem::new("Plain"),
        MenuTemplateItem::new("More").with_submenu(b),
        MenuTemplateItem::new("Other").with_submenu(MenuTemplate::new("Other")),
    ])
}

fn item(menu: &Menu, index: usize) -> Rc<MenuItem> {
    menu.items()[index].as_item().unwrap().clone()
}

fn submenu(menu: &Menu, index: usize) -> Menu {
    item(menu, index).child().unwrap().clone()
}

#[test]
fn test_construction_preserves_entries() {
    let log = new_log();
    let context = AppContext::default();
    let menu = Menu::new(&nested_menu(&log), &context);

    assert_eq!(menu.items().len(), 3);
    let labels: Vec<_> = menu
        .items()
        .iter()
        .map(|element| element.as_item().unwrap().label().to_string())
        .collect();
    assert_eq!(labels, vec!["Plain", "More", "Other"]);

    let b = submenu(&menu, 1);
    assert_eq!(b.items().len(), 2);
    let c = submenu(&b, 1);
    assert_eq!(item(&c, 0).label(), "Leaf");
    assert!(item(&c, 0).has_action());
    assert!(c.root().ptr_eq(&menu));
    assert!(item(&menu, 0).child().is_none());

    let flat = Menu::new(&file_menu(&log), &context);
    let separators: Vec<bool> = flat.items().iter().map(MenuElement::is_separator).collect();
    assert_eq!(separators, vec![false, true, false]);
}

#[test]
fn test_min_size_covers_children_and_padding() {
    let context = AppContext::default();
    let menu = Menu::new(&file_menu(&new_log()), &context);
    let padding = context.theme().padding();

    let children: Vec<Size> = menu
        .items()
        .iter()
        .map(|element| element.as_widget().min_size())
        .collect();
    let height: f32 = children.iter().map(|size| size.y).sum();
    let width = children.iter().map(|size| size.x).fold(0.0, f32::max);

    let min = menu.min_size();
    assert!(min.y >= height + 2.0 * padding);
    assert!(min.x >= width);
    assert_eq!(min, Size::new(44.0, 61.0));
    assert_eq!(menu.renderer().min_size(), min);
}

#[test]
fn test_empty_menu_is_only_padding() {
    let context = AppContext::default();
    let menu = Menu::new(&MenuTemplate::new("Empty"), &context);

    assert_eq!(menu.min_size(), Size::new(0.0, 8.0));
    menu.resize(Size::new(30.0, 30.0));
    assert_eq!(menu.size(), Size::new(0.0, 8.0));
}

#[test]
fn test_natural_size_ignores_requested_size() {
    let context = AppContext::default();
    let menu = Menu::new(&file_menu(&new_log()), &context);

    for requested in [
        Size::new(500.0, 500.0),
        Size::new(1.0, 1.0),
        Size::new(44.0, 1000.0),
    ] {
        menu.resize(requested);
        assert_eq!(menu.size(), menu.min_size());
    }
}

#[test]
fn test_custom_sized_takes_componentwise_max() {
    let context = AppContext::default();
    let menu = Menu::new(&file_menu(&new_log()), &context);
    menu.set_custom_sized(true);

    menu.resize(Size::new(100.0, 10.0));
    assert_eq!(menu.size(), Size::new(100.0, 61.0));

    menu.resize(Size::new(10.0, 100.0));
    assert_eq!(menu.size(), Size::new(44.0, 100.0));

    menu.resize(Size::new(120.0, 90.0));
    assert_eq!(menu.size(), Size::new(120.0, 90.0));
    assert_eq!(menu.renderer().container().size(), Size::new(120.0, 82.0));
}

#[test]
fn test_layout_reaches_fixed_point() {
    let context = AppContext::default();
    let menu = Menu::new(&file_menu(&new_log()), &context);
    let requested = Size::new(300.0, 20.0);

    assert_eq!(menu.renderer().layout_passes(requested), 2);
    let settled = menu.size();
    assert_eq!(menu.renderer().layout_passes(requested), 1);
    assert_eq!(menu.size(), settled);

    menu.set_custom_sized(true);
    assert_eq!(menu.renderer().layout_passes(requested), 2);
    assert_eq!(menu.size(), Size::new(300.0, 61.0));
    assert_eq!(menu.renderer().layout_passes(requested), 1);
    assert_eq!(menu.size(), Size::new(300.0, 61.0));
}

#[test]
fn test_layout_positions_shadow_and_items() {
    let context = AppContext::default();
    let menu = Menu::new(&file_menu(&new_log()), &context);
    menu.resize(Size::new(10.0, 10.0));

    let renderer = menu.renderer();
    assert_eq!(renderer.shadow().size(), Size::new(44.0, 61.0));
    assert_eq!(renderer.shadow().position(), Position::zeros());
    assert_eq!(renderer.container().size(), Size::new(44.0, 53.0));
    assert_eq!(renderer.container().position(), Position::new(0.0, 4.0));

    let rows: Vec<(Position, Size)> = menu
        .items()
        .iter()
        .map(|element| {
            let widget = element.as_widget();
            (widget.position(), widget.size())
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            (Position::new(0.0, 0.0), Size::new(44.0, 22.0)),
            (Position::new(0.0, 26.0), Size::new(44.0, 1.0)),
            (Position::new(0.0, 31.0), Size::new(44.0, 22.0)),
        ]
    );

    let objects = renderer.objects();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].widget_id().id(), "Shadow");
    assert_eq!(objects[1].widget_id().id(), "Container");
}

#[test]
fn test_show_collapses_to_natural_size() {
    let context = AppContext::default();
    let menu = Menu::new(&file_menu(&new_log()), &context);
    menu.hide();
    context.canvas().take_dirty();

    menu.show();
    assert!(menu.visible());
    assert_eq!(menu.size(), Size::new(44.0, 61.0));
    assert!(context.canvas().is_dirty(menu.base().key()));
}

#[test]
fn test_refresh_marks_menu_dirty() {
    let context = AppContext::default();
    let menu = Menu::new(&file_menu(&new_log()), &context);

    menu.refresh();
    assert_eq!(context.canvas().take_dirty(), vec![menu.base().key()]);

    menu.renderer().refresh();
    assert_eq!(context.canvas().take_dirty(), vec![menu.base().key()]);
}

#[test]
fn test_dismiss_without_child_or_action_is_noop() {
    let context = AppContext::default();
    let menu = Menu::new(&file_menu(&new_log()), &context);

    menu.dismiss();
    assert!(menu.active_child().is_none());
    assert!(menu.visible());
}

#[test]
fn test_cascading_dismiss_order() {
    let log = new_log();
    let context = AppContext::default();
    let a = Menu::new(&nested_menu(&log), &context);
    let b = submenu(&a, 1);
    let c = submenu(&b, 1);

    item(&a, 1).tapped(&tap());
    item(&b, 1).tapped(&tap());
    assert!(a.active_child().unwrap().ptr_eq(&b));
    assert!(b.active_child().unwrap().ptr_eq(&c));
    assert!(b.visible() && c.visible());

    let events = new_log();
    let (c_events, b_handle, c_handle) = (events.clone(), b.downgrade(), c.downgrade());
    c.set_dismiss_action(move || {
        let (b, c) = (b_handle.upgrade().unwrap(), c_handle.upgrade().unwrap());
        assert!(b.active_child().is_none());
        assert!(!c.visible());
        c_events.borrow_mut().push("C".to_string());
    });
    let (b_events, a_handle, b_handle) = (events.clone(), a.downgrade(), b.downgrade());
    b.set_dismiss_action(move || {
        let (a, b) = (a_handle.upgrade().unwrap(), b_handle.upgrade().unwrap());
        assert!(a.active_child().is_none());
        assert!(!b.visible());
        b_events.borrow_mut().push("B".to_string());
    });
    a.set_dismiss_action(record(&events, "A"));

    a.dismiss();

    assert_eq!(*events.borrow(), vec!["C", "B", "A"]);
    assert!(a.active_child().is_none());
    assert!(b.active_child().is_none());
    assert!(!b.visible());
    assert!(!c.visible());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_deactivate_child_does_not_recurse() {
    let log = new_log();
    let context = AppContext::default();
    let a = Menu::new(&nested_menu(&log), &context);
    let b = submenu(&a, 1);
    let c = submenu(&b, 1);

    item(&a, 1).tapped(&tap());
    item(&b, 1).tapped(&tap());
    b.set_dismiss_action(record(&log, "b dismissed"));

    a.deactivate_child();

    assert!(a.active_child().is_none());
    assert!(!b.visible());
    assert!(b.active_child().unwrap().ptr_eq(&c));
    assert!(c.visible());
    assert!(log.borrow().is_empty());

    a.deactivate_child();
    assert!(a.active_child().is_none());
}

#[test]
fn test_taps_on_separator_and_padding_do_nothing() {
    let log = new_log();
    let context = AppContext::default();
    let menu = Menu::new(&file_menu(&log), &context);

    let MenuElement::Separator(separator) = &menu.items()[1] else {
        panic!("expected a separator");
    };
    separator.tapped(&tap());
    menu.tapped(&PointEvent::new(Position::new(2.0, 1.0)));

    assert!(log.borrow().is_empty());
    assert!(menu.active_child().is_none());
    assert!(menu.visible());

    let nested = Menu::new(&nested_menu(&log), &context);
    item(&nested, 1).tapped(&tap());
    nested.tapped(&tap());
    assert!(nested.active_child().unwrap().ptr_eq(&submenu(&nested, 1)));
}

#[test]
fn test_leaf_tap_closes_whole_chain_then_runs_action() {
    let log = new_log();
    let context = AppContext::default();
    let a = Menu::new(&nested_menu(&log), &context);
    let b = submenu(&a, 1);
    let c = submenu(&b, 1);
    a.set_dismiss_action(record(&log, "a dismissed"));

    item(&a, 1).tapped(&tap());
    item(&b, 1).tapped(&tap());
    item(&c, 0).tapped(&tap());

    assert_eq!(*log.borrow(), vec!["a dismissed", "leaf"]);
    assert!(a.active_child().is_none());
    assert!(b.active_child().is_none());
    assert!(!b.visible());
    assert!(!c.visible());
}

#[test]
fn test_hover_switches_between_sibling_submenus() {
    let context = AppContext::default();
    let a = Menu::new(&nested_menu(&new_log()), &context);
    let more = item(&a, 1);
    let other = item(&a, 2);
    let b = submenu(&a, 1);
    let other_menu = submenu(&a, 2);

    a.resize(Size::zeros());
    more.mouse_in(&tap());
    assert!(more.is_hovered());
    assert!(a.active_child().unwrap().ptr_eq(&b));
    // container inset 4 + "Plain" 22 + spacing 4 - padding 4
    assert_eq!(b.position(), Position::new(more.size().x, 26.0));

    more.mouse_out();
    assert!(!more.is_hovered());
    assert!(a.active_child().unwrap().ptr_eq(&b));

    other.mouse_in(&tap());
    assert!(a.active_child().unwrap().ptr_eq(&other_menu));
    assert!(!b.visible());
    assert!(other_menu.visible());

    item(&a, 0).mouse_in(&tap());
    assert!(a.active_child().is_none());
    assert!(!other_menu.visible());
}

#[test]
fn test_dismiss_action_may_reenter_menu() {
    let log = new_log();
    let context = AppContext::default();
    let menu = Menu::new(&nested_menu(&log), &context);
    item(&menu, 1).tapped(&tap());

    {
        let (menu_handle, log) = (menu.downgrade(), log.clone());
        menu.set_dismiss_action(move || {
            log.borrow_mut().push("dismissed".to_string());
            if let Some(menu) = menu_handle.upgrade() {
                menu.hide();
                menu.clear_dismiss_action();
                menu.dismiss();
            }
        });
    }

    menu.dismiss();
    assert_eq!(*log.borrow(), vec!["dismissed"]);
    assert!(!menu.visible());
    assert!(menu.active_child().is_none());

    menu.show();
    item(&menu, 1).tapped(&tap());
    assert!(menu.active_child().is_some());
}

#[test]
fn test_popup_menu_lives_in_an_overlay() {
    let log = new_log();
    let context = AppContext::default();
    let popup = PopUpMenu::new(&file_menu(&log), &context);

    assert!(!popup.menu().visible());
    assert!(context.overlays().is_empty());

    popup.show_at(Position::new(30.0, 40.0));
    let overlay = popup.overlay().unwrap();
    assert!(context.overlays().contains(overlay));
    assert!(popup.menu().visible());
    assert_eq!(popup.menu().position(), Position::new(30.0, 40.0));
    assert_eq!(popup.menu().size(), Size::new(44.0, 61.0));

    item(popup.menu(), 2).tapped(&tap());
    assert_eq!(*log.borrow(), vec!["quit"]);
    assert!(!popup.is_shown());
    assert!(context.overlays().is_empty());
    assert!(!popup.menu().visible());

    popup.show_at(Position::zeros());
    popup.show_at(Position::new(5.0, 5.0));
    assert_eq!(context.overlays().len(), 1);
    popup.dismiss();
    assert!(context.overlays().is_empty());
}

#[test]
fn test_popup_menu_resize_is_custom_sized() {
    let context = AppContext::default();
    let popup = PopUpMenu::new(&file_menu(&new_log()), &context);

    popup.resize(Size::new(200.0, 10.0));
    assert!(popup.menu().is_custom_sized());
    assert_eq!(popup.menu().size(), Size::new(200.0, 61.0));
}

#[test]
fn test_open_submenu_is_drawn_on_top() {
    let context = AppContext::default();
    let a = Menu::new(&nested_menu(&new_log()), &context);
    let b = submenu(&a, 1);
    a.resize(Size::zeros());
    assert_eq!(a.renderer().objects().len(), 2);

    item(&a, 1).tapped(&tap());
    let objects = a.renderer().objects();
    assert_eq!(objects.len(), 3);
    assert_eq!(objects[2].widget_id().id(), "Menu");
    assert_eq!(objects[2].position(), b.position());
    assert_eq!(objects[2].size(), b.min_size());

    a.deactivate_child();
    assert_eq!(a.renderer().objects().len(), 2);
}

#[test]
fn test_dropping_shown_popup_frees_menu() {
    let context = AppContext::default();
    let popup = PopUpMenu::new(&file_menu(&new_log()), &context);
    popup.show_at(Position::new(10.0, 10.0));
    let menu = popup.menu().downgrade();

    drop(popup);

    assert!(context.overlays().is_empty());
    assert!(menu.upgrade().is_none());
}
