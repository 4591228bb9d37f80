// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use log::{trace, warn};
use tessera_core::app::context::AppContext;
use tessera_core::container::Container;
use tessera_core::geometry::{Position, Size};
use tessera_core::layout::VBoxLayout;
use tessera_core::renderer::WidgetRenderer;
use tessera_core::widget::Widget;
use tessera_theme::theme::ElevationLevel;

use crate::menu::{MenuElement, WeakMenu};
use crate::shadow::{Shadow, ShadowingRenderer};

/// A resize always settles within this many passes because the target size
/// does not change once the menu has taken it.
const MAX_LAYOUT_PASSES: usize = 2;

/// Lays out a [Menu](crate::menu::Menu): a shadow behind a vertical stack
/// of its rows, inset by the theme padding above and below.
pub struct MenuRenderer {
    shadowing: ShadowingRenderer,
    container: Rc<Container>,
    menu: WeakMenu,
}

impl MenuRenderer {
    pub(crate) fn new(
        menu: WeakMenu,
        elements: &[MenuElement],
        level: ElevationLevel,
        context: &AppContext,
    ) -> Self {
        let objects = elements.iter().map(MenuElement::as_widget).collect();
        let container = Rc::new(Container::new(
            context,
            VBoxLayout::new(context.theme().padding()),
            objects,
        ));
        let shadowing =
            ShadowingRenderer::new(context, vec![container.clone() as Rc<dyn Widget>], level);

        Self {
            shadowing,
            container,
            menu,
        }
    }

    /// The stack holding the menu rows.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The shadow behind the menu.
    pub fn shadow(&self) -> &Shadow {
        self.shadowing.shadow()
    }

    /// Run the layout loop for a proposed size and return how many passes it took.
    ///
    /// A pass whose target size differs from the menu's current size only
    /// resizes the menu; the following pass then finds the sizes in agreement
    /// and positions the shadow and the item stack.
    pub fn layout_passes(&self, proposed: Size) -> usize {
        let Some(menu) = self.menu.upgrade() else {
            return 0;
        };

        let mut proposed = proposed;
        for pass in 1..=MAX_LAYOUT_PASSES {
            let min = self.min_size();
            let target = if menu.is_custom_sized() {
                min.sup(&proposed)
            } else {
                min
            };

            if target != menu.size() {
                trace!(
                    "Menu {} resized from {:?} to {:?}",
                    menu.base().key(),
                    menu.size(),
                    target
                );
                menu.base().set_size(target);
                proposed = target;
                continue;
            }

            self.shadowing.layout_shadow(target, Position::zeros());
            let padding = self.padding();
            self.container.resize(target - padding);
            self.container.move_to(padding / 2.0);
            return pass;
        }

        warn!(
            "Menu {} layout did not settle after {} passes",
            menu.base().key(),
            MAX_LAYOUT_PASSES
        );
        MAX_LAYOUT_PASSES
    }

    fn padding(&self) -> Size {
        let padding = self.container.base().context().theme().padding();
        Size::new(0.0, padding * 2.0)
    }
}

impl WidgetRenderer for MenuRenderer {
    fn layout(&self, size: Size) {
        self.layout_passes(size);
    }

    fn min_size(&self) -> Size {
        self.container.min_size() + self.padding()
    }

    fn refresh(&self) {
        if let Some(menu) = self.menu.upgrade() {
            let base = menu.base();
            base.context().canvas().refresh(base.key());
        }
    }

    /// The shadow, the item stack and, on top, the open sub-menu if any.
    fn objects(&self) -> Vec<Rc<dyn Widget>> {
        let mut objects = self.shadowing.objects();
        if let Some(child) = self.menu.upgrade().and_then(|menu| menu.active_child()) {
            objects.push(Rc::new(child));
        }
        objects
    }
}
