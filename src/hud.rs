//! The demo HUD: a status panel, a spinning badge tied to the panel's button
//! by a dashed connector, and a menu screen with a search field.

use overlay_gui::easing::{ease_in_out_sine, ease_out_back, ease_out_cubic};
use overlay_gui::elements::{LineEnd, ScreenElement};
use overlay_gui::{ui, Color, Key, Node, NodeId, SceneManager, Vec2};

pub const PANEL: &str = "panel";
pub const BUTTON: &str = "menu-button";
pub const BADGE: &str = "badge";
pub const MENU: &str = "menu";
pub const SEARCH: &str = "search";

const BUTTON_IDLE: Color = Color::rgba(40, 40, 40, 0.9);
const BUTTON_HOVER: Color = Color::rgba(90, 140, 220, 0.9);

/// Add every demo element to the scene
pub fn build(scene: &mut SceneManager) {
    scene.add(status_panel());
    scene.add(badge());
    scene.add(
        ui::line(LineEnd::from(NodeId::from(BUTTON)), LineEnd::from(NodeId::from(BADGE)))
            .with_id("connector")
            .with_color(Color::rgba(255, 255, 255, 0.6)),
    );
    scene.add(menu());
}

fn status_panel() -> Node {
    let button = ui::rectangle()
        .with_id(BUTTON)
        .with_size(70.0, 16.0)
        .with_align(Vec2::new(0.0, 1.0))
        .with_origin(Vec2::new(0.0, 1.0))
        .with_offset(6.0, -6.0)
        .with_color(BUTTON_IDLE)
        .with_child(ui::text("Menu").with_anchor(Vec2::splat(0.5)))
        .on_hover(|node, hover, _| {
            node.cancel_animations();
            let target = if hover.hovered { BUTTON_HOVER } else { BUTTON_IDLE };
            node.animate(0.25, ease_out_cubic, |state| state.color = target);
        })
        .on_left_click(|_, click, commands| {
            if click.pressed {
                log::info!("Menu button clicked at ({:.0}, {:.0})", click.x, click.y);
                commands.show(MENU);
            }
        });

    ui::rectangle()
        .with_id(PANEL)
        .with_size(160.0, 60.0)
        .with_offset(10.0, 10.0)
        .with_color(Color::rgba(0, 0, 0, 0.6))
        .with_stroke_color(Color::rgba(255, 255, 255, 0.3))
        .with_child(ui::color_text("&6Overlay &fstatus").with_offset(6.0, 6.0))
        .with_child(button)
}

fn badge() -> Node {
    ui::rectangle()
        .with_id(BADGE)
        .with_size(16.0, 16.0)
        .with_anchor(Vec2::new(1.0, 0.0))
        .with_offset(-24.0, 24.0)
        .with_color(Color::rgb(220, 60, 60))
        .setup(|node| {
            node.animate(1.0, ease_in_out_sine, |state| state.rotation.degrees = 180.0)
                .then(1.0, ease_in_out_sine, |state| state.rotation.degrees = 360.0)
                .looped();
        })
}

fn menu() -> Node {
    let screen = ScreenElement::new()
        .on_key(|key, commands| {
            if key.key == Key::Escape {
                commands.hide(MENU);
            }
        })
        .on_scroll(|scroll, _| {
            if let Some((index, id)) = &scroll.hovered {
                log::debug!("Scrolled {:.1} over child {index} ({id:?})", scroll.amount);
            }
        })
        .on_close(|| log::info!("Menu closed"));

    ui::screen(screen)
        .with_id(MENU)
        .with_child(
            ui::text("Search")
                .with_anchor(Vec2::splat(0.5))
                .with_offset(0.0, -20.0),
        )
        .with_child(ui::input().with_id(SEARCH).with_anchor(Vec2::splat(0.5)))
        .with_child(
            ui::rectangle()
                .with_id("menu-footer")
                .with_size(100.0, 4.0)
                .with_anchor(Vec2::splat(0.5))
                .with_offset(0.0, 16.0)
                .with_color(Color::WHITE)
                .setup(|node| {
                    node.state_mut().size.x = 0.0;
                    node.animate(0.5, ease_out_back, |state| state.size.x = 100.0);
                }),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_adds_every_element() {
        let mut scene = SceneManager::default();
        build(&mut scene);
        assert_eq!(scene.len(), 4);
        for id in [PANEL, BUTTON, BADGE, MENU, SEARCH] {
            assert!(scene.find(&NodeId::from(id)).is_some(), "missing {id}");
        }
        assert!(!scene.screen_open());
        assert_eq!(
            scene.find(&NodeId::from(BADGE)).map(|badge| badge.active_animations()),
            Some(1)
        );
    }
}
