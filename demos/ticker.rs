use ply_marquee::prelude::*;

const PALETTE: [Color; 6] = [RED, ORANGE, GOLD, LIME, SKYBLUE, VIOLET];

fn window_conf() -> Conf {
    Conf {
        window_title: "Marquee".to_owned(),
        window_width: 960,
        window_height: 480,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let tiles: Vec<Tile> = (0..10)
        .map(|i| Tile::new(PALETTE[i % PALETTE.len()], format!("Item {}", i + 1)))
        .collect();

    let mut config = MarqueeConfig::new().angle(-12.0).gap(24.0).hover_gap(56.0);
    let mut marquee = Marquee::new(tiles, config);
    marquee.report_size(ObservedRegion::Probe, Dimensions::new(140.0, 200.0));

    let mut commands: Vec<RenderCommand> = Vec::new();
    loop {
        if is_key_pressed(KeyCode::Escape) {
            marquee.unmount();
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            config = config.direction(!config.direction);
            marquee.set_config(config);
        }
        if is_key_pressed(KeyCode::Up) {
            config = config.angle((config.angle + 5.0).min(45.0));
            marquee.set_config(config);
        }
        if is_key_pressed(KeyCode::Down) {
            config = config.angle((config.angle - 5.0).max(-45.0));
            marquee.set_config(config);
        }
        if is_key_pressed(KeyCode::E) {
            let next = match config.hover_easing {
                Easing::Linear => Easing::EaseOut,
                Easing::EaseOut => Easing::Smoothstep,
                Easing::Smoothstep => Easing::Linear,
            };
            config = config.hover_easing(next);
            marquee.set_config(config);
        }

        let container = BoundingBox::new(0.0, 40.0, screen_width(), screen_height() - 80.0);
        marquee.report_size(
            ObservedRegion::Container,
            Dimensions::new(container.width, container.height),
        );

        let (mx, my) = mouse_position();
        let pointer = MarqueeVector2::new(mx - container.x, my - container.y);
        let inside = mx >= container.x
            && mx <= container.x + container.width
            && my >= container.y
            && my <= container.y + container.height;
        marquee.pointer_moved(inside.then_some(pointer), &commands);

        marquee.frame(get_time() * 1000.0, get_frame_time() as f64 * 1000.0, true);
        commands = marquee.render_commands();

        clear_background(Color::from_rgba(18, 18, 24, 255));
        render(&commands, marquee.items(), container, draw_tile);
        draw_text(
            &format!(
                "angle {:.0}  direction {}  easing {:?}  hovered {:?}   [space] reverse  [up/down] angle  [e] easing  [esc] quit",
                marquee.config().angle,
                marquee.config().direction,
                marquee.config().hover_easing,
                marquee.hovered().map(|slot| slot.virt_index()),
            ),
            12.0,
            24.0,
            20.0,
            LIGHTGRAY,
        );

        next_frame().await;
    }
}
