//! Per-frame scratch lists built in a `StaticVector`.
//!
//! Each simulated frame gathers the sprites that intersect the viewport into
//! a fixed-capacity list, drops the ones hidden behind an opaque sprite, and
//! formats a status line into an inline byte buffer. Nothing here touches the
//! heap once the sprite table is built.
//!
//! Run with `RUST_LOG=debug cargo run --example frame_scratch`.

use std::io::Write;

use static_vector::StaticVector;

const MAX_VISIBLE: usize = 16;
const FRAMES: u32 = 8;

#[derive(Debug, Clone, Copy)]
struct Sprite {
    id: u16,
    x: i32,
    width: i32,
    depth: u8,
    opaque: bool,
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
    log::debug!("logging initialized");
}

fn sprite_table() -> Vec<Sprite> {
    (0..40u16)
        .map(|id| Sprite {
            id,
            x: i32::from(id) * 23 % 400 - 40,
            width: 16 + i32::from(id % 5) * 8,
            depth: (id % 7) as u8,
            opaque: id % 6 == 0,
        })
        .collect()
}

fn visible_sprites(sprites: &[Sprite], scroll: i32) -> StaticVector<Sprite, MAX_VISIBLE> {
    let mut visible = StaticVector::new();
    for sprite in sprites {
        let left = sprite.x - scroll;
        if left + sprite.width <= 0 || left >= 320 {
            continue;
        }
        if visible.push_within_capacity(*sprite).is_err() {
            log::warn!(
                "frame list full at {MAX_VISIBLE} sprites, skipping sprite {}",
                sprite.id
            );
        }
    }
    visible
}

/// Removes sprites drawn entirely behind an opaque sprite in front of them.
fn cull_hidden(visible: &mut StaticVector<Sprite, MAX_VISIBLE>) {
    let covers = |front: &Sprite, back: &Sprite| {
        front.opaque
            && front.depth < back.depth
            && front.x <= back.x
            && back.x + back.width <= front.x + front.width
    };

    let mut index = 0;
    while index < visible.len() {
        let back = visible[index];
        if visible.iter().any(|front| covers(front, &back)) {
            log::debug!("culling sprite {}", back.id);
            visible.erase_at(index);
        } else {
            index += 1;
        }
    }
}

fn main() -> std::io::Result<()> {
    init_logging();

    let sprites = sprite_table();
    for frame in 0..FRAMES {
        let scroll = frame as i32 * 12;
        let mut visible = visible_sprites(&sprites, scroll);
        let gathered = visible.len();
        cull_hidden(&mut visible);

        let mut status = StaticVector::<u8, 64>::new();
        write!(
            status,
            "frame {frame}: {} drawn, {} culled",
            visible.len(),
            gathered - visible.len()
        )?;
        log::info!("{}", String::from_utf8_lossy(&status));
    }

    Ok(())
}
